use leptos::prelude::*;

use super::sections::Section;

/// Accent palette for a skill category card icon.
#[derive(Clone, Copy)]
enum Accent {
    Teal,
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl Accent {
    fn classes(&self, dark: bool) -> &'static str {
        match (self, dark) {
            (Accent::Teal, true) => "bg-teal-500/20 text-teal-400",
            (Accent::Teal, false) => "bg-teal-100 text-teal-600",
            (Accent::Blue, true) => "bg-blue-500/20 text-blue-400",
            (Accent::Blue, false) => "bg-blue-100 text-blue-600",
            (Accent::Green, true) => "bg-green-500/20 text-green-400",
            (Accent::Green, false) => "bg-green-100 text-green-600",
            (Accent::Purple, true) => "bg-purple-500/20 text-purple-400",
            (Accent::Purple, false) => "bg-purple-100 text-purple-600",
            (Accent::Orange, true) => "bg-orange-500/20 text-orange-400",
            (Accent::Orange, false) => "bg-orange-100 text-orange-600",
            (Accent::Red, true) => "bg-red-500/20 text-red-400",
            (Accent::Red, false) => "bg-red-100 text-red-600",
        }
    }
}

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
    accent: Accent,
}

const CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &["Python", "Java", "JavaScript", "C", "SQL"],
        accent: Accent::Teal,
    },
    SkillCategory {
        title: "Frontend",
        skills: &["React.js", "HTML5", "CSS3", "Tailwind CSS"],
        accent: Accent::Blue,
    },
    SkillCategory {
        title: "Backend",
        skills: &["Node.js", "Express.js", "RESTful APIs"],
        accent: Accent::Green,
    },
    SkillCategory {
        title: "Database",
        skills: &["MongoDB", "MySQL", "Database Design"],
        accent: Accent::Purple,
    },
    SkillCategory {
        title: "Tools & Version Control",
        skills: &["Git", "GitHub", "VS Code", "IntelliJ IDEA"],
        accent: Accent::Orange,
    },
    SkillCategory {
        title: "CS Concepts",
        skills: &["DSA", "OS", "DBMS", "ML", "OOPS"],
        accent: Accent::Red,
    },
];

const PROFICIENCY: &[(&str, u8)] = &[
    ("Frontend Development", 85),
    ("Backend Development", 80),
    ("Database Management", 75),
    ("Problem Solving (DSA)", 78),
];

#[component]
pub fn Skills(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Skills.anchor()
            class=move || if dark_mode() { "py-20 bg-slate-800" } else { "py-20 bg-gray-50" }
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        if dark_mode() {
                            "text-4xl md:text-5xl font-bold mb-4 text-white"
                        } else {
                            "text-4xl md:text-5xl font-bold mb-4 text-slate-900"
                        }
                    }>"Skills & Technologies"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"Technical expertise across the full development stack"</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            let accent = category.accent;
                            view! {
                                <div class=move || {
                                    if dark_mode() {
                                        "bg-slate-900 rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 border border-slate-700"
                                    } else {
                                        "bg-white rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-200"
                                    }
                                }>
                                    <div class="flex items-center gap-3 mb-6">
                                        <div class=move || {
                                            format!("p-3 rounded-lg {}", accent.classes(dark_mode()))
                                        }>"\u{2699}\u{fe0f}"</div>
                                        <h3 class=move || {
                                            if dark_mode() {
                                                "text-xl font-bold text-white"
                                            } else {
                                                "text-xl font-bold text-slate-900"
                                            }
                                        }>{category.title}</h3>
                                    </div>

                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class=move || {
                                                        if dark_mode() {
                                                            "px-3 py-2 rounded-lg text-sm font-medium bg-slate-800 text-gray-300 hover:bg-slate-700 transition-all duration-300 cursor-default"
                                                        } else {
                                                            "px-3 py-2 rounded-lg text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 transition-all duration-300 cursor-default"
                                                        }
                                                    }>{*skill}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16">
                    <h3 class=move || {
                        if dark_mode() {
                            "text-2xl font-bold text-center mb-8 text-white"
                        } else {
                            "text-2xl font-bold text-center mb-8 text-slate-900"
                        }
                    }>"Proficiency Level"</h3>
                    <div class="grid md:grid-cols-2 gap-6">
                        {PROFICIENCY
                            .iter()
                            .map(|(name, level)| {
                                view! {
                                    <div class=move || {
                                        if dark_mode() {
                                            "bg-slate-900 rounded-lg p-6 shadow-lg"
                                        } else {
                                            "bg-white rounded-lg p-6 shadow-lg"
                                        }
                                    }>
                                        <div class="flex justify-between items-center mb-3">
                                            <span class=move || {
                                                if dark_mode() {
                                                    "font-semibold text-white"
                                                } else {
                                                    "font-semibold text-slate-900"
                                                }
                                            }>{*name}</span>
                                            <span class=move || {
                                                if dark_mode() {
                                                    "text-sm text-gray-400"
                                                } else {
                                                    "text-sm text-gray-600"
                                                }
                                            }>{format!("{level}%")}</span>
                                        </div>
                                        <div class=move || {
                                            if dark_mode() {
                                                "w-full bg-slate-700 rounded-full h-2"
                                            } else {
                                                "w-full bg-gray-200 rounded-full h-2"
                                            }
                                        }>
                                            <div
                                                class="bg-gradient-to-r from-teal-500 to-teal-600 h-2 rounded-full"
                                                style:width=format!("{level}%")
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
