use leptos::prelude::*;

use super::sections::Section;

struct Internship {
    title: &'static str,
    company: &'static str,
    duration: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
}

const INTERNSHIPS: &[Internship] = &[
    Internship {
        title: "Full Stack Intern",
        company: "Coding Blocks",
        duration: "June\u{2013}July 2024",
        description: "Collaborated in a team of 4 developers to build a comprehensive full-stack MERN application within tight deadlines.",
        achievements: &[
            "Developed responsive user interfaces using React.js",
            "Implemented RESTful APIs with Node.js and Express",
            "Integrated MongoDB for efficient data management",
            "Successfully delivered project on time with team collaboration",
        ],
    },
    Internship {
        title: "Java Intern",
        company: "CodSoft",
        duration: "June 2024",
        description: "Completed intensive Java development internship focusing on core programming concepts and practical applications.",
        achievements: &[
            "Completed 3 comprehensive Java-based development tasks",
            "Enhanced problem-solving skills through hands-on coding",
            "Gained practical experience in Java application development",
            "Strengthened understanding of OOP principles",
        ],
    },
];

#[component]
pub fn Experience(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Experience.anchor()
            class=move || if dark_mode() { "py-20 bg-slate-900" } else { "py-20 bg-white" }
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        if dark_mode() {
                            "text-4xl md:text-5xl font-bold mb-4 text-white"
                        } else {
                            "text-4xl md:text-5xl font-bold mb-4 text-slate-900"
                        }
                    }>"Experience"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"Professional internships and hands-on development experience"</p>
                </div>

                <div class="relative">
                    // timeline line, desktop only
                    <div class=move || {
                        if dark_mode() {
                            "absolute left-8 top-0 bottom-0 w-0.5 bg-slate-700 hidden md:block"
                        } else {
                            "absolute left-8 top-0 bottom-0 w-0.5 bg-gray-300 hidden md:block"
                        }
                    }></div>

                    <div class="space-y-12">
                        {INTERNSHIPS
                            .iter()
                            .map(|exp| {
                                view! {
                                    <div class="relative md:ml-16">
                                        <div class=move || {
                                            if dark_mode() {
                                                "absolute -left-20 top-6 w-4 h-4 bg-teal-400 rounded-full border-4 border-slate-900 shadow-lg hidden md:block"
                                            } else {
                                                "absolute -left-20 top-6 w-4 h-4 bg-teal-600 rounded-full border-4 border-white shadow-lg hidden md:block"
                                            }
                                        }></div>

                                        <div class=move || {
                                            if dark_mode() {
                                                "bg-slate-800 rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-slate-700"
                                            } else {
                                                "bg-gray-50 rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-200"
                                            }
                                        }>
                                            <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-6">
                                                <div class="flex items-center gap-4 mb-4 md:mb-0">
                                                    <div class=move || {
                                                        if dark_mode() {
                                                            "p-3 rounded-lg bg-teal-500/20 text-teal-400"
                                                        } else {
                                                            "p-3 rounded-lg bg-teal-100 text-teal-600"
                                                        }
                                                    }>"\u{1f4bc}"</div>
                                                    <div>
                                                        <h3 class=move || {
                                                            if dark_mode() {
                                                                "text-xl font-bold text-white"
                                                            } else {
                                                                "text-xl font-bold text-slate-900"
                                                            }
                                                        }>{exp.title}</h3>
                                                        <p class=move || {
                                                            if dark_mode() {
                                                                "text-teal-400 font-semibold text-lg"
                                                            } else {
                                                                "text-teal-600 font-semibold text-lg"
                                                            }
                                                        }>{exp.company}</p>
                                                    </div>
                                                </div>

                                                <div class=move || {
                                                    if dark_mode() {
                                                        "flex items-center gap-2 text-gray-400 bg-slate-700 px-4 py-2 rounded-lg shadow-sm"
                                                    } else {
                                                        "flex items-center gap-2 text-gray-500 bg-white px-4 py-2 rounded-lg shadow-sm"
                                                    }
                                                }>
                                                    <span class="font-medium">{exp.duration}</span>
                                                </div>
                                            </div>

                                            <p class=move || {
                                                if dark_mode() {
                                                    "text-gray-300 mb-6 leading-relaxed"
                                                } else {
                                                    "text-gray-600 mb-6 leading-relaxed"
                                                }
                                            }>{exp.description}</p>

                                            <div>
                                                <h4 class=move || {
                                                    if dark_mode() {
                                                        "font-semibold mb-4 text-white"
                                                    } else {
                                                        "font-semibold mb-4 text-slate-900"
                                                    }
                                                }>"Key Achievements:"</h4>
                                                <div class="grid md:grid-cols-2 gap-3">
                                                    {exp.achievements
                                                        .iter()
                                                        .map(|achievement| {
                                                            view! {
                                                                <div class=move || {
                                                                    if dark_mode() {
                                                                        "flex items-start gap-3 p-3 rounded-lg bg-slate-700/50 shadow-sm"
                                                                    } else {
                                                                        "flex items-start gap-3 p-3 rounded-lg bg-white shadow-sm"
                                                                    }
                                                                }>
                                                                    <div class=move || {
                                                                        if dark_mode() {
                                                                            "w-2 h-2 rounded-full mt-2 bg-teal-400 flex-shrink-0"
                                                                        } else {
                                                                            "w-2 h-2 rounded-full mt-2 bg-teal-600 flex-shrink-0"
                                                                        }
                                                                    }></div>
                                                                    <span class=move || {
                                                                        if dark_mode() {
                                                                            "text-gray-300 text-sm leading-relaxed"
                                                                        } else {
                                                                            "text-gray-600 text-sm leading-relaxed"
                                                                        }
                                                                    }>{*achievement}</span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
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
