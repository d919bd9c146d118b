use leptos::prelude::*;

use super::sections::Section;

struct Profile {
    name: &'static str,
    username: &'static str,
    url: &'static str,
    icon: &'static str,
    description: &'static str,
    hover: (&'static str, &'static str),
}

const PROFILES: &[Profile] = &[
    Profile {
        name: "GitHub",
        username: "ananya272",
        url: "https://github.com/ananya272",
        icon: "devicon-github-plain",
        description: "Open source contributions and personal projects",
        hover: ("hover:bg-gray-600 border-gray-600", "hover:bg-gray-50 border-gray-300"),
    },
    Profile {
        name: "LinkedIn",
        username: "ananya-tiwari-98595028b",
        url: "https://linkedin.com/in/ananya-tiwari-98595028b",
        icon: "devicon-linkedin-plain",
        description: "Professional network and career updates",
        hover: ("hover:bg-blue-600 border-blue-600", "hover:bg-blue-50 border-blue-300"),
    },
    Profile {
        name: "LeetCode",
        username: "ananya_t27",
        url: "https://leetcode.com/ananya_t27",
        icon: "devicon-javascript-plain",
        description: "Data Structures & Algorithms problem solving",
        hover: ("hover:bg-orange-600 border-orange-600", "hover:bg-orange-50 border-orange-300"),
    },
    Profile {
        name: "HackerRank",
        username: "ananyatiwari_27",
        url: "https://hackerrank.com/ananyatiwari_27",
        icon: "devicon-java-plain",
        description: "Coding challenges and skill assessments",
        hover: ("hover:bg-green-600 border-green-600", "hover:bg-green-50 border-green-300"),
    },
];

const CONTACT_EMAIL: &str = "ananyatiwari577@gmail.com";

#[component]
pub fn OnlinePresence(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::OnlinePresence.anchor()
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
                    }>"Online Presence"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"Connect with me across various platforms and coding communities"</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {PROFILES
                        .iter()
                        .map(|profile| {
                            let (hover_dark, hover_light) = profile.hover;
                            view! {
                                <a
                                    href=profile.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=move || {
                                        if dark_mode() {
                                            format!(
                                                "bg-slate-900 rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 border-2 {hover_dark} group",
                                            )
                                        } else {
                                            format!(
                                                "bg-white rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 border-2 {hover_light} group",
                                            )
                                        }
                                    }
                                >
                                    <div class="flex flex-col items-center text-center">
                                        <div class=move || {
                                            if dark_mode() {
                                                "p-4 rounded-full mb-4 bg-slate-800 transition-all duration-300"
                                            } else {
                                                "p-4 rounded-full mb-4 bg-gray-100 transition-all duration-300"
                                            }
                                        }>
                                            <i class=move || {
                                                if dark_mode() {
                                                    format!("{} text-3xl text-gray-300", profile.icon)
                                                } else {
                                                    format!("{} text-3xl text-gray-600", profile.icon)
                                                }
                                            }></i>
                                        </div>

                                        <h3 class=move || {
                                            if dark_mode() {
                                                "text-lg font-bold mb-2 text-white"
                                            } else {
                                                "text-lg font-bold mb-2 text-slate-900"
                                            }
                                        }>{profile.name}</h3>

                                        <p class=move || {
                                            if dark_mode() {
                                                "text-sm font-mono mb-3 text-teal-400"
                                            } else {
                                                "text-sm font-mono mb-3 text-teal-600"
                                            }
                                        }>{format!("@{}", profile.username)}</p>

                                        <p class=move || {
                                            if dark_mode() {
                                                "text-sm text-gray-400 leading-relaxed"
                                            } else {
                                                "text-sm text-gray-500 leading-relaxed"
                                            }
                                        }>{profile.description}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    if dark_mode() {
                        "bg-slate-900 rounded-xl p-8 shadow-lg border border-slate-700"
                    } else {
                        "bg-white rounded-xl p-8 shadow-lg border border-gray-200"
                    }
                }>
                    <h3 class=move || {
                        if dark_mode() {
                            "text-2xl font-bold text-center mb-8 text-white"
                        } else {
                            "text-2xl font-bold text-center mb-8 text-slate-900"
                        }
                    }>"Get In Touch"</h3>

                    <div class="grid md:grid-cols-2 gap-6">
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class=move || {
                                if dark_mode() {
                                    "flex items-center gap-4 p-4 rounded-lg bg-slate-800 hover:bg-slate-700 transition-all duration-300 group"
                                } else {
                                    "flex items-center gap-4 p-4 rounded-lg bg-gray-50 hover:bg-gray-100 transition-all duration-300 group"
                                }
                            }
                        >
                            <div class=move || {
                                if dark_mode() {
                                    "p-3 rounded-lg bg-teal-500/20 text-teal-400"
                                } else {
                                    "p-3 rounded-lg bg-teal-100 text-teal-600"
                                }
                            }>"\u{2709}\u{fe0f}"</div>
                            <div>
                                <p class=move || {
                                    if dark_mode() {
                                        "font-semibold text-white"
                                    } else {
                                        "font-semibold text-slate-900"
                                    }
                                }>"Email"</p>
                                <p class=move || {
                                    if dark_mode() {
                                        "text-gray-300 group-hover:text-teal-500 transition-colors duration-300"
                                    } else {
                                        "text-gray-600 group-hover:text-teal-500 transition-colors duration-300"
                                    }
                                }>{CONTACT_EMAIL}</p>
                            </div>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
