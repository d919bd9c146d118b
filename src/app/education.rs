use leptos::prelude::*;

use super::sections::Section;

struct SchoolEntry {
    institution: &'static str,
    degree: &'static str,
    duration: &'static str,
    description: &'static str,
}

const ENTRIES: &[SchoolEntry] = &[
    SchoolEntry {
        institution: "GLA University, Mathura",
        degree: "Bachelor of Technology \u{2013} Computer Science",
        duration: "2022\u{2013}2026",
        description: "Currently pursuing Computer Science with focus on software development, data structures, algorithms, and modern web technologies.",
    },
    SchoolEntry {
        institution: "St. Dominic's Sr. Sec. School, Mathura",
        degree: "PCM Stream",
        duration: "Graduated in 2022",
        description: "Completed higher secondary education with Physics, Chemistry, and Mathematics as core subjects.",
    },
];

#[component]
pub fn Education(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Education.anchor()
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
                    }>"Education"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"My academic journey in computer science and technology"</p>
                </div>

                <div class="space-y-8">
                    {ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class=move || {
                                    if dark_mode() {
                                        "bg-slate-900 rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-slate-700"
                                    } else {
                                        "bg-white rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-200"
                                    }
                                }>
                                    <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                                        <div class="flex-1">
                                            <div class="flex items-center gap-3 mb-3">
                                                <div class=move || {
                                                    if dark_mode() {
                                                        "p-3 rounded-lg bg-teal-500/20 text-teal-400"
                                                    } else {
                                                        "p-3 rounded-lg bg-teal-100 text-teal-600"
                                                    }
                                                }>"\u{1f393}"</div>
                                                <div>
                                                    <h3 class=move || {
                                                        if dark_mode() {
                                                            "text-xl font-bold text-white"
                                                        } else {
                                                            "text-xl font-bold text-slate-900"
                                                        }
                                                    }>{entry.institution}</h3>
                                                    <p class=move || {
                                                        if dark_mode() {
                                                            "text-teal-400 font-semibold"
                                                        } else {
                                                            "text-teal-600 font-semibold"
                                                        }
                                                    }>{entry.degree}</p>
                                                </div>
                                            </div>
                                            <p class=move || {
                                                if dark_mode() {
                                                    "text-gray-300 leading-relaxed"
                                                } else {
                                                    "text-gray-600 leading-relaxed"
                                                }
                                            }>{entry.description}</p>
                                        </div>
                                        <div class=move || {
                                            if dark_mode() {
                                                "flex items-center gap-2 mt-4 md:mt-0 md:ml-6 text-gray-400"
                                            } else {
                                                "flex items-center gap-2 mt-4 md:mt-0 md:ml-6 text-gray-500"
                                            }
                                        }>
                                            <span class="font-medium">{entry.duration}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
