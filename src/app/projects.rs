use leptos::prelude::*;

use super::sections::Section;

struct Project {
    title: &'static str,
    description: &'static str,
    tech_stack: &'static [&'static str],
    features: &'static [&'static str],
    date: &'static str,
    github: &'static str,
    demo: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Job Seeking Portal",
        description: "A comprehensive MERN stack application for job seekers and employers with real-time features and secure authentication.",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "WebSockets", "JWT", "bcrypt"],
        features: &[
            "Real-time job updates with WebSockets",
            "Secure login for users and employers",
            "Clean UI with dynamic job listings",
            "Advanced search and filter capabilities",
        ],
        date: "May 2024",
        github: "https://github.com/ananya272/Job-Portal",
        demo: "#",
    },
    Project {
        title: "Quiz Portal",
        description: "An interactive quiz platform with user authentication, progress tracking, and multiple question types with randomized questions.",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "JWT"],
        features: &[
            "Authentication with user progress tracking",
            "Multiple question types (MCQ, true/false, short answer)",
            "Timer functionality with randomized questions",
            "Comprehensive result analytics",
        ],
        date: "August 2024",
        github: "https://github.com/ananya272/Quiz-Portal.git",
        demo: "#",
    },
];

#[component]
pub fn Projects(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Projects.anchor()
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
                    }>"Projects"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>
                        "Full-stack applications showcasing my technical skills and problem-solving abilities"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project dark_mode /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if dark_mode() {
                "bg-slate-800 rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-slate-700 group"
            } else {
                "bg-gray-50 rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-200 group"
            }
        }>
            <div class="flex justify-between items-start mb-6">
                <div class="flex items-center gap-3">
                    <div class=move || {
                        if dark_mode() {
                            "p-3 rounded-lg bg-teal-500/20 text-teal-400"
                        } else {
                            "p-3 rounded-lg bg-teal-100 text-teal-600"
                        }
                    }>"\u{2328}\u{fe0f}"</div>
                    <div>
                        <h3 class=move || {
                            if dark_mode() {
                                "text-xl font-bold text-white"
                            } else {
                                "text-xl font-bold text-slate-900"
                            }
                        }>{project.title}</h3>
                        <span class=move || {
                            if dark_mode() { "text-sm text-gray-400" } else { "text-sm text-gray-500" }
                        }>{project.date}</span>
                    </div>
                </div>

                <div class="flex gap-3">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source on GitHub"
                        class=move || {
                            if dark_mode() {
                                "p-2 rounded-lg bg-slate-700 hover:bg-slate-600 text-gray-300 hover:text-white shadow transition-all duration-300"
                            } else {
                                "p-2 rounded-lg bg-white hover:bg-gray-100 text-gray-600 hover:text-gray-900 shadow transition-all duration-300"
                            }
                        }
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=project.demo
                        aria-label="Live demo"
                        class=move || {
                            if dark_mode() {
                                "p-2 rounded-lg bg-teal-500/20 hover:bg-teal-500/30 text-teal-400 transition-all duration-300"
                            } else {
                                "p-2 rounded-lg bg-teal-100 hover:bg-teal-200 text-teal-600 transition-all duration-300"
                            }
                        }
                    >
                        "\u{2197}"
                    </a>
                </div>
            </div>

            <p class=move || {
                if dark_mode() {
                    "text-gray-300 mb-6 leading-relaxed"
                } else {
                    "text-gray-600 mb-6 leading-relaxed"
                }
            }>{project.description}</p>

            <div class="mb-6">
                <h4 class=move || {
                    if dark_mode() { "font-semibold mb-3 text-white" } else { "font-semibold mb-3 text-slate-900" }
                }>"Key Features:"</h4>
                <ul class="space-y-2">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class=move || {
                                    if dark_mode() {
                                        "flex items-start gap-2 text-gray-300"
                                    } else {
                                        "flex items-start gap-2 text-gray-600"
                                    }
                                }>
                                    <div class=move || {
                                        if dark_mode() {
                                            "w-1.5 h-1.5 rounded-full mt-2 bg-teal-400"
                                        } else {
                                            "w-1.5 h-1.5 rounded-full mt-2 bg-teal-600"
                                        }
                                    }></div>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div>
                <h4 class=move || {
                    if dark_mode() { "font-semibold mb-3 text-white" } else { "font-semibold mb-3 text-slate-900" }
                }>"Tech Stack:"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    if dark_mode() {
                                        "px-3 py-1 rounded-full text-sm font-medium bg-slate-700 text-gray-300 shadow-sm"
                                    } else {
                                        "px-3 py-1 rounded-full text-sm font-medium bg-white text-gray-700 shadow-sm"
                                    }
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
