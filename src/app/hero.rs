use leptos::prelude::*;

use super::scroll::scroll_to_section;
use super::sections::Section;

const RESUME_URL: &str =
    "https://drive.google.com/file/d/1PnYurvjZzRQhvBGWYIHkSyLem9iwMxUa/view?usp=sharing";

#[component]
pub fn Hero(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Home.anchor()
            class=move || {
                if dark_mode() {
                    "min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900"
                } else {
                    "min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-white via-gray-50 to-white"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <h1 class=move || {
                    if dark_mode() {
                        "text-5xl md:text-7xl font-bold mb-6 text-white"
                    } else {
                        "text-5xl md:text-7xl font-bold mb-6 text-slate-900"
                    }
                }>"Ananya Tiwari"</h1>

                <div class="mb-8">
                    <h2 class=move || {
                        if dark_mode() {
                            "text-2xl md:text-3xl font-semibold mb-4 text-teal-400"
                        } else {
                            "text-2xl md:text-3xl font-semibold mb-4 text-teal-600"
                        }
                    }>"Full Stack Developer | DSA Enthusiast | MERN Stack Developer"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg md:text-xl max-w-3xl mx-auto leading-relaxed text-gray-300"
                        } else {
                            "text-lg md:text-xl max-w-3xl mx-auto leading-relaxed text-gray-600"
                        }
                    }>
                        "I'm a Computer Science undergraduate passionate about backend development, problem-solving, and building scalable full-stack web applications. I enjoy exploring technology through hands-on projects and am eager to contribute, grow, and make an impact in the tech world."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-teal-600 hover:bg-teal-700 text-white px-8 py-3 rounded-lg font-semibold shadow-lg transition-all duration-300"
                    >
                        "Resume"
                    </a>
                    <button
                        on:click=move |_| scroll_to_section(Section::Projects)
                        class=move || {
                            if dark_mode() {
                                "border-2 border-teal-400 text-teal-400 hover:bg-teal-400 hover:text-slate-900 px-8 py-3 rounded-lg font-semibold transition-all duration-300"
                            } else {
                                "border-2 border-teal-600 text-teal-600 hover:bg-teal-600 hover:text-white px-8 py-3 rounded-lg font-semibold transition-all duration-300"
                            }
                        }
                    >
                        "View Projects"
                    </button>
                    <button
                        on:click=move |_| scroll_to_section(Section::Contact)
                        class=move || {
                            if dark_mode() {
                                "bg-slate-800 hover:bg-slate-700 text-white px-8 py-3 rounded-lg font-semibold transition-all duration-300"
                            } else {
                                "bg-gray-100 hover:bg-gray-200 text-gray-900 px-8 py-3 rounded-lg font-semibold transition-all duration-300"
                            }
                        }
                    >
                        "Contact Me"
                    </button>
                </div>

                <div class="flex justify-center space-x-6">
                    <a
                        href="https://github.com/ananya272"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        class=move || {
                            if dark_mode() {
                                "p-3 rounded-full bg-slate-800 hover:bg-slate-700 text-gray-300 hover:text-white shadow-lg transition-all duration-300"
                            } else {
                                "p-3 rounded-full bg-white hover:bg-gray-50 text-gray-600 hover:text-gray-900 shadow-lg transition-all duration-300"
                            }
                        }
                    >
                        <i class="devicon-github-plain text-2xl"></i>
                    </a>
                    <a
                        href="https://linkedin.com/in/ananya-tiwari-98595028b"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        class=move || {
                            if dark_mode() {
                                "p-3 rounded-full bg-slate-800 hover:bg-slate-700 text-gray-300 hover:text-white shadow-lg transition-all duration-300"
                            } else {
                                "p-3 rounded-full bg-white hover:bg-gray-50 text-gray-600 hover:text-gray-900 shadow-lg transition-all duration-300"
                            }
                        }
                    >
                        <i class="devicon-linkedin-plain text-2xl"></i>
                    </a>
                </div>
            </div>

            // scroll indicator, hidden on mobile
            <div class="absolute bottom-6 left-1/2 -translate-x-1/2 hidden sm:block animate-bounce">
                <div class=move || {
                    if dark_mode() {
                        "w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center"
                    } else {
                        "w-6 h-10 border-2 border-gray-500 rounded-full flex justify-center"
                    }
                }>
                    <div class=move || {
                        if dark_mode() {
                            "w-1 h-3 bg-gray-400 rounded-full mt-2"
                        } else {
                            "w-1 h-3 bg-gray-500 rounded-full mt-2"
                        }
                    }></div>
                </div>
            </div>
        </section>
    }
}
