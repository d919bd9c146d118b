use leptos::prelude::*;

use super::scroll::scroll_to_top;

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/ananya272", "devicon-github-plain"),
    (
        "LinkedIn",
        "https://linkedin.com/in/ananya-tiwari-98595028b",
        "devicon-linkedin-plain",
    ),
    ("Email", "mailto:ananyatiwari577@gmail.com", "devicon-google-plain"),
];

#[component]
pub fn Footer(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <footer class=move || {
            if dark_mode() {
                "py-12 bg-slate-900 border-t border-slate-700"
            } else {
                "py-12 bg-gray-50 border-t border-gray-200"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col items-center space-y-8">
                    <button
                        on:click=move |_| scroll_to_top()
                        class=move || {
                            if dark_mode() {
                                "text-2xl font-bold text-white hover:text-teal-400 transition-colors duration-300"
                            } else {
                                "text-2xl font-bold text-slate-900 hover:text-teal-600 transition-colors duration-300"
                            }
                        }
                    >
                        "Ananya Tiwari"
                    </button>

                    <div class="flex space-x-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href, icon)| {
                                view! {
                                    <a
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=*label
                                        class=move || {
                                            if dark_mode() {
                                                "p-3 rounded-full bg-slate-800 hover:bg-slate-700 text-gray-300 hover:text-white shadow-lg hover:shadow-xl transition-all duration-300"
                                            } else {
                                                "p-3 rounded-full bg-white hover:bg-gray-100 text-gray-600 hover:text-gray-900 shadow-lg hover:shadow-xl transition-all duration-300"
                                            }
                                        }
                                    >
                                        <i class=format!("{icon} text-xl")></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-center max-w-2xl">
                        <p class=move || {
                            if dark_mode() {
                                "text-lg font-medium mb-2 text-gray-300"
                            } else {
                                "text-lg font-medium mb-2 text-gray-600"
                            }
                        }>
                            "\"Passionate about technology and continuously evolving as a developer\""
                        </p>
                    </div>

                    <div class=move || {
                        if dark_mode() {
                            "flex items-center space-x-2 text-sm text-gray-400"
                        } else {
                            "flex items-center space-x-2 text-sm text-gray-500"
                        }
                    }>
                        <span>
                            {format!("\u{a9} {} Made with \u{2764}\u{fe0f} by Ananya Tiwari", env!("BUILD_YEAR"))}
                        </span>
                    </div>

                    <div class=move || {
                        if dark_mode() {
                            "text-xs text-gray-500 text-center"
                        } else {
                            "text-xs text-gray-400 text-center"
                        }
                    }>"Built with Rust, Leptos & Tailwind CSS"</div>
                </div>
            </div>
        </footer>
    }
}
