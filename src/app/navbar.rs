use leptos::prelude::*;

use super::scroll::scroll_to_section;
use super::sections::Section;

/// Fixed top navigation. The theme toggle here is the only affordance that
/// can mutate the theme; everything else just scrolls.
#[component]
pub fn Navbar(dark_mode: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |section: Section, mobile: bool| {
        view! {
            <button
                on:click=move |_| {
                    scroll_to_section(section);
                    set_menu_open(false);
                }
                class=move || {
                    let base = if mobile {
                        "block w-full text-left px-4 py-2 font-medium"
                    } else {
                        "font-medium transition-colors duration-200"
                    };
                    if dark_mode() {
                        format!("{base} text-gray-300 hover:text-teal-400")
                    } else {
                        format!("{base} text-gray-700 hover:text-teal-600")
                    }
                }
            >
                {section.label()}
            </button>
        }
    };

    view! {
        <nav class=move || {
            if dark_mode() {
                "fixed top-0 w-full z-50 bg-slate-900/90 backdrop-blur border-b border-slate-700"
            } else {
                "fixed top-0 w-full z-50 bg-white/90 backdrop-blur border-b border-gray-200"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        on:click=move |_| scroll_to_section(Section::Home)
                        class=move || {
                            if dark_mode() {
                                "text-xl font-bold text-white hover:text-teal-400"
                            } else {
                                "text-xl font-bold text-slate-900 hover:text-teal-600"
                            }
                        }
                    >
                        "Ananya Tiwari"
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        {Section::NAV.into_iter().map(|s| nav_link(s, false)).collect_view()}
                        <ThemeToggle dark_mode on_toggle />
                    </div>

                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle dark_mode on_toggle />
                        <button
                            on:click=move |_| set_menu_open(!menu_open.get_untracked())
                            aria-label="Toggle menu"
                            class=move || {
                                if dark_mode() {
                                    "p-2 rounded-md text-gray-300 hover:bg-slate-800"
                                } else {
                                    "p-2 rounded-md text-gray-700 hover:bg-gray-100"
                                }
                            }
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                if menu_open() {
                    Some(
                        view! {
                            <div class=move || {
                                if dark_mode() {
                                    "md:hidden py-2 border-t border-slate-700"
                                } else {
                                    "md:hidden py-2 border-t border-gray-200"
                                }
                            }>
                                {Section::NAV.into_iter().map(|s| nav_link(s, true)).collect_view()}
                            </div>
                        },
                    )
                } else {
                    None
                }
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle(dark_mode: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_toggle.run(())
            aria-label="Toggle dark mode"
            class=move || {
                if dark_mode() {
                    "p-2 rounded-full bg-slate-800 hover:bg-slate-700 text-yellow-400"
                } else {
                    "p-2 rounded-full bg-gray-100 hover:bg-gray-200 text-slate-700"
                }
            }
        >
            {move || if dark_mode() { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }}
        </button>
    }
}
