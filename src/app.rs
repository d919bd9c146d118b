mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod loading;
mod navbar;
mod online_presence;
mod projects;
mod scroll;
mod sections;
mod skills;
mod theme;

use std::time::Duration;

use leptos::either::Either;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use loading::LoadingScreen;
use navbar::Navbar;
use online_presence::OnlinePresence;
use projects::Projects;
use scroll::scroll_to_top;
use skills::Skills;
use theme::{provide_theme, use_theme};

/// Delay before the load gate opens and the full page mounts.
const LOAD_GATE_DELAY: Duration = Duration::from_millis(1500);

/// One-way gate for the initial placeholder: starts closed and can only
/// ever open. There is no transition back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LoadGate {
    opened: bool,
}

impl LoadGate {
    fn is_closed(&self) -> bool {
        !self.opened
    }

    fn open(&mut self) {
        self.opened = true;
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = provide_theme();
    let dark_mode = theme.dark_mode();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ananya Tiwari - {title}") />

        // the `dark` class on <html> is the single style-scope marker all
        // Tailwind `dark:` variants key off of
        <Html attr:class=move || if dark_mode() { "dark" } else { "" } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Owns the load gate: a placeholder renders until a one-shot timer opens
/// the gate, after which the full section tree mounts for good.
#[component]
fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let dark_mode = theme.dark_mode();

    let (gate, set_gate) = signal(LoadGate::default());
    let load_timer = StoredValue::new(None::<TimeoutHandle>);

    // Effects only run on the client, so the timer never starts during SSR.
    Effect::new(move |_| {
        if load_timer.get_value().is_some() {
            return;
        }
        let open = move || set_gate.update(|g| g.open());
        if let Ok(handle) = set_timeout_with_handle(open, LOAD_GATE_DELAY) {
            load_timer.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = load_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <Title text="Portfolio" />
        {move || {
            if gate().is_closed() {
                Either::Left(view! { <LoadingScreen dark_mode /> })
            } else {
                Either::Right(
                    view! {
                        <div class=move || {
                            if dark_mode() {
                                "min-h-screen bg-slate-900 transition-colors duration-300"
                            } else {
                                "min-h-screen bg-white transition-colors duration-300"
                            }
                        }>
                            <Navbar dark_mode on_toggle=Callback::new(move |_| theme.toggle()) />
                            <Hero dark_mode />
                            <About dark_mode />
                            <main>
                                <Education dark_mode />
                                <Projects dark_mode />
                                <Skills dark_mode />
                                <Experience dark_mode />
                                <OnlinePresence dark_mode />
                                <Contact dark_mode />
                            </main>
                            <Footer dark_mode />
                            <ScrollTopButton dark_mode />
                        </div>
                    },
                )
            }
        }}
    }
}

#[component]
fn ScrollTopButton(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| scroll_to_top()
            aria-label="Scroll to top"
            class=move || {
                if dark_mode() {
                    "fixed bottom-6 right-6 p-3 rounded-full shadow-lg z-40 bg-teal-600 hover:bg-teal-700 text-white border border-slate-700 transition-all duration-300"
                } else {
                    "fixed bottom-6 right-6 p-3 rounded-full shadow-lg z-40 bg-white hover:bg-gray-50 text-gray-900 border border-gray-200 transition-all duration-300"
                }
            }
        >
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M5 10l7-7m0 0l7 7m-7-7v18"
                />
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_gate_starts_closed() {
        assert!(LoadGate::default().is_closed());
    }

    #[test]
    fn load_gate_opens_exactly_once_and_never_reverts() {
        let mut gate = LoadGate::default();
        gate.open();
        assert!(!gate.is_closed());

        // the timer only fires once, but even a repeat open cannot close it
        gate.open();
        assert!(!gate.is_closed());
    }
}
