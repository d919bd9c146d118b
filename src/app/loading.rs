use leptos::prelude::*;

/// Placeholder shown while the load gate is closed. Uses the current theme
/// palette but mounts none of the section content.
#[component]
pub fn LoadingScreen(dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if dark_mode() {
                "min-h-screen flex items-center justify-center bg-slate-900"
            } else {
                "min-h-screen flex items-center justify-center bg-white"
            }
        }>
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-teal-500 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <h2 class=move || {
                    if dark_mode() {
                        "text-2xl font-bold text-white"
                    } else {
                        "text-2xl font-bold text-slate-900"
                    }
                }>"Ananya Tiwari"</h2>
                <p class=move || {
                    if dark_mode() { "text-gray-400" } else { "text-gray-600" }
                }>"Loading Portfolio..."</p>
            </div>
        </div>
    }
}
