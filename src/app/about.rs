use leptos::prelude::*;

use super::sections::Section;

#[component]
pub fn About(dark_mode: Signal<bool>) -> impl IntoView {
    let body_class = move || {
        if dark_mode() {
            "text-lg md:text-xl text-gray-200 mb-4"
        } else {
            "text-lg md:text-xl text-gray-700 mb-4"
        }
    };

    view! {
        <section
            id=Section::About.anchor()
            class=move || {
                if dark_mode() {
                    "py-20 px-4 bg-gradient-to-b from-slate-900 to-slate-800 min-h-[60vh] flex items-center justify-center"
                } else {
                    "py-20 px-4 bg-gradient-to-b from-white to-gray-100 min-h-[60vh] flex items-center justify-center"
                }
            }
        >
            <div class="max-w-2xl mx-auto text-center">
                <h2 class=move || {
                    if dark_mode() {
                        "text-4xl font-bold mb-6 text-blue-400"
                    } else {
                        "text-4xl font-bold mb-6 text-blue-700"
                    }
                }>"About Me"</h2>
                <p class=body_class>
                    "\u{1f393} I'm a final-year " <b>"B.Tech CSE"</b> " student at "
                    <b>"GLA University"</b>
                    ", passionate about technology and continuously evolving as a developer. My current focus lies in learning web development and mastering Data Structures & Algorithms (DSA), while building a strong foundation in core computer science concepts."
                </p>
                <p class=body_class>
                    "\u{1f4bb} I enjoy exploring problem-solving and software development through hands-on projects and collaborative learning. I'm especially enthusiastic about full-stack development and the endless possibilities it brings to real-world solutions."
                </p>
                <p class=move || {
                    if dark_mode() {
                        "text-lg md:text-xl text-blue-300 font-semibold mt-6"
                    } else {
                        "text-lg md:text-xl text-blue-600 font-semibold mt-6"
                    }
                }>"Let's connect and grow together!"</p>
            </div>
        </section>
    }
}
