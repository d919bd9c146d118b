use std::time::Duration;

use leptos::either::Either;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::sections::Section;

/// Simulated delivery time for the stubbed submission.
const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the success or error banner stays up before returning to neutral.
const STATUS_RESET_DELAY: Duration = Duration::from_millis(5000);

const SUBJECTS: &[(&str, &str)] = &[
    ("job-opportunity", "Job Opportunity"),
    ("collaboration", "Collaboration"),
    ("project-inquiry", "Project Inquiry"),
    ("general", "General Inquiry"),
];

/// Ephemeral form fields. This is also the payload a real submission
/// endpoint would receive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email, and message are required; subject never gates submission.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message could not be delivered")]
    Delivery,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Stand-in for a real form endpoint. Always succeeds today; a genuine
/// implementation would POST the payload and surface delivery failures
/// as [`SubmitError`].
fn deliver(form: &ContactForm) -> Result<(), SubmitError> {
    let payload = serde_json::to_string(form).map_err(|_| SubmitError::Delivery)?;
    log::debug!("contact payload (not sent): {payload}");
    Ok(())
}

/// Submission is allowed only for a valid form with no delivery in flight.
fn can_submit(form: &ContactForm, status: SubmitStatus) -> bool {
    form.is_valid() && status != SubmitStatus::Submitting
}

fn next_status(result: Result<(), SubmitError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Success,
        Err(_) => SubmitStatus::Error,
    }
}

#[component]
pub fn Contact(dark_mode: Signal<bool>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(SubmitStatus::default());

    let submit_timer = StoredValue::new(None::<TimeoutHandle>);
    let reset_timer = StoredValue::new(None::<TimeoutHandle>);
    on_cleanup(move || {
        for timer in [submit_timer, reset_timer] {
            if let Some(handle) = timer.get_value() {
                handle.clear();
            }
        }
    });

    let submit_enabled = move || form.with(|f| can_submit(f, status.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| can_submit(f, status.get_untracked())) {
            return;
        }
        set_status(SubmitStatus::Submitting);
        let handle = set_timeout_with_handle(
            move || {
                let result = form.with_untracked(deliver);
                if let Err(err) = &result {
                    log::warn!("contact submission failed: {err}");
                }
                let next = next_status(result);
                set_status(next);
                if next == SubmitStatus::Success {
                    form.set(ContactForm::default());
                }
                if let Ok(handle) =
                    set_timeout_with_handle(move || set_status(SubmitStatus::Idle), STATUS_RESET_DELAY)
                {
                    reset_timer.set_value(Some(handle));
                }
            },
            SUBMIT_DELAY,
        );
        if let Ok(handle) = handle {
            submit_timer.set_value(Some(handle));
        }
    };

    let input_class = move || {
        if dark_mode() {
            "w-full px-4 py-3 rounded-lg border bg-slate-900 border-slate-600 text-white focus:border-teal-400 focus:ring-2 focus:ring-teal-500/20 transition-all duration-300"
        } else {
            "w-full px-4 py-3 rounded-lg border bg-white border-gray-300 text-gray-900 focus:border-teal-500 focus:ring-2 focus:ring-teal-500/20 transition-all duration-300"
        }
    };
    let label_class = move || {
        if dark_mode() {
            "block text-sm font-medium mb-2 text-white"
        } else {
            "block text-sm font-medium mb-2 text-slate-900"
        }
    };

    view! {
        <section
            id=Section::Contact.anchor()
            class=move || if dark_mode() { "py-20 bg-slate-900" } else { "py-20 bg-white" }
        >
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        if dark_mode() {
                            "text-4xl md:text-5xl font-bold mb-4 text-white"
                        } else {
                            "text-4xl md:text-5xl font-bold mb-4 text-slate-900"
                        }
                    }>"Let's Work Together"</h2>
                    <p class=move || {
                        if dark_mode() {
                            "text-lg text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-lg text-gray-600 max-w-2xl mx-auto"
                        }
                    }>
                        "I'm always interested in new opportunities and collaborations. Drop me a message and let's discuss how we can work together!"
                    </p>
                </div>

                <div class=move || {
                    if dark_mode() {
                        "bg-slate-800 rounded-xl p-8 shadow-lg border border-slate-700"
                    } else {
                        "bg-gray-50 rounded-xl p-8 shadow-lg border border-gray-200"
                    }
                }>
                    <form on:submit=on_submit class="space-y-6">
                        <div class="grid md:grid-cols-2 gap-6">
                            <div>
                                <label for="name" class=label_class>
                                    "Full Name *"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    placeholder="Your full name"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.name = event_target_value(&ev))
                                    }
                                    class=input_class
                                />
                            </div>
                            <div>
                                <label for="email" class=label_class>
                                    "Email Address *"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    placeholder="your.email@example.com"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.email = event_target_value(&ev))
                                    }
                                    class=input_class
                                />
                            </div>
                        </div>

                        <div>
                            <label for="subject" class=label_class>
                                "Subject"
                            </label>
                            <select
                                id="subject"
                                prop:value=move || form.with(|f| f.subject.clone())
                                on:change=move |ev| {
                                    form.update(|f| f.subject = event_target_value(&ev))
                                }
                                class=input_class
                            >
                                <option value="">"Select a subject"</option>
                                {SUBJECTS
                                    .iter()
                                    .map(|(value, label)| {
                                        view! { <option value=*value>{*label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div>
                            <label for="message" class=label_class>
                                "Message *"
                            </label>
                            <textarea
                                id="message"
                                rows="6"
                                placeholder="Tell me about your project, opportunity, or just say hello!"
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.message = event_target_value(&ev))
                                }
                                class=input_class
                            ></textarea>
                        </div>

                        {move || match status() {
                            SubmitStatus::Success => {
                                Some(
                                    Either::Left(
                                        view! {
                                            <div class=move || {
                                                if dark_mode() {
                                                    "flex items-center gap-3 p-4 rounded-lg bg-green-900/50 text-green-400"
                                                } else {
                                                    "flex items-center gap-3 p-4 rounded-lg bg-green-50 text-green-700"
                                                }
                                            }>
                                                <span>
                                                    "Message sent successfully! I'll get back to you soon."
                                                </span>
                                            </div>
                                        },
                                    ),
                                )
                            }
                            SubmitStatus::Error => {
                                Some(
                                    Either::Right(
                                        view! {
                                            <div class=move || {
                                                if dark_mode() {
                                                    "flex items-center gap-3 p-4 rounded-lg bg-red-900/50 text-red-400"
                                                } else {
                                                    "flex items-center gap-3 p-4 rounded-lg bg-red-50 text-red-700"
                                                }
                                            }>
                                                <span>
                                                    "Failed to send message. Please try again or contact me directly."
                                                </span>
                                            </div>
                                        },
                                    ),
                                )
                            }
                            _ => None,
                        }}

                        <div class="text-center">
                            <button
                                type="submit"
                                prop:disabled=move || !submit_enabled()
                                class=move || {
                                    if submit_enabled() {
                                        "px-8 py-4 rounded-lg font-semibold flex items-center gap-3 mx-auto transition-all duration-300 bg-teal-600 hover:bg-teal-700 text-white shadow-lg hover:shadow-xl"
                                    } else if dark_mode() {
                                        "px-8 py-4 rounded-lg font-semibold flex items-center gap-3 mx-auto transition-all duration-300 bg-slate-700 text-gray-400 cursor-not-allowed"
                                    } else {
                                        "px-8 py-4 rounded-lg font-semibold flex items-center gap-3 mx-auto transition-all duration-300 bg-gray-300 text-gray-500 cursor-not-allowed"
                                    }
                                }
                            >
                                {move || {
                                    if status() == SubmitStatus::Submitting {
                                        Either::Left(
                                            view! {
                                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                "Sending..."
                                            },
                                        )
                                    } else {
                                        Either::Right("Send Message")
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "general".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn empty_form_is_invalid() {
        assert!(!ContactForm::default().is_valid());
    }

    #[test]
    fn required_fields_gate_submission() {
        let mut form = filled_form();
        form.name.clear();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.email.clear();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.message.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled_form();
        form.name = " ".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn subject_never_gates_submission() {
        let mut form = filled_form();
        form.subject.clear();
        assert!(form.is_valid());
    }

    #[test]
    fn simulated_delivery_always_succeeds() {
        assert_eq!(deliver(&filled_form()), Ok(()));
    }

    #[test]
    fn default_status_is_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    }

    #[test]
    fn status_walks_idle_submitting_success_idle() {
        let form = filled_form();

        let status = SubmitStatus::default();
        assert_eq!(status, SubmitStatus::Idle);
        assert!(can_submit(&form, status));

        // in flight: further submissions are blocked
        let status = SubmitStatus::Submitting;
        assert!(!can_submit(&form, status));

        let status = next_status(deliver(&form));
        assert_eq!(status, SubmitStatus::Success);

        // after the banner delay the status returns to neutral
        let status = SubmitStatus::Idle;
        assert!(can_submit(&form, status));
    }

    #[test]
    fn delivery_failure_maps_to_error_status() {
        assert_eq!(
            next_status(Err(SubmitError::Delivery)),
            SubmitStatus::Error
        );
    }
}
