use leptos::{html, prelude::*, task::spawn_local};

use super::toast::use_toasts;
use crate::contact::{dispatch, site_channels, ContactMessage, DispatchOutcome, CONTACT_EMAIL};
use crate::data::RESUME;

#[component]
pub fn ContactSection() -> impl IntoView {
    let toasts = use_toasts();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (Some(name_el), Some(email_el), Some(subject_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };

        let msg = ContactMessage {
            name: name_el.value(),
            email: email_el.value(),
            subject: subject_el.value(),
            message: message_el.value(),
        };
        if !msg.is_complete() {
            toasts.error("Please fill in every field before sending.");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let outcome = dispatch(&site_channels(), &msg, open_mail_handler).await;
            match &outcome {
                DispatchOutcome::Delivered { .. } => {
                    toasts.success(
                        "Message sent successfully! I'll get back to you within 24 hours.",
                    );
                }
                DispatchOutcome::FallbackOpened => {
                    toasts.success(
                        "Opening your mail client with the message pre-filled. Just hit send!",
                    );
                }
                DispatchOutcome::Exhausted => {
                    toasts.error(format!(
                        "Something went wrong. Please contact me directly at {CONTACT_EMAIL}."
                    ));
                }
            }
            if outcome.is_success() {
                name_el.set_value("");
                email_el.set_value("");
                subject_el.set_value("");
                message_el.set_value("");
            }
            // The section may have unmounted while the cascade ran.
            let _ = set_submitting.try_set(false);
        });
    };

    let input_class = "w-full px-4 py-2 rounded-md border border-border/60 bg-background \
                       text-foreground focus:outline-none focus:ring-2 focus:ring-primary/60";

    view! {
        <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-10">
            <div>
                <h3 class="text-lg font-semibold mb-4">"Get in touch"</h3>
                <p class="text-foreground/70 mb-6">
                    "Whether you have a project in mind, a question about EdTech, or just \
                     want to say hello, my inbox is always open."
                </p>
                <p class="mb-6">
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="text-primary hover:underline">
                        {CONTACT_EMAIL}
                    </a>
                </p>
                <div class="flex flex-wrap gap-4">
                    {RESUME
                        .contact
                        .links()
                        .into_iter()
                        .map(|(label, url)| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener"
                                    class="px-4 py-2 rounded-md border border-border/60 hover:border-primary/60 transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <form on:submit=on_submit class="space-y-4">
                <input
                    node_ref=name_ref
                    type="text"
                    name="name"
                    placeholder="Your name"
                    class=input_class
                />
                <input
                    node_ref=email_ref
                    type="email"
                    name="email"
                    placeholder="Your email"
                    class=input_class
                />
                <input
                    node_ref=subject_ref
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    class=input_class
                />
                <textarea
                    node_ref=message_ref
                    name="message"
                    rows=5
                    placeholder="Your message"
                    class=input_class
                ></textarea>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-6 py-3 rounded-md bg-primary text-background font-medium \
                           hover:bg-primary/90 transition-colors disabled:opacity-50"
                >
                    {move || if submitting.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}

/// Hands a `mailto:` URL to the browser in the current tab. Reports failure
/// so the cascade can surface the address directly instead.
fn open_mail_handler(url: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.open_with_url_and_target(url, "_self").ok())
        .is_some()
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    #[test]
    fn settling_after_unmount_neither_panics_nor_wedges() {
        // The cascade runs detached in spawn_local; if the section unmounts
        // before it finishes, the submit-flag write must be a quiet no-op.
        let submitting = RwSignal::new(true);
        let set_submitting = submitting.write_only();
        assert_eq!(set_submitting.try_set(false), None);
        assert!(!submitting.get_untracked());

        let submitting = RwSignal::new(true);
        let set_submitting = submitting.write_only();
        submitting.dispose();
        assert_eq!(set_submitting.try_set(false), Some(false));
    }
}
