use std::time::Duration;

use leptos::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// Process-wide notification slot. One toast visible at a time; a new one
/// replaces whatever is showing.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Option<Toast>>);

impl Toasts {
    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    fn show(&self, kind: ToastKind, text: String) {
        let slot = self.0;
        let toast = Toast { kind, text };
        slot.set(Some(toast.clone()));
        set_timeout(move || Self::dismiss(slot, &toast), DISMISS_AFTER);
    }

    /// Clears the slot only if it still holds the toast that scheduled the
    /// timer, so a stale timer can't cut a replacement toast short. Also
    /// tolerates the app having been torn down before the timer fires.
    fn dismiss(slot: RwSignal<Option<Toast>>, shown: &Toast) {
        let _ = slot.try_update(|current| {
            if current.as_ref() == Some(shown) {
                *current = None;
            }
        });
    }
}

pub fn provide_toasts() {
    provide_context(Toasts(RwSignal::new(None)));
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed bottom-6 right-6 z-50 pointer-events-none">
            {move || {
                toasts
                    .0
                    .get()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => {
                                "px-4 py-3 rounded-md shadow-lg bg-green/90 text-background"
                            }
                            ToastKind::Error => {
                                "px-4 py-3 rounded-md shadow-lg bg-red/90 text-background"
                            }
                        };
                        view! { <div class=class role="status">{toast.text}</div> }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(text: &str) -> Toast {
        Toast {
            kind: ToastKind::Error,
            text: text.to_string(),
        }
    }

    #[test]
    fn dismissal_clears_the_toast_that_scheduled_it() {
        let slot = RwSignal::new(Some(toast("only")));
        Toasts::dismiss(slot, &toast("only"));
        assert_eq!(slot.get_untracked(), None);
    }

    #[test]
    fn stale_dismissal_leaves_a_newer_toast_alone() {
        // First toast's timer fires after a second toast replaced it; the
        // second toast keeps its full time on screen.
        let slot = RwSignal::new(Some(toast("second")));
        Toasts::dismiss(slot, &toast("first"));
        assert_eq!(slot.get_untracked(), Some(toast("second")));
    }
}
