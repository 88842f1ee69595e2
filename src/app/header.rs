use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::data::RESUME;

/// Local-storage key for the persisted theme preference.
const DARK_MODE_KEY: &str = "darkMode";

const NAV_ITEMS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (dark, set_dark, _) = use_local_storage::<bool, JsonSerdeWasmCodec>(DARK_MODE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (dark, set_dark) = signal(false);

    // First visit has no stored preference, so follow the system theme.
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = leptos_use::use_media_query("(prefers-color-scheme: dark)");
        Effect::watch(
            || (),
            move |_, _, _| {
                let stored = window()
                    .local_storage()
                    .ok()
                    .flatten()
                    .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
                    .map(|_| dark.get_untracked());
                let seeded = initial_theme(stored, prefers_dark.get_untracked());
                if seeded != dark.get_untracked() {
                    set_dark.set(seeded);
                }
            },
            true,
        );
    }

    // Mirror the flag onto the document element so CSS can theme the whole
    // page. Effects only run on the client.
    Effect::new(move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        let class_list = root.class_list();
        let result = if dark.get() {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            log::warn!("couldn't toggle the theme class");
        }
    });

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/70 backdrop-blur-lg border-b border-border/30 shadow-lg">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#hero" class="text-xl font-semibold text-primary">
                        {RESUME.profile.name}
                    </a>
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-foreground/70 hover:text-foreground transition-colors duration-200"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <button
                        class="p-2 rounded-md hover:bg-muted/60 transition-colors"
                        aria-label="Toggle dark mode"
                        on:click=move |_| set_dark.set(!dark.get_untracked())
                    >
                        {move || if dark.get() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </header>
    }
}

/// A stored preference always wins; otherwise the system preference does.
fn initial_theme(stored: Option<bool>, prefers_dark: bool) -> bool {
    stored.unwrap_or(prefers_dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_wins_over_system_preference() {
        assert!(!initial_theme(Some(false), true));
        assert!(initial_theme(Some(true), false));
    }

    #[test]
    fn missing_key_falls_back_to_system_preference() {
        assert!(initial_theme(None, true));
        assert!(!initial_theme(None, false));
    }
}
