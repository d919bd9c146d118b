use codee::string::JsonSerdeWasmCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use leptos_use::use_preferred_dark;

/// localStorage key holding the persisted theme choice as a JSON boolean.
const THEME_STORAGE_KEY: &str = "darkMode";

/// Stored choice wins; with nothing stored (or an unreadable value, which
/// decodes to `None`) the environment's color-scheme preference applies.
fn resolve_theme(stored: Option<bool>, prefers_dark: bool) -> bool {
    stored.unwrap_or(prefers_dark)
}

/// Process-wide theme state. The storage signal is the source of truth, so
/// the persisted value and the in-memory value cannot drift apart: every
/// mutation goes through [`Theme::toggle`], which writes back to storage.
#[derive(Clone, Copy)]
pub struct Theme {
    dark_mode: Signal<bool>,
    set_stored: WriteSignal<Option<bool>>,
}

impl Theme {
    /// Read-only view of the resolved theme flag, for threading into
    /// presentational sections.
    pub fn dark_mode(&self) -> Signal<bool> {
        self.dark_mode
    }

    /// Flips the theme and persists the new choice. This is the only
    /// mutation path.
    pub fn toggle(&self) {
        let next = !self.dark_mode.get_untracked();
        self.set_stored.set(Some(next));
    }
}

/// Initializes theme state from the persisted preference (falling back to
/// the environment signal) and provides it as context.
pub fn provide_theme() -> Theme {
    let (stored, set_stored, _) =
        use_local_storage::<Option<bool>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let dark_mode = Signal::derive(move || resolve_theme(stored.get(), prefers_dark.get()));

    let theme = Theme {
        dark_mode,
        set_stored,
    };
    provide_context(theme);
    theme
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_applies_when_nothing_stored() {
        assert!(resolve_theme(None, true));
        assert!(!resolve_theme(None, false));
    }

    #[test]
    fn stored_choice_wins_over_environment() {
        assert!(resolve_theme(Some(true), false));
        assert!(!resolve_theme(Some(false), true));
        assert!(resolve_theme(Some(true), true));
        assert!(!resolve_theme(Some(false), false));
    }
}
