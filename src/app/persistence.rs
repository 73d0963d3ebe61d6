// SPDX-License-Identifier: MPL-2.0
//! Preference persistence side effects.
//!
//! Writes go through the injected store port. A failed write degrades to
//! session-only behavior: the message lands on stderr and the app keeps the
//! in-memory value.

use crate::i18n::fluent::I18n;
use crate::store::{keys, PreferenceStore};
use crate::ui::theming::DisplayMode;
use unic_langid::LanguageIdentifier;

/// Writes the current display mode under its well-known key.
///
/// Called after every mode change, including the initial resolution, so the
/// most recent choice survives a restart. A write is skipped only when the
/// store already holds the exact value.
pub fn persist_display_mode(store: &dyn PreferenceStore, mode: DisplayMode) {
    let desired = mode.as_str();
    if store.get(keys::PREFERRED_THEME).as_deref() == Some(desired) {
        return;
    }
    if let Err(error) = store.set(keys::PREFERRED_THEME, desired) {
        eprintln!("Failed to persist display mode: {:?}", error);
    }
}

/// Applies the newly selected locale and persists its identifier.
pub fn apply_language_change(
    i18n: &mut I18n,
    store: &dyn PreferenceStore,
    locale: LanguageIdentifier,
) {
    i18n.set_locale(locale.clone());

    if let Err(error) = store.set(keys::LOCALE, &locale.to_string()) {
        eprintln!("Failed to persist language: {:?}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn persist_writes_the_mode_string() {
        let store = MemoryStore::default();
        persist_display_mode(&store, DisplayMode::Dark);
        assert_eq!(store.get(keys::PREFERRED_THEME), Some("dark".to_string()));

        persist_display_mode(&store, DisplayMode::Light);
        assert_eq!(store.get(keys::PREFERRED_THEME), Some("light".to_string()));
    }

    #[test]
    fn persist_overwrites_a_stale_value() {
        let store = MemoryStore::default();
        store.set(keys::PREFERRED_THEME, "sepia").unwrap();

        persist_display_mode(&store, DisplayMode::Light);
        assert_eq!(store.get(keys::PREFERRED_THEME), Some("light".to_string()));
    }

    #[test]
    fn language_change_persists_the_identifier() {
        let store = MemoryStore::default();
        let mut i18n = I18n::new(None, &store);

        apply_language_change(&mut i18n, &store, "pt-BR".parse().unwrap());
        assert_eq!(store.get(keys::LOCALE), Some("pt-BR".to_string()));
        assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    }
}
