// SPDX-License-Identifier: MPL-2.0
//! Regional formatting conventions derived from the stored locale identifier.
//!
//! Resolved once at startup and handed to the view tree through the provider
//! bundle. A missing, short, or unrecognized identifier selects no convention
//! and the default formats apply.

use crate::store::{keys, PreferenceStore};

/// A regional formatting convention recognized by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionalConvention {
    /// Brazilian Portuguese: day-first dates, 24-hour clock.
    BrazilianPortuguese,
}

/// Date format used when no regional convention is selected.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used when no regional convention is selected.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

impl RegionalConvention {
    /// `chrono` format string for dates under this convention.
    #[must_use]
    pub fn date_format(self) -> &'static str {
        match self {
            RegionalConvention::BrazilianPortuguese => "%d/%m/%Y",
        }
    }

    /// `chrono` format string for times under this convention.
    #[must_use]
    pub fn time_format(self) -> &'static str {
        match self {
            RegionalConvention::BrazilianPortuguese => "%H:%M",
        }
    }
}

/// Date format for an optional convention.
#[must_use]
pub fn date_format_for(convention: Option<RegionalConvention>) -> &'static str {
    convention.map_or(DEFAULT_DATE_FORMAT, RegionalConvention::date_format)
}

/// Time format for an optional convention.
#[must_use]
pub fn time_format_for(convention: Option<RegionalConvention>) -> &'static str {
    convention.map_or(DEFAULT_TIME_FORMAT, RegionalConvention::time_format)
}

/// Resolves the regional convention from the stored locale identifier.
#[must_use]
pub fn resolve(store: &dyn PreferenceStore) -> Option<RegionalConvention> {
    from_identifier(&store.get(keys::LOCALE)?)
}

/// Matches a `xx-XX` shaped identifier against the recognized regional codes
/// by concatenating its language (bytes 0..2) and region (bytes 3..5) parts.
///
/// Identifiers shorter than five bytes, or ones whose byte ranges do not fall
/// on character boundaries, never fault; they select nothing.
#[must_use]
pub fn from_identifier(raw: &str) -> Option<RegionalConvention> {
    let language = raw.get(0..2)?;
    let region = raw.get(3..5)?;
    match format!("{language}{region}").as_str() {
        "ptBR" => Some(RegionalConvention::BrazilianPortuguese),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn brazilian_identifier_selects_convention() {
        assert_eq!(
            from_identifier("pt-BR"),
            Some(RegionalConvention::BrazilianPortuguese)
        );
    }

    #[test]
    fn separator_character_is_ignored() {
        // Only the fixed offsets matter, matching how the identifier is
        // sliced; an underscore separator still resolves.
        assert_eq!(
            from_identifier("pt_BR"),
            Some(RegionalConvention::BrazilianPortuguese)
        );
    }

    #[test]
    fn other_identifiers_select_nothing() {
        assert_eq!(from_identifier("en-US"), None);
        assert_eq!(from_identifier("pt-PT"), None);
        assert_eq!(from_identifier("fr"), None);
    }

    #[test]
    fn short_identifiers_never_fault() {
        assert_eq!(from_identifier(""), None);
        assert_eq!(from_identifier("pt"), None);
        assert_eq!(from_identifier("ptBR"), None);
    }

    #[test]
    fn multibyte_identifiers_never_fault() {
        assert_eq!(from_identifier("日本語です"), None);
    }

    #[test]
    fn resolve_reads_the_stored_identifier() {
        let store = MemoryStore::default();
        assert_eq!(resolve(&store), None);

        store.set(keys::LOCALE, "pt-BR").unwrap();
        assert_eq!(
            resolve(&store),
            Some(RegionalConvention::BrazilianPortuguese)
        );

        store.set(keys::LOCALE, "en-US").unwrap();
        assert_eq!(resolve(&store), None);
    }

    #[test]
    fn format_helpers_fall_back_to_defaults() {
        assert_eq!(date_format_for(None), DEFAULT_DATE_FORMAT);
        assert_eq!(
            date_format_for(Some(RegionalConvention::BrazilianPortuguese)),
            "%d/%m/%Y"
        );
        assert_eq!(time_format_for(None), DEFAULT_TIME_FORMAT);
    }
}
