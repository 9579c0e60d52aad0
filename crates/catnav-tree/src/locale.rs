//! Language fallback for translated labels and product names.

use catnav_core::Localized;

use crate::error::NavError;

/// The requested language paired with the site's base language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    target: String,
    fallback: String,
}

impl Locale {
    /// # Errors
    ///
    /// Returns [`NavError::BlankLanguage`] if either code is empty or whitespace.
    pub fn new(target: impl Into<String>, fallback: impl Into<String>) -> Result<Self, NavError> {
        let target = target.into().trim().to_string();
        let fallback = fallback.into().trim().to_string();
        if target.is_empty() {
            return Err(NavError::BlankLanguage { role: "target" });
        }
        if fallback.is_empty() {
            return Err(NavError::BlankLanguage { role: "fallback" });
        }
        Ok(Self { target, fallback })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Picks the text for `locale` out of `entries`.
///
/// Resolution order:
/// 1. the entry in the target language
/// 2. the entry in the fallback language
/// 3. the first entry
/// 4. `default` when there are no entries at all
///
/// Within one language the first matching entry wins.
#[must_use]
pub fn resolve_text<'a, T: Localized>(entries: &'a [T], locale: &Locale, default: &'a str) -> &'a str {
    entries
        .iter()
        .find(|e| e.lang_code() == locale.target())
        .or_else(|| entries.iter().find(|e| e.lang_code() == locale.fallback()))
        .or_else(|| entries.first())
        .map_or(default, T::text)
}
