//! Visitor preferences: the page locale, kept in one process-wide slot that is
//! initialized exactly once at startup, and the reduced-motion media query.

use std::sync::atomic::{AtomicU8, Ordering};

use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::error::{self, DomError};

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("locale preference was already initialized")]
    AlreadyInitialized,
    #[error("locale preference used before initialization")]
    NotInitialized,
    #[error("local storage unavailable: {0}")]
    Storage(#[from] DomError),
    #[error("stored preferences are malformed: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Es => "ES",
        }
    }

    /// Accepts language tags like `es`, `es-MX` or `en_GB`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::ALL.into_iter().find(|locale| locale.tag() == primary)
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Self {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPrefs {
    locale: Locale,
}

struct LocaleStore(AtomicU8);

impl LocaleStore {
    fn new(locale: Locale) -> Self {
        Self(AtomicU8::new(locale.code()))
    }

    fn get(&self) -> Locale {
        Locale::from_code(self.0.load(Ordering::Relaxed))
    }

    fn set(&self, locale: Locale) {
        self.0.store(locale.code(), Ordering::Relaxed);
    }
}

static LOCALE: OnceCell<LocaleStore> = OnceCell::new();

pub fn initialize(locale: Locale) -> Result<Locale, PrefsError> {
    LOCALE
        .set(LocaleStore::new(locale))
        .map_err(|_| PrefsError::AlreadyInitialized)?;
    info!("Locale initialized to {}", locale.tag());
    Ok(locale)
}

pub fn current_locale() -> Locale {
    LOCALE.get().map(LocaleStore::get).unwrap_or_default()
}

pub fn set_locale(locale: Locale) -> Result<(), PrefsError> {
    LOCALE.get().ok_or(PrefsError::NotInitialized)?.set(locale);
    persist(locale)
}

fn encode_prefs(locale: Locale) -> Result<String, PrefsError> {
    Ok(serde_json::to_string(&StoredPrefs { locale })?)
}

fn decode_prefs(raw: &str) -> Result<Locale, PrefsError> {
    let prefs: StoredPrefs = serde_json::from_str(raw)?;
    Ok(prefs.locale)
}

fn storage() -> Result<web_sys::Storage, DomError> {
    error::window()?
        .local_storage()
        .map_err(|e| DomError::js("window.localStorage", e))?
        .ok_or(DomError::StorageUnavailable)
}

fn persist(locale: Locale) -> Result<(), PrefsError> {
    let encoded = encode_prefs(locale)?;
    storage()?
        .set_item(config::PREFS_STORAGE_KEY, &encoded)
        .map_err(|e| DomError::js("localStorage.setItem", e))?;
    debug!("Persisted locale {}", locale.tag());
    Ok(())
}

pub fn load_stored_locale() -> Result<Option<Locale>, PrefsError> {
    let raw = storage()?
        .get_item(config::PREFS_STORAGE_KEY)
        .map_err(|e| DomError::js("localStorage.getItem", e))?;
    raw.as_deref().map(decode_prefs).transpose()
}

fn browser_locale() -> Option<Locale> {
    let language = web_sys::window()?.navigator().language()?;
    Locale::from_tag(&language)
}

/// Stored choice first, then the browser language, then the default.
pub fn resolve_initial_locale() -> Locale {
    match load_stored_locale() {
        Ok(Some(locale)) => return locale,
        Ok(None) => {}
        Err(e) => warn!("Ignoring stored preferences: {}", e),
    }
    browser_locale().unwrap_or_default()
}

pub fn prefers_reduced_motion() -> bool {
    let query = error::window().and_then(|window| {
        window
            .match_media(config::REDUCED_MOTION_QUERY)
            .map_err(|e| DomError::js("window.matchMedia", e))
    });
    match query {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(e) => {
            debug!("Reduced motion query unavailable: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_ignore_region_and_case() {
        assert_eq!(Locale::from_tag("es"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::from_tag(" en-US "), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn stored_record_uses_lowercase_tags() {
        assert_eq!(encode_prefs(Locale::Es).unwrap(), r#"{"locale":"es"}"#);
        assert_eq!(decode_prefs(r#"{"locale":"en"}"#).unwrap(), Locale::En);
    }

    #[test]
    fn unknown_stored_locale_is_an_encoding_error() {
        assert!(matches!(
            decode_prefs(r#"{"locale":"fr"}"#),
            Err(PrefsError::Encoding(_))
        ));
        assert!(matches!(decode_prefs("not json"), Err(PrefsError::Encoding(_))));
    }

    #[test]
    fn store_reads_back_updates() {
        let store = LocaleStore::new(Locale::En);
        assert_eq!(store.get(), Locale::En);
        store.set(Locale::Es);
        assert_eq!(store.get(), Locale::Es);
    }

    #[test]
    fn global_locale_initializes_only_once() {
        // the only test touching the process-wide slot
        assert!(initialize(Locale::Es).is_ok());
        assert_eq!(current_locale(), Locale::Es);
        assert!(matches!(
            initialize(Locale::En),
            Err(PrefsError::AlreadyInitialized)
        ));
        assert_eq!(current_locale(), Locale::Es);
    }
}
