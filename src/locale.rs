use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}")]
    Unsupported(String),
}

/// Display languages the content document carries a bundle for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Uk,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Uk, Locale::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Uk => "uk",
            Locale::Ru => "ru",
        }
    }

    /// Label shown on the switcher buttons.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Uk => "UK",
            Locale::Ru => "RU",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

/// Durable per-browser key/value slot holding the chosen locale code.
pub trait LocaleStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, code: &str);
}

/// Locale to start with: the persisted one when it is still supported.
pub fn restore<S: LocaleStore + ?Sized>(store: &S) -> Locale {
    store
        .get()
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

/// Validates `code`, then makes it active and persists it.
///
/// Unsupported codes leave both `active` and the store untouched.
pub fn select<S: LocaleStore + ?Sized>(
    store: &mut S,
    active: &mut Locale,
    code: &str,
) -> Result<Locale, LocaleError> {
    let locale = code.parse::<Locale>()?;
    *active = locale;
    store.set(locale.code());
    Ok(locale)
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore(pub Option<String>);

#[cfg(test)]
impl LocaleStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.clone()
    }

    fn set(&mut self, code: &str) {
        self.0 = Some(code.to_string());
    }
}
