//! Deployment locales.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a locale code is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale '{0}' (expected one of: es, pt, en)")]
pub struct LocaleError(pub String);

/// Language every user-facing text of a deployment is written in.
///
/// Parsing accepts bare language codes and region-qualified tags
/// (`es-AR`, `pt_BR`), ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish.
    #[default]
    Es,
    /// Portuguese.
    Pt,
    /// English.
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 3] = [Self::Es, Self::Pt, Self::En];

    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Pt => "pt",
            Self::En => "en",
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
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Ok(Self::Es),
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            _ => Err(LocaleError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_tags() {
        assert_eq!("es-AR".parse::<Locale>(), Ok(Locale::Es));
        assert_eq!("pt_BR".parse::<Locale>(), Ok(Locale::Pt));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err, LocaleError("fr".to_string()));
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_code_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
    }
}
