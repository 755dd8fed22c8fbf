//! Language detection by marker counting.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static FR_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:tous|toutes|chaque|sauf|lundis?|mardis?|mercredis?|jeudis?|vendredis?|samedis?|dimanches?|ouvr[eé]s?|semaines?|mois|ans?|entre|jusqu'?au|week-?end|janvier|f[eé]vrier|mars|avril|mai|juin|juillet|ao[uû]t|septembre|octobre|novembre|d[eé]cembre)\b",
    )
    .expect("Invalid regex")
});

static FR_CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d{1,2}h(?:\d{2})?\b").expect("Invalid regex"));

static FR_ACCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[àâçéèêëîïôûù]").expect("Invalid regex"));

static EN_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:every|except|monday|tuesday|wednesday|thursday|friday|saturday|sunday|weekday|weekend|between|until|january|february|march|april|may|june|july|august|september|october|november|december)\b",
    )
    .expect("Invalid regex")
});

/// Input language of a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// The pipeline to fall back to when this one fails.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Picks the pipeline for `text`.
///
/// French wins only when its markers strictly outnumber the English ones, so
/// empty and ambiguous input is treated as English.
#[must_use]
pub fn detect(text: &str) -> Language {
    let fr_hits = FR_KEYWORDS_RE.find_iter(text).count()
        + FR_CLOCK_RE.find_iter(text).count()
        + FR_ACCENT_RE.find_iter(text).count();
    let en_hits = EN_KEYWORDS_RE.find_iter(text).count();

    let language = if fr_hits > en_hits {
        Language::Fr
    } else {
        Language::En
    };
    tracing::trace!(fr_hits, en_hits, language = %language, "Detected language");
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_french() {
        assert_eq!(detect("Tous les jours à 10h"), Language::Fr);
        assert_eq!(detect("chaque lundi à 8h30"), Language::Fr);
        assert_eq!(detect("Le 2026-03-13 à 2h"), Language::Fr);
        assert_eq!(
            detect("Tous les jours ouvrés à 9h sauf les jours fériés"),
            Language::Fr
        );
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(detect("every day at 10:00"), Language::En);
        assert_eq!(
            detect("every month on the 1st at 09:00 if weekend then next monday"),
            Language::En
        );
        assert_eq!(detect("2026-03-13 at 02:00"), Language::En);
    }

    #[test]
    fn test_empty_and_ambiguous_default_to_english() {
        assert_eq!(detect(""), Language::En);
        assert_eq!(detect("   "), Language::En);
        // one marker each
        assert_eq!(detect("every mois"), Language::En);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Fr.to_string(), "fr");
        assert_eq!(Language::En.other(), Language::Fr);
    }
}
