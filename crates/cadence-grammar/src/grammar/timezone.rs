//! IANA timezone lookup for the `in <zone>` suffix and IR (de)serialization.
//!
//! The zone database is compiled into `chrono-tz`; the case-insensitive index
//! over it is built once per process and only ever read afterwards.

use chrono_tz::{TZ_VARIANTS, Tz};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Zone used when a schedule has no `in <zone>` suffix.
pub const DEFAULT_TZ: Tz = Tz::Europe__Paris;

/// Lower-cased IANA name to zone.
static ZONES_BY_LOWERCASE_NAME: LazyLock<HashMap<String, Tz>> = LazyLock::new(|| {
    TZ_VARIANTS
        .iter()
        .map(|tz| (tz.name().to_ascii_lowercase(), *tz))
        .collect()
});

/// ## Summary
/// Resolves a zone name written by a human to a `chrono_tz::Tz`.
///
/// Accepts the canonical IANA spelling, any casing of it, stray whitespace,
/// backslashes in place of slashes, and the `/mozilla.org/` style prefixes
/// some calendar clients emit.
///
/// Returns `None` if the name is not in the IANA database.
#[must_use]
pub fn resolve_timezone(name: &str) -> Option<Tz> {
    let normalized = normalize_tzid(name);
    if normalized.is_empty() {
        return None;
    }

    if let Ok(tz) = Tz::from_str(&normalized) {
        return Some(tz);
    }

    let found = ZONES_BY_LOWERCASE_NAME
        .get(&normalized.to_ascii_lowercase())
        .copied();
    if found.is_none() {
        tracing::trace!(zone = %name, "Zone not found in IANA database");
    }
    found
}

fn normalize_tzid(tzid: &str) -> String {
    let trimmed = tzid.trim();
    let stripped = trimmed
        .strip_prefix("/mozilla.org/")
        .or_else(|| trimmed.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(trimmed);

    stripped
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '\\' { '/' } else { c })
        .collect()
}
