use cadence_core::constants::IR_VERSION;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::rule::IrRule;

/// IR format version. Only `"1"` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IrVersion {
    #[default]
    #[serde(rename = "1")]
    V1,
}

impl IrVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => IR_VERSION,
        }
    }
}

/// Parsed schedule: a zone and the ordered list of rules evaluated in it.
///
/// Rule order is significant. It is the order the rules were written in, and
/// the engine breaks ties between rules by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrSchedule {
    #[serde(with = "zone_name")]
    pub tz: Tz,
    #[serde(default)]
    pub version: IrVersion,
    pub rules: Vec<IrRule>,
}

impl IrSchedule {
    #[must_use]
    pub const fn new(tz: Tz, rules: Vec<IrRule>) -> Self {
        Self {
            tz,
            version: IrVersion::V1,
            rules,
        }
    }

    /// ## Summary
    /// Serializes the schedule as pretty-printed JSON.
    ///
    /// ## Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// ## Summary
    /// Reads a schedule back from its JSON form.
    ///
    /// ## Errors
    /// Returns an error if the JSON is malformed, names an unknown zone, or
    /// carries an unsupported version.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Zones are written as their IANA name.
mod zone_name {
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::grammar::timezone::resolve_timezone;

    pub fn serialize<S: Serializer>(tz: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(tz.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tz, D::Error> {
        let name = String::deserialize(deserializer)?;
        resolve_timezone(&name).ok_or_else(|| D::Error::custom(format!("unknown timezone `{name}`")))
    }
}
