//! Static timezone offset table.
//!
//! Zone symbols are resolved against a small fixed table of UTC offsets.
//! There is no IANA database behind this and daylight-saving time is ignored.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Built-in zone symbols and their UTC offsets in hours.
const BUILTIN_ZONES: &[(&str, f64)] = &[
    ("UTC", 0.0),
    ("GMT", 0.0),
    ("EST", -5.0),
    ("PST", -8.0),
    ("CST", -6.0),
    ("MST", -7.0),
    ("JST", 9.0),
    ("AEST", 10.0),
    ("CET", 1.0),
    ("IST", 5.5),
    ("HKT", 8.0),
    ("SGT", 8.0),
    ("CAT", 2.0),
    ("EAT", 3.0),
];

/// How unknown zone symbols are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneResolution {
    /// Unknown symbols resolve to offset 0.
    #[default]
    Lenient,
    /// Unknown symbols are reported as [`CoreError::UnrecognizedZone`].
    Strict,
}

/// One row of the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneEntry {
    pub symbol: &'static str,
    pub offset_hours: f64,
}

/// Immutable symbol to UTC-offset lookup table.
#[derive(Debug, Clone, Copy)]
pub struct ZoneTable {
    entries: &'static [(&'static str, f64)],
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ZoneTable {
    /// The built-in table.
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ZONES,
        }
    }

    /// Look up a symbol, returning `None` when it is not in the table.
    pub fn lookup(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == symbol)
            .map(|(_, offset)| *offset)
    }

    /// UTC offset in hours; unknown symbols silently fall back to 0.
    pub fn offset_hours(&self, symbol: &str) -> f64 {
        match self.lookup(symbol) {
            Some(offset) => offset,
            None => {
                tracing::debug!(symbol, "unknown zone symbol, falling back to UTC offset");
                0.0
            }
        }
    }

    /// Resolve a symbol according to the given resolution mode.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnrecognizedZone`] for unknown symbols in strict mode.
    pub fn resolve(&self, symbol: &str, mode: ZoneResolution) -> Result<f64> {
        match mode {
            ZoneResolution::Lenient => Ok(self.offset_hours(symbol)),
            ZoneResolution::Strict => self.lookup(symbol).ok_or_else(|| CoreError::UnrecognizedZone {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// All table rows in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = ZoneEntry> + '_ {
        self.entries.iter().map(|&(symbol, offset_hours)| ZoneEntry {
            symbol,
            offset_hours,
        })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }
}
