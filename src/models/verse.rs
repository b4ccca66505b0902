use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Number of surahs in the mushaf
pub const SURAH_COUNT: u16 = 114;

/// Ayah count per surah (Hafs numbering), indexed by `surah - 1`
const AYAH_COUNTS: [u16; SURAH_COUNT as usize] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, 123, 111, 43, 52, 99, 128, 111, 110, 98, 135,
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, 34, 30, 73, 54, 45, 83, 182, 88, 75, 85, 54, 53,
    89, 59, 37, 35, 38, 29, 18, 45, 60, 49, 62, 55, 78, 96, 29, 22, 24, 13, 14, 11, 11, 18, 12,
    12, 30, 52, 52, 44, 28, 28, 20, 56, 40, 31, 50, 40, 46, 42, 29, 19, 36, 25, 22, 17, 19, 26,
    30, 20, 15, 21, 11, 8, 8, 19, 5, 8, 8, 11, 11, 8, 3, 9, 5, 4, 7, 3, 6, 3, 5, 4, 5, 6,
];

/// Returns the number of ayat in a surah, or `None` for an unknown surah
pub fn ayah_count(surah: u16) -> Option<u16> {
    if surah == 0 {
        return None;
    }
    AYAH_COUNTS.get(usize::from(surah) - 1).copied()
}

/// A single verse address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub surah: u16,
    pub ayah: u16,
}

/// Verse addressing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerseError {
    #[error("Surah must be between 1 and 114, got {0}")]
    SurahOutOfRange(i64),

    #[error("Surah {surah} has {count} ayat, got ayah {ayah}")]
    AyahOutOfRange { surah: u16, ayah: i64, count: u16 },

    #[error("Invalid verse reference '{0}' (expected SURAH:AYAH)")]
    Malformed(String),
}

impl VerseRef {
    /// Create a validated verse reference
    pub fn new(surah: i64, ayah: i64) -> Result<Self, VerseError> {
        let surah_num = u16::try_from(surah)
            .ok()
            .filter(|s| ayah_count(*s).is_some())
            .ok_or(VerseError::SurahOutOfRange(surah))?;

        // ayah_count is Some for every surah that passed the filter above
        let count = ayah_count(surah_num).unwrap_or(0);
        let ayah_num = u16::try_from(ayah)
            .ok()
            .filter(|a| (1..=count).contains(a))
            .ok_or(VerseError::AyahOutOfRange {
                surah: surah_num,
                ayah,
                count,
            })?;

        Ok(Self {
            surah: surah_num,
            ayah: ayah_num,
        })
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

impl FromStr for VerseRef {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (surah, ayah) = s
            .split_once(':')
            .ok_or_else(|| VerseError::Malformed(s.to_string()))?;
        let surah = surah
            .trim()
            .parse::<i64>()
            .map_err(|_| VerseError::Malformed(s.to_string()))?;
        let ayah = ayah
            .trim()
            .parse::<i64>()
            .map_err(|_| VerseError::Malformed(s.to_string()))?;
        Self::new(surah, ayah)
    }
}

/// Coerce a loosely-typed JSON value into an integer.
///
/// Accepts integers, finite floats (truncated toward zero), strings holding an
/// integer, and booleans as 1 or 0. Everything else is rejected.
pub fn parse_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
