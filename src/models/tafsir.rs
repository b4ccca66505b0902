use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Placeholder used whenever a commentary could not be fetched or was empty
pub const DATA_UNAVAILABLE_MESSAGE: &str =
    "Information from this source is currently unavailable or not found for this verse.";

/// Commentary sources published on the tafsir CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TafsirSource {
    /// Al-Wahidi's Asbab Al-Nuzul (occasions of revelation)
    Context,
    /// Tafsir Ibn Kathir
    Classical,
    /// Maarif-ul-Quran
    Modern,
}

impl TafsirSource {
    /// All sources, in prompt order
    pub const ALL: [Self; 3] = [Self::Context, Self::Classical, Self::Modern];

    /// Short key used in JSON output and logs
    pub const fn key(self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Classical => "classical",
            Self::Modern => "modern",
        }
    }

    /// Edition slug on the CDN
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Context => "en-kashf-al-asrar-tafsir",
            // upstream slug really is spelled "tafisr"
            Self::Classical => "en-tafisr-ibn-kathir",
            Self::Modern => "en-tafsir-maarif-ul-quran",
        }
    }

    /// Human-readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Context => "Al-Wahidi's Asbab Al-Nuzul",
            Self::Classical => "Tafsir Ibn Kathir",
            Self::Modern => "Maarif-ul-Quran",
        }
    }
}

impl fmt::Display for TafsirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Commentary text collected for one verse, keyed by source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TafsirBundle {
    entries: HashMap<TafsirSource, String>,
}

impl TafsirBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commentary; blank text is stored as the unavailable placeholder
    pub fn insert(&mut self, source: TafsirSource, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        let value = if trimmed.is_empty() {
            DATA_UNAVAILABLE_MESSAGE.to_string()
        } else {
            trimmed.to_string()
        };
        self.entries.insert(source, value);
    }

    pub fn mark_unavailable(&mut self, source: TafsirSource) {
        self.entries
            .insert(source, DATA_UNAVAILABLE_MESSAGE.to_string());
    }

    /// Commentary for a source, or the unavailable placeholder
    pub fn get(&self, source: TafsirSource) -> &str {
        self.entries
            .get(&source)
            .map_or(DATA_UNAVAILABLE_MESSAGE, String::as_str)
    }

    pub fn is_available(&self, source: TafsirSource) -> bool {
        self.get(source) != DATA_UNAVAILABLE_MESSAGE
    }

    /// Number of sources that returned real commentary
    pub fn available_count(&self) -> usize {
        TafsirSource::ALL
            .iter()
            .filter(|s| self.is_available(**s))
            .count()
    }
}
