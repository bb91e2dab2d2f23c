use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceTag {
    Adventure,
    Culture,
    Food,
    Relaxation,
    Nature,
    Shopping,
}

impl PreferenceTag {
    pub const ALL: [PreferenceTag; 6] = [
        PreferenceTag::Adventure,
        PreferenceTag::Culture,
        PreferenceTag::Food,
        PreferenceTag::Relaxation,
        PreferenceTag::Nature,
        PreferenceTag::Shopping,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "adventure" => Some(PreferenceTag::Adventure),
            "culture" => Some(PreferenceTag::Culture),
            "food" => Some(PreferenceTag::Food),
            "relaxation" => Some(PreferenceTag::Relaxation),
            "nature" => Some(PreferenceTag::Nature),
            "shopping" => Some(PreferenceTag::Shopping),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceTag::Adventure => "adventure",
            PreferenceTag::Culture => "culture",
            PreferenceTag::Food => "food",
            PreferenceTag::Relaxation => "relaxation",
            PreferenceTag::Nature => "nature",
            PreferenceTag::Shopping => "shopping",
        }
    }

    /// Display label, also used as the theme of a themed day.
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceTag::Adventure => "Adventure",
            PreferenceTag::Culture => "Culture",
            PreferenceTag::Food => "Food",
            PreferenceTag::Relaxation => "Relaxation",
            PreferenceTag::Nature => "Nature",
            PreferenceTag::Shopping => "Shopping",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            PreferenceTag::Adventure => "Outdoor thrills and active excursions",
            PreferenceTag::Culture => "Museums, landmarks, and local heritage",
            PreferenceTag::Food => "Markets, tastings, and culinary experiences",
            PreferenceTag::Relaxation => "Spas, parks, and slow-paced days",
            PreferenceTag::Nature => "Gardens, trails, and scenic viewpoints",
            PreferenceTag::Shopping => "Bazaars, boutiques, and artisan shops",
        }
    }
}

/// Applied when a request arrives with no preferences selected.
pub fn default_preferences() -> Vec<PreferenceTag> {
    vec![PreferenceTag::Culture, PreferenceTag::Food]
}
