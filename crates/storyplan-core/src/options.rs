use crate::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The selectable option sets, as label-indexed maps (key → display
/// label). Served by `GET /api/options` and consumed verbatim by the
/// presentation layer; `from_catalog` derives the sample-mode set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub themes: BTreeMap<String, String>,
    pub platforms: BTreeMap<String, String>,
    pub tones: BTreeMap<String, String>,
    pub pacings: BTreeMap<String, String>,
}

impl Options {
    /// Derive the option set from the static content catalog: theme and
    /// tone labels are the capitalized key, platform labels the display
    /// name, pacing labels the short pacing label.
    pub fn from_catalog() -> Self {
        Self {
            themes: catalog::THEMES
                .iter()
                .map(|t| (t.key.to_string(), capitalize(t.key)))
                .collect(),
            platforms: catalog::PLATFORMS
                .iter()
                .map(|p| (p.key.to_string(), p.name.to_string()))
                .collect(),
            tones: catalog::TONES
                .iter()
                .map(|t| (t.key.to_string(), capitalize(t.key)))
                .collect(),
            pacings: catalog::PACINGS
                .iter()
                .map(|p| (p.key.to_string(), p.label.to_string()))
                .collect(),
        }
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_labels_from_catalog() {
        let options = Options::from_catalog();
        assert_eq!(options.themes["education"], "Education");
        assert_eq!(options.themes["travel"], "Travel");
        assert_eq!(options.platforms["tiktok"], "TikTok");
        assert_eq!(options.platforms["reels"], "Instagram Reels");
        assert_eq!(options.tones["beginner"], "Beginner");
        assert_eq!(options.pacings["fast"], "Fast-paced");
    }

    #[test]
    fn covers_every_catalog_entry() {
        let options = Options::from_catalog();
        assert_eq!(options.themes.len(), catalog::THEMES.len());
        assert_eq!(options.platforms.len(), catalog::PLATFORMS.len());
        assert_eq!(options.tones.len(), catalog::TONES.len());
        assert_eq!(options.pacings.len(), catalog::PACINGS.len());
    }

    #[test]
    fn json_roundtrip() {
        let options = Options::from_catalog();
        let json = serde_json::to_string(&options).unwrap();
        let parsed: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(options, parsed);
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("education"), "Education");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }
}
