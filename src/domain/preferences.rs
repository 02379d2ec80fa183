//! News preferences: three independent multi-select sets over a fixed vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const TOPICS: [&str; 7] = [
    "general",
    "business",
    "entertainment",
    "health",
    "science",
    "sports",
    "technology",
];

pub const SOURCES: [&str; 12] = [
    "BBC News",
    "CNN",
    "Reuters",
    "The New York Times",
    "The Guardian",
    "Al Jazeera",
    "NPR",
    "ABC News",
    "CBS News",
    "NBC News",
    "Fox News",
    "MSNBC",
];

/// (code, display name)
pub const COUNTRIES: [(&str, &str); 10] = [
    ("us", "United States"),
    ("in", "India"),
    ("gb", "United Kingdom"),
    ("au", "Australia"),
    ("ca", "Canada"),
    ("de", "Germany"),
    ("fr", "France"),
    ("jp", "Japan"),
    ("cn", "China"),
    ("br", "Brazil"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceCategory {
    Countries,
    Topics,
    Sources,
}

impl PreferenceCategory {
    pub const ALL: [PreferenceCategory; 3] = [Self::Countries, Self::Topics, Self::Sources];

    pub fn title(self) -> &'static str {
        match self {
            Self::Countries => "Preferred Countries",
            Self::Topics => "Preferred Topics",
            Self::Sources => "Preferred Sources",
        }
    }

    /// `(value, label)` pairs in display order.
    pub fn vocabulary(self) -> Vec<(String, String)> {
        match self {
            Self::Countries => COUNTRIES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
            Self::Topics => TOPICS
                .iter()
                .map(|t| (t.to_string(), capitalize(t)))
                .collect(),
            Self::Sources => SOURCES
                .iter()
                .map(|s| (s.to_string(), s.to_string()))
                .collect(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Selected countries, topics and sources. Missing keys deserialize as empty sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub topics: BTreeSet<String>,
    #[serde(default)]
    pub sources: BTreeSet<String>,
    #[serde(default)]
    pub countries: BTreeSet<String>,
}

impl PreferenceSet {
    pub fn get(&self, category: PreferenceCategory) -> &BTreeSet<String> {
        match category {
            PreferenceCategory::Countries => &self.countries,
            PreferenceCategory::Topics => &self.topics,
            PreferenceCategory::Sources => &self.sources,
        }
    }

    fn get_mut(&mut self, category: PreferenceCategory) -> &mut BTreeSet<String> {
        match category {
            PreferenceCategory::Countries => &mut self.countries,
            PreferenceCategory::Topics => &mut self.topics,
            PreferenceCategory::Sources => &mut self.sources,
        }
    }

    pub fn contains(&self, category: PreferenceCategory, value: &str) -> bool {
        self.get(category).contains(value)
    }

    /// Include or exclude `value`. Adding a present member or removing an absent one is a no-op.
    pub fn toggle_member(&mut self, category: PreferenceCategory, value: &str, included: bool) {
        let set = self.get_mut(category);
        if included {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
    }
}
