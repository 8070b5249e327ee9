use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use uuid::Uuid;

/// A loaded input file: the raw text used for substitution and the parsed
/// value used only for traversal.
#[derive(Debug, Clone)]
pub struct Document {
    pub raw: String,
    pub value: serde_json::Value,
}

/// UUID-shaped strings in first-encounter order, de-duplicated without regard to case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UuidSet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl UuidSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an equal entry (ignoring case) is already present.
    pub fn insert(&mut self, candidate: &str) -> bool {
        if !self.seen.insert(candidate.to_ascii_lowercase()) {
            return false;
        }
        self.entries.push(candidate.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub original: String,
    pub replacement: Uuid,
}

/// Original UUID to generated UUID, kept in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ReplacementMap {
    entries: Vec<Replacement>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一個 UUID（不分大小寫）只保留第一次的對應
    pub fn insert(&mut self, original: &str, replacement: Uuid) -> bool {
        let key = original.to_ascii_lowercase();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(Replacement {
            original: original.to_string(),
            replacement,
        });
        true
    }

    /// Case-insensitive lookup.
    pub fn get(&self, original: &str) -> Option<&Uuid> {
        self.index
            .get(&original.to_ascii_lowercase())
            .map(|&i| &self.entries[i].replacement)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Replacement> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw text after substitution.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub content: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplaceOutcome {
    pub output_path: PathBuf,
    pub written: bool,
    pub occurrences: usize,
    pub replacements: ReplacementMap,
}
