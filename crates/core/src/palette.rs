//! Palette module - the closed set of colors the engine may spawn
//!
//! Order matters only for the fallback: when the chooser exhausts a full
//! pool rotation it places `first()`.

use crate::types::ColorToken;

/// Ordered list of distinct color tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<ColorToken>,
}

impl Palette {
    /// Create a palette, keeping the first occurrence of each key
    pub fn new(entries: impl IntoIterator<Item = ColorToken>) -> Self {
        let mut out: Vec<ColorToken> = Vec::new();
        for token in entries {
            if !out.contains(&token) {
                out.push(token);
            }
        }
        Self { entries: out }
    }

    /// An empty palette (degenerate; the engine falls back to a neutral token)
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&ColorToken> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&ColorToken> {
        self.entries.get(index)
    }

    /// Look up a token by key
    pub fn find(&self, key: &str) -> Option<&ColorToken> {
        self.entries.iter().find(|t| t.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorToken> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ColorToken] {
        &self.entries
    }
}

impl Default for Palette {
    /// The stock four-color palette
    fn default() -> Self {
        Self::new([
            ColorToken::new("red", "#ef4444"),
            ColorToken::new("green", "#22c55e"),
            ColorToken::new("blue", "#3b82f6"),
            ColorToken::new("yellow", "#facc15"),
        ])
    }
}

impl FromIterator<ColorToken> for Palette {
    fn from_iter<I: IntoIterator<Item = ColorToken>>(iter: I) -> Self {
        Self::new(iter)
    }
}
