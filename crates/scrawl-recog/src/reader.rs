//! The Reader - public recognition contract
//!
//! A [`Reader`] owns the recognition configuration (language, template
//! dictionary, background color, matching policy) and orchestrates the
//! pipeline per call: segment the raster into character regions,
//! normalize each region, classify the resulting pattern.
//!
//! Recognition misses are not errors: a glyph matching no template
//! contributes the [`UNRECOGNIZED`] sentinel instead of failing the
//! whole line.

use crate::error::RecogResult;
use crate::normalize::normalize;
use crate::segment::segment;
use crate::template::{GlyphPattern, TemplateDict, TemplateStore};
use scrawl_core::{Color, Raster};
use std::collections::BTreeMap;
use std::path::Path;

/// Sentinel character emitted for a glyph matching no template.
pub const UNRECOGNIZED: char = '?';

/// Language loaded when none is specified.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Policy for matching a normalized glyph against the dictionary.
///
/// Legacy language packs register one singleton pattern per trained
/// coordinate rather than one whole-shape pattern per character, so
/// exact set equality can only ever match one-cell glyphs against them.
/// The rule is therefore an explicit choice, not an accident of the
/// data representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// Whole-pattern set equality against dictionary keys.
    Exact,
    /// Every dictionary entry whose key is a subset of the glyph casts
    /// one vote per key cell for its character; the highest total wins,
    /// ties go to the smaller character. Zero votes is a miss.
    #[default]
    CoordinateVote,
}

/// Reads a line of handwritten text off a raster.
///
/// Construction loads the template dictionary for the configured
/// language; [`set_language`](Self::set_language) replaces it
/// atomically, leaving the previous configuration untouched on failure.
#[derive(Debug)]
pub struct Reader {
    store: TemplateStore,
    language: String,
    background: Color,
    templates: TemplateDict,
    matching: MatchRule,
}

impl Reader {
    /// Create a reader with the default language ([`DEFAULT_LANGUAGE`])
    /// and a white background.
    pub fn new(store: TemplateStore) -> RecogResult<Self> {
        Self::with_config(store, DEFAULT_LANGUAGE, Color::WHITE)
    }

    /// Create a reader for the given language and background color.
    ///
    /// # Errors
    ///
    /// Fails with the [`TemplateStore::load`] errors if the language
    /// pack is missing or malformed.
    pub fn with_config(
        store: TemplateStore,
        language: &str,
        background: Color,
    ) -> RecogResult<Self> {
        let templates = store.load(language)?;
        Ok(Self {
            store,
            language: language.to_string(),
            background,
            templates,
            matching: MatchRule::default(),
        })
    }

    /// Switch to another language.
    ///
    /// The new dictionary is loaded completely before anything is
    /// replaced; on failure the reader keeps its previous language and
    /// dictionary unchanged.
    pub fn set_language(&mut self, language: &str) -> RecogResult<()> {
        let templates = self.store.load(language)?;
        self.templates = templates;
        self.language = language.to_string();
        Ok(())
    }

    /// Currently loaded language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the background color; all other pixels count as ink.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Current background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Set the glyph matching policy.
    pub fn set_matching(&mut self, matching: MatchRule) {
        self.matching = matching;
    }

    /// Current glyph matching policy.
    pub fn matching(&self) -> MatchRule {
        self.matching
    }

    /// Currently loaded template dictionary.
    pub fn templates(&self) -> &TemplateDict {
        &self.templates
    }

    /// Read the text pictured in `raster`, left to right.
    ///
    /// Returns the empty string for a blank raster. Unmatched glyphs
    /// come back as [`UNRECOGNIZED`]; well-formed input never fails.
    pub fn read(&self, raster: &Raster) -> String {
        let mut text = String::new();
        for span in segment(raster, self.background) {
            let pattern = normalize(raster, span, self.background);
            text.push(self.classify(&pattern).unwrap_or(UNRECOGNIZED));
        }
        text
    }

    /// Decode the image file at `path` and read its text.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::RecogError::Decode`] if the file cannot be
    /// opened or decoded.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> RecogResult<String> {
        let raster = scrawl_io::read_raster(path)?;
        Ok(self.read(&raster))
    }

    /// Match one normalized pattern against the dictionary.
    fn classify(&self, pattern: &GlyphPattern) -> Option<char> {
        match self.matching {
            MatchRule::Exact => self.templates.get(pattern),
            MatchRule::CoordinateVote => {
                let mut votes: BTreeMap<char, usize> = BTreeMap::new();
                for (key, ch) in self.templates.entries() {
                    if !key.is_empty() && key.is_subset(pattern) {
                        *votes.entry(ch).or_insert(0) += key.len();
                    }
                }
                // Ascending char order plus strict comparison pins the
                // winner of a tie to the smaller character.
                let mut best: Option<(char, usize)> = None;
                for (ch, count) in votes {
                    if best.is_none_or(|(_, c)| count > c) {
                        best = Some((ch, count));
                    }
                }
                best.map(|(ch, _)| ch)
            }
        }
    }
}
