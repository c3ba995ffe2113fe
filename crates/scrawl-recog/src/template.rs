//! Glyph templates and language packs
//!
//! A language pack is a plain text file, one template record per line.
//! Tokens are tab-separated: every token but the last is a coordinate
//! pair formatted `"<x>, <y>"` (literal comma-space separator), and the
//! last token is the character those coordinates were trained for.
//!
//! Example record:
//!
//! ```text
//! 4, 0	4, 1	4, 2	4, 3	4, 4	4, 5	4, 6	4, 7	4, 8	l
//! ```
//!
//! Each coordinate token registers a *singleton* pattern (one cell) in
//! the dictionary, mapping to the line's character. This is the legacy
//! pack convention: dictionary keys are one-cell patterns, not whole
//! normalized shapes. The matching policy that makes such packs usable
//! lives on the reader, see [`crate::MatchRule`].

use crate::error::{RecogError, RecogResult};
use std::collections::{BTreeSet, HashMap, hash_map};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Side length of the normalized glyph grid.
///
/// Every glyph is reduced to a `SCALE_SIZE` x `SCALE_SIZE` cell grid
/// before classification.
pub const SCALE_SIZE: u32 = 9;

/// Separator between the components of a coordinate token.
const COORD_SEPARATOR: &str = ", ";

/// Set of "on" cells in the normalized glyph grid.
///
/// Coordinates are `(x, y)` with each component in `[0, SCALE_SIZE - 1]`.
/// Two patterns are equal iff their cell sets are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GlyphPattern(BTreeSet<(u32, u32)>);

impl GlyphPattern {
    /// Create an empty pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark cell `(x, y)` as ink.
    pub fn insert(&mut self, x: u32, y: u32) {
        self.0.insert((x, y));
    }

    /// Whether cell `(x, y)` is ink.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.0.contains(&(x, y))
    }

    /// Number of ink cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no ink cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over ink cells in ascending `(x, y)` order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Whether every ink cell of `self` is also ink in `other`.
    pub fn is_subset(&self, other: &GlyphPattern) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<(u32, u32)> for GlyphPattern {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Immutable mapping from glyph pattern to character for one language.
///
/// Built once per load and replaced wholesale on a language change;
/// never mutated in place after that.
#[derive(Debug, Clone, Default)]
pub struct TemplateDict {
    map: HashMap<GlyphPattern, char>,
}

impl TemplateDict {
    /// Register `pattern` as an occurrence of `ch`.
    ///
    /// Re-inserting an identical pattern overwrites the previous
    /// character (last record wins), mirroring the legacy pack behavior.
    /// Returns the displaced character, if any.
    pub fn insert(&mut self, pattern: GlyphPattern, ch: char) -> Option<char> {
        self.map.insert(pattern, ch)
    }

    /// Look up a pattern by set equality.
    pub fn get(&self, pattern: &GlyphPattern) -> Option<char> {
        self.map.get(pattern).copied()
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the dictionary holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(pattern, character)` entries in arbitrary order.
    pub fn entries(&self) -> Entries<'_> {
        Entries(self.map.iter())
    }
}

/// Iterator over the entries of a [`TemplateDict`].
pub struct Entries<'a>(hash_map::Iter<'a, GlyphPattern, char>);

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a GlyphPattern, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(p, &c)| (p, c))
    }
}

/// Loads language packs from a directory of `<language>.txt` files.
///
/// The store holds no dictionary itself; every [`load`](Self::load)
/// returns a fresh [`TemplateDict`] owned by the caller.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store addressing packs under `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Path of the pack file for `language`.
    pub fn pack_path(&self, language: &str) -> PathBuf {
        self.root.join(format!("{language}.txt"))
    }

    /// Load the template dictionary for `language`.
    ///
    /// # Errors
    ///
    /// - [`RecogError::InvalidParameter`] if `language` is empty.
    /// - [`RecogError::LanguagePackNotFound`] if no pack file exists.
    /// - [`RecogError::MalformedTemplateRecord`] if any record fails to
    ///   parse; nothing partial is returned.
    pub fn load(&self, language: &str) -> RecogResult<TemplateDict> {
        if language.is_empty() {
            return Err(RecogError::InvalidParameter(
                "language name must not be empty".to_string(),
            ));
        }
        let path = self.pack_path(language);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RecogError::LanguagePackNotFound {
                    language: language.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        parse_pack(BufReader::new(file))
    }
}

impl Default for TemplateStore {
    /// Store rooted at `packs/` in the current directory, the
    /// conventional pack location.
    fn default() -> Self {
        Self::new(Path::new("packs"))
    }
}

/// Parse a language pack from any buffered reader.
///
/// Exposed separately from [`TemplateStore::load`] so that embedded or
/// in-memory packs need no filesystem.
pub fn parse_pack<R: BufRead>(reader: R) -> RecogResult<TemplateDict> {
    let mut dict = TemplateDict::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        parse_record(&line, idx + 1, &mut dict)?;
    }
    Ok(dict)
}

/// Parse one record and register its coordinate entries.
fn parse_record(line: &str, line_no: usize, dict: &mut TemplateDict) -> RecogResult<()> {
    let malformed = |reason: String| RecogError::MalformedTemplateRecord {
        line: line_no,
        reason,
    };

    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() < 2 {
        return Err(malformed(
            "expected at least one coordinate token and a character token".to_string(),
        ));
    }

    let ch = tokens[tokens.len() - 1]
        .chars()
        .next()
        .ok_or_else(|| malformed("empty character token".to_string()))?;

    for token in &tokens[..tokens.len() - 1] {
        let (x, y) = parse_coordinate(token).map_err(malformed)?;
        let mut pattern = GlyphPattern::new();
        pattern.insert(x, y);
        dict.insert(pattern, ch);
    }
    Ok(())
}

/// Parse a `"<x>, <y>"` coordinate token.
fn parse_coordinate(token: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = token.split(COORD_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(format!("coordinate token {token:?} is not \"<x>, <y>\""));
    }
    let x = parts[0]
        .parse()
        .map_err(|_| format!("non-integer x component in {token:?}"))?;
    let y = parts[1]
        .parse()
        .map_err(|_| format!("non-integer y component in {token:?}"))?;
    Ok((x, y))
}
