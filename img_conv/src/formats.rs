//! Format table and resolver.
//!
//! Maps canonical format identifiers to the file extensions that stand for
//! them. The table is built explicitly and passed by reference; lookups are
//! case-insensitive.

use crate::error::{ConvertError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::Path;

/// Canonical, lowercase name of an image encoding (`jpeg`, `png`, `gif`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatId(String);

impl FormatId {
    pub fn new(name: &str) -> Self {
        FormatId(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
struct FormatEntry {
    id: FormatId,
    /// First entry is the preferred extension.
    aliases: Vec<String>,
}

/// Identifier → extension aliases. Every alias belongs to exactly one format.
#[derive(Debug, Clone, Default)]
pub struct FormatTable {
    entries: Vec<FormatEntry>,
}

impl FormatTable {
    /// The formats the bundled codecs can both read and write.
    pub fn builtin() -> Self {
        let entry = |id: &str, aliases: &[&str]| FormatEntry {
            id: FormatId::new(id),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        };
        Self {
            entries: vec![
                entry("jpeg", &["jpg", "jpeg"]),
                entry("png", &["png"]),
                entry("gif", &["gif"]),
            ],
        }
    }

    /// Add a format. The identifier is always accepted as an alias of itself
    /// so that both "jpg" and "jpeg" style inputs resolve.
    pub fn register(&mut self, id: &str, aliases: &[&str]) -> Result<&FormatId> {
        let id = FormatId::new(id);
        let mut normalized: Vec<String> = Vec::with_capacity(aliases.len() + 1);
        for alias in aliases
            .iter()
            .map(|a| a.trim_start_matches('.').to_lowercase())
            .chain(std::iter::once(id.as_str().to_string()))
        {
            if alias.is_empty() || normalized.contains(&alias) {
                continue;
            }
            if let Some(existing) = self.resolve(&alias) {
                return Err(ConvertError::DuplicateAlias {
                    alias,
                    existing: existing.to_string(),
                    format: id.to_string(),
                });
            }
            normalized.push(alias);
        }

        self.entries.push(FormatEntry {
            id,
            aliases: normalized,
        });
        let last = self.entries.len() - 1;
        Ok(&self.entries[last].id)
    }

    /// Resolve an extension or format name to its canonical identifier.
    pub fn resolve(&self, input: &str) -> Option<&FormatId> {
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.aliases.iter().any(|a| *a == needle))
            .map(|e| &e.id)
    }

    pub fn preferred_extension(&self, format: &FormatId) -> Option<&str> {
        self.entry(format)
            .and_then(|e| e.aliases.first())
            .map(String::as_str)
    }

    /// Whether the file's extension resolves to `format`.
    ///
    /// Uses `Path::extension`, so dot-files like `.jpeg` and bare names
    /// like `jpeg` have no extension and never match.
    pub fn matches_extension(&self, path: &Path, format: &FormatId) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.resolve(ext))
            .is_some_and(|found| found == format)
    }

    /// The codec collaborator's view of `format`, if it knows any alias.
    pub fn image_format(&self, format: &FormatId) -> Option<ImageFormat> {
        self.entry(format)?
            .aliases
            .iter()
            .find_map(ImageFormat::from_extension)
    }

    pub fn formats(&self) -> impl Iterator<Item = &FormatId> {
        self.entries.iter().map(|e| &e.id)
    }

    fn entry(&self, format: &FormatId) -> Option<&FormatEntry> {
        self.entries.iter().find(|e| e.id == *format)
    }
}
