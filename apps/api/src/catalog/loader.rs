//! Loading a replacement catalog from a JSON document.
//!
//! The built-in content is demo material meant to be swapped per deployment;
//! `CATALOG_PATH` points at a file with the same shape as `CatalogDocument`.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{Contact, GalleryItem, MenuItem, Project, Review};
use super::Catalog;

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    pub menu: Vec<MenuItem>,
    pub tech_stack: Vec<String>,
    pub projects: HashMap<String, Vec<Project>>,
    pub design_focus: Vec<String>,
    pub gallery: HashMap<String, Vec<GalleryItem>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {collection} key '{key}'")]
    DuplicateKey { collection: &'static str, key: String },

    #[error("{collection} key '{key}' has no entries")]
    EmptyEntries { collection: &'static str, key: String },

    #[error("{collection} entries keyed by '{key}' are not listed and can never be selected")]
    UnlistedKey { collection: &'static str, key: String },
}

impl Catalog {
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Catalog::try_from(doc)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        validate(&doc)?;
        Ok(Catalog::from_document(doc))
    }
}

/// Checks the structural invariants lookups rely on: listed keys are unique,
/// every listed key selects at least one entry, and no mapping key is orphaned.
pub fn validate(doc: &CatalogDocument) -> Result<(), CatalogError> {
    ensure_unique("menu", doc.menu.iter().map(|m| m.key.as_str()))?;
    ensure_unique("tech", doc.tech_stack.iter().map(String::as_str))?;
    ensure_unique("focus", doc.design_focus.iter().map(String::as_str))?;
    ensure_keyed("tech", &doc.tech_stack, &doc.projects)?;
    ensure_keyed("focus", &doc.design_focus, &doc.gallery)?;
    Ok(())
}

fn ensure_unique<'a>(
    collection: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                collection,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_keyed<T>(
    collection: &'static str,
    listed: &[String],
    entries: &HashMap<String, Vec<T>>,
) -> Result<(), CatalogError> {
    for key in listed {
        if entries.get(key).map_or(true, Vec::is_empty) {
            return Err(CatalogError::EmptyEntries {
                collection,
                key: key.clone(),
            });
        }
    }

    // Sorted so the reported key is deterministic.
    let mut orphaned: Vec<&String> = entries.keys().filter(|k| !listed.contains(*k)).collect();
    orphaned.sort();
    match orphaned.first() {
        Some(key) => Err(CatalogError::UnlistedKey {
            collection,
            key: (*key).clone(),
        }),
        None => Ok(()),
    }
}
