//! Catalog store: the static portfolio content served by the API.
//!
//! Built once at startup (either the built-in content or a validated JSON
//! document) and shared read-only through `AppState`. Keyed lookups are exact
//! string matches and fall back to an empty slice on a miss.

pub mod handlers;
pub mod loader;
pub mod models;
pub mod seed;

use std::collections::HashMap;

use loader::CatalogDocument;
use models::{Contact, GalleryItem, MenuItem, Project, Review};

#[derive(Debug, Clone)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    tech_stack: Vec<String>,
    projects: HashMap<String, Vec<Project>>,
    design_focus: Vec<String>,
    gallery: HashMap<String, Vec<GalleryItem>>,
    reviews: Vec<Review>,
    contacts: Vec<Contact>,
}

impl Catalog {
    /// The default "Creator Console" portfolio content.
    pub fn builtin() -> Self {
        Self::from_document(seed::document())
    }

    /// `doc` must already satisfy `loader::validate`.
    fn from_document(doc: CatalogDocument) -> Self {
        Catalog {
            menu: doc.menu,
            tech_stack: doc.tech_stack,
            projects: doc.projects,
            design_focus: doc.design_focus,
            gallery: doc.gallery,
            reviews: doc.reviews,
            contacts: doc.contacts,
        }
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    pub fn projects(&self, tech: &str) -> &[Project] {
        self.projects.get(tech).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn design_focus(&self) -> &[String] {
        &self.design_focus
    }

    pub fn gallery(&self, focus: &str) -> &[GalleryItem] {
        self.gallery.get(focus).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::models::ReviewKind;
    use super::*;

    #[test]
    fn test_every_listed_tech_has_projects() {
        let catalog = Catalog::builtin();
        assert!(!catalog.tech_stack().is_empty());
        for tech in catalog.tech_stack() {
            assert!(!catalog.projects(tech).is_empty(), "no projects for {tech}");
        }
    }

    #[test]
    fn test_unknown_tech_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.projects("COBOL").is_empty());
        assert!(catalog.projects("").is_empty());
    }

    #[test]
    fn test_tech_lookup_is_exact_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.projects("React").len(), 2);
        assert!(catalog.projects("react").is_empty());
        assert!(catalog.projects("Reac").is_empty());
        assert!(catalog.projects(" React").is_empty());
    }

    #[test]
    fn test_every_listed_focus_has_gallery() {
        let catalog = Catalog::builtin();
        assert!(!catalog.design_focus().is_empty());
        for focus in catalog.design_focus() {
            assert!(!catalog.gallery(focus).is_empty(), "no gallery for {focus}");
        }
    }

    #[test]
    fn test_unknown_focus_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.gallery("Brutalism").is_empty());
        assert!(catalog.gallery("ux case studies").is_empty());
    }

    #[test]
    fn test_builtin_flat_collections() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.menu().iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["frontend", "uiux", "reviews", "about"]);
        assert_eq!(catalog.reviews().len(), 2);
        assert_eq!(catalog.reviews()[1].kind, ReviewKind::Video);
        assert_eq!(catalog.contacts().len(), 3);
        assert_eq!(catalog.contacts()[2].url, "mailto:hello@example.com");
    }
}
