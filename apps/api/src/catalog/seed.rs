//! Built-in portfolio content, served when CATALOG_PATH is not set.

use std::collections::HashMap;

use super::loader::CatalogDocument;
use super::models::{Contact, GalleryItem, MenuItem, Project, Review, ReviewKind};

pub fn document() -> CatalogDocument {
    CatalogDocument {
        menu: vec![
            menu("frontend", "Frontend"),
            menu("uiux", "UI/UX Design"),
            menu("reviews", "Website Reviews"),
            menu("about", "About Me / Content"),
        ],
        tech_stack: strings(&[
            "React",
            "Next.js",
            "TypeScript",
            "JavaScript (Vanilla)",
            "HTML / CSS",
        ]),
        projects: HashMap::from([
            (
                "React".to_string(),
                vec![
                    project(
                        "Project Alpha",
                        "E\u{2011}commerce experience",
                        "https://example.com/react-alpha",
                        "https://github.com/example/react-alpha",
                    ),
                    project(
                        "Project Beta",
                        "Social app UI",
                        "https://example.com/react-beta",
                        "https://github.com/example/react-beta",
                    ),
                ],
            ),
            (
                "Next.js".to_string(),
                vec![project(
                    "Next Storefront",
                    "Headless commerce",
                    "https://example.com/next-store",
                    "https://github.com/example/next-store",
                )],
            ),
            (
                "TypeScript".to_string(),
                vec![project(
                    "TS Components Kit",
                    "Accessible UI library",
                    "https://example.com/ts-kit",
                    "https://github.com/example/ts-kit",
                )],
            ),
            (
                "JavaScript (Vanilla)".to_string(),
                vec![project(
                    "Micro Interactions",
                    "Animation lab",
                    "https://example.com/js-micro",
                    "https://github.com/example/js-micro",
                )],
            ),
            (
                "HTML / CSS".to_string(),
                vec![project(
                    "Fluid Layouts",
                    "Modern responsive patterns",
                    "https://example.com/css-fluid",
                    "https://github.com/example/css-fluid",
                )],
            ),
        ]),
        design_focus: strings(&[
            "Modern UI / Interface",
            "UX Case Studies",
            "Web Design Inspiration",
            "Digital Design",
        ]),
        gallery: HashMap::from([
            (
                "Modern UI / Interface".to_string(),
                vec![
                    gallery("Dashboard Nova", "photo-1526498460520-4c246339dccb"),
                    gallery("Mobile Flow", "photo-1557825835-70d97c4aa78a"),
                    gallery("Dark Glass UI", "photo-1509099836639-18ba1795216d"),
                ],
            ),
            (
                "UX Case Studies".to_string(),
                vec![gallery("Checkout Rethink", "photo-1515879218367-8466d910aaa4")],
            ),
            (
                "Web Design Inspiration".to_string(),
                vec![gallery("Motion Gallery", "photo-1545235617-9465d2a55698")],
            ),
            (
                "Digital Design".to_string(),
                vec![gallery("Concept Posters", "photo-1511765224389-37f0e77cf0eb")],
            ),
        ]),
        reviews: vec![
            Review {
                title: "2025 Trend \u{2014} Minimal Motion Systems".to_string(),
                kind: ReviewKind::Article,
                url: "https://example.com/review-trend".to_string(),
                source: "Design Journal".to_string(),
            },
            Review {
                title: "Landing Page UX \u{2014} 5 Common Fixes".to_string(),
                kind: ReviewKind::Video,
                url: "https://example.com/review-landing".to_string(),
                source: "YouTube".to_string(),
            },
        ],
        contacts: vec![
            contact("Dev Community", "https://dev.to/"),
            contact("Tech Creator Profile", "https://www.youtube.com/"),
            contact("Email Me", "mailto:hello@example.com"),
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn menu(key: &str, label: &str) -> MenuItem {
    MenuItem {
        key: key.to_string(),
        label: label.to_string(),
    }
}

fn project(title: &str, subtitle: &str, demo: &str, code: &str) -> Project {
    Project {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        demo: demo.to_string(),
        code: code.to_string(),
    }
}

/// Gallery images are all Unsplash crops at the same size.
fn gallery(title: &str, photo_id: &str) -> GalleryItem {
    GalleryItem {
        title: title.to_string(),
        image: format!("https://images.unsplash.com/{photo_id}?q=80&w=1200&auto=format&fit=crop"),
    }
}

fn contact(label: &str, url: &str) -> Contact {
    Contact {
        label: label.to_string(),
        url: url.to_string(),
    }
}
