//! The authored slide table, either built in or read from a TOML file.
//!
//! ```toml
//! [[slide]]
//! resource = "nav_image_001.png"
//! prev = 4
//! target = 7
//!
//! [[slide]]
//! resource = "nav_image_002.png"
//! ```
//!
//! Slides are numbered in file order. A missing `prev`, `next` or `target`
//! means there is no explicit link in that direction.

use std::path::Path;

use log::info;

use crate::error::ManifestError;
use crate::graph::{NavigationGraph, ResourceRef, SlideEntry};

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideRecord {
    pub resource: String,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub target: Option<usize>,
}

impl From<SlideRecord> for SlideEntry {
    fn from(record: SlideRecord) -> Self {
        SlideEntry {
            resource: ResourceRef::new(record.resource),
            prev: record.prev,
            next: record.next,
            target: record.target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "slide", default)]
    pub slides: Vec<SlideRecord>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let manifest_str =
            std::fs::read_to_string(path).map_err(|source| ManifestError::ReadingFile {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = Self::parse(&manifest_str)?;
        info!("Loaded {} slides from {}", manifest.slides.len(), path.display());
        Ok(manifest)
    }

    pub fn parse(manifest_str: &str) -> Result<Self, ManifestError> {
        toml::from_str(manifest_str).map_err(ManifestError::Parsing)
    }

    /// Validates the links and builds the navigation graph.
    pub fn into_graph(self) -> Result<NavigationGraph, ManifestError> {
        let entries = self.slides.into_iter().map(SlideEntry::from).collect();
        Ok(NavigationGraph::new(entries)?)
    }

    /// The stock menu: a five slide navigation ring whose jump targets lead
    /// into the help, fandom, family, fantasy and mockup groups. Every group
    /// is closed into its own ring.
    pub fn builtin() -> Self {
        let mut slides = Vec::with_capacity(24);

        // Navigation ring, slide 0 is the menu root.
        let nav_targets = [7, 14, 11, 19, 5];
        push_ring(&mut slides, "nav_image", nav_targets.len());
        for (slide, target) in slides.iter_mut().zip(nav_targets) {
            slide.target = Some(target);
        }

        push_ring(&mut slides, "help_image", 2);
        push_ring(&mut slides, "fandom_image", 4);
        push_ring(&mut slides, "family_image", 3);
        push_ring(&mut slides, "fantasy_image", 5);
        push_ring(&mut slides, "mockup_image", 5);

        Self { slides }
    }
}

/// Appends `count` slides that wrap onto each other: the first one's prev
/// is the last one and the last one's next is the first.
fn push_ring(slides: &mut Vec<SlideRecord>, prefix: &str, count: usize) {
    let first = slides.len();
    let last = first + count - 1;

    for i in 0..count {
        let id = first + i;
        slides.push(SlideRecord {
            resource: format!("{prefix}_{:03}.png", i + 1),
            prev: (id == first).then_some(last),
            next: (id == last).then_some(first),
            target: None,
        });
    }
}
