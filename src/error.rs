use crate::graph::{Relation, SlideId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Slide table is empty")]
    Empty,

    #[error("Slide {slide} has {relation} link {link} but only {len} slides exist")]
    InvalidLinkId {
        slide: SlideId,
        relation: Relation,
        link: usize,
        len: usize,
    },
}

/// The current slide has no jump target configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Slide {0} has no jump target")]
pub struct NoTarget(pub SlideId);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to load resource '{resource}': {reason}")]
pub struct LoadError {
    pub resource: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("Slide {0} does not exist")]
    UnknownSlide(SlideId),

    #[error("Could not show slide {slide} (previous slide restored: {restored})")]
    ResourceLoad {
        slide: SlideId,
        /// Whether the previously shown slide is resident again.
        restored: bool,
        #[source]
        source: LoadError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest from path '{}'", .path.display())]
    ReadingFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parsing(#[from] toml::de::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
