use std::fmt;

use crate::error::{GraphError, NoTarget};

/// Dense slide index in `[0, N)`, assigned in authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideId(pub usize);

impl SlideId {
    /// Menu root, where a long press on Up always returns to.
    pub const ROOT: SlideId = SlideId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque name of the bitmap behind a slide. Only the resource loader
/// knows how to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef(pub String);

impl ResourceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Prev,
    Next,
    Target,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Prev => "prev",
            Relation::Next => "next",
            Relation::Target => "target",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// One authored row of the slide table. Links are raw indices so that
/// out-of-range values can be reported instead of trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEntry {
    pub resource: ResourceRef,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub target: Option<usize>,
}

impl SlideEntry {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: ResourceRef::new(resource),
            prev: None,
            next: None,
            target: None,
        }
    }

    pub fn with_prev(mut self, prev: usize) -> Self {
        self.prev = Some(prev);
        self
    }

    pub fn with_next(mut self, next: usize) -> Self {
        self.next = Some(next);
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: SlideId,
    pub resource: ResourceRef,
    pub prev: Option<SlideId>,
    pub next: Option<SlideId>,
    pub target: Option<SlideId>,
}

/// Immutable directed graph over the authored slides.
///
/// Every link is checked at construction, so traversal never indexes out of
/// bounds. Links need not be symmetric: group shortcuts are one-way.
#[derive(Debug, Clone)]
pub struct NavigationGraph {
    slides: Vec<Slide>,
}

impl NavigationGraph {
    pub fn new(entries: Vec<SlideEntry>) -> Result<Self, GraphError> {
        if entries.is_empty() {
            return Err(GraphError::Empty);
        }
        let len = entries.len();

        let check = |slide: usize, relation: Relation, link: Option<usize>| match link {
            Some(link) if link >= len => Err(GraphError::InvalidLinkId {
                slide: SlideId(slide),
                relation,
                link,
                len,
            }),
            link => Ok(link.map(SlideId)),
        };

        let slides = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                Ok::<_, GraphError>(Slide {
                    id: SlideId(i),
                    prev: check(i, Relation::Prev, entry.prev)?,
                    next: check(i, Relation::Next, entry.next)?,
                    target: check(i, Relation::Target, entry.target)?,
                    resource: entry.resource,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects an empty table.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn contains(&self, id: SlideId) -> bool {
        id.0 < self.slides.len()
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.get(id.0)
    }

    pub fn resource(&self, id: SlideId) -> Option<&ResourceRef> {
        self.slide(id).map(|slide| &slide.resource)
    }

    pub fn ids(&self) -> impl Iterator<Item = SlideId> + '_ {
        self.slides.iter().map(|slide| slide.id)
    }

    /// Follows the explicit link in `direction`, falling back to linear
    /// wrap-around. Previous from the first slide lands on the last one.
    ///
    /// An out-of-range `current` is treated like the last slide so the call
    /// stays total.
    pub fn advance(&self, current: SlideId, direction: Direction) -> SlideId {
        let last = self.slides.len() - 1;
        let current = SlideId(current.0.min(last));
        let slide = &self.slides[current.0];

        match direction {
            Direction::Previous => slide.prev.unwrap_or_else(|| {
                if current.0 == 0 {
                    SlideId(last)
                } else {
                    SlideId(current.0 - 1)
                }
            }),
            Direction::Next => slide.next.unwrap_or_else(|| {
                if current.0 >= last {
                    SlideId::ROOT
                } else {
                    SlideId(current.0 + 1)
                }
            }),
        }
    }

    pub fn jump(&self, current: SlideId) -> Result<SlideId, NoTarget> {
        self.slide(current)
            .and_then(|slide| slide.target)
            .ok_or(NoTarget(current))
    }

    pub fn reset(&self) -> SlideId {
        SlideId::ROOT
    }
}
