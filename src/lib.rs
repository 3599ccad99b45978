//! Navigation core for a button-driven slide menu.
//!
//! A [`NavigationGraph`] decides which slide becomes current for a button
//! event and an [`ImageSlot`] keeps exactly one decoded bitmap resident on
//! the display while moving between slides. [`NavigationSession`] ties both
//! together for the host's event loop.

pub mod buttons;
pub mod constants;
pub mod error;
pub mod graph;
pub mod host;
pub mod manifest;
pub mod session;
pub mod slot;

#[cfg(test)]
mod testing;

pub use buttons::{Button, ButtonEvent, ClickRecognizer};
pub use error::{GraphError, LoadError, ManifestError, NoTarget, SwapError};
pub use graph::{Direction, NavigationGraph, Relation, ResourceRef, SlideEntry, SlideId};
pub use host::{DisplaySurface, Haptics, Origin, ResourceLoader};
pub use manifest::Manifest;
pub use session::{NavigationSession, Transition};
pub use slot::ImageSlot;
