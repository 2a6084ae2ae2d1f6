//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and DocumentId
//! - Application settings
//! - Message types for the event system
//! - Keys and visual states

pub mod document;
pub mod keys;
pub mod messages;
pub mod settings;
pub mod visual_state;

pub use document::{Document, DocumentId};
pub use keys::PageKey;
pub use messages::{LinkRequest, Message, PreviewEvent};
pub use settings::{AppSettings, ThemeMode};
pub use visual_state::{ViewState, VisualState};
