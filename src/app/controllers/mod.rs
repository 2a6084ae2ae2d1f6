//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Document view-model and commands
//! - Keyboard shortcut routing
//! - Preview refresh and snapshot swapping

pub mod documents;
pub mod keyboard;
pub mod preview;
