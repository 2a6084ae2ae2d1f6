//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Markdown rendering
//! - Text transforms
//! - Link payload handling
//! - Message-driven timers

pub mod links;
pub mod markdown;
pub mod text_ops;
pub mod timer;
