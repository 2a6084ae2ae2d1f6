//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Host toolkit traits
//! - Event bus
//! - Platform detection and URI launching
//! - Error types

pub mod bus;
pub mod error;
pub mod host;
pub mod platform;
