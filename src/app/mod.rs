//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages, visual states)
//! - `controllers/` - Orchestration (document view-model, keyboard, preview)
//! - `services/` - Business operations (markdown, text transforms, links, timers)
//! - `infrastructure/` - External integrations (host traits, event bus, platform, error)
//! - `state.rs` - The main page coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::documents::{DocumentCommand, DocumentViewModel};
pub use domain::{AppSettings, Document, DocumentId, LinkRequest, Message, PageKey, PreviewEvent, ThemeMode, VisualState};
pub use infrastructure::bus::{EventBus, Subscription};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::{SystemLauncher, UriLauncher, detect_system_dark_mode};
pub use state::MainPage;
