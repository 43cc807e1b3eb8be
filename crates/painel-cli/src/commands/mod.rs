//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, API clients, session store)
//! - `session` - Login, logout and status commands
//! - `dashboard` - Finance dashboard command
//! - `color` - Color generator and palette commands
//! - `render` - Terminal rendering helpers (swatches, text line chart)

pub mod color;
pub mod core;
pub mod dashboard;
pub mod render;
pub mod session;

// Re-export command functions for main.rs
pub use color::*;
pub use core::*;
pub use dashboard::*;
pub use session::*;
