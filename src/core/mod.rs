//! Core state management.
//!
//! This module contains:
//! - ContentStore: sole owner of the site content and its mutation operations
//! - Propagation: ordered, synchronous delivery of snapshots to subscribers
//! - Theme: the live style token fed by the theme color

pub mod propagation;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use propagation::Subscription;
pub use store::ContentStore;
pub use theme::{StyleTokens, ThemeSink, THEME_TOKEN};
