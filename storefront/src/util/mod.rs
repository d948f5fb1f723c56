//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (scrolling) and display
//! formatting from page and component logic.

pub mod format;
pub mod scroll;
