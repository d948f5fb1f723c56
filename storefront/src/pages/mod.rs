//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (reading the store, navigation)
//! and delegates rendering details to `components`.

pub mod demo;
pub mod home;
pub mod order_success;
