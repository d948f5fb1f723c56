//! Networking helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api_protection` wraps requests made from the security demo view. The
//! storefront itself has no other REST surface.

pub mod api_protection;
