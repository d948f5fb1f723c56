//! Client-side state persisted through the keyed store.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `orders`, `demo_role`) so pages and
//! components depend only on the small models they render.

pub mod demo_role;
pub mod orders;
pub mod session;
