//! Users module — create, list and look up users

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
