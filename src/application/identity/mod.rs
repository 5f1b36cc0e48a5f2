//! Identity module — user management
//!
//! Contains the `UserService` which orchestrates the user use-cases:
//! creation, listing and lookup by id.

pub mod service;

pub use service::UserService;
