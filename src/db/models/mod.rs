//! Database models split into domain-specific modules.

pub mod client;
pub mod client_parking;
pub mod parking;

pub use client::*;
pub use client_parking::*;
pub use parking::*;
