//! Core types used throughout the library.

pub mod message;
pub mod request;

pub use message::*;
pub use request::*;
