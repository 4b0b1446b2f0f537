#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod marker;
pub mod primitive;

pub use error::WireError;
