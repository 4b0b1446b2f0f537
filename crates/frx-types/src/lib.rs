#![warn(clippy::pedantic)]

pub mod record;
pub mod sniff;

pub use record::{ResourceKind, ResourceRecord};
pub use sniff::{ImageSniffer, UNKNOWN_FORMAT};
