#![warn(clippy::pedantic)]

pub mod error;
pub mod image_record;
pub mod list_record;
pub mod scanner;
pub mod sniff;

pub use error::ScanError;
pub use scanner::{FrxScanner, ScanOutcome, ScanReport};
pub use sniff::CodecSniffer;
