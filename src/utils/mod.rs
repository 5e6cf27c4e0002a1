//! Utilities around the core index.
//!
//! ## Modules
//!
//! - [`framing`] - Splits an input stream into the text and its pattern lines
//! - [`progress`] - Build progress bar (no-op without the `progress` feature)
//!
//! ```no_run
//! use stx::utils::{InputData, parse_input};
//!
//! let data = InputData::open(None).unwrap();
//! let (text, patterns) = parse_input(&data);
//! ```

pub mod framing;
pub mod progress;

pub use framing::*;
