//! Cabling checks for network devices.
//!
//! The matching itself lives in `cabling-core`; this crate adds the pieces a
//! command-line run needs around it:
//!
//! - [`settings`] — TOML defaults for output and matching behavior
//! - [`observed`] — resolving observed links from a file or inline list
//! - [`report`] — coloured terminal rendering

pub mod observed;
pub mod report;
pub mod settings;
