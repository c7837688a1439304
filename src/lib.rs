//! lexi — terminal browser for SFM (Toolbox) dictionaries.
//!
//! The binary wires three crates together:
//!
//! ```text
//! lexi-sources ──► lexi-core::parse ──► lexi-tui        (interactive)
//!                                   └──► headless::run  (--headless)
//! ```
//!
//! This library half holds the CLI definition and the headless printer so
//! integration tests can drive them without spawning the binary.

pub mod cli;
pub mod headless;
