//! # Mistype
//!
//! A lightweight typo detection and correction suggestion library.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Recognizes the four dominant fast-typing error patterns:
//!   substitution, adjacent transposition, single and double omission
//! - Positional character difference reports
//! - Bulk pair checking
//! - Dictionary-backed suggestions with deterministic closest-match
//!   resolution

pub mod cli;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod source;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
