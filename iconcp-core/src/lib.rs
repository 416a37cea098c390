//! iconcp core - copies the fixed PWA icon set between two directories
//!
//! The library holds everything the `iconcp` binary does besides argument
//! parsing and logging setup:
//!
//! - **Catalog**: the fixed, ordered list of icon pixel sizes and the file
//!   naming convention derived from it
//! - **Configuration**: the source and destination roots, with built-in
//!   defaults and an optional TOML settings file
//! - **Copier**: creates the destination root and copies every icon that
//!   exists at the source, reporting one status line per size
//! - **Verification**: checks that the full icon set is present at a root
//!   without copying anything
//!
//! Status lines are written to any [`std::io::Write`], so callers decide
//! where the line-oriented report goes.

#![forbid(unsafe_code)]
// Lints configured in Cargo.toml

pub mod catalog;
pub mod config;
pub mod copier;
pub mod error;
pub mod verify;

// Public API
pub use catalog::{icon_file_name, ICON_SIZES};
pub use config::{CopyConfig, SettingsFile};
pub use copier::{CopyOutcome, CopySummary, Copier};
pub use error::{IconError, IconResult};
pub use verify::{verify_icons, IconFile};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
