//! dirsweep - sweep a directory's loose files into per-extension folders
//!
//! This library backs two small command-line tools: `dirsweep`, which groups
//! the regular files of a directory by filename extension and moves them into
//! per-extension subdirectories (renaming on collision), and `myip`, which
//! fetches the caller's public IP address and country from a remote endpoint.

pub mod classifier;
pub mod cli;
pub mod ip;
pub mod organizer;
pub mod output;

pub use classifier::{ClassificationMap, classify, file_extension};
pub use ip::{IpInfo, LookupError, LookupResult};
pub use organizer::{FileSweeper, SweepError, SweepResult};

pub use cli::{Cli, run};
