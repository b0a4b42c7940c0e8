//! sortbox - move files into category subdirectories
//!
//! This library reads a TOML configuration mapping category names to filename
//! extensions plus a list of source directories, then moves each file found
//! directly inside a source directory into a subdirectory named after its
//! category. Files matching no configured extension land in `Others`.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use config::{CollisionPolicy, Config, ConfigError};
pub use file_category::{CategoryMap, CategoryRule, DEFAULT_CATEGORY};
pub use file_organizer::{FileMover, MoveError, MoveResult};

pub use cli::run;
