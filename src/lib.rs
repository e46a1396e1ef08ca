//! Spotify Playlist ETL Library
//!
//! This library extracts playlist, audio-feature and artist metadata from the
//! Spotify Web API, flattens the nested JSON responses into tabular rows, joins
//! them on track and artist ids and writes one CSV file per playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every stage
//! - `merge` - Inner joins and de-duplication of the flattened tables
//! - `pipeline` - Extract, flatten, join and write for a single playlist
//! - `projection` - Projection of raw JSON records into flat rows
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `writer` - CSV serialization of the joined rows
//!
//! # Example
//!
//! ```
//! use playlist_etl::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> playlist_etl::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod projection;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod writer;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application (configuration loading, the
/// binary) where any error is reported and not matched on. Library stages
/// return [`error::EtlError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} rows to {}", rows, path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for failures that make the whole run pointless, such as missing
/// credentials or a rejected token request. Code after this macro does not
/// execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, most notably a playlist that failed and was
/// skipped while the run continues with the next one.
///
/// # Example
///
/// ```
/// warning!("Skipping playlist {}: {}", playlist_id, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
