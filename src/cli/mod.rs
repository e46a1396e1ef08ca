//! # CLI Module
//!
//! Command-line layer of the playlist ETL. It resolves configuration, acquires
//! the access token once per run and drives the per-playlist pipeline while
//! reporting progress to the user.
//!
//! ## Commands
//!
//! - [`extract`] - Extracts each playlist into `<playlist name>.csv`
//!
//! [`resolve_playlists`] and [`extract_playlists`] are the two halves of
//! `extract` that do not need credentials: picking the playlist list and the
//! per-playlist run loop.
//!
//! ## Error Handling
//!
//! - Missing credentials, an empty playlist list or a failed token request
//!   stop the run with a non-zero exit code.
//! - A playlist that fails (API error, unexpected response structure, file
//!   error) is reported as a warning and the run moves on to the next one.
//!
//! ## Usage
//!
//! ```bash
//! playlist-etl extract                                  # playlists from PLAYLIST_IDS
//! playlist-etl extract 3os3auQwfNuEbzZZlHnj8j           # explicit id
//! playlist-etl extract https://open.spotify.com/playlist/3os3auQwfNuEbzZZlHnj8j \
//!     --output-dir data --market US
//! ```

mod extract;

pub use extract::{extract, extract_playlists, resolve_playlists};
