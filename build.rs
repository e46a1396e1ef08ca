//! Build script for the playlist ETL CLI.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory so an installed binary has a ready-made template next to the
//! `.env` file it reads at startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// The destination is platform-specific:
/// - Linux: `~/.local/share/playlist-etl/.env.example`
/// - macOS: `~/Library/Application Support/playlist-etl/.env.example`
/// - Windows: `%LOCALAPPDATA%/playlist-etl/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playlist-etl");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
