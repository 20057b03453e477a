//! Command-line definition for `vibe-avatar`.

use clap::{Parser, Subcommand};

use vibe_avatar::{RenderSettings, DEFAULT_SIZE};

/// Generate deterministic gradient avatars from a username or ID.
#[derive(Parser, Debug)]
#[command(name = "vibe-avatar")]
#[command(version)]
#[command(about = "Generate deterministic gradient avatars from a username or ID")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Use this vibe instead of deriving one from the input
    #[arg(long, global = true, value_name = "NAME")]
    pub vibe: Option<String>,

    /// SVG edge length in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the avatar parameters as JSON
    Data { input: String },
    /// Print the avatar as an SVG document
    Svg { input: String },
    /// Print the avatar as a data URI usable as an image source
    DataUrl { input: String },
    /// Print the avatar as a CSS background-image value
    Css { input: String },
    /// Print the hash of the input
    Hash { input: String },
    /// List the available vibes in selection order
    Vibes,
}

impl Cli {
    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            size: self.size,
            vibe: self.vibe.clone(),
        }
    }
}
