mod cli;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vibe_avatar::{
    generate_avatar_data, generate_avatar_data_url, generate_avatar_svg, generate_css_gradient,
    hash_string, PaletteCatalog,
};

use crate::cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let directive = if cli.debug {
        "vibe_avatar=debug"
    } else {
        "vibe_avatar=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let catalog = PaletteCatalog::vibes();
    let settings = cli.settings();
    debug!(?settings, "resolved render settings");

    let output = match &cli.command {
        Commands::Data { input } => {
            let data = generate_avatar_data(catalog, input, settings.vibe())?;
            serde_json::to_string_pretty(&data)?
        }
        Commands::Svg { input } => {
            generate_avatar_svg(catalog, input, settings.vibe(), settings.size)?
        }
        Commands::DataUrl { input } => {
            generate_avatar_data_url(catalog, input, settings.vibe(), settings.size)?
        }
        Commands::Css { input } => generate_css_gradient(catalog, input, settings.vibe())?,
        Commands::Hash { input } => hash_string(input).to_string(),
        Commands::Vibes => catalog
            .palettes()
            .iter()
            .map(|p| format!("{}: {}", p.name(), p.colors().join(" ")))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    println!("{output}");
    Ok(())
}
