use anyhow::Result;
use barbot_display::pages::home_markup;
use barbot_display::{render_home, HomeState};
use chrono::Utc;
use clap::Parser;

use render_page::{load_config, render_document, resolve_config_path, write_document, Cli};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config);
    if let Some(path) = &config_path {
        println!("🔍 Loading page config from: {}", path.display());
    }
    let mut config = load_config(config_path.as_deref())?;
    if let Some(output) = cli.output {
        config.output = output;
    }

    // The static page always shows the initial, empty state.
    let state = HomeState::new();
    if cli.verbose {
        println!("📋 Home view: {:?}", render_home(&state));
    }

    let generated_at = (!cli.no_timestamp).then(Utc::now);
    let html = render_document(&config, &home_markup(&state), generated_at);

    write_document(&config.output, &html)?;
    println!("✅ Landing page written to {}", config.output.display());
    if cli.verbose {
        println!("📊 {} bytes", html.len());
    }

    Ok(())
}
