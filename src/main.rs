//! Command line entry point: export the static bundle, print one page, or
//! dump the catalog.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use artvince_site::export::{export_site, render_route};
use artvince_site::{catalog, Route, SiteConfig};

#[derive(Parser)]
#[command(author, version, about = "Artvince Academy site builder")]
struct Cli {
    /// JSON config overriding the defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write every page, the stylesheet and catalog.json
    Build {
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the settled HTML for one path
    Render { path: String },
    /// Print the catalog as JSON
    Catalog,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Build { out } => {
            let report = export_site(&config, &out).with_context(|| format!("building into {}", out.display()))?;
            writeln!(stdout, "wrote {} files to {}", report.files.len(), out.display())?;
        }
        Command::Render { path } => {
            let route = Route::parse(&path);
            stdout.write_all(render_route(&config, route).as_bytes())?;
        }
        Command::Catalog => {
            let json = serde_json::to_string_pretty(&catalog::snapshot())?;
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
