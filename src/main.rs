use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_snoop::assets::AssetLoader;
use palette_snoop::models::{AppConfig, PaletteDocument};
use palette_snoop::services::{catalog_lines, EnrichmentService};

#[derive(Parser)]
#[command(name = "palette-snoop", version)]
#[command(about = "Match palette colors to artist paints and print inks")]
struct Cli {
    /// Config file (overrides the CONFIG_FILE env var)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add text color and nearest paint/ink matches to a palette
    Enrich {
        /// Palette JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Write the enriched palette here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Show the nearest paint and ink for each color
    Match {
        /// Hex colors, e.g. "#C8102E"
        #[arg(required = true)]
        hex: Vec<String>,
    },
    /// List a reference catalog
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
    },
    /// Write the default config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
    Paints,
    Inks,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palette_snoop=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let loader = match cli.config {
        Some(path) => AssetLoader::new(Some(path)),
        None => AssetLoader::from_env(),
    };

    match cli.command {
        Some(Commands::Enrich {
            input,
            output,
            compact,
        }) => run_enrich_command(&loader, input.as_deref(), output.as_deref(), compact),
        Some(Commands::Match { hex }) => run_match_command(&loader, &hex),
        Some(Commands::Catalog { kind }) => run_catalog_command(&loader, kind),
        Some(Commands::Init { force }) => run_init_command(&loader, force),
        None => run_status_command(&loader),
    }
}

fn load_service(loader: &AssetLoader) -> anyhow::Result<EnrichmentService> {
    let config = AppConfig::load_from_assets(loader).context("Failed to load configuration")?;
    EnrichmentService::new(&config).context("Invalid catalog in configuration")
}

/// Enrich a palette file (or stdin) and write JSON
fn run_enrich_command(
    loader: &AssetLoader,
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> anyhow::Result<()> {
    let service = load_service(loader)?;

    let content = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read palette from stdin")?;
            buf
        }
    };

    let doc = PaletteDocument::from_json(&content).context("Failed to parse palette")?;
    let enriched = service.enrich_document(doc)?;
    let json = service.render(&enriched, compact)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), items = enriched.len(), "Wrote enriched palette");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Print nearest matches for each hex argument
fn run_match_command(loader: &AssetLoader, hexes: &[String]) -> anyhow::Result<()> {
    let service = load_service(loader)?;
    let reports = service.match_all(hexes)?;

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{report}");
    }
    Ok(())
}

/// List every entry of a catalog
fn run_catalog_command(loader: &AssetLoader, kind: CatalogKind) -> anyhow::Result<()> {
    let service = load_service(loader)?;

    let (name, lines) = match kind {
        CatalogKind::Paints => {
            let catalog = service.paint_catalog();
            (
                catalog.name(),
                catalog_lines(catalog, |p| p.name.to_string()),
            )
        }
        CatalogKind::Inks => {
            let catalog = service.ink_catalog();
            (
                catalog.name(),
                catalog_lines(catalog, |i| format!("{} {}", i.code, i.name)),
            )
        }
    };

    println!("{name} ({} colors)\n", lines.len());
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force).context("Failed to write config")?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Palette Snoop v{VERSION}");
    println!("Match palette colors to artist paints and print inks\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("palette_snoop=warn (default)")
    );

    println!("\nConfig:   {}", loader.config_source());
    println!("Embedded: {}", AssetLoader::list_embedded().join(", "));

    let service = load_service(loader)?;
    println!("\nCatalogs:");
    println!(
        "  Paints:  {} ({} colors)",
        service.paint_catalog().name(),
        service.paint_catalog().len()
    );
    println!(
        "  Inks:    {} ({} colors)",
        service.ink_catalog().name(),
        service.ink_catalog().len()
    );

    println!("\nCommands:");
    println!("  palette-snoop enrich    Enrich a palette JSON file");
    println!("  palette-snoop match     Find the nearest paint and ink for colors");
    println!("  palette-snoop catalog   List a reference catalog");
    println!("  palette-snoop init      Write the default config.yaml");
    println!("\nRun 'palette-snoop --help' for more details.");
    Ok(())
}
