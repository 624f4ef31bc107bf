use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use radiant::commands::{parse_reports, shade_reports};
use radiant::report::ColorReport;

#[derive(Parser)]
#[command(name = "radiant")]
#[command(about = "Radiant - unbounded color arithmetic and scene shading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse hex colors and print their float and display values
    Parse {
        /// Hex colors (e.g. "#ff0080", "fff")
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print one JSON object per color
        #[arg(long)]
        json: bool,
    },
    /// Shade the surfaces of a scene config
    Shade {
        /// Scene config file (YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// Only shade this surface
        surface: Option<String>,

        /// Print one JSON object per color
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radiant=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Parse { colors, json } => print_reports(&parse_reports(&colors)?, json),
        Commands::Shade {
            config,
            surface,
            json,
        } => print_reports(&shade_reports(&config, surface.as_deref())?, json),
    }
}

fn print_reports(reports: &[ColorReport], json: bool) -> anyhow::Result<()> {
    for report in reports {
        if json {
            println!("{}", report.to_json()?);
        } else {
            println!("{report}");
        }
    }
    Ok(())
}
