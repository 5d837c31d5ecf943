use clap::{Parser, Subcommand};
use cli::OutlineJob;
use color_eyre::eyre::Result;
use outline::{CleanupMode, OutlineManager};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean up a traced outline and write a GeoJSON report
    Clean {
        /// Path to the job file (.toml, .json) or a traced .geojson polygon
        #[arg(short, long)]
        input: PathBuf,
        /// Override the job's cleanup mode (none, normal, aggressive)
        #[arg(short, long)]
        mode: Option<CleanupMode>,
        /// Where to write the GeoJSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available cleanup modes
    Modes,
    /// Print the JSON schema of a job file
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Clean { input, mode, output } => {
            clean_outline(input, *mode, output.as_deref())?;
        }
        Commands::Modes => list_modes(),
        Commands::Schema => {
            let schema = schemars::schema_for!(OutlineJob);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn clean_outline(input: &Path, mode: Option<CleanupMode>, output: Option<&Path>) -> Result<()> {
    let job = OutlineJob::from_file(input)?;
    let mode = mode.unwrap_or(job.mode);
    info!("Outline '{}': {} points, mode {}", job.name, job.points.len(), mode);

    let mut manager = OutlineManager::with_config(job.config.clone())?;
    manager.set_mode(mode);
    manager.set_outline(job.to_outline()?)?;

    let report = manager.report()?;
    if report.cleaned.len() < 3 {
        warn!(
            "Cleaned outline '{}' has only {} points and will not extrude as a solid",
            job.name,
            report.cleaned.len()
        );
    }

    let output_path = output
        .map(Path::to_path_buf)
        .or_else(|| job.output_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| input.with_file_name(format!("{}.cleaned.geojson", job.name)));

    report.save_geojson(&output_path)?;

    info!(
        "Cleaned {} -> {} points (area {:.4}, perimeter {:.4})",
        report.original.len(),
        report.cleaned.len(),
        report.cleaned.area(),
        report.cleaned.perimeter()
    );
    info!("Report saved to: {:?}", output_path);
    Ok(())
}

fn list_modes() {
    for name in CleanupMode::mode_names() {
        if let Ok(mode) = name.parse::<CleanupMode>() {
            println!("{} ({}): {}", mode, u8::from(mode), mode.description());
        }
    }
}
