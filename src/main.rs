//! `dtsig` — run the signal decomposition and complex sinusoid demos
//!
//! ```bash
//! # Everything, as text
//! dtsig
//!
//! # Only the sinusoid demo, one JSON document per figure
//! dtsig --format json sinusoids
//!
//! # Custom tolerances / search bound
//! dtsig --config analysis.json decomposition
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use dtsig_lib::adapters::{JsonRenderer, TextRenderer};
use dtsig_lib::demos::{self, DemoSummary};
use dtsig_lib::ports::Renderer;
use dtsig_lib::{AnalysisConfig, DspResult};

#[derive(Parser)]
#[command(name = "dtsig", version, about = "Discrete-time signal concept demos")]
struct Cli {
    /// Which demo to run
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON file with analysis tolerances and the period search bound
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Demo {
    /// Even/odd decomposition
    Decomposition,
    /// Complex sinusoid periodicity and aliasing
    Sinusoids,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn run_demos(cli: &Cli, renderer: &mut dyn Renderer) -> DspResult<DemoSummary> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    let mut summary = DemoSummary::default();
    if matches!(cli.demo, Demo::Decomposition | Demo::All) {
        summary += demos::decomposition::run(renderer, &config)?;
    }
    if matches!(cli.demo, Demo::Sinusoids | Demo::All) {
        summary += demos::sinusoids::run(renderer, &config)?;
    }
    renderer.finish()?;
    Ok(summary)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = match cli.format {
        Format::Text => Box::new(TextRenderer::new(stdout)),
        Format::Json => Box::new(JsonRenderer::new(stdout)),
    };

    match run_demos(&cli, renderer.as_mut()) {
        Ok(summary) => {
            log::info!(
                "Rendered {} figures, skipped {}",
                summary.rendered,
                summary.skipped
            );
            if summary.skipped > 0 {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
