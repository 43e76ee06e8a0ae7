//! Noise canceller CLI
//!
//! Usage:
//!   denoise speech.wav room.wav                  - Write cleaned_speech.wav to Downloads
//!   denoise speech.wav room.wav -o out.wav       - Explicit output file
//!   denoise speech.wav room.wav --alpha 2 -M 512 - Override parameters
//!   denoise speech.wav room.wav --report r.json  - Also write a JSON run summary

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nc_core::DenoiseConfig;
use nc_engine::{NoiseCanceller, load_config};

#[derive(Parser)]
#[command(name = "denoise", version, about = "Spectral-subtraction noise canceller")]
struct Cli {
    /// Noisy recording (WAV)
    input: PathBuf,

    /// Noise-only reference recording (WAV, same sample rate)
    noise: PathBuf,

    /// Window / FFT size
    #[arg(short = 'M', long)]
    window_size: Option<usize>,

    /// Over-subtraction factor
    #[arg(short, long)]
    alpha: Option<f32>,

    /// Spectral floor fraction
    #[arg(short, long)]
    beta: Option<f32>,

    /// Output file (overrides --output-dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the cleaned file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON config file; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON run summary here
    #[arg(long)]
    report: Option<PathBuf>,

    /// Process but do not write audio
    #[arg(long)]
    dry_run: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<DenoiseConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DenoiseConfig::default(),
        };

        if let Some(m) = self.window_size {
            config = config.with_window_size(m);
        }
        if let Some(alpha) = self.alpha {
            config = config.with_alpha(alpha);
        }
        if let Some(beta) = self.beta {
            config = config.with_beta(beta);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.resolve_config()?;
    let canceller = NoiseCanceller::new(config).context("Invalid parameters")?;

    let mut result = canceller
        .process_files(&cli.input, &cli.noise)
        .with_context(|| {
            format!(
                "Failed to denoise {} with {}",
                cli.input.display(),
                cli.noise.display()
            )
        })?;

    if let Some(output) = &cli.output {
        result.output_path = Some(output.clone());
    }

    if cli.dry_run {
        log::info!("Dry run, not writing audio");
    } else {
        let path = result.save().context("Failed to write output")?;
        log::info!("Saved {}", path.display());
    }

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&result.report())?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        log::info!("Report written to {}", report_path.display());
    }

    let params = result.parameters;
    println!(
        "{} frames x {} bins | M={} R={} alpha={} beta={} | gain {:.2}",
        result.num_frames(),
        result.num_bins(),
        params.window_size(),
        params.hop_size(),
        params.alpha(),
        params.beta(),
        result.output_gain
    );
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }

    Ok(())
}
