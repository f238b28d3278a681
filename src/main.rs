use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fls::{config::ProcessConfig, process, utils::image};

/// fls produces paletted black and white images using the Floyd-Steinberg
/// dithering algorithm.
///
/// Rescaling is applied before the dithering with the nearest-neighbor algorithm.
#[derive(Parser, Debug)]
#[command(name = "fls", version)]
struct Cli {
    /// PNG or JPEG images to dither, processed in parallel
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Scaling coefficient
    #[arg(short, long)]
    scale: Option<f32>,

    /// Path to output file (single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with processing parameters, flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set verbose execution
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn process_config(&self) -> anyhow::Result<ProcessConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessConfig::read_config(path)
                .with_context(|| format!("reading config {:?}", path))?,
            None => ProcessConfig::default(),
        };
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        config.validate()?;

        if config.output.is_some() && self.inputs.len() > 1 {
            bail!("an output path can only be given for a single input");
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(input: &Path, output: &Path, config: &ProcessConfig) -> anyhow::Result<()> {
    info!("read file {:?}", input);
    let texture =
        image::read_image(input).with_context(|| format!("reading image {:?}", input))?;

    let dithered = process(&texture, config.scale)?;

    info!("writing result PNG image at path {:?}", output);
    image::write_paletted_png(&dithered, output)
        .with_context(|| format!("writing png image in {:?}", output))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.process_config()?;
    let outputs = config.output_paths(&cli.inputs)?;

    let failures = cli
        .inputs
        .par_iter()
        .zip(outputs.par_iter())
        .map(|(input, output)| run(input, output, &config))
        .filter_map(|result| result.err())
        .map(|err| error!("{:#}", err))
        .count();

    if failures > 0 {
        bail!("{} of {} images failed", failures, cli.inputs.len());
    }
    Ok(())
}
