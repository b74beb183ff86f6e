use anyhow::Context;
use clap::{Parser, ValueEnum};
use image::ImageFormat;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use canny_stages::image_io::load_grayscale;
use canny_stages::{Artifact, ArtifactWriter, OutputConfig, Pipeline};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Bmp,
    Png,
    Tiff,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Bmp => ImageFormat::Bmp,
            Format::Png => ImageFormat::Png,
            Format::Tiff => ImageFormat::Tiff,
        }
    }
}

#[derive(Parser)]
#[command(name = "canny-stages")]
#[command(about = "Run the four Canny stages on a grayscale image and save each stage")]
struct Cli {
    /// Path to input image file (prompted for when omitted)
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Directory receiving the stage images [default: `output` next to the executable]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Image format of the stage outputs
    #[arg(short, long, value_enum, default_value_t = Format::Bmp)]
    format: Format,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Exit right away instead of waiting for Enter after an interactive run
    #[arg(long)]
    no_wait: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let interactive = args.image_path.is_none();
    let image_path = match args.image_path {
        Some(path) => path,
        None => PathBuf::from(prompt_line("Enter image name: ")?),
    };

    let mut config = OutputConfig::default().with_format(args.format.into());
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }

    if args.verbose {
        println!("Loading image: {:?}", image_path);
    }
    let image = load_grayscale(&image_path)?;
    if args.verbose {
        println!("Image loaded: {}x{}\n", image.width(), image.height());
    }

    let output = Pipeline::new()
        .with_verbose(args.verbose)
        .run(&image)
        .with_context(|| format!("cannot detect edges in {}", image_path.display()))?;

    let writer = ArtifactWriter::new(config).with_verbose(args.verbose);
    let report = writer.write_all(&output);

    println!(
        "Saved {} of {} stage images to {}",
        report.written.len(),
        Artifact::ALL.len(),
        writer.config().output_dir.display()
    );
    for err in &report.failed {
        tracing::error!("{err}");
    }

    if interactive && !args.no_wait {
        prompt_line("Press Enter to exit...")?;
    }

    if !report.is_complete() {
        anyhow::bail!("{} stage image(s) could not be written", report.failed.len());
    }

    Ok(())
}
