use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

use thumbgen::{
    output, thumbnail_pipeline, verify_thumbnail, ThumbnailConfig, DEFAULT_OUTPUT_PATH,
    DEFAULT_TOLERANCE, JPEG_QUALITY,
};

#[derive(Parser)]
#[command(name = "thumbgen")]
#[command(about = "Generate the snake thumbnail JPEG")]
struct Cli {
    /// Where to write the JPEG (parent directory must exist)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save each paint step as PNG to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Decode the written file and check it against the expected colors
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    run(args).map_err(|err| {
        let code = err.code();
        anyhow::Error::new(err).context(format!("thumbgen failed [{code}]"))
    })
}

fn run(args: Cli) -> thumbgen::Result<()> {
    let config = ThumbnailConfig::default();

    let mut pipeline = thumbnail_pipeline(&config)?.with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let image = pipeline.run()?;
    output::write_jpeg(&args.output, &image, JPEG_QUALITY)?;

    info!(
        "Created {} ({}x{} JPEG)",
        args.output.display(),
        image.width(),
        image.height()
    );

    if args.check {
        let report = verify_thumbnail(&args.output, &config, DEFAULT_TOLERANCE)?;
        info!(
            "Verified {} samples, max deviation {}",
            report.samples_checked, report.max_deviation
        );
    }

    Ok(())
}
