use anyhow::Context;
use clap::{Parser, ValueEnum};
use img_conv::{convert_directory, ConvertOptions, MismatchPolicy, DEFAULT_JPEG_QUALITY};
use shared_utils::logging::{init_logging, LogConfig};
use shared_utils::print_summary_report;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, Level};

#[derive(Parser)]
#[command(name = "imgconv")]
#[command(
    version,
    about = "Recursively convert images in a directory from one format to another",
    long_about = None
)]
struct Cli {
    /// Directory to convert (searched recursively).
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Source format name or extension (jpeg, jpg, png, gif).
    #[arg(short, long, default_value = "jpeg")]
    from: String,

    /// Target format name or extension.
    #[arg(short, long, default_value = "png")]
    to: String,

    /// How to treat files whose content is not the format their extension says.
    #[arg(long, value_enum, default_value = "skip")]
    on_mismatch: MismatchArg,

    /// Quality for JPEG output.
    #[arg(short = 'q', long, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,

    /// Write converted files under this directory, mirroring the input tree.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Directory for the rolling log file (default: system temp dir).
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MismatchArg {
    Skip,
    Warn,
}

impl From<MismatchArg> for MismatchPolicy {
    fn from(arg: MismatchArg) -> Self {
        match arg {
            MismatchArg::Skip => MismatchPolicy::Skip,
            MismatchArg::Warn => MismatchPolicy::Warn,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default()
        .with_crate("img_conv")
        .with_crate("imgconv")
        .with_level(if cli.verbose { Level::DEBUG } else { Level::INFO });
    if let Some(dir) = &cli.log_dir {
        log_config = log_config.with_log_dir(dir);
    }
    if let Err(e) = init_logging("imgconv", log_config) {
        eprintln!("⚠️  Logging disabled: {:#}", e);
    }

    let mut options = ConvertOptions::new()
        .with_mismatch_policy(cli.on_mismatch.into())
        .with_jpeg_quality(cli.jpeg_quality);
    if let Some(output) = &cli.output {
        options = options.with_output_dir(output);
    }

    let dir = cli.dir.unwrap_or_default();
    let start = Instant::now();
    let result = convert_directory(&dir, &cli.from, &cli.to, &options)
        .inspect_err(|e| {
            error!(
                category = %e.category(),
                configuration = e.is_configuration(),
                error = %e,
                "conversion aborted"
            )
        })
        .with_context(|| format!("converting {} → {} in {}", cli.from, cli.to, dir.display()))?;

    print_summary_report(
        &result,
        start.elapsed(),
        &format!(
            "{} → {}",
            cli.from.to_uppercase(),
            cli.to.to_uppercase()
        ),
    );

    Ok(())
}
