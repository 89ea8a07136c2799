use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;

use gtscan::{analyze, load, write_report, OutputPaths, WindowConfig};

#[derive(Parser)]
#[command(name = "gtscan")]
#[command(about = "Sliding-window G+T proportion and G/T ratio along a FASTA/FASTQ sequence")]
struct Args {
    #[arg(short = 'f', long, help = "Input FASTA/FASTQ file (optionally .gz); only the first record is used")]
    file: PathBuf,

    #[arg(short = 'w', long, default_value = "100", help = "Window size in bases")]
    window: usize,

    #[arg(short = 's', long, default_value = "25", help = "Step between window starts")]
    step: usize,

    #[arg(long, help = "First position to analyse (1-based, inclusive)")]
    start: Option<usize>,

    #[arg(long, help = "Last position to analyse (1-based, inclusive)")]
    end: Option<usize>,

    #[arg(short = 't', long, help = "Plot title (defaults to the record name)")]
    title: Option<String>,

    #[arg(short = 'o', long, default_value = ".", help = "Directory for the CSV and PNG outputs")]
    outdir: PathBuf,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose (debug) logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // parameters are checked before the input is touched
    let config = WindowConfig::with_one_based_bounds(args.window, args.step, args.start, args.end)?;
    if config.step() > config.window() {
        warn!(
            "Step size ({}) exceeds window size ({}); some bases will not be covered",
            config.step(),
            config.window()
        );
    }
    debug!("Window configuration: {:?}", config);

    let sequence = load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let rows = analyze(&sequence.bases, &config)?;
    if rows.is_empty() {
        warn!(
            "No window of {} bases fits in the selected range; writing empty outputs",
            config.window()
        );
    }
    let undefined = rows.iter().filter(|r| r.g_to_t_ratio.is_none()).count();
    if undefined > 0 {
        info!("{} of {} windows contain no T; G/T ratio left undefined", undefined, rows.len());
    }

    let paths = OutputPaths::new(&args.outdir, &config);
    let title = args.title.unwrap_or_else(|| sequence.id.clone());
    write_report(&rows, &paths, &title).context("failed to write results")?;

    println!("Analysis complete. Results saved to:");
    println!("  CSV: {}", paths.csv.display());
    println!("  Plot: {}", paths.plot.display());

    Ok(())
}
