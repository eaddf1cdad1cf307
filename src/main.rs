use anyhow::bail;
use clap::Parser;
use msc::{EngineConfig, Equalization, SimilarityEngine};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

const DEMO_TEXT: (&str, &str) = ("Hello i teach physics in Oxford.", "Hello i teach physics at MIT");
const DEMO_FIELD: (&str, &str) = ("england", "USA");

/// Character-code similarity between texts
#[derive(Parser, Debug)]
#[command(name = "msc")]
#[command(about = "Maximum similarity counter between texts", long_about = None)]
struct Args {
    /// Left text; repeat for multi-field comparison
    #[arg(short, long)]
    left: Vec<String>,

    /// Right text; repeat for multi-field comparison
    #[arg(short, long)]
    right: Vec<String>,

    /// Log per-word diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Print the score breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Pad by appending the sentinel block to the shorter text's tail
    #[arg(long)]
    legacy_equalization: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let equalization = if args.legacy_equalization {
        Equalization::TailSentinel
    } else {
        Equalization::PadWords
    };
    let engine =
        SimilarityEngine::with_config(EngineConfig::new(args.verbose).with_equalization(equalization));
    debug!("MSC v{} with {:?}", engine.version(), engine.config());

    match (args.left.len(), args.right.len()) {
        (0, 0) => run_demo(&engine, args.json),
        (1, 1) => print_text(&engine, &args.left[0], &args.right[0], args.json),
        (l, r) if l == r => print_fields(&engine, args.left.as_slice(), args.right.as_slice(), args.json),
        (l, r) => bail!("--left given {} times but --right given {} times", l, r),
    }
}

fn run_demo(engine: &SimilarityEngine, json: bool) -> anyhow::Result<()> {
    // simple text comparison
    print_text(engine, DEMO_TEXT.0, DEMO_TEXT.1, json)?;

    // multiple fields comparison
    print_fields(
        engine,
        &[DEMO_TEXT.0, DEMO_FIELD.0],
        &[DEMO_TEXT.1, DEMO_FIELD.1],
        json,
    )
}

fn print_text(engine: &SimilarityEngine, left: &str, right: &str, json: bool) -> anyhow::Result<()> {
    let report = engine.explain_text(left, right)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.score);
    }
    Ok(())
}

fn print_fields<S: AsRef<str>>(
    engine: &SimilarityEngine,
    left: &[S],
    right: &[S],
    json: bool,
) -> anyhow::Result<()> {
    let report = engine.explain_fields(left, right)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.score);
    }
    Ok(())
}
