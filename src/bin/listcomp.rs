use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "listcomp", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a display list and print the context-switch trace.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input display-list JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the full report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let scene = listcomp::SceneList::from_path(&args.in_path)
        .with_context(|| format!("load scene list '{}'", args.in_path.display()))?;
    let report = listcomp::composite_scene(&scene, listcomp::NodeOpts { trace: true })
        .with_context(|| format!("composite '{}'", args.in_path.display()))?;

    if args.json {
        let out = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{out}");
        return Ok(());
    }

    for event in &report.trace {
        println!("{event}");
    }
    let s = report.stats;
    println!(
        "drawables={} clones={} releases={} reverts={} blend_runs={}",
        s.drawables, s.clones, s.releases, s.reverts, s.blend_runs
    );
    Ok(())
}
