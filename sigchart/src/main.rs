use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sigchart_core::{ChartColor, ChartSession, ConfigError, FileFeed, LiveFeed, SampleFeed};
use sigchart_gui::{run_gui, GuiConfig};

/// Plots a stream of numbers as a scrolling line chart.
///
/// Pipe whitespace-separated values into stdin (`some-signal | sigchart`) or
/// read them from a file with `--file`. Space pauses live sampling; hovering
/// the plot inspects the sample under the pointer.
#[derive(Parser)]
#[command(name = "sigchart", version, about, long_about = None)]
struct Cli {
    /// Line color: red, green, blue, yellow, magenta, cyan, white, orange
    /// or gray
    #[arg(short, long, default_value = "red")]
    color: ChartColor,

    /// Number of samples kept in the scrolling window
    #[arg(short = 'l', long, default_value_t = 100)]
    length: usize,

    /// Minimum seconds between accepted samples (live mode only)
    #[arg(short = 'T', long, default_value_t = 0.0, allow_negative_numbers = true)]
    interval: f64,

    /// Repeat each accepted sample on stdout
    #[arg(short = 'o', long)]
    echo: bool,

    /// Read samples from a file instead of stdin
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.length < 1 {
        return Err(ConfigError::ZeroLength.into());
    }
    if cli.interval < 0.0 {
        return Err(ConfigError::NegativeInterval.into());
    }

    let feed: Box<dyn SampleFeed> = match cli.file.as_deref() {
        Some(path) => Box::new(FileFeed::open(path)?),
        None => Box::new(LiveFeed::new(Duration::from_secs_f64(cli.interval))),
    };
    let echo = cli
        .echo
        .then(|| Box::new(std::io::stdout()) as Box<dyn Write>);
    let session = ChartSession::new(cli.length, feed, echo);

    log::info!(
        "charting {} samples in {} mode",
        cli.length,
        if cli.file.is_some() { "file" } else { "live" }
    );

    let config = GuiConfig {
        title: format!("sigchart - {} samples", cli.length),
        ..GuiConfig::default()
    };
    run_gui(config, session, cli.color)?;
    Ok(())
}
