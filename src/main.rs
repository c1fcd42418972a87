// gesture-replay - classify a recorded landmark stream and print the gestures

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gesture_lib::core::config::RecognitionConfig;
use gesture_lib::core::session::RecognitionSession;
use gesture_lib::models::tracking::GestureFrame;
use gesture_lib::platform::tracker::{HandTrackerBridge, ReplayTracker};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify hand gestures from a recorded landmark stream")]
struct Cli {
    /// JSON-lines recording, one tracker frame per line
    file: PathBuf,

    /// Configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per classified frame
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => RecognitionConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RecognitionConfig::default(),
    };

    let mut tracker = ReplayTracker::open(&cli.file)?
        .with_frame_size(config.frame_width, config.frame_height);
    info!("Replaying {}", tracker.get_model_info());

    let session = RecognitionSession::new(config);
    let (session_id, mut results) = session.start_tracking().await?;

    let json = cli.json;
    let printer = tokio::spawn(async move {
        let mut printed = 0u64;
        while let Some(frame) = results.recv().await {
            print_frame(&frame, json)?;
            printed += 1;
        }
        anyhow::Ok(printed)
    });

    let pumped = session.pump(&mut tracker).await;
    session.stop_tracking().await?;
    let submitted = pumped.context("replay failed")?;

    let printed = printer.await.context("output task panicked")??;
    info!(
        "Session {} finished: {} frames read, {} classified",
        session_id, submitted, printed
    );

    Ok(())
}

fn print_frame(frame: &GestureFrame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
        return Ok(());
    }

    match frame.result.confidence_text() {
        Some(confidence) => println!(
            "{:>8}ms  {}  ({})",
            frame.timestamp_ms,
            frame.result.display_text(),
            confidence
        ),
        None => println!("{:>8}ms  {}", frame.timestamp_ms, frame.result.display_text()),
    }
    Ok(())
}
