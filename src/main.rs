use anyhow::Result;
use clap::Parser;
use playlist_roulette::engine::Notice;
use playlist_roulette::playlist_file::{import_playlist, write_playlist};
use playlist_roulette::random::{RandomSource, SeededRandom, ThreadRandom};
use playlist_roulette::scheduler::{ManualScheduler, Scheduler, WallClockScheduler};
use playlist_roulette::{EngineConfig, SelectionEngine, SpinState};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "playlist-roulette")]
#[command(about = "Spin a playlist of videos and play a random one", long_about = None)]
struct Args {
    /// Text file with one video URL per line
    #[arg(short = 'f', long)]
    file: Option<String>,

    /// Add a URL (can be specified multiple times)
    #[arg(long = "add")]
    add: Vec<String>,

    /// Remove the entry at a 1-based position (can be specified multiple times)
    #[arg(long = "remove", value_parser = clap::value_parser!(u64).range(1..))]
    remove: Vec<u64>,

    /// Write the playlist to this file (or playlist.txt inside this directory)
    #[arg(short = 'o', long)]
    export: Option<String>,

    /// Number of spins to run
    #[arg(short = 'n', long, default_value = "1")]
    spins: u32,

    /// Spin animation length in milliseconds
    #[arg(long, default_value = "5000")]
    spin_ms: u64,

    /// Delay between pick and reveal in milliseconds
    #[arg(long, default_value = "1000")]
    reveal_ms: u64,

    /// Minimum playlist size for a spin
    #[arg(long, default_value = "2")]
    min_entries: usize,

    /// Seed the picker for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate the delays instead of waiting for real
    #[arg(long)]
    instant: bool,

    /// Print the final session state as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = EngineConfig::new()
        .with_min_entries(args.min_entries)
        .with_spin_duration(Duration::from_millis(args.spin_ms))
        .with_reveal_delay(Duration::from_millis(args.reveal_ms));

    // Pick scheduler and random source - simulated time and seeded picks are both optional
    match (args.instant, args.seed) {
        (true, Some(seed)) => run(
            &args,
            SelectionEngine::new(config, ManualScheduler::new(), SeededRandom::new(seed)),
        ),
        (true, None) => run(
            &args,
            SelectionEngine::new(config, ManualScheduler::new(), ThreadRandom::new()),
        ),
        (false, Some(seed)) => run(
            &args,
            SelectionEngine::new(config, WallClockScheduler::new(), SeededRandom::new(seed)),
        ),
        (false, None) => run(
            &args,
            SelectionEngine::new(config, WallClockScheduler::new(), ThreadRandom::new()),
        ),
    }
}

fn run<S: Scheduler, R: RandomSource>(
    args: &Args,
    mut engine: SelectionEngine<S, R>,
) -> Result<()> {
    if let Some(file) = &args.file {
        let path = PathBuf::from(shellexpand::tilde(file).as_ref());
        println!("{}", import_playlist(&mut engine, &path)?);
    }

    for url in &args.add {
        match engine.add_url(url) {
            Ok(()) => println!("{}", Notice::url_added()),
            Err(e) => println!("{}", Notice::from(&e)),
        }
    }

    for position in &args.remove {
        let index = usize::try_from(*position - 1)?;
        match engine.remove_url(index) {
            Ok(_) => println!("{}", Notice::url_removed()),
            Err(e) => println!("{}", Notice::from(&e)),
        }
    }

    println!("Playlist:");
    if engine.playlist().is_empty() {
        println!("  Your playlist is empty. Add some YouTube videos!");
    }
    for row in engine.playlist_rows() {
        println!("  {}", row);
    }

    if let Some(export) = &args.export {
        let path = PathBuf::from(shellexpand::tilde(export).as_ref());
        let written = write_playlist(&path, engine.playlist())?;
        println!("Playlist saved to {:?}", written);
    }

    for _ in 0..args.spins {
        if let Err(e) = engine.spin() {
            println!("{}", Notice::from(&e));
            break;
        }
        println!("Spinning...");

        for state in engine.run_until_settled() {
            report(&state, engine.playlist().len());
        }

        println!("Player: {}", engine.player_view());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    }

    Ok(())
}

fn report(state: &SpinState, len: usize) {
    match state {
        SpinState::Revealing { index } => println!("Chamber {} of {}", index + 1, len),
        SpinState::Settled {
            video_id: Some(id), ..
        } => println!("Selected video: {}", id),
        SpinState::Settled { video_id: None, .. } => println!("Selected entry has no playable video"),
        SpinState::Idle => println!("Nothing left to pick"),
        SpinState::Spinning => {}
    }
}
