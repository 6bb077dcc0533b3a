mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use spell_duel::compute::{init_state, queue_fire, set_player_intent, tick};
use spell_duel::config::Field;
use spell_duel::entities::DuelState;
use spell_duel::input::{Command, KeyTracker};

#[derive(Parser)]
#[command(name = "spell_duel")]
#[command(about = "Cast spells at a drifting enemy until one of you drops")]
struct Args {
    /// Seed for the enemy's random walk (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Where log lines go; the terminal itself is the game screen
    #[arg(long, default_value = "spell_duel.log")]
    log_file: PathBuf,
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("creating log file {}", log_file.display()))?;
    let writer = Mutex::new(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));

    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → start a new duel.
///
/// Every frame: drain pending key events, push the held direction into the
/// player's intent flags, run one tick, render.  Spells are queued as they
/// are pressed and spawned by the next tick.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut DuelState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    frame_time: Duration,
) -> std::io::Result<bool> {
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.record(&key, frame) {
                Some(Command::Quit) => return Ok(true),
                Some(Command::Restart) if state.is_over() => return Ok(false),
                Some(Command::Fire) => *state = queue_fire(state),
                _ => {}
            }
        }

        let (move_up, move_down) = keys.intent(frame);
        *state = set_player_intent(state, move_up, move_down);
        *state = tick(state, rng);

        let (width, height) = terminal::size()?;
        display::render(out, state, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_secs_f64(1.0 / args.fps as f64);
    info!(seed = ?args.seed, fps = args.fps, "starting spell duel");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                error!(%err, "event reader stopped");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &mut rng, frame_time);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("running duel")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    frame_time: Duration,
) -> std::io::Result<()> {
    let mut duel = 0u32;
    loop {
        duel += 1;
        let mut state = init_state(Field::default());
        info!(duel, "duel started");

        let quit = game_loop(out, &mut state, rx, rng, frame_time)?;
        if quit {
            info!(duel, frame = state.frame, "quit");
            break;
        }
    }
    Ok(())
}
