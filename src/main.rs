mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use display::CuePanel;
use space_shooter::assets::{AssetManifest, Assets};
use space_shooter::config::GameConfig;
use space_shooter::controls::{FrameClock, KeyTracker};
use space_shooter::error::GameError;
use space_shooter::scene::{Scene, SceneEvent};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Longest frame handed to the simulation; time lost to a stalled terminal
/// is dropped rather than replayed.
const MAX_STEP: Duration = Duration::from_millis(100);

// ── Logging ───────────────────────────────────────────────────────────────────

/// The alternate screen owns stdout/stderr, so logs only go to the file named
/// by `SPACE_SHOOTER_LOG`.  Without it, logging stays off.
fn init_logging() {
    let Ok(path) = std::env::var("SPACE_SHOOTER_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("cannot open log file {path}: {err}"),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Signal {
    Quit,
    Activate,
}

/// Input model: key events feed a `KeyTracker`, sampled once per frame.
///
/// * **Keyboard-enhancement capable** terminals tag auto-repeat as `Repeat`
///   and send `Release`, so movement keys stay held until let go and holding
///   Space fires once.
/// * **Classic terminals** report every OS repeat as a `Press`; movement keys
///   expire after a few frames of silence and there is no way to tell a
///   repeated Space from a fresh tap.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    assets: &Assets,
    keyboard_enhanced: bool,
) -> Result<(), GameError> {
    let config = GameConfig::default();
    let mut rng = thread_rng();
    let mut panel = CuePanel::default();

    // Assets were resolved before the terminal was taken over
    let (mut scene, _) = Scene::default().handle(SceneEvent::AssetsLoaded, &config);

    let mut keys = KeyTracker::new(keyboard_enhanced);
    let mut clock = FrameClock::new(MAX_STEP);
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut signal = None;
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        keys.press(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                signal = Some(Signal::Quit);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                signal = Some(Signal::Quit);
                            }
                            KeyCode::Enter => signal = Some(Signal::Activate),
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => keys.repeat(code, frame),
                    KeyEventKind::Release => keys.release(code),
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    ..
                }) => signal = Some(Signal::Activate),
                _ => {}
            }
        }

        match signal {
            Some(Signal::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Some(Signal::Activate) => {
                let (next, cues) = scene.handle(SceneEvent::Activate, &config);
                scene = next;
                panel.apply(&cues);
            }
            None => {}
        }

        // ── Sample held keys and advance the scene ────────────────────────────
        let input = keys.sample(frame);
        let dt_ms = clock.step(last_tick.elapsed());
        last_tick = Instant::now();
        let (next, cues) = scene.update(&input, dt_ms, &mut rng);
        scene = next;
        panel.apply(&cues);

        let (width, height) = terminal::size()?;
        display::render(out, &scene, assets, &panel, width, height)?;
        panel.fade();

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging();

    // Boot: a broken manifest is fatal before the terminal is touched
    let assets = AssetManifest::standard().resolve()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
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
                warn!("event reader stopped: {err}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &assets, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
