/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// current scene.  No game logic is performed; this module only translates
/// state into terminal commands.  World coordinates are scaled into the
/// bordered play area, so any terminal size shows the whole playfield.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use log::trace;
use space_shooter::assets::Assets;
use space_shooter::entities::{AudioCue, Entity, Session};
use space_shooter::scene::Scene;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_TIME: Color = Color::White;
const C_HUD_CUE: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_ASTEROID_SMALL: Color = Color::DarkYellow;
const C_ASTEROID_LARGE: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Frames a sound cue stays visible in the HUD.
const CUE_FLASH_FRAMES: u32 = 10;

/// Asteroids at or above this scale get the "large" colour.
const LARGE_ASTEROID_SCALE: f32 = 0.055;

// ── Audio cue presentation ────────────────────────────────────────────────────

/// The terminal has no mixer, so cues are shown rather than played: the
/// music state as a HUD flag, one-shot sounds as a short-lived label.
#[derive(Debug, Default)]
pub struct CuePanel {
    music_playing: bool,
    flash: Option<(AudioCue, u32)>,
}

impl CuePanel {
    pub fn apply(&mut self, cues: &[AudioCue]) {
        for &cue in cues {
            trace!("audio cue {cue:?}");
            match cue {
                AudioCue::StartMusic => self.music_playing = true,
                AudioCue::StopMusic => self.music_playing = false,
                AudioCue::Shoot | AudioCue::Hit => self.flash = Some((cue, CUE_FLASH_FRAMES)),
            }
        }
    }

    /// Age the one-shot label by a frame.
    pub fn fade(&mut self) {
        self.flash = match self.flash {
            Some((cue, frames)) if frames > 1 => Some((cue, frames - 1)),
            _ => None,
        };
    }
}

// ── Screen geometry ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    /// Map a world position to a cell inside the border.
    fn cell(&self, session: &Session, x: f32, y: f32) -> (u16, u16) {
        let cfg = &session.config;
        let cols = self.width.saturating_sub(2).max(1) as f32;
        let rows = self.height.saturating_sub(4).max(1) as f32;
        let col = 1.0 + (x / cfg.world_width * cols).floor();
        let row = 2.0 + (y / cfg.world_height * rows).floor();
        (
            (col.max(1.0) as u16).min(self.width.saturating_sub(2).max(1)),
            (row.max(2.0) as u16).min(self.height.saturating_sub(3).max(2)),
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever scene is active.
pub fn render<W: Write>(
    out: &mut W,
    scene: &Scene,
    assets: &Assets,
    cues: &CuePanel,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let view = Viewport { width, height };
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match scene {
        Scene::Boot => draw_centered(out, view, &[("Loading...", Color::DarkGrey)])?,
        Scene::Title => draw_title(out, view)?,
        Scene::Gameplay(session) => {
            draw_border(out, view)?;
            draw_hud(out, view, session, assets, cues)?;
            for (_, asteroid) in session.asteroids.iter_active() {
                draw_asteroid(out, view, session, asteroid)?;
            }
            for (_, projectile) in session.projectiles.iter_active() {
                draw_projectile(out, view, session, projectile)?;
            }
            draw_player(out, view, session)?;
            draw_controls_hint(out, view)?;
        }
        Scene::GameOver { score } => draw_result(out, view, "GAME  OVER", Color::Red, *score)?,
        Scene::Win { score } => draw_result(out, view, " YOU  WIN ", Color::Green, *score)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    view: Viewport,
    session: &Session,
    assets: &Assets,
    cues: &CuePanel,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", session.score)))?;

    out.queue(cursor::MoveTo(16, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(format!("Time: {}", session.elapsed_secs())))?;

    // Sound indicators — right side
    let music = if cues.music_playing {
        format!("♫ {}", assets.music.key)
    } else {
        String::new()
    };
    let flash = cues
        .flash
        .map(|(cue, _)| format!("♪ {}  ", assets.sound(cue).key))
        .unwrap_or_default();
    let right_str = format!("{flash}{music}");
    let rx = view
        .width
        .saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_CUE))?;
    out.queue(Print(&right_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, view: Viewport, session: &Session) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip)
    //  /█\      ← row y+1    (fuselage + wings)
    let p = &session.player;
    let (col, row) = view.cell(session, p.x, p.y);
    let row = row.min(view.height.saturating_sub(4));
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(if p.alive { "▲" } else { "✶" }))?;

    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
    out.queue(Print("/█\\"))?;

    Ok(())
}

fn draw_asteroid<W: Write>(
    out: &mut W,
    view: Viewport,
    session: &Session,
    asteroid: &Entity,
) -> std::io::Result<()> {
    // Quarter-turn glyphs so the spin is visible
    const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
    let frame = ((asteroid.angle / 90.0) as usize) % FRAMES.len();
    let color = if asteroid.scale >= LARGE_ASTEROID_SCALE {
        C_ASTEROID_LARGE
    } else {
        C_ASTEROID_SMALL
    };
    let (col, row) = view.cell(session, asteroid.x, asteroid.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(FRAMES[frame]))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: Viewport,
    session: &Session,
    projectile: &Entity,
) -> std::io::Result<()> {
    let (col, row) = view.cell(session, projectile.x, projectile.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Menu screens ──────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    draw_centered(
        out,
        view,
        &[
            ("★  SPACE  SHOOTER  ★", Color::Cyan),
            ("", Color::Reset),
            ("Click or press ENTER to start", Color::White),
            ("", Color::Reset),
            ("← → / A D : Move   SPACE : Shoot   Q : Quit", C_HINT),
        ],
    )
}

fn draw_result<W: Write>(
    out: &mut W,
    view: Viewport,
    banner: &str,
    color: Color,
    score: u32,
) -> std::io::Result<()> {
    let middle = format!("║    {banner}      ║");
    let score_line = format!("Score: {score}");
    draw_centered(
        out,
        view,
        &[
            ("╔════════════════════╗", color),
            (middle.as_str(), color),
            ("╚════════════════════╝", color),
            (score_line.as_str(), Color::Yellow),
            ("Click or press ENTER to restart   Q - Quit", Color::White),
        ],
    )
}
