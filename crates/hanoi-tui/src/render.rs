use crate::app::{App, PlayState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use hanoi_core::Peg;
use std::io;

/// Rows above the tallest possible stack
const TOP_MARGIN: u16 = 3;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;
    execute!(stdout, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    render_title(stdout, app, term_width)?;
    let base_y = render_towers(stdout, app, term_width)?;
    render_info_panel(stdout, app, base_y + 3)?;
    render_controls(stdout, app, base_y + 9)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, term_height)?;
    }

    match app.state {
        PlayState::Finished => render_celebration(stdout, app, term_width, term_height)?,
        PlayState::Failed(ref error) => render_failure(stdout, app, error, base_y + 11)?,
        PlayState::Running | PlayState::Paused => {}
    }

    execute!(stdout, Show)?;
    Ok(())
}

/// Width in cells of `disk` when the largest of `total` disks spans `column_width - 2`.
///
/// Always odd so the disk centers on its pole.
pub fn disk_width(disk: u32, total: u32, column_width: u16) -> u16 {
    let usable = column_width.saturating_sub(2).max(1) as u32;
    let scaled = (disk * usable / total.max(1)).max(1);
    let odd = if scaled % 2 == 0 { scaled - 1 } else { scaled };
    odd.max(1) as u16
}

fn render_title(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let title = format!(
        "Tower of Hanoi - {} disks, {} generator",
        app.disks, app.strategy
    );
    let x = term_width.saturating_sub(title.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(x, 1),
        SetForegroundColor(app.theme.fg),
        Print(title)
    )?;
    Ok(())
}

/// Draw the three pegs and their disks; returns the row of the base line
fn render_towers(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<u16> {
    let theme = &app.theme;
    let towers = app.towers();
    let total = towers.disk_count();

    // Each column is wide enough for the largest disk plus a gap
    let column_width = (term_width / 3).min(2 * total as u16 + 5).max(7);
    let start_x = term_width.saturating_sub(column_width * 3) / 2;
    let base_y = TOP_MARGIN + total as u16 + 1;

    for peg in Peg::ALL {
        let column_x = start_x + peg.index() as u16 * column_width;
        let center = column_x + column_width / 2;

        // Pole
        for y in TOP_MARGIN..base_y {
            execute!(
                stdout,
                MoveTo(center, y),
                SetForegroundColor(theme.pole),
                Print("│")
            )?;
        }

        // Disks, bottom first
        for (level, &disk) in towers.peg(peg).iter().enumerate() {
            let width = disk_width(disk, total, column_width);
            let y = base_y - 1 - level as u16;
            execute!(
                stdout,
                MoveTo(center - width / 2, y),
                SetForegroundColor(theme.disk_color(disk, total)),
                Print("█".repeat(width as usize))
            )?;
        }

        // Base and label
        execute!(
            stdout,
            MoveTo(column_x + 1, base_y),
            SetForegroundColor(theme.pole),
            Print("▀".repeat(column_width.saturating_sub(2) as usize))
        )?;
        let label = format!("Tower {}", peg);
        execute!(
            stdout,
            MoveTo(center.saturating_sub(label.len() as u16 / 2), base_y + 1),
            SetForegroundColor(theme.info),
            Print(label)
        )?;
    }

    Ok(base_y)
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let x = 2;

    let (state_str, state_color) = match app.state {
        PlayState::Running => ("Running", theme.info),
        PlayState::Paused => ("Paused", theme.paused),
        PlayState::Finished => ("Solved", theme.success),
        PlayState::Failed(_) => ("Stopped", theme.error),
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print("State: "),
        SetForegroundColor(state_color),
        Print(format!("{:<8}", state_str))
    )?;

    execute!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(theme.info),
        Print(format!(
            "Move:  {} / {}",
            app.moves_applied(),
            app.total_moves()
        ))
    )?;

    let last = match app.last_step {
        Some(step) => format!("disk {} {}", step.disk, step.mv),
        None => "-".to_string(),
    };
    execute!(
        stdout,
        MoveTo(x, y + 2),
        Print(format!("Last:  {}", last))
    )?;

    execute!(
        stdout,
        MoveTo(x, y + 3),
        Print(format!("Delay: {} ms", app.delay().as_millis()))
    )?;

    // Progress bar
    let bar_width = 30usize;
    let filled = if app.total_moves() == 0 {
        bar_width
    } else {
        (app.moves_applied() as usize * bar_width) / app.total_moves() as usize
    };
    execute!(
        stdout,
        MoveTo(x, y + 4),
        SetForegroundColor(theme.success),
        Print("━".repeat(filled)),
        SetForegroundColor(theme.border),
        Print("━".repeat(bar_width - filled))
    )?;

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let controls = [
        ("Space", "pause"),
        ("n", "step"),
        ("+/-", "speed"),
        ("r", "restart"),
        ("q", "quit"),
    ];

    execute!(stdout, MoveTo(2, y))?;
    for (key, action) in controls {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}  ", action))
        )?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let x = term_width.saturating_sub(msg.len() as u16 + 4) / 2;
    let y = term_height.saturating_sub(2);
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.key),
        Print(format!("  {}  ", msg))
    )?;
    Ok(())
}

fn render_celebration(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.celebration.resize(term_width, term_height);

    for particle in app.celebration.particles() {
        if particle.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(particle.x as u16, particle.y as u16),
                SetForegroundColor(particle.color),
                Print(particle.char)
            )?;
        }
    }

    let banner = format!("Solved in {} moves!", app.moves_applied());
    let x = term_width.saturating_sub(banner.len() as u16) / 2;
    let pulse = (app.celebration.frame_count() / 8) % 2 == 0;
    execute!(
        stdout,
        MoveTo(x, 2),
        SetForegroundColor(if pulse { app.theme.success } else { Color::White }),
        Print(banner)
    )?;
    Ok(())
}

fn render_failure(stdout: &mut io::Stdout, app: &App, error: &str, y: u16) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(2, y),
        SetForegroundColor(app.theme.error),
        Print(format!("Engine error: {}", error))
    )?;
    Ok(())
}
