use crate::celebration::Celebration;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use hanoi_core::{count_moves, replay, HanoiConfig, Moves, Replay, Step, Strategy, Towers};
use std::time::Duration;

/// Fastest allowed pause between moves
pub const MIN_DELAY: Duration = Duration::from_millis(5);
/// Slowest allowed pause between moves
pub const MAX_DELAY: Duration = Duration::from_millis(2000);

/// Result of handling a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Playback state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    /// Applying one move per tick
    Running,
    /// Waiting for the user
    Paused,
    /// Every move applied
    Finished,
    /// A move was refused; the message is the engine's error
    Failed(String),
}

/// The animation state
pub struct App {
    /// Number of disks being moved
    pub disks: u32,
    /// Generator feeding the replay
    pub strategy: Strategy,
    /// Limits the replay was started with
    config: HanoiConfig,
    /// Replay driving the towers
    replay: Replay<Moves>,
    /// Total moves in the solution
    total_moves: u64,
    /// Most recently applied move
    pub last_step: Option<Step>,
    /// Current playback state
    pub state: PlayState,
    /// Pause between moves
    delay: Duration,
    /// Color theme
    pub theme: Theme,
    /// Confetti after the solve
    pub celebration: Celebration,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
}

impl App {
    /// Start a replay of `disks` disks.
    ///
    /// Fails with `ResourceLimitExceeded` when `disks` is above the configured
    /// animation limit.
    pub fn new(disks: u32, strategy: Strategy, config: &HanoiConfig) -> hanoi_core::Result<Self> {
        let replay = replay(disks, strategy, config)?;
        let total_moves = count_moves(disks)? as u64;
        log::info!(
            "Animating {} disks with the {} generator ({} moves)",
            disks,
            strategy,
            total_moves
        );
        Ok(Self {
            disks,
            strategy,
            config: config.clone(),
            replay,
            total_moves,
            last_step: None,
            state: PlayState::Running,
            delay: config.animation_delay().clamp(MIN_DELAY, MAX_DELAY),
            theme: Theme::dark(),
            celebration: Celebration::new(),
            message: None,
            message_timer: 0,
        })
    }

    /// Last fully applied configuration
    pub fn towers(&self) -> &Towers {
        self.replay.current()
    }

    pub fn moves_applied(&self) -> u64 {
        self.replay.applied()
    }

    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Get the tick rate based on playback state
    pub fn get_tick_rate(&self) -> Duration {
        match self.state {
            PlayState::Running => self.delay,
            PlayState::Finished => Duration::from_millis(33), // 30 FPS for confetti
            PlayState::Paused | PlayState::Failed(_) => Duration::from_millis(100),
        }
    }

    /// Advance playback and animations (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        match self.state {
            PlayState::Running => self.step(),
            PlayState::Finished => self.celebration.update(),
            PlayState::Paused | PlayState::Failed(_) => {}
        }
    }

    /// Apply exactly one move
    fn step(&mut self) {
        match self.replay.advance() {
            Ok(Some(step)) => {
                self.last_step = Some(step);
                if step.number == self.total_moves {
                    self.finish();
                }
            }
            Ok(None) => self.finish(),
            Err(e) => {
                log::error!("Animation stopped: {}", e);
                self.state = PlayState::Failed(e.to_string());
            }
        }
    }

    fn finish(&mut self) {
        if self.state != PlayState::Finished {
            log::info!("Solved {} disks in {} moves", self.disks, self.moves_applied());
            self.state = PlayState::Finished;
            self.celebration.reset();
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_pause(),
            KeyCode::Char('n') | KeyCode::Right => {
                if self.state == PlayState::Paused {
                    self.step();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_delay(self.delay / 2);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.set_delay(self.delay * 2);
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
        AppAction::Continue
    }

    fn toggle_pause(&mut self) {
        self.state = match &self.state {
            PlayState::Running => PlayState::Paused,
            PlayState::Paused => PlayState::Running,
            other => other.clone(),
        };
    }

    fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.clamp(MIN_DELAY, MAX_DELAY);
        self.show_message(&format!("Delay: {} ms", self.delay.as_millis()));
    }

    /// Start over from the initial configuration
    fn restart(&mut self) {
        match replay(self.disks, self.strategy, &self.config) {
            Ok(replay) => {
                self.replay = replay;
                self.last_step = None;
                self.state = PlayState::Running;
                self.celebration.reset();
                self.show_message("Restarted");
            }
            Err(e) => self.state = PlayState::Failed(e.to_string()),
        }
    }

    /// Show a message for about two seconds of ticks
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 20;
    }
}
