use crossterm::style::Color;
use rand::prelude::SliceRandom;
use rand::Rng;

/// Confetti characters
const CONFETTI_CHARS: &[char] = &['*', '✦', '✧', '◆', '◇', '○', '●', '■', '□', '▲', '▽'];

/// Frames of confetti after a solve (~3 seconds at 30 FPS)
const DURATION_FRAMES: u32 = 90;

/// A single falling particle
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }
}

/// Generate a random bright color
fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}

/// Confetti shown once the tower has been moved
#[derive(Default)]
pub struct Celebration {
    particles: Vec<Particle>,
    frame_count: u32,
    width: u16,
    height: u16,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.frame_count = 0;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Whether new confetti is still being spawned
    pub fn is_active(&self) -> bool {
        self.frame_count < DURATION_FRAMES
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn update(&mut self) {
        self.frame_count = self.frame_count.saturating_add(1);

        let height = self.height as f32;
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += 0.05; // Gravity
            p.lifetime -= 0.016;
            p.lifetime > 0.0 && p.y < height + 2.0
        });

        if self.is_active() && self.width > 0 {
            self.spawn_confetti();
        }
    }

    fn spawn_confetti(&mut self) {
        let mut rng = rand::thread_rng();
        for _ in 0..2 {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.width as f32),
                y: -1.0,
                vx: rng.gen_range(-0.4..0.4),
                vy: rng.gen_range(0.2..0.8),
                char: CONFETTI_CHARS.choose(&mut rng).copied().unwrap_or('*'),
                color: random_bright_color(),
                lifetime: rng.gen_range(2.0..4.0),
            });
        }
    }
}
