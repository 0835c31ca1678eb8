use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Peg poles and base
    pub pole: Color,
    /// Separator lines
    pub border: Color,
    /// Status text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Solved banner color
    pub success: Color,
    /// Error color
    pub error: Color,
    /// Paused indicator
    pub paused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            pole: Color::Rgb { r: 130, g: 140, b: 170 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            paused: Color::Rgb { r: 80, g: 180, b: 255 },
        }
    }

    /// Color for `disk` out of `total`; small disks are warm, large disks cool
    pub fn disk_color(&self, disk: u32, total: u32) -> Color {
        let span = total.max(1) as f32;
        let hue = (disk.saturating_sub(1)) as f32 / span * 0.75;
        hue_to_rgb(hue)
    }
}

/// Convert hue (0.0-1.0) to RGB color
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue * 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;

    let (r, g, b) = match h as i32 % 6 {
        0 => (255, x as u8, 0),
        1 => (x as u8, 255, 0),
        2 => (0, 255, x as u8),
        3 => (0, x as u8, 255),
        4 => (x as u8, 0, 255),
        _ => (255, 0, x as u8),
    };

    Color::Rgb { r, g, b }
}
