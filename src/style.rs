//! Curve color assignment.

use crate::render::Color;

const DEFAULT_COLORS: [Color; 7] = [
    Color::from_rgb_hex(0x4242fd),
    Color::from_rgb_hex(0x008000),
    Color::from_rgb_hex(0xff0000),
    Color::from_rgb_hex(0x2dbbbb),
    Color::from_rgb_hex(0xbe08be),
    Color::from_rgb_hex(0xb9b93d),
    Color::from_rgb_hex(0x000000),
];

/// Ordered palette handed out round-robin to new curves.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// An empty list falls back to black.
    pub fn new(colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() {
            vec![Color::BLACK]
        } else {
            colors
        };
        Self { colors, next: 0 }
    }

    /// Take the next color, wrapping at the end.
    pub fn next_color(&mut self) -> Color {
        let color = self.colors[self.next % self.colors.len()];
        self.next = (self.next + 1) % self.colors.len();
        color
    }

    /// Restart from the first color.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Access the palette colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_in_order() {
        let mut palette = Palette::default();
        let first: Vec<_> = (0..7).map(|_| palette.next_color()).collect();
        assert_eq!(first, DEFAULT_COLORS.to_vec());
        assert_eq!(palette.next_color(), DEFAULT_COLORS[0]);
    }

    #[test]
    fn empty_palette_is_black() {
        let mut palette = Palette::new(Vec::new());
        assert_eq!(palette.next_color(), Color::BLACK);
        assert_eq!(palette.next_color(), Color::BLACK);
    }
}
