use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Number of hues in the series palette; colours repeat after this many
/// series.
pub const SERIES_PALETTE_SIZE: usize = 6;

/// Fill colour for the bar chart.
pub const BAR_COLOR: Color32 = Color32::from_rgb(54, 162, 235);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colours for line series, cycling after [`SERIES_PALETTE_SIZE`] entries.
#[derive(Debug, Clone)]
pub struct SeriesPalette {
    colors: Vec<Color32>,
}

impl SeriesPalette {
    pub fn new() -> Self {
        SeriesPalette {
            colors: generate_palette(SERIES_PALETTE_SIZE),
        }
    }

    /// Colour of the `index`-th series.
    pub fn color(&self, index: usize) -> Color32 {
        self.colors[index % self.colors.len()]
    }
}

impl Default for SeriesPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_are_distinct() {
        let palette = generate_palette(SERIES_PALETTE_SIZE);
        assert_eq!(palette.len(), SERIES_PALETTE_SIZE);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_series_palette_cycles() {
        let palette = SeriesPalette::new();
        assert_eq!(palette.color(0), palette.color(SERIES_PALETTE_SIZE));
        assert_ne!(palette.color(0), palette.color(1));
    }
}
