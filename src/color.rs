// src/color.rs

//! Defines the `Color` value produced by color maps and carried by samples.

/// A color with floating point components in `[0, 1]`.
///
/// Color maps report either three components or four; the arity is preserved so each
/// emitter can decide what to do with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// An opaque color.
    Rgb(f64, f64, f64),
    /// A color with an explicit alpha channel.
    Rgba(f64, f64, f64, f64),
}

/// Alpha reported for colors that carry none.
pub const OPAQUE: f64 = 1.0;

impl Color {
    /// The red, green and blue components, dropping alpha.
    pub fn rgb(&self) -> [f64; 3] {
        match *self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => [r, g, b],
        }
    }

    /// All four components. Opaque colors report an alpha of [`OPAQUE`].
    pub fn rgba(&self) -> [f64; 4] {
        match *self {
            Color::Rgb(r, g, b) => [r, g, b, OPAQUE],
            Color::Rgba(r, g, b, a) => [r, g, b, a],
        }
    }

    /// The components exactly as reported, three or four of them.
    pub fn components(&self) -> Vec<f64> {
        match *self {
            Color::Rgb(r, g, b) => vec![r, g, b],
            Color::Rgba(r, g, b, a) => vec![r, g, b, a],
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Color::Rgba(..))
    }

    /// Clamps every component into `[0, 1]`, keeping the arity.
    pub fn clamped(self) -> Self {
        let c = |v: f64| v.clamp(0.0, 1.0);
        match self {
            Color::Rgb(r, g, b) => Color::Rgb(c(r), c(g), c(b)),
            Color::Rgba(r, g, b, a) => Color::Rgba(c(r), c(g), c(b), c(a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_defaults_alpha_for_opaque_colors() {
        assert_eq!(Color::Rgb(0.1, 0.2, 0.3).rgba(), [0.1, 0.2, 0.3, OPAQUE]);
        assert_eq!(Color::Rgba(0.1, 0.2, 0.3, 0.5).rgba(), [0.1, 0.2, 0.3, 0.5]);
    }

    #[test]
    fn rgb_drops_alpha() {
        assert_eq!(Color::Rgba(0.1, 0.2, 0.3, 0.5).rgb(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn components_keep_arity() {
        assert_eq!(Color::Rgb(0.0, 0.5, 1.0).components().len(), 3);
        assert_eq!(Color::Rgba(0.0, 0.5, 1.0, 1.0).components().len(), 4);
    }

    #[test]
    fn clamped_limits_each_component() {
        let c = Color::Rgba(-0.2, 0.5, 1.7, 2.0).clamped();
        assert_eq!(c, Color::Rgba(0.0, 0.5, 1.0, 1.0));
        assert!(c.has_alpha());
    }
}
