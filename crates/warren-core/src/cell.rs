//! The [`GridCell`] capability contract and the concrete [`Tile`] cell.

use crate::palette::Color;

/// Capability contract for cell types that participate in maze algorithms.
///
/// The engine is written against this interface and never assumes a
/// concrete cell type: anything exposing a wall flag, a display glyph, a
/// display color, and a traversal weight can populate a
/// [`Maze`](crate::Maze). The weight is meaningful only for non-wall cells
/// and must be non-negative.
pub trait GridCell {
    /// Whether the cell blocks traversal.
    fn is_wall(&self) -> bool;
    /// Glyph used for rendering.
    fn glyph(&self) -> char;
    /// Color used for rendering.
    fn color(&self) -> Color;
    /// Traversal cost for weighted searches.
    fn weight(&self) -> f32;
}

/// The engine-provided cell type: render and traversal metadata.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// True if the cell is not passable.
    pub wall: bool,
    /// Glyph used for rendering.
    pub glyph: char,
    /// Color used for rendering.
    pub color: Color,
    /// Traversal cost (used by weighted algorithms).
    pub weight: f32,
}

impl Tile {
    /// A blocking cell.
    #[inline]
    pub const fn wall(glyph: char, color: Color) -> Self {
        Self {
            wall: true,
            glyph,
            color,
            weight: 1.0,
        }
    }

    /// A passable cell.
    #[inline]
    pub const fn passage(glyph: char, color: Color) -> Self {
        Self {
            wall: false,
            glyph,
            color,
            weight: 1.0,
        }
    }

    /// Set the traversal weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Tile::passage(' ', Color::White)
    }
}

impl GridCell for Tile {
    #[inline]
    fn is_wall(&self) -> bool {
        self.wall
    }

    #[inline]
    fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    fn color(&self) -> Color {
        self.color
    }

    #[inline]
    fn weight(&self) -> f32 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_and_builder() {
        let w = Tile::wall('#', Color::Red).with_weight(5.0);
        assert!(w.is_wall());
        assert_eq!(w.glyph(), '#');
        assert_eq!(w.color(), Color::Red);
        assert_eq!(w.weight(), 5.0);

        let p = Tile::passage('.', Color::Green);
        assert!(!p.is_wall());
        assert_eq!(p.weight(), 1.0);
    }

    #[test]
    fn default_is_a_passage() {
        let t = Tile::default();
        assert!(!t.is_wall());
        assert_eq!(t.glyph(), ' ');
    }
}
