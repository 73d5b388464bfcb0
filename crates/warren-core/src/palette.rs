//! The [`Color`] palette used for cell rendering.

/// An ANSI 256-color palette index.
///
/// Rendering backends map these to whatever their terminal or canvas
/// supports; the engine itself never emits control codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Cyan = 6,
    Gray = 7,
    Magenta = 13,
    White = 15,
}

impl Color {
    /// The ANSI 256-color index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_indices() {
        assert_eq!(Color::Black.index(), 0);
        assert_eq!(Color::Red.index(), 1);
        assert_eq!(Color::Cyan.index(), 6);
        assert_eq!(Color::Magenta.index(), 13);
        assert_eq!(Color::White.index(), 15);
    }
}
