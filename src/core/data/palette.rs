use crate::core::data::colour::Colour;

/// Slot in a two-colour [`Palette`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteIndex {
    /// The point escaped.
    Background = 0,
    /// The point is in the set.
    Foreground = 1,
}

impl PaletteIndex {
    #[must_use]
    pub fn from_in_set(in_set: bool) -> Self {
        if in_set { Self::Foreground } else { Self::Background }
    }
}

/// Colour table shared read-only by every frame of an animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    background: Colour,
    foreground: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Colour::WHITE, Colour::BLACK)
    }
}

impl Palette {
    #[must_use]
    pub fn new(background: Colour, foreground: Colour) -> Self {
        Self {
            background,
            foreground,
        }
    }

    #[must_use]
    pub fn colour(&self, index: PaletteIndex) -> Colour {
        match index {
            PaletteIndex::Background => self.background,
            PaletteIndex::Foreground => self.foreground,
        }
    }
}
