use crate::core::data::indexed_bitmap::IndexedBitmap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoopCount {
    #[default]
    Infinite,
    Times(u16),
}

/// Ordered frames ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<IndexedBitmap>,
    frame_delay: u32,
    loop_count: LoopCount,
}

impl Animation {
    #[must_use]
    pub fn new(frames: Vec<IndexedBitmap>, frame_delay: u32, loop_count: LoopCount) -> Self {
        Self {
            frames,
            frame_delay,
            loop_count,
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[IndexedBitmap] {
        &self.frames
    }

    /// Delay applied to every frame, in hundredths of a second.
    #[must_use]
    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }

    #[must_use]
    pub fn loop_count(&self) -> LoopCount {
        self.loop_count
    }
}
