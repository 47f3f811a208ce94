// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

use bitflags::bitflags;

bitflags! {
    /// Selects which regions [`StringBuilder::resize`] touches and how.
    ///
    /// Without `FORCE`, a region is resized to its normalized size. With
    /// `FORCE`, it is resized to exactly the requested size.
    ///
    /// [`StringBuilder::resize`]: crate::StringBuilder::resize
    pub struct ResizeFlags: u8 {
        /// Resize the content region.
        const CONTENT = 0b001;
        /// Resize the scratch region.
        const SCRATCH = 0b010;
        /// Use the exact target instead of the normalized size.
        const FORCE = 0b100;
        /// Both regions, naturally sized.
        const BOTH = Self::CONTENT.bits | Self::SCRATCH.bits;
    }
}
