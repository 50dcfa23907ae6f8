//! Scoped indentation depth

use std::ops::{Deref, DerefMut};

use super::CGenerator;

/// One level deeper for as long as the guard lives.
///
/// Rendering a nested block goes through the guard; dropping it restores
/// the depth it found, also when rendering bailed out with `?` or a full
/// `generate` reset the generator underneath it.
pub struct DepthGuard<'g> {
    generator: &'g mut CGenerator,
    /// Depth to put back on drop
    saved: usize,
}

impl<'g> DepthGuard<'g> {
    pub(super) fn new(generator: &'g mut CGenerator) -> Self {
        let saved = generator.depth;
        generator.depth += 1;
        Self { generator, saved }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.generator.depth = self.saved;
    }
}

impl Deref for DepthGuard<'_> {
    type Target = CGenerator;

    fn deref(&self) -> &CGenerator {
        self.generator
    }
}

impl DerefMut for DepthGuard<'_> {
    fn deref_mut(&mut self) -> &mut CGenerator {
        self.generator
    }
}
