/// Outcome counters of one frame pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Objects that issued drawing calls.
    pub drawn: usize,
    /// Objects skipped because `visible == false`.
    pub hidden: usize,
    /// Visible objects with nothing left after clipping.
    pub culled: usize,
}

impl FrameStats {
    #[inline]
    pub fn total(&self) -> usize {
        self.drawn + self.hidden + self.culled
    }
}
