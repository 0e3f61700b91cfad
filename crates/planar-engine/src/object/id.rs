use core::fmt;

/// Identifier assigned to an object at scene insertion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
