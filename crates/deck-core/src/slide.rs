use std::fmt;

/// 1-based slide ordinal. Slide `n` lives in the element `#slide-n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u32);

impl SlideId {
    pub const FIRST: SlideId = SlideId(1);

    #[inline]
    pub fn new(ordinal: u32) -> Option<Self> {
        (ordinal >= 1).then_some(Self(ordinal))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn element_id(self) -> String {
        format!("slide-{}", self.0)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
