//! Per-slide animation registry.
//!
//! Slides may own animated sub-elements whose CSS animations must replay from
//! frame zero every time the slide is shown. The registry maps a slide to the
//! groups of elements (by CSS selector, scoped to the slide element) that need
//! restarting and the animation value to re-apply.

use crate::slide::SlideId;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stagger {
    None,
    /// Element `i` gets `animation-delay: -<i>s`, so a row of elements starts
    /// already out of phase.
    NegativeSecondsByIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatedGroup {
    pub selector: &'static str,
    pub animation: &'static str,
    pub stagger: Stagger,
}

impl AnimatedGroup {
    pub const fn new(selector: &'static str, animation: &'static str) -> Self {
        Self {
            selector,
            animation,
            stagger: Stagger::None,
        }
    }

    pub const fn staggered(mut self) -> Self {
        self.stagger = Stagger::NegativeSecondsByIndex;
        self
    }

    /// `animation-delay` for the element at `index`, if the group staggers.
    pub fn delay_for(&self, index: usize) -> Option<String> {
        match self.stagger {
            Stagger::None => None,
            Stagger::NegativeSecondsByIndex => Some(format!("{}s", -(index as i64))),
        }
    }
}

pub const FLOATING_ELEMENTS: AnimatedGroup =
    AnimatedGroup::new(".element", "float 3s ease-in-out infinite").staggered();
pub const LOADER_SPIN: AnimatedGroup = AnimatedGroup::new(".loader", "spin 1s linear infinite");
pub const PROGRESS_FILL: AnimatedGroup =
    AnimatedGroup::new(".progress-fill", "progress 3s ease-in-out infinite");

#[derive(Clone, Debug, Default)]
pub struct AnimationRegistry {
    groups: FnvHashMap<SlideId, SmallVec<[AnimatedGroup; 2]>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the stock deck: floating shapes on the title slide and the
    /// loader showcase on slide 8.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(SlideId::FIRST, FLOATING_ELEMENTS);
        if let Some(showcase) = SlideId::new(8) {
            registry
                .register(showcase, LOADER_SPIN)
                .register(showcase, PROGRESS_FILL);
        }
        registry
    }

    pub fn register(&mut self, slide: SlideId, group: AnimatedGroup) -> &mut Self {
        self.groups.entry(slide).or_default().push(group);
        self
    }

    pub fn groups(&self, slide: SlideId) -> &[AnimatedGroup] {
        self.groups.get(&slide).map(|g| g.as_slice()).unwrap_or(&[])
    }

    pub fn group(&self, slide: SlideId, index: usize) -> Option<&AnimatedGroup> {
        self.groups(slide).get(index)
    }
}
