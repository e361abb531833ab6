use crate::animation::AnimationRegistry;
use crate::config::DeckConfig;
use crate::scheduler::{Deferred, Scheduler};
use crate::slide::SlideId;
use crate::view::{NavButton, SlideView};
use std::time::Duration;

/// Slide navigation state machine.
///
/// Holds the current slide in `1..=total`. Moves past either end and jumps
/// outside the range are absorbed as no-ops; the returned `bool` only says
/// whether the view was touched.
#[derive(Clone, Debug)]
pub struct Navigator {
    current: u32,
    total: u32,
    animations: AnimationRegistry,
    restart_delay: Duration,
}

impl Navigator {
    pub fn new(total: u32, animations: AnimationRegistry, restart_delay: Duration) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            animations,
            restart_delay,
        }
    }

    pub fn from_config(config: &DeckConfig) -> Self {
        Self::new(
            config.total_slides,
            AnimationRegistry::standard(),
            config.animation_restart_delay,
        )
    }

    #[inline]
    pub fn current(&self) -> SlideId {
        SlideId::new(self.current).unwrap_or(SlideId::FIRST)
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    /// Bring the view in line with the initial state: only the current slide
    /// is active and the counter and buttons match it.
    pub fn mount(&self, view: &mut impl SlideView) {
        for ordinal in 1..=self.total {
            if let Some(slide) = SlideId::new(ordinal) {
                view.set_slide_active(slide, ordinal == self.current);
            }
        }
        self.refresh_counter_and_buttons(view);
    }

    pub fn advance(&mut self, view: &mut impl SlideView, sched: &mut impl Scheduler) -> bool {
        if self.current >= self.total {
            return false;
        }
        self.move_to(self.current + 1, view, sched);
        true
    }

    pub fn retreat(&mut self, view: &mut impl SlideView, sched: &mut impl Scheduler) -> bool {
        if self.current <= 1 {
            return false;
        }
        self.move_to(self.current - 1, view, sched);
        true
    }

    /// Jump to slide `n`. Out-of-range input is ignored; jumping to the
    /// current slide replays its animations.
    pub fn jump_to(
        &mut self,
        n: u32,
        view: &mut impl SlideView,
        sched: &mut impl Scheduler,
    ) -> bool {
        if !(1..=self.total).contains(&n) {
            log::debug!("[nav] ignoring jump to {} (deck has {})", n, self.total);
            return false;
        }
        self.move_to(n, view, sched);
        true
    }

    fn move_to(&mut self, target: u32, view: &mut impl SlideView, sched: &mut impl Scheduler) {
        if let Some(leaving) = SlideId::new(self.current) {
            view.set_slide_active(leaving, false);
        }
        self.current = target;
        let entering = self.current();
        self.activate_slide(entering, view, sched);
        self.refresh_counter_and_buttons(view);
        log::debug!("[nav] slide {}", self.counter_text());
    }

    fn activate_slide(
        &self,
        slide: SlideId,
        view: &mut impl SlideView,
        sched: &mut impl Scheduler,
    ) {
        view.set_slide_active(slide, true);
        for (index, group) in self.animations.groups(slide).iter().enumerate() {
            view.suspend_animation(slide, group);
            sched.schedule(
                self.restart_delay,
                Deferred::ResumeAnimation {
                    slide,
                    group: index,
                },
            );
        }
    }

    pub fn refresh_counter_and_buttons(&self, view: &mut impl SlideView) {
        view.set_counter_text(&self.counter_text());
        view.set_button_disabled(NavButton::Previous, self.is_first());
        view.set_button_disabled(NavButton::Next, self.is_last());
    }

    /// Second half of an animation restart, run from the scheduler.
    pub fn resume_animation(&self, slide: SlideId, group: usize, view: &mut impl SlideView) {
        if let Some(group) = self.animations.group(slide, group) {
            view.resume_animation(slide, group);
        }
    }
}
