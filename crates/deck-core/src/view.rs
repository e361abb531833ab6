//! Presentation-side seams.
//!
//! The state machines never touch the DOM directly. They call into these
//! traits, which the web frontend implements on top of `web-sys` and the tests
//! implement with recording fakes. Implementations are expected to skip
//! silently when an element is missing from the host markup.

use crate::animation::AnimatedGroup;
use crate::celebration::ConfettiPiece;
use crate::effects::{EffectId, NthRule};
use crate::slide::SlideId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavButton {
    Previous,
    Next,
}

pub trait SlideView {
    fn set_slide_active(&mut self, slide: SlideId, active: bool);
    fn set_counter_text(&mut self, text: &str);
    fn set_button_disabled(&mut self, button: NavButton, disabled: bool);
    /// Set `animation: none` on every element of `group` inside `slide`.
    fn suspend_animation(&mut self, slide: SlideId, group: &AnimatedGroup);
    /// Re-apply the group's animation (and per-element delay, if any).
    fn resume_animation(&mut self, slide: SlideId, group: &AnimatedGroup);
}

pub trait DeckView: SlideView {
    /// Toggle the whole-page filter used while a celebration runs.
    fn set_page_celebration(&mut self, on: bool);
    fn show_banner(&mut self, id: EffectId, text: &str);
    fn spawn_confetti(&mut self, id: EffectId, piece: &ConfettiPiece);
    fn remove_effect(&mut self, id: EffectId);
    fn clear_highlights(&mut self);
    /// Highlight the items matched by `rule` with their animation suspended.
    fn highlight_nth(&mut self, rule: NthRule);
    fn replay_highlight(&mut self, rule: NthRule);
}
