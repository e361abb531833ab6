// Recording fake for the view seams, shared by the host-side tests.

#![allow(dead_code)]

use deck_core::{
    AnimatedGroup, ConfettiPiece, DeckView, EffectId, NavButton, NthRule, SlideId, SlideView,
};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub struct RecordingView {
    pub active: BTreeSet<u32>,
    pub counter: String,
    pub prev_disabled: Option<bool>,
    pub next_disabled: Option<bool>,
    pub suspended: Vec<(u32, &'static str)>,
    pub resumed: Vec<(u32, &'static str)>,
    pub celebrating: bool,
    pub banners: BTreeMap<EffectId, String>,
    pub confetti: BTreeMap<EffectId, ConfettiPiece>,
    pub confetti_spawned: usize,
    pub removed: Vec<EffectId>,
    pub highlight_clears: usize,
    pub highlighted: Option<NthRule>,
    pub replayed: Vec<NthRule>,
}

impl RecordingView {
    pub fn active_slides(&self) -> Vec<u32> {
        self.active.iter().copied().collect()
    }
}

impl SlideView for RecordingView {
    fn set_slide_active(&mut self, slide: SlideId, active: bool) {
        if active {
            self.active.insert(slide.get());
        } else {
            self.active.remove(&slide.get());
        }
    }

    fn set_counter_text(&mut self, text: &str) {
        self.counter = text.to_string();
    }

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool) {
        match button {
            NavButton::Previous => self.prev_disabled = Some(disabled),
            NavButton::Next => self.next_disabled = Some(disabled),
        }
    }

    fn suspend_animation(&mut self, slide: SlideId, group: &AnimatedGroup) {
        self.suspended.push((slide.get(), group.selector));
    }

    fn resume_animation(&mut self, slide: SlideId, group: &AnimatedGroup) {
        self.resumed.push((slide.get(), group.selector));
    }
}

impl DeckView for RecordingView {
    fn set_page_celebration(&mut self, on: bool) {
        self.celebrating = on;
    }

    fn show_banner(&mut self, id: EffectId, text: &str) {
        self.banners.insert(id, text.to_string());
    }

    fn spawn_confetti(&mut self, id: EffectId, piece: &ConfettiPiece) {
        self.confetti_spawned += 1;
        self.confetti.insert(id, piece.clone());
    }

    fn remove_effect(&mut self, id: EffectId) {
        self.banners.remove(&id);
        self.confetti.remove(&id);
        self.removed.push(id);
    }

    fn clear_highlights(&mut self) {
        self.highlight_clears += 1;
        self.highlighted = None;
    }

    fn highlight_nth(&mut self, rule: NthRule) {
        self.highlighted = Some(rule);
    }

    fn replay_highlight(&mut self, rule: NthRule) {
        self.replayed.push(rule);
    }
}
