use crate::celebration::{start_celebration, ConfettiPiece};
use crate::config::DeckConfig;
use crate::effects::{sparkle_position, EffectId, EffectIds, NthRule, Rect};
use crate::keyboard::{nav_command_for_key, NavCommand};
use crate::keyseq::KeySequenceDetector;
use crate::navigator::Navigator;
use crate::scheduler::{Deferred, ManualScheduler, Scheduler};
use crate::view::{DeckView, SlideView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// What the host should do with the key event after the deck handled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    pub prevent_default: bool,
    pub celebrated: bool,
}

/// Everything the page keeps in memory: the navigator, the easter-egg
/// detector and the bookkeeping for short-lived effects.
pub struct Deck {
    config: DeckConfig,
    navigator: Navigator,
    detector: KeySequenceDetector,
    ids: EffectIds,
    rng: StdRng,
    celebrations: u64,
}

impl Deck {
    pub fn new(config: DeckConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic confetti and sparkle placement.
    pub fn with_seed(config: DeckConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DeckConfig, rng: StdRng) -> Self {
        Self {
            navigator: Navigator::from_config(&config),
            detector: KeySequenceDetector::konami(),
            ids: EffectIds::default(),
            rng,
            celebrations: 0,
            config,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Number of celebrations started so far.
    pub fn celebrations(&self) -> u64 {
        self.celebrations
    }

    pub fn mount(&self, view: &mut impl SlideView) {
        self.navigator.mount(view);
    }

    pub fn advance(&mut self, view: &mut impl SlideView, sched: &mut impl Scheduler) -> bool {
        self.navigator.advance(view, sched)
    }

    pub fn retreat(&mut self, view: &mut impl SlideView, sched: &mut impl Scheduler) -> bool {
        self.navigator.retreat(view, sched)
    }

    pub fn jump_to(
        &mut self,
        n: u32,
        view: &mut impl SlideView,
        sched: &mut impl Scheduler,
    ) -> bool {
        self.navigator.jump_to(n, view, sched)
    }

    /// Route a key press. `key` is `KeyboardEvent.key` and drives navigation;
    /// `code` is `KeyboardEvent.code` and always goes to the detector.
    pub fn handle_key(
        &mut self,
        key: &str,
        code: &str,
        view: &mut impl DeckView,
        sched: &mut impl Scheduler,
    ) -> KeyResponse {
        let mut response = KeyResponse::default();
        if let Some(command) = nav_command_for_key(key) {
            response.prevent_default = true;
            match command {
                NavCommand::Next => {
                    self.navigator.advance(view, sched);
                }
                NavCommand::Previous => {
                    self.navigator.retreat(view, sched);
                }
                NavCommand::First => {
                    self.navigator.jump_to(1, view, sched);
                }
                NavCommand::Last => {
                    let last = self.navigator.total();
                    self.navigator.jump_to(last, view, sched);
                }
            }
        }
        if self.detector.push(code) {
            self.celebrate(view, sched);
            response.celebrated = true;
        }
        response
    }

    pub fn celebrate(&mut self, view: &mut impl DeckView, sched: &mut impl Scheduler) -> EffectId {
        self.celebrations += 1;
        log::info!("[egg] sequence matched, celebration #{}", self.celebrations);
        start_celebration(&self.config, &mut self.ids, view, sched)
    }

    /// nth-child demo: highlight the items matched by `rule` and replay their
    /// pulse. Unknown rules only clear the previous highlight.
    pub fn apply_nth_rule(
        &mut self,
        rule: &str,
        view: &mut impl DeckView,
        sched: &mut impl Scheduler,
    ) -> Option<NthRule> {
        view.clear_highlights();
        let parsed = NthRule::parse(rule)?;
        view.highlight_nth(parsed);
        sched.schedule(
            self.config.highlight_replay_delay,
            Deferred::ReplayHighlight(parsed),
        );
        Some(parsed)
    }

    /// Allocate a handle for a node the host just created and schedule its
    /// removal after `lifetime`.
    pub fn track_effect(&mut self, lifetime: Duration, sched: &mut impl Scheduler) -> EffectId {
        let id = self.ids.next_id();
        sched.schedule(lifetime, Deferred::RemoveEffect(id));
        id
    }

    pub fn sparkle_position(&mut self, rect: Rect) -> (f64, f64) {
        sparkle_position(rect, &mut self.rng)
    }

    /// Execute a deferred task that came due.
    pub fn run(&mut self, task: Deferred, view: &mut impl DeckView, sched: &mut impl Scheduler) {
        match task {
            Deferred::ResumeAnimation { slide, group } => {
                self.navigator.resume_animation(slide, group, view);
            }
            Deferred::SpawnConfetti => {
                let piece = ConfettiPiece::random(&mut self.rng);
                let id = self.ids.next_id();
                view.spawn_confetti(id, &piece);
                sched.schedule(self.config.confetti_lifetime, Deferred::RemoveEffect(id));
            }
            Deferred::EndCelebration { banner } => {
                view.remove_effect(banner);
                view.set_page_celebration(false);
            }
            Deferred::RemoveEffect(id) => view.remove_effect(id),
            Deferred::ReplayHighlight(rule) => view.replay_highlight(rule),
        }
    }

    /// Step virtual time by `by`, running every task that comes due,
    /// including ones scheduled by earlier tasks within the window.
    pub fn run_for(
        &mut self,
        by: Duration,
        view: &mut impl DeckView,
        sched: &mut ManualScheduler,
    ) {
        let until = sched.now() + by;
        while let Some(task) = sched.pop_due(until) {
            self.run(task, view, sched);
        }
        sched.advance_to(until);
    }
}
