use crate::config::DeckConfig;
use crate::constants::{
    CELEBRATION_MESSAGE, CONFETTI_COLORS, CONFETTI_FALL_SECS_MIN, CONFETTI_FALL_SECS_SPAN,
};
use crate::effects::{EffectId, EffectIds};
use crate::scheduler::{Deferred, Scheduler};
use crate::view::DeckView;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    /// Horizontal start position in `vw`, in `[0, 100)`.
    pub left_vw: f64,
    pub fall_secs: f64,
    pub round: bool,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0]),
            left_vw: rng.gen::<f64>() * 100.0,
            fall_secs: CONFETTI_FALL_SECS_MIN + rng.gen::<f64>() * CONFETTI_FALL_SECS_SPAN,
            round: rng.gen_bool(0.5),
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; background: {color}; left: {left}vw; \
             top: -10px; z-index: 9999; animation: confetti-fall {fall}s linear forwards; \
             border-radius: {radius};",
            color = self.color,
            left = self.left_vw,
            fall = self.fall_secs,
            radius = if self.round { "50%" } else { "0" },
        )
    }
}

/// Start a celebration: page filter and banner now, confetti staggered over
/// time, and everything lifted once `celebration_duration` has passed.
///
/// Nothing is locked; a second start while one is running layers another
/// banner and another confetti shower on top. Returns the banner handle.
pub fn start_celebration(
    config: &DeckConfig,
    ids: &mut EffectIds,
    view: &mut impl DeckView,
    sched: &mut impl Scheduler,
) -> EffectId {
    view.set_page_celebration(true);
    for i in 0..config.confetti_count {
        sched.schedule(config.confetti_stagger * i as u32, Deferred::SpawnConfetti);
    }
    let banner = ids.next_id();
    view.show_banner(banner, CELEBRATION_MESSAGE);
    sched.schedule(config.celebration_duration, Deferred::EndCelebration { banner });
    banner
}
