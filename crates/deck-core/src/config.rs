use crate::constants::*;
use crate::error::ConfigError;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct DeckConfig {
    pub total_slides: u32,
    pub animation_restart_delay: Duration,
    pub celebration_duration: Duration,
    pub confetti_count: usize,
    pub confetti_stagger: Duration,
    pub confetti_lifetime: Duration,
    pub ripple_lifetime: Duration,
    pub sparkle_lifetime: Duration,
    pub highlight_replay_delay: Duration,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            total_slides: DEFAULT_TOTAL_SLIDES,
            animation_restart_delay: ANIMATION_RESTART_DELAY,
            celebration_duration: CELEBRATION_DURATION,
            confetti_count: CONFETTI_COUNT,
            confetti_stagger: CONFETTI_STAGGER,
            confetti_lifetime: CONFETTI_LIFETIME,
            ripple_lifetime: RIPPLE_LIFETIME,
            sparkle_lifetime: SPARKLE_LIFETIME,
            highlight_replay_delay: HIGHLIGHT_REPLAY_DELAY,
        }
    }
}

impl DeckConfig {
    pub fn with_total_slides(mut self, total_slides: u32) -> Self {
        self.total_slides = total_slides.max(1);
        self
    }

    /// Apply an optional `data-total-slides` override. A missing attribute
    /// keeps the current value.
    pub fn with_total_slides_attr(self, attr: Option<&str>) -> Result<Self, ConfigError> {
        match attr {
            Some(raw) => Ok(self.with_total_slides(parse_total_slides(raw)?)),
            None => Ok(self),
        }
    }
}

pub fn parse_total_slides(raw: &str) -> Result<u32, ConfigError> {
    let total = raw
        .trim()
        .parse::<u32>()
        .map_err(|source| ConfigError::InvalidTotalSlides {
            raw: raw.to_string(),
            source,
        })?;
    if total == 0 {
        return Err(ConfigError::NoSlides);
    }
    Ok(total)
}
