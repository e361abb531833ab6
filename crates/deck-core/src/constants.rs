use std::time::Duration;

// Shared deck tuning constants used by the web frontend and the tests.

// Presentation
pub const DEFAULT_TOTAL_SLIDES: u32 = 15;

// Slide animations are set to `none` and re-applied after this delay so the
// browser sees a fresh animation on the next paint.
pub const ANIMATION_RESTART_DELAY: Duration = Duration::from_millis(10);

// Easter egg
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(5);
pub const CELEBRATION_FILTER: &str = "hue-rotate(180deg)";
pub const CELEBRATION_ANIMATION: &str = "rainbow 2s ease-in-out infinite";
pub const CELEBRATION_MESSAGE: &str = "🎉 ¡CSS MASTER ACTIVADO! 🎉";

// Confetti
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_STAGGER: Duration = Duration::from_millis(100);
pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(5);
pub const CONFETTI_COLORS: [&str; 5] = ["#ff6b6b", "#4ecdc4", "#45b7d1", "#ffd700", "#ff8c42"];
pub const CONFETTI_FALL_SECS_MIN: f64 = 2.0;
pub const CONFETTI_FALL_SECS_SPAN: f64 = 3.0;

// Decorative effects
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const SPARKLE_LIFETIME: Duration = Duration::from_secs(1);
pub const HIGHLIGHT_REPLAY_DELAY: Duration = Duration::from_millis(10);
pub const HIGHLIGHT_ANIMATION: &str = "highlight-pulse 0.6s ease-in-out";

// Card tilt: offset from the card centre in px is divided by this to get degrees
pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 10.0;
