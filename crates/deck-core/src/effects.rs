use crate::constants::{TILT_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use rand::Rng;

/// Handle for an ephemeral DOM node (ripple, sparkle, confetti, banner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(u64);

#[derive(Debug, Default)]
pub struct EffectIds {
    next: u64,
}

impl EffectIds {
    pub fn next_id(&mut self) -> EffectId {
        let id = EffectId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Client-space bounding box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Circle spawned under a click on a `.ripple-btn`, in the button's local
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple-animation 0.6s ease-out; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// 3D tilt that follows the pointer over a card.
pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64) -> String {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let rotate_x = css_number((y - rect.height / 2.0) / TILT_DIVISOR);
    let rotate_y = css_number((rect.width / 2.0 - x) / TILT_DIVISOR);
    format!(
        "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ({TILT_LIFT_PX}px)"
    )
}

// f64 prints negative zero as "-0"
#[inline]
fn css_number(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

/// Random point inside `rect`, in client coordinates.
pub fn sparkle_position<R: Rng + ?Sized>(rect: Rect, rng: &mut R) -> (f64, f64) {
    (
        rect.left + rng.gen::<f64>() * rect.width,
        rect.top + rng.gen::<f64>() * rect.height,
    )
}

pub fn sparkle_css_text(left: f64, top: f64) -> String {
    format!(
        "position: absolute; pointer-events: none; font-size: 1rem; \
         animation: sparkle-float 1s ease-out forwards; z-index: 1000; left: {left}px; top: {top}px;"
    )
}

/// Rules offered by the nth-child demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NthRule {
    Odd,
    Even,
    EveryThird,
    TwoNPlusOne,
}

impl NthRule {
    pub fn parse(rule: &str) -> Option<Self> {
        match rule {
            "odd" => Some(Self::Odd),
            "even" => Some(Self::Even),
            "3n" => Some(Self::EveryThird),
            "2n+1" => Some(Self::TwoNPlusOne),
            _ => None,
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Self::Odd => ".nth-item:nth-child(odd)",
            Self::Even => ".nth-item:nth-child(even)",
            Self::EveryThird => ".nth-item:nth-child(3n)",
            Self::TwoNPlusOne => ".nth-item:nth-child(2n+1)",
        }
    }
}
