use crate::constants::KONAMI_SEQUENCE;
use std::collections::VecDeque;

/// Sliding-window matcher over raw key codes.
///
/// Keeps the last `target.len()` codes and reports a match when they equal
/// the target in order. The window is cleared on a match so overlapping input
/// cannot fire twice.
#[derive(Clone, Debug)]
pub struct KeySequenceDetector {
    target: Box<[String]>,
    window: VecDeque<String>,
}

impl KeySequenceDetector {
    pub fn new<I, S>(target: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target: Box<[String]> = target.into_iter().map(Into::into).collect();
        let window = VecDeque::with_capacity(target.len() + 1);
        Self { target, window }
    }

    /// Up Up Down Down Left Right Left Right B A, by `KeyboardEvent.code`.
    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn buffered(&self) -> usize {
        self.window.len()
    }

    /// Feed one key code; returns true when the sequence just completed.
    pub fn push(&mut self, code: &str) -> bool {
        if self.target.is_empty() {
            return false;
        }
        self.window.push_back(code.to_string());
        while self.window.len() > self.target.len() {
            self.window.pop_front();
        }
        let matched = self.window.len() == self.target.len()
            && self.window.iter().zip(self.target.iter()).all(|(a, b)| a == b);
        if matched {
            self.window.clear();
        }
        matched
    }
}

impl Default for KeySequenceDetector {
    fn default() -> Self {
        Self::konami()
    }
}
