//! Rotator strategy: whole words, swapped after each dwell period.

use std::time::Duration;

use super::{WordCycler, WordList};

/// Shows one complete word at a time and moves to the next after `dwell`.
///
/// Drop-in alternative to [`super::Typewriter`] for surfaces where a
/// character-level animation is too busy.
#[derive(Clone, Debug)]
pub struct Rotator {
    words: WordList,
    dwell: Duration,
    index: usize,
}

impl Rotator {
    /// New rotator showing the first word.
    pub fn new(words: WordList, dwell: Duration) -> Self {
        Self {
            words,
            dwell,
            index: 0,
        }
    }

    /// Index of the word on display.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl WordCycler for Rotator {
    fn display(&self) -> &str {
        self.words.get(self.index).unwrap_or_default()
    }

    fn next_delay(&self) -> Option<Duration> {
        // A single word never changes, so there is nothing to schedule.
        (self.words.len() > 1).then_some(self.dwell)
    }

    fn tick(&mut self) {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
