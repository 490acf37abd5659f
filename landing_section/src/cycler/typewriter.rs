//! Typewriter strategy: type, pause, delete, advance.

use std::time::Duration;

use super::{WordCycler, WordList};
use crate::config::CyclerTiming;

/// Animation phase of a [`Typewriter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Revealing the current word one character per tick
    Typing,
    /// Current word fully shown, waiting for the dwell period
    Pausing,
    /// Removing the current word one character per tick
    Deleting,
}

/// Reveals each word character by character, pauses, deletes it, then moves
/// to the next word. Loops forever.
///
/// Lengths count Unicode scalar values, so the display never splits a
/// character.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: WordList,
    timing: CyclerTiming,
    index: usize,
    length: usize,
    phase: Phase,
}

impl Typewriter {
    /// New typewriter in its initial `Typing(0, 0)` state.
    pub fn new(words: WordList, timing: CyclerTiming) -> Self {
        Self {
            words,
            timing,
            index: 0,
            length: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the word being animated.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of characters of the current word on display.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Words being cycled.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    fn current_word(&self) -> Option<&str> {
        self.words.get(self.index)
    }

    fn current_len(&self) -> usize {
        self.current_word().map_or(0, |word| word.chars().count())
    }
}

impl WordCycler for Typewriter {
    fn display(&self) -> &str {
        let Some(word) = self.current_word() else {
            return "";
        };
        match word.char_indices().nth(self.length) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    fn next_delay(&self) -> Option<Duration> {
        if self.words.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.timing.typing(),
            Phase::Pausing => self.timing.pause(),
            Phase::Deleting => self.timing.deleting(),
        })
    }

    fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                let full = self.current_len();
                if self.length < full {
                    self.length += 1;
                }
                if self.length >= full {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.length = self.length.saturating_sub(1);
                if self.length == 0 {
                    self.index = (self.index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        self.length = 0;
        self.phase = Phase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typewriter(words: &[&str]) -> Typewriter {
        Typewriter::new(
            WordList::from_iter(words.iter().copied()),
            CyclerTiming::default(),
        )
    }

    #[test]
    fn starts_typing_first_word_from_empty() {
        let tw = typewriter(&["containers", "Kubernetes"]);
        assert_eq!(tw.index(), 0);
        assert_eq!(tw.length(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.display(), "");
    }

    #[test]
    fn types_pauses_deletes_then_advances() {
        let mut tw = typewriter(&["ab", "c"]);
        let mut frames = Vec::new();
        for _ in 0..8 {
            tw.tick();
            frames.push((tw.display().to_string(), tw.phase()));
        }
        assert_eq!(
            frames,
            vec![
                ("a".to_string(), Phase::Typing),
                ("ab".to_string(), Phase::Pausing),
                ("ab".to_string(), Phase::Deleting),
                ("a".to_string(), Phase::Deleting),
                ("".to_string(), Phase::Typing),
                ("c".to_string(), Phase::Pausing),
                ("c".to_string(), Phase::Deleting),
                ("".to_string(), Phase::Typing),
            ]
        );
        assert_eq!(tw.index(), 0, "wraps back to the first word");
    }

    #[test]
    fn delay_follows_phase() {
        let timing = CyclerTiming {
            typing_ms: 10,
            pause_ms: 20,
            deleting_ms: 30,
        };
        let mut tw = Typewriter::new(WordList::from_iter(["x"]), timing);
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(10)));
        tw.tick();
        assert_eq!(tw.phase(), Phase::Pausing);
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(20)));
        tw.tick();
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(30)));
    }

    #[test]
    fn empty_list_never_schedules_a_tick() {
        let mut tw = typewriter(&[]);
        assert_eq!(tw.next_delay(), None);
        tw.tick();
        assert_eq!(tw.display(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn empty_word_goes_straight_to_pause() {
        let mut tw = typewriter(&["", "k8s"]);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Pausing);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        tw.tick();
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn multibyte_words_are_cut_on_char_boundaries() {
        let mut tw = typewriter(&["naïve ☁"]);
        let mut seen = Vec::new();
        for _ in 0..7 {
            tw.tick();
            seen.push(tw.display().to_string());
        }
        assert_eq!(seen[2], "naï");
        assert_eq!(seen[6], "naïve ☁");
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut tw = typewriter(&["abc", "de"]);
        for _ in 0..9 {
            tw.tick();
        }
        tw.reset();
        assert_eq!((tw.index(), tw.length(), tw.phase()), (0, 0, Phase::Typing));
    }

    /// Ticks in one full pass over `words`: type each char, pause, leave
    /// pause, delete each char.
    fn ticks_per_cycle(words: &[String]) -> usize {
        words
            .iter()
            .map(|w| {
                let len = w.chars().count();
                // Empty words still spend one tick typing and one deleting.
                len.max(1) + 1 + len.max(1)
            })
            .sum()
    }

    proptest! {
        #[test]
        fn length_stays_in_bounds_and_moves_monotonically(
            words in prop::collection::vec("[a-zA-Z ☁é]{0,12}", 1..6),
            ticks in 0usize..400,
        ) {
            let mut tw = Typewriter::new(WordList::from(words.clone()), CyclerTiming::default());
            for _ in 0..ticks {
                let (before_idx, before_len, before_phase) = (tw.index(), tw.length(), tw.phase());
                tw.tick();
                let current = words[tw.index()].chars().count();
                prop_assert!(tw.length() <= current);
                prop_assert_eq!(tw.display().chars().count(), tw.length());
                if tw.index() == before_idx {
                    match before_phase {
                        Phase::Typing => prop_assert!(tw.length() >= before_len),
                        Phase::Deleting => prop_assert!(tw.length() <= before_len),
                        Phase::Pausing => prop_assert_eq!(tw.length(), before_len),
                    }
                }
            }
        }

        #[test]
        fn visits_every_word_in_order_each_cycle(
            words in prop::collection::vec("[a-z]{1,10}", 1..6),
        ) {
            let mut tw = Typewriter::new(WordList::from(words.clone()), CyclerTiming::default());
            let n = words.len();
            let mut completed = Vec::new();
            for _ in 0..ticks_per_cycle(&words) * n {
                tw.tick();
                // Pausing lasts exactly one tick per word.
                if tw.phase() == Phase::Pausing {
                    completed.push((tw.index(), tw.display().to_string()));
                }
            }
            let expected: Vec<(usize, String)> = (0..n * n)
                .map(|i| (i % n, words[i % n].clone()))
                .collect();
            prop_assert_eq!(completed, expected);
            prop_assert_eq!((tw.index(), tw.length(), tw.phase()), (0, 0, Phase::Typing));

            // One more word's worth of typing shows the first word in full.
            for _ in 0..words[0].chars().count() {
                tw.tick();
            }
            prop_assert_eq!(tw.display(), words[0].as_str());
        }

        #[test]
        fn single_word_cycles_forever(word in "[a-zA-Z]{1,16}", rounds in 1usize..20) {
            let mut tw = Typewriter::new(WordList::from(vec![word.clone()]), CyclerTiming::default());
            let per_round = ticks_per_cycle(std::slice::from_ref(&word));
            for _ in 0..rounds {
                for _ in 0..word.chars().count() {
                    tw.tick();
                }
                prop_assert_eq!(tw.display(), word.as_str());
                prop_assert_eq!(tw.phase(), Phase::Pausing);
                for _ in 0..per_round - word.chars().count() {
                    tw.tick();
                }
                prop_assert_eq!((tw.index(), tw.length(), tw.phase()), (0, 0, Phase::Typing));
                prop_assert!(tw.next_delay().is_some());
            }
        }
    }
}
