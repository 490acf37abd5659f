//! Word cycling for the landing headline.
//!
//! A [`WordCycler`] owns a [`WordList`] and exposes a single output, the text
//! currently on display. It is advanced one tick at a time and reports how
//! long to wait before the next tick. The timer itself lives in
//! [`CyclerHandle`], which arms it on mount and releases it on unmount.
//!
//! # Strategies
//!
//! - [`Typewriter`] - types each word character by character, pauses, then
//!   deletes it before moving on
//! - [`Rotator`] - swaps whole words after each dwell period
//!
//! ```rust
//! use landing_section::config::CyclerTiming;
//! use landing_section::cycler::{Typewriter, WordCycler, WordList};
//!
//! let words = WordList::from_iter(["Kubernetes"]);
//! let mut cycler = Typewriter::new(words, CyclerTiming::default());
//! assert_eq!(cycler.display(), "");
//! cycler.tick();
//! assert_eq!(cycler.display(), "K");
//! ```

mod driver;
mod rotator;
mod typewriter;

pub use driver::CyclerHandle;
pub use rotator::Rotator;
pub use typewriter::{Phase, Typewriter};

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A pluggable word-cycling animation.
///
/// Implementations must never fail. An implementation with nothing to show
/// (an empty word list) returns `None` from [`WordCycler::next_delay`], and
/// the driver then never arms a timer.
pub trait WordCycler: Send + 'static {
    /// Text currently on display.
    fn display(&self) -> &str;

    /// Delay before the next tick, or `None` when there is nothing to animate.
    fn next_delay(&self) -> Option<Duration>;

    /// Advance the animation by one tick.
    fn tick(&mut self);

    /// Return to the initial state.
    fn reset(&mut self);
}

impl<C: WordCycler + ?Sized> WordCycler for Box<C> {
    fn display(&self) -> &str {
        (**self).display()
    }

    fn next_delay(&self) -> Option<Duration> {
        (**self).next_delay()
    }

    fn tick(&mut self) {
        (**self).tick();
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Ordered, immutable list of phrases the headline cycles through.
///
/// Cloning is cheap: the words are shared behind an `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList(Arc<[String]>);

impl WordList {
    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is nothing to cycle.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Word at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Words in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// JSON array of the words, as embedded in `data-words` attributes.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&*self.0).unwrap_or_else(|_| "[]".to_string())
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self(words.into())
    }
}

impl From<WordList> for Vec<String> {
    fn from(words: WordList) -> Self {
        words.0.to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
