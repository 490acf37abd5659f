//! Server-rendered slot for the word cycler.

use leptos::prelude::*;

use crate::config::CyclerTiming;
use crate::cycler::WordList;

/// Span holding the cycler's current text.
///
/// Words and timing travel as `data-*` attributes so the inline page script
/// can keep animating the span in a browser.
#[component]
pub fn WordCyclerView(
    words: WordList,
    timing: CyclerTiming,
    /// Text to show before any animation runs
    #[prop(optional, into)]
    text: String,
) -> impl IntoView {
    view! {
        <span
            class="typewriter"
            data-words=words.to_json()
            data-typing-ms=timing.typing_ms.to_string()
            data-pause-ms=timing.pause_ms.to_string()
            data-deleting-ms=timing.deleting_ms.to_string()
        >
            <span class="typewriter-text">{text}</span>
            <span class="typewriter-cursor">"|"</span>
        </span>
    }
}
