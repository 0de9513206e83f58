//! Mascot mood and quote mapping.
//!
//! Pure presentation-layer mapping from model events to display values.
//! Nothing in the core depends on this module; it consumes the tagged
//! `TaskEvent` values and holds no state of its own. Mood transitions are
//! event-driven only; there is no timeout-based auto-revert.

use crate::model::TaskEvent;
use rand::Rng;

/// Mascot expression shown alongside a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Thinking,
    Excited,
    Shocked,
}

/// Fixed event -> mood mapping.
pub fn mood_for(event: TaskEvent) -> Mood {
    match event {
        TaskEvent::Welcome | TaskEvent::Complete => Mood::Happy,
        TaskEvent::Add => Mood::Excited,
        TaskEvent::Delete | TaskEvent::Full => Mood::Shocked,
        TaskEvent::Idle => Mood::Thinking,
    }
}

/// Picks one quote for the event, uniformly at random.
///
/// Deterministic under a seeded `rng`, which is how the tests pin it down.
pub fn pick_quote(event: TaskEvent, rng: &mut impl Rng) -> &'static str {
    let pool = quotes_for(event);
    pool[rng.gen_range(0..pool.len())]
}

fn quotes_for(event: TaskEvent) -> &'static [&'static str] {
    match event {
        TaskEvent::Welcome => &[
            "Imagination is more important than knowledge. Shall we get to work?",
            "I have no special talents, I am only passionately curious about your tasks.",
            "A mind stretched by a new idea never returns to its original size.",
        ],
        TaskEvent::Add => &[
            "Excellent! The only place success comes before work is in the dictionary.",
            "Another task? Life is like riding a bicycle: to keep your balance, keep moving.",
            "Full focus! In the middle of difficulty lies opportunity.",
        ],
        TaskEvent::Complete => &[
            "Brilliant! Creativity is intelligence having fun.",
            "Fantastic! You are defying the laws of procrastination.",
            "Marvelous! Time is relative, but you were fast!",
        ],
        TaskEvent::Delete => &[
            "Poof! Gone like a quantum particle.",
            "Less is more. Simplicity is the highest degree of sophistication.",
            "Clearing space-time for new ideas.",
        ],
        TaskEvent::Full => &[
            "Everything should be as simple as possible. Five tasks is today's elegant equation.",
            "We reached critical productivity mass! Few variables keep the theory sound.",
            "Even the speed of light has a limit! Finish these five first.",
        ],
        TaskEvent::Idle => &[
            "Time is an illusion... but that deadline is not!",
            "If you cannot explain it simply, you do not understand it well enough.",
            "Two things are infinite: the universe and human creativity. Use yours here!",
        ],
    }
}
