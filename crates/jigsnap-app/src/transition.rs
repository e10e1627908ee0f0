//! Pending presentation effects.
//!
//! Actions commit their state change immediately and queue the visual
//! consequences here. The presentation layer drains the queue in order and
//! may animate each entry; the game state never waits on it.

use std::collections::VecDeque;

use jigsnap_game::{Effect, Effects};

#[derive(Debug, Default, Clone)]
pub struct TransitionQueue {
    pending: VecDeque<Effect>,
}

impl TransitionQueue {
    pub fn extend(&mut self, effects: Effects) {
        self.pending.extend(effects);
    }

    pub fn pop(&mut self) -> Option<Effect> {
        self.pending.pop_front()
    }

    /// Takes every pending effect, oldest first.
    pub fn drain(&mut self) -> Vec<Effect> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
