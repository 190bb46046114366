//! Room management: drawing and the refill policy.

use tracing::trace;

use super::engine::Game;

impl Game {
    /// Fill the room from the front of the deck, up to the room size.
    ///
    /// Cards keep their deck order. Stops early if the deck runs out.
    pub fn draw_room(&mut self) {
        let room_size = self.state.config.room_size;
        let mut drawn = 0usize;
        while self.state.room.len() < room_size {
            let Some(card) = self.state.deck.pop_front() else {
                break;
            };
            self.state.room.push(card);
            drawn += 1;
        }
        trace!(drawn, room = self.state.room.len(), deck = self.state.deck.len(), "room drawn");
    }

    /// Treat a nearly empty room as a fresh one.
    ///
    /// Called after every successful action that takes a card out of the
    /// room. At or below the refill threshold, with cards left to draw,
    /// running is allowed again and the room is topped up.
    pub(crate) fn refill_if_needed(&mut self) {
        let state = &self.state;
        if state.room.len() <= state.config.refill_threshold && !state.deck.is_empty() {
            self.state.can_run = true;
            self.draw_room();
        }
    }
}
