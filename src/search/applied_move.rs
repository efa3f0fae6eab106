//! Scoped move application for search frames.
//!
//! `AppliedMove` applies a move without recording it and reverts it when
//! dropped, so every exit from a search frame (normal return, cutoff `break`,
//! early terminal return) leaves the shared board exactly as it found it.

use std::ops::{Deref, DerefMut};

use log::error;

use crate::game_state::pawn_types::Move;
use crate::game_state::race_game::RaceGame;

pub struct AppliedMove<'g, G: RaceGame + ?Sized> {
    game: &'g mut G,
    mv: Move,
}

impl<'g, G: RaceGame + ?Sized> AppliedMove<'g, G> {
    pub fn apply(game: &'g mut G, mv: Move) -> Self {
        game.apply_move(mv, false);
        Self { game, mv }
    }

    #[inline]
    pub fn applied(&self) -> Move {
        self.mv
    }
}

impl<G: RaceGame + ?Sized> Deref for AppliedMove<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<G: RaceGame + ?Sized> DerefMut for AppliedMove<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.game
    }
}

impl<G: RaceGame + ?Sized> Drop for AppliedMove<'_, G> {
    fn drop(&mut self) {
        let reverted = self.game.unapply_move();
        if reverted != Some(self.mv) {
            error!(
                "board/history desync: expected to revert {}, reverted {:?}",
                self.mv, reverted
            );
            debug_assert!(false, "apply/unapply out of step");
        }
    }
}
