//! Players and their scores for the current session.
//!
//! The scoreboard only keeps the numbers.  Announcing changes
//! (`ScoreChanged`, `GameOver`) is done by [`Sim`][crate::Sim], which owns the
//! dispatcher.

use ua_core::PlayerId;

use crate::{SimError, SimResult};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Player {
    pub id:    PlayerId,
    pub name:  String,
    pub score: i64,
}

#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    players:       Vec<Player>,
    winning_score: Option<i64>,
    winner:        Option<PlayerId>,
}

impl Scoreboard {
    /// `winning_score`: the first player to reach it wins.  `None` means the
    /// game only ends through an explicit winner declaration.
    pub fn new(winning_score: Option<i64>) -> Self {
        Self { players: Vec::new(), winning_score, winner: None }
    }

    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId(self.players.len() as u32);
        self.players.push(Player { id, name: name.into(), score: 0 });
        id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Add `delta` to the player's score and return the new total.
    pub fn apply(&mut self, id: PlayerId, delta: i64) -> SimResult<i64> {
        let player = self.players.get_mut(id.index()).ok_or(SimError::PlayerNotFound(id))?;
        player.score = player.score.saturating_add(delta);
        Ok(player.score)
    }

    /// `true` if `score` meets the winning threshold.
    pub fn is_winning(&self, score: i64) -> bool {
        self.winning_score.is_some_and(|w| score >= w)
    }

    /// Record the winner.  Returns `false` if the game was already over.
    pub fn set_winner(&mut self, id: PlayerId) -> SimResult<bool> {
        if self.player(id).is_none() {
            return Err(SimError::PlayerNotFound(id));
        }
        if self.winner.is_some() {
            return Ok(false);
        }
        self.winner = Some(id);
        Ok(true)
    }

    #[inline]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Zero every score and clear the winner.  Players are kept.
    pub fn reset(&mut self) {
        for p in &mut self.players {
            p.score = 0;
        }
        self.winner = None;
    }
}
