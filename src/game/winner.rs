use alloc::vec::Vec;

use crate::event::GameEvent;
use crate::player::Player;
use crate::result::{GameOutcome, PlayerStanding};

use super::Game;

impl Game {
    /// Scores the table and announces the result.
    ///
    /// Players are scanned in registration order against a running top
    /// score that starts at zero: a higher score replaces the winners, an
    /// equal score joins them. A table where nobody scored is therefore a
    /// tie between everyone.
    ///
    /// Each player's score line is announced first, then either the winner
    /// or the tie.
    pub fn determine_winner(&mut self) -> GameOutcome {
        let mut winners = Vec::new();
        let mut top_score = 0;

        for player in &self.players {
            if player.score() > top_score {
                winners.clear();
                winners.push(player.id());
                top_score = player.score();
            } else if player.score() == top_score {
                winners.push(player.id());
            }
        }

        let standings: Vec<PlayerStanding> = self
            .players
            .iter()
            .map(|player| PlayerStanding {
                player_id: player.id(),
                score: player.score(),
                cards: player.hand().len(),
            })
            .collect();

        let reports: Vec<GameEvent> = self.players.iter().map(Player::score_report).collect();
        for report in reports {
            self.emit(report);
        }

        match winners.as_slice() {
            [] => {}
            [only] => {
                let name = self.player(*only).map(Player::name).unwrap_or_default().into();
                self.emit(GameEvent::Winner {
                    player: *only,
                    name,
                    score: top_score,
                });
            }
            tied => {
                let players = tied.to_vec();
                self.emit(GameEvent::Tie {
                    players,
                    score: top_score,
                });
            }
        }

        GameOutcome {
            winners,
            top_score,
            standings,
        }
    }
}
