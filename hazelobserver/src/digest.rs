//! Coarse digest of interest (§6.2): the subset of the mirror a subscriber
//! usually wants without paying for the full structural snapshot on every
//! datagram — round_state, alive/dead player sets, and scene.

use innerstate::{GameState, NetObject, RoundState};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub round_state: RoundState,
    pub scene: String,
    pub alive_players: BTreeSet<u8>,
    pub dead_players: BTreeSet<u8>,
}

impl Digest {
    pub fn from_state(state: &GameState) -> Digest {
        let mut alive_players = BTreeSet::new();
        let mut dead_players = BTreeSet::new();

        for entry in state.net_obj_map.values() {
            if entry.dead {
                continue;
            }
            if let NetObject::GameData(game_data) = &entry.object {
                for player in &game_data.players {
                    if player.is_dead {
                        dead_players.insert(player.player_id);
                    } else {
                        alive_players.insert(player.player_id);
                    }
                }
            }
        }

        Digest { round_state: state.round_state(), scene: state.scene.clone(), alive_players, dead_players }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slog::Discard;

    fn test_logger() -> slog::Logger {
        slog::Logger::root(Discard, slog::o!())
    }

    #[test]
    fn empty_state_has_no_players_and_active_round() {
        let state = GameState::new(test_logger());
        let digest = Digest::from_state(&state);
        assert_eq!(digest.round_state, RoundState::Active);
        assert!(digest.alive_players.is_empty());
        assert!(digest.dead_players.is_empty());
    }
}
