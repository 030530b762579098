use crate::game::board::End;
use crate::game::tile::Tile;
use serde::Serialize;

/// Index into `GameState::players`
pub type Seat = usize;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Win { winner: Seat },
    Draw,
}

/// Counts reported after every turn that does not end the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub board: usize,
    pub hands: [usize; 2],
    pub pile: usize,
}

/// Notifications emitted by the engine for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Dealt {
        players: [String; 2],
        hands: [Vec<Tile>; 2],
        pile: Vec<Tile>,
    },
    TurnStarted {
        turn: u32,
        player: Seat,
        board: Vec<Tile>,
    },
    Placed {
        player: Seat,
        tile: Tile,
        end: End,
    },
    Drew {
        player: Seat,
        tile: Tile,
    },
    Passed {
        player: Seat,
        consecutive: u32,
    },
    TurnEnded(TurnSummary),
    GameOver {
        outcome: Outcome,
    },
}

/// Receives engine events as they happen
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records events in order
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut log: Vec<GameEvent> = Vec::new();
        log.on_event(&GameEvent::Drew { player: 0, tile: Tile::new(1, 1) });
        log.on_event(&GameEvent::Passed { player: 1, consecutive: 1 });
        assert_eq!(log.len(), 2);
        assert!(matches!(log[1], GameEvent::Passed { player: 1, .. }));
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::Placed {
            player: 1,
            tile: Tile::new(2, 5),
            end: End::Head,
        };
        let json = serde_json::to_value(&event).expect("serializable");
        assert_eq!(json["event"], "placed");
        assert_eq!(json["end"], "head");
        assert_eq!(json["tile"]["low"], 2);

        let over = serde_json::to_value(GameEvent::GameOver { outcome: Outcome::Draw })
            .expect("serializable");
        assert_eq!(over["outcome"]["result"], "draw");
    }
}
