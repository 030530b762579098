use crate::game::board::End;
use crate::game::events::{GameEvent, GameObserver, Outcome, Seat};
use crate::game::state::GameState;
use crate::game::tile::Tile;

/// Passes in a row, with an empty pile, that end the match in a draw
pub const PASSES_FOR_DRAW: u32 = 2;

/// Play the active player's first playable tile, if any
pub fn play_phase(state: &mut GameState) -> Option<(Tile, End)> {
    let index = state.current_player().hand.find_playable(&state.board)?;
    let tile = state.players[state.current].hand.remove_at(index)?;
    let end = state.board.choose_end(&tile);
    state.board.place(tile, end);
    Some((tile, end))
}

/// Move one tile from the pile into the active player's hand
pub fn draw_phase(state: &mut GameState) -> Option<Tile> {
    let tile = state.pile.draw()?;
    state.players[state.current].hand.add(tile);
    Some(tile)
}

/// A player wins as soon as their hand is empty
pub fn check_win(state: &GameState, seat: Seat) -> bool {
    state.players[seat].hand.is_empty()
}

/// Run one turn for the active player and return the outcome if the match
/// ended. Calling this on a finished match is a no-op.
pub fn take_turn(state: &mut GameState, observer: &mut dyn GameObserver) -> Option<Outcome> {
    if state.outcome.is_some() {
        return state.outcome;
    }

    state.turn += 1;
    let seat = state.current;
    observer.on_event(&GameEvent::TurnStarted {
        turn: state.turn,
        player: seat,
        board: state.board.tiles().to_vec(),
    });

    if let Some((tile, end)) = play_phase(state) {
        observer.on_event(&GameEvent::Placed { player: seat, tile, end });
        state.consecutive_passes = 0;
        if check_win(state, seat) {
            state.outcome = Some(Outcome::Win { winner: seat });
        }
    } else if let Some(tile) = draw_phase(state) {
        observer.on_event(&GameEvent::Drew { player: seat, tile });
    } else {
        state.consecutive_passes += 1;
        observer.on_event(&GameEvent::Passed {
            player: seat,
            consecutive: state.consecutive_passes,
        });
        if state.consecutive_passes >= PASSES_FOR_DRAW {
            state.outcome = Some(Outcome::Draw);
        }
    }

    if let Some(outcome) = state.outcome {
        observer.on_event(&GameEvent::GameOver { outcome });
        return Some(outcome);
    }

    observer.on_event(&GameEvent::TurnEnded(state.summary()));
    state.switch_player();
    None
}
