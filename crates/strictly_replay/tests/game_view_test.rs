//! Tests for the render read model.

use strictly_replay::{GameState, GameStatus, GameView, HistoryOrder, Intent, Player, Position};

#[test]
fn test_view_of_won_game() {
    let mut state = GameState::new();
    for cell in [2, 0, 4, 1, 6] {
        state.handle(Intent::CellClicked(cell));
    }

    let view = GameView::from(&state);
    assert_eq!(view.status(), &GameStatus::Won(Player::X));
    assert_eq!(view.status_text(), "Winner: X");
    let line = view.winning_line().expect("anti-diagonal");
    assert_eq!(line.indices(), [2, 4, 6]);
    assert!(line.contains(Position::Center));
    assert_eq!(view.moves().len(), 6);
}

#[test]
fn test_view_after_jump_shows_past_board_and_full_move_list() {
    let mut state = GameState::new();
    for cell in [0, 4, 8] {
        state.handle(Intent::CellClicked(cell));
    }
    state.handle(Intent::HistoryStepSelected(1));
    state.handle(Intent::OrderToggleRequested);

    let view = GameView::from(&state);
    assert_eq!(view.board().mark_count(), 1);
    assert_eq!(view.order(), &HistoryOrder::Descending);
    assert_eq!(view.order_label(), "Desc");

    let lines: Vec<String> = view.moves().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "Go to move #3 (col: 3, row: 3)",
            "Go to move #2 (col: 2, row: 2)",
            "Go to move #1 (col: 1, row: 1)",
            "Go to game start",
        ]
    );
    assert!(*view.moves()[2].is_selected());
}

#[test]
fn test_view_serializes_to_json() {
    let mut state = GameState::new();
    state.handle(Intent::CellClicked(4));

    let view = GameView::from(&state);
    let json = serde_json::to_value(&view).expect("view serializes");

    assert_eq!(json["order"], "Ascending");
    assert_eq!(json["winning_line"], serde_json::Value::Null);
    assert_eq!(json["moves"][1]["coordinates"]["column"], 2);
    assert_eq!(json["moves"][1]["coordinates"]["row"], 2);
    assert_eq!(json["status"]["NextPlayer"], "O");

    let back: GameView = serde_json::from_value(json).expect("view deserializes");
    assert_eq!(back, view);
}
