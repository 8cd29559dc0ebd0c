//! Exhaustive checks of the Tic-Tac-Toe board, detector and search

mod common;

use common::{brute_force_verdict, reachable_boards};
use gridgames::{
    Error,
    agents::{HeuristicAgent, TieBreak},
    game::{GameBoard, Player, Verdict},
    pipeline::GameLoop,
    ports::Agent,
    search::{MinimaxAgent, Searcher, TerminalScorer},
    tictactoe::TicTacToeBoard,
};

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_verdict_matches_brute_force() {
    for board in reachable_boards() {
        assert_eq!(
            board.verdict().unwrap(),
            brute_force_verdict(&board),
            "verdict mismatch on\n{board}"
        );
    }
}

#[test]
fn test_incremental_verdict_matches_full_scan() {
    for board in reachable_boards() {
        if board.verdict().unwrap().is_terminal() {
            continue;
        }
        let player = board.next_player();
        for mv in board.legal_moves() {
            let mut next = board;
            let placement = next.apply(mv, player).unwrap();
            assert_eq!(next.verdict_after(&placement), next.verdict().unwrap());
        }
    }
}

#[test]
fn test_alpha_beta_matches_plain_search() {
    let searcher = Searcher::new(TerminalScorer);
    for board in reachable_boards() {
        if board.verdict().unwrap().is_terminal() {
            continue;
        }
        let player = board.next_player();
        let plain = searcher.best_move(&board, player, 9, false).unwrap();
        let pruned = searcher.best_move(&board, player, 9, true).unwrap();
        assert_eq!(pruned.score, plain.score, "score mismatch on\n{board}");
        assert_eq!(pruned.best_move, plain.best_move, "move mismatch on\n{board}");
        assert!(pruned.nodes <= plain.nodes);
    }
}

/// Walk every line of play the opponent could choose against the searcher
fn assert_never_loses(board: TicTacToeBoard, to_move: Player, searcher_plays: Player) {
    match board.verdict().unwrap() {
        Verdict::Win(winner) => {
            assert_eq!(winner, searcher_plays, "searcher lost on\n{board}");
            return;
        }
        Verdict::Draw => return,
        Verdict::Ongoing => {}
    }

    if to_move == searcher_plays {
        let outcome = Searcher::new(TerminalScorer)
            .best_move(&board, to_move, 9, true)
            .unwrap();
        let mut next = board;
        next.apply(outcome.best_move, to_move).unwrap();
        assert_never_loses(next, to_move.opponent(), searcher_plays);
    } else {
        for mv in board.legal_moves() {
            let mut next = board;
            next.apply(mv, to_move).unwrap();
            assert_never_loses(next, to_move.opponent(), searcher_plays);
        }
    }
}

#[test]
fn test_minimax_is_unbeatable_as_x() {
    assert_never_loses(TicTacToeBoard::new(), Player::X, Player::X);
}

#[test]
fn test_minimax_is_unbeatable_as_o() {
    assert_never_loses(TicTacToeBoard::new(), Player::X, Player::O);
}

#[test]
fn test_optimal_play_from_empty_board_is_a_draw() {
    for use_alpha_beta in [true, false] {
        let mut x = MinimaxAgent::<TicTacToeBoard>::new(9, use_alpha_beta);
        let mut o = MinimaxAgent::<TicTacToeBoard>::new(9, use_alpha_beta);
        let record = GameLoop::<TicTacToeBoard>::new()
            .play(&mut x, &mut o)
            .unwrap();
        assert_eq!(record.verdict, Verdict::Draw);
        assert_eq!(record.len(), 9);
    }
}

#[test]
fn test_heuristic_opens_center_then_blocks() {
    let mut x = HeuristicAgent::new(TieBreak::Preference);
    let mut o = HeuristicAgent::new(TieBreak::Preference);

    let mut board = TicTacToeBoard::new();
    let opening = x.select_move(&board, Player::X).unwrap();
    assert_eq!(opening, 4);

    board.apply(opening, Player::X).unwrap();
    board.apply(0, Player::O).unwrap();
    board.apply(2, Player::X).unwrap();

    // X threatens 2-4-6 through the center
    assert_eq!(o.select_move(&board, Player::O).unwrap(), 6);
}

#[test]
fn test_heuristic_prefers_win_over_block() {
    let board: TicTacToeBoard = "
        XX.
        OO.
        X..".parse().unwrap();
    let mut o = HeuristicAgent::new(TieBreak::Preference);
    assert_eq!(o.select_move(&board, Player::O).unwrap(), 5);
}

#[test]
fn test_full_board_rejects_moves_and_is_drawn() {
    let mut board: TicTacToeBoard = "XOXXOOOXX".parse().unwrap();
    assert_eq!(board.verdict().unwrap(), Verdict::Draw);
    assert!(board.legal_moves().is_empty());

    let before = board;
    for mv in 0..9 {
        assert!(matches!(
            board.apply(mv, Player::X),
            Err(Error::IllegalMove { .. })
        ));
    }
    assert_eq!(board, before);

    let mut agent = HeuristicAgent::default();
    assert!(matches!(
        agent.select_move(&board, Player::X),
        Err(Error::NoLegalMoves)
    ));
}
