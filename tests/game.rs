//! Game integration tests.

use bingors::{
    ActiveGame, Ball, Board, BoardError, BoardFactory, BoardState, COLUMN_COUNT, Column,
    ConfigError, DraftGame, Game, GameOptions, GameStatus, PlayError, PlayerError, RoundingMode,
    Shape, SharedRng, StartError, WinnerError, create_game, create_pool,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn draft(options: GameOptions, players: &[&str]) -> DraftGame {
    let mut game = DraftGame::new("test", options).unwrap();
    for name in players {
        game.add_player(*name).unwrap();
    }
    game
}

fn started(options: GameOptions, seed: u64) -> ActiveGame {
    let mut rng = rng(seed);
    let mut game = draft(options, &["alice", "bob"]);
    game.add_board("alice", &mut rng).unwrap();
    game.add_board("bob", &mut rng).unwrap();
    game.start().unwrap()
}

fn small_options() -> GameOptions {
    GameOptions::default()
        .with_total_balls(20)
        .with_max_per_column(2)
}

fn assert_board_consistent(board: &Board) {
    let configured = board.balls();
    for ball in board.played_balls() {
        assert!(configured.contains(&ball));
    }
    assert_eq!(board.is_winner(), board.played_count() == board.len());
}

#[test]
fn pool_assigns_columns_in_blocks() {
    let pool = create_pool(10).unwrap();
    let expected = [
        Ball::new(Column::B, 1),
        Ball::new(Column::B, 2),
        Ball::new(Column::I, 3),
        Ball::new(Column::I, 4),
        Ball::new(Column::N, 5),
        Ball::new(Column::N, 6),
        Ball::new(Column::G, 7),
        Ball::new(Column::G, 8),
        Ball::new(Column::O, 9),
        Ball::new(Column::O, 10),
    ];
    assert_eq!(pool, expected);

    let pool = create_pool(75).unwrap();
    assert_eq!(pool[14], Ball::new(Column::B, 15));
    assert_eq!(pool[15], Ball::new(Column::I, 16));
    assert_eq!(pool[74], Ball::new(Column::O, 75));
}

#[test]
fn pool_rejects_bad_counts() {
    for count in [0, 1, 4, 6, 22] {
        assert_eq!(create_pool(count).unwrap_err(), ConfigError::InvalidBallCount);
    }
}

#[test]
fn ball_names() {
    assert_eq!(Ball::new(Column::B, 7).name(), "B7");
    assert_eq!(Ball::new(Column::O, 75).to_string(), "O75");
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_shape(Shape::X)
        .with_total_balls(90)
        .with_max_per_column(4)
        .with_rounding(RoundingMode::Up)
        .with_generation_attempts(3);

    assert_eq!(options.shape, Shape::X);
    assert_eq!(options.total_balls, 90);
    assert_eq!(options.max_per_column, 4);
    assert_eq!(options.rounding, RoundingMode::Up);
    assert_eq!(options.generation_attempts, 3);
    assert_eq!(options.pool_per_column(), 18);
}

#[test]
fn configuration_errors() {
    assert_eq!(
        DraftGame::new("", GameOptions::default()).unwrap_err(),
        ConfigError::InvalidName
    );
    assert_eq!(
        DraftGame::new("   ", GameOptions::default()).unwrap_err(),
        ConfigError::InvalidName
    );
    assert_eq!(
        create_game("g", Shape::Standard, 72, 5).unwrap_err(),
        ConfigError::InvalidBallCount
    );
    assert_eq!(
        create_game("g", Shape::Standard, 75, 1).unwrap_err(),
        ConfigError::InvalidMaxPerColumn
    );
    // 75 balls leave 15 per column, so 14 is the largest allowed.
    assert_eq!(
        create_game("g", Shape::Standard, 75, 15).unwrap_err(),
        ConfigError::InvalidMaxPerColumn
    );
    assert!(create_game("g", Shape::Standard, 75, 14).is_ok());
    assert_eq!(
        DraftGame::new("g", GameOptions::default().with_generation_attempts(0)).unwrap_err(),
        ConfigError::InvalidGenerationAttempts
    );
    assert_eq!(
        DraftGame::new("g", small_options().with_shape(Shape::T)).unwrap_err(),
        ConfigError::InfeasibleShape
    );
}

#[test]
fn oversized_max_per_column_is_rejected() {
    for max in [usize::MAX, usize::MAX / 2] {
        assert_eq!(
            DraftGame::new("g", GameOptions::default().with_max_per_column(max)).unwrap_err(),
            ConfigError::InvalidMaxPerColumn
        );
        assert_eq!(
            GameOptions::default()
                .with_max_per_column(max)
                .validate()
                .unwrap_err(),
            ConfigError::InvalidMaxPerColumn
        );
    }
    assert_eq!(
        Shape::Standard
            .column_targets(usize::MAX / 2, RoundingMode::Nearest)
            .unwrap_err(),
        ConfigError::InfeasibleShape
    );
    assert_eq!(
        Shape::X
            .column_targets(usize::MAX, RoundingMode::Down)
            .unwrap_err(),
        ConfigError::InfeasibleShape
    );
}

#[test]
fn shape_targets_at_five_per_column() {
    let cases = [
        (Shape::Standard, [5, 5, 4, 5, 5]),
        (Shape::T, [1, 1, 5, 1, 1]),
        (Shape::L, [5, 1, 1, 1, 1]),
        (Shape::O, [5, 2, 2, 2, 5]),
        (Shape::X, [2, 2, 1, 2, 2]),
    ];
    for (shape, expected) in cases {
        for mode in [RoundingMode::Up, RoundingMode::Down, RoundingMode::Nearest] {
            assert_eq!(shape.column_targets(5, mode).unwrap(), expected);
        }
    }
}

#[test]
fn shape_targets_scale_with_rounding() {
    // 4 * 2 / 5 rounds to 2, so the shorter middle column only survives Down.
    assert_eq!(
        Shape::Standard.column_targets(2, RoundingMode::Nearest).unwrap(),
        [2, 2, 2, 2, 2]
    );
    assert_eq!(
        Shape::Standard.column_targets(2, RoundingMode::Down).unwrap(),
        [2, 2, 1, 2, 2]
    );
    assert_eq!(
        Shape::L.column_targets(2, RoundingMode::Up).unwrap(),
        [2, 1, 1, 1, 1]
    );
    assert_eq!(
        Shape::X.column_targets(10, RoundingMode::Nearest).unwrap(),
        [4, 4, 2, 4, 4]
    );
    assert_eq!(
        Shape::L.column_targets(2, RoundingMode::Nearest).unwrap_err(),
        ConfigError::InfeasibleShape
    );
}

#[test]
fn board_marks_only_configured_balls() {
    let b1 = Ball::new(Column::B, 1);
    let i4 = Ball::new(Column::I, 4);
    let o9 = Ball::new(Column::O, 9);
    let mut board = Board::new([b1, i4]);

    assert_eq!(board.state(), BoardState::Playing);
    assert!(!board.mark(o9));
    assert_eq!(board.played_count(), 0);

    assert!(!board.mark(b1));
    assert!(board.is_played(b1));
    assert_eq!(board.state(), BoardState::Playing);
    assert_eq!(board.remaining(), 1);

    assert!(board.mark(i4));
    assert_eq!(board.state(), BoardState::Winner);
    assert_eq!(board.played_balls(), vec![b1, i4]);

    // Winning is permanent and only reported once.
    assert!(!board.mark(i4));
    assert!(board.is_winner());
}

#[test]
fn board_equality_uses_configured_balls() {
    let b1 = Ball::new(Column::B, 1);
    let n5 = Ball::new(Column::N, 5);
    let mut played = Board::new([b1, n5]);
    played.mark(b1);

    assert_eq!(played, Board::new([n5, b1]));
    assert_ne!(played, Board::new([b1]));
}

#[test]
fn standard_boards_have_24_balls() {
    let game = DraftGame::new("standard", GameOptions::default()).unwrap();
    let factory = BoardFactory::new(game.ball_pool(), 5, game.column_targets());
    let mut rng = rng(3);

    for _ in 0..50 {
        let board = factory.generate(&mut rng).unwrap();
        assert_eq!(board.column_counts(), [5, 5, 4, 5, 5]);
        assert_eq!(board.len(), 24);
        for ball in board.balls() {
            assert!(game.ball_pool().contains(&ball));
        }
        for column in Column::ALL {
            assert!(board.column(column).iter().all(|ball| ball.column == column));
        }
    }
}

#[test]
fn every_shape_produces_its_targets() {
    let mut rng = rng(11);
    for shape in [Shape::Standard, Shape::T, Shape::L, Shape::O, Shape::X] {
        let mut game = draft(GameOptions::default().with_shape(shape), &["alice"]);
        let board = game.add_board("alice", &mut rng).unwrap();
        assert_eq!(board.column_counts(), shape.base_targets());
        assert_eq!(game.player("alice").unwrap().boards(), [board]);
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let pool = create_pool(75).unwrap();
    let factory = BoardFactory::new(&pool, 5, Shape::Standard.base_targets());

    let first = factory.generate(&mut rng(99)).unwrap();
    let second = factory.generate(&mut rng(99)).unwrap();
    assert_eq!(first.balls(), second.balls());
}

#[test]
fn factory_reports_insufficient_balls() {
    let pool = create_pool(10).unwrap();
    let factory = BoardFactory::new(&pool, 3, [3; COLUMN_COUNT]);
    assert_eq!(
        factory.generate(&mut rng(1)).unwrap_err(),
        BoardError::InsufficientBalls
    );
}

#[test]
fn factory_gives_up_after_attempts() {
    // Two balls per column and two per board column: only one board exists.
    let pool = create_pool(10).unwrap();
    let factory = BoardFactory::new(&pool, 2, [2; COLUMN_COUNT]);
    let mut rng = rng(5);

    let only = factory.generate(&mut rng).unwrap();
    assert_eq!(only.len(), 10);
    assert_eq!(
        factory
            .generate_unique(&mut rng, 10, |board| board == &only)
            .unwrap_err(),
        BoardError::GenerationExhausted
    );
}

#[test]
fn boards_stay_unique_in_a_small_pool() {
    // 243 possible boards, so collisions are likely across 60 deals.
    let options = GameOptions::default()
        .with_total_balls(15)
        .with_max_per_column(2)
        .with_shape(Shape::L)
        .with_rounding(RoundingMode::Up);
    let mut game = draft(options, &["alice", "bob", "carol"]);
    let mut rng = rng(2024);

    for round in 0..60 {
        let name = ["alice", "bob", "carol"][round % 3];
        let before = game.player(name).unwrap().board_count();
        match game.add_board(name, &mut rng) {
            Ok(board) => assert_eq!(board.column_counts(), [2, 1, 1, 1, 1]),
            Err(err) => {
                assert_eq!(err, BoardError::GenerationExhausted);
                assert_eq!(game.player(name).unwrap().board_count(), before);
            }
        }
    }

    let boards: Vec<&Board> = game
        .players()
        .iter()
        .flat_map(|player| player.boards())
        .collect();
    assert!(!boards.is_empty());
    for (i, board) in boards.iter().enumerate() {
        for other in &boards[i + 1..] {
            assert_ne!(board, other);
        }
    }
}

#[test]
fn player_management() {
    let mut game = draft(GameOptions::default(), &["alice"]);

    assert_eq!(game.add_player("alice").unwrap_err(), PlayerError::DuplicatePlayer);
    assert_eq!(game.add_player("").unwrap_err(), PlayerError::InvalidName);

    game.add_player("bob").unwrap();
    assert_eq!(
        game.update_player("bob", "alice").unwrap_err(),
        PlayerError::DuplicatePlayer
    );
    assert_eq!(
        game.update_player("dave", "erin").unwrap_err(),
        PlayerError::PlayerNotFound
    );
    game.update_player("bob", "bob").unwrap();
    game.update_player("bob", "robert").unwrap();
    assert!(game.player("bob").is_none());
    assert!(game.player("robert").is_some());

    assert_eq!(game.remove_player("robert").unwrap_err(), PlayerError::TooFewPlayers);

    game.add_player("carol").unwrap();
    assert_eq!(game.remove_player("dave").unwrap_err(), PlayerError::PlayerNotFound);
    let removed = game.remove_player("robert").unwrap();
    assert_eq!(removed.name(), "robert");
    assert_eq!(game.players().len(), 2);
}

#[test]
fn player_names_are_trimmed() {
    let mut game = draft(GameOptions::default(), &["alice"]);

    assert_eq!(game.add_player("alice ").unwrap_err(), PlayerError::DuplicatePlayer);
    assert_eq!(game.add_player(" \t").unwrap_err(), PlayerError::InvalidName);

    game.add_player("  bob ").unwrap();
    assert_eq!(game.player("bob").unwrap().name(), "bob");

    assert_eq!(
        game.update_player("bob", " alice").unwrap_err(),
        PlayerError::DuplicatePlayer
    );
    game.update_player("bob", "robert  ").unwrap();
    assert!(game.player("robert").is_some());
    assert_eq!(game.players().len(), 2);
}

#[test]
fn rename_keeps_boards() {
    let mut rng = rng(8);
    let mut game = draft(GameOptions::default(), &["alice", "bob"]);
    let board = game.add_board("bob", &mut rng).unwrap();

    game.update_player("bob", "robert").unwrap();
    assert!(game.player("robert").unwrap().owns(&board));
}

#[test]
fn board_management() {
    let mut rng = rng(17);
    let mut game = draft(GameOptions::default(), &["alice", "bob"]);

    assert_eq!(
        game.add_board("dave", &mut rng).unwrap_err(),
        BoardError::PlayerNotFound
    );

    let first = game.add_board("alice", &mut rng).unwrap();
    let bobs = game.add_board("bob", &mut rng).unwrap();

    assert_eq!(
        game.remove_board("alice", &first).unwrap_err(),
        BoardError::LastBoardRemovalRejected
    );
    assert_eq!(
        game.remove_board("alice", &bobs).unwrap_err(),
        BoardError::BoardNotFound
    );
    assert_eq!(
        game.remove_board("dave", &first).unwrap_err(),
        BoardError::PlayerNotFound
    );

    let second = game.add_board("alice", &mut rng).unwrap();
    assert_ne!(first, second);
    game.remove_board("alice", &first).unwrap();

    let alice = game.player("alice").unwrap();
    assert_eq!(alice.board_count(), 1);
    assert!(alice.owns(&second));
    assert!(!alice.owns(&first));
}

#[test]
fn start_requires_two_players_with_boards() {
    let mut rng = rng(1);
    let mut game = draft(GameOptions::default(), &["alice"]);
    game.add_board("alice", &mut rng).unwrap();
    assert_eq!(game.start().unwrap_err(), StartError::NotEnoughPlayers);

    game.add_player("bob").unwrap();
    assert_eq!(game.start().unwrap_err(), StartError::PlayerWithoutBoards);

    game.add_board("bob", &mut rng).unwrap();
    let active = game.start().unwrap();

    assert_eq!(active.name(), game.name());
    assert_eq!(active.shape(), game.shape());
    assert_eq!(active.ball_pool(), game.ball_pool());
    assert_eq!(active.players(), game.players());
    assert!(active.called().is_empty());
    assert_eq!(active.remaining_balls(), 75);
}

#[test]
fn play_ball_validates_calls() {
    let mut game = started(GameOptions::default(), 4);

    assert_eq!(
        game.play_ball(Ball::new(Column::B, 99)).unwrap_err(),
        PlayError::BallNotInPool
    );
    // Right number, wrong column.
    assert_eq!(
        game.play_ball(Ball::new(Column::O, 1)).unwrap_err(),
        PlayError::BallNotInPool
    );

    let ball = Ball::new(Column::N, 40);
    game.play_ball(ball).unwrap();
    assert_eq!(game.called(), [ball]);
    assert_eq!(game.last_called(), Some(ball));

    assert_eq!(game.play_ball(ball).unwrap_err(), PlayError::BallAlreadyCalled);
    assert_eq!(game.called().len(), 1);
    assert_eq!(game.remaining_balls(), 74);
}

#[test]
fn winning_board_makes_winner() {
    let mut game = started(small_options(), 31);
    assert!(game.potential_winners().is_empty());

    let alice_board = game.player("alice").unwrap().boards()[0].clone();
    let mut balls = alice_board.balls();
    balls.reverse();
    for ball in balls {
        game.play_ball(ball).unwrap();
    }

    let alice = game.player("alice").unwrap();
    assert_eq!(alice.boards()[0].state(), BoardState::Winner);
    let bob = game.player("bob").unwrap();
    assert!(bob.boards().iter().all(|board| board.state() == BoardState::Playing));

    let winners = game.potential_winners();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].name(), "alice");
    assert_eq!(winners[0].boards, vec![&alice_board]);

    assert_eq!(
        game.set_winner("bob").unwrap_err(),
        WinnerError::InvalidWinnerCandidate
    );
    assert_eq!(
        game.set_winner("dave").unwrap_err(),
        WinnerError::InvalidWinnerCandidate
    );

    let finished = game.set_winner("alice").unwrap();
    assert_eq!(finished.winner().name(), "alice");
    assert_eq!(finished.called(), game.called());
    assert_eq!(finished.ball_pool(), game.ball_pool());
}

#[test]
fn random_calls_exhaust_the_pool() {
    let options = GameOptions::default()
        .with_total_balls(15)
        .with_max_per_column(2);
    let mut game = started(options, 77);
    let mut rng = rng(77);

    let mut calls = 0;
    loop {
        match game.play_random_ball(&mut rng) {
            Ok(ball) => {
                calls += 1;
                assert!(game.is_called(ball));
                assert_eq!(game.called().len(), calls);
                for player in game.players() {
                    player.boards().iter().for_each(assert_board_consistent);
                }
            }
            Err(err) => {
                assert_eq!(err, PlayError::NoBallsRemaining);
                break;
            }
        }
    }

    let mut called = game.called().to_vec();
    called.sort_unstable();
    assert_eq!(called, game.ball_pool());
    assert!(game.players().iter().all(|player| player.has_winning_board()));
}

#[test]
fn game_enforces_stage_operations() {
    let mut rng = rng(12);
    let mut game = Game::new("enum", small_options()).unwrap();
    assert_eq!(game.status(), GameStatus::Draft);
    assert!(game.called().is_empty());
    assert!(game.winner().is_none());

    let ball = game.ball_pool()[0];
    assert_eq!(game.play_ball(ball).unwrap_err(), PlayError::InvalidState);
    assert_eq!(
        game.play_random_ball(&mut rng).unwrap_err(),
        PlayError::InvalidState
    );
    assert_eq!(game.potential_winners().unwrap_err(), WinnerError::InvalidState);
    assert_eq!(game.set_winner("alice").unwrap_err(), WinnerError::InvalidState);

    game.add_player("alice").unwrap();
    game.add_player("bob").unwrap();
    assert_eq!(game.start().unwrap_err(), StartError::PlayerWithoutBoards);
    assert_eq!(game.status(), GameStatus::Draft);

    game.add_board("alice", &mut rng).unwrap();
    let bobs = game.add_board("bob", &mut rng).unwrap();
    game.start().unwrap();
    assert_eq!(game.status(), GameStatus::Active);

    assert_eq!(game.add_player("carol").unwrap_err(), PlayerError::InvalidState);
    assert_eq!(game.update_player("bob", "b").unwrap_err(), PlayerError::InvalidState);
    assert_eq!(game.remove_player("bob").unwrap_err(), PlayerError::InvalidState);
    assert_eq!(
        game.add_board("bob", &mut rng).unwrap_err(),
        BoardError::InvalidState
    );
    assert_eq!(
        game.remove_board("bob", &bobs).unwrap_err(),
        BoardError::InvalidState
    );
    assert_eq!(game.start().unwrap_err(), StartError::InvalidState);
    assert_eq!(
        game.set_winner("bob").unwrap_err(),
        WinnerError::InvalidWinnerCandidate
    );
    assert_eq!(game.status(), GameStatus::Active);

    for ball in bobs.balls() {
        game.play_ball(ball).unwrap();
    }
    assert_eq!(game.potential_winners().unwrap()[0].name(), "bob");

    game.set_winner("bob").unwrap();
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner().map(|player| player.name()), Some("bob"));
    assert_eq!(game.called().len(), bobs.len());

    let remaining = game
        .ball_pool()
        .iter()
        .copied()
        .find(|ball| !bobs.contains(*ball))
        .unwrap();
    assert_eq!(game.play_ball(remaining).unwrap_err(), PlayError::InvalidState);
    assert_eq!(game.potential_winners().unwrap_err(), WinnerError::InvalidState);
    assert_eq!(game.set_winner("bob").unwrap_err(), WinnerError::InvalidState);
    assert_eq!(game.start().unwrap_err(), StartError::InvalidState);
}

#[test]
fn shared_rng_matches_the_wrapped_generator() {
    let pool = create_pool(75).unwrap();
    let factory = BoardFactory::new(&pool, 5, Shape::Standard.base_targets());

    let shared = SharedRng::seeded(55);
    let mut handle = &shared;
    let from_shared = factory.generate(&mut handle).unwrap();
    let direct = factory.generate(&mut rng(55)).unwrap();
    assert_eq!(from_shared.balls(), direct.balls());

    let again = shared.with(|inner| factory.generate(inner).unwrap());
    assert_ne!(again, from_shared);
}

#[test]
fn games_can_share_one_rng() {
    let shared = SharedRng::seeded(9);
    let mut first = draft(small_options(), &["alice", "bob"]);
    let mut second = draft(small_options(), &["carol", "dave"]);

    std::thread::scope(|scope| {
        scope.spawn(|| {
            let mut handle = &shared;
            first.add_board("alice", &mut handle).unwrap();
            first.add_board("bob", &mut handle).unwrap();
        });
        scope.spawn(|| {
            let mut handle = &shared;
            second.add_board("carol", &mut handle).unwrap();
            second.add_board("dave", &mut handle).unwrap();
        });
    });

    assert!(first.start().is_ok());
    assert!(second.start().is_ok());
}
