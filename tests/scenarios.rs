//! End-to-end games driven through the coordinator, the way the firmware does.

use fastrand::Rng;
use sensor_ttt::{
    engine, sq, AnalogDecoder, Board, Cell, Coordinator, Event, GameResult, Mode, Panel, Phase,
    Sampler, Side, Square,
};

const H: Cell = Some(Side::Human);
const M: Cell = Some(Side::Machine);
const E: Cell = None;

// =============================================================================
// Test doubles
// =============================================================================

/// Decodes raw readings 0..=8 straight to squares.
struct Direct;

impl AnalogDecoder for Direct {
    fn decode(&self, raw: u16) -> Option<Square> {
        Square::new(usize::from(raw))
    }
}

#[derive(Default)]
struct Lights {
    moves: Vec<(Square, Side)>,
    result: Option<GameResult>,
}

impl Panel for Lights {
    fn preview(&mut self, _: Square) {}
    fn clear_preview(&mut self, _: Square) {}
    fn confirm(&mut self, square: Square, side: Side) {
        self.moves.push((square, side));
    }
    fn show_turn(&mut self, _: Option<Side>) {}
    fn render_result(&mut self, result: GameResult) {
        assert!(self.result.replace(result).is_none(), "result rendered twice");
    }
}

struct Idle;

impl Sampler for Idle {
    fn request(&mut self) {}
    fn cancel(&mut self) {}
}

type Game = Coordinator<Direct, Lights, Idle>;

fn start(mode: Mode, seed: u64) -> Game {
    let mut game = Coordinator::new(Direct, Lights::default(), Idle, Rng::with_seed(seed));
    game.handle(Event::ModeSelected(mode));
    game
}

fn human_plays(game: &mut Game, index: u16) {
    game.handle(Event::SampleReady(index));
    game.handle(Event::ConfirmPressed);
}

fn run_machine_turn(game: &mut Game) {
    while game.phase() == Phase::MachineTurn {
        game.handle(Event::TimerTick);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn random_machine_answers_a_centre_opening() {
    for seed in 0..32 {
        let mut game = start(Mode::Random, seed);
        human_plays(&mut game, 4);
        run_machine_turn(&mut game);

        let moves = &game.panel().moves;
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], (sq(4), Side::Human));
        let (reply, side) = moves[1];
        assert_eq!(side, Side::Machine);
        assert_ne!(reply, sq(4));
        assert_eq!(game.board().evaluate(), GameResult::InProgress);
        assert_eq!(game.phase(), Phase::HumanTurn);
    }
}

#[test]
fn calculated_machine_completes_its_row() {
    let board = Board::from_cells([M, M, E, H, H, E, E, E, E]);
    assert_eq!(board.move_count(), 4);
    assert_eq!(
        engine::choose(Mode::Calculated, &board, &mut Rng::with_seed(0)),
        Some(sq(2))
    );
}

#[test]
fn full_board_without_a_line_is_drawn() {
    let board = Board::from_cells([M, H, M, M, H, H, H, M, M]);
    assert_eq!(board.evaluate(), GameResult::Draw);
}

#[test]
fn lines_decide_the_winner() {
    let row = Board::from_cells([H, H, H, E, M, M, E, E, E]);
    assert_eq!(row.evaluate(), GameResult::HumanWin);
    let diagonal = Board::from_cells([M, H, E, E, M, H, E, H, M]);
    assert_eq!(diagonal.evaluate(), GameResult::MachineWin);
}

// =============================================================================
// Whole games
// =============================================================================

#[test]
fn idle_human_game_alternates_and_reports_once() {
    for seed in 0..16 {
        let mut game = start(Mode::Calculated, seed);
        let mut ticks = 0;
        while !game.is_finished() {
            game.handle(Event::TimerTick);
            ticks += 1;
            assert!(ticks < 200, "game never ended");
        }

        let moves = &game.panel().moves;
        assert_eq!(moves.len(), usize::from(game.board().move_count()));
        assert!(moves
            .iter()
            .zip([Side::Human, Side::Machine].into_iter().cycle())
            .all(|(&(_, side), expected)| side == expected));

        let result = game.board().evaluate();
        assert!(result.is_over());
        assert_ne!(result, GameResult::HumanWin, "seed {seed}");
        assert_eq!(game.phase(), Phase::ResultShown(result));
        assert_eq!(game.panel().result, Some(result));
    }
}

#[test]
fn timed_out_human_turn_is_played_in_the_humans_name() {
    let mut game = start(Mode::Random, 3);
    for _ in 0..9 {
        game.handle(Event::TimerTick);
    }
    assert!(game.panel().moves.is_empty());
    game.handle(Event::TimerTick);

    let moves = &game.panel().moves;
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].1, Side::Human);
    assert_eq!(game.board()[moves[0].0], H);
    assert_eq!(game.phase(), Phase::MachineTurn);
}

#[test]
fn human_can_win_against_random_play() {
    // Keep confirming along the top row until the machine has left it alone.
    for seed in 0..64 {
        let mut game = start(Mode::Random, seed);
        for index in 0..3 {
            if game.phase() != Phase::HumanTurn {
                break;
            }
            human_plays(&mut game, index);
            run_machine_turn(&mut game);
        }
        if game.board().evaluate() == GameResult::HumanWin {
            assert_eq!(game.phase(), Phase::ResultPending(GameResult::HumanWin));
            game.handle(Event::TimerTick);
            assert_eq!(game.panel().result, Some(GameResult::HumanWin));
            return;
        }
    }
    panic!("no seed let the human complete the top row");
}
