use fastrand::Rng;
use ufmt::derive::uDebug;

use crate::{
    board::{Board, GameResult},
    consts::Timing,
    decoder::AnalogDecoder,
    engine::{self, Mode},
    event::Event,
    panel::{Panel, Sampler},
    side::Side,
    square::Square,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, uDebug)]
pub enum Phase {
    #[default]
    AwaitingMode,
    HumanTurn,
    MachineTurn,
    /// The game has ended; the result pattern goes up on the next tick.
    ResultPending(GameResult),
    /// Nothing more happens until reset.
    ResultShown(GameResult),
}

impl Phase {
    pub const fn turn(self) -> Option<Side> {
        match self {
            Self::HumanTurn => Some(Side::Human),
            Self::MachineTurn => Some(Side::Machine),
            Self::AwaitingMode | Self::ResultPending(_) | Self::ResultShown(_) => None,
        }
    }
}

/// Owns the whole game and turns hardware events into moves.
///
/// Every event goes through [`Coordinator::handle`] on one thread, so a move,
/// its timer reset and the change of turn always land together.
pub struct Coordinator<D, P, S> {
    board: Board,
    phase: Phase,
    mode: Option<Mode>,
    pending: Option<Square>,
    ticks: u8,
    timing: Timing,
    rng: Rng,
    decoder: D,
    panel: P,
    sampler: S,
}

impl<D, P, S> Coordinator<D, P, S>
where
    D: AnalogDecoder,
    P: Panel,
    S: Sampler,
{
    pub fn new(decoder: D, panel: P, sampler: S, rng: Rng) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::default(),
            mode: None,
            pending: None,
            ticks: 0,
            timing: Timing::default(),
            rng,
            decoder,
            panel,
            sampler,
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn handle(&mut self, event: Event) {
        match (self.phase, event) {
            (Phase::AwaitingMode, Event::ModeSelected(mode)) => self.start(mode),
            (Phase::HumanTurn, Event::SampleReady(raw)) => self.sample(raw),
            (Phase::HumanTurn, Event::ConfirmPressed) => self.confirm(),
            (_, Event::TimerTick) => self.tick(),
            _ => {}
        }
    }

    fn start(&mut self, mode: Mode) {
        self.mode = Some(mode);
        self.ticks = 0;
        self.phase = Phase::HumanTurn;
        self.panel.show_turn(Some(Side::Human));
        self.sampler.request();
    }

    fn sample(&mut self, raw: u16) {
        match self.decoder.decode(raw) {
            Some(square) if self.board.is_empty(square) => self.select(Some(square)),
            Some(_) => self.select(None),
            // Between bands while the knob moves; keep whatever was showing.
            None => {}
        }
        self.sampler.request();
    }

    fn select(&mut self, selection: Option<Square>) {
        if self.pending == selection {
            return;
        }
        if let Some(previous) = self.pending {
            self.panel.clear_preview(previous);
        }
        if let Some(square) = selection {
            self.panel.preview(square);
        }
        self.pending = selection;
    }

    fn confirm(&mut self) {
        match self.pending {
            Some(square) if self.board.is_empty(square) => {
                self.panel.clear_preview(square);
                self.play(square, Side::Human);
            }
            _ => self.sampler.request(),
        }
    }

    fn tick(&mut self) {
        match self.phase {
            Phase::AwaitingMode | Phase::ResultShown(_) => {}
            Phase::ResultPending(result) => {
                self.panel.render_result(result);
                self.phase = Phase::ResultShown(result);
            }
            Phase::HumanTurn => {
                self.ticks = self.ticks.saturating_add(1);
                if self.ticks >= self.timing.human_timeout {
                    self.force_human_move();
                }
            }
            Phase::MachineTurn => {
                self.ticks = self.ticks.saturating_add(1);
                if self.ticks >= self.timing.machine_delay {
                    self.machine_move();
                }
            }
        }
    }

    /// The human ran out of time: a random square is played in their name.
    fn force_human_move(&mut self) {
        self.select(None);
        let square = engine::pick_random(&self.board, &mut self.rng)
            .expect("live turn on a full board");
        self.play(square, Side::Human);
    }

    fn machine_move(&mut self) {
        let mode = self.mode.expect("turn started without a mode");
        let square =
            engine::choose(mode, &self.board, &mut self.rng).expect("live turn on a full board");
        self.play(square, Side::Machine);
    }

    fn play(&mut self, square: Square, side: Side) {
        self.board.apply(square, side);
        self.panel.confirm(square, side);
        self.ticks = 0;
        self.pending = None;

        let result = self.board.evaluate();
        if result.is_over() {
            self.phase = Phase::ResultPending(result);
            self.panel.show_turn(None);
            self.sampler.cancel();
            return;
        }

        let next = side.opponent();
        self.panel.show_turn(Some(next));
        match next {
            Side::Human => {
                self.phase = Phase::HumanTurn;
                self.sampler.request();
            }
            Side::Machine => {
                self.phase = Phase::MachineTurn;
                self.sampler.cancel();
            }
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub const fn pending(&self) -> Option<Square> {
        self.pending
    }

    /// Ticks elapsed in the current turn.
    pub const fn ticks(&self) -> u8 {
        self.ticks
    }

    /// Once the result is on the panel no event changes anything.
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::ResultShown(_))
    }

    pub const fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }
}
