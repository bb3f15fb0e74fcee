use tinyrand::{Rand, Seeded, StdRand};

use crate::host::Narrator;
use crate::DEFAULT_SEED;

/// Beat-length intro before the first AI turn.
pub const INTRO_SECONDS: f64 = 4.0;
/// Duration of every AI and user turn.
pub const TURN_SECONDS: f64 = 12.0;
/// Base score for completing a user turn.
pub const TURN_POINTS: u32 = 500;
/// Extra points per combo level.
pub const COMBO_POINTS: u32 = 100;

/// Draw attempts before accepting a duplicate second script line.
const LINE_RETRIES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Idle,
    Intro,
    AiTurn,
    UserTurn,
    /// Terminal: surrendered or stopped
    Finished,
}

/// Scripted battle turn machine.
///
/// Turns alternate on fixed deadlines: intro, then AI and user turns of
/// [`TURN_SECONDS`] each. Completing a user turn scores and bumps the
/// combo. The machine holds deadlines as plain timestamps and is
/// advanced by [`BattleMachine::tick`]; `surrender` clears the deadline
/// and bumps the generation counter, so a callback scheduled against an
/// earlier run can check [`BattleMachine::generation`] and drop itself.
pub struct BattleMachine {
    phase: BattlePhase,
    score: u32,
    combo: u32,
    round: u32,
    deadline: Option<f64>,
    generation: u64,
    lines: Vec<String>,
    current_line: String,
    rand: StdRand,
}

impl BattleMachine {
    /// Machine over a script of taunt lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self::seeded(lines, DEFAULT_SEED)
    }

    pub fn seeded(lines: Vec<String>, seed: u64) -> Self {
        Self {
            phase: BattlePhase::Idle,
            score: 0,
            combo: 0,
            round: 0,
            deadline: None,
            generation: 0,
            lines,
            current_line: String::new(),
            rand: StdRand::seed(seed),
        }
    }

    /// The stock taunt script.
    pub fn stock_lines() -> Vec<String> {
        STOCK_LINES.iter().map(|s| (*s).to_string()).collect()
    }

    /// Start (or restart) a battle at time `now`. Score, combo and round
    /// count reset; any in-flight narration is cancelled.
    pub fn start(&mut self, now: f64, narrator: &mut dyn Narrator) {
        narrator.cancel();
        self.generation += 1;
        self.score = 0;
        self.combo = 0;
        self.round = 0;
        self.phase = BattlePhase::Intro;
        self.current_line = "GET READY...".to_string();
        self.deadline = Some(now + INTRO_SECONDS);
    }

    /// Advance the machine. Returns the phase just entered when a
    /// deadline expired, `None` otherwise.
    pub fn tick(&mut self, now: f64, narrator: &mut dyn Narrator) -> Option<BattlePhase> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        match self.phase {
            BattlePhase::Intro => {
                self.enter_ai_turn(now, narrator);
                Some(BattlePhase::AiTurn)
            }
            BattlePhase::AiTurn => {
                self.enter_user_turn(now);
                Some(BattlePhase::UserTurn)
            }
            BattlePhase::UserTurn => {
                // Surviving the turn scores and builds the combo
                self.score += TURN_POINTS + COMBO_POINTS * self.combo;
                self.combo += 1;
                self.enter_ai_turn(now, narrator);
                Some(BattlePhase::AiTurn)
            }
            BattlePhase::Idle | BattlePhase::Finished => None,
        }
    }

    /// Give up: terminal from any state. Pending deadlines die with the
    /// generation bump; narration is cancelled.
    pub fn surrender(&mut self, narrator: &mut dyn Narrator) {
        narrator.cancel();
        self.generation += 1;
        self.deadline = None;
        self.phase = BattlePhase::Finished;
    }

    fn enter_ai_turn(&mut self, now: f64, narrator: &mut dyn Narrator) {
        self.phase = BattlePhase::AiTurn;
        self.round += 1;

        // Two distinct lines per turn; lines may recur across turns
        let (first, second) = self.draw_line_pair();
        self.current_line = format!("{first} / {second}");
        narrator.speak(&self.current_line.replace('/', ","));

        self.deadline = Some(now + TURN_SECONDS);
    }

    fn enter_user_turn(&mut self, now: f64) {
        self.phase = BattlePhase::UserTurn;
        self.current_line = "YOUR TURN!".to_string();
        self.deadline = Some(now + TURN_SECONDS);
    }

    fn draw_line_pair(&mut self) -> (String, String) {
        if self.lines.is_empty() {
            // No script: the narrator seam degrades to silence
            return (String::new(), String::new());
        }
        let first = self.lines[self.rand.next_lim_usize(self.lines.len())].clone();
        if self.lines.len() == 1 {
            return (first.clone(), first);
        }
        // Distinct best-effort: a script full of identical text gives up
        // after the retry budget instead of spinning
        let mut second = self.lines[self.rand.next_lim_usize(self.lines.len())].clone();
        let mut attempts = 0;
        while second == first && attempts < LINE_RETRIES {
            second = self.lines[self.rand.next_lim_usize(self.lines.len())].clone();
            attempts += 1;
        }
        (first, second)
    }

    /// Seconds until the current deadline, zero when none is pending.
    pub fn time_left(&self, now: f64) -> f64 {
        self.deadline.map_or(0.0, |d| (d - now).max(0.0))
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Bumped on every start/surrender; hosts stamp scheduled callbacks
    /// with this and drop any whose stamp no longer matches.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The line on screen: taunt pair, "GET READY...", or "YOUR TURN!".
    pub fn current_line(&self) -> &str {
        &self.current_line
    }
}

const STOCK_LINES: &[&str] = &[
    "Your bars are so light they float away",
    "I heard your last verse, my condolences",
    "You rhyme 'flow' with 'flow' and call it a show",
    "Step off the stage before the stage steps off you",
    "Your punchlines need a tutor and a miracle",
    "I've seen metronomes with more swagger than you",
    "You count to four and still drop off the beat",
    "Keep practicing, maybe the echo will clap",
    "Your freestyle sounds pre-written and still weak",
    "The mic filed a complaint about your grip",
];
