//! Cypher - application setup and main loop

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use cypher_trainer::beat::Beat;
use cypher_trainer::drills::NoPauseDrill;
use cypher_trainer::host::{SilenceGate, TransportClock};
use cypher_trainer::pattern::{BarContent, PatternEngine};
use cypher_trainer::timing::{BeatClock, BeatPhase};
use cypher_trainer::vocab::WordPack;

use super::transport::SystemTransport;
use super::ui;

/// Bars of upcoming timeline to keep on screen
const TIMELINE_BARS: u64 = 4;

/// Main application builder
pub struct Cypher {
    beat: Beat,
    pattern_id: String,
}

impl Cypher {
    pub fn new(beat: Beat) -> Self {
        Self {
            beat,
            pattern_id: "AABB".to_string(),
        }
    }

    /// Select the rhyme-scheme pattern by id
    pub fn pattern(mut self, id: &str) -> Self {
        self.pattern_id = id.to_string();
        self
    }

    /// Run the trainer (takes over the terminal)
    pub fn run(self) -> EyreResult<()> {
        let mut terminal = ratatui::init();
        let result = App::new(self.beat, &self.pattern_id).run(&mut terminal);
        ratatui::restore();
        result
    }
}

struct App {
    beat: Beat,
    transport: SystemTransport,
    clock: BeatClock,
    engine: PatternEngine,
    phase: BeatPhase,
    window: Vec<(u64, BarContent)>,
    drill: NoPauseDrill,
    gate: SilenceGate,
    session: Instant,
    voiced_this_frame: bool,
    should_quit: bool,
}

impl App {
    fn new(beat: Beat, pattern_id: &str) -> Self {
        let mut engine = PatternEngine::new(WordPack::builtin());
        engine.set_pattern(pattern_id);

        let transport = SystemTransport::new(beat.bpm);
        let clock = BeatClock::new(beat.bars_per_loop);

        Self {
            beat,
            transport,
            clock,
            engine,
            phase: BeatPhase::ZERO,
            window: Vec::new(),
            drill: NoPauseDrill::new(),
            gate: SilenceGate::new(),
            session: Instant::now(),
            voiced_this_frame: false,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = self.session.elapsed().as_secs_f64();

            // Beat clock: emits only on actual beat changes
            if let Some(phase) = self.clock.poll(&self.transport) {
                self.phase = phase;
            }
            self.stock_timeline();

            // Keypresses stand in for microphone volume; the gate turns
            // them into debounced silence edges for the drill
            let loud = std::mem::take(&mut self.voiced_this_frame);
            if self.transport.is_running() {
                if let Some(edge) = self.gate.observe(loud, now) {
                    self.drill.on_silence(edge, now);
                }
            }

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, now);
                    }
                }
            }
        }
        Ok(())
    }

    /// Keep the upcoming bars resolved so the timeline can render them
    fn stock_timeline(&mut self) {
        if !self.transport.is_running() {
            return;
        }
        let start = self.phase.current_bar;
        self.window = (start..start + TIMELINE_BARS)
            .map(|bar| (bar, self.engine.content_for_bar(bar)))
            .collect();
    }

    fn handle_key(&mut self, key: KeyCode, now: f64) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.toggle_playback(now),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.transport.is_running() {
                    self.gate.reset(now);
                    self.drill.retry(now);
                }
            }
            KeyCode::Char('1') => self.switch_pattern("AABB"),
            KeyCode::Char('2') => self.switch_pattern("ABAB"),
            KeyCode::Char('3') => self.switch_pattern("AAAA"),
            KeyCode::Char(_) => {
                self.voiced_this_frame = true;
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self, now: f64) {
        self.transport.toggle();
        if self.transport.is_running() {
            self.gate.reset(now);
            self.drill.start(now);
        } else {
            self.drill.fail(now);
            self.window.clear();
        }
    }

    fn switch_pattern(&mut self, id: &str) {
        self.engine.set_pattern(id);
        self.window.clear();
    }

    fn render(&self, frame: &mut Frame) {
        let now = self.session.elapsed().as_secs_f64();
        let view = ui::View {
            beat: &self.beat,
            pattern_id: self.engine.pattern().id,
            is_playing: self.transport.is_running(),
            phase: &self.phase,
            window: &self.window,
            drill_state: self.drill.state(),
            survived: self.drill.survived(now),
            is_silent: self.gate.is_silent(),
        };
        ui::render(frame, &view);
    }
}
