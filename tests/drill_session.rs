//! End-to-end session scenarios: beat clock, pattern engine, and drills
//! wired together the way a host loop would drive them.

use cypher_trainer::drills::{BattleMachine, BattlePhase, NoPauseDrill, NoPauseState, TimedRhymeChallenge};
use cypher_trainer::host::{NullNarrator, SilenceGate, SpeechSource, TransportClock};
use cypher_trainer::pattern::PatternEngine;
use cypher_trainer::timing::BeatClock;
use cypher_trainer::vocab::{Word, WordPack};

/// Scripted transport standing in for an audio player.
struct ScriptedTransport {
    elapsed: f64,
    bpm: f64,
    running: bool,
}

impl TransportClock for ScriptedTransport {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
    fn bpm(&self) -> f64 {
        self.bpm
    }
    fn is_running(&self) -> bool {
        self.running
    }
}

/// Scripted speech adapter: replays canned fragments into a drill.
struct ScriptedSpeech {
    fragments: Vec<(&'static str, bool)>,
    active: bool,
}

impl SpeechSource for ScriptedSpeech {
    fn start(&mut self) {
        self.active = true;
    }
    fn stop(&mut self) {
        self.active = false;
    }
}

impl ScriptedSpeech {
    fn replay_into(&mut self, drill: &mut TimedRhymeChallenge) -> u32 {
        let mut matches = 0;
        for (text, is_final) in &self.fragments {
            if self.active && drill.on_speech(text, *is_final).is_some() {
                matches += 1;
            }
        }
        matches
    }
}

#[test]
fn clock_drives_the_engine_one_bar_at_a_time() {
    // 120 bpm, 4-bar loop: a bar every 2 seconds
    let mut transport = ScriptedTransport {
        elapsed: 0.0,
        bpm: 120.0,
        running: true,
    };
    let mut clock = BeatClock::new(4).with_latency_offset(0.0);
    let mut engine = PatternEngine::seeded(WordPack::builtin(), 0xC10C);

    let mut words_by_bar = Vec::new();
    let mut t = 0.0;
    while t < 8.0 {
        if let Some(phase) = clock.poll(&transport) {
            let content = engine.content_for_bar(phase.current_bar);
            if words_by_bar.last().map(|(bar, _)| *bar) != Some(phase.current_bar) {
                words_by_bar.push((phase.current_bar, content.word.text.clone()));
            }
        }
        t += 1.0 / 60.0;
        transport.elapsed = t;
    }

    // Bars 0..=3 were all seen exactly once
    let bars: Vec<u64> = words_by_bar.iter().map(|(bar, _)| *bar).collect();
    assert_eq!(bars, vec![0, 1, 2, 3]);

    // Re-querying any earlier bar reproduces its word
    for (bar, word) in &words_by_bar {
        assert_eq!(&engine.content_for_bar(*bar).word.text, word);
    }
}

#[test]
fn pool_exhaustion_cycles_without_repeats() {
    // One rhyme key, five words, mono pattern: bars map straight onto
    // the pool
    let pack = WordPack::from_raw(
        "mini",
        "Mini",
        "",
        1,
        &[("OW", &["FLOW", "GO", "SLOW", "KNOW", "GOLD"])],
    );
    let mut engine = PatternEngine::seeded(pack, 0xF00);
    engine.set_pattern("AAAA");

    let first_cycle: Vec<String> = (0..5).map(|b| engine.content_for_bar(b).word.text).collect();
    let mut distinct = first_cycle.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 5, "pool repeated a word early: {first_cycle:?}");

    // The sixth bar draws from a rebuilt pool of the same five words
    let sixth = engine.content_for_bar(5).word;
    assert!(first_cycle.contains(&sixth.text));
    assert_ne!(sixth, Word::placeholder("OW"));
}

#[test]
fn silence_gate_and_drill_survival_time() {
    let mut gate = SilenceGate::with_threshold_ms(800);
    let mut drill = NoPauseDrill::new();

    gate.reset(0.0);
    drill.start(0.0);

    // Rapping until t=2.4, then silence; the 800ms debounce fires at 3.2
    let mut failed_at = None;
    let mut t: f64 = 0.0;
    while t < 5.0 {
        let loud = t < 2.4;
        if let Some(edge) = gate.observe(loud, t) {
            drill.on_silence(edge, t);
            if edge {
                failed_at = Some(t);
            }
        }
        t += 0.05;
    }

    assert_eq!(drill.state(), NoPauseState::Failed);
    let failed_at = failed_at.expect("silence edge fired");
    assert!((failed_at - 3.2).abs() < 0.1, "edge at {failed_at}");
    assert!((drill.survived(99.0) - 3.2).abs() < 0.1);
}

#[test]
fn timed_challenge_scores_only_final_matching_phrases() {
    let mut drill = TimedRhymeChallenge::seeded(0x7E57);
    let target = drill.start();

    let ending = match target.vowel {
        "AE" => "track",
        "AY" => "shine",
        "OW" => "gold",
        "EY" => "name",
        "IY" => "street",
        _ => "check",
    };

    let mut speech = ScriptedSpeech {
        fragments: vec![
            ("and then I", false),       // interim: ignored
            ("totally unrelated", true), // final miss: no penalty
            ("watch me end on", false),
        ],
        active: false,
    };
    speech.start();
    // Inject the matching phrase alongside the canned ones
    let canned = speech.replay_into(&mut drill);
    assert_eq!(canned, 0);
    let phrase = format!("watch me end on {ending}");
    assert!(drill.on_speech(&phrase, true).is_some());
    assert_eq!(drill.score(), 100);

    speech.stop();
    assert_eq!(speech.replay_into(&mut drill), 0);
}

#[test]
fn battle_runs_a_full_round_against_the_wall_clock() {
    let mut battle = BattleMachine::seeded(BattleMachine::stock_lines(), 0xBEEF);
    let mut narrator = NullNarrator;

    battle.start(0.0, &mut narrator);

    // Sweep time forward in small steps, recording phase entries
    let mut entered = Vec::new();
    let mut t = 0.0;
    while t <= 29.0 {
        if let Some(phase) = battle.tick(t, &mut narrator) {
            entered.push((t, phase));
        }
        t += 0.25;
    }

    let phases: Vec<BattlePhase> = entered.iter().map(|(_, p)| *p).collect();
    assert_eq!(
        phases,
        vec![BattlePhase::AiTurn, BattlePhase::UserTurn, BattlePhase::AiTurn]
    );
    assert_eq!(battle.score(), 500);
    assert_eq!(battle.combo(), 1);

    // Surrender mid-turn: nothing fires afterwards
    battle.surrender(&mut narrator);
    let mut late = t;
    while late < 100.0 {
        assert_eq!(battle.tick(late, &mut narrator), None);
        late += 5.0;
    }
    assert_eq!(battle.phase(), BattlePhase::Finished);
}

#[test]
fn stopping_the_transport_resets_the_clock_phase() {
    let mut transport = ScriptedTransport {
        elapsed: 7.3,
        bpm: 140.0,
        running: true,
    };
    let mut clock = BeatClock::new(4);

    let running_phase = clock.poll(&transport).expect("first poll emits");
    assert!(running_phase.current_bar > 0);

    transport.running = false;
    let stopped = clock.poll(&transport).expect("stop edge emits");
    assert_eq!(stopped.current_bar, 0);
    assert_eq!(stopped.beat_index, 0);
    assert_eq!(stopped.seconds_per_bar, 0.0);
    assert!(clock.poll(&transport).is_none());
}
