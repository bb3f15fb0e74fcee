//! TUI rendering - transport bar, bar timeline, drill panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cypher_trainer::beat::Beat;
use cypher_trainer::drills::NoPauseState;
use cypher_trainer::pattern::BarContent;
use cypher_trainer::timing::BeatPhase;

/// Everything the renderer needs for one frame
pub struct View<'a> {
    pub beat: &'a Beat,
    pub pattern_id: &'a str,
    pub is_playing: bool,
    pub phase: &'a BeatPhase,
    pub window: &'a [(u64, BarContent)],
    pub drill_state: NoPauseState,
    pub survived: f64,
    pub is_silent: bool,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Min(6),    // Bar timeline
            Constraint::Length(4), // Drill panel
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_transport(frame, chunks[0], view);
    render_timeline(frame, chunks[1], view);
    render_drill(frame, chunks[2], view);
    render_help(frame, chunks[3]);
}

fn render_transport(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default().title(" cypher ").borders(Borders::ALL);

    let play_symbol = if view.is_playing { "▶" } else { "⏸" };
    let play_state = if view.is_playing { "Playing" } else { "Stopped" };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ({:.0} BPM)  ", view.beat.name, view.beat.bpm),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{play_symbol} {play_state}  "),
            Style::default().fg(if view.is_playing {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(
            format!(
                "Bar {} | Beat {}  ",
                view.phase.current_bar + 1,
                view.phase.beat_index + 1
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Loop {}/{}  ", view.phase.bar_in_loop + 1, view.beat.bars_per_loop),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Pattern {}", view.pattern_id),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_timeline(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default().title(" timeline ").borders(Borders::ALL);

    let mut lines = Vec::new();
    if view.window.is_empty() {
        lines.push(Line::from(Span::styled(
            "  press SPACE to drop the beat",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (bar, content) in view.window {
        let is_current = *bar == view.phase.current_bar;
        let marker = if is_current { "▶" } else { " " };
        let accent = color_from_hex(content.color);

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {marker} bar {:>3}  ", bar + 1),
                Style::default().fg(if is_current {
                    Color::White
                } else {
                    Color::DarkGray
                }),
            ),
            Span::styled(format!("[{}] ", content.slot), Style::default().fg(accent)),
            Span::styled(
                format!("{:<10}", content.word.text),
                Style::default().fg(if is_current { Color::White } else { Color::Gray }),
            ),
            Span::styled(
                format!("  ({})", content.rhyme_key),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_drill(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default().title(" no-pause drill ").borders(Borders::ALL);

    let line = match view.drill_state {
        NoPauseState::Idle => Line::from(Span::styled(
            " waiting for the beat",
            Style::default().fg(Color::DarkGray),
        )),
        NoPauseState::Running => Line::from(vec![
            Span::styled(
                format!(" {:.1}s  ", view.survived),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                if view.is_silent {
                    "SILENCE DETECTED"
                } else {
                    "KEEP FLOWING"
                },
                Style::default().fg(if view.is_silent {
                    Color::Red
                } else {
                    Color::Green
                }),
            ),
        ]),
        NoPauseState::Failed => Line::from(vec![
            Span::styled(" FAILED  ", Style::default().fg(Color::Red)),
            Span::styled(
                format!("survived {:.1}s - press R to retry", view.survived),
                Style::default().fg(Color::White),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " SPACE play/stop | letters = your voice | R retry | 1 AABB 2 ABAB 3 AAAA | Q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

/// Parse a "#RRGGBB" palette entry; anything else renders white.
fn color_from_hex(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}
