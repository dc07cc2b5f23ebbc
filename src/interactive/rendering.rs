//! TUI rendering with ratatui
//!
//! Board, candidates, status and message panels for the coach interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterOutcome, Pattern, Word};
use crate::session::{GameState, MAX_GUESSES};
use crate::solver::CandidateSet;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name up to this many
const CANDIDATE_DISPLAY_LIMIT: usize = 40;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE COACH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_color(outcome: LetterOutcome) -> Color {
    match outcome {
        LetterOutcome::Correct => Color::Green,
        LetterOutcome::Misplaced => Color::Yellow,
        LetterOutcome::Absent => Color::DarkGray,
    }
}

fn tile_spans(word: &Word, pattern: Pattern) -> Vec<Span<'static>> {
    word.text()
        .chars()
        .zip(pattern.outcomes())
        .flat_map(|(letter, &outcome)| {
            [
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(tile_color(outcome))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect()
}

/// Guess rows with the selected checkpoint marked
fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2 + 2);

    let start_marker = if app.selected_checkpoint == 0 { "▶" } else { " " };
    lines.push(Line::from(format!(
        "{start_marker} 0  start ({} words)",
        app.session
            .candidates_at(0)
            .map_or(0, CandidateSet::len)
    )));
    lines.push(Line::from(""));

    for row in 0..MAX_GUESSES {
        let index = row + 1;
        let marker = if app.selected_checkpoint == index { "▶" } else { " " };
        let mut spans = vec![Span::raw(format!("{marker} {index}  "))];

        match history.get(row) {
            Some(checkpoint) => {
                if let (Some(word), Some(pattern)) = (checkpoint.word(), checkpoint.pattern()) {
                    spans.extend(tile_spans(word, pattern));
                    spans.push(Span::styled(
                        format!(" {} → {}", checkpoint.before().len(), checkpoint.after().len()),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }
            None if row == history.len() && app.session.state() == GameState::InProgress => {
                let typed: String = format!("{:_<5}", app.input_buffer);
                spans.extend(typed.chars().flat_map(|c| {
                    [
                        Span::styled(
                            format!(" {c} "),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                }));
            }
            None => spans.push(Span::styled(
                " ·   ·   ·   ·   · ",
                Style::default().fg(Color::DarkGray),
            )),
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board (↑/↓ select, Ctrl-U undo) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Length(4),      // Suggestion
            Constraint::Percentage(50), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_suggestion(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_search_progress<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let total = app.session.vocabulary().targets().len().max(1);
    let remaining = app.session.current_candidates().len();
    let eliminated = total.saturating_sub(remaining);
    // At most 100 since eliminated <= total
    let percent = u16::try_from(eliminated * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{total} | {remaining} remain"));

    f.render_widget(gauge, area);
}

fn render_suggestion<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = match &app.suggestion {
        Some(suggestion) => vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(
                    suggestion.word.text().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Expected:  {:.1} candidates remain",
                suggestion.expected_remaining
            )),
        ],
        None => vec![Line::from("Press Tab for a hint")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let candidates = app
        .session
        .candidates_at(app.selected_checkpoint)
        .unwrap_or_else(|| app.session.current_candidates());

    let words: Vec<&str> = candidates
        .iter()
        .take(CANDIDATE_DISPLAY_LIMIT)
        .map(Word::text)
        .collect();
    let mut text = words.join(" ");
    if candidates.len() > CANDIDATE_DISPLAY_LIMIT {
        text.push_str(&format!(" … +{}", candidates.len() - CANDIDATE_DISPLAY_LIMIT));
    }

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(
                    " Candidates after guess {} ({}) ",
                    app.selected_checkpoint,
                    candidates.len()
                ))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = match app.session.state() {
        GameState::Won => (" 🎉 SOLVED! | Ctrl-N new game, Esc quit ", Color::Green),
        GameState::Lost => (" Out of guesses | Ctrl-N new game, Esc quit ", Color::Red),
        GameState::NotStarted | GameState::InProgress => (
            " Type a guess, Enter to submit | Tab hint | Ctrl-G computer guess ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status = app.session.status();

    let guess_text = format!("Guess {}/{}", status.guess_number, status.max_guesses);
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let answer_text = status
        .target
        .map_or_else(|| "Answer: hidden".to_string(), |t| format!("Answer: {t}"));
    f.render_widget(
        Paragraph::new(answer_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Ctrl-R answer | Ctrl-N new | Esc quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
