use super::{board, App, BoardCell, Status};
use crosswordle_core::{LetterFeedback, LetterStatus};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const CORRECT_BG: Color = Color::Green;
const PRESENT_BG: Color = Color::Yellow;
const ABSENT_BG: Color = Color::DarkGray;
const CROSSER_BG: Color = Color::Blue;

fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => CORRECT_BG,
        LetterStatus::Present => PRESENT_BG,
        LetterStatus::Absent => ABSENT_BG,
    }
}

fn status_style(status: LetterStatus) -> Style {
    Style::default()
        .bg(status_color(status))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn draw<L>(app: &App<L>, frame: &mut Frame) {
    let [header, body, footer] = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .areas(frame.area());

    let [left, right] = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(40)])
        .areas(body);

    let cells = board(&app.session);
    let grid_height = u16::try_from(cells.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let [grid_area, guesses_area] = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(grid_height), Constraint::Min(3)])
        .areas(left);

    let [clues_area, keyboard_area] = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .areas(right);

    draw_header(app, frame, header);
    draw_grid(&cells, frame, grid_area);
    draw_guesses(app, frame, guesses_area);
    draw_clues(app, frame, clues_area);
    draw_keyboard(app, frame, keyboard_area);
    draw_footer(app, frame, footer);
}

fn draw_header<L>(app: &App<L>, frame: &mut Frame, area: Rect) {
    let data = app.session.puzzle().data();
    let mut spans = vec![Span::styled(
        format!("Crosswordle {}", data.date),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !data.theme.is_empty() {
        spans.push(Span::raw(format!("  Theme: {}", data.theme)));
    }
    if !data.theme_hint.is_empty() {
        spans.push(Span::styled(
            format!("  ({})", data.theme_hint),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let par = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(par, area);
}

/// Board lines, three characters per square.
pub fn grid_lines(cells: &[Vec<BoardCell>]) -> Vec<Line<'static>> {
    cells
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        BoardCell::Blank => Span::raw("   "),
                        BoardCell::Main(Some(c)) => {
                            Span::styled(format!(" {} ", c), status_style(LetterStatus::Correct))
                        }
                        BoardCell::Main(None) => {
                            Span::styled(" _ ", Style::default().bg(Color::White).fg(Color::Black))
                        }
                        BoardCell::Crosser(Some(c)) => Span::styled(
                            format!(" {} ", c),
                            Style::default().bg(CROSSER_BG).fg(Color::White),
                        ),
                        BoardCell::Crosser(None) => {
                            Span::styled(" · ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn draw_grid(cells: &[Vec<BoardCell>], frame: &mut Frame, area: Rect) {
    let par = Paragraph::new(Text::from(grid_lines(cells)))
        .block(Block::default().borders(Borders::ALL).title(" Grid "));
    frame.render_widget(par, area);
}

fn feedback_line(feedback: &[LetterFeedback]) -> Line<'static> {
    Line::from(
        feedback
            .iter()
            .map(|f| Span::styled(format!(" {} ", f.letter), status_style(f.status)))
            .collect::<Vec<_>>(),
    )
}

fn draw_guesses<L>(app: &App<L>, frame: &mut Frame, area: Rect) {
    let session = &app.session;
    let mut lines: Vec<Line> = session
        .attempts()
        .iter()
        .map(|attempt| feedback_line(&attempt.feedback))
        .collect();

    if !session.phase().is_terminal() {
        let length = session.puzzle().word_length();
        let typed: String = app
            .input
            .chars()
            .chain(std::iter::repeat('_'))
            .take(length)
            .map(|c| format!(" {} ", c))
            .collect();
        lines.push(Line::from(Span::styled(
            typed,
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
    }

    let title = format!(
        " Guesses ({}/{}) ",
        session.attempts().len(),
        session.max_attempts()
    );
    let par = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(par, area);
}

fn draw_clues<L>(app: &App<L>, frame: &mut Frame, area: Rect) {
    let revealed = app.session.revealed_crosser_ids();
    let items: Vec<ListItem> = app
        .session
        .puzzle()
        .crossers()
        .iter()
        .map(|crosser| {
            if revealed.contains(&crosser.id) {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        crosser.word.clone(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {}", crosser.clue)),
                ]))
            } else {
                ListItem::new(format!(
                    "{} {} ({})",
                    "_".repeat(crosser.length()),
                    crosser.clue,
                    crosser.length()
                ))
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Crossers "));
    frame.render_widget(list, area);
}

fn draw_keyboard<L>(app: &App<L>, frame: &mut Frame, area: Rect) {
    let keys = app.session.keyboard();
    let spans: Vec<Span> = ('A'..='Z')
        .map(|c| match keys.get(&c) {
            Some(status) => {
                Span::styled(format!("{} ", c), Style::default().fg(status_color(*status)))
            }
            None => Span::raw(format!("{} ", c)),
        })
        .collect();

    let par = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Letters "));
    frame.render_widget(par, area);
}

fn draw_footer<L>(app: &App<L>, frame: &mut Frame, area: Rect) {
    let present = app.session.present_letters();
    let hints = if present.is_empty() {
        Line::raw("")
    } else {
        let letters: Vec<String> = present.iter().map(|c| c.to_string()).collect();
        Line::from(vec![
            Span::raw("In the word: "),
            Span::styled(letters.join(" "), Style::default().fg(PRESENT_BG)),
        ])
    };

    let message = match &app.status {
        Status::Idle => Line::styled(
            "Type a guess, enter to submit, esc to quit",
            Style::default().fg(Color::DarkGray),
        ),
        Status::Info(text) => Line::styled(text.clone(), Style::default().fg(Color::Green)),
        Status::Error(text) => Line::styled(text.clone(), Style::default().fg(Color::Red)),
    };

    let par = Paragraph::new(Text::from(vec![hints, message]))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(par, area);
}
