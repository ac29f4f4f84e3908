use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::App;
use hintword::game::{GameState, ToastKind};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const LOW_TIME_SECS: u32 = 10;

const MASCOT_FACES: [&str; 6] = ["(^o^)", "(^_^)", "(o_o)", "(-_-)", "(;_;)", "(x_x)"];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.hud.finished {
            Some(state) => render_game_over(self, state, area, buf),
            None => render_playing(self, area, buf),
        }
    }
}

fn render_playing(app: &App, area: Rect, buf: &mut Buffer) {
    let hud = &app.hud;
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // status
            Constraint::Length(1), // mascot
            Constraint::Length(1),
            Constraint::Length(5), // hint
            Constraint::Length(3), // guess
            Constraint::Length(1), // toast
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(area);

    let mut status: Vec<Span> = (0..hud.max_lives)
        .map(|i| {
            if i < hud.lives {
                Span::styled("♥ ", Style::default().fg(Color::Red).patch(bold_style))
            } else {
                Span::styled("♡ ", dim_style)
            }
        })
        .collect();

    let timer_style = if hud.timer <= LOW_TIME_SECS {
        Style::default().fg(Color::Red).patch(bold_style)
    } else {
        Style::default().fg(Color::Yellow)
    };
    status.push(Span::raw("   "));
    status.push(Span::styled(format!("{}s left", hud.timer), timer_style));
    status.push(Span::raw(format!(
        "   found {}/{}   passes {}",
        hud.found,
        hud.target,
        hud.passes_left()
    )));
    Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    Paragraph::new(Span::styled(mascot_face(hud.mascot), Style::default().fg(Color::Magenta)))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    Paragraph::new(Span::styled(hud.hint.as_str(), bold_style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Hint {}/{}", hud.hint_index + 1, hud.hint_total)),
        )
        .render(chunks[3], buf);

    let input_width = chunks[4].width.saturating_sub(3) as usize;
    Paragraph::new(format!("{}▏", visible_tail(&app.input, input_width)))
        .block(Block::default().borders(Borders::ALL).title("Your guess"))
        .render(chunks[4], buf);

    if let Some(toast) = &app.toast {
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        };
        Paragraph::new(Span::styled(
            toast.text.as_str(),
            Style::default().fg(color).patch(bold_style),
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);
    }

    Paragraph::new(Span::styled(
        "enter guess / tab next hint / ctrl+p pass / esc quit",
        Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[7], buf);
}

fn render_game_over(app: &App, state: GameState, area: Rect, buf: &mut Buffer) {
    let hud = &app.hud;
    let (title, message, color) = match state {
        GameState::Won => (
            "Victory!",
            format!("Congratulations! You found {} words.", hud.found),
            Color::Green,
        ),
        _ => (
            "Defeat!",
            format!(
                "Only {} of {} words found... Try again!",
                hud.found, hud.target
            ),
            Color::Red,
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            mascot_face(hud.mascot),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "press r to play again, esc to quit",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];
    let height = lines.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}

fn mascot_face(stage: u8) -> &'static str {
    MASCOT_FACES[(stage as usize).min(MASCOT_FACES.len() - 1)]
}

/// Longest suffix of `input` fitting in `max_width` terminal columns
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (idx, c) in input.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &input[start..]
}
