//! Snake board and side panel rendering.
//!
//! Each board cell is two terminal columns wide to correct for character
//! aspect ratio.

use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serpent::{Achievement, GameMachine, GameState, Position};

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FOOD_COLOR: Color = Color::Rgb(255, 90, 50);
const EMPTY_COLOR: Color = Color::Rgb(12, 12, 18);
const GRID_COLOR: Color = Color::Rgb(30, 30, 40);

/// Transient message shown in the side panel (level up, new best, ...).
pub struct Banner {
    pub text: String,
    pub color: Color,
}

/// Render the whole game screen.
pub fn render_snake_scene(
    frame: &mut Frame,
    machine: &GameMachine,
    banner: Option<&Banner>,
    show_grid: bool,
) {
    let area = frame.size();
    let board_width = machine.config().board_size as u16 * 2 + 2;
    let columns = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(24)])
        .split(area);

    render_board(frame, columns[0], machine, show_grid);
    render_info_panel(frame, columns[1], machine, banner);
}

/// Interpolated color for a body segment: bright near the head, dim at the tail.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn render_board(frame: &mut Frame, area: Rect, machine: &GameMachine, show_grid: bool) {
    let data = machine.data();
    let size = machine.config().board_size as usize;

    let mut cells: Vec<Vec<Option<Color>>> = vec![vec![None; size]; size];
    let Position { x: fx, y: fy } = data.food;
    if (0..size as i16).contains(&fx) && (0..size as i16).contains(&fy) {
        cells[fy as usize][fx as usize] = Some(FOOD_COLOR);
    }
    let snake_len = data.snake.len();
    for (i, seg) in data.snake.segments.iter().enumerate() {
        if (0..size as i16).contains(&seg.x) && (0..size as i16).contains(&seg.y) {
            cells[seg.y as usize][seg.x as usize] = Some(if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            });
        }
    }

    let lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled("██", Style::default().fg(*color)),
                        None if show_grid => {
                            Span::styled(" ·", Style::default().fg(GRID_COLOR).bg(EMPTY_COLOR))
                        }
                        None => Span::styled("  ", Style::default().bg(EMPTY_COLOR)),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let border_color = match data.display_state() {
        GameState::GameOver => Color::Red,
        GameState::Paused => Color::Yellow,
        _ => Color::LightGreen,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Serpent ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, machine: &GameMachine, banner: Option<&Banner>) {
    let data = machine.data();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let state_text = match data.display_state() {
        GameState::Ready => "Press Space to start",
        GameState::Playing => "Playing",
        GameState::Paused => "Paused - Space to resume",
        GameState::GameOver => "Game over - Space to retry",
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("Score  ", label), Span::styled(data.score.to_string(), value)]),
        Line::from(vec![Span::styled("Best   ", label), Span::styled(data.best_score.to_string(), value)]),
        Line::from(vec![Span::styled("Level  ", label), Span::styled(data.level.to_string(), value)]),
        Line::from(vec![
            Span::styled("Speed  ", label),
            Span::styled(format!("{}ms", data.game_speed), value),
        ]),
        Line::from(vec![
            Span::styled("Length ", label),
            Span::styled(data.snake.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(state_text, Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];

    if let Some(banner) = banner {
        lines.push(Line::from(Span::styled(
            banner.text.clone(),
            Style::default().fg(banner.color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Achievements", label)));
    lines.extend(machine.achievements().iter().map(achievement_line));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Arrows/WASD steer  Space pause  R reset  Q quit",
        label,
    )));

    let block = Block::default().borders(Borders::ALL).title(" Info ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn achievement_line(achievement: &Achievement) -> Line<'static> {
    let (mark, color) = if achievement.unlocked {
        ("★ ", Color::Yellow)
    } else {
        ("☆ ", Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(color)),
        Span::styled(
            format!("{} ({})", achievement.name, achievement.threshold),
            Style::default().fg(color),
        ),
    ])
}
