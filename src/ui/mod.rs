pub mod overlays;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::engine::{
    CATCHER_HALF_WIDTH, CATCHER_TOP, FIELD_BOTTOM, ITEM_SIZE,
};
use crate::game::{GameState, ItemKind, Phase};

const FIELD_BG: Color = Color::Rgb(10, 10, 20);
const WALL_FG: Color = Color::Rgb(60, 60, 80);

// Catcher colors advance with level, one step per rank.
const CATCHER_COLORS: [Color; 10] = [
    Color::Rgb(30, 50, 120),
    Color::Rgb(150, 120, 20),
    Color::Rgb(120, 40, 160),
    Color::Rgb(30, 140, 150),
    Color::Rgb(160, 140, 30),
    Color::Rgb(170, 70, 20),
    Color::Rgb(140, 140, 40),
    Color::Rgb(40, 120, 60),
    Color::Rgb(150, 60, 90),
    Color::Rgb(90, 90, 140),
];

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(150, 110, 60)))
        .title(" 💩 Poop Drop ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(220, 170, 90))
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, chunks[0], &app.state);

    let field_w = chunks[1].width as usize;
    let field_h = chunks[1].height as usize;
    let lines = render_field(&app.state, field_w, field_h);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, chunks[2], app.state.phase);

    match app.state.phase {
        Phase::Idle => overlays::render_start(frame, chunks[1]),
        Phase::Ended => {
            overlays::render_game_over(frame, chunks[1], app.state.score, app.state.new_high)
        }
        Phase::Running => {}
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let status = Line::from(vec![
        Span::styled(" 🚽 ", Style::default()),
        Span::styled(
            format!("Score: {} ", state.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Lives: {} ", "♥ ".repeat(state.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Level: {} ", state.level),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("🏆 High: {} ", state.high_score),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn item_glyph(kind: ItemKind) -> (char, Color) {
    match kind {
        ItemKind::Poop => ('●', Color::Rgb(150, 100, 50)),
        ItemKind::Paper => ('▤', Color::Rgb(220, 220, 220)),
        ItemKind::Toilet => ('◇', Color::Rgb(120, 200, 255)),
        ItemKind::Pill => ('◉', Color::Rgb(230, 90, 200)),
    }
}

/// Rasterize the 0–100 percent play field onto a character grid.
fn render_field(state: &GameState, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let sx = w as f32 / FIELD_BOTTOM;
    let sy = h as f32 / FIELD_BOTTOM;

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(FIELD_BG)); w]; h];

    // Draw walls
    for row in grid.iter_mut() {
        row[0] = ('│', Style::default().fg(WALL_FG).bg(FIELD_BG));
        if w > 1 {
            row[w - 1] = ('│', Style::default().fg(WALL_FG).bg(FIELD_BG));
        }
    }

    // Falling items (those above the visible field are simply not drawn yet)
    for item in &state.items {
        if item.y < 0.0 {
            continue;
        }
        let ix = ((item.x + ITEM_SIZE / 2.0) * sx) as usize;
        let iy = (item.y * sy) as usize;
        if ix < w && iy < h {
            let (ch, color) = item_glyph(item.kind);
            grid[iy][ix] = (ch, Style::default().fg(color).bg(FIELD_BG));
        }
    }

    // Catcher bar, one row inside its vertical span
    let catcher_row = (((CATCHER_TOP + 5.0) * sy) as usize).min(h - 1);
    let left = ((state.catcher_x - CATCHER_HALF_WIDTH) * sx) as usize;
    let right = (((state.catcher_x + CATCHER_HALF_WIDTH) * sx) as usize).min(w - 1);
    let color_idx = (state.level as usize).min(CATCHER_COLORS.len() - 1);
    let mut catcher_style = Style::default()
        .fg(Color::Rgb(180, 200, 255))
        .bg(CATCHER_COLORS[color_idx])
        .add_modifier(Modifier::BOLD);
    if state.catch_flash > 0 {
        catcher_style = catcher_style.fg(Color::Rgb(255, 240, 120));
    }
    for cx in left..=right {
        if cx < w {
            let ch = if cx == left {
                '╣'
            } else if cx == right {
                '╠'
            } else {
                '═'
            };
            grid[catcher_row][cx] = (ch, catcher_style);
        }
    }

    // Level-up notice, centered near the top of the field
    if let Some(name) = state.notice {
        let text = format!("★ LEVEL UP! {} ★", name);
        let row = 1.min(h - 1);
        let start = w.saturating_sub(text.chars().count()) / 2;
        let style = Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .bg(FIELD_BG)
            .add_modifier(Modifier::BOLD);
        for (i, ch) in text.chars().enumerate() {
            let cx = start + i;
            if cx < w {
                grid[row][cx] = (ch, style);
            }
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_help(frame: &mut Frame, area: Rect, phase: Phase) {
    let help = match phase {
        Phase::Idle => Line::from(vec![
            Span::styled(" ENTER Start ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("←→/A D Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Phase::Running => Line::from(vec![
            Span::styled(" ←→/A D Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Esc Close ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Phase::Ended => Line::from(vec![
            Span::styled(" ENTER Play Again ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(help), area);
}
