use ratatui::prelude::*;
use ratatui::widgets::*;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn render_start(frame: &mut Frame, area: Rect) {
    let overlay = centered(area, 48, 12);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(220, 170, 90)))
        .title(" 💩 Welcome to Poop Drop! ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(220, 170, 90))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let dim = Style::default().fg(Color::Rgb(180, 180, 200));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Catch the falling items with your toilet 🚽", dim)),
        Line::from(""),
        Line::from(Span::styled("  💩 = 10 pts │ 🧻 = 20 pts │ 🚽 = 30 pts │ 💊 = 50 pts", dim)),
        Line::from(""),
        Line::from(Span::styled("  Don't let the 💩 hit the ground!", Style::default().fg(Color::Rgb(230, 120, 100)))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", dim),
            Span::styled("ENTER", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" to start, ←→ or A/D to move", dim),
        ]),
    ];
    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, score: u32, new_high: bool) {
    let overlay = centered(area, 40, 10);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 💀 GAME OVER ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Final Score: {}", score),
            Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if new_high {
        lines.push(Line::from(Span::styled(
            "  🎉 New High Score! 🎉",
            Style::default().fg(Color::Rgb(80, 255, 120)).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(Color::Rgb(180, 180, 200))),
        Span::styled("ENTER", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" to play again", Style::default().fg(Color::Rgb(180, 180, 200))),
    ]));

    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
