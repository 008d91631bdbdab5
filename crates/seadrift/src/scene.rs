//! Per-frame scene composition: backdrop gradient, particle overlay, clock
//! and tagline.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use seadrift_ambience::{
    ParticleField, TypingAnimator, hsl_to_rgb, mix, PROP_MOUSE_X, PROP_MOUSE_Y, PROP_SEA_DEEP,
    PROP_SEA_FOAM, PROP_SEA_MID,
};
use seadrift_core::{Hsl, StyleMap};

/// Compose the whole frame from the published style properties and the
/// component states.
pub fn render(
    frame: &mut Frame,
    style: &StyleMap,
    field: Option<&ParticleField>,
    tagline: Option<&TypingAnimator>,
) {
    let area = frame.area();

    // The renderer consumes what the components published; night palette as
    // the fallback before the first apply.
    let deep = style.color(PROP_SEA_DEEP).unwrap_or(Hsl::new(215, 35, 14));
    let mid = style.color(PROP_SEA_MID).unwrap_or(Hsl::new(210, 28, 22));
    let foam = style.color(PROP_SEA_FOAM).unwrap_or(Hsl::new(205, 22, 33));
    let offset_x = style.scalar(PROP_MOUSE_X).unwrap_or(0.0) as f32;
    let offset_y = style.scalar(PROP_MOUSE_Y).unwrap_or(0.0) as f32;

    let overlay = field.map(|f| f.overlay()).unwrap_or_default();

    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let spans: Vec<Span> = (0..area.width)
                .map(|x| {
                    let bg = backdrop(x, y, area.width, area.height, deep, mid, foam, offset_x, offset_y);
                    match overlay.get(&(x, y)) {
                        Some(&(glyph, color)) => {
                            Span::styled(glyph.to_string(), Style::new().fg(color).bg(bg))
                        }
                        None => Span::styled(" ", Style::new().bg(bg)),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    let accent = hsl_to_rgb(foam);

    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Top padding
        Constraint::Length(1), // Clock
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Tagline
        Constraint::Fill(1),   // Bottom padding
        Constraint::Length(1), // Help text
    ])
    .split(area);

    let clock = Paragraph::new(Local::now().format("%H:%M").to_string())
        .style(Style::new().fg(accent))
        .alignment(Alignment::Center);
    frame.render_widget(clock, chunks[1]);

    if let Some(animator) = tagline {
        let mut spans = vec![Span::styled(animator.text().to_owned(), Style::new().fg(accent))];
        if !animator.finished() {
            spans.push(Span::styled("▌", Style::new().fg(accent)));
        }
        frame.render_widget(Line::from(spans).centered(), chunks[3]);
    }

    let help = Line::from(vec!["q".bold().fg(accent), " quit".dark_gray()]).centered();
    frame.render_widget(help, chunks[5]);
}

/// Backdrop color for a cell: deep at the top through mid to foam at the
/// bottom, tilted slightly by the parallax offset.
#[allow(clippy::too_many_arguments)]
fn backdrop(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    deep: Hsl,
    mid: Hsl,
    foam: Hsl,
    offset_x: f32,
    offset_y: f32,
) -> Color {
    let x_norm = x as f32 / width.max(1) as f32;
    let y_norm = (y as f32 + offset_y * 2.0) / height.max(1) as f32;
    let t = (y_norm + (x_norm - 0.5) * offset_x * 0.2).clamp(0.0, 1.0);
    if t < 0.5 {
        mix(deep, mid, t * 2.0)
    } else {
        mix(mid, foam, (t - 0.5) * 2.0)
    }
}
