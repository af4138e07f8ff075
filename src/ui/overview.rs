//! Overview page elements: hero, category headings, cards, and controls.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use super::layout::show_more_label;
use super::preview::{self, PREVIEW_HEIGHT};
use super::style::{self, BLUE_500, BLUE_700, INDIGO_600};
use super::text::truncate;
use crate::catalog::CatalogEntry;

const HERO_TITLE_WIDTH: u16 = 22;

pub(super) fn render_hero(buf: &mut Buffer, rect: Rect) {
    let [title_area, _, samples_area] = Layout::horizontal([
        Constraint::Length(HERO_TITLE_WIDTH),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(rect);

    let mut title = vec![Line::raw(""); rect.height.saturating_sub(2) as usize];
    title.push(Line::styled(
        "  Components",
        style::heading().add_modifier(Modifier::UNDERLINED),
    ));
    Paragraph::new(title).style(style::surface()).render(title_area, buf);

    let dark = Style::default().bg(Color::Indexed(234)).fg(Color::Indexed(250));
    let bar_width = samples_area.width.saturating_sub(4) as usize;
    let samples = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " \u{25cf} Project key reset ",
                Style::default().bg(Color::Rgb(239, 246, 255)).fg(BLUE_700),
            ),
            Span::raw("  "),
            Span::styled(" Button ", Style::default().bg(INDIGO_600).fg(Color::White)),
            Span::raw("  "),
            Span::styled(" Chip ", Style::default().bg(style::INDIGO_500).fg(Color::White)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {:<width$}", "Name or email", width = bar_width.saturating_sub(1)),
                Style::default().bg(Color::Indexed(238)).fg(Color::Indexed(246)),
            ),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("\u{2501}".repeat(bar_width), Style::default().fg(BLUE_500)),
        ]),
    ];
    Paragraph::new(samples).style(dark).render(samples_area, buf);
}

pub(super) fn render_heading(buf: &mut Buffer, rect: Rect, name: &str) {
    Paragraph::new(Line::styled(name.to_string(), style::heading())).render(rect, buf);
}

pub(super) fn render_card(buf: &mut Buffer, rect: Rect, entry: &CatalogEntry, selected: bool) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style::border(selected));
    let inner = block.inner(rect);
    block.render(rect, buf);

    let preview_area = Rect {
        height: PREVIEW_HEIGHT.min(inner.height),
        ..inner
    };
    Paragraph::new(preview::render(entry.preview))
        .alignment(Alignment::Center)
        .style(style::surface())
        .render(preview_area, buf);

    let width = inner.width as usize;
    let name_style = if selected {
        style::cursor(style::heading())
    } else {
        style::heading()
    };
    let text = vec![
        Line::styled(truncate(entry.name, width), name_style),
        Line::styled(truncate(entry.description, width), style::muted()),
    ];
    let text_area = Rect {
        y: inner.y + preview_area.height,
        height: inner.height.saturating_sub(preview_area.height),
        ..inner
    };
    Paragraph::new(text).render(text_area, buf);
}

pub(super) fn render_show_more(
    buf: &mut Buffer,
    rect: Rect,
    hidden: usize,
    shown: bool,
    selected: bool,
) {
    let base = style::accent().add_modifier(Modifier::UNDERLINED);
    let style = if selected { style::cursor(base) } else { base };
    Paragraph::new(Line::styled(show_more_label(hidden, shown), style)).render(rect, buf);
}

pub(super) fn render_footer(buf: &mut Buffer, rect: Rect) {
    let lines = vec![
        Line::styled("\u{2500}".repeat(rect.width as usize), style::muted()),
        Line::styled("\u{a9} 2026 Cochl Inc.", style::muted()),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(rect, buf);
}
