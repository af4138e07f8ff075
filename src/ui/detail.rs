//! Detail page body: header, tab bar, and per-tab content.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::style::{self, GREEN_600, RED_500};
use super::{preview, text};
use crate::catalog::detail::DetailContent;
use crate::view::DetailTab;

/// Lines for the body of `tab`. The body depends only on the tab and the
/// static content, so switching tabs never carries state across.
pub fn body_lines(content: &DetailContent, tab: DetailTab, ascii: bool) -> Vec<Line<'static>> {
    match tab {
        DetailTab::Overview => overview_lines(content),
        DetailTab::Guidelines => guideline_lines(content, ascii),
        DetailTab::Usage => usage_lines(content, ascii),
    }
}

fn overview_lines(content: &DetailContent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled("Preview", style::heading()), Line::raw("")];
    lines.extend(preview::render(content.preview).into_iter().map(|line| {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(line.spans);
        Line::from(spans)
    }));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Anatomy", style::heading()));
    lines.push(Line::raw(""));
    let width = column_width(content.anatomy.iter().map(|(part, _)| *part));
    for (i, (part, desc)) in content.anatomy.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), style::accent()),
            Span::styled(format!("{part:<width$}  "), style::text()),
            Span::styled(*desc, style::muted()),
        ]));
    }
    lines
}

fn guideline_lines(content: &DetailContent, ascii: bool) -> Vec<Line<'static>> {
    let glyphs = style::glyphs(ascii);
    let mut lines = vec![Line::styled("Color", style::heading()), Line::raw("")];
    let role_width = column_width(content.colors.iter().map(|c| c.role));
    let token_width = column_width(content.colors.iter().map(|c| c.token));
    for color in content.colors {
        let (r, g, b) = color.rgb;
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(glyphs.swatch, Style::default().fg(Color::Rgb(r, g, b))),
            Span::raw("  "),
            Span::styled(format!("{:<role_width$}  ", color.role), style::text()),
            Span::styled(format!("{:<token_width$}  ", color.token), style::accent()),
            Span::styled(color.hex(), style::muted()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("States", style::heading()));
    lines.push(Line::raw(""));
    lines.extend(table_lines(content.states));

    lines.push(Line::raw(""));
    lines.push(Line::styled("Measurements", style::heading()));
    lines.push(Line::raw(""));
    lines.extend(table_lines(content.measurements));
    lines
}

fn usage_lines(content: &DetailContent, ascii: bool) -> Vec<Line<'static>> {
    let glyphs = style::glyphs(ascii);
    let mut lines = vec![
        Line::styled("Do", style::heading().fg(GREEN_600)),
        Line::raw(""),
    ];
    lines.extend(content.dos.iter().map(|item| {
        Line::from(vec![
            Span::styled(format!("  {} ", glyphs.check), Style::default().fg(GREEN_600)),
            Span::styled(*item, style::text()),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Don't", style::heading().fg(RED_500)));
    lines.push(Line::raw(""));
    lines.extend(content.donts.iter().map(|item| {
        Line::from(vec![
            Span::styled(format!("  {} ", glyphs.cross), Style::default().fg(RED_500)),
            Span::styled(*item, style::text()),
        ])
    }));
    lines
}

fn table_lines(rows: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let width = column_width(rows.iter().map(|(key, _)| *key));
    rows.iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("  {key:<width$}  "), style::text()),
                Span::styled(*value, style::muted()),
            ])
        })
        .collect()
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

pub(super) fn render_header(buf: &mut Buffer, rect: Rect, content: &DetailContent) {
    let mut lines = vec![
        Line::styled(content.title, style::heading().add_modifier(Modifier::UNDERLINED)),
        Line::raw(""),
    ];
    lines.extend(
        text::wrap(content.summary, rect.width as usize)
            .into_iter()
            .map(|line| Line::styled(line, style::muted())),
    );
    Paragraph::new(lines).render(rect, buf);
}

pub(super) fn render_tab(buf: &mut Buffer, rect: Rect, tab: DetailTab, active: bool, selected: bool) {
    let label_style = if active {
        style::accent().add_modifier(Modifier::BOLD)
    } else {
        style::muted()
    };
    let label_style = if selected {
        style::cursor(label_style)
    } else {
        label_style
    };
    Paragraph::new(Line::styled(format!(" {} ", tab.label()), label_style)).render(rect, buf);
    if active {
        let underline = Rect { y: rect.y + 1, ..rect };
        Paragraph::new(Line::styled(
            "\u{2501}".repeat(rect.width as usize),
            style::accent(),
        ))
        .render(underline, buf);
    }
}

pub(super) fn render_tab_rule(buf: &mut Buffer, rect: Rect) {
    Paragraph::new(Line::styled("\u{2500}".repeat(rect.width as usize), style::muted()))
        .render(rect, buf);
}

pub(super) fn render_body(buf: &mut Buffer, rect: Rect, content: &DetailContent, tab: DetailTab, ascii: bool) {
    Paragraph::new(body_lines(content, tab, ascii)).render(rect, buf);
}

pub(super) fn render_back(buf: &mut Buffer, rect: Rect, ascii: bool, selected: bool) {
    let base = style::accent();
    let style = if selected { style::cursor(base) } else { base };
    Paragraph::new(Line::styled(super::layout::back_label(ascii), style)).render(rect, buf);
}

pub(super) fn render_missing(buf: &mut Buffer, rect: Rect) {
    Paragraph::new(Line::styled("No documentation yet.", style::muted())).render(rect, buf);
}
