use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Focus, Model, RailItem};
use crate::nav::SidebarRow;

use super::layout::{
    rail_item_row, shell_areas, sidebar_scroll_start, sidebar_visible_rows,
};
use super::{content, overlays, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let areas = shell_areas(area);

    render_rail(model, frame, areas.rail);
    render_sidebar(model, frame, areas.sidebar);
    content::render_content(model, frame, areas.content);
    status::render_status_bar(model, frame, areas.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_rail(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(style::border(model.focus == Focus::Rail));
    frame.render_widget(block, area);

    for (i, item) in RailItem::ALL.iter().enumerate() {
        let row = rail_item_row(area, i);
        if row >= area.y + area.height {
            break;
        }
        // Components is the section this catalog lives in.
        let base = if *item == RailItem::Components {
            style::accent().add_modifier(Modifier::BOLD)
        } else {
            style::muted()
        };
        let style = if model.focus == Focus::Rail && model.rail_cursor == i {
            style::cursor(base)
        } else {
            base
        };
        let rect = Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1);
        frame.render_widget(Paragraph::new(Line::styled(item.label(), style)), rect);
    }
}

fn render_sidebar(model: &Model, frame: &mut Frame, area: Rect) {
    let glyphs = style::glyphs(model.ascii);
    let page = model.page();
    let rows = model.nav.rows();
    let visible = sidebar_visible_rows(area);
    let start = sidebar_scroll_start(model.sidebar_cursor, visible);
    let inner_width = area.width.saturating_sub(1) as usize;

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, row)| {
            let (text, base) = match *row {
                SidebarRow::Overview => {
                    let style = if page.is_detail() {
                        style::muted()
                    } else {
                        style::accent().add_modifier(Modifier::BOLD)
                    };
                    (" Component overview".to_string(), style)
                }
                SidebarRow::Category(index) => {
                    let section = &model.nav.sections()[index];
                    let chevron = if section.expanded() {
                        glyphs.expanded
                    } else {
                        glyphs.collapsed
                    };
                    let style = if section.is_active(page) {
                        style::accent()
                    } else {
                        style::text()
                    };
                    let name = section.name();
                    let pad = inner_width.saturating_sub(name.chars().count() + 3);
                    (format!(" {name}{:pad$} {chevron}", ""), style)
                }
                SidebarRow::Item { section, item } => {
                    let label = model.nav.item_label(section, item).unwrap_or_default();
                    let style = if crate::view::Page::for_label(label) == Some(page) {
                        style::accent().add_modifier(Modifier::BOLD)
                    } else {
                        style::muted()
                    };
                    (format!("     {label}"), style)
                }
            };
            let style = if model.focus == Focus::Sidebar && model.sidebar_cursor == i {
                style::cursor(base)
            } else {
                base
            };
            Line::styled(super::text::truncate(&text, inner_width), style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(style::border(model.focus == Focus::Sidebar));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), list_area);
}
