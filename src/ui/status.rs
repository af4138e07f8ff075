use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model};
use crate::view::Page;

use super::style;

/// Breadcrumb for the current page, e.g. `Components › Disclosure › Tabs › Usage`.
pub fn breadcrumb(model: &Model) -> String {
    let sep = format!(" {} ", style::glyphs(model.ascii).separator);
    let page = model.page();
    let mut parts = vec!["Components".to_string()];
    if page == Page::Overview {
        parts.push(page.title().to_string());
    } else {
        if let Some(section) = model.nav.sections().iter().find(|s| s.is_active(page)) {
            parts.push(section.name().to_string());
        }
        parts.push(page.title().to_string());
        if let Some(tab) = model.view.detail_tab() {
            parts.push(tab.label().to_string());
        }
    }
    parts.join(&sep)
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let focus = match model.focus {
        Focus::Rail => "rail",
        Focus::Sidebar => "sidebar",
        Focus::Content => "content",
    };
    let percent = model.viewport.scroll_percent();
    let status = format!(
        " {}  [{}%]  focus:{}  Tab:switch ?:help q:quit",
        breadcrumb(model),
        percent,
        focus
    );
    frame.render_widget(Paragraph::new(status).style(style::status_bar()), area);
}
