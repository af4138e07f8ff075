//! Scrollable page body.
//!
//! The whole body is drawn into an off-screen buffer as tall as its layout,
//! then the rows under the viewport are copied into the frame.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::layout::{Element, content_layout};
use super::{detail, overview};
use crate::app::{Focus, Model};

pub(super) fn render_content(model: &Model, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let layout = content_layout(model, area.width);
    let height = u16::try_from(layout.height).unwrap_or(u16::MAX);
    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, height));

    let cursor = (model.focus == Focus::Content).then_some(model.content_cursor);
    let active_tab = model.view.detail_tab();
    let mut target_idx = 0;
    for &(element, rect) in &layout.elements {
        let selected = if element.target().is_some() {
            let selected = cursor == Some(target_idx);
            target_idx += 1;
            selected
        } else {
            false
        };
        draw_element(&mut scratch, element, rect, selected, active_tab, model.ascii);
    }

    let offset = u16::try_from(model.viewport.offset()).unwrap_or(u16::MAX);
    let buf = frame.buffer_mut();
    for dy in 0..area.height {
        let Some(src_y) = offset.checked_add(dy) else {
            break;
        };
        if src_y >= height {
            break;
        }
        for dx in 0..area.width {
            if let Some(cell) = scratch.cell((dx, src_y))
                && let Some(dst) = buf.cell_mut((area.x + dx, area.y + dy))
            {
                *dst = cell.clone();
            }
        }
    }
}

fn draw_element(
    buf: &mut Buffer,
    element: Element,
    rect: Rect,
    selected: bool,
    active_tab: Option<crate::view::DetailTab>,
    ascii: bool,
) {
    match element {
        Element::Hero => overview::render_hero(buf, rect),
        Element::Heading(name) => overview::render_heading(buf, rect, name),
        Element::Card { entry, .. } => overview::render_card(buf, rect, entry, selected),
        Element::ShowMore { hidden, shown, .. } => {
            overview::render_show_more(buf, rect, hidden, shown, selected);
        }
        Element::Footer => overview::render_footer(buf, rect),
        Element::Back => detail::render_back(buf, rect, ascii, selected),
        Element::Header(content) => detail::render_header(buf, rect, content),
        Element::Tab(tab) => {
            detail::render_tab(buf, rect, tab, active_tab == Some(tab), selected);
        }
        Element::TabRule => detail::render_tab_rule(buf, rect),
        Element::Body(content, tab) => detail::render_body(buf, rect, content, tab, ascii),
        Element::Missing => detail::render_missing(buf, rect),
    }
}
