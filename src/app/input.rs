use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, Focus, Message, Model};
use crate::ui::layout::{rail_item_at, shell_areas, sidebar_row_at};
use crate::view::DetailTab;

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) if model.mouse_enabled => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return match mouse.kind {
                MouseEventKind::ScrollDown => Some(Message::HelpScrollDown),
                MouseEventKind::ScrollUp => Some(Message::HelpScrollUp),
                MouseEventKind::Up(MouseButton::Left) => Some(Message::HideHelp),
                _ => None,
            };
        }

        let areas = shell_areas(model.screen_area());
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                if point_in_rect(col, row, areas.rail) {
                    return rail_item_at(areas.rail, row).map(Message::ClickRail);
                }
                if point_in_rect(col, row, areas.sidebar) {
                    return sidebar_row_at(model, areas.sidebar, row).map(Message::ClickSidebar);
                }
                if point_in_rect(col, row, areas.content) {
                    return content_target_at(model, areas.content, col, row)
                        .map(Message::ClickContent);
                }
                None
            }
            MouseEventKind::ScrollDown if point_in_rect(col, row, areas.content) => {
                model
                    .viewport
                    .can_scroll_down()
                    .then_some(Message::ScrollDown(3))
            }
            MouseEventKind::ScrollUp if point_in_rect(col, row, areas.content) => {
                model.viewport.can_scroll_up().then_some(Message::ScrollUp(3))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::HelpScrollDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::HelpScrollUp),
                _ => Some(Message::HideHelp),
            };
        }

        let on_detail = model.page().is_detail();
        match key.code {
            // Quit
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Focus and cursors
            KeyCode::Tab => Some(Message::FocusNext),
            KeyCode::BackTab => Some(Message::FocusPrev),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::CursorUp),
            KeyCode::Char('l') | KeyCode::Right if model.focus == Focus::Content => {
                Some(Message::CursorDown)
            }
            KeyCode::Char('h') | KeyCode::Left if model.focus == Focus::Content => {
                Some(Message::CursorUp)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),

            // Pages
            KeyCode::Char('H') => Some(Message::SelectOverview),
            KeyCode::Esc | KeyCode::Backspace if on_detail => Some(Message::SelectOverview),
            KeyCode::Char(c @ '1'..='3') if on_detail => {
                let index = (c as usize) - ('1' as usize);
                DetailTab::ALL.get(index).copied().map(Message::SetActiveTab)
            }

            // Scrolling
            KeyCode::PageDown => model.viewport.can_scroll_down().then_some(Message::PageDown),
            KeyCode::PageUp => model.viewport.can_scroll_up().then_some(Message::PageUp),

            _ => None,
        }
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Content target under a screen cell, accounting for the scroll offset.
fn content_target_at(model: &Model, content: Rect, col: u16, row: u16) -> Option<usize> {
    let body_row = model.viewport.offset() + (row - content.y) as usize;
    let y = u16::try_from(body_row).ok()?;
    crate::ui::content_layout(model, content.width).target_at(col - content.x, y)
}
