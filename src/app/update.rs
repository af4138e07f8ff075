use tracing::{debug, trace};

use crate::app::Model;
use crate::app::model::{Focus, RailItem};
use crate::nav::SidebarRow;
use crate::ui::ContentTarget;
use crate::view::{DetailTab, Page};

/// All possible events and actions in the application.
///
/// The first group are the catalog session transitions; the rest drive the
/// terminal surface (focus, cursors, scrolling, help).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Session
    /// Expand or collapse the sidebar category at an index
    ToggleCategory(usize),
    /// Show the component overview
    SelectOverview,
    /// Sidebar item clicked
    SelectItem(String),
    /// Overview card clicked
    SelectEntry(String),
    /// "View more" / "View less" for an overview category
    ToggleShowMore(String),
    /// Switch tabs on the shown detail page
    SetActiveTab(DetailTab),

    // Focus and cursors
    /// Move focus to the next pane
    FocusNext,
    /// Move focus to the previous pane
    FocusPrev,
    /// Move the focused pane's cursor up
    CursorUp,
    /// Move the focused pane's cursor down
    CursorDown,
    /// Activate whatever is under the focused pane's cursor
    Activate,
    /// Click on an icon rail entry
    ClickRail(usize),
    /// Click on a visible sidebar row
    ClickSidebar(usize),
    /// Click on a content target
    ClickContent(usize),

    // Scrolling
    /// Scroll content up by n lines
    ScrollUp(usize),
    /// Scroll content down by n lines
    ScrollDown(usize),
    /// Scroll content up one page
    PageUp,
    /// Scroll content down one page
    PageDown,

    // Help
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Scroll help overlay up
    HelpScrollUp,
    /// Scroll help overlay down
    HelpScrollDown,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Messages that name something unknown (an out-of-range index, an unmapped
/// label, a tab while no detail page is shown) leave the model unchanged.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::ToggleCategory(index) => {
            if model.nav.toggle(index) {
                debug!(index, "toggled sidebar category");
                model.reflow_layout();
            } else {
                trace!(index, "ignored toggle for unknown category");
            }
        }
        Message::SelectOverview => select_page(&mut model, Page::Overview),
        Message::SelectItem(label) | Message::SelectEntry(label) => {
            if let Some(page) = Page::for_label(&label) {
                select_page(&mut model, page);
            } else {
                trace!(%label, "no detail page for label");
            }
        }
        Message::ToggleShowMore(category) => {
            if model.view.toggle_show_more(&category) {
                debug!(%category, shown = model.view.show_all().is_shown(&category), "toggled show more");
                model.reflow_layout();
                model.reveal_content_cursor();
            } else {
                trace!(%category, "category is not truncated");
            }
        }
        Message::SetActiveTab(tab) => {
            if model.view.set_active_tab(tab) {
                debug!(%tab, "active tab changed");
                model.viewport.go_to_top();
                model.reflow_layout();
            } else {
                trace!(%tab, "no detail page to switch tabs on");
            }
        }

        Message::FocusNext => model.focus = model.focus.next(),
        Message::FocusPrev => model.focus = model.focus.prev(),
        Message::CursorUp => match model.focus {
            Focus::Rail => model.rail_cursor = model.rail_cursor.saturating_sub(1),
            Focus::Sidebar => model.sidebar_cursor = model.sidebar_cursor.saturating_sub(1),
            Focus::Content => {
                model.content_cursor = model.content_cursor.saturating_sub(1);
                model.reveal_content_cursor();
            }
        },
        Message::CursorDown => match model.focus {
            Focus::Rail => {
                model.rail_cursor = (model.rail_cursor + 1).min(RailItem::ALL.len() - 1);
            }
            Focus::Sidebar => {
                let max = model.nav.rows().len().saturating_sub(1);
                model.sidebar_cursor = (model.sidebar_cursor + 1).min(max);
            }
            Focus::Content => {
                let max = model.content_targets().len().saturating_sub(1);
                model.content_cursor = (model.content_cursor + 1).min(max);
                model.reveal_content_cursor();
            }
        },
        Message::Activate => {
            if let Some(next) = activation_message(&model) {
                return update(model, next);
            }
        }
        Message::ClickRail(index) => {
            if index < RailItem::ALL.len() {
                model.focus = Focus::Rail;
                model.rail_cursor = index;
                return update(model, Message::Activate);
            }
        }
        Message::ClickSidebar(row) => {
            if row < model.nav.rows().len() {
                model.focus = Focus::Sidebar;
                model.sidebar_cursor = row;
                return update(model, Message::Activate);
            }
        }
        Message::ClickContent(index) => {
            if index < model.content_targets().len() {
                model.focus = Focus::Content;
                model.content_cursor = index;
                return update(model, Message::Activate);
            }
        }

        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
            model.help_scroll_offset = 0;
        }
        Message::HideHelp => model.help_visible = false,
        Message::HelpScrollUp => {
            model.help_scroll_offset = model.help_scroll_offset.saturating_sub(1);
        }
        Message::HelpScrollDown => {
            model.help_scroll_offset = (model.help_scroll_offset + 1).min(crate::ui::help_line_count());
        }

        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.reflow_layout();
            model.reveal_content_cursor();
        }
        Message::Quit => model.should_quit = true,
    }
    model
}

fn select_page(model: &mut Model, page: Page) {
    if model.view.set_page(page) {
        debug!(?page, "page changed");
        model.reset_content();
    } else {
        trace!(?page, "page already shown");
    }
}

fn page_message(page: Page) -> Message {
    match page {
        Page::Overview => Message::SelectOverview,
        Page::NavigationDetail | Page::TabsDetail => Message::SelectItem(page.title().to_string()),
    }
}

/// The session message behind the focused cursor, if it does anything.
fn activation_message(model: &Model) -> Option<Message> {
    match model.focus {
        Focus::Rail => RailItem::ALL
            .get(model.rail_cursor)
            .and_then(|item| item.target())
            .map(page_message),
        Focus::Sidebar => match model.sidebar_row()? {
            SidebarRow::Overview => Some(Message::SelectOverview),
            SidebarRow::Category(index) => Some(Message::ToggleCategory(index)),
            SidebarRow::Item { section, item } => model
                .nav
                .item_label(section, item)
                .map(|label| Message::SelectItem(label.to_string())),
        },
        Focus::Content => model
            .content_targets()
            .get(model.content_cursor)
            .map(|target| target_message(*target)),
    }
}

fn target_message(target: ContentTarget) -> Message {
    match target {
        ContentTarget::Entry { name, .. } => Message::SelectEntry(name.to_string()),
        ContentTarget::ShowMore { category } => Message::ToggleShowMore(category.to_string()),
        ContentTarget::Back => Message::SelectOverview,
        ContentTarget::Tab(tab) => Message::SetActiveTab(tab),
    }
}
