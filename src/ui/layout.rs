//! Geometry shared by rendering and mouse hit-testing.
//!
//! Content layouts are computed in pane-local coordinates (x from 0, y from
//! the top of the scrollable page body). The renderer draws the same elements
//! the input handler hit-tests, so a click always lands on what is drawn.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use super::{detail, text};
use crate::app::Model;
use crate::catalog::detail::{DetailContent, content_for};
use crate::catalog::{CatalogEntry, Catalog};
use crate::view::{DetailTab, Page, ShowAll};

pub const RAIL_WIDTH: u16 = 14;
pub const SIDEBAR_WIDTH: u16 = 24;
pub const CONTENT_PADDING_X: u16 = 2;

pub const HERO_HEIGHT: u16 = 7;
pub const CARD_HEIGHT: u16 = 8;
pub const CARD_GAP: u16 = 2;

/// Regions of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub rail: Rect,
    pub sidebar: Rect,
    /// Scrollable page body, inside its padding
    pub content: Rect,
    pub status: Rect,
}

pub fn shell_areas(area: Rect) -> ShellAreas {
    let [main, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let [rail, sidebar, content] = Layout::horizontal([
        Constraint::Length(RAIL_WIDTH),
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(1),
    ])
    .areas(main);
    let content = Rect {
        x: content.x + CONTENT_PADDING_X.min(content.width),
        y: content.y + 1_u16.min(content.height),
        width: content.width.saturating_sub(CONTENT_PADDING_X + 1),
        height: content.height.saturating_sub(1),
    };
    ShellAreas {
        rail,
        sidebar,
        content,
        status,
    }
}

pub fn content_area(area: Rect) -> Rect {
    shell_areas(area).content
}

/// Screen row of icon rail entry `index`.
pub const fn rail_item_row(rail: Rect, index: usize) -> u16 {
    #[allow(clippy::cast_possible_truncation)]
    let offset = 1 + index as u16 * 2;
    rail.y + offset
}

/// Icon rail entry drawn at screen row `row`.
pub fn rail_item_at(rail: Rect, row: u16) -> Option<usize> {
    (0..crate::app::RailItem::ALL.len()).find(|&i| rail_item_row(rail, i) == row)
}

/// First visible sidebar row so the cursor stays on screen.
pub const fn sidebar_scroll_start(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || cursor < visible_rows {
        0
    } else {
        cursor + 1 - visible_rows
    }
}

/// Sidebar rows start one line below the top of the pane.
pub const fn sidebar_visible_rows(sidebar: Rect) -> usize {
    sidebar.height.saturating_sub(1) as usize
}

/// Index into `nav.rows()` drawn at screen row `row`.
pub fn sidebar_row_at(model: &Model, sidebar: Rect, row: u16) -> Option<usize> {
    if row <= sidebar.y || row >= sidebar.y + sidebar.height {
        return None;
    }
    let start = sidebar_scroll_start(model.sidebar_cursor, sidebar_visible_rows(sidebar));
    let idx = start + (row - sidebar.y - 1) as usize;
    (idx < model.nav.rows().len()).then_some(idx)
}

/// Something in the page body that can be focused and activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTarget {
    Entry {
        category: &'static str,
        name: &'static str,
    },
    ShowMore {
        category: &'static str,
    },
    Back,
    Tab(DetailTab),
}

/// A drawable piece of the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Hero,
    Heading(&'static str),
    Card {
        category: &'static str,
        entry: &'static CatalogEntry,
    },
    ShowMore {
        category: &'static str,
        hidden: usize,
        shown: bool,
    },
    Footer,
    Back,
    Header(&'static DetailContent),
    Tab(DetailTab),
    TabRule,
    Body(&'static DetailContent, DetailTab),
    /// Detail page without authored content
    Missing,
}

impl Element {
    pub const fn target(self) -> Option<ContentTarget> {
        match self {
            Self::Card { category, entry } => Some(ContentTarget::Entry {
                category,
                name: entry.name,
            }),
            Self::ShowMore { category, .. } => Some(ContentTarget::ShowMore { category }),
            Self::Back => Some(ContentTarget::Back),
            Self::Tab(tab) => Some(ContentTarget::Tab(tab)),
            Self::Hero
            | Self::Heading(_)
            | Self::Footer
            | Self::Header(_)
            | Self::TabRule
            | Self::Body(..)
            | Self::Missing => None,
        }
    }
}

/// Placed elements of the page body plus its total height.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentLayout {
    pub height: usize,
    pub elements: Vec<(Element, Rect)>,
    /// Focusable elements in cursor order
    pub regions: Vec<(ContentTarget, Rect)>,
}

impl ContentLayout {
    fn place(&mut self, element: Element, rect: Rect) {
        if let Some(target) = element.target() {
            self.regions.push((target, rect));
        }
        self.height = self.height.max((rect.y + rect.height) as usize);
        self.elements.push((element, rect));
    }

    /// Index of the target containing the pane-local point.
    pub fn target_at(&self, x: u16, y: u16) -> Option<usize> {
        self.regions.iter().position(|(_, r)| {
            x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
        })
    }
}

/// Lay out the current page body for a pane `width` cells wide.
pub fn content_layout(model: &Model, width: u16) -> ContentLayout {
    match model.page() {
        Page::Overview => overview_layout(&model.catalog, model.view.show_all(), width),
        page => detail_layout(page, model.view.detail_tab().unwrap_or_default(), width, model.ascii),
    }
}

/// Cards per row for a pane width.
pub const fn grid_columns(width: u16) -> u16 {
    if width >= 66 {
        3
    } else if width >= 40 {
        2
    } else {
        1
    }
}

pub fn overview_layout(catalog: &Catalog, show_all: &ShowAll, width: u16) -> ContentLayout {
    let mut layout = ContentLayout::default();
    layout.place(Element::Hero, Rect::new(0, 0, width, HERO_HEIGHT));
    let mut y = HERO_HEIGHT + 1;

    let columns = grid_columns(width);
    let card_width = width.saturating_sub(CARD_GAP * (columns - 1)) / columns;

    for category in catalog.categories() {
        layout.place(Element::Heading(category.name), Rect::new(0, y, width, 1));
        y += 2;

        let shown = show_all.is_shown(category.name);
        let entries = category.visible_entries(shown);
        for (i, entry) in entries.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let i = i as u16;
            let col = i % columns;
            let row = i / columns;
            let rect = Rect::new(
                col * (card_width + CARD_GAP),
                y + row * (CARD_HEIGHT + 1),
                card_width,
                CARD_HEIGHT,
            );
            layout.place(
                Element::Card {
                    category: category.name,
                    entry,
                },
                rect,
            );
        }
        #[allow(clippy::cast_possible_truncation)]
        let rows = entries.len().div_ceil(columns as usize) as u16;
        y += rows * (CARD_HEIGHT + 1);

        if category.is_truncated() {
            let label = show_more_label(category.hidden_count(), shown);
            #[allow(clippy::cast_possible_truncation)]
            let label_width = (label.width() as u16).min(width);
            layout.place(
                Element::ShowMore {
                    category: category.name,
                    hidden: category.hidden_count(),
                    shown,
                },
                Rect::new(0, y, label_width, 1),
            );
            y += 2;
        }
        y += 1;
    }

    layout.place(Element::Footer, Rect::new(0, y, width, 2));
    layout
}

pub fn show_more_label(hidden: usize, shown: bool) -> String {
    if shown {
        "View less".to_string()
    } else {
        format!("View more ({hidden})")
    }
}

pub fn back_label(ascii: bool) -> String {
    format!("{} Back to overview", super::style::glyphs(ascii).back)
}

/// Width of a tab in the tab bar.
pub fn tab_width(tab: DetailTab) -> u16 {
    #[allow(clippy::cast_possible_truncation)]
    let label = tab.label().width() as u16;
    label + 2
}

pub fn detail_layout(page: Page, tab: DetailTab, width: u16, ascii: bool) -> ContentLayout {
    let mut layout = ContentLayout::default();
    #[allow(clippy::cast_possible_truncation)]
    let back_width = (back_label(ascii).width() as u16).min(width);
    layout.place(Element::Back, Rect::new(0, 0, back_width, 1));

    let Some(content) = content_for(page) else {
        layout.place(Element::Missing, Rect::new(0, 2, width, 1));
        return layout;
    };

    #[allow(clippy::cast_possible_truncation)]
    let header_height = 2 + text::wrap(content.summary, width as usize).len() as u16;
    layout.place(Element::Header(content), Rect::new(0, 2, width, header_height));
    let mut y = 2 + header_height + 1;

    // Rule first so the active tab's underline is drawn over it.
    layout.place(Element::TabRule, Rect::new(0, y + 1, width, 1));
    let mut x = 0;
    for candidate in DetailTab::ALL {
        let w = tab_width(candidate);
        layout.place(Element::Tab(candidate), Rect::new(x, y, w, 1));
        x += w + 1;
    }
    y += 3;

    #[allow(clippy::cast_possible_truncation)]
    let body_height = detail::body_lines(content, tab, ascii).len() as u16;
    layout.place(Element::Body(content, tab), Rect::new(0, y, width, body_height));
    layout.height += 1;
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_areas_partition_screen() {
        let areas = shell_areas(Rect::new(0, 0, 120, 40));
        assert_eq!(areas.rail, Rect::new(0, 0, RAIL_WIDTH, 39));
        assert_eq!(areas.sidebar, Rect::new(RAIL_WIDTH, 0, SIDEBAR_WIDTH, 39));
        assert_eq!(areas.status, Rect::new(0, 39, 120, 1));
        assert_eq!(areas.content.x, RAIL_WIDTH + SIDEBAR_WIDTH + CONTENT_PADDING_X);
        assert_eq!(areas.content.y, 1);
        assert_eq!(areas.content.height, 38);
    }

    #[test]
    fn test_rail_rows_round_trip() {
        let rail = Rect::new(0, 0, RAIL_WIDTH, 30);
        for i in 0..crate::app::RailItem::ALL.len() {
            assert_eq!(rail_item_at(rail, rail_item_row(rail, i)), Some(i));
        }
        assert_eq!(rail_item_at(rail, 0), None);
        assert_eq!(rail_item_at(rail, 2), None);
    }

    #[test]
    fn test_sidebar_scroll_keeps_cursor_visible() {
        assert_eq!(sidebar_scroll_start(0, 10), 0);
        assert_eq!(sidebar_scroll_start(9, 10), 0);
        assert_eq!(sidebar_scroll_start(10, 10), 1);
        assert_eq!(sidebar_scroll_start(15, 10), 6);
    }

    #[test]
    fn test_overview_targets_follow_truncation() {
        let catalog = Catalog::builtin();
        let mut show_all = ShowAll::for_catalog(&catalog);
        let collapsed = overview_layout(&catalog, &show_all, 90);
        // 2 + 3 + 3 + 3 + 3 + 2 cards, plus two show-more controls
        assert_eq!(collapsed.regions.len(), 16 + 2);

        show_all.toggle("Form");
        let expanded = overview_layout(&catalog, &show_all, 90);
        assert_eq!(expanded.regions.len(), collapsed.regions.len() + 1);
        assert!(expanded.height > collapsed.height);
    }

    #[test]
    fn test_overview_regions_do_not_overlap() {
        let catalog = Catalog::builtin();
        let layout = overview_layout(&catalog, &ShowAll::for_catalog(&catalog), 90);
        for (i, (_, a)) in layout.regions.iter().enumerate() {
            for (_, b) in &layout.regions[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_target_at_finds_card() {
        let catalog = Catalog::builtin();
        let layout = overview_layout(&catalog, &ShowAll::for_catalog(&catalog), 90);
        let (target, rect) = layout.regions[0];
        assert_eq!(
            target,
            ContentTarget::Entry {
                category: "Disclosure",
                name: "Tabs"
            }
        );
        assert_eq!(layout.target_at(rect.x + 1, rect.y + 1), Some(0));
        assert_eq!(layout.target_at(0, 0), None);
    }

    #[test]
    fn test_grid_columns_by_width() {
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(50), 2);
        assert_eq!(grid_columns(20), 1);
    }

    #[test]
    fn test_detail_layout_orders_back_then_tabs() {
        let layout = detail_layout(Page::TabsDetail, DetailTab::Overview, 80, false);
        let targets: Vec<_> = layout.regions.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            targets,
            vec![
                ContentTarget::Back,
                ContentTarget::Tab(DetailTab::Overview),
                ContentTarget::Tab(DetailTab::Guidelines),
                ContentTarget::Tab(DetailTab::Usage),
            ]
        );
    }
}
