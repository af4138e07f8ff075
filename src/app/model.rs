use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::nav::{CategorySection, NavigationTree, SidebarRow};
use crate::ui::ContentTarget;
use crate::ui::viewport::Viewport;
use crate::view::{DetailTab, Page, ViewState};

/// Which pane receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Rail,
    #[default]
    Sidebar,
    Content,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::Rail => Self::Sidebar,
            Self::Sidebar => Self::Content,
            Self::Content => Self::Rail,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Rail => Self::Content,
            Self::Sidebar => Self::Rail,
            Self::Content => Self::Sidebar,
        }
    }
}

/// Entries of the icon rail on the far left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailItem {
    Search,
    Home,
    Foundation,
    Style,
    Components,
}

impl RailItem {
    pub const ALL: [Self; 5] = [
        Self::Search,
        Self::Home,
        Self::Foundation,
        Self::Style,
        Self::Components,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Home => "Home",
            Self::Foundation => "Foundation",
            Self::Style => "Style",
            Self::Components => "Components",
        }
    }

    /// Page opened by this entry. Only Home navigates.
    pub const fn target(self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Overview),
            Self::Search | Self::Foundation | Self::Style | Self::Components => None,
        }
    }
}

/// Everything the rendering surface needs to know about the view state.
///
/// Cursor and focus positions are excluded: they belong to the terminal
/// surface, not to the catalog session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub sections: Vec<CategorySection>,
    pub page: Page,
    pub detail_tab: Option<DetailTab>,
    pub show_all: BTreeMap<String, bool>,
}

/// The complete application state.
///
/// The catalog session state (`nav`, `view`) and the terminal surface state
/// (focus, cursors, scroll) live side by side; only `update` mutates either.
#[derive(Debug, Clone)]
pub struct Model {
    pub catalog: Catalog,
    pub nav: NavigationTree,
    pub view: ViewState,
    /// Pane receiving cursor keys
    pub focus: Focus,
    /// Selected index into [`RailItem::ALL`]
    pub rail_cursor: usize,
    /// Selected index into `nav.rows()`
    pub sidebar_cursor: usize,
    /// Selected index into the content pane's targets
    pub content_cursor: usize,
    /// Scroll position of the content pane
    pub viewport: Viewport,
    /// Terminal size in cells
    pub terminal_size: (u16, u16),
    pub help_visible: bool,
    pub help_scroll_offset: usize,
    /// Use ASCII glyphs instead of Unicode arrows and chevrons
    pub ascii: bool,
    /// Whether mouse capture is requested
    pub mouse_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    pub should_quit: bool,
}

impl Model {
    /// Create a model in the initial session state for a terminal of the given size.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self::with_parts(Catalog::builtin(), NavigationTree::builtin(), terminal_size)
    }

    /// Create a model over a specific catalog and sidebar tree.
    pub fn with_parts(catalog: Catalog, nav: NavigationTree, terminal_size: (u16, u16)) -> Self {
        let view = ViewState::new(&catalog);
        let mut model = Self {
            catalog,
            nav,
            view,
            focus: Focus::default(),
            rail_cursor: 1,
            sidebar_cursor: 0,
            content_cursor: 0,
            viewport: Viewport::new(terminal_size.0, terminal_size.1, 0),
            terminal_size,
            help_visible: false,
            help_scroll_offset: 0,
            ascii: false,
            mouse_enabled: true,
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
        };
        model.reflow_layout();
        model
    }

    pub const fn page(&self) -> Page {
        self.view.page()
    }

    /// Copy of the current view state for the rendering surface.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sections: self.nav.sections().to_vec(),
            page: self.view.page(),
            detail_tab: self.view.detail_tab(),
            show_all: self.view.show_all().flags().clone(),
        }
    }

    /// Sidebar row under the cursor.
    pub fn sidebar_row(&self) -> Option<SidebarRow> {
        self.nav.rows().get(self.sidebar_cursor).copied()
    }

    /// Width of the content pane in cells.
    pub fn content_width(&self) -> u16 {
        crate::ui::content_area(self.screen_area()).width
    }

    /// Focusable targets of the current page body, in cursor order.
    pub fn content_targets(&self) -> Vec<ContentTarget> {
        crate::ui::content_layout(self, self.content_width())
            .regions
            .into_iter()
            .map(|(target, _)| target)
            .collect()
    }

    pub(super) const fn screen_area(&self) -> ratatui::layout::Rect {
        ratatui::layout::Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// Recompute the content pane height and clamp every cursor.
    pub(super) fn reflow_layout(&mut self) {
        let area = crate::ui::content_area(self.screen_area());
        let layout = crate::ui::content_layout(self, area.width);
        self.viewport.resize(area.width, area.height);
        self.viewport.set_total_rows(layout.height);

        self.rail_cursor = self.rail_cursor.min(RailItem::ALL.len() - 1);
        self.sidebar_cursor = self
            .sidebar_cursor
            .min(self.nav.rows().len().saturating_sub(1));
        self.content_cursor = self
            .content_cursor
            .min(layout.regions.len().saturating_sub(1));
    }

    /// Scroll the content pane so the selected target is on screen.
    pub(super) fn reveal_content_cursor(&mut self) {
        let layout = crate::ui::content_layout(self, self.content_width());
        if let Some((_, rect)) = layout.regions.get(self.content_cursor) {
            self.viewport
                .reveal(rect.y as usize, rect.height as usize);
        }
    }

    /// Reset the content pane after the page body changed.
    pub(super) fn reset_content(&mut self) {
        self.content_cursor = 0;
        self.viewport.go_to_top();
        self.reflow_layout();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
