//! Static design-system content.
//!
//! - [`Catalog`]: component entries grouped by category for the overview grid
//! - [`preview`]: small visual fragments keyed by [`PreviewId`]
//! - [`detail`]: copy, color, state, and measurement tables for detail pages
//! - [`SIDEBAR`]: seed data for the navigation sidebar

pub mod detail;
pub mod preview;

pub use preview::PreviewId;

/// Categories with more entries than this are truncated on the overview grid.
pub const TRUNCATE_AT: usize = 3;

/// One documented component reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub preview: PreviewId,
}

/// A named group of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCategory {
    pub name: &'static str,
    pub entries: &'static [CatalogEntry],
}

impl CatalogCategory {
    /// Whether the overview grid limits this category to [`TRUNCATE_AT`] entries.
    pub const fn is_truncated(&self) -> bool {
        self.entries.len() > TRUNCATE_AT
    }

    /// Entries shown on the grid given the category's "show all" flag.
    pub fn visible_entries(&self, show_all: bool) -> &'static [CatalogEntry] {
        if self.is_truncated() && !show_all {
            &self.entries[..TRUNCATE_AT]
        } else {
            self.entries
        }
    }

    /// Entries hidden behind the "View more" control.
    pub const fn hidden_count(&self) -> usize {
        self.entries.len().saturating_sub(TRUNCATE_AT)
    }
}

/// Immutable catalog, built once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    categories: &'static [CatalogCategory],
}

impl Catalog {
    /// Build a catalog over a static category list.
    pub const fn new(categories: &'static [CatalogCategory]) -> Self {
        Self { categories }
    }

    /// The compiled-in Cochl component catalog.
    pub const fn builtin() -> Self {
        Self::new(CATEGORIES)
    }

    pub const fn categories(&self) -> &'static [CatalogCategory] {
        self.categories
    }

    pub fn category(&self, name: &str) -> Option<&'static CatalogCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Names of the categories subject to grid truncation.
    pub fn truncation_set(&self) -> impl Iterator<Item = &'static str> {
        self.categories
            .iter()
            .filter(|c| c.is_truncated())
            .map(|c| c.name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn entry(name: &'static str, description: &'static str, preview: PreviewId) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        preview,
    }
}

static CATEGORIES: &[CatalogCategory] = &[
    CatalogCategory {
        name: "Disclosure",
        entries: &[
            entry("Tabs", "Categorizing items", PreviewId::Tabs),
            entry("Navigation bar", "Menu types for navigation", PreviewId::Nav),
        ],
    },
    CatalogCategory {
        name: "Feedback",
        entries: &[
            entry("Alert", "Alert modals", PreviewId::Alert),
            entry("Progress", "Loading styles", PreviewId::Progress),
            entry("Skeleton", "Content placeholders", PreviewId::Skeleton),
        ],
    },
    CatalogCategory {
        name: "Overlay",
        entries: &[
            entry("Menu", "Menu modals", PreviewId::Menu),
            entry("Tooltip", "Contextual hints", PreviewId::Tooltip),
            entry("Modal", "Modal dialogs", PreviewId::Modal),
        ],
    },
    CatalogCategory {
        name: "Data Display",
        entries: &[
            entry("Card", "Wrapper component", PreviewId::Card),
            entry("Chip", "Compact tags", PreviewId::Chip),
            entry("Table", "Data tables", PreviewId::Table),
            entry("Badge", "Status indicators", PreviewId::Badge),
        ],
    },
    CatalogCategory {
        name: "Form",
        entries: &[
            entry("Checkbox", "Multiple selection", PreviewId::Checkbox),
            entry("Button", "Button styles", PreviewId::Button),
            entry("Input Field", "Text input", PreviewId::Input),
            entry("Switch", "Binary settings", PreviewId::Switch),
        ],
    },
    CatalogCategory {
        name: "Analytics",
        entries: &[
            entry("Heatmap", "Visual data", PreviewId::Heatmap),
            entry("PieChart", "Proportional data", PreviewId::PieChart),
        ],
    },
];

/// Seed for one sidebar category: name, item labels, initially expanded.
pub type SidebarSeed = (&'static str, &'static [&'static str], bool);

/// Sidebar categories in display order.
pub static SIDEBAR: &[SidebarSeed] = &[
    ("Disclosure", &["Navigation", "Tabs"], true),
    ("Feedback", &["Alert", "Progress", "Skeleton"], false),
    ("Overlay", &["Menu", "Tooltip", "Modal"], false),
    ("Data Display", &["Card", "Chip", "Table"], false),
    ("Form", &["Checkbox", "Button", "Input Field"], false),
    ("Analytics", &["Heatmap", "PieChart"], false),
];
