//! Page and detail-tab selection plus overview "show all" flags.
//!
//! [`ViewState`] is the part of the session state that decides which page
//! body is rendered. It never fails: selections that name nothing known are
//! ignored and reported to the caller as `false`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogCategory};

/// The top-level page being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Overview,
    NavigationDetail,
    TabsDetail,
}

/// Labels (compared case-insensitively) that open a detail page.
///
/// Shared by sidebar items and overview cards; anything not listed is inert.
const DETAIL_PAGES: &[(&str, Page)] = &[
    ("navigation", Page::NavigationDetail),
    ("navigation bar", Page::NavigationDetail),
    ("tabs", Page::TabsDetail),
];

impl Page {
    pub const DETAILS: [Self; 2] = [Self::NavigationDetail, Self::TabsDetail];

    pub const fn is_detail(self) -> bool {
        !matches!(self, Self::Overview)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Component overview",
            Self::NavigationDetail => "Navigation bar",
            Self::TabsDetail => "Tabs",
        }
    }

    /// Resolve a sidebar item or catalog entry label to its detail page.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        DETAIL_PAGES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(label))
            .map(|&(_, page)| page)
    }
}

/// Tabs shown on every detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Overview,
    Guidelines,
    Usage,
}

impl DetailTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Guidelines, Self::Usage];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Guidelines => "Guidelines",
            Self::Usage => "Usage",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown detail tab `{0}` (expected overview, guidelines, or usage)")]
pub struct ParseTabError(String);

impl FromStr for DetailTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// Per-category "show all" flags for the truncation set.
///
/// Only categories present at construction can ever be toggled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowAll {
    flags: BTreeMap<String, bool>,
}

impl ShowAll {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            flags: catalog
                .truncation_set()
                .map(|name| (name.to_string(), false))
                .collect(),
        }
    }

    pub fn is_shown(&self, category: &str) -> bool {
        self.flags.get(category).copied().unwrap_or(false)
    }

    /// Flip the flag for `category`. Returns `false` outside the truncation set.
    pub fn toggle(&mut self, category: &str) -> bool {
        match self.flags.get_mut(category) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Number of grid entries shown for `category`.
    pub fn visible_count(&self, category: &CatalogCategory) -> usize {
        category.visible_entries(self.is_shown(category.name)).len()
    }

    pub const fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }
}

/// Current page, active detail tab, and overview truncation flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    page: Page,
    detail_tab: DetailTab,
    show_all: ShowAll,
}

impl ViewState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            page: Page::Overview,
            detail_tab: DetailTab::Overview,
            show_all: ShowAll::for_catalog(catalog),
        }
    }

    pub const fn page(&self) -> Page {
        self.page
    }

    /// Active tab of the shown detail page, or `None` on the overview.
    pub const fn detail_tab(&self) -> Option<DetailTab> {
        if self.page.is_detail() {
            Some(self.detail_tab)
        } else {
            None
        }
    }

    pub const fn show_all(&self) -> &ShowAll {
        &self.show_all
    }

    /// Switch pages. Entering a different page starts its tabs at Overview.
    ///
    /// Returns whether the page changed.
    pub fn set_page(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        self.detail_tab = DetailTab::Overview;
        true
    }

    /// Select a tab on the shown detail page. No-op on the overview.
    pub fn set_active_tab(&mut self, tab: DetailTab) -> bool {
        if !self.page.is_detail() {
            return false;
        }
        self.detail_tab = tab;
        true
    }

    pub fn toggle_show_more(&mut self, category: &str) -> bool {
        self.show_all.toggle(category)
    }
}
