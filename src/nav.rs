//! Sidebar navigation tree.
//!
//! The tree is built once from [`crate::catalog::SIDEBAR`]; afterwards only
//! the per-category `expanded` flags change.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::SIDEBAR;
use crate::view::Page;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("category `{0}` has no items")]
    EmptyCategory(String),
    #[error("category `{0}` appears more than once")]
    DuplicateCategory(String),
}

/// One sidebar category and its item labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    name: String,
    items: Vec<String>,
    expanded: bool,
}

impl CategorySection {
    pub fn new(name: impl Into<String>, items: Vec<String>, expanded: bool) -> Self {
        Self {
            name: name.into(),
            items,
            expanded,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub const fn expanded(&self) -> bool {
        self.expanded
    }

    /// Whether any item in this category opens `page`.
    pub fn is_active(&self, page: Page) -> bool {
        page.is_detail() && self.items.iter().any(|item| Page::for_label(item) == Some(page))
    }
}

/// A row of the flattened, currently visible sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// The "Component overview" link above the categories
    Overview,
    Category(usize),
    Item { section: usize, item: usize },
}

/// Ordered sidebar categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    sections: Vec<CategorySection>,
}

impl NavigationTree {
    /// Build a tree, rejecting empty categories and duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if a category has no items or a name repeats.
    pub fn new(sections: Vec<CategorySection>) -> Result<Self, NavError> {
        for (i, section) in sections.iter().enumerate() {
            if section.items.is_empty() {
                return Err(NavError::EmptyCategory(section.name.clone()));
            }
            if sections[..i].iter().any(|s| s.name == section.name) {
                return Err(NavError::DuplicateCategory(section.name.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// The tree for the compiled-in sidebar data.
    pub fn builtin() -> Self {
        Self {
            sections: builtin_sections(),
        }
    }

    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Flip `expanded` for the category at `index`.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.expanded = !section.expanded;
                true
            }
            None => false,
        }
    }

    /// Visible rows in display order: the overview link, then each category
    /// followed by its items when expanded.
    pub fn rows(&self) -> Vec<SidebarRow> {
        let mut rows = vec![SidebarRow::Overview];
        for (i, section) in self.sections.iter().enumerate() {
            rows.push(SidebarRow::Category(i));
            if section.expanded {
                rows.extend((0..section.items.len()).map(|item| SidebarRow::Item { section: i, item }));
            }
        }
        rows
    }

    /// Label of an item row, if the indices are valid.
    pub fn item_label(&self, section: usize, item: usize) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.items.get(item))
            .map(String::as_str)
    }
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_sections() -> Vec<CategorySection> {
    SIDEBAR
        .iter()
        .map(|&(name, items, expanded)| {
            CategorySection::new(
                name,
                items.iter().map(|item| (*item).to_string()).collect(),
                expanded,
            )
        })
        .collect()
}
