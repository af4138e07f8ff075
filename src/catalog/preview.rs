//! Preview identifiers.
//!
//! Every catalog entry names the thumbnail it shows. Identifiers are a closed
//! enum; string keys are only accepted at the edge through
//! [`PreviewId::from_key`], and rendering (see `ui::preview`) is total.

/// Identifies one preview thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewId {
    Tabs,
    Nav,
    Alert,
    Progress,
    Skeleton,
    Menu,
    Tooltip,
    Modal,
    Card,
    Chip,
    Table,
    Badge,
    Checkbox,
    Button,
    Input,
    Switch,
    Heatmap,
    PieChart,
}

impl PreviewId {
    pub const ALL: [Self; 18] = [
        Self::Tabs,
        Self::Nav,
        Self::Alert,
        Self::Progress,
        Self::Skeleton,
        Self::Menu,
        Self::Tooltip,
        Self::Modal,
        Self::Card,
        Self::Chip,
        Self::Table,
        Self::Badge,
        Self::Checkbox,
        Self::Button,
        Self::Input,
        Self::Switch,
        Self::Heatmap,
        Self::PieChart,
    ];

    /// Stable string key for this preview.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Nav => "nav",
            Self::Alert => "alert",
            Self::Progress => "progress",
            Self::Skeleton => "skeleton",
            Self::Menu => "menu",
            Self::Tooltip => "tooltip",
            Self::Modal => "modal",
            Self::Card => "card",
            Self::Chip => "chip",
            Self::Table => "table",
            Self::Badge => "badge",
            Self::Checkbox => "checkbox",
            Self::Button => "button",
            Self::Input => "input",
            Self::Switch => "switch",
            Self::Heatmap => "heatmap",
            Self::PieChart => "piechart",
        }
    }

    /// Look up a preview by key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}
