//! Copy and reference tables for component detail pages.

use super::PreviewId;
use crate::view::Page;

/// A named color token with its sRGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub role: &'static str,
    pub token: &'static str,
    pub rgb: (u8, u8, u8),
}

impl ColorToken {
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// Static documentation for one detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailContent {
    pub page: Page,
    pub title: &'static str,
    pub summary: &'static str,
    pub preview: PreviewId,
    /// Part name and what it does
    pub anatomy: &'static [(&'static str, &'static str)],
    pub colors: &'static [ColorToken],
    /// State name and its visual treatment
    pub states: &'static [(&'static str, &'static str)],
    /// Property and value
    pub measurements: &'static [(&'static str, &'static str)],
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

/// Documentation for `page`, or `None` for pages without authored content.
pub fn content_for(page: Page) -> Option<&'static DetailContent> {
    DETAILS.iter().find(|d| d.page == page)
}

const INDIGO_600: (u8, u8, u8) = (79, 70, 229);
const GRAY_500: (u8, u8, u8) = (107, 114, 128);
const GRAY_600: (u8, u8, u8) = (75, 85, 99);
const GRAY_200: (u8, u8, u8) = (229, 231, 235);
const GRAY_100: (u8, u8, u8) = (243, 244, 246);
const WHITE: (u8, u8, u8) = (255, 255, 255);

static DETAILS: &[DetailContent] = &[
    DetailContent {
        page: Page::NavigationDetail,
        title: "Navigation bar",
        summary: "The navigation bar gives access to the top-level destinations of a product \
                  and keeps account actions within reach.",
        preview: PreviewId::Nav,
        anatomy: &[
            ("Container", "Full-width bar pinned to the top of the page"),
            ("Menu items", "Text links to top-level destinations"),
            ("Active indicator", "Label color marking the current destination"),
            ("Action icons", "Notifications and account shortcuts"),
            ("Divider", "1px rule separating the bar from content"),
        ],
        colors: &[
            ColorToken {
                role: "Container",
                token: "white",
                rgb: WHITE,
            },
            ColorToken {
                role: "Menu label",
                token: "gray-600",
                rgb: GRAY_600,
            },
            ColorToken {
                role: "Active label",
                token: "indigo-600",
                rgb: INDIGO_600,
            },
            ColorToken {
                role: "Divider",
                token: "gray-200",
                rgb: GRAY_200,
            },
        ],
        states: &[
            ("Enabled", "gray-600 label"),
            ("Hover", "gray-100 background behind the item"),
            ("Active", "indigo-600 label"),
            ("Focused", "2px indigo focus ring"),
        ],
        measurements: &[
            ("Bar height", "56px"),
            ("Horizontal padding", "24px"),
            ("Item spacing", "16px"),
            ("Icon size", "20px"),
            ("Divider", "1px"),
        ],
        dos: &[
            "Keep menu labels to one or two words",
            "Order destinations by frequency of use",
            "Mark exactly one destination as active",
        ],
        donts: &[
            "Put more than five destinations in the bar",
            "Mix icons and text labels for the same level",
            "Use the bar for in-page actions",
        ],
    },
    DetailContent {
        page: Page::TabsDetail,
        title: "Tabs",
        summary: "Tabs organize related content into views at the same level of hierarchy \
                  and let people switch between them without leaving the page.",
        preview: PreviewId::Tabs,
        anatomy: &[
            ("Tab bar", "Horizontal row holding every tab"),
            ("Tab label", "Short name for each view"),
            ("Active indicator", "2px underline below the selected tab"),
            ("Divider", "Rule spanning the bar below all tabs"),
        ],
        colors: &[
            ColorToken {
                role: "Inactive label",
                token: "gray-500",
                rgb: GRAY_500,
            },
            ColorToken {
                role: "Active label",
                token: "indigo-600",
                rgb: INDIGO_600,
            },
            ColorToken {
                role: "Active indicator",
                token: "indigo-600",
                rgb: INDIGO_600,
            },
            ColorToken {
                role: "Hover surface",
                token: "gray-100",
                rgb: GRAY_100,
            },
        ],
        states: &[
            ("Enabled", "gray-500 label, no indicator"),
            ("Hover", "gray-100 surface"),
            ("Selected", "indigo-600 label and underline"),
            ("Disabled", "40% opacity, not focusable"),
        ],
        measurements: &[
            ("Tab height", "48px"),
            ("Label spacing", "24px"),
            ("Indicator", "2px"),
            ("Label size", "14px"),
        ],
        dos: &[
            "Use tabs for peer views of the same subject",
            "Keep the selected tab visible when the page scrolls",
            "Start every visit on the first tab",
        ],
        donts: &[
            "Nest tabs inside tabs",
            "Use tabs for sequential steps",
            "Wrap tab labels onto two lines",
        ],
    },
];
