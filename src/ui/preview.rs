//! Preview thumbnails for catalog cards.
//!
//! Rendering is a total function over [`PreviewId`]; string keys that do not
//! name a preview get a blank placeholder.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::style::{
    BLUE_500, BLUE_700, GRAY_300, INDIGO_100, INDIGO_200, INDIGO_300, INDIGO_400, INDIGO_500,
    INDIGO_600, RED_500, RED_700, TEAL_500, muted, text,
};
use crate::catalog::PreviewId;

/// Rows available to a preview inside a card.
pub const PREVIEW_HEIGHT: u16 = 4;

/// Render the thumbnail for a preview key.
pub fn render_key(key: &str) -> Vec<Line<'static>> {
    PreviewId::from_key(key).map_or_else(placeholder, render)
}

/// Blank fragment shown when there is nothing to preview.
pub fn placeholder() -> Vec<Line<'static>> {
    vec![Line::raw(""); PREVIEW_HEIGHT as usize]
}

/// Render a preview thumbnail (at most [`PREVIEW_HEIGHT`] lines).
pub fn render(id: PreviewId) -> Vec<Line<'static>> {
    let accent = Style::default().fg(INDIGO_600);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match id {
        PreviewId::Tabs => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("Upload  Overview  ", muted()),
                Span::styled("Analytics", accent),
            ]),
            Line::from(vec![
                Span::raw("                  "),
                Span::styled("\u{2594}".repeat(9), accent),
            ]),
        ],
        PreviewId::Nav => vec![
            Line::raw(""),
            Line::styled("Projects  Usage  Billing  \u{25cb}", text()),
            Line::styled("\u{2500}".repeat(28), Style::default().fg(GRAY_300)),
        ],
        PreviewId::Alert => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(BLUE_500)),
                Span::styled("Key reset", Style::default().fg(BLUE_700)),
            ]),
            Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(RED_500)),
                Span::styled("Error    ", Style::default().fg(RED_700)),
            ]),
        ],
        PreviewId::Progress => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("\u{2501}".repeat(15), accent),
                Span::styled("\u{2501}".repeat(5), Style::default().fg(GRAY_300)),
            ]),
            Line::styled("\u{25dc}", accent),
        ],
        PreviewId::Skeleton => vec![
            Line::styled("\u{2588}".repeat(18), Style::default().fg(GRAY_300)),
            Line::styled(format!("{:<18}", "\u{2588}".repeat(14)), Style::default().fg(GRAY_300)),
            Line::styled(format!("{:<18}", "\u{2588}".repeat(9)), Style::default().fg(GRAY_300)),
        ],
        PreviewId::Menu => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("Notifications  ", bold),
                Span::styled("Mark read", Style::default().fg(INDIGO_500)),
            ]),
            Line::styled("\u{2022} New member joined     ", muted()),
        ],
        PreviewId::Tooltip => vec![
            Line::styled(" Copy to clipboard ", Style::default().bg(Color::Black).fg(Color::White)),
            Line::styled("\u{25bc}", Style::default().fg(Color::Black)),
            Line::styled("[ Copy ]", text()),
        ],
        PreviewId::Modal => vec![
            Line::styled("Add member        ", bold),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" Cancel ", text().add_modifier(Modifier::UNDERLINED)),
                Span::raw("  "),
                Span::styled("  Add   ", Style::default().bg(INDIGO_500).fg(Color::White)),
            ]),
        ],
        PreviewId::Card => vec![
            Line::styled("\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}", Style::default().fg(INDIGO_100)),
            Line::styled(" Cloud API ", accent),
            Line::styled(" Project   ", bold),
            Line::styled("\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}", Style::default().fg(INDIGO_100)),
        ],
        PreviewId::Chip => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled(" Sound ", Style::default().bg(INDIGO_500).fg(Color::White)),
                Span::raw(" "),
                Span::styled(" Speech ", Style::default().bg(INDIGO_100).fg(INDIGO_600)),
                Span::raw(" "),
                Span::styled(" Music ", Style::default().bg(INDIGO_100).fg(INDIGO_600)),
            ]),
        ],
        PreviewId::Table => vec![
            Line::styled("Date   Tag      Type", muted()),
            Line::styled("\u{2500}".repeat(20), Style::default().fg(GRAY_300)),
            Line::from(vec![
                Span::styled("12.29  ", text()),
                Span::styled("Whistle  ", Style::default().fg(INDIGO_500)),
                Span::styled("mp3 ", muted()),
            ]),
        ],
        PreviewId::Badge => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled(" Active ", Style::default().bg(TEAL_500).fg(Color::White)),
                Span::raw("  "),
                Span::styled(" Paused ", Style::default().bg(GRAY_300).fg(Color::Black)),
                Span::raw("  "),
                Span::styled(" 3 ", Style::default().bg(RED_500).fg(Color::White)),
            ]),
        ],
        PreviewId::Checkbox => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("[\u{2713}] ", accent),
                Span::styled("Notify me    ", text()),
            ]),
            Line::from(vec![
                Span::styled("[ ] ", muted()),
                Span::styled("Weekly report", text()),
            ]),
        ],
        PreviewId::Button => vec![
            Line::styled("[ Secondary ]", accent),
            Line::raw(""),
            Line::styled("   Primary   ", Style::default().bg(INDIGO_500).fg(Color::White)),
        ],
        PreviewId::Input => vec![
            Line::styled("Project name      ", muted()),
            Line::styled("\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}", Style::default().fg(GRAY_300)),
            Line::styled("\u{2502} Enter name...  \u{2502}", Style::default().fg(GRAY_300)),
            Line::styled("\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}", Style::default().fg(GRAY_300)),
        ],
        PreviewId::Switch => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("Sound alerts  ", text()),
                Span::styled(" \u{25cf}", Style::default().bg(INDIGO_500).fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Auto-upload   ", text()),
                Span::styled("\u{25cf} ", Style::default().bg(GRAY_300).fg(Color::White)),
            ]),
        ],
        PreviewId::Heatmap => heatmap(),
        PreviewId::PieChart => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("\u{2588}".repeat(5), Style::default().fg(INDIGO_500)),
                Span::styled("\u{2588}".repeat(4), Style::default().fg(TEAL_500)),
                Span::styled("\u{2588}".repeat(11), Style::default().fg(INDIGO_200)),
            ]),
            Line::styled("25%  20%  55%       ", muted()),
        ],
    }
}

fn heatmap() -> Vec<Line<'static>> {
    const LEVELS: [usize; 14] = [0, 1, 2, 1, 3, 2, 1, 1, 2, 3, 2, 1, 3, 2];
    const SHADES: [Color; 4] = [INDIGO_100, INDIGO_200, INDIGO_300, INDIGO_400];
    let mut lines = vec![Line::raw("")];
    lines.extend(LEVELS.chunks(7).map(|week| {
        Line::from(
            week.iter()
                .map(|&level| Span::styled("\u{25a0} ", Style::default().fg(SHADES[level])))
                .collect::<Vec<_>>(),
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preview_fits_card() {
        for id in PreviewId::ALL {
            let lines = render(id);
            assert!(!lines.is_empty(), "{id:?} renders nothing");
            assert!(
                lines.len() <= PREVIEW_HEIGHT as usize,
                "{id:?} renders {} lines",
                lines.len()
            );
            assert!(lines.iter().all(|l| l.width() <= 30), "{id:?} too wide");
        }
    }

    #[test]
    fn test_unknown_key_renders_placeholder() {
        let lines = render_key("carousel");
        assert_eq!(lines, placeholder());
        assert!(lines.iter().all(|l| l.width() == 0));
    }

    #[test]
    fn test_known_key_renders_preview() {
        assert_eq!(render_key("tabs"), render(PreviewId::Tabs));
    }
}
