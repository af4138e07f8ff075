use super::*;
use crate::app::{Focus, Message, Model, update};
use crate::view::{DetailTab, Page};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn draw(model: &Model) -> String {
    let (width, height) = model.terminal_size;
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn model_at(width: u16, height: u16) -> Model {
    Model::new((width, height))
}

#[test]
fn test_render_overview_shows_hero_and_categories() {
    let model = model_at(120, 60);
    let screen = draw(&model);
    assert!(screen.contains("Components"));
    assert!(screen.contains("Disclosure"));
    assert!(screen.contains("Navigation bar"));
}

#[test]
fn test_render_overview_shows_view_more_for_long_categories() {
    let mut model = model_at(120, 80);
    model.focus = Focus::Content;
    let has_show_more = model
        .content_targets()
        .iter()
        .any(|t| matches!(t, ContentTarget::ShowMore { .. }));
    assert!(has_show_more, "Data Display and Form are truncated");

    // Scroll so the first truncated category is on screen.
    let layout = content_layout(&model, model.content_width());
    let (_, rect) = layout
        .regions
        .iter()
        .find(|(t, _)| matches!(t, ContentTarget::ShowMore { .. }))
        .copied()
        .unwrap();
    model.viewport.reveal(rect.y as usize, 1);
    let screen = draw(&model);
    assert!(screen.contains("View more (1)"), "{screen}");
}

#[test]
fn test_render_sidebar_lists_only_expanded_items() {
    let model = model_at(100, 40);
    let screen = draw(&model);
    assert!(screen.contains("Component overview"));
    assert!(screen.contains("Tabs"));
    // Feedback starts collapsed, its items stay hidden in the sidebar.
    let sidebar: String = screen
        .lines()
        .map(|l| l.chars().skip(14).take(24).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(sidebar.contains("Feedback"));
    assert!(!sidebar.contains("Skeleton"));
}

#[test]
fn test_render_sidebar_shows_items_after_expanding() {
    let model = update(model_at(100, 40), Message::ToggleCategory(1));
    let screen = draw(&model);
    let sidebar: String = screen
        .lines()
        .map(|l| l.chars().skip(14).take(24).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(sidebar.contains("Skeleton"));
}

#[test]
fn test_render_ascii_chevrons() {
    let mut model = model_at(100, 40);
    model.ascii = true;
    let screen = draw(&model);
    assert!(screen.contains('v'));
    assert!(screen.contains('>'));
    assert!(!screen.contains('\u{25be}'));
}

#[test]
fn test_render_detail_page_shows_tabs_and_back() {
    let model = update(model_at(120, 50), Message::SelectItem("Tabs".to_string()));
    let screen = draw(&model);
    assert!(screen.contains("Back to overview"));
    assert!(screen.contains("Overview"));
    assert!(screen.contains("Guidelines"));
    assert!(screen.contains("Usage"));
}

#[test]
fn test_render_guidelines_tab_shows_tokens() {
    let model = update(model_at(120, 60), Message::SelectItem("Navigation".to_string()));
    let model = update(model, Message::SetActiveTab(DetailTab::Guidelines));
    let screen = draw(&model);
    assert!(screen.contains("States"), "{screen}");
}

#[test]
fn test_render_status_bar_breadcrumb() {
    let model = update(model_at(140, 30), Message::SelectItem("Tabs".to_string()));
    let model = update(model, Message::SetActiveTab(DetailTab::Usage));
    let last = draw(&model).lines().last().unwrap().to_string();
    assert!(last.contains("Components"));
    assert!(last.contains("Disclosure"));
    assert!(last.contains("Tabs"));
    assert!(last.contains("Usage"));
}

#[test]
fn test_breadcrumb_on_overview() {
    let mut model = Model::default();
    model.ascii = true;
    assert_eq!(breadcrumb(&model), "Components > Component overview");
}

#[test]
fn test_render_help_overlay() {
    let model = update(model_at(100, 40), Message::ToggleHelp);
    let screen = draw(&model);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Back to overview"));
    assert!(screen.contains("Quit"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    for (w, h) in [(1, 1), (10, 3), (40, 5), (0, 0)] {
        let model = model_at(w, h);
        let mut terminal = create_test_terminal(w.max(1), h.max(1));
        terminal.draw(|frame| render(&model, frame)).unwrap();
    }
}

#[test]
fn test_render_does_not_mutate_view_state() {
    let model = update(model_at(100, 40), Message::SelectItem("Tabs".to_string()));
    let before = model.snapshot();
    let _ = draw(&model);
    assert_eq!(model.snapshot(), before);
    assert_eq!(model.page(), Page::TabsDetail);
}

#[test]
fn test_scrolled_content_shows_footer() {
    let mut model = model_at(120, 30);
    model.viewport.scroll_down(usize::MAX / 2);
    let screen = draw(&model);
    assert!(screen.contains("2026 Cochl Inc."), "{screen}");
}
