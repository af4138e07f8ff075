use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use proptest::prelude::*;

use crate::catalog::{Catalog, CatalogCategory, CatalogEntry, PreviewId};
use crate::nav::{NavigationTree, SidebarRow};
use crate::ui::ContentTarget;
use crate::ui::layout::{rail_item_row, shell_areas};
use crate::view::{DetailTab, Page};

use super::event_loop::ResizeDebouncer;
use super::{App, Focus, Message, Model, RailItem, update};

fn create_test_model() -> Model {
    Model::new((120, 40))
}

fn apply(model: Model, msgs: impl IntoIterator<Item = Message>) -> Model {
    msgs.into_iter().fold(model, update)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn select(label: &str) -> Message {
    Message::SelectItem(label.to_string())
}

static FOUR_ENTRIES: [CatalogEntry; 4] = [
    CatalogEntry { name: "One", description: "first", preview: PreviewId::Button },
    CatalogEntry { name: "Two", description: "second", preview: PreviewId::Chip },
    CatalogEntry { name: "Three", description: "third", preview: PreviewId::Badge },
    CatalogEntry { name: "Four", description: "fourth", preview: PreviewId::Switch },
];

static FOUR_CATALOG: [CatalogCategory; 1] = [CatalogCategory { name: "Quad", entries: &FOUR_ENTRIES }];

fn visible_cards(model: &Model, category: &str) -> usize {
    model
        .content_targets()
        .iter()
        .filter(|t| matches!(t, ContentTarget::Entry { category: c, .. } if *c == category))
        .count()
}

// Session transitions

#[test]
fn test_initial_state() {
    let model = create_test_model();
    let snap = model.snapshot();
    assert_eq!(snap.page, Page::Overview);
    assert_eq!(snap.detail_tab, None);
    let expanded: Vec<_> = snap.sections.iter().filter(|s| s.expanded()).collect();
    assert_eq!(expanded.len(), 1);
    assert_eq!(expanded[0].name(), "Disclosure");
    assert!(snap.show_all.values().all(|shown| !shown));
}

#[test]
fn test_scenario_walkthrough() {
    let model = create_test_model();

    let model = update(model, Message::ToggleCategory(2));
    let snap = model.snapshot();
    assert!(snap.sections[2].expanded());
    assert!(snap.sections[0].expanded());
    assert_eq!(snap.sections.iter().filter(|s| s.expanded()).count(), 2);

    let model = update(model, select("Tabs"));
    assert_eq!(model.page(), Page::TabsDetail);
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Overview));

    let model = update(model, Message::SetActiveTab(DetailTab::Guidelines));
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Guidelines));

    let model = update(model, Message::SelectOverview);
    assert_eq!(model.page(), Page::Overview);

    let model = update(model, select("Tabs"));
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Overview));
}

#[test]
fn test_reselecting_shown_page_keeps_tab() {
    let model = apply(
        create_test_model(),
        [select("Tabs"), Message::SetActiveTab(DetailTab::Usage), select("tabs")],
    );
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Usage));
}

#[test]
fn test_switching_detail_pages_resets_tab() {
    let model = apply(
        create_test_model(),
        [
            select("Tabs"),
            Message::SetActiveTab(DetailTab::Usage),
            select("Navigation"),
        ],
    );
    assert_eq!(model.page(), Page::NavigationDetail);
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Overview));
}

#[test]
fn test_overview_round_trip_matches_single_selection() {
    let once = update(create_test_model(), select("Tabs"));
    let thrice = apply(
        create_test_model(),
        [select("Tabs"), Message::SelectOverview, select("Tabs")],
    );
    assert_eq!(once.snapshot(), thrice.snapshot());
}

#[test]
fn test_same_messages_same_snapshot() {
    let msgs = vec![
        Message::ToggleCategory(3),
        select("Navigation bar"),
        Message::SetActiveTab(DetailTab::Usage),
        Message::ToggleShowMore("Form".to_string()),
        Message::ToggleCategory(0),
    ];
    let a = apply(create_test_model(), msgs.clone());
    let b = apply(create_test_model(), msgs);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_unmapped_label_is_inert() {
    let before = create_test_model().snapshot();
    let model = update(create_test_model(), select("Heatmap"));
    assert_eq!(model.snapshot(), before);
    let model = update(model, Message::SelectEntry("Button".to_string()));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_catalog_entry_navigates_when_mapped() {
    let model = update(create_test_model(), Message::SelectEntry("Navigation bar".to_string()));
    assert_eq!(model.page(), Page::NavigationDetail);
}

#[test]
fn test_toggle_category_out_of_range_is_noop() {
    let before = create_test_model().snapshot();
    let model = update(create_test_model(), Message::ToggleCategory(99));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_set_active_tab_on_overview_is_noop() {
    let model = update(create_test_model(), Message::SetActiveTab(DetailTab::Usage));
    assert_eq!(model.view.detail_tab(), None);
    let model = update(model, select("Tabs"));
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Overview));
}

#[test]
fn test_four_entry_category_truncates_and_expands() {
    let catalog = Catalog::new(&FOUR_CATALOG);
    let model = Model::with_parts(catalog, NavigationTree::builtin(), (120, 60));
    assert_eq!(visible_cards(&model, "Quad"), 3);

    let model = update(model, Message::ToggleShowMore("Quad".to_string()));
    assert_eq!(visible_cards(&model, "Quad"), 4);

    let model = update(model, Message::ToggleShowMore("Quad".to_string()));
    assert_eq!(visible_cards(&model, "Quad"), 3);
}

#[test]
fn test_show_more_outside_truncation_set_is_noop() {
    let before = create_test_model().snapshot();
    let model = update(create_test_model(), Message::ToggleShowMore("Disclosure".to_string()));
    assert_eq!(model.snapshot(), before);
    let model = update(model, Message::ToggleShowMore("Nope".to_string()));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_builtin_truncated_categories_show_three() {
    let model = create_test_model();
    assert_eq!(visible_cards(&model, "Data Display"), 3);
    assert_eq!(visible_cards(&model, "Form"), 3);
    assert_eq!(visible_cards(&model, "Disclosure"), 2);
}

// Focus, cursors and activation

#[test]
fn test_focus_cycles_through_panes() {
    let model = create_test_model();
    assert_eq!(model.focus, Focus::Sidebar);
    let model = update(model, Message::FocusNext);
    assert_eq!(model.focus, Focus::Content);
    let model = update(model, Message::FocusNext);
    assert_eq!(model.focus, Focus::Rail);
    let model = update(model, Message::FocusPrev);
    assert_eq!(model.focus, Focus::Content);
}

#[test]
fn test_sidebar_activate_item_opens_detail() {
    let model = create_test_model();
    // Overview, Disclosure, Navigation, Tabs
    let model = apply(model, [Message::CursorDown, Message::CursorDown, Message::CursorDown]);
    assert_eq!(
        model.sidebar_row(),
        Some(SidebarRow::Item { section: 0, item: 1 })
    );
    let model = update(model, Message::Activate);
    assert_eq!(model.page(), Page::TabsDetail);
}

#[test]
fn test_sidebar_activate_category_toggles() {
    let model = apply(create_test_model(), [Message::CursorDown, Message::Activate]);
    assert!(!model.nav.sections()[0].expanded());
    assert_eq!(model.nav.rows().len(), 1 + model.nav.len());
}

#[test]
fn test_sidebar_cursor_clamped_after_collapse() {
    let mut model = create_test_model();
    model.sidebar_cursor = model.nav.rows().len() - 1;
    let model = update(model, Message::ToggleCategory(0));
    assert!(model.sidebar_cursor < model.nav.rows().len());
}

#[test]
fn test_rail_home_selects_overview() {
    let model = update(create_test_model(), select("Tabs"));
    let home = RailItem::ALL.iter().position(|i| *i == RailItem::Home).unwrap();
    let model = update(model, Message::ClickRail(home));
    assert_eq!(model.page(), Page::Overview);
    assert_eq!(model.focus, Focus::Rail);
}

#[test]
fn test_rail_inert_entries() {
    let model = update(create_test_model(), select("Tabs"));
    let before = model.snapshot();
    let model = update(model, Message::ClickRail(0));
    let model = update(model, Message::ClickRail(4));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_content_activation_follows_targets() {
    let model = update(create_test_model(), Message::FocusNext);
    assert_eq!(
        model.content_targets()[0],
        ContentTarget::Entry { category: "Disclosure", name: "Tabs" }
    );
    let model = update(model, Message::Activate);
    assert_eq!(model.page(), Page::TabsDetail);
    assert_eq!(model.content_cursor, 0);

    // Back, then the three tabs.
    let targets = model.content_targets();
    assert_eq!(targets[0], ContentTarget::Back);
    let guidelines = targets
        .iter()
        .position(|t| *t == ContentTarget::Tab(DetailTab::Guidelines))
        .unwrap();
    let model = update(model, Message::ClickContent(guidelines));
    assert_eq!(model.view.detail_tab(), Some(DetailTab::Guidelines));

    let model = update(model, Message::ClickContent(0));
    assert_eq!(model.page(), Page::Overview);
}

#[test]
fn test_click_unmapped_card_leaves_page() {
    let model = create_test_model();
    let idx = model
        .content_targets()
        .iter()
        .position(|t| matches!(t, ContentTarget::Entry { name: "Heatmap", .. }))
        .unwrap();
    let model = update(model, Message::ClickContent(idx));
    assert_eq!(model.page(), Page::Overview);
    assert_eq!(model.focus, Focus::Content);
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let model = create_test_model();
    let before = (model.focus, model.snapshot());
    let model = update(model, Message::ClickContent(999));
    let model = update(model, Message::ClickSidebar(999));
    let model = update(model, Message::ClickRail(999));
    assert_eq!((model.focus, model.snapshot()), before);
}

#[test]
fn test_content_cursor_scrolls_into_view() {
    let model = update(Model::new((80, 12)), Message::FocusNext);
    let last = model.content_targets().len() - 1;
    let model = (0..last).fold(model, |m, _| update(m, Message::CursorDown));
    assert_eq!(model.content_cursor, last);
    assert!(model.viewport.offset() > 0);
}

// Scrolling, help, resize

#[test]
fn test_scroll_messages_update_viewport() {
    let model = Model::new((80, 12));
    let model = update(model, Message::ScrollDown(5));
    assert_eq!(model.viewport.offset(), 5);
    let model = update(model, Message::ScrollUp(3));
    assert_eq!(model.viewport.offset(), 2);
    let model = update(model, Message::PageDown);
    let paged = model.viewport.offset();
    assert!(paged > 2);
    let model = update(model, Message::PageUp);
    assert!(model.viewport.offset() < paged);
}

#[test]
fn test_page_change_scrolls_to_top() {
    let model = update(Model::new((80, 12)), Message::ScrollDown(10));
    let model = update(model, select("Tabs"));
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_toggle_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HelpScrollDown);
    assert_eq!(model.help_scroll_offset, 1);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_resize_reflows_body() {
    let model = create_test_model();
    let wide = model.viewport.total_rows();
    let model = update(model, Message::Resize(60, 40));
    assert!(model.viewport.total_rows() > wide);
    assert_eq!(model.terminal_size, (60, 40));
}

#[test]
fn test_quit() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

// Input mapping

#[test]
fn test_keys_map_to_messages() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
    assert_eq!(
        App::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &model),
        Some(Message::Quit)
    );
    assert_eq!(App::handle_key(key(KeyCode::Tab), &model), Some(Message::FocusNext));
    assert_eq!(App::handle_key(key(KeyCode::BackTab), &model), Some(Message::FocusPrev));
    assert_eq!(App::handle_key(key(KeyCode::Char('j')), &model), Some(Message::CursorDown));
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), Some(Message::Activate));
    assert_eq!(App::handle_key(key(KeyCode::Char('?')), &model), Some(Message::ToggleHelp));
    assert_eq!(App::handle_key(key(KeyCode::Char('H')), &model), Some(Message::SelectOverview));
}

#[test]
fn test_detail_keys_only_on_detail_pages() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::Char('2')), &model), None);
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), None);

    let model = update(model, select("Tabs"));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('2')), &model),
        Some(Message::SetActiveTab(DetailTab::Guidelines))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('3')), &model),
        Some(Message::SetActiveTab(DetailTab::Usage))
    );
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::SelectOverview));
}

#[test]
fn test_help_keys_scroll_or_hide() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert_eq!(App::handle_key(key(KeyCode::Char('j')), &model), Some(Message::HelpScrollDown));
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::HideHelp));
}

#[test]
fn test_left_right_only_move_in_content() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::Char('l')), &model), None);
    let model = update(model, Message::FocusNext);
    assert_eq!(App::handle_key(key(KeyCode::Char('l')), &model), Some(Message::CursorDown));
    assert_eq!(App::handle_key(key(KeyCode::Left), &model), Some(Message::CursorUp));
}

#[test]
fn test_mouse_click_rail() {
    let model = create_test_model();
    let areas = shell_areas(model.screen_area());
    let row = rail_item_row(areas.rail, 1);
    assert_eq!(
        App::handle_mouse(click(areas.rail.x + 2, row), &model),
        Some(Message::ClickRail(1))
    );
}

#[test]
fn test_mouse_click_sidebar_row() {
    let model = create_test_model();
    let areas = shell_areas(model.screen_area());
    // Row 0 of the list sits one line below the pane top.
    assert_eq!(
        App::handle_mouse(click(areas.sidebar.x + 2, areas.sidebar.y + 2), &model),
        Some(Message::ClickSidebar(1))
    );
    assert_eq!(
        App::handle_mouse(click(areas.sidebar.x + 2, areas.sidebar.y), &model),
        None
    );
}

#[test]
fn test_mouse_click_card_hits_layout() {
    let model = create_test_model();
    let areas = shell_areas(model.screen_area());
    let layout = crate::ui::content_layout(&model, areas.content.width);
    let (_, rect) = layout.regions[0];
    let msg = App::handle_mouse(
        click(areas.content.x + rect.x + 1, areas.content.y + rect.y + 1),
        &model,
    );
    assert_eq!(msg, Some(Message::ClickContent(0)));

    let model = update(model, msg.unwrap());
    assert_eq!(model.page(), Page::TabsDetail);
}

#[test]
fn test_mouse_wheel_scrolls_content_only() {
    let model = Model::new((80, 12));
    let areas = shell_areas(model.screen_area());
    let wheel = |column, row| MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
        App::handle_mouse(wheel(areas.content.x, areas.content.y), &model),
        Some(Message::ScrollDown(3))
    );
    assert_eq!(App::handle_mouse(wheel(areas.sidebar.x, areas.sidebar.y + 1), &model), None);
}

#[test]
fn test_mouse_events_ignored_when_disabled() {
    let mut model = create_test_model();
    model.mouse_enabled = false;
    let mut debouncer = ResizeDebouncer::new(100);
    let event = crossterm::event::Event::Mouse(click(1, 3));
    assert_eq!(App::handle_event(&event, &model, 0, &mut debouncer), None);
}

#[test]
fn test_resize_event_is_debounced() {
    let model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let event = crossterm::event::Event::Resize(100, 30);
    assert_eq!(App::handle_event(&event, &model, 0, &mut debouncer), None);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_ready(50), None);
    assert_eq!(debouncer.take_ready(100), Some((100, 30)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_app_builder_sets_model_flags() {
    let app = App::new().with_ascii(true).with_mouse(false);
    let model = app.initial_model((80, 24));
    assert!(model.ascii);
    assert!(!model.mouse_enabled);
    assert_eq!(model.snapshot(), Model::default().snapshot());
}

proptest! {
    #[test]
    fn double_toggle_restores(index in 0usize..8, prefix in proptest::collection::vec(0usize..6, 0..6)) {
        let model = prefix.iter().fold(create_test_model(), |m, &i| update(m, Message::ToggleCategory(i)));
        let before = model.snapshot();
        let model = update(model, Message::ToggleCategory(index));
        let model = update(model, Message::ToggleCategory(index));
        prop_assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn toggle_only_touches_its_category(index in 0usize..6, detail in any::<bool>()) {
        let start = if detail {
            apply(create_test_model(), [select("Tabs"), Message::SetActiveTab(DetailTab::Usage)])
        } else {
            update(create_test_model(), Message::ToggleShowMore("Form".to_string()))
        };
        let before = start.snapshot();
        let after = update(start, Message::ToggleCategory(index)).snapshot();
        prop_assert_eq!(after.page, before.page);
        prop_assert_eq!(after.detail_tab, before.detail_tab);
        prop_assert_eq!(&after.show_all, &before.show_all);
        for (i, (a, b)) in after.sections.iter().zip(&before.sections).enumerate() {
            prop_assert_eq!(a.expanded() != b.expanded(), i == index);
        }
    }
}
