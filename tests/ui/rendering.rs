use crate::common::{component, press, started_app, status_error, subsystem, FakeApi};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use satdb::entities::SubsystemRef;
use satdb::logger::Logger;
use satdb::ui::core::{Component, EventType, Focus};
use satdb::ui::components::StatusBar;
use satdb::ui::AppComponent;

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_empty_backend_shows_placeholders() {
    let mut app = started_app(FakeApi::new()).await;
    let screen = draw(&mut app);

    assert!(screen.contains("Satellite Components Database"));
    assert!(screen.contains("Component List"));
    assert!(screen.contains("No components found."));
    assert!(screen.contains("Add New Component"));
    assert!(screen.contains("[ Add Component ]"));
    assert!(screen.contains("Manage Subsystems"));
    assert!(screen.contains("No subsystems yet."));
}

#[tokio::test]
async fn test_loading_placeholder_before_results_arrive() {
    let mut app = AppComponent::new(FakeApi::new(), "http://localhost:8000", Logger::new());
    app.start();

    let screen = draw(&mut app);
    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("No components found."));
    assert!(screen.contains("⟳ 3 requests"));
}

#[tokio::test]
async fn test_table_shows_components() {
    let mut battery = component(1, "Battery", 2.5);
    battery.wbs = Some("1.2".to_string());
    battery.parent_id = Some(9);
    battery.subsystem_id = Some(4);
    battery.subsystem = Some(SubsystemRef {
        id: 4,
        name: "Power".to_string(),
    });
    let api = FakeApi::with_data(vec![battery], vec![subsystem(4, "Power")]);
    let mut app = started_app(api).await;
    let screen = draw(&mut app);

    assert!(screen.contains("Mass (kg)"));
    assert!(screen.contains("Parent ID"));
    assert!(screen.contains("Battery"));
    assert!(screen.contains("2.5"));
    assert!(screen.contains("1.2"));
    assert!(screen.contains("Power"));
}

#[tokio::test]
async fn test_delete_prompt_is_drawn_over_the_list() {
    let api = FakeApi::with_data(vec![component(1, "Antenna", 1.0)], Vec::new());
    let mut app = started_app(api).await;
    press(&mut app, KeyCode::Char('d'));

    let screen = draw(&mut app);
    assert!(screen.contains("Delete component"));
    assert!(screen.contains("Are you sure you want to delete this component?"));
    assert!(screen.contains("y/Enter to confirm"));
}

#[tokio::test]
async fn test_add_form_shows_adding_while_submitting() {
    let mut app = started_app(FakeApi::new()).await;
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('X'));
    press(&mut app, KeyCode::Enter);

    let screen = draw(&mut app);
    assert!(screen.contains("[ Adding... ]"));
    app.settle().await;

    let screen = draw(&mut app);
    assert!(screen.contains("[ Add Component ]"));
}

#[tokio::test]
async fn test_help_dialog_lists_keys() {
    let mut app = started_app(FakeApi::new()).await;
    press(&mut app, KeyCode::Char('?'));

    let screen = draw(&mut app);
    assert!(screen.contains("COMPONENT LIST"));
    assert!(screen.contains("Delete selected component"));
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[tokio::test]
async fn test_mouse_click_focuses_pane_and_wheel_selects() {
    let api = FakeApi::with_data(
        vec![component(1, "Bus", 120.0), component(2, "Battery Pack", 8.5)],
        vec![subsystem(3, "Power")],
    );
    let mut app = started_app(api).await;

    // Mouse events are ignored until a layout has been drawn
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 110, 5));
    assert_eq!(app.focus(), Focus::ComponentList);

    draw(&mut app);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 110, 5));
    assert_eq!(app.focus(), Focus::AddForm);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 110, 25));
    assert_eq!(app.focus(), Focus::Subsystems);

    app.handle_event(mouse(MouseEventKind::ScrollDown, 10, 10));
    assert_eq!(app.component_list().selected_index, 1);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
    assert_eq!(app.focus(), Focus::ComponentList);
}

#[tokio::test]
async fn test_reload_after_failure_shows_loading() {
    let api = FakeApi::new();
    api.fail_next("list_components", status_error(500, None));
    let mut app = started_app(api).await;
    assert!(draw(&mut app).contains("Failed to fetch components."));

    press(&mut app, KeyCode::Char('r'));
    assert!(app.component_list().is_loading());
    let screen = draw(&mut app);
    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("Failed to fetch components."));
    assert!(screen.contains("⟳ Load components"));

    app.settle().await;
    assert!(draw(&mut app).contains("No components found."));
}

#[test]
fn test_status_activity_label() {
    assert_eq!(StatusBar::activity(&[]), None);
    assert_eq!(
        StatusBar::activity(&["Delete subsystem".to_string()]).as_deref(),
        Some("⟳ Delete subsystem")
    );
    let running = vec!["Load components".to_string(), "Health check".to_string()];
    assert_eq!(StatusBar::activity(&running).as_deref(), Some("⟳ 2 requests"));
}
