use crate::common::{component, press, started_app, status_error, subsystem, type_text, Call, FakeApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use satdb::api::ApiError;
use satdb::entities::{ComponentPatch, NewComponent};
use satdb::forms::{ComponentDraft, ComponentField};
use satdb::store::ResourceKind;
use satdb::ui::core::{DialogType, EventType, Focus};

#[tokio::test]
async fn test_initial_load_fetches_everything_once() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], vec![subsystem(10, "Power")]);
    let app = started_app(api.clone()).await;

    assert_eq!(api.count(|c| *c == Call::ListComponents), 1);
    assert_eq!(api.count(|c| *c == Call::ListSubsystems), 1);
    assert_eq!(api.count(|c| *c == Call::Health), 1);
    assert_eq!(app.component_list().components().len(), 1);
    assert_eq!(app.subsystem_manager().subsystems().len(), 1);
    assert!(!app.component_list().is_loading());
    assert_eq!(app.status_bar().healthy, Some(true));
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_add_component_sends_one_parsed_create_request() {
    let api = FakeApi::with_data(Vec::new(), vec![subsystem(1, "Power")]);
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::AddForm);

    type_text(&mut app, "Reaction Wheel");
    press(&mut app, KeyCode::Down); // WBS stays empty
    press(&mut app, KeyCode::Down); // Part number stays empty
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "4.25");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "15000");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Down); // Parent stays empty
    press(&mut app, KeyCode::Down);
    assert_eq!(app.add_form().field, ComponentField::Subsystem);
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Enter);
    assert!(app.add_form().is_submitting());
    app.settle().await;

    let creates: Vec<NewComponent> = api
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::CreateComponent(body) => Some(body),
            _ => None,
        })
        .collect();
    assert_eq!(creates.len(), 1);

    let expected = NewComponent {
        name: "Reaction Wheel".to_string(),
        wbs: None,
        part_number: None,
        mass_kg: 4.25,
        cost_usd: 15000.0,
        quantity: 3,
        parent_id: None,
        subsystem_id: Some(1),
    };
    assert_eq!(creates[0], expected);

    let json = serde_json::to_value(&creates[0]).unwrap();
    assert!(json["wbs"].is_null());
    assert!(json["parent_id"].is_null());

    // Success resets the form and refreshes the list
    assert_eq!(app.add_form().draft, ComponentDraft::default());
    assert!(!app.add_form().is_submitting());
    assert_eq!(api.count(|c| *c == Call::ListComponents), 2);
    let names: Vec<&str> = app.component_list().components().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Reaction Wheel"]);
    assert_eq!(app.refresh_signal().generation(ResourceKind::Components), 1);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let api = FakeApi::new();
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    assert_eq!(app.add_form().error(), Some("Name is required"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_failed_create_shows_detail_or_fallback() {
    let api = FakeApi::new();
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Antenna");

    api.fail_next("create_component", status_error(422, Some("parent_id does not exist")));
    press(&mut app, KeyCode::Enter);
    app.settle().await;
    assert_eq!(app.add_form().error(), Some("parent_id does not exist"));
    assert!(!app.add_form().is_submitting());
    assert_eq!(app.add_form().draft.name, "Antenna");

    api.fail_next("create_component", ApiError::Transport("connection refused".to_string()));
    press(&mut app, KeyCode::Enter);
    app.settle().await;
    assert_eq!(app.add_form().error(), Some("Failed to add component."));
    assert!(app.component_list().components().is_empty());
}

#[tokio::test]
async fn test_delete_after_confirmation_removes_without_reload() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5), component(2, "Antenna", 1.0)], Vec::new());
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::DeleteConfirmation {
            kind: ResourceKind::Components,
            id: 2,
            name: "Antenna".to_string(),
        })
    );

    press(&mut app, KeyCode::Char('y'));
    app.settle().await;

    assert!(!app.dialog().is_visible());
    assert_eq!(api.count(|c| *c == Call::DeleteComponent(2)), 1);
    assert_eq!(api.count(|c| matches!(c, Call::DeleteComponent(_))), 1);
    assert_eq!(api.count(|c| *c == Call::ListComponents), 1);
    let ids: Vec<i64> = app.component_list().components().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_declining_confirmation_issues_no_request() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5), component(2, "Antenna", 1.0)], Vec::new());
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::Char('d'));
    assert!(app.dialog().is_visible());
    press(&mut app, KeyCode::Char('n'));
    app.settle().await;

    assert!(!app.dialog().is_visible());
    assert!(api.calls().is_empty());
    assert_eq!(app.component_list().components().len(), 2);
}

#[tokio::test]
async fn test_failed_delete_shows_alert_with_detail() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;

    api.fail_next("delete_component", status_error(409, Some("Component has children")));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Alert("Failed to delete component. Component has children".to_string()))
    );
    assert_eq!(app.component_list().components().len(), 1);

    // Any key dismisses the alert
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_edit_mass_sends_partial_update_and_merges() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::Char('e'));
    assert!(app.component_list().is_editing());
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(
        app.component_list().edit_session().map(|s| s.field),
        Some(ComponentField::MassKg)
    );
    for _ in 0.."2.5".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "3.0");
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    let expected = ComponentPatch {
        mass_kg: Some(3.0),
        ..Default::default()
    };
    assert_eq!(api.count(|c| *c == Call::UpdateComponent(1, expected.clone())), 1);
    assert_eq!(serde_json::to_value(&expected).unwrap(), serde_json::json!({ "mass_kg": 3.0 }));

    assert!(!app.component_list().is_editing());
    assert_eq!(app.component_list().components()[0].mass_kg, 3.0);
    assert_eq!(api.count(|c| *c == Call::ListComponents), 1);
}

#[tokio::test]
async fn test_unchanged_edit_sends_nothing() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::Enter);
    assert!(app.component_list().is_editing());
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    assert!(!app.component_list().is_editing());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_cancelled_edit_discards_changes() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " Pack");
    press(&mut app, KeyCode::Esc);
    app.settle().await;

    assert!(!app.component_list().is_editing());
    assert_eq!(app.component_list().components()[0].name, "Battery");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_edit_stays_in_editing() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::Char('e'));
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "0");
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    let session = app.component_list().edit_session().expect("still editing");
    assert_eq!(session.field, ComponentField::Quantity);
    assert_eq!(session.error.as_deref(), Some("Quantity must be a whole number of at least 1"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_failed_update_keeps_editor_open_with_detail() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;

    api.fail_next("update_component", status_error(422, Some("name too long")));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "X");
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    let session = app.component_list().edit_session().expect("still editing");
    assert_eq!(session.error.as_deref(), Some("name too long"));
    assert!(!session.saving);
    assert_eq!(app.component_list().components()[0].name, "Battery");
    assert_eq!(api.count(|c| *c == Call::GetComponent(1)), 1);
    assert_eq!(api.count(|c| *c == Call::ListComponents), 1);
}

#[tokio::test]
async fn test_update_failing_after_cancel_shows_alert() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;

    api.fail_next("update_component", status_error(409, Some("Component name already exists")));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "X");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.component_list().is_editing());
    app.settle().await;

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Alert("Component name already exists".to_string()))
    );
    assert_eq!(app.component_list().components()[0].name, "Battery");
}

#[tokio::test]
async fn test_refresh_refetches_updated_set() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let mut app = started_app(api.clone()).await;

    api.insert_component(component(2, "Star Tracker", 0.8));
    press(&mut app, KeyCode::Char('r'));
    app.settle().await;

    assert_eq!(api.count(|c| *c == Call::ListComponents), 2);
    let names: Vec<&str> = app.component_list().components().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Battery", "Star Tracker"]);
}

#[tokio::test]
async fn test_load_failure_shows_generic_message() {
    let api = FakeApi::new();
    api.fail_next("list_components", status_error(500, Some("database is down")));
    let app = started_app(api.clone()).await;

    assert_eq!(app.component_list().error(), Some("Failed to fetch components."));
    assert!(!app.component_list().is_loading());
}

#[tokio::test]
async fn test_add_subsystem_reloads_list() {
    let api = FakeApi::new();
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Subsystems);
    type_text(&mut app, "Power");
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    assert_eq!(api.count(|c| *c == Call::CreateSubsystem("Power".to_string())), 1);
    assert_eq!(api.count(|c| *c == Call::ListSubsystems), 2);
    let names: Vec<&str> = app
        .subsystem_manager()
        .subsystems()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Power"]);
    assert!(app.subsystem_manager().input_buffer.is_empty());
    assert_eq!(app.subsystem_manager().error(), None);
}

#[tokio::test]
async fn test_failed_subsystem_add_keeps_prior_list() {
    let api = FakeApi::with_data(Vec::new(), vec![subsystem(1, "Power")]);
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::BackTab);
    type_text(&mut app, "Power");

    api.fail_next("create_subsystem", status_error(409, Some("Subsystem already exists")));
    press(&mut app, KeyCode::Enter);
    app.settle().await;
    assert_eq!(app.subsystem_manager().error(), Some("Subsystem already exists"));
    assert_eq!(app.subsystem_manager().subsystems().len(), 1);
    assert_eq!(api.count(|c| *c == Call::ListSubsystems), 1);

    api.fail_next("create_subsystem", ApiError::Decode("unexpected body".to_string()));
    press(&mut app, KeyCode::Enter);
    app.settle().await;
    assert_eq!(app.subsystem_manager().error(), Some("Failed to add subsystem"));
    assert_eq!(app.subsystem_manager().subsystems().len(), 1);
}

#[tokio::test]
async fn test_delete_subsystem_after_confirmation() {
    let api = FakeApi::with_data(Vec::new(), vec![subsystem(1, "Power"), subsystem(2, "Thermal")]);
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Delete);
    assert!(matches!(
        app.dialog().dialog_type,
        Some(DialogType::DeleteConfirmation {
            kind: ResourceKind::Subsystems,
            id: 2,
            ..
        })
    ));
    press(&mut app, KeyCode::Char('y'));
    app.settle().await;

    assert_eq!(api.count(|c| *c == Call::DeleteSubsystem(2)), 1);
    assert_eq!(api.count(|c| *c == Call::ListSubsystems), 2);
    let names: Vec<&str> = app
        .subsystem_manager()
        .subsystems()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Power"]);
}

#[tokio::test]
async fn test_failed_subsystem_delete_shows_fallback() {
    let api = FakeApi::with_data(Vec::new(), vec![subsystem(1, "Power")]);
    let mut app = started_app(api.clone()).await;

    api.fail_next("delete_subsystem", ApiError::Transport("connection reset".to_string()));
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Enter);
    app.settle().await;

    assert_eq!(app.subsystem_manager().error(), Some("Failed to delete subsystem"));
    assert_eq!(app.subsystem_manager().subsystems().len(), 1);
}

#[tokio::test]
async fn test_seed_reloads_both_lists_and_reports() {
    let api = FakeApi::new();
    let mut app = started_app(api.clone()).await;

    press(&mut app, KeyCode::Char('S'));
    app.settle().await;

    assert_eq!(api.count(|c| *c == Call::SeedExamples), 1);
    assert_eq!(app.component_list().components().len(), 2);
    assert_eq!(app.subsystem_manager().subsystems().len(), 1);
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Info(ref m)) if m.contains("2 components")));
}

#[tokio::test]
async fn test_letters_in_text_panes_are_not_global_keys() {
    let api = FakeApi::new();
    let mut app = started_app(api.clone()).await;
    api.clear_calls();

    press(&mut app, KeyCode::BackTab);
    type_text(&mut app, "qrS?");
    app.settle().await;

    assert!(!app.should_quit());
    assert!(!app.dialog().is_visible());
    assert_eq!(app.subsystem_manager().input_buffer, "qrS?");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_focus_cycles_and_escape_returns_to_list() {
    let mut app = started_app(FakeApi::new()).await;

    assert_eq!(app.focus(), Focus::ComponentList);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::AddForm);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Subsystems);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::ComponentList);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::ComponentList);
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let mut app = started_app(FakeApi::new()).await;

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    press(&mut app, KeyCode::Char('G'));
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = started_app(FakeApi::new()).await;
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = started_app(FakeApi::new()).await;
    press(&mut app, KeyCode::Tab);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}
