use crate::common::{component, FakeApi};
use satdb::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_spawned_operation_reports_back() {
    let api = FakeApi::with_data(vec![component(1, "Battery", 2.5)], Vec::new());
    let (mut manager, mut rx) = TaskManager::new(api);

    let id = manager.spawn("Load components", |api| async move {
        match api.list_components().await {
            Ok(components) => Action::ComponentsLoaded(components),
            Err(e) => Action::ComponentsLoadFailed(e),
        }
    });
    assert_eq!(id, 1);
    assert_eq!(manager.running(), vec!["Load components".to_string()]);

    manager.wait_all().await;
    assert_eq!(manager.task_count(), 0);
    match rx.recv().await {
        Some(Action::ComponentsLoaded(components)) => assert_eq!(components.len(), 1),
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_task_ids_increase_and_cleanup_removes_finished() {
    let (mut manager, mut rx) = TaskManager::new(FakeApi::new());

    let first = manager.spawn("first", |_| async { Action::None });
    let second = manager.spawn("second", |_| async { Action::Quit });
    assert!(second > first);

    rx.recv().await;
    rx.recv().await;
    manager.wait_all().await;
    assert!(manager.cleanup_finished_tasks().is_empty());
    assert_eq!(manager.task_count(), 0);
}
