// ABOUTME: Integration tests for task storage operations
// ABOUTME: Runs the real migrations against an in-memory database

use pretty_assertions::assert_eq;
use tasklist_tasks::{TaskCreateInput, TaskStorage, TaskUpdateInput};

/// Helper to create a migrated in-memory store for testing
async fn create_test_storage() -> TaskStorage {
    let pool = tasklist_storage::connect_in_memory().await.unwrap();
    tasklist_storage::run_migrations(&pool).await.unwrap();
    TaskStorage::new(pool)
}

fn titled(title: &str) -> TaskCreateInput {
    TaskCreateInput {
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_list_empty_store() {
    let storage = create_test_storage().await;

    let tasks = storage.list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_create_task_assigns_id_and_defaults() {
    let storage = create_test_storage().await;

    let task = storage.create_task(titled("Buy milk")).await.unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, None);
    assert_eq!(task.due_date, None);
    assert!(!task.is_completed);
}

#[tokio::test]
async fn test_create_task_with_all_fields() {
    let storage = create_test_storage().await;

    let input = TaskCreateInput {
        title: "File taxes".to_string(),
        description: Some("Before the deadline".to_string()),
        due_date: Some("2026-04-15T17:00".to_string()),
        is_completed: Some(true),
    };

    let task = storage.create_task(input).await.unwrap();

    assert_eq!(task.description.as_deref(), Some("Before the deadline"));
    // Stored verbatim, no parsing or timezone handling
    assert_eq!(task.due_date.as_deref(), Some("2026-04-15T17:00"));
    assert!(task.is_completed);
}

#[tokio::test]
async fn test_created_task_matches_stored_row() {
    let storage = create_test_storage().await;

    let input = TaskCreateInput {
        title: "Call plumber".to_string(),
        description: Some("Kitchen sink".to_string()),
        ..Default::default()
    };
    let created = storage.create_task(input).await.unwrap();
    let stored = storage.get_task(created.id).await.unwrap();

    assert_eq!(stored, Some(created));
}

#[tokio::test]
async fn test_long_title_is_stored_in_full() {
    let storage = create_test_storage().await;
    let title = "x".repeat(1000);

    let created = storage.create_task(titled(&title)).await.unwrap();
    assert_eq!(created.title.len(), 1000);

    let stored = storage.get_task(created.id).await.unwrap().unwrap();
    assert_eq!(stored.title, title);
}

#[tokio::test]
async fn test_create_then_list_contains_task_once() {
    let storage = create_test_storage().await;

    let first = storage.create_task(titled("Walk dog")).await.unwrap();
    let second = storage.create_task(titled("Buy milk")).await.unwrap();

    assert!(second.id > first.id);

    let tasks = storage.list_tasks().await.unwrap();
    let matching: Vec<_> = tasks.iter().filter(|t| t.title == "Buy milk").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, second.id);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let storage = create_test_storage().await;

    for title in &["one", "two", "three"] {
        storage.create_task(titled(title)).await.unwrap();
    }

    let titles: Vec<String> = storage
        .list_tasks()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let storage = create_test_storage().await;

    let first = storage.create_task(titled("first")).await.unwrap();
    storage.delete_task(first.id).await.unwrap();

    let second = storage.create_task(titled("second")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_update_completion_only_touches_that_field() {
    let storage = create_test_storage().await;

    let input = TaskCreateInput {
        title: "Read book".to_string(),
        description: Some("Chapter 3".to_string()),
        due_date: Some("2026-11-01".to_string()),
        is_completed: None,
    };
    let created = storage.create_task(input).await.unwrap();

    let update = TaskUpdateInput {
        is_completed: Some(true),
        ..Default::default()
    };
    let affected = storage.update_task(created.id, update).await.unwrap();
    assert_eq!(affected, 1);

    let updated = storage.get_task(created.id).await.unwrap().unwrap();
    assert!(updated.is_completed);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.due_date, created.due_date);
}

#[tokio::test]
async fn test_update_multiple_fields() {
    let storage = create_test_storage().await;
    let created = storage.create_task(titled("Draft")).await.unwrap();

    let update = TaskUpdateInput {
        title: Some("Final".to_string()),
        description: Some(Some("Reviewed".to_string())),
        due_date: Some(Some("tomorrow".to_string())),
        is_completed: Some(true),
    };
    storage.update_task(created.id, update).await.unwrap();

    let updated = storage.get_task(created.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description.as_deref(), Some("Reviewed"));
    assert_eq!(updated.due_date.as_deref(), Some("tomorrow"));
    assert!(updated.is_completed);
}

#[tokio::test]
async fn test_update_can_clear_nullable_fields() {
    let storage = create_test_storage().await;

    let input = TaskCreateInput {
        title: "Dentist".to_string(),
        description: Some("Checkup".to_string()),
        due_date: Some("2026-12-01".to_string()),
        is_completed: None,
    };
    let created = storage.create_task(input).await.unwrap();

    let update = TaskUpdateInput {
        due_date: Some(None),
        ..Default::default()
    };
    storage.update_task(created.id, update).await.unwrap();

    let updated = storage.get_task(created.id).await.unwrap().unwrap();
    assert_eq!(updated.due_date, None);
    assert_eq!(updated.description.as_deref(), Some("Checkup"));
}

#[tokio::test]
async fn test_update_missing_task_affects_nothing() {
    let storage = create_test_storage().await;
    storage.create_task(titled("existing")).await.unwrap();
    let before = storage.list_tasks().await.unwrap();

    let update = TaskUpdateInput {
        title: Some("x".to_string()),
        ..Default::default()
    };
    let affected = storage.update_task(999, update).await.unwrap();

    assert_eq!(affected, 0);
    assert_eq!(storage.list_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_empty_update_reports_existence() {
    let storage = create_test_storage().await;
    let created = storage.create_task(titled("unchanged")).await.unwrap();

    let affected = storage
        .update_task(created.id, TaskUpdateInput::default())
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let affected = storage
        .update_task(999, TaskUpdateInput::default())
        .await
        .unwrap();
    assert_eq!(affected, 0);

    let task = storage.get_task(created.id).await.unwrap().unwrap();
    assert_eq!(task, created);
}

#[tokio::test]
async fn test_delete_task_is_idempotent() {
    let storage = create_test_storage().await;
    let keep = storage.create_task(titled("keep")).await.unwrap();
    let gone = storage.create_task(titled("gone")).await.unwrap();

    assert_eq!(storage.delete_task(gone.id).await.unwrap(), 1);

    let tasks = storage.list_tasks().await.unwrap();
    assert_eq!(tasks, vec![keep.clone()]);

    // Second delete is a no-op
    assert_eq!(storage.delete_task(gone.id).await.unwrap(), 0);
    assert_eq!(storage.list_tasks().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_delete_missing_task_affects_nothing() {
    let storage = create_test_storage().await;
    storage.create_task(titled("existing")).await.unwrap();

    assert_eq!(storage.delete_task(42).await.unwrap(), 0);
    assert_eq!(storage.list_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_does_not_validate_title() {
    let storage = create_test_storage().await;

    // Required-field checks belong to the API layer
    let task = storage.create_task(titled("")).await.unwrap();
    assert_eq!(task.title, "");
}

#[tokio::test]
async fn test_storage_failure_when_table_missing() {
    let pool = tasklist_storage::connect_in_memory().await.unwrap();
    let storage = TaskStorage::new(pool);

    let result = storage.list_tasks().await;
    assert!(matches!(
        result,
        Err(tasklist_storage::StorageError::Sqlx(_))
    ));
}
