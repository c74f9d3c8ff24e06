//! Behavioural integration tests for [`InMemoryTaskRepository`].
//!
//! These tests exercise the in-memory repository in realistic task board
//! flows, verifying that it implements the repository contract: identifier
//! assignment, collaborator resolution, idempotent deletion, and pagination
//! windows.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::NaiveDate;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        Member, MemberId, NewTask, PageRequest, Project, ProjectId, TaskChanges, TaskId,
        TaskPriority, TaskStatus, TaskTitle, page_count,
    },
    ports::{TaskRepository, TaskRepositoryError},
};

const APOLLO: ProjectId = ProjectId::new(1);
const HERMES: ProjectId = ProjectId::new(2);

fn board() -> InMemoryTaskRepository {
    InMemoryTaskRepository::with_collaborators(
        [
            Project {
                id: APOLLO,
                name: "Apollo".to_owned(),
            },
            Project {
                id: HERMES,
                name: "Hermes".to_owned(),
            },
        ],
        [Member {
            id: MemberId::new(1),
            name: "alice".to_owned(),
        }],
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn new_task(title: &str, project: ProjectId) -> NewTask {
    NewTask {
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        priority: TaskPriority::Medium,
        status: TaskStatus::ToDo,
        created_on: date(2026, 8, 1),
        due_on: date(2026, 9, 1),
        project,
        assignee: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn assigns_sequential_ids_and_resolves_collaborators() {
    let repository = board();

    let first = repository
        .create(&new_task("First", APOLLO))
        .await
        .expect("create should succeed");
    let second = repository
        .create(&NewTask {
            assignee: Some(MemberId::new(1)),
            ..new_task("Second", APOLLO)
        })
        .await
        .expect("create should succeed");
    assert!(first < second);

    let fetched = repository
        .find_by_id(second)
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.title.as_str(), "Second");
    assert_eq!(fetched.project.name, "Apollo");
    assert_eq!(
        fetched.assignee.map(|member| member.name),
        Some("alice".to_owned())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_collaborators() {
    let repository = board();

    let orphan = repository
        .create(&new_task("Orphan", ProjectId::new(9)))
        .await;
    assert!(matches!(orphan, Err(TaskRepositoryError::UnknownProject(_))));

    let unassignable = repository
        .create(&NewTask {
            assignee: Some(MemberId::new(9)),
            ..new_task("Unassignable", APOLLO)
        })
        .await;
    assert!(matches!(
        unassignable,
        Err(TaskRepositoryError::UnknownMember(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn page_concatenation_reproduces_the_project_task_set() {
    let repository = board();

    // Interleave a second project so windows must filter, not just slice.
    for index in 1..=12 {
        repository
            .create(&new_task(&format!("Apollo {index}"), APOLLO))
            .await
            .expect("create should succeed");
        if index % 3 == 0 {
            repository
                .create(&new_task(&format!("Hermes {index}"), HERMES))
                .await
                .expect("create should succeed");
        }
    }

    let total = repository
        .count_for_project(APOLLO)
        .await
        .expect("count should succeed");
    assert_eq!(total, 12);
    let pages = page_count(total, 5).expect("page count should succeed");
    assert_eq!(pages, 3);

    let mut collected: Vec<TaskId> = Vec::new();
    for page in 1..=u32::try_from(pages).expect("page count fits u32") {
        let window = PageRequest::new(page, 5).expect("valid window");
        let tasks = repository
            .list_for_project(APOLLO, window)
            .await
            .expect("listing should succeed");
        assert!(tasks.len() <= 5);
        collected.extend(tasks.iter().map(|task| task.id));
    }

    let full_set: Vec<TaskId> = repository
        .list_all()
        .await
        .expect("listing should succeed")
        .iter()
        .filter(|task| task.project.id == APOLLO)
        .map(|task| task.id)
        .collect();

    assert_eq!(collected, full_set);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_rewrites_only_the_mutable_fields() {
    let repository = board();
    let id = repository
        .create(&new_task("Before", APOLLO))
        .await
        .expect("create should succeed");

    let changes = TaskChanges {
        title: TaskTitle::new("After").expect("valid title"),
        description: Some("now described".to_owned()),
        priority: TaskPriority::High,
        due_on: date(2026, 10, 15),
        assignee: Some(MemberId::new(1)),
    };
    repository
        .update(id, &changes)
        .await
        .expect("update should succeed");

    let fetched = repository
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.title.as_str(), "After");
    assert_eq!(fetched.description.as_deref(), Some("now described"));
    assert_eq!(fetched.priority, TaskPriority::High);
    assert_eq!(fetched.due_on, date(2026, 10, 15));
    // Untouched by updates.
    assert_eq!(fetched.status, TaskStatus::ToDo);
    assert_eq!(fetched.created_on, date(2026, 8, 1));
    assert_eq!(fetched.project.id, APOLLO);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_reports_not_found_for_unknown_id() {
    let repository = board();

    let changes = TaskChanges {
        title: TaskTitle::new("Ghost").expect("valid title"),
        description: None,
        priority: TaskPriority::Low,
        due_on: date(2026, 10, 15),
        assignee: None,
    };
    let result = repository.update(TaskId::new(404), &changes).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent_and_leaves_other_rows() {
    let repository = board();
    let keep = repository
        .create(&new_task("Keep", APOLLO))
        .await
        .expect("create should succeed");
    let remove = repository
        .create(&new_task("Remove", APOLLO))
        .await
        .expect("create should succeed");

    repository
        .delete(remove)
        .await
        .expect("delete should succeed");
    repository
        .delete(remove)
        .await
        .expect("repeated delete should succeed");
    repository
        .delete(TaskId::new(404))
        .await
        .expect("deleting an unknown id should succeed");

    let remaining = repository.list_all().await.expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.first().map(|task| task.id), Some(keep));
}
