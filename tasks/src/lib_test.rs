use super::*;

fn task(id: i64, completed: bool) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        completed,
    }
}

fn numbered(count: i64) -> Vec<Task> {
    (1..=count).map(|id| task(id, false)).collect()
}

// =============================================================
// initial_batch
// =============================================================

#[test]
fn initial_batch_caps_oversized_response() {
    let batch = initial_batch(numbered(35));
    assert_eq!(batch.len(), INITIAL_BATCH_CAP);
}

#[test]
fn initial_batch_preserves_remote_order() {
    let batch = initial_batch(numbered(35));
    let ids: Vec<i64> = batch.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
}

#[test]
fn initial_batch_leaves_short_lists_alone() {
    let batch = initial_batch(numbered(5));
    assert_eq!(batch, numbered(5));
}

#[test]
fn initial_batch_of_empty_is_empty() {
    assert!(initial_batch(Vec::new()).is_empty());
}

// =============================================================
// toggle_completed
// =============================================================

#[test]
fn toggle_flips_only_the_matching_entry() {
    let mut tasks = vec![task(1, false), task(2, false), task(3, true)];
    assert!(toggle_completed(&mut tasks, 2));
    assert!(!tasks[0].completed);
    assert!(tasks[1].completed);
    assert!(tasks[2].completed);
}

#[test]
fn toggle_preserves_order_and_titles() {
    let mut tasks = vec![task(1, false), task(2, false), task(3, true)];
    toggle_completed(&mut tasks, 2);
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(tasks[1].title, "task 2");
}

#[test]
fn toggle_missing_id_leaves_list_unchanged() {
    let mut tasks = vec![task(1, false), task(2, true)];
    let snapshot = tasks.clone();
    assert!(!toggle_completed(&mut tasks, 99));
    assert_eq!(tasks, snapshot);
}

#[test]
fn toggle_twice_restores_original_flag() {
    let mut tasks = vec![task(7, false)];
    toggle_completed(&mut tasks, 7);
    toggle_completed(&mut tasks, 7);
    assert!(!tasks[0].completed);
}

// =============================================================
// remove_task
// =============================================================

#[test]
fn remove_shrinks_list_by_exactly_one() {
    let mut tasks = numbered(4);
    assert!(remove_task(&mut tasks, 3));
    assert_eq!(tasks.len(), 3);
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn remove_missing_id_is_a_no_op() {
    let mut tasks = numbered(4);
    let snapshot = tasks.clone();
    assert!(!remove_task(&mut tasks, 99));
    assert_eq!(tasks, snapshot);
}

#[test]
fn remove_from_empty_list_is_a_no_op() {
    let mut tasks = Vec::new();
    assert!(!remove_task(&mut tasks, 1));
    assert!(tasks.is_empty());
}

// =============================================================
// stats_for
// =============================================================

#[test]
fn stats_for_empty_list_is_all_zero() {
    assert_eq!(stats_for(&[]), Stats::default());
}

#[test]
fn stats_counts_completed_and_pending() {
    let tasks = vec![task(1, true), task(2, false), task(3, true)];
    let stats = stats_for(&tasks);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.pending, 1);
}

#[test]
fn stats_total_is_completed_plus_pending() {
    for completed_count in 0..=4_i64 {
        let tasks: Vec<Task> = (1..=4).map(|id| task(id, id <= completed_count)).collect();
        let stats = stats_for(&tasks);
        assert_eq!(stats.total, stats.completed + stats.pending);
    }
}

// =============================================================
// serde (remote schema + storage shape)
// =============================================================

#[test]
fn deserialize_drops_unknown_remote_fields() {
    let payload = r#"[{"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}]"#;
    let tasks: Vec<Task> = serde_json::from_str(payload).unwrap();
    assert_eq!(tasks, vec![Task {
        id: 1,
        title: "delectus aut autem".to_owned(),
        completed: false,
    }]);
}

#[test]
fn storage_shape_round_trips() {
    let tasks = vec![task(1, true), task(2, false)];
    let raw = serde_json::to_string(&tasks).unwrap();
    let back: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, tasks);
}

#[test]
fn markup_in_titles_is_preserved_as_data() {
    let tasks = vec![Task {
        id: 9,
        title: "<script>alert('x')</script>".to_owned(),
        completed: false,
    }];
    let raw = serde_json::to_string(&tasks).unwrap();
    let back: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back[0].title, "<script>alert('x')</script>");
}
