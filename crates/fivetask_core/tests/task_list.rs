use fivetask_core::{HighlightColor, ListError, Priority, TaskList, CAPACITY};
use uuid::Uuid;

#[test]
fn add_inserts_at_head_with_defaults() {
    let mut list = TaskList::new();
    list.add("Write paper").unwrap();

    let tasks = list.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Write paper");
    assert!(!tasks[0].completed);
    assert!(tasks[0].sub_tasks.is_empty());

    list.add("Second").unwrap();
    assert_eq!(list.tasks()[0].text, "Second");
}

#[test]
fn sixth_add_is_rejected_and_list_unchanged() {
    let mut list = TaskList::new();
    for n in 0..CAPACITY {
        list.add(&format!("task {n}")).unwrap();
    }
    assert_eq!(list.len(), 5);

    let before: Vec<Uuid> = list.tasks().iter().map(|t| t.id).collect();
    assert_eq!(list.add("overflow"), Err(ListError::AtCapacity));

    assert_eq!(list.len(), 5);
    let after: Vec<Uuid> = list.tasks().iter().map(|t| t.id).collect();
    assert_eq!(before, after);
}

#[test]
fn empty_text_never_mutates_state() {
    let mut list = TaskList::new();
    assert_eq!(list.add(""), Err(ListError::EmptyText));
    assert_eq!(list.add("   "), Err(ListError::EmptyText));
    assert!(list.is_empty());

    let id = list.add("real").unwrap().id;
    assert_eq!(list.edit(id, ""), Err(ListError::EmptyText));
    assert_eq!(list.tasks()[0].text, "real");
}

#[test]
fn toggle_flips_completed_both_ways() {
    let mut list = TaskList::new();
    let id = list.add("flip me").unwrap().id;

    assert!(list.toggle_complete(id).unwrap().completed);
    assert!(!list.toggle_complete(id).unwrap().completed);

    let missing = Uuid::new_v4();
    assert_eq!(
        list.toggle_complete(missing),
        Err(ListError::TaskNotFound(missing))
    );
}

#[test]
fn delete_then_undo_restores_bit_for_bit() {
    let mut list = TaskList::new();
    let id = list.add("Task A").unwrap().id;
    list.add_sub_task(id, "step 1").unwrap();
    list.add_sub_task(id, "step 2").unwrap();
    let original = list.tasks()[0].clone();

    let removed = list.delete(id).unwrap();
    assert_eq!(removed, original);
    assert!(list.is_empty());
    assert_eq!(list.buffered_deletion(), Some(&original));

    let restored = list.undo().unwrap().clone();
    assert_eq!(restored, original);
    assert_eq!(restored.id, id);
    assert_eq!(restored.sub_tasks.len(), 2);

    assert_eq!(list.undo(), Err(ListError::BufferEmpty));
}

#[test]
fn second_delete_overwrites_the_buffer() {
    let mut list = TaskList::new();
    let first = list.add("first").unwrap().id;
    let second = list.add("second").unwrap().id;

    list.delete(first).unwrap();
    list.delete(second).unwrap();

    assert_eq!(list.buffered_deletion().map(|t| t.id), Some(second));
    assert_eq!(list.undo().unwrap().id, second);
}

#[test]
fn edit_preserves_position_and_other_fields() {
    let mut list = TaskList::new();
    list.add("bottom").unwrap();
    let id = list.add("middle").unwrap().id;
    list.add("top").unwrap();

    let before = list.tasks()[1].clone();
    let edited = list.edit(id, "renamed").unwrap().clone();

    assert_eq!(list.tasks()[1].id, id);
    assert_eq!(edited.text, "renamed");
    assert_eq!(edited.completed, before.completed);
    assert_eq!(edited.created_at, before.created_at);
    assert_eq!(edited.priority, before.priority);
}

#[test]
fn reorder_is_a_pure_permutation() {
    let mut list = TaskList::new();
    for n in 0..5 {
        list.add(&format!("task {n}")).unwrap();
    }
    let mut before: Vec<_> = list.tasks().to_vec();

    assert!(list.reorder(0, 4));

    let moved = before.remove(0);
    before.push(moved);
    assert_eq!(list.tasks(), before.as_slice());
}

#[test]
fn set_attributes_sets_both_independently() {
    let mut list = TaskList::new();
    let id = list.add("decorated").unwrap().id;

    let task = list
        .set_attributes(id, Priority::Urgent, HighlightColor::None)
        .unwrap();
    assert_eq!(task.priority, Priority::Urgent);
    assert_eq!(task.highlight_color, HighlightColor::None);

    let task = list
        .set_attributes(id, Priority::None, HighlightColor::Pink)
        .unwrap();
    assert_eq!(task.priority, Priority::None);
    assert_eq!(task.highlight_color, HighlightColor::Pink);
}

#[test]
fn capacity_scenario_walkthrough() {
    let mut list = TaskList::new();
    list.add("Write paper").unwrap();
    assert_eq!(list.tasks()[0].text, "Write paper");
    assert!(!list.tasks()[0].completed);
    assert!(list.tasks()[0].sub_tasks.is_empty());

    for text in ["two", "three", "four", "five"] {
        list.add(text).unwrap();
    }
    assert_eq!(list.len(), 5);

    assert_eq!(list.add("overflow"), Err(ListError::AtCapacity));
    assert_eq!(list.len(), 5);
}
