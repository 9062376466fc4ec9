use super::*;
use crate::{ArtworkFrame, Photo};

fn photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        source: format!("https://cdn.example/{id}.jpg"),
        alt: id.to_string(),
        aspect_tag: String::new(),
        album: "Test".to_string(),
    }
}

fn comp(ids: &[&str]) -> Composition {
    Composition::from_frames(
        ids.iter()
            .map(|id| ArtworkFrame::new(*id, photo(id)))
            .collect(),
    )
}

#[test]
fn undo_then_redo_restores_the_exact_value() {
    let mut history = EditHistory::new(comp(&["a"]));
    let second = comp(&["a", "b"]);
    history.commit(second.clone());
    assert!(history.undo());
    assert_eq!(history.current(), &comp(&["a"]));
    assert!(history.redo());
    assert_eq!(history.current(), &second);
}

#[test]
fn undo_at_the_oldest_entry_is_a_no_op() {
    let mut history = EditHistory::new(comp(&["a"]));
    assert!(!history.undo());
    assert_eq!(history.current(), &comp(&["a"]));
}

#[test]
fn redo_at_the_newest_entry_is_a_no_op() {
    let mut history = EditHistory::new(comp(&["a"]));
    history.commit(comp(&["a", "b"]));
    assert!(!history.redo());
    assert_eq!(history.cursor(), 1);
}

#[test]
fn committing_from_a_non_tip_cursor_discards_the_redo_tail() {
    let mut history = EditHistory::new(comp(&[]));
    history.commit(comp(&["a"]));
    history.commit(comp(&["a", "b"]));
    history.undo();
    history.undo();
    history.commit(comp(&["c"]));
    assert_eq!(history.depth(), 2);
    assert_eq!(history.current(), &comp(&["c"]));
    assert!(!history.redo());
}

#[test]
fn transient_commits_never_grow_the_history() {
    let mut history = EditHistory::new(comp(&["a"]));
    for i in 0..200 {
        let mut c = comp(&["a"]);
        c.frames[0].scale = 0.2 + (i as f64) * 0.01;
        history.commit_transient(c);
    }
    assert_eq!(history.depth(), 1);
    assert_eq!(history.cursor(), 0);
    // The transient value is visible but not undoable.
    assert!(!history.can_undo());
}

#[test]
fn transient_then_commit_is_one_undoable_step() {
    let mut history = EditHistory::new(comp(&["a"]));
    let mut c = comp(&["a"]);
    c.frames[0].scale = 1.5;
    history.commit_transient(c.clone());
    history.commit(c.clone());
    assert_eq!(history.depth(), 2);
    assert!(history.undo());
    // The transient overwrote the seed snapshot in place.
    assert_eq!(history.current(), &c);
}

#[test]
fn edit_transient_mutates_the_cursor_snapshot_in_place() {
    let mut history = EditHistory::new(comp(&["a"]));
    history.edit_transient(|c| {
        c.frames[0].rotation_deg = 15.0;
    });
    assert_eq!(history.depth(), 1);
    assert_eq!(history.current().frames[0].rotation_deg, 15.0);
}

#[test]
fn capacity_eviction_keeps_the_cursor_on_the_same_logical_entry() {
    // Seed plus 51 discrete commits: the seed and the 1st commit are
    // evicted, 50 snapshots remain, the cursor sits at the newest.
    let mut history = EditHistory::new(comp(&[]));
    for i in 1..=51 {
        let mut c = comp(&["a"]);
        c.frames[0].rotation_deg = f64::from(i);
        history.commit(c);
    }
    assert_eq!(history.depth(), HISTORY_CAPACITY);
    assert_eq!(history.cursor(), HISTORY_CAPACITY - 1);
    assert_eq!(history.current().frames[0].rotation_deg, 51.0);

    let mut undos = 0;
    while history.undo() {
        undos += 1;
    }
    assert_eq!(undos, HISTORY_CAPACITY - 1);
    // The oldest surviving snapshot is the 2nd commit; the 1st was evicted.
    assert_eq!(history.current().frames[0].rotation_deg, 2.0);
}

#[test]
fn empty_compositions_are_legal_history_entries() {
    let mut history = EditHistory::new(comp(&["a"]));
    history.commit(comp(&[]));
    assert!(history.current().is_empty());
    assert!(history.undo());
    assert_eq!(history.current().len(), 1);
}
