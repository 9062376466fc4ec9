use std::collections::VecDeque;

use crate::composition::model::Composition;

/// Maximum number of snapshots retained; the oldest entry is evicted when a
/// commit would exceed it.
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded, cursor-addressed stack of composition snapshots.
///
/// The store is a state machine over `(snapshots, cursor)` with the
/// invariant `0 <= cursor < snapshots.len() <= 50`. Undo and redo only move
/// the cursor; committing from a non-tip cursor discards the redoable tail.
///
/// Continuous gestures (drag, slider) must not flood the history:
/// [`EditHistory::commit_transient`] overwrites the current snapshot in
/// place, and exactly one [`EditHistory::commit`] per discrete gesture makes
/// the whole interaction a single undoable step.
#[derive(Clone, Debug)]
pub struct EditHistory {
    snapshots: VecDeque<Composition>,
    cursor: usize,
}

impl EditHistory {
    /// Seed a one-entry history with the initial composition.
    pub fn new(initial: Composition) -> Self {
        let mut snapshots = VecDeque::with_capacity(HISTORY_CAPACITY);
        snapshots.push_back(initial);
        Self {
            snapshots,
            cursor: 0,
        }
    }

    /// Append a new undoable snapshot.
    ///
    /// Takes the composition by value: ownership transfer guarantees the
    /// stored snapshot never aliases the caller's in-progress state, which
    /// is what the deep-copy-per-commit rule exists for. Any redoable
    /// entries past the cursor are discarded, and the oldest snapshot is
    /// evicted once the store is full.
    pub fn commit(&mut self, composition: Composition) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(composition);
        self.cursor = self.snapshots.len() - 1;
        if self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.pop_front();
            self.cursor -= 1;
        }
    }

    /// Overwrite the current snapshot in place, without creating a history
    /// entry.
    ///
    /// Used for the transient phase of continuous gestures; the value is
    /// not independently undoable until a subsequent [`EditHistory::commit`]
    /// of the final state.
    pub fn commit_transient(&mut self, composition: Composition) {
        self.snapshots[self.cursor] = composition;
    }

    /// In-place variant of [`EditHistory::commit_transient`] for
    /// high-frequency gestures: mutates the current snapshot directly, with
    /// no clone and no allocation proportional to frame count.
    pub fn edit_transient(&mut self, edit: impl FnOnce(&mut Composition)) {
        edit(&mut self.snapshots[self.cursor]);
    }

    /// Step the cursor back one snapshot; no-op at the oldest entry.
    /// Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward one snapshot; no-op at the newest entry.
    /// Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// The composition at the cursor. The visualizer always renders from
    /// this view.
    pub fn current(&self) -> &Composition {
        &self.snapshots[self.cursor]
    }

    /// Whether an undo would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots; always at least 1 (the seed).
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Current cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/store.rs"]
mod tests;
