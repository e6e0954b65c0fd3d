//! Inline-edit state for a single row of the list.
//!
//! A row is either viewing or editing. Entering edit mode seeds the buffer with
//! the current name; submitting an empty or unchanged buffer closes the editor
//! without a request. Whatever the outcome of a save, the editor closes and the
//! buffer is discarded.

/// What submitting the edit buffer should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveAction {
    /// Close the editor, no request.
    Cancel,
    /// Send a rename with the new name.
    Save(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowEditor {
    editing: bool,
    buffer: String,
    busy: bool,
}

impl RowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether a request for this row is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// `viewing -> editing`, seeding the buffer with `current_name`. Ignored
    /// while a delete is in flight.
    pub fn begin(&mut self, current_name: &str) {
        if self.busy {
            return;
        }
        self.editing = true;
        self.buffer = current_name.to_string();
    }

    pub fn set_buffer(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Decide what a submit does. A `Save` marks the row busy until
    /// [`finish`](Self::finish); a submit while busy is a no-op cancel.
    pub fn submit(&mut self, current_name: &str) -> SaveAction {
        if self.busy || self.buffer.is_empty() || self.buffer == current_name {
            return SaveAction::Cancel;
        }
        self.busy = true;
        SaveAction::Save(self.buffer.clone())
    }

    /// Mark the row busy for a delete. Returns `false` if something is already
    /// in flight.
    pub fn start_request(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Back to viewing: after a save (either outcome), a cancel, or a delete.
    pub fn finish(&mut self) {
        self.editing = false;
        self.buffer.clear();
        self.busy = false;
    }
}
