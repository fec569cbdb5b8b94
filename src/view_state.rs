//! Which overlay a list page is showing, carried in the query string.
//!
//! A page is either idle, showing the "create" modal, or editing one record
//! inline. Links move between these modes, and the transitions refuse to
//! open one editor on top of another.

use serde::Deserialize;

/// The query parameters that select a [ViewMode].
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// `create` opens the creation modal.
    pub mode: Option<String>,
    /// The ID of the record being edited.
    pub edit: Option<i64>,
}

/// The overlay a list page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Nothing is open.
    #[default]
    Idle,
    /// The create modal is open.
    Creating,
    /// The record with this ID is being edited inline.
    Editing(i64),
}

impl ViewMode {
    /// Read the mode from the query string. A create request wins over an edit.
    pub fn from_query(query: &ViewQuery) -> Self {
        let mut mode = ViewMode::Idle;

        if query.mode.as_deref() == Some("create") {
            mode = mode.open_create();
        }

        if let Some(id) = query.edit {
            mode = mode.begin_edit(id);
        }

        mode
    }

    /// Open the creation modal, unless a record is being edited.
    pub fn open_create(self) -> Self {
        match self {
            ViewMode::Idle | ViewMode::Creating => ViewMode::Creating,
            editing @ ViewMode::Editing(_) => editing,
        }
    }

    /// Start editing the record `id`, unless the creation modal is open.
    pub fn begin_edit(self, id: i64) -> Self {
        match self {
            ViewMode::Idle | ViewMode::Editing(_) => ViewMode::Editing(id),
            ViewMode::Creating => ViewMode::Creating,
        }
    }

    /// Close whatever is open without saving.
    pub fn cancel(self) -> Self {
        ViewMode::Idle
    }

    /// Close whatever is open after a successful save.
    pub fn finish(self) -> Self {
        ViewMode::Idle
    }

    /// Whether the create modal is open.
    pub fn is_creating(self) -> bool {
        self == ViewMode::Creating
    }

    /// The ID of the record being edited, if any.
    pub fn editing_id(self) -> Option<i64> {
        match self {
            ViewMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// The URL of the page at `path` showing this mode.
    pub fn href(self, path: &str) -> String {
        match self {
            ViewMode::Idle => path.to_owned(),
            ViewMode::Creating => format!("{path}?mode=create"),
            ViewMode::Editing(id) => format!("{path}?edit={id}"),
        }
    }
}
