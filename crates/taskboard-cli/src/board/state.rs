/// **Input**: Operation outcomes carrying the store's returned records.
/// **Output**: Mutated BoardState for rendering and follow-up operations.
/// **Position**: State layer - local cache mirroring the remote task store.
/// **Update**: Add draft handling for the create flow.
use taskboard_adapter::Task;

/// Local board state.
///
/// The store is the source of truth; `tasks` is a cache reconciled from the
/// store's returned records, never from locally-guessed values. Each
/// transition below is a whole-value replace or a targeted splice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Cached tasks, store list order with newly created tasks prepended
    pub tasks: Vec<Task>,
    /// Busy flag for the initial load only
    pub pending: bool,
    /// Most recent failure message; replaced, not accumulated
    pub last_error: Option<String>,
    /// Title text pending submission
    pub draft_title: String,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load begins: mark busy and clear any stale failure message.
    pub(crate) fn begin_load(&mut self) {
        self.pending = true;
        self.last_error = None;
    }

    /// Load finished: replace the cache wholesale on success, keep the stale
    /// cache on failure. Busy flag clears either way.
    pub(crate) fn finish_load(&mut self, outcome: Result<Vec<Task>, String>) {
        match outcome {
            Ok(tasks) => self.tasks = tasks,
            Err(message) => self.last_error = Some(message),
        }
        self.pending = false;
    }

    /// Create finished: prepend the store's record and clear the draft.
    pub(crate) fn finish_create(&mut self, outcome: Result<Task, String>) {
        match outcome {
            Ok(task) => {
                self.tasks.insert(0, task);
                self.draft_title.clear();
            }
            Err(message) => self.last_error = Some(message),
        }
    }

    /// Update finished: adopt the store's record wholesale for the matching
    /// id, so any other server-side change to that task comes along too.
    pub(crate) fn finish_update(&mut self, outcome: Result<Task, String>) {
        match outcome {
            Ok(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|entry| entry.id == task.id) {
                    *slot = task;
                }
            }
            Err(message) => self.last_error = Some(message),
        }
    }

    /// Delete finished: splice out the matching id.
    pub(crate) fn finish_delete(&mut self, id: i64, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.tasks.retain(|entry| entry.id != id),
            Err(message) => self.last_error = Some(message),
        }
    }
}
