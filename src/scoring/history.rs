//! Snapshot stack for undo

/// Stack of full-state copies; the top is the most recent snapshot.
#[derive(Debug, Clone)]
pub struct HistoryManager<S> {
    snapshots: Vec<S>,
}

impl<S: Clone> HistoryManager<S> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Store an independent copy of `state`
    pub fn push(&mut self, state: &S) {
        self.snapshots.push(state.clone());
    }

    pub fn pop(&mut self) -> Option<S> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<S: Clone> Default for HistoryManager<S> {
    fn default() -> Self {
        Self::new()
    }
}
