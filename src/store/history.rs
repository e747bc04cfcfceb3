use super::ledger::Ledger;

/// Holds the live ledger snapshot plus bounded undo/redo stacks of earlier ones.
#[derive(Debug)]
pub struct LedgerStore {
    current: Ledger,
    undo: Vec<Ledger>,
    redo: Vec<Ledger>,
    limit: usize,
}

impl LedgerStore {
    pub fn new(initial: Ledger, limit: usize) -> Self {
        Self {
            current: initial,
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    pub fn snapshot(&self) -> &Ledger {
        &self.current
    }

    /// Replace the live snapshot with `f(current)`. Returns `false` and records
    /// nothing when the result equals the current snapshot.
    pub fn apply(&mut self, f: impl FnOnce(&Ledger) -> Ledger) -> bool {
        let next = f(&self.current);
        if next == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, next);
        if self.limit > 0 {
            self.undo.push(previous);
            if self.undo.len() > self.limit {
                self.undo.remove(0);
            }
        }
        self.redo.clear();
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                let undone = std::mem::replace(&mut self.current, previous);
                self.redo.push(undone);
                tracing::info!(remaining = self.undo.len(), "ledger change undone");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let previous = std::mem::replace(&mut self.current, next);
                self.undo.push(previous);
                tracing::info!(remaining = self.redo.len(), "ledger change redone");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
