use std::cell::Cell;
use std::rc::Rc;

/// Cancellation flag tied to a view's lifetime.
///
/// Network-bound operations launched from a component hold a clone of the
/// token created on mount; the component cancels it in its effect cleanup.
/// Every state-mutating continuation checks the token before writing, so a
/// response arriving after navigation can no longer touch a dead view's
/// state.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_cancellation() {
        let token = CancelToken::new();
        let seen_by_task = token.clone();
        assert!(!seen_by_task.is_cancelled());

        token.cancel();
        assert!(seen_by_task.is_cancelled());
    }
}
