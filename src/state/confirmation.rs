use std::cell::Cell;

/// Generation counter for confirmation auto-hide timers.
///
/// Every submission arms the gate; a timer only acts if its ticket is still the latest.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    generation: Cell<u64>,
}

impl ConfirmationGate {
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Invalidates any pending timer.
    pub fn disarm(&self) {
        self.arm();
    }
}
