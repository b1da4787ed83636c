use std::time::Duration;

/// Identifies one scheduled invocation. Only the latest ticket may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Cancel-and-reschedule bookkeeping for a single pending callback. The
/// timer itself belongs to the caller.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Supersedes any earlier ticket.
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// Returns true exactly once, for the most recent ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }
}
