// "Latest wins" bookkeeping for one kind of asynchronous action.

/// Identifies one issued request of an action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter. Issuing a new ticket supersedes every earlier one; the
/// superseded requests keep running but their completions are rejected.
#[derive(Debug, Default)]
pub struct Latest {
    generation: u64,
    pending: bool,
}

impl Latest {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// Rejects any ticket issued so far without starting a new request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    /// Accepts a completion at most once, and only for the newest ticket.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if !self.pending || ticket.0 != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
