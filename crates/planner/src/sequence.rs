//! Monotonic request sequencing.
//!
//! Responses may arrive in any order. Each guarded field owns a
//! [`RequestSequence`]; every request takes a [`Ticket`] and every direct
//! edit bumps the sequence, so a response is applied only while its ticket
//! is still the newest thing that happened to the field.

/// Proof of issue order for one request against one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Per-field monotonic counter.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a ticket for a new request; older tickets become stale.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Records a direct write to the field; every outstanding ticket becomes stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// True if nothing newer than `ticket` has touched the field.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_invalidate_stales_outstanding_tickets() {
        let mut seq = RequestSequence::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }
}
