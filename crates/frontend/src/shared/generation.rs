/// Monotonic ticket for async work: only the latest ticket is current.
///
/// Each new keystroke or request calls `next`; a finished timer or response
/// checks `is_current` and is dropped if something newer started meanwhile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }

    /// Invalidate every ticket handed out so far
    pub fn cancel(&mut self) {
        self.0 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_wins() {
        let mut generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_cancel() {
        let mut generation = Generation::default();
        let ticket = generation.next();
        generation.cancel();
        assert!(!generation.is_current(ticket));
    }
}
