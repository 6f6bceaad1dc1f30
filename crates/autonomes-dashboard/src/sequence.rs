use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter for refresh paths.
///
/// Each refresh takes a token before it starts; when it completes, its result
/// is applied only if no newer refresh has been issued since.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_supersedes() {
        let sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();

        assert!(second > first);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }
}
