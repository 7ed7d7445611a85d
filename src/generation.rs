/// Manually advanced generation count. Nothing in the editor ticks it
/// automatically; the only mutation is the explicit advance command
/// bound to the space key. Saturates at u64::MAX rather than wrapping.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    value: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(GenerationCounter::new().value(), 0);
    }

    #[test]
    fn advance_counts_up() {
        let mut counter = GenerationCounter::new();
        for _ in 0..3 {
            counter.advance();
        }
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn saturates_at_max() {
        let mut counter = GenerationCounter { value: u64::MAX };
        counter.advance();
        assert_eq!(counter.value(), u64::MAX);
    }
}
