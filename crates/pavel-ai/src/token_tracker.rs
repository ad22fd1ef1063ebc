//! Token usage tracking for one session, broken down by model tier.

use std::collections::HashMap;

use pavel_common::ModelTier;

use crate::TokenUsage;

/// Tracks cumulative token usage per model tier.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_tier: HashMap<ModelTier, TokenUsage>,
    /// Number of successful generation calls.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful call.
    pub fn record(&mut self, tier: ModelTier, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;

        let entry = self.by_tier.entry(tier).or_default();
        entry.input_tokens = entry.input_tokens.saturating_add(usage.input_tokens);
        entry.output_tokens = entry.output_tokens.saturating_add(usage.output_tokens);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_tier(&self, tier: ModelTier) -> Option<&TokenUsage> {
        self.by_tier.get(&tier)
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn records_per_tier_and_total() {
        let mut tracker = TokenTracker::new();
        tracker.record(ModelTier::Flash, &usage(10, 5));
        tracker.record(ModelTier::Pro, &usage(100, 50));
        tracker.record(ModelTier::Flash, &usage(1, 1));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total_tokens(), 167);
        assert_eq!(tracker.for_tier(ModelTier::Flash), Some(&usage(11, 6)));
        assert_eq!(tracker.for_tier(ModelTier::Pro), Some(&usage(100, 50)));
    }

    #[test]
    fn unused_tier_has_no_entry() {
        let mut tracker = TokenTracker::new();
        tracker.record(ModelTier::Flash, &usage(1, 1));
        assert!(tracker.for_tier(ModelTier::Pro).is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = TokenTracker::new();
        tracker.record(ModelTier::Pro, &usage(3, 4));
        tracker.reset();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
        assert!(tracker.for_tier(ModelTier::Pro).is_none());
    }
}
