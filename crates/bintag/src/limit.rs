//! Decode-time resource limits.
//!
//! A hostile byte stream can claim absurd element counts or nest containers
//! without bound. The [`Limiter`] charges every discovered element against a
//! caller-supplied budget and tracks container depth, so a decode aborts
//! deterministically before a claimed length is ever turned into an
//! allocation.

use crate::error::TagError;

/// Caller-supplied decode limits.
///
/// The unlimited configuration is an explicit constructor rather than a
/// magic large constant, and is intended for trusted local round-trips
/// only. Every decode of untrusted input should set both maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Total decoded element budget across the whole decode.
    pub max_elements: Option<u64>,
    /// Container nesting budget.
    pub max_depth: Option<u32>,
}

impl Limits {
    /// Limits with both maxima set.
    pub fn new(max_elements: u64, max_depth: u32) -> Self {
        Self {
            max_elements: Some(max_elements),
            max_depth: Some(max_depth),
        }
    }

    /// No limits. For trusted input only.
    pub fn unlimited() -> Self {
        Self {
            max_elements: None,
            max_depth: None,
        }
    }
}

/// Running decode counters checked against a [`Limits`].
///
/// One limiter is created per decode call and discarded afterwards; it is
/// never shared between decodes.
#[derive(Debug)]
pub struct Limiter {
    limits: Limits,
    elements: u64,
    depth: u32,
}

impl Limiter {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            elements: 0,
            depth: 0,
        }
    }

    /// Records entry into a compound or list body.
    pub fn enter_container(&mut self) -> Result<(), TagError> {
        self.depth += 1;
        if let Some(max) = self.limits.max_depth {
            if self.depth > max {
                return Err(TagError::DepthExceeded {
                    depth: self.depth,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Records leaving a compound or list body.
    pub fn exit_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Charges `n` elements against the budget. Called at the point an
    /// element (or a claimed element count) is discovered, before any
    /// buffer sized by that count is materialized.
    pub fn count_elements(&mut self, n: u64) -> Result<(), TagError> {
        self.elements = self.elements.checked_add(n).unwrap_or(u64::MAX);
        if let Some(max) = self.limits.max_elements {
            if self.elements > max {
                return Err(TagError::ElementBudgetExceeded {
                    count: self.elements,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Elements charged so far.
    pub fn elements(&self) -> u64 {
        self.elements
    }

    /// Current nesting depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_rejects() {
        let mut limiter = Limiter::new(Limits::unlimited());
        assert!(limiter.count_elements(u64::MAX).is_ok());
        assert!(limiter.count_elements(u64::MAX).is_ok()); // saturates, no overflow
        for _ in 0..10_000 {
            assert!(limiter.enter_container().is_ok());
        }
    }

    #[test]
    fn element_budget_rejects_at_boundary() {
        let mut limiter = Limiter::new(Limits::new(3, 10));
        assert!(limiter.count_elements(3).is_ok());
        let err = limiter.count_elements(1).unwrap_err();
        assert_eq!(err, TagError::ElementBudgetExceeded { count: 4, max: 3 });
    }

    #[test]
    fn element_budget_rejects_huge_claim_at_once() {
        let mut limiter = Limiter::new(Limits::new(100, 10));
        let err = limiter.count_elements(u64::MAX).unwrap_err();
        assert!(matches!(err, TagError::ElementBudgetExceeded { .. }));
    }

    #[test]
    fn depth_rejects_past_max() {
        let mut limiter = Limiter::new(Limits::new(100, 2));
        assert!(limiter.enter_container().is_ok());
        assert!(limiter.enter_container().is_ok());
        let err = limiter.enter_container().unwrap_err();
        assert_eq!(err, TagError::DepthExceeded { depth: 3, max: 2 });
    }

    #[test]
    fn exit_restores_depth() {
        let mut limiter = Limiter::new(Limits::new(100, 1));
        assert!(limiter.enter_container().is_ok());
        limiter.exit_container();
        assert!(limiter.enter_container().is_ok());
        assert_eq!(limiter.depth(), 1);
    }

    #[test]
    fn counters_accumulate() {
        let mut limiter = Limiter::new(Limits::new(10, 10));
        limiter.count_elements(2).unwrap();
        limiter.count_elements(3).unwrap();
        assert_eq!(limiter.elements(), 5);
    }
}
