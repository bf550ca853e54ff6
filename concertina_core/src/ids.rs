// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id generation for containers that carry no `id`.
//!
//! Ids are produced by a caller-supplied [`IdGenerator`], so two controllers
//! (or two tests) never share a counter.

use alloc::format;
use alloc::string::String;

/// Produces fresh element ids.
pub trait IdGenerator {
    /// Returns an id for an accordion container that has none.
    fn accordion_id(&mut self) -> String;
}

/// Counter-based ids: `acc-1`, `acc-2`, …
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("acc")
    }
}

impl SequentialIds {
    /// Creates a generator whose ids start with `prefix`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: String::from(prefix),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn accordion_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.accordion_id(), "acc-1");
        assert_eq!(ids.accordion_id(), "acc-2");

        let mut faq = SequentialIds::new("faq");
        assert_eq!(faq.accordion_id(), "faq-1");
    }
}
