use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::expression::compile::{CompiledExpression, compile};

/// Where the sampler gets compiled expressions from.
pub trait ExpressionSource {
    /// Compiled form of `text`.
    fn compiled(&mut self, text: &str) -> Arc<CompiledExpression>;
}

/// Compiles every request afresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncached;

impl ExpressionSource for Uncached {
    fn compiled(&mut self, text: &str) -> Arc<CompiledExpression> {
        Arc::new(compile(text))
    }
}

/// Memoizes compilation by exact expression text.
///
/// Compiled expressions never change, so the only invalidation is eviction: once `capacity`
/// entries are held, the oldest insertion is dropped.
#[derive(Debug, Clone)]
pub struct ExpressionCache {
    capacity: usize,
    entries: HashMap<String, Arc<CompiledExpression>>,
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
}

impl ExpressionCache {
    /// Create a cache holding at most `capacity` expressions (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Number of cached expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when `text` is cached.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to compile.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry (counters are kept).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl ExpressionSource for ExpressionCache {
    fn compiled(&mut self, text: &str) -> Arc<CompiledExpression> {
        if let Some(hit) = self.entries.get(text) {
            self.hits += 1;
            return Arc::clone(hit);
        }
        self.misses += 1;
        tracing::debug!(expression = text, "compiling expression");

        let compiled = Arc::new(compile(text));
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.entries.insert(text.to_owned(), Arc::clone(&compiled));
        self.order.push_back(text.to_owned());
        compiled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/cache.rs"]
mod tests;
