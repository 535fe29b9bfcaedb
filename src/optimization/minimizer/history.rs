//! Bounded curvature history for L-BFGS.
//!
//! A [`History`] keeps at most `m` [`HistoryEntry`] triples `(s, y, ρ)`,
//! oldest first, and evicts the oldest entry when a new one arrives at
//! capacity. Entries are only built through [`HistoryEntry::new`], which
//! enforces the curvature condition `yᵗs > CURVATURE_EPS`; an entry that
//! fails it never exists, so every stored `ρ` is finite and positive and
//! the implicit inverse-Hessian stays positive definite.
use std::collections::VecDeque;

use crate::optimization::minimizer::{Grad, Theta, types::CURVATURE_EPS};

/// One curvature pair: `s = θₖ₊₁ − θₖ`, `y = gₖ₊₁ − gₖ`, `ρ = 1 / (yᵗs)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    s: Theta,
    y: Grad,
    rho: f64,
}

impl HistoryEntry {
    /// Build an entry if the pair satisfies the curvature condition.
    ///
    /// Returns `None` when `yᵗs <= CURVATURE_EPS` (including NaN), in which
    /// case the update is meant to be skipped.
    pub fn new(s: Theta, y: Grad) -> Option<Self> {
        let sy = s.dot(&y);
        if sy > CURVATURE_EPS { Some(Self { s, y, rho: 1.0 / sy }) } else { None }
    }

    pub fn s(&self) -> &Theta {
        &self.s
    }

    pub fn y(&self) -> &Grad {
        &self.y
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }
}

/// FIFO buffer of the most recent admissible curvature pairs.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    /// Empty history holding at most `capacity` entries.
    ///
    /// A zero capacity is rejected upstream by `LbfgsOptions::validate`;
    /// here it degenerates to a buffer that never stores anything.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `entry`, evicting the oldest one first when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries ordered oldest → newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Most recently admitted entry.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
