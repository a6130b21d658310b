//! Aggregate response shapes (`<Table>Aggregate`, `<Table>AggregateFields`).

use serde::{Deserialize, Serialize};

/// Wrapper for a selected `<table>Aggregate { aggregate { ... } }` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate<A> {
    pub aggregate: Option<A>,
}

impl<A> Default for Aggregate<A> {
    fn default() -> Self {
        Self { aggregate: None }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountAggregate {
    pub count: i64,
}

impl Aggregate<CountAggregate> {
    /// Row count; an absent aggregate counts as zero.
    pub fn count(&self) -> i64 {
        self.aggregate.map(|a| a.count).unwrap_or(0)
    }
}

/// `aggregate { count sum { <column> } }` where only the sum of one set of
/// columns is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountAndSum<S> {
    pub count: i64,
    pub sum: Option<S>,
}

impl<S> Aggregate<CountAndSum<S>> {
    pub fn count(&self) -> i64 {
        self.aggregate.as_ref().map(|a| a.count).unwrap_or(0)
    }

    pub fn sum(&self) -> Option<&S> {
        self.aggregate.as_ref().and_then(|a| a.sum.as_ref())
    }
}
