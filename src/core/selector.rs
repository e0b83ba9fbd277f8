use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = ">")]
    Greater,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Equal => "==",
            Comparison::Greater => ">",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `value <op> cutoff`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold<V> {
    pub comparison: Comparison,
    pub cutoff: V,
}

impl<V: PartialOrd> Threshold<V> {
    pub fn new(comparison: Comparison, cutoff: V) -> Self {
        Self { comparison, cutoff }
    }

    pub fn below(cutoff: V) -> Self {
        Self::new(Comparison::Less, cutoff)
    }

    pub fn at_most(cutoff: V) -> Self {
        Self::new(Comparison::LessOrEqual, cutoff)
    }

    pub fn equal_to(cutoff: V) -> Self {
        Self::new(Comparison::Equal, cutoff)
    }

    pub fn above(cutoff: V) -> Self {
        Self::new(Comparison::Greater, cutoff)
    }

    pub fn matches(&self, value: &V) -> bool {
        match self.comparison {
            Comparison::Less => *value < self.cutoff,
            Comparison::LessOrEqual => *value <= self.cutoff,
            Comparison::Equal => *value == self.cutoff,
            Comparison::Greater => *value > self.cutoff,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Threshold<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.comparison, self.cutoff)
    }
}

/// Keeps the items accepted by `predicate`, in source order.
pub fn select<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

pub fn select_by<T, V, A>(items: &[T], attribute: A, threshold: &Threshold<V>) -> Vec<T>
where
    T: Clone,
    V: PartialOrd,
    A: Fn(&T) -> &V,
{
    select(items, |item| threshold.matches(attribute(item)))
}

pub fn count_by<T, V, A>(items: &[T], attribute: A, threshold: &Threshold<V>) -> usize
where
    V: PartialOrd,
    A: Fn(&T) -> &V,
{
    items
        .iter()
        .filter(|item| threshold.matches(attribute(item)))
        .count()
}
