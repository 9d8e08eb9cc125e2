//! Units of work measured by the harness.
//!
//! A [`Producer`] knows how to build its output either into a fresh vector or
//! into one the caller already owns. The strategies in [`crate::strategy`]
//! decide which of the two is used and who owns the container.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub type Item = i32;

pub trait Producer {
    /// Appends the output to `out`. Callers that need a clean result clear first.
    fn produce_into(&self, out: &mut Vec<Item>);

    /// Number of items one unit of work yields.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// By-value construction: a new container per call.
    #[inline]
    fn produce(&self) -> Vec<Item> {
        let mut out = Vec::new();
        self.produce_into(&mut out);
        out
    }

    /// By-reference reuse: clears `out` and refills it in place.
    #[inline]
    fn refill(&self, out: &mut Vec<Item>) {
        out.clear();
        self.produce_into(out);
    }

    /// Output every strategy has to agree on.
    fn expected(&self) -> Vec<Item>;

    fn describe(&self) -> String;
}

/// `0..items` in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub items: usize,
}

impl Sequence {
    pub fn new(items: usize) -> Self {
        Self { items }
    }
}

impl Producer for Sequence {
    #[inline]
    fn produce_into(&self, out: &mut Vec<Item>) {
        for i in 0..self.items as Item {
            out.push(i);
        }
    }

    fn len(&self) -> usize {
        self.items
    }

    fn expected(&self) -> Vec<Item> {
        (0..self.items as Item).collect()
    }

    fn describe(&self) -> String {
        format!("sequence of {} items", self.items)
    }
}

/// Even-valued entries of an ordered map, sorted ascending.
#[derive(Debug, Clone, Copy)]
pub struct EvenValues<'a> {
    table: &'a BTreeMap<Item, Item>,
}

impl<'a> EvenValues<'a> {
    pub fn new(table: &'a BTreeMap<Item, Item>) -> Self {
        Self { table }
    }

    /// Filters the shared 20-entry sample table.
    pub fn sample() -> EvenValues<'static> {
        EvenValues { table: &SAMPLE_TABLE }
    }
}

impl Producer for EvenValues<'_> {
    #[inline]
    fn produce_into(&self, out: &mut Vec<Item>) {
        for value in self.table.values() {
            if value % 2 == 0 {
                out.push(*value);
            }
        }
        // Map order is by key; the values still need sorting.
        out.sort_unstable();
    }

    fn len(&self) -> usize {
        self.table.values().filter(|value| *value % 2 == 0).count()
    }

    fn expected(&self) -> Vec<Item> {
        let mut values: Vec<Item> = self.table.values().copied().filter(|value| value % 2 == 0).collect();
        values.sort_unstable();
        values
    }

    fn describe(&self) -> String {
        format!("even values of a {}-entry table", self.table.len())
    }
}

/// `{1: 0, 2: 1, ..., 20: 19}`
pub static SAMPLE_TABLE: Lazy<BTreeMap<Item, Item>> = Lazy::new(|| (1..=20).map(|key| (key, key - 1)).collect());
