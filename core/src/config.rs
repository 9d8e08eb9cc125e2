//! Benchmark parameters.
//!
//! Defaults reproduce the stock programs exactly; a TOML file may override any
//! subset of them.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use crate::workload::Item;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub compare: CompareConfig,
    pub items: ItemSweepConfig,
    pub multiplier: MultiplierSweepConfig,
    pub runtime: MultiplierSweepConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    pub repetitions: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self { repetitions: 10_000_000 }
    }
}

/// Fixed repetition count, growing item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemSweepConfig {
    pub start: usize,
    pub end: usize,
    pub step: usize,
    pub repetitions: u64,
}

impl Default for ItemSweepConfig {
    fn default() -> Self {
        Self {
            start: 1_000,
            end: 10_000,
            step: 1_000,
            repetitions: 1_000_000,
        }
    }
}

impl ItemSweepConfig {
    /// Item counts from `start` to `end` inclusive.
    pub fn item_counts(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start..=self.end).step_by(self.step.max(1))
    }
}

/// Fixed item count, repetitions = `base_repetitions * multiplier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultiplierSweepConfig {
    pub start: u64,
    pub end: u64,
    pub step: u64,
    pub base_repetitions: u64,
    pub items: usize,
}

impl Default for MultiplierSweepConfig {
    fn default() -> Self {
        Self {
            start: 10,
            end: 100,
            step: 10,
            base_repetitions: 1_000_000,
            items: 1,
        }
    }
}

impl MultiplierSweepConfig {
    pub fn multipliers(&self) -> impl Iterator<Item = u64> + '_ {
        (self.start..=self.end).step_by(self.step.max(1) as usize)
    }

    pub fn repetitions(&self) -> impl Iterator<Item = u64> + '_ {
        self.multipliers()
            .map(move |multiplier| self.base_repetitions.saturating_mul(multiplier))
    }
}

impl BenchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(raw).context("parse benchmark config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("load config {}", path.display()))
    }

    /// Replaces the comparison repetitions and every sweep's base repetitions.
    pub fn with_repetitions(mut self, repetitions: u64) -> Result<Self> {
        self.compare.repetitions = repetitions;
        self.items.repetitions = repetitions;
        self.multiplier.base_repetitions = repetitions;
        self.runtime.base_repetitions = repetitions;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.compare.repetitions == 0 {
            bail!("compare.repetitions must be positive");
        }
        check_range("items", self.items.start as u64, self.items.end as u64, self.items.step as u64)?;
        check_item_count("items.end", self.items.end)?;
        if self.items.repetitions == 0 {
            bail!("items.repetitions must be positive");
        }
        for (name, sweep) in [("multiplier", &self.multiplier), ("runtime", &self.runtime)] {
            check_range(name, sweep.start, sweep.end, sweep.step)?;
            check_item_count(&format!("{}.items", name), sweep.items)?;
            if sweep.base_repetitions == 0 {
                bail!("{}.base_repetitions must be positive", name);
            }
        }
        Ok(())
    }
}

fn check_range(name: &str, start: u64, end: u64, step: u64) -> Result<()> {
    if step == 0 {
        bail!("{}.step must be positive", name);
    }
    if start > end {
        bail!("{}.start ({}) is greater than {}.end ({})", name, start, name, end);
    }
    Ok(())
}

/// Items are the values `0..count`, so the count has to fit in [`Item`].
fn check_item_count(name: &str, count: usize) -> Result<()> {
    if Item::try_from(count).is_err() {
        bail!("{} ({}) exceeds the largest item count ({})", name, count, Item::MAX);
    }
    Ok(())
}
