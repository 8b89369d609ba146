//! Test fixtures and reference implementations for relife development.
//!
//! - [`patterns`]: canonical seeds as text rows, plus a row parser.
//! - [`reference`]: a naive simultaneous stepper to check boards against.
//! - [`soup`]: deterministic pseudo-random seeds.
//! - [`RecordingSink`]: a [`StatsSink`] that keeps every report.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;
pub mod reference;
pub mod soup;

use std::sync::{Arc, Mutex};

use relife_core::{StatsSink, TxnReport};

pub use patterns::{parse_rows, Seed};
pub use reference::naive_step;
pub use soup::random_soup;

/// Stats sink that appends every report to a shared log.
///
/// Clone the sink before installing it; the clone kept by the test
/// reads what the installed one recorded.
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<TxnReport>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every report recorded so far, in commit order.
    pub fn reports(&self) -> Vec<TxnReport> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Evaluation counts of every recorded report.
    pub fn evaluations(&self) -> Vec<u32> {
        self.reports().iter().map(|r| r.evaluations).collect()
    }
}

impl StatsSink for RecordingSink {
    fn record(&mut self, report: &TxnReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(*report);
        }
    }
}
