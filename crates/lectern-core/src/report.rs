//! Reports rolled up from recorded calls.
//!
//! Groups are a reporting construct only. They never gate execution; they
//! exist so the summary can attribute requests and check results to the
//! named phase of the scenario that issued them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::call::CallRecord;

/// Ordered calls recorded under one named group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub name: String,
    pub calls: Vec<CallRecord>,
}

impl GroupReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Vec::new(),
        }
    }

    pub fn record(&mut self, call: CallRecord) {
        self.calls.push(call);
    }

    pub fn requests(&self) -> usize {
        self.calls.len()
    }

    pub fn passed(&self) -> usize {
        self.calls.iter().filter(|call| call.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.calls.iter().filter(|call| !call.passed()).count()
    }
}

/// Everything one iteration observed: the bootstrap login, when this
/// iteration performed one, followed by the scenario groups in order.
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub login: Option<CallRecord>,
    pub groups: Vec<GroupReport>,
}

impl IterationReport {
    /// All calls in the order they were issued.
    pub fn calls(&self) -> impl Iterator<Item = &CallRecord> {
        self.login
            .iter()
            .chain(self.groups.iter().flat_map(|group| group.calls.iter()))
    }

    pub fn requests(&self) -> usize {
        self.calls().count()
    }

    pub fn checks_passed(&self) -> usize {
        self.calls().filter(|call| call.passed()).count()
    }

    pub fn checks_failed(&self) -> usize {
        self.calls().filter(|call| !call.passed()).count()
    }
}

/// Aggregated totals for one group across the whole run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    pub name: String,
    pub requests: u64,
    pub passed: u64,
    pub failed: u64,
}

impl GroupTotals {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requests: 0,
            passed: 0,
            failed: 0,
        }
    }
}

/// Totals over every iteration of every virtual user, exportable as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub vus: u32,
    pub iterations: u64,
    pub requests: u64,
    pub checks_passed: u64,
    pub checks_failed: u64,
    pub groups: Vec<GroupTotals>,
}

impl RunSummary {
    /// Start an empty summary stamped with the current time.
    pub fn start(vus: u32) -> Self {
        Self {
            started_at: Utc::now(),
            duration_ms: 0,
            vus,
            iterations: 0,
            requests: 0,
            checks_passed: 0,
            checks_failed: 0,
            groups: Vec::new(),
        }
    }

    /// Fold one iteration into the totals. Group totals keep the order in
    /// which groups first appear, which is fixed by the scenario.
    pub fn absorb(&mut self, report: &IterationReport) {
        self.iterations += 1;
        self.requests += report.requests() as u64;
        self.checks_passed += report.checks_passed() as u64;
        self.checks_failed += report.checks_failed() as u64;
        for group in &report.groups {
            let idx = match self.groups.iter().position(|g| g.name == group.name) {
                Some(idx) => idx,
                None => {
                    self.groups.push(GroupTotals::new(&group.name));
                    self.groups.len() - 1
                }
            };
            let totals = &mut self.groups[idx];
            totals.requests += group.requests() as u64;
            totals.passed += group.passed() as u64;
            totals.failed += group.failed() as u64;
        }
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis() as u64;
    }

    pub fn all_checks_passed(&self) -> bool {
        self.checks_failed == 0
    }
}
