//! Global named counters, used to know how many intersection tests a run performed.
//!
//! Counters are only incremented when the `counter` feature is enabled.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

#[derive(Default)]
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<Counter>>> =
        Mutex::new(BTreeMap::new());
}

/// Registers a counter under `descr`, or returns the one already registered.
pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    let mut counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters.entry(descr).or_default().clone()
}

/// Snapshot of every registered counter, sorted by name.
pub fn counter_values() -> Vec<(&'static str, u64)> {
    let counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters
        .iter()
        .map(|(name, counter)| (*name, counter.value()))
        .collect()
}

pub fn report_counters() {
    for (counter_name, value) in counter_values() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {} ", counter_name, value)
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        };
    };
}

pub use counter;
// Reexport for ease of use
pub use lazy_static;
