//! Process runtime introspection.
//!
//! # Responsibilities
//! - Report uptime since process start
//! - Report memory usage of the current process
//!
//! Resident set size comes from the OS via `sysinfo`; heap figures come from
//! jemalloc, which the library installs as the global allocator.
//! Handlers depend on [`ProcessMetricsProvider`], never on either source
//! directly.

use std::sync::Mutex;
use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, System};

/// Memory usage of the current process, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Resident set size.
    pub rss: u64,
    /// Bytes in active heap pages.
    pub heap_total: u64,
    /// Bytes handed out to live allocations.
    pub heap_used: u64,
    /// Resident bytes outside the allocator's heap (stacks, code, foreign mappings).
    pub external: u64,
}

/// Allocator counters, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocated: u64,
    pub active: u64,
    pub resident: u64,
}

impl MemoryUsage {
    /// Combine the OS-reported RSS with allocator counters.
    pub fn from_parts(rss: u64, heap: HeapStats) -> Self {
        Self {
            rss,
            heap_total: heap.active,
            heap_used: heap.allocated,
            external: rss.saturating_sub(heap.resident),
        }
    }
}

/// Read jemalloc's statistics. Counters are cached by jemalloc until the
/// epoch is advanced.
#[cfg(not(target_env = "msvc"))]
pub fn heap_stats() -> Option<HeapStats> {
    use tikv_jemalloc_ctl::{epoch, stats};

    let read = || -> Result<HeapStats, tikv_jemalloc_ctl::Error> {
        epoch::advance()?;
        Ok(HeapStats {
            allocated: stats::allocated::read()? as u64,
            active: stats::active::read()? as u64,
            resident: stats::resident::read()? as u64,
        })
    };

    match read() {
        Ok(heap) => Some(heap),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read allocator statistics");
            None
        }
    }
}

#[cfg(target_env = "msvc")]
pub fn heap_stats() -> Option<HeapStats> {
    None
}

/// Source of live process metrics for the status endpoint.
pub trait ProcessMetricsProvider: Send + Sync {
    /// Seconds elapsed since process start.
    fn uptime(&self) -> f64;

    /// Current memory usage.
    fn memory_usage(&self) -> MemoryUsage;
}

/// Metrics read from the operating system and the allocator.
pub struct SystemMetrics {
    started_at: Instant,
    pid: Option<Pid>,
    system: Mutex<System>,
}

impl SystemMetrics {
    /// Create a provider measuring uptime from `started_at`.
    pub fn new(started_at: Instant) -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = %e, "Process introspection unavailable");
                None
            }
        };

        Self {
            started_at,
            pid,
            system: Mutex::new(System::new()),
        }
    }

    fn resident_set_size(&self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };

        // A poisoned lock only means another refresh panicked; the handle is still usable.
        let mut system = self.system.lock().unwrap_or_else(|e| e.into_inner());
        if !system.refresh_process(pid) {
            tracing::warn!(pid = %pid, "Failed to refresh process memory");
            return 0;
        }

        system.process(pid).map(|process| process.memory()).unwrap_or(0)
    }
}

impl ProcessMetricsProvider for SystemMetrics {
    fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    fn memory_usage(&self) -> MemoryUsage {
        let rss = self.resident_set_size();
        MemoryUsage::from_parts(rss, heap_stats().unwrap_or_default())
    }
}
