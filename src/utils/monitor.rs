use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Resource snapshot taken after a pipeline stage.
#[derive(Debug, Clone)]
pub struct StageStats {
    pub stage: String,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub stage_time: Duration,
    pub elapsed_time: Duration,
}

/// Records how long each start-up stage took and, with the `cli` feature,
/// the process memory after it. Disabled monitors record nothing.
pub struct StageMonitor {
    #[cfg(feature = "cli")]
    system: System,
    #[cfg(feature = "cli")]
    pid: Option<Pid>,
    start_time: Instant,
    last_mark: Instant,
    peak_memory_mb: u64,
    history: Vec<StageStats>,
    enabled: bool,
}

impl StageMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            #[cfg(feature = "cli")]
            system: System::new(),
            #[cfg(feature = "cli")]
            pid: sysinfo::get_current_pid().ok(),
            start_time: now,
            last_mark: now,
            peak_memory_mb: 0,
            history: Vec::new(),
            enabled,
        }
    }

    #[cfg(feature = "cli")]
    fn current_memory_mb(&mut self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.system
            .process(pid)
            .map(|p| p.memory() / 1024 / 1024)
            .unwrap_or(0)
    }

    #[cfg(not(feature = "cli"))]
    fn current_memory_mb(&mut self) -> u64 {
        0
    }

    /// Close the current stage and log its stats.
    pub fn mark(&mut self, stage: &str) -> Option<&StageStats> {
        if !self.enabled {
            return None;
        }

        let now = Instant::now();
        let memory_mb = self.current_memory_mb();
        self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);

        let stats = StageStats {
            stage: stage.to_string(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: self.peak_memory_mb,
            stage_time: now.duration_since(self.last_mark),
            elapsed_time: now.duration_since(self.start_time),
        };
        self.last_mark = now;

        tracing::info!(
            "📊 {} - Memory: {}MB, Peak: {}MB, Stage: {:?}, Total: {:?}",
            stats.stage,
            stats.memory_usage_mb,
            stats.peak_memory_mb,
            stats.stage_time,
            stats.elapsed_time
        );

        self.history.push(stats);
        self.history.last()
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB, Stages: {}",
                self.start_time.elapsed(),
                self.peak_memory_mb,
                self.history.len()
            );
        }
    }

    pub fn history(&self) -> &[StageStats] {
        &self.history
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for StageMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
