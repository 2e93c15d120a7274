use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Process start, taken once during bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    pub instant: Instant,
    pub utc: DateTime<Utc>,
}

impl StartTime {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            utc: Utc::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start: StartTime,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(start: StartTime, enabled: bool) -> Self {
        let pid = sysinfo::get_current_pid().ok();

        Self {
            system: Mutex::new(System::new()),
            pid,
            start,
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        if !self.enabled {
            return None;
        }

        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_cpu().with_memory(),
        );

        let process = system.process(pid)?;
        Some(SystemStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: process.memory() / 1024 / 1024,
            elapsed_time: self.start.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        tracing::info!(
            "Finished in {:?} (started {})",
            self.start.elapsed(),
            self.start.utc.to_rfc3339()
        );
        self.log_stats("Final");
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

// 非CLI環境只記錄耗時
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor {
    start: StartTime,
}

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(start: StartTime, _enabled: bool) -> Self {
        Self { start }
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {
        tracing::info!(
            "Finished in {:?} (started {})",
            self.start.elapsed(),
            self.start.utc.to_rfc3339()
        );
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::new(StartTime::now(), false);
        assert!(!monitor.is_enabled());
        #[cfg(feature = "cli")]
        assert!(monitor.get_stats().is_none());
    }

    #[test]
    fn test_start_time_elapsed_is_monotonic() {
        let start = StartTime::now();
        let first = start.elapsed();
        let second = start.elapsed();
        assert!(second >= first);
    }
}
