/// The `system://status` report
/// 
/// Uptime and wall-clock time come from a `ProcessClock` so the report
/// can be produced against a fixed clock in tests.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::mcp::protocol::{SERVER_NAME, SERVER_VERSION};
use crate::storage::DirectoryStorage;

/// Source of process-level time metadata
pub trait ProcessClock: Send + Sync {
    /// Time since the process started serving
    fn uptime(&self) -> Duration;
    
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system timers, started when the server is built
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl ProcessClock for SystemClock {
    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
    
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Snapshot of server identity, counts and time
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub server: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub total_users: usize,
    pub total_projects: usize,
    pub generated_at: DateTime<Utc>,
}

impl StatusReport {
    /// Gather a fresh report; nothing here is cached between reads
    pub fn collect<S: DirectoryStorage>(storage: &S, clock: &dyn ProcessClock) -> Self {
        Self {
            server: SERVER_NAME,
            version: SERVER_VERSION,
            uptime_secs: clock.uptime().as_secs(),
            total_users: storage.user_count(),
            total_projects: storage.project_count(),
            generated_at: clock.now(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System Status Report")?;
        writeln!(f, "Server: {} v{}", self.server, self.version)?;
        writeln!(f, "Uptime: {} seconds", self.uptime_secs)?;
        writeln!(f, "Total Users: {}", self.total_users)?;
        writeln!(f, "Total Projects: {}", self.total_projects)?;
        write!(
            f,
            "Generated: {}",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}
