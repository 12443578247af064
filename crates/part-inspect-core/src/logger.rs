//! Stderr logging for the inspection binary.
//!
//! Library code only talks to the `log` facade. [`init_with_level`] installs
//! a plain sink printing `    12.3ms DEBUG inspect: message`; records from
//! crates outside `part_inspect*` are held to `warn` so a `debug` run shows
//! the pipeline and not the image decoders.

use std::io::Write;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::{
    filter::LevelFilter as TraceLevel, fmt, util::SubscriberInitExt, EnvFilter,
};

const OWN_TARGET_PREFIX: &str = "part_inspect";
const FOREIGN_CAP: LevelFilter = LevelFilter::Warn;

struct StderrSink {
    level: LevelFilter,
    started: Instant,
}

impl StderrSink {
    fn cap_for(&self, target: &str) -> LevelFilter {
        if target.starts_with(OWN_TARGET_PREFIX) {
            self.level
        } else {
            self.level.min(FOREIGN_CAP)
        }
    }
}

impl Log for StderrSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.cap_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = render(self.started.elapsed(), record);
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// One log line: elapsed milliseconds, level, innermost module of the target.
fn render(elapsed: Duration, record: &Record) -> String {
    let module = record.target().rsplit("::").next().unwrap_or_default();
    format!(
        "{:>9.1}ms {:<5} {}: {}",
        elapsed.as_secs_f64() * 1e3,
        record.level(),
        module,
        record.args()
    )
}

static SINK: OnceLock<StderrSink> = OnceLock::new();

/// Install the stderr sink. Only the first call has an effect.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if SINK.get().is_some() {
        return Ok(());
    }
    let sink = SINK.get_or_init(|| StderrSink {
        level,
        started: Instant::now(),
    });
    log::set_logger(sink)?;
    log::set_max_level(level);
    Ok(())
}

/// Install a `tracing` subscriber on stderr. `RUST_LOG` wins over the
/// `info` default; `json` switches to one JSON object per event, with a
/// closing event for every span carrying its busy/idle time.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(TraceLevel::INFO.into())
        .from_env_lossy();
    let spans = fmt::format::FmtSpan::CLOSE;
    let installed = if json {
        fmt()
            .with_env_filter(filter)
            .with_span_events(spans)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .finish()
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_span_events(spans)
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
    if installed.is_err() {
        log::debug!("tracing subscriber already installed");
    }
}
