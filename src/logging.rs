//! Structured logging for the portfolio server.
//!
//! Every record is one JSON object per line, written to stdout and to the
//! run directory (`LOG_DIR/<RUN_ID>/events.jsonl`, `trace.jsonl`).
//!
//! Filtering:
//! 1. `LOG_LEVEL` sets the minimum level (default `info`)
//! 2. `LOG_DOMAINS` restricts categories (comma-separated, or `all`)
//! 3. `PROFILE_SAMPLE` samples render timings (0.0..=1.0)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

// =============================================================================
// Log Levels
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("trace") => Level::Trace,
            Ok("debug") => Level::Debug,
            Ok("info") => Level::Info,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            Ok("fatal") => Level::Fatal,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

// =============================================================================
// Log Domains
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Http,    // Requests and responses
    Nav,     // Section selection
    Render,  // Page assembly and timings
    Contact, // Form submissions
    Asset,   // Local file lookups
    Demo,    // Demo module slot
    System,  // Startup, shutdown
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Http => "http",
            Domain::Nav => "nav",
            Domain::Render => "render",
            Domain::Contact => "contact",
            Domain::Asset => "asset",
            Domain::Demo => "demo",
            Domain::System => "system",
        }
    }

    pub fn is_enabled(&self) -> bool {
        match std::env::var("LOG_DOMAINS").as_deref() {
            Ok("all") | Err(_) => true,
            Ok(domains) => domains.split(',').any(|d| d.trim() == self.as_str()),
        }
    }
}

// =============================================================================
// Run context
// =============================================================================

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);
static PROFILE_SEQ: AtomicU64 = AtomicU64::new(0);
static RUN_CONTEXT: OnceLock<RunContext> = OnceLock::new();

fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug)]
struct RunContext {
    run_id: String,
    events: Option<Mutex<BufWriter<File>>>,
    trace: Option<Mutex<BufWriter<File>>>,
}

fn open_sink(path: PathBuf) -> Option<Mutex<BufWriter<File>>> {
    match File::create(&path) {
        Ok(f) => Some(Mutex::new(BufWriter::new(f))),
        Err(err) => {
            eprintln!("[log] failed to create {}: {}", path.display(), err);
            None
        }
    }
}

/// `LOG_DIR`, or `out/runs`. Unit tests log under the system temp dir instead.
fn log_base_dir() -> PathBuf {
    match std::env::var("LOG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) if cfg!(test) => std::env::temp_dir().join("portfolio-test-runs"),
        Err(_) => PathBuf::from("out/runs"),
    }
}

fn ensure_run_context() -> &'static RunContext {
    RUN_CONTEXT.get_or_init(|| {
        let run_id = std::env::var("RUN_ID")
            .unwrap_or_else(|_| format!("r-{}-{}", ts_epoch_ms(), process::id()));
        let mut run_dir = log_base_dir();
        run_dir.push(&run_id);
        if let Err(err) = create_dir_all(&run_dir) {
            eprintln!("[log] failed to create run dir: {}", err);
        }

        let _ = std::fs::write(
            run_dir.join("manifest.json"),
            json!({
                "run_id": run_id,
                "ts": ts_now(),
                "pid": process::id(),
                "log_dir": run_dir.to_string_lossy(),
            })
            .to_string(),
        );

        RunContext {
            events: open_sink(run_dir.join("events.jsonl")),
            trace: open_sink(run_dir.join("trace.jsonl")),
            run_id,
        }
    })
}

/// Contact details and message bodies never reach the log files.
fn sanitize_fields(mut fields: Map<String, Value>) -> Map<String, Value> {
    let redacted = Value::String("[REDACTED]".to_string());
    for key in ["email", "message", "cookie", "authorization"] {
        if fields.contains_key(key) {
            fields.insert(key.to_string(), redacted.clone());
        }
    }
    fields
}

fn split_fields(mut fields: Map<String, Value>) -> (Map<String, Value>, Map<String, Value>) {
    let mut top = Map::new();
    for key in ["section", "path", "msg"] {
        if let Some(value) = fields.remove(key) {
            top.insert(key.to_string(), value);
        }
    }
    (top, fields)
}

fn write_line(writer: &Option<Mutex<BufWriter<File>>>, line: &str) {
    if let Some(Ok(mut w)) = writer.as_ref().map(|m| m.lock()) {
        let _ = writeln!(w, "{}", line);
        let _ = w.flush();
    }
}

// =============================================================================
// Core logging functions
// =============================================================================

/// RFC3339 timestamp with milliseconds
pub fn ts_now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

pub fn ts_epoch_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Emit a structured log entry
pub fn log(level: Level, domain: Domain, event: &str, fields: Map<String, Value>) {
    if level < Level::from_env() || !domain.is_enabled() {
        return;
    }
    emit_record(level, domain.as_str(), event, fields);
}

fn build_record(
    run_id: &str,
    level: Level,
    component: &str,
    event: &str,
    fields: Map<String, Value>,
) -> Value {
    let fields = sanitize_fields(fields);
    let (mut top, data) = split_fields(fields);

    let msg = top.remove("msg").unwrap_or(Value::String(String::new()));
    let mut entry = Map::new();
    entry.insert("ts".to_string(), json!(ts_now()));
    entry.insert("run_id".to_string(), json!(run_id));
    entry.insert("seq".to_string(), json!(next_seq()));
    entry.insert("lvl".to_string(), json!(level.as_str().to_uppercase()));
    entry.insert("component".to_string(), json!(component));
    entry.insert("event".to_string(), json!(event));
    entry.insert("msg".to_string(), msg);
    for (k, v) in top {
        entry.insert(k, v);
    }
    entry.insert("data".to_string(), Value::Object(data));
    Value::Object(entry)
}

fn emit_record(level: Level, component: &str, event: &str, fields: Map<String, Value>) {
    let ctx = ensure_run_context();
    let line = build_record(&ctx.run_id, level, component, event, fields).to_string();
    match level {
        Level::Trace | Level::Debug => write_line(&ctx.trace, &line),
        _ => write_line(&ctx.events, &line),
    }
    println!("{}", line);
}

// =============================================================================
// Domain-Specific Logging Helpers
// =============================================================================

pub fn log_request(method: &str, path: &str, status: u16, elapsed_ms: f64) {
    let level = if status >= 500 {
        Level::Error
    } else if status >= 400 {
        Level::Warn
    } else {
        Level::Debug
    };
    log(
        level,
        Domain::Http,
        "request",
        obj(&[
            ("method", v_str(method)),
            ("path", v_str(path)),
            ("status", json!(status)),
            ("elapsed_ms", v_num(elapsed_ms)),
        ]),
    );
}

pub fn log_navigation(from: &str, to: &str) {
    agg_increment("navigation");
    log(
        Level::Info,
        Domain::Nav,
        "select",
        obj(&[("from", v_str(from)), ("section", v_str(to))]),
    );
}

/// A section value outside the known set reached the dispatcher.
pub fn log_unknown_section(raw: &str) {
    log(
        Level::Warn,
        Domain::Nav,
        "unknown_section",
        obj(&[
            ("raw", v_str(raw)),
            ("msg", v_str("rendering navigation bar only")),
        ]),
    );
}

pub fn log_contact(accepted: bool, missing: &[&str], has_subject: bool) {
    agg_increment(if accepted { "contact_ok" } else { "contact_rejected" });
    log(
        if accepted { Level::Info } else { Level::Debug },
        Domain::Contact,
        "submission",
        obj(&[
            ("accepted", Value::Bool(accepted)),
            (
                "missing",
                Value::Array(missing.iter().map(|m| v_str(m)).collect()),
            ),
            ("has_subject", Value::Bool(has_subject)),
        ]),
    );
}

pub fn log_asset_lookup(path: &str, found: bool, cached: bool) {
    log(
        Level::Trace,
        Domain::Asset,
        "resolve",
        obj(&[
            ("path", v_str(path)),
            ("found", Value::Bool(found)),
            ("cached", Value::Bool(cached)),
        ]),
    );
}

pub fn log_demo_slot(state: &str, module: Option<&str>) {
    let level = if state == "missing_entry" { Level::Warn } else { Level::Info };
    log(
        level,
        Domain::Demo,
        "slot",
        obj(&[
            ("state", v_str(state)),
            ("module", module.map(v_str).unwrap_or(Value::Null)),
        ]),
    );
}

pub fn log_startup(addr: &str, site_root: &str, cache_assets: bool) {
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("addr", v_str(addr)),
            ("site_root", v_str(site_root)),
            ("cache_assets", Value::Bool(cache_assets)),
            ("msg", v_str(&format!("serving portfolio at http://{}", addr))),
        ]),
    );
}

pub fn log_shutdown(uptime_secs: u64) {
    log(
        Level::Info,
        Domain::System,
        "shutdown",
        obj(&[("uptime_secs", json!(uptime_secs))]),
    );
}

// =============================================================================
// Utility Functions
// =============================================================================

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}

// =============================================================================
// Profiling Scope
// =============================================================================

/// Profiling scope that emits structured timing on drop.
pub struct ProfileScope {
    label: &'static str,
    context: Option<Map<String, Value>>,
    started: Instant,
    enabled: bool,
}

impl ProfileScope {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            context: None,
            started: Instant::now(),
            enabled: Self::should_sample(),
        }
    }

    pub fn with_context(label: &'static str, fields: &[(&str, Value)]) -> Self {
        let enabled = Self::should_sample();
        Self {
            label,
            context: if enabled { Some(obj(fields)) } else { None },
            started: Instant::now(),
            enabled,
        }
    }

    fn should_sample() -> bool {
        std::env::var("PROFILE_SAMPLE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .map(|p| {
                if p >= 1.0 {
                    true
                } else if p <= 0.0 {
                    false
                } else {
                    let seq = PROFILE_SEQ.fetch_add(1, Ordering::SeqCst);
                    let bucket = (seq % 10_000) as f64 / 10_000.0;
                    bucket < p
                }
            })
            .unwrap_or(true)
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let mut fields = self.context.take().unwrap_or_default();
        fields.insert("label".to_string(), v_str(self.label));
        fields.insert("elapsed_ms".to_string(), v_num(elapsed_ms));
        log(Level::Trace, Domain::Render, "profile", fields);
    }
}

// =============================================================================
// Log Aggregator for Periodic Summaries
// =============================================================================

static AGGREGATOR: OnceLock<Mutex<LogAggregator>> = OnceLock::new();

fn get_aggregator() -> &'static Mutex<LogAggregator> {
    AGGREGATOR.get_or_init(|| Mutex::new(LogAggregator::new()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrafficCounts {
    pub page_views: u64,
    pub navigations: u64,
    pub contact_ok: u64,
    pub contact_rejected: u64,
}

struct LogAggregator {
    counts: TrafficCounts,
    last_flush: Instant,
    flush_interval_secs: u64,
}

impl LogAggregator {
    fn new() -> Self {
        Self {
            counts: TrafficCounts::default(),
            last_flush: Instant::now(),
            flush_interval_secs: flush_interval_secs(),
        }
    }

    fn increment(&mut self, event: &str) {
        match event {
            "page_view" => self.counts.page_views += 1,
            "navigation" => self.counts.navigations += 1,
            "contact_ok" => self.counts.contact_ok += 1,
            "contact_rejected" => self.counts.contact_rejected += 1,
            _ => {}
        }
    }

    fn maybe_flush(&mut self) -> Option<TrafficCounts> {
        if self.last_flush.elapsed().as_secs() >= self.flush_interval_secs {
            let result = self.counts;
            self.counts = TrafficCounts::default();
            self.last_flush = Instant::now();
            Some(result)
        } else {
            None
        }
    }
}

pub fn flush_interval_secs() -> u64 {
    std::env::var("LOG_FLUSH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}

/// Call periodically to emit aggregated stats
pub fn tick_aggregator() {
    if let Ok(mut agg) = get_aggregator().lock() {
        if let Some(c) = agg.maybe_flush() {
            log(
                Level::Info,
                Domain::System,
                "traffic",
                obj(&[
                    ("page_views", json!(c.page_views)),
                    ("navigations", json!(c.navigations)),
                    ("contact_ok", json!(c.contact_ok)),
                    ("contact_rejected", json!(c.contact_rejected)),
                ]),
            );
        }
    }
}

/// Increment a counter in the aggregator
pub fn agg_increment(event: &str) {
    if let Ok(mut agg) = get_aggregator().lock() {
        agg.increment(event);
    }
}

// =============================================================================
// Tests
// =============================================================================
