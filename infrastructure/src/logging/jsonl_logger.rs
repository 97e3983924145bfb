//! JSONL file writer for evaluation events.
//!
//! Each [`EvaluationEvent`] becomes one JSON line carrying a `type` field and
//! a `timestamp`. The file is opened in append mode so successive runs share
//! one log.

use casewise_application::ports::evaluation_logger::{EvaluationEvent, EvaluationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Evaluation logger that writes one JSON object per line.
pub struct JsonlEvaluationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlEvaluationLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` after a warning when the file cannot be opened; a
    /// diagnostic log never blocks an evaluation.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create evaluation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open evaluation log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: EvaluationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl EvaluationLogger for JsonlEvaluationLogger {
    fn log(&self, event: EvaluationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlEvaluationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("evaluations.jsonl");
        let logger = JsonlEvaluationLogger::open(&path).unwrap();
        assert_eq!(logger.path(), path);

        logger.log(EvaluationEvent::new(
            "query_evaluated",
            json!({"domain": "tenant", "predicate": "eviction_invalid", "outcome": true}),
        ));
        logger.log(EvaluationEvent::new(
            "evaluation_completed",
            json!({"domain": "tenant", "total": 6, "positive": 1}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "query_evaluated");
        assert_eq!(lines[0]["outcome"], true);
        assert_eq!(lines[1]["total"], 6);
        assert!(lines.iter().all(|l| l["timestamp"].is_string()));
    }

    #[test]
    fn test_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluations.jsonl");

        for domain in ["tenant", "traffic"] {
            let logger = JsonlEvaluationLogger::open(&path).unwrap();
            logger.log(EvaluationEvent::new("facts_normalized", json!({"domain": domain})));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["domain"], "traffic");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluations.jsonl");
        let logger = JsonlEvaluationLogger::open(&path).unwrap();

        logger.log(EvaluationEvent::new("note", json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }
}
