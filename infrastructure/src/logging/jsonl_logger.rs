//! JSONL file writer for picker events.
//!
//! Each [`PickerEvent`] becomes one JSON object per line: the payload's
//! fields plus `type` and `timestamp`. The file is opened in append mode, so
//! successive sessions build up a single draw history.

use picker_application::ports::event_logger::{EventLogger, PickerEvent};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL event log.
///
/// Lines are written unbuffered so a crash never loses a recorded draw.
pub struct JsonlEventLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlEventLogger {
    /// Open (or create) the log at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::open_append(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(file),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Could not open event log {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_append(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Build the JSON record for one event.
    ///
    /// Object payloads are flattened into the record; anything else goes
    /// under `data`. `type` and `timestamp` always win over payload keys.
    fn record(event: PickerEvent, timestamp: String) -> Value {
        let mut record = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(record)
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

impl EventLogger for JsonlEventLogger {
    fn log(&self, event: PickerEvent) {
        let record = Self::record(event, Self::now());
        let mut line = record.to_string();
        line.push('\n');

        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!("Failed to write event log {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STAMP: &str = "2024-05-01T09:30:00.000Z";

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn record(event_type: &'static str, payload: Value) -> Value {
        JsonlEventLogger::record(PickerEvent::new(event_type, payload), STAMP.to_string())
    }

    #[test]
    fn test_record_flattens_object_payload() {
        let value = record(
            "winner_drawn",
            json!({ "name": "Bob", "index": 1, "pool_size": 3, "removed": false }),
        );
        assert_eq!(
            value,
            json!({
                "type": "winner_drawn",
                "timestamp": STAMP,
                "name": "Bob",
                "index": 1,
                "pool_size": 3,
                "removed": false,
            })
        );
    }

    #[test]
    fn test_record_wraps_scalar_payload() {
        let value = record("question_saved", json!("Who goes first?"));
        assert_eq!(value["data"], "Who goes first?");
        assert_eq!(value["type"], "question_saved");

        let value = record("pool_cleared", Value::Null);
        assert_eq!(value, json!({ "type": "pool_cleared", "timestamp": STAMP }));
    }

    #[test]
    fn test_record_type_overrides_payload_key() {
        let value = record("name_added", json!({ "type": "bogus", "name": "Ann" }));
        assert_eq!(value["type"], "name_added");
        assert_eq!(value["name"], "Ann");
    }

    #[test]
    fn test_lines_are_written_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlEventLogger::new(&path).unwrap();

        logger.log(PickerEvent::new(
            "batch_added",
            json!({ "names": ["Alice", "Bob", "Carol"], "pool_size": 3 }),
        ));

        // Still open: nothing is held back in a buffer
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "batch_added");
        assert_eq!(lines[0]["pool_size"], 3);
        assert!(lines[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history").join("events.jsonl");

        for name in ["Alice", "Bob"] {
            let logger = JsonlEventLogger::new(&path).unwrap();
            logger.log(PickerEvent::new("winner_drawn", json!({ "name": name })));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "Alice");
        assert_eq!(lines[1]["name"], "Bob");
    }

    #[test]
    fn test_unopenable_path_gives_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the log file
        assert!(JsonlEventLogger::new(dir.path()).is_none());
    }
}
