//! Candidate sources.
//!
//! A [`CandidateSource`] returns candidate records, optionally restricted to
//! candidates with a location containing a given substring (case-insensitive).
//! Filtered records keep only their matching locations.
//! Records without an identifier are skipped, and when an identifier occurs
//! more than once the first record wins.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::candidate::record::CandidateRecord;
use crate::error::{Result, ScoutError};

/// A provider of candidate records.
pub trait CandidateSource: Send + Sync {
    /// Fetch all candidates, optionally pre-filtered by location substring.
    fn fetch(&self, location_filter: Option<&str>) -> Result<Vec<CandidateRecord>>;

    /// Look up a single candidate by identifier.
    fn get(&self, candidate_id: &str) -> Result<Option<CandidateRecord>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

/// Drop records without an identifier and all but the first record for each
/// identifier, keeping the original order.
pub fn dedup_records(records: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    let mut seen = AHashSet::new();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        let Some(id) = record.id() else {
            debug!("Skipping candidate record without an identifier");
            continue;
        };
        if !seen.insert(id.to_string()) {
            warn!("Skipping duplicate candidate id {id}");
            continue;
        }
        kept.push(record);
    }

    kept
}

fn apply_location_filter(
    records: impl IntoIterator<Item = CandidateRecord>,
    location_filter: Option<&str>,
) -> Vec<CandidateRecord> {
    match location_filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(filter) => records
            .into_iter()
            .filter_map(|record| record.restrict_to_location(filter))
            .collect(),
        None => records.into_iter().collect(),
    }
}

/// An in-memory source holding an immutable snapshot of records.
///
/// [`replace`](Self::replace) swaps the snapshot wholesale; a fetch that is
/// already running keeps reading the snapshot it started with.
#[derive(Debug, Default)]
pub struct InMemoryCandidateSource {
    records: RwLock<Arc<Vec<CandidateRecord>>>,
}

impl InMemoryCandidateSource {
    /// Create a source from records.
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        InMemoryCandidateSource {
            records: RwLock::new(Arc::new(dedup_records(records))),
        }
    }

    /// Replace all records with a new snapshot.
    pub fn replace(&self, records: Vec<CandidateRecord>) {
        let snapshot = Arc::new(dedup_records(records));
        *self.records.write() = snapshot;
    }

    /// Get the current snapshot.
    pub fn snapshot(&self) -> Arc<Vec<CandidateRecord>> {
        Arc::clone(&self.records.read())
    }

    /// Number of records in the current snapshot.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl CandidateSource for InMemoryCandidateSource {
    fn fetch(&self, location_filter: Option<&str>) -> Result<Vec<CandidateRecord>> {
        let snapshot = self.snapshot();
        let records = apply_location_filter(snapshot.iter().cloned(), location_filter);
        info!("Extracted {} candidates from memory", records.len());
        Ok(records)
    }

    fn get(&self, candidate_id: &str) -> Result<Option<CandidateRecord>> {
        Ok(self
            .snapshot()
            .iter()
            .find(|record| record.id() == Some(candidate_id))
            .cloned())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// A source reading candidates from a JSON Lines file on every fetch.
///
/// Each line holds one JSON object. Blank lines are ignored and malformed
/// lines are logged and skipped. A file whose first non-blank character is
/// `[` is read as a single JSON array instead.
#[derive(Clone, Debug)]
pub struct JsonlCandidateSource {
    path: PathBuf,
}

impl JsonlCandidateSource {
    /// Create a source for the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonlCandidateSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deduplicate all records from the file.
    pub fn load(&self) -> Result<Vec<CandidateRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            ScoutError::source(format!("Failed to open {}: {e}", self.path.display()))
        })?;
        let mut reader = BufReader::new(file);

        let records = if Self::starts_with_array(&mut reader)? {
            Self::parse_array(reader)?
        } else {
            Self::parse_lines(reader)?
        };

        Ok(dedup_records(records))
    }

    fn starts_with_array(reader: &mut BufReader<File>) -> Result<bool> {
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(pos) => return Ok(buf[pos] == b'['),
                None => {
                    let len = buf.len();
                    reader.consume(len);
                }
            }
        }
    }

    fn parse_array(mut reader: impl Read) -> Result<Vec<CandidateRecord>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let values: Vec<serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| ScoutError::parse(format!("Failed to parse JSON array: {e}")))?;

        Ok(values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed candidate at index {index}: {e}");
                    None
                }
            })
            .collect())
    }

    fn parse_lines(reader: impl BufRead) -> Result<Vec<CandidateRecord>> {
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<CandidateRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed candidate on line {}: {e}", index + 1),
            }
        }

        Ok(records)
    }
}

impl CandidateSource for JsonlCandidateSource {
    fn fetch(&self, location_filter: Option<&str>) -> Result<Vec<CandidateRecord>> {
        let records = apply_location_filter(self.load()?, location_filter);
        info!(
            "Extracted {} candidates from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn get(&self, candidate_id: &str) -> Result<Option<CandidateRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|record| record.id() == Some(candidate_id)))
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn records() -> Vec<CandidateRecord> {
        vec![
            CandidateRecord::new("a").with_location("New York"),
            CandidateRecord::new("b").with_location("Austin"),
            CandidateRecord::default().with_name("no id"),
            CandidateRecord::new("a").with_name("duplicate"),
        ]
    }

    #[test]
    fn test_dedup_records() {
        let kept = dedup_records(records());
        let ids: Vec<_> = kept.iter().filter_map(|r| r.id()).collect();

        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(kept[0].name, None);
    }

    #[test]
    fn test_in_memory_fetch_and_filter() {
        let source = InMemoryCandidateSource::new(records());
        assert_eq!(source.len(), 2);

        assert_eq!(source.fetch(None).unwrap().len(), 2);

        let filtered = source.fetch(Some("new york")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), Some("a"));

        // Blank filters are ignored
        assert_eq!(source.fetch(Some("  ")).unwrap().len(), 2);
    }

    #[test]
    fn test_filter_keeps_matching_locations_only() {
        let source = InMemoryCandidateSource::new(vec![
            CandidateRecord::new("a")
                .with_location("Boston")
                .with_location("New York"),
            CandidateRecord::new("b").with_location("New York"),
        ]);

        let filtered = source.fetch(Some("new york")).unwrap();
        for record in &filtered {
            assert_eq!(record.locations, vec!["New York"]);
        }

        // The snapshot itself is untouched
        assert_eq!(source.get("a").unwrap().unwrap().locations.len(), 2);
        assert_eq!(source.fetch(None).unwrap()[0].locations.len(), 2);
    }

    #[test]
    fn test_in_memory_replace_keeps_old_snapshot() {
        let source = InMemoryCandidateSource::new(records());
        let before = source.snapshot();

        source.replace(vec![CandidateRecord::new("z")]);

        assert_eq!(before.len(), 2);
        assert_eq!(source.len(), 1);
        assert!(source.get("a").unwrap().is_none());
        assert!(source.get("z").unwrap().is_some());
    }

    #[test]
    fn test_jsonl_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"candidate_id": "c1", "locations": ["Austin"]}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{not json").unwrap();
        writeln!(file, r#"{{"candidate_id": "c2", "skills": ["Rust"]}}"#).unwrap();
        writeln!(file, r#"{{"name": "anonymous"}}"#).unwrap();

        let source = JsonlCandidateSource::new(file.path());

        let all = source.fetch(None).unwrap();
        assert_eq!(all.len(), 2);

        let in_austin = source.fetch(Some("aus")).unwrap();
        assert_eq!(in_austin.len(), 1);

        let c2 = source.get("c2").unwrap().unwrap();
        assert_eq!(c2.skills, vec!["Rust"]);
        assert!(source.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_json_array_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [{{"candidate_id": "c1"}}, 17, {{"candidate_id": "c2"}}]"#
        )
        .unwrap();

        let records = JsonlCandidateSource::new(file.path()).load().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let source = JsonlCandidateSource::new("/nonexistent/candidates.jsonl");
        assert!(matches!(source.fetch(None), Err(ScoutError::Source(_))));
    }
}
