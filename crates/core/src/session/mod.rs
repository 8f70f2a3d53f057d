//! Per-user session state.
//!
//! A [`Session`] holds the files produced so far, keyed by file name. It is
//! owned by the caller and passed into every create action; nothing in this
//! crate keeps session state of its own.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rc_protocol::{OutputKind, ProducedFile, Production};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::archive::{ArchiveResult, ArchiveWriter, PackedArchive};
use crate::render::{xxh3_hex, RenderResult, Renderable};
use crate::sink::ArtifactSink;

/// Files produced during one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    files: IndexMap<&'static str, ProducedFile>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            files: IndexMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Renders `record` into its file and stores it in the session.
    ///
    /// When the record is identical to the one the stored file was rendered
    /// from, nothing is rendered and [`Production::Reused`] is returned.
    /// Freshly rendered bytes are also handed to `sink`; a sink failure is
    /// logged and otherwise ignored.
    pub fn produce<R: Renderable>(
        &mut self,
        record: &R,
        sink: Option<&dyn ArtifactSink>,
    ) -> RenderResult<Production> {
        let kind = R::KIND;
        let name = kind.file_name();
        let fingerprint = record.fingerprint()?;

        let previous_digest = match self.files.get(name) {
            Some(file) if file.input_fingerprint == fingerprint => {
                debug!(file = name, "Input unchanged, reusing produced file");
                return Ok(Production::Reused);
            }
            Some(file) => Some(file.digest.clone()),
            None => None,
        };

        let bytes = record.render()?;
        let digest = xxh3_hex(&bytes);

        let status = match previous_digest {
            None => Production::Created,
            Some(previous) if previous == digest => Production::Unchanged,
            Some(_) => Production::Replaced,
        };

        if let Some(sink) = sink {
            if let Err(e) = sink.persist(name, &bytes) {
                warn!(file = name, error = %e, "Failed to persist scratch copy");
            }
        }

        info!(
            session = %self.id,
            file = name,
            bytes = bytes.len(),
            ?status,
            "Produced configuration file"
        );

        self.files.insert(
            name,
            ProducedFile {
                kind,
                bytes,
                digest,
                input_fingerprint: fingerprint,
                produced_at: Utc::now(),
            },
        );

        Ok(status)
    }

    pub fn file(&self, kind: OutputKind) -> Option<&ProducedFile> {
        self.files.get(kind.file_name())
    }

    /// Produced files, in the order they were first produced.
    pub fn files(&self) -> impl Iterator<Item = &ProducedFile> {
        self.files.values()
    }

    /// (file name, bytes) pairs ready for packaging.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files
            .iter()
            .map(|(name, file)| (*name, file.bytes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn remove(&mut self, kind: OutputKind) -> Option<ProducedFile> {
        self.files.shift_remove(kind.file_name())
    }

    /// Drops every produced file; called when the session ends.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Packs every produced file into a zip archive.
    pub fn archive(&self) -> ArchiveResult<PackedArchive> {
        ArchiveWriter::new().write(self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_protocol::{GroupEntry, RepoBatch, ReportSettings};
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct RecordingSink {
        writes: RefCell<Vec<String>>,
    }

    impl ArtifactSink for RecordingSink {
        fn persist(&self, file_name: &str, _bytes: &[u8]) -> io::Result<()> {
            self.writes.borrow_mut().push(file_name.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl ArtifactSink for FailingSink {
        fn persist(&self, _file_name: &str, _bytes: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn report(title: &str) -> ReportSettings {
        ReportSettings {
            title: title.to_string(),
        }
    }

    #[test]
    fn test_produce_created_then_reused() {
        let mut session = Session::new();
        let sink = RecordingSink::default();

        let first = session.produce(&report("A"), Some(&sink)).unwrap();
        let second = session.produce(&report("A"), Some(&sink)).unwrap();

        assert_eq!(first, Production::Created);
        assert_eq!(second, Production::Reused);
        assert_eq!(*sink.writes.borrow(), vec!["report-config.json"]);
    }

    #[test]
    fn test_changed_input_replaces_bytes() {
        let mut session = Session::new();
        session.produce(&report("A"), None).unwrap();
        let before = session.file(OutputKind::ReportConfig).unwrap().digest.clone();

        let status = session.produce(&report("B"), None).unwrap();

        assert_eq!(status, Production::Replaced);
        let after = session.file(OutputKind::ReportConfig).unwrap();
        assert_ne!(after.digest, before);
        assert!(String::from_utf8_lossy(&after.bytes).contains("\"B\""));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_different_input_same_bytes_is_unchanged() {
        // ["x", "y"] and ["x;y"] join into the same cell.
        let mut first = RepoBatch::new();
        first.insert("r", "a", GroupEntry { globs: vec!["x".to_string(), "y".to_string()] });
        let mut second = RepoBatch::new();
        second.insert("r", "a", GroupEntry { globs: vec!["x;y".to_string()] });

        let mut session = Session::new();
        session.produce(&first, None).unwrap();
        let status = session.produce(&second, None).unwrap();

        assert_eq!(status, Production::Unchanged);
    }

    #[test]
    fn test_sink_failure_does_not_fail_produce() {
        let mut session = Session::new();
        let status = session.produce(&report("A"), Some(&FailingSink)).unwrap();

        assert_eq!(status, Production::Created);
        assert!(session.file(OutputKind::ReportConfig).is_some());
    }

    #[test]
    fn test_entries_keep_production_order() {
        let mut session = Session::new();
        session.produce(&report("A"), None).unwrap();
        let mut groups = RepoBatch::new();
        groups.insert("r", "g", GroupEntry { globs: vec![] });
        session.produce(&groups, None).unwrap();

        let names: Vec<_> = session.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["report-config.json", "group-config.csv"]);
    }

    #[test]
    fn test_clear_and_archive_empty_session() {
        let mut session = Session::new();
        session.produce(&report("A"), None).unwrap();
        session.clear();

        assert!(session.is_empty());
        let archive = session.archive().unwrap();
        assert!(archive.is_empty());
        assert!(!archive.warnings.is_empty());
    }

    #[test]
    fn test_remove_forgets_file() {
        let mut session = Session::new();
        session.produce(&report("A"), None).unwrap();

        assert!(session.remove(OutputKind::ReportConfig).is_some());
        let status = session.produce(&report("A"), None).unwrap();
        assert_eq!(status, Production::Created);
    }
}
