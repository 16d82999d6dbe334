//! Record source reading a JSON dump from disk.

use std::path::{Path, PathBuf};

use super::{RecordSource, SourceError};
use crate::model::{EndpointRecord, decode_records};

/// Reads the endpoint list from a file on every fetch.
///
/// The file has the same shape as the CLI output, so a saved
/// `confluent ... --output json` dump can be replayed.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn try_fetch(&mut self) -> Result<Vec<EndpointRecord>, SourceError> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        Ok(decode_records(&bytes)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_each_fetch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "ep-1", "phase": "READY"}}]"#).unwrap();
        file.flush().unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.path(), file.path());
        assert_eq!(source.try_fetch().unwrap().len(), 1);

        std::fs::write(
            file.path(),
            r#"[{"name": "ep-1"}, {"name": "ep-2"}, {"name": "ep-3"}]"#,
        )
        .unwrap();
        assert_eq!(source.try_fetch().unwrap().len(), 3);
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.try_fetch(), Err(SourceError::Io(_))));
        assert!(source.fetch().is_empty());
    }

    #[test]
    fn test_file_source_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();

        let mut source = FileSource::new(&path);
        assert!(matches!(source.try_fetch(), Err(SourceError::Decode(_))));
    }
}
