use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a finished document goes. On the site this is the browser's download prompt;
/// here it is usually a directory.
pub trait DocumentSink {
    /// Stores `bytes` under `file_name`, returning where they ended up
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes documents into a directory, creating it if needed and replacing any file of the
/// same name. Names with directory parts are refused.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> DirectorySink {
        DirectorySink { dir: dir.into() }
    }
}

impl DocumentSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        if Path::new(file_name).file_name() != Some(OsStr::new(file_name)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{file_name:?} is not a plain file name"),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), size = bytes.len(), "wrote document");
        Ok(path)
    }
}
