//! Download targets for exported PNGs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Receives each encoded image under its download file name
pub trait DownloadSink {
    fn save(&mut self, filename: &str, png: &[u8]) -> io::Result<()>;
}

/// Writes downloads into a directory
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            saved: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in save order
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, filename: &str, png: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, png)?;
        log::info!("Saved {} ({} bytes)", path.display(), png.len());
        self.saved.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_sink_creates_dir_and_records_paths() {
        let temp = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp.path().join("out"));

        sink.save("a.png", b"one").unwrap();
        sink.save("b.png", b"two").unwrap();

        assert_eq!(fs::read(temp.path().join("out/a.png")).unwrap(), b"one");
        assert_eq!(sink.saved().len(), 2);
        assert!(sink.saved()[1].ends_with("b.png"));
    }
}
