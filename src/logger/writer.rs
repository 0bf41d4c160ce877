//! Log file handling

use std::fs::{File, OpenOptions};
use std::path::Path;

use super::{FileConfig, LoggerError};

/// Opens the configured log file, creating parent directories as needed.
///
/// With `append` unset the file is truncated.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<File, LoggerError> {
    create_parent_dir(&config.path)?;

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    Ok(options.open(&config.path)?)
}

fn create_parent_dir(path: &Path) -> Result<(), LoggerError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogFormat;
    use std::io::Write;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, append: bool) -> FileConfig {
        FileConfig::new(true, dir.path().join("nested/dir/app.log"), append, LogFormat::Full)
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);
        open_log_file(&config).unwrap();
        assert!(config.path.exists());
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        writeln!(open_log_file(&config).unwrap(), "first").unwrap();
        writeln!(open_log_file(&config).unwrap(), "second").unwrap();

        let content = std::fs::read_to_string(&config.path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_truncate_discards_existing_content() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, false);

        writeln!(open_log_file(&config).unwrap(), "old").unwrap();
        writeln!(open_log_file(&config).unwrap(), "new").unwrap();

        let content = std::fs::read_to_string(&config.path).unwrap();
        assert_eq!(content, "new\n");
    }
}
