use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Write `data` to `path`, replacing any existing file. New files are
/// created world-readable (0644) on Unix.
pub fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!("logo-output-{}.svg", std::process::id()));
        write_output(&path, b"a longer first version").expect("first write");
        write_output(&path, b"short").expect("second write");
        let contents = std::fs::read(&path).expect("read back");
        std::fs::remove_file(&path).ok();
        assert_eq!(contents, b"short");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let path = std::env::temp_dir().join("logo-no-such-dir").join("logo.svg");
        assert!(write_output(&path, b"<svg/>").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join(format!("logo-mode-{}.svg", std::process::id()));
        std::fs::remove_file(&path).ok();
        write_output(&path, b"<svg/>").expect("write");
        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        std::fs::remove_file(&path).ok();
        // The process umask may only clear bits.
        assert_eq!(mode & 0o777 & !0o644, 0);
        assert_ne!(mode & 0o400, 0);
    }
}
