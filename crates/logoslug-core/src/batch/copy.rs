//! Copy a file's bytes, timestamps and permissions.

use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

/// Copies `src` to `dst` (truncating `dst`), then carries over the
/// modification/access times and permissions of `src`. Returns bytes copied.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> Result<u64> {
    let mut reader = File::open(src).with_context(|| format!("open {}", src.display()))?;
    let meta = reader
        .metadata()
        .with_context(|| format!("stat {}", src.display()))?;

    let mut writer = File::create(dst).with_context(|| format!("create {}", dst.display()))?;
    let bytes = io::copy(&mut reader, &mut writer).with_context(|| {
        format!("copy {} to {}", src.display(), dst.display())
    })?;

    // Not every platform reports atime; keep whatever is available.
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer
        .set_times(times)
        .with_context(|| format!("set times on {}", dst.display()))?;
    drop(writer);

    // Last, so a read-only source does not block the writes above.
    fs::set_permissions(dst, meta.permissions())
        .with_context(|| format!("set permissions on {}", dst.display()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn copies_bytes_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        let dst = dir.path().join("dst.png");
        fs::write(&src, b"\x89PNG\r\n\x1a\nlogo").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let n = copy_with_metadata(&src, &dst).unwrap();
        assert_eq!(n, 12);
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
        assert_eq!(fs::metadata(&dst).unwrap().modified().unwrap(), past);
    }

    #[test]
    fn overwrites_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        let dst = dir.path().join("dst.png");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"older and longer").unwrap();

        copy_with_metadata(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn read_only_source_keeps_its_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        let dst = dir.path().join("dst.png");
        fs::write(&src, b"ro").unwrap();
        let mut perms = fs::metadata(&src).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&src, perms).unwrap();

        copy_with_metadata(&src, &dst).unwrap();
        assert!(fs::metadata(&dst).unwrap().permissions().readonly());
        assert_eq!(fs::read(&dst).unwrap(), b"ro");
    }
}
