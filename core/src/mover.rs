use std::fs;
use std::io;
use std::path::Path;

/// Moves `source` to `dest`, preferring a plain rename.
///
/// When the archive directory sits on another volume the rename fails and we
/// fall back to copy-then-delete; the source is only removed once the copy
/// reports the full source length.
pub fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => copy_then_delete(source, dest),
        Err(err) => Err(err),
    }
}

fn copy_then_delete(source: &Path, dest: &Path) -> io::Result<()> {
    let expected = fs::metadata(source)?.len();
    let copied = fs::copy(source, dest)?;
    if copied != expected {
        return Err(io::Error::new(
            io::ErrorKind::WriteZero,
            format!(
                "short copy to {}: {copied} of {expected} bytes",
                dest.display()
            ),
        ));
    }
    fs::remove_file(source)
}
