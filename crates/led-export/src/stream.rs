use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use led_core::color::Rgb;
use led_core::traits::PixelSink;

use crate::error::ExportError;

/// Chemin de sortie : le chemin d'entrée suffixé de `.bin`.
///
/// # Example
/// ```
/// use led_export::output_path_for;
/// use std::path::Path;
/// assert_eq!(output_path_for(Path::new("anim/ring.gif")), Path::new("anim/ring.gif.bin"));
/// ```
#[must_use]
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".bin");
    PathBuf::from(name)
}

/// Ouvre le fichier de sortie en création + écriture + troncature.
///
/// Permissions 0600 (lecture/écriture propriétaire) sur unix.
///
/// # Errors
/// Returns [`ExportError::Create`] if the file cannot be opened.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, ExportError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options.open(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Écrit chaque triplet RGB sur 3 octets consécutifs, sans séparateur.
///
/// # Example
/// ```
/// use led_core::color::Rgb;
/// use led_core::traits::PixelSink;
/// use led_export::StreamWriter;
///
/// let mut writer = StreamWriter::new(Vec::new());
/// writer.push_pixel(Rgb::new(0xFF, 0x00, 0x10)).unwrap();
/// assert_eq!(writer.bytes_written(), 3);
/// let bytes = writer.finish().unwrap();
/// assert_eq!(bytes, vec![0xFF, 0x00, 0x10]);
/// ```
pub struct StreamWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Octets écrits depuis la création.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and hand back the underlying writer.
    ///
    /// # Errors
    /// Returns [`ExportError::Write`] if the flush fails.
    pub fn finish(mut self) -> Result<W, ExportError> {
        self.inner.flush()?;
        log::debug!("stream flushed: {} bytes", self.bytes_written);
        Ok(self.inner)
    }
}

impl<W: Write> PixelSink for StreamWriter<W> {
    #[inline]
    fn push_pixel(&mut self, px: Rgb) -> io::Result<()> {
        self.inner.write_all(&px.to_bytes())?;
        self.bytes_written += 3;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn triples_are_concatenated() {
        let mut writer = StreamWriter::new(Vec::new());
        for px in [Rgb::new(1, 2, 3), Rgb::BLACK, Rgb::new(255, 254, 253)] {
            writer.push_pixel(px).unwrap();
        }
        assert_eq!(writer.bytes_written(), 9);
        assert_eq!(
            writer.finish().unwrap(),
            vec![1, 2, 3, 0, 0, 0, 255, 254, 253]
        );
    }

    #[test]
    fn write_failure_is_reported() {
        let mut writer = StreamWriter::new(FailingWriter);
        assert!(writer.push_pixel(Rgb::BLACK).is_err());
        assert_eq!(writer.bytes_written(), 0);
    }

    #[test]
    fn output_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.gif.bin");
        std::fs::write(&path, [7u8; 32]).unwrap();

        let mut writer = StreamWriter::new(create_output(&path).unwrap());
        writer.push_pixel(Rgb::new(9, 9, 9)).unwrap();
        writer.finish().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![9, 9, 9]);
    }

    #[cfg(unix)]
    #[test]
    fn output_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perm.gif.bin");
        drop(create_output(&path).unwrap());
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn create_in_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.bin");
        let err = create_output(&path).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
        assert!(err.to_string().contains("x.bin"));
    }

    #[test]
    fn suffix_keeps_full_name() {
        assert_eq!(
            output_path_for(Path::new("/tmp/a.b.gif")),
            PathBuf::from("/tmp/a.b.gif.bin")
        );
    }
}
