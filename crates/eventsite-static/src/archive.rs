//! Zip packaging of the generated site.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Entry names of a generated site, in archive order.
pub const ARCHIVE_ENTRIES: [&str; 3] = ["index.html", "styles.css", "script.js"];

/// Errors that can occur while encoding an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to add {name} to archive: {message}")]
    EntryError { name: String, message: String },

    #[error("Failed to finish archive: {0}")]
    FinishError(String),
}

/// Pack named text files into an in-memory zip archive.
///
/// Entries are deflated and written in the order given.
pub fn pack_archive<'a, I>(entries: I) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (name, content) in entries {
        let entry_error = |message: String| ArchiveError::EntryError {
            name: name.to_string(),
            message,
        };

        zip.start_file(name, options)
            .map_err(|e| entry_error(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| entry_error(e.to_string()))?;

        tracing::debug!("Packed {} ({} bytes)", name, content.len());
    }

    let cursor = zip
        .finish()
        .map_err(|e| ArchiveError::FinishError(e.to_string()))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn packs_entries_in_order() {
        let bytes = pack_archive([("a.txt", "alpha"), ("b.txt", "beta")]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        let mut content = String::new();
        archive
            .by_name("b.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "beta");
    }

    #[test]
    fn deflates_entries() {
        let text = "repeat ".repeat(1000);

        let bytes = pack_archive([("big.txt", text.as_str())]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        assert!(bytes.len() < text.len());
    }

    #[test]
    fn empty_archive_is_valid() {
        let bytes = pack_archive(std::iter::empty()).unwrap();

        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
