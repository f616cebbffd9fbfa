// File: src/persistence.rs
use crate::core::types::VerseRendering;
use crate::dictionary::DictionaryEntry;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Everything a render or dictionary run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaleoArchive {
    pub verses: Vec<VerseRendering>,
    pub dictionary: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    #[default]
    Bincode,
    Json,
}

impl ArchiveFormat {
    /// `.json` files are JSON, everything else bincode.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ArchiveFormat::Json,
            _ => ArchiveFormat::Bincode,
        }
    }
}

/// Writes the archive through a temp file in the target directory and renames
/// it into place, so readers never see a half-written file.
pub fn save_to_disk(archive: &PaleoArchive, path: &Path, format: ArchiveFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        match format {
            ArchiveFormat::Bincode => bincode::serialize_into(&mut writer, archive)?,
            ArchiveFormat::Json => serde_json::to_writer_pretty(&mut writer, archive)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        verses = archive.verses.len(),
        dictionary = archive.dictionary.len(),
        "archive saved"
    );
    Ok(())
}

pub fn load_from_disk(path: &Path, format: ArchiveFormat) -> Result<PaleoArchive> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let archive = match format {
        ArchiveFormat::Bincode => bincode::deserialize_from(reader)?,
        ArchiveFormat::Json => serde_json::from_reader(reader)?,
    };
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::PaleoEngine;
    use crate::dictionary::{DictionaryBuilder, StrongsEntry};

    fn sample_archive() -> PaleoArchive {
        let engine = PaleoEngine::new();
        let mut builder = DictionaryBuilder::new();
        let entry = StrongsEntry {
            strong_number: "H216".to_string(),
            hebrew_word: "אוֹר".to_string(),
            transliteration: Some("owr".to_string()),
            short_definition: "light".to_string(),
            root_word: None,
            usage_count: 120,
        };
        PaleoArchive {
            verses: vec![engine.render_verse("וַיֹּאמֶר אֱלֹהִים יְהִי אוֹר")],
            dictionary: builder.build_all(&[entry]),
        }
    }

    #[test]
    fn saves_and_loads_bincode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("archive.bin");
        let archive = sample_archive();

        save_to_disk(&archive, &path, ArchiveFormat::Bincode).unwrap();
        let loaded = load_from_disk(&path, ArchiveFormat::Bincode).unwrap();
        assert_eq!(loaded, archive);
    }

    #[test]
    fn saves_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");
        let archive = sample_archive();

        save_to_disk(&archive, &path, ArchiveFormat::from_path(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"transliteration\": \"wa-yo-mer eh-lo-heem ya-hee ohr\""));
        assert_eq!(load_from_disk(&path, ArchiveFormat::Json).unwrap(), archive);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ArchiveFormat::from_path(Path::new("out.JSON")), ArchiveFormat::Json);
        assert_eq!(ArchiveFormat::from_path(Path::new("out.bin")), ArchiveFormat::Bincode);
        assert_eq!(ArchiveFormat::from_path(Path::new("out")), ArchiveFormat::Bincode);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_disk(&dir.path().join("absent.bin"), ArchiveFormat::Bincode);
        assert!(matches!(result, Err(crate::error::PaleoError::Io(_))));
    }
}
