//! Text document reader

use crate::domain::{RedactError, Result};
use encoding_rs::{Encoding, EUC_JP, ISO_2022_JP, SHIFT_JIS};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default size limit for a single document (10 MB)
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

const UTF8_BOM: char = '\u{feff}';

/// Kind of source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain text (`.txt`)
    Text,
}

impl DocumentKind {
    /// Detect the kind from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Short name shown in bundle headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a text document
///
/// UTF-8 is tried first, then Shift_JIS (including the CP932 extensions),
/// EUC-JP and ISO-2022-JP. The first encoding that decodes without errors
/// wins.
///
/// # Errors
///
/// Returns [`RedactError::Document`] when the extension is not `.txt`, the
/// file is larger than `max_bytes` or no encoding decodes the content, and
/// [`RedactError::Io`] when the file cannot be read.
pub fn read_text_document(path: impl AsRef<Path>, max_bytes: u64) -> Result<String> {
    let path = path.as_ref();

    if DocumentKind::from_path(path).is_none() {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();
        return Err(RedactError::Document(format!(
            "サポートされていないファイル形式: {ext} (対応形式: .txt)"
        )));
    }

    let metadata = fs::metadata(path)?;
    if metadata.len() > max_bytes {
        return Err(RedactError::Document(format!(
            "ファイルサイズが上限を超えています: {} bytes (上限 {} bytes)",
            metadata.len(),
            max_bytes
        )));
    }

    let content = decode(fs::read(path)?)?;
    tracing::debug!(bytes = metadata.len(), "Document read");
    Ok(content)
}

fn decode(bytes: Vec<u8>) -> Result<String> {
    let bytes = match String::from_utf8(bytes) {
        Ok(content) => {
            return Ok(match content.strip_prefix(UTF8_BOM) {
                Some(stripped) => stripped.to_string(),
                None => content,
            })
        }
        Err(e) => e.into_bytes(),
    };

    let fallbacks: [&'static Encoding; 3] = [SHIFT_JIS, EUC_JP, ISO_2022_JP];
    fallbacks
        .iter()
        .find_map(|encoding| {
            let content = encoding.decode_without_bom_handling_and_without_replacement(&bytes)?;
            tracing::debug!(encoding = encoding.name(), "Decoded with fallback encoding");
            Some(content.into_owned())
        })
        .ok_or_else(|| {
            RedactError::Document(
                "ファイルを読み込めませんでした。エンコーディングを確認してください \
                 (UTF-8, Shift_JIS, EUC-JP, ISO-2022-JP)"
                    .to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn text_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_utf8() {
        let file = text_file("診断名：統合失調症".as_bytes());
        let content = read_text_document(file.path(), DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(content, "診断名：統合失調症");
    }

    #[test]
    fn test_bom_is_stripped() {
        let file = text_file("\u{feff}本文".as_bytes());
        let content = read_text_document(file.path(), DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(content, "本文");
    }

    #[test]
    fn test_read_shift_jis() {
        let (bytes, _, _) = SHIFT_JIS.encode("診断名：統合失調症");
        let file = text_file(&bytes);
        let content = read_text_document(file.path(), DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(content, "診断名：統合失調症");
    }

    #[test]
    fn test_read_euc_jp() {
        let (bytes, _, _) = EUC_JP.encode("住所：東京都");
        let file = text_file(&bytes);
        let content = read_text_document(file.path(), DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(content, "住所：東京都");
    }

    #[test]
    fn test_undecodable_bytes_are_rejected() {
        let file = text_file(&[0x82, 0xa0, 0xff]);
        let err = read_text_document(file.path(), DEFAULT_MAX_BYTES).unwrap_err();
        assert!(matches!(err, RedactError::Document(_)));
    }

    #[test]
    fn test_size_limit() {
        let file = text_file(b"0123456789");
        assert!(read_text_document(file.path(), 10).is_ok());
        let err = read_text_document(file.path(), 9).unwrap_err();
        assert!(matches!(err, RedactError::Document(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.PDF");
        std::fs::write(&path, b"%PDF").unwrap();

        let err = read_text_document(&path, DEFAULT_MAX_BYTES).unwrap_err();
        assert!(err.to_string().contains(".pdf"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_text_document(dir.path().join("none.txt"), DEFAULT_MAX_BYTES).unwrap_err();
        assert!(matches!(err, RedactError::Io(_)));
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        assert_eq!(DocumentKind::from_path(Path::new("a.TXT")), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_path(Path::new("a.md")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }
}
