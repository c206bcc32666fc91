// search-core/src/extract.rs
//! Text decoding for procedure files
//!
//! Procedure files are expected to be UTF-8, but files uploaded from other systems are
//! sometimes in a legacy encoding. Those are decoded with a detected encoding instead of
//! being rejected.

use std::fs;
use std::io;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decode raw bytes, detecting the encoding when they are not valid UTF-8
pub fn decode_text(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let detected_encoding: &'static Encoding = detector.guess(None, true);

    tracing::debug!("detected encoding {}", detected_encoding.name());

    let (decoded, encoding_used, had_errors) = detected_encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            "decoding with {} produced replacement characters, search results may be inaccurate",
            encoding_used.name()
        );
    }

    decoded.into_owned()
}

/// Read a text file, detecting the encoding when it is not valid UTF-8
pub fn read_text_with_encoding_detection(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(decode_text("[Sezione]\nàèìòù 📄".as_bytes()), "[Sezione]\nàèìòù 📄");
    }

    #[test]
    fn test_latin1_fallback() {
        // "Già fatto" in windows-1252
        let bytes = b"[Gi\xe0 fatto]\nCOMANDO: ls\nls -la\n";
        let text = decode_text(bytes);
        assert!(text.starts_with("[Gi"));
        assert!(text.contains("COMANDO: ls"));
        assert!(!text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.txt");
        fs::write(&path, "[S]\nd\n").unwrap();
        assert_eq!(read_text_with_encoding_detection(&path).unwrap(), "[S]\nd\n");
    }
}
