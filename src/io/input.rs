use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a raw transcript file into a string.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Parse a comma-separated participant list.
pub fn parse_participants(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A: Hello.").unwrap();

        let content = read_transcript_file(file.path()).unwrap();
        assert_eq!(content, "A: Hello.");
    }

    #[test]
    fn test_read_missing_file_mentions_path() {
        let err = read_transcript_file(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(format!("{}", err).contains("file.txt"));
    }

    #[test]
    fn test_parse_participants() {
        let set = parse_participants("Alice, Bob ,Carol");
        assert_eq!(set.len(), 3);
        assert!(set.contains("Alice"));
        assert!(set.contains("Bob"));
        assert!(set.contains("Carol"));
    }

    #[test]
    fn test_parse_participants_empty() {
        assert!(parse_participants("").is_empty());
        assert!(parse_participants(" , ,").is_empty());
    }
}
