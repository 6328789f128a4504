//! Corpus traversal and permissive reading.
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::error;

use crate::error::Error;

/// List corpus files under `root` carrying one of the given extensions.
///
/// The root is escaped so collection paths containing glob
/// metacharacters (`[`, `*`, `?`) stay literal; extensions match
/// case-insensitively (`.txt` also picks up `.TXT`). The result is
/// sorted lexicographically and de-duplicated, giving every run the
/// same stable traversal order; with a fixed seed this makes reruns
/// byte-for-byte reproducible. Unreadable directory entries are logged
/// and skipped.
pub fn find_text_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, Error> {
    let options = MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };
    let escaped_root = Pattern::escape(&root.to_string_lossy());

    let mut files = Vec::new();
    for ext in extensions {
        let pattern = format!("{}/**/*{}", escaped_root, ext);
        for entry in glob::glob_with(&pattern, options)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => (),
                Err(e) => error!("error listing corpus entry: {}", e),
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Category code of a file: the first path segment under the corpus root.
pub fn infer_category(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .ok()
        .and_then(|rel| rel.components().next())
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Path of `file` relative to `root`, `/`-separated.
pub fn rel_posix(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read a file, dropping malformed byte sequences instead of failing.
///
/// Decoding is lossy; the replacement characters it may introduce are
/// removed by the normalizer. Access errors still surface so the caller
/// can skip and count the file.
pub fn read_text_lossy(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    #[test]
    fn traversal_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("RD/2020")).unwrap();
        fs::create_dir_all(root.join("AD")).unwrap();
        fs::write(root.join("RD/2020/b.txt"), "b").unwrap();
        fs::write(root.join("RD/2020/a.txt"), "a").unwrap();
        fs::write(root.join("AD/c.text"), "c").unwrap();
        fs::write(root.join("AD/ignored.html"), "x").unwrap();

        let exts = vec![".txt".to_string(), ".text".to_string()];
        let files = find_text_files(root, &exts).unwrap();
        let rels: Vec<String> = files.iter().map(|f| rel_posix(root, f)).collect();
        assert_eq!(rels, vec!["AD/c.text", "RD/2020/a.txt", "RD/2020/b.txt"]);
    }

    #[test]
    fn root_with_glob_metacharacters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("collection [v2]");
        fs::create_dir_all(root.join("RD")).unwrap();
        fs::write(root.join("RD/doc.txt"), "نص").unwrap();

        let exts = vec![".txt".to_string()];
        let files = find_text_files(&root, &exts).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(rel_posix(&root, &files[0]), "RD/doc.txt");
    }

    #[test]
    fn extensions_match_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("RD")).unwrap();
        fs::write(root.join("RD/UPPER.TXT"), "نص").unwrap();
        fs::write(root.join("RD/lower.txt"), "نص").unwrap();

        let exts = vec![".txt".to_string()];
        let files = find_text_files(root, &exts).unwrap();
        let rels: Vec<String> = files.iter().map(|f| rel_posix(root, f)).collect();
        assert_eq!(rels, vec!["RD/UPPER.TXT", "RD/lower.txt"]);
    }

    #[test]
    fn category_is_first_segment() {
        let root = Path::new("/corpus");
        assert_eq!(
            infer_category(root, Path::new("/corpus/RD/2020/doc.txt")),
            "RD"
        );
        assert_eq!(infer_category(root, Path::new("/corpus/loose.txt")), "loose.txt");
        assert_eq!(infer_category(root, Path::new("/elsewhere/x.txt")), "UNKNOWN");
    }

    #[test]
    fn lossy_read_never_fails_on_bad_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xd9, 0x86, 0xff, 0xfe, 0x21]).unwrap();
        let text = read_text_lossy(&path).unwrap();
        assert!(text.contains('ن'));
        assert!(text.contains('!'));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_text_lossy(Path::new("/nonexistent/x.txt")).is_err());
    }
}
