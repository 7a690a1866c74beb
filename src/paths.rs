//! Path conventions shared by every stage of the generator
//!
//! All cross-database reasoning happens over forward-slash,
//! root-relative paths. This module owns the conventions: separators
//! normalize to `/`, configured prefixes carry exactly one trailing
//! `/`, and resolution is purely lexical. No filesystem access, no
//! symlink traversal, and the target file never has to exist.

use std::path::{Component, Path, PathBuf};

use crate::{ClangdGenError, Result};

/// Normalize a configured path prefix for stable comparison.
///
/// Separators become `/`, leading slashes are stripped, and non-empty
/// prefixes end with exactly one `/` so that `a/b` and `a/b/` compare
/// as the same prefix.
pub fn normalize_prefix(prefix: &str) -> String {
    let replaced = prefix.replace('\\', "/");
    let trimmed = replaced.trim_start_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Check whether `rel_path` equals or falls under any of the prefixes.
///
/// Prefixes must already be normalized via [`normalize_prefix`]. The
/// bare directory (`a/b`) and its subtree (`a/b/...`) are both
/// considered excluded by the prefix `a/b/`.
pub fn is_excluded(rel_path: &str, prefixes: &[String]) -> bool {
    let rel = rel_path.replace('\\', "/");
    prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .any(|prefix| {
            let without_slash = &prefix[..prefix.len() - 1];
            rel == without_slash || rel.starts_with(prefix.as_str())
        })
}

/// Lexically normalize a path: resolve `.` and `..` components without
/// touching the filesystem.
///
/// `..` pops the previous segment where one exists; at an absolute
/// root it is dropped. Leading `..` on a relative path is preserved.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render `path` relative to `root` with forward slashes, or `None`
/// when it does not fall under `root` (including `path == root`).
pub fn relative_to_root(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(segment) => {
                segments.push(segment.to_string_lossy().into_owned());
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Resolve the repository root from `Option<PathBuf>`, defaulting to
/// the current working directory.
pub fn resolve_root(root: Option<&PathBuf>) -> Result<PathBuf> {
    let resolved = match root {
        Some(p) if p.is_absolute() => p.clone(),
        Some(p) => current_dir()?.join(p),
        None => current_dir()?,
    };
    ensure_directory(&resolved)?;
    Ok(lexical_normalize(&resolved))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| ClangdGenError::DirectoryNotFound {
        path: format!("current directory: {}", e),
    })
}

/// Check that a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<&Path> {
    if !path.exists() {
        return Err(ClangdGenError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(ClangdGenError::DirectoryNotFound {
            path: format!("{} is not a directory", path.display()),
        });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix_adds_trailing_slash() {
        assert_eq!(normalize_prefix("a/b"), "a/b/");
        assert_eq!(normalize_prefix("a/b/"), "a/b/");
    }

    #[test]
    fn test_normalize_prefix_strips_leading_and_backslashes() {
        assert_eq!(normalize_prefix("/source/foo"), "source/foo/");
        assert_eq!(normalize_prefix(r"source\foo"), "source/foo/");
    }

    #[test]
    fn test_normalize_prefix_empty() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/"), "");
    }

    #[test]
    fn test_is_excluded_exact_and_subtree() {
        let prefixes = vec!["source/generated/".to_string()];
        assert!(is_excluded("source/generated", &prefixes));
        assert!(is_excluded("source/generated/a.c", &prefixes));
        assert!(!is_excluded("source/generated2/a.c", &prefixes));
        assert!(!is_excluded("source/other/a.c", &prefixes));
    }

    #[test]
    fn test_is_excluded_empty_prefix_matches_nothing() {
        let prefixes = vec![String::new()];
        assert!(!is_excluded("source/a.c", &prefixes));
    }

    #[test]
    fn test_lexical_normalize_dots() {
        assert_eq!(
            lexical_normalize(Path::new("/repo/build/../source/./a.c")),
            PathBuf::from("/repo/source/a.c")
        );
    }

    #[test]
    fn test_lexical_normalize_dotdot_at_root_stays_at_root() {
        assert_eq!(
            lexical_normalize(Path::new("/repo/../../a.c")),
            PathBuf::from("/a.c")
        );
    }

    #[test]
    fn test_lexical_normalize_preserves_leading_dotdot() {
        assert_eq!(
            lexical_normalize(Path::new("../a/b.c")),
            PathBuf::from("../a/b.c")
        );
    }

    #[test]
    fn test_relative_to_root_inside() {
        assert_eq!(
            relative_to_root(Path::new("/repo/source/a.c"), Path::new("/repo")),
            Some("source/a.c".to_string())
        );
    }

    #[test]
    fn test_relative_to_root_outside() {
        assert_eq!(
            relative_to_root(Path::new("/other/a.c"), Path::new("/repo")),
            None
        );
    }

    #[test]
    fn test_relative_to_root_root_itself() {
        assert_eq!(
            relative_to_root(Path::new("/repo"), Path::new("/repo")),
            None
        );
    }
}
