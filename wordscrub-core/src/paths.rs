// wordscrub-core/src/paths.rs
//! Output path derivation.
//!
//! Every segment of the input path, directories and file name alike, gets the
//! [`CLEAN_SUFFIX`] marker, and the result is rooted under the output root.
//! Both `/` and `\` separate segments regardless of platform, so paths copied
//! from Windows tooling produce the same tree on Unix.
//!
//! License: MIT OR APACHE 2.0

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::config::CLEAN_SUFFIX;

/// Maps an input file path to its counterpart in the mirrored output tree.
///
/// * An output root of `"."` (or an empty path) leaves the result relative to
///   the working directory, without a leading `./`.
/// * Root and drive prefixes are dropped, so absolute inputs land inside the
///   output root. `.` segments are dropped. `..` segments are suffixed like any
///   other name, which keeps them from escaping the output root.
pub fn derive_output_path(input: &Path, output_root: &Path) -> PathBuf {
    let mut out = if is_current_dir(output_root) {
        PathBuf::new()
    } else {
        output_root.to_path_buf()
    };

    for segment in segments(input) {
        out.push(with_suffix(&segment));
    }
    out
}

fn is_current_dir(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::CurDir))
}

fn segments(input: &Path) -> Vec<OsString> {
    let mut segments = Vec::new();
    for component in input.components() {
        match component {
            Component::Normal(name) => split_backslashes(name, &mut segments),
            Component::ParentDir => segments.push(OsString::from("..")),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    segments
}

fn split_backslashes(name: &OsStr, segments: &mut Vec<OsString>) {
    match name.to_str() {
        Some(s) if s.contains('\\') => {
            segments.extend(
                s.split('\\')
                    .filter(|part| !part.is_empty() && *part != ".")
                    .map(OsString::from),
            );
        }
        _ => segments.push(name.to_os_string()),
    }
}

fn with_suffix(segment: &OsStr) -> OsString {
    let mut suffixed = segment.to_os_string();
    suffixed.push(CLEAN_SUFFIX);
    suffixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_segment_is_suffixed() {
        assert_eq!(
            derive_output_path(Path::new("a/b/c.txt"), Path::new("out")),
            PathBuf::from("out/a-clean/b-clean/c.txt-clean")
        );
    }

    #[test]
    fn test_deterministic_across_calls() {
        let first = derive_output_path(Path::new("a/b/c.txt"), Path::new("out"));
        let _other = derive_output_path(Path::new("x/y.txt"), Path::new("elsewhere"));
        let second = derive_output_path(Path::new("a/b/c.txt"), Path::new("out"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_current_dir_root_is_not_prefixed() {
        assert_eq!(
            derive_output_path(Path::new("notes.txt"), Path::new(".")),
            PathBuf::from("notes.txt-clean")
        );
        assert_eq!(
            derive_output_path(Path::new("root/sub/b.txt"), Path::new("")),
            PathBuf::from("root-clean/sub-clean/b.txt-clean")
        );
    }

    #[test]
    fn test_current_dir_segments_are_dropped() {
        assert_eq!(
            derive_output_path(Path::new("./root/./a.txt"), Path::new("out")),
            PathBuf::from("out/root-clean/a.txt-clean")
        );
    }

    #[test]
    fn test_backslashes_are_separators() {
        assert_eq!(
            derive_output_path(Path::new("a\\b\\c.txt"), Path::new("out")),
            PathBuf::from("out/a-clean/b-clean/c.txt-clean")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_input_is_rerooted() {
        assert_eq!(
            derive_output_path(Path::new("/srv/corpus/a.txt"), Path::new("out")),
            PathBuf::from("out/srv-clean/corpus-clean/a.txt-clean")
        );
    }

    #[test]
    fn test_parent_segments_stay_inside_root() {
        assert_eq!(
            derive_output_path(Path::new("../shared/a.txt"), Path::new("out")),
            PathBuf::from("out/..-clean/shared-clean/a.txt-clean")
        );
    }
}
