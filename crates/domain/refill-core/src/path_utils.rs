use camino::{Utf8Component, Utf8Path};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::roots::SourceRoot;

/// Everything except the RFC 3986 unreserved characters gets escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathMapError {
    #[error("{path} is not below source root {root}")]
    OutsideRoot { path: String, root: String },
    #[error("{0} is the source root itself, not a file below it")]
    IsRoot(String),
}

pub struct RefillPath;

impl RefillPath {
    /// Strip the root and join what is left with `/`.
    ///
    /// Works on components, so the host separator never reaches the result.
    pub fn relative_to(root: &SourceRoot, path: &Utf8Path) -> Result<String, PathMapError> {
        let outside = || PathMapError::OutsideRoot {
            path: path.to_string(),
            root: root.to_string(),
        };

        let rel = path.strip_prefix(root.as_path()).map_err(|_| outside())?;

        let mut segments = Vec::new();
        for component in rel.components() {
            match component {
                Utf8Component::Normal(seg) => segments.push(seg),
                Utf8Component::CurDir => {}
                _ => return Err(outside()),
            }
        }

        if segments.is_empty() {
            return Err(PathMapError::IsRoot(path.to_string()));
        }
        Ok(segments.join("/"))
    }

    /// Percent-encode each `/`-separated segment of a relative path.
    pub fn encode(rel_path: &str) -> String {
        rel_path
            .split('/')
            .map(|seg| utf8_percent_encode(seg, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn strips_root_and_uses_forward_slashes() {
        let root = SourceRoot::new("/proj/images");
        let rel =
            RefillPath::relative_to(&root, Utf8Path::new("/proj/images/icons/small/a.png"))
                .unwrap();
        assert_eq!(rel, "icons/small/a.png");
    }

    #[test]
    fn root_given_with_trailing_separator() {
        let root = SourceRoot::new("/proj/images/");
        let rel = RefillPath::relative_to(&root, Utf8Path::new("/proj/images/a.png")).unwrap();
        assert_eq!(rel, "a.png");
    }

    #[test]
    fn relative_root_from_walker() {
        let root = SourceRoot::new("./site");
        let rel = RefillPath::relative_to(&root, Utf8Path::new("./site/css/main.css")).unwrap();
        assert_eq!(rel, "css/main.css");
    }

    #[test]
    fn rejects_paths_outside_root() {
        let root = SourceRoot::new("/proj/images");
        let err = RefillPath::relative_to(&root, Utf8Path::new("/proj/imagesX/a.png"))
            .unwrap_err();
        assert!(matches!(err, PathMapError::OutsideRoot { .. }));
    }

    #[test]
    fn rejects_the_root_itself() {
        let root = SourceRoot::new("/proj/images");
        let err = RefillPath::relative_to(&root, Utf8Path::new("/proj/images")).unwrap_err();
        assert!(matches!(err, PathMapError::IsRoot(_)));
    }

    #[test]
    fn encodes_reserved_and_keeps_slashes() {
        assert_eq!(RefillPath::encode("icons/a b.png"), "icons/a%20b.png");
        assert_eq!(RefillPath::encode("notes/#1.txt"), "notes/%231.txt");
        assert_eq!(RefillPath::encode("a/b?c=d&e"), "a/b%3Fc%3Dd%26e");
        assert_eq!(RefillPath::encode("keep-._~/x"), "keep-._~/x");
    }

    #[test]
    fn encodes_non_ascii_as_utf8_bytes() {
        assert_eq!(RefillPath::encode("über.txt"), "%C3%BCber.txt");
    }

    #[test]
    fn percent_sign_is_escaped_once() {
        assert_eq!(RefillPath::encode("100%.txt"), "100%25.txt");
    }

    #[test]
    fn encoding_decodes_back_to_original() {
        for original in [
            "icons/a b.png",
            "docs/#readme.md",
            "deep/dir with space/ünïcödé & more.bin",
            "100%/50%.txt",
        ] {
            let encoded = RefillPath::encode(original);
            assert!(!encoded.contains(' '));
            assert!(!encoded.contains('#'));
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, original);
        }
    }
}
