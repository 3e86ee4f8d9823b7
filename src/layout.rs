//! The fixed skeleton every generated project gets.
//!
//! Paths are relative to the project root and joined against an absolute
//! root by the consumer; nothing here touches the filesystem.

/// A single entry of the skeleton, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Dir(&'static str),
    EmptyFile(&'static str),
}

/// Skeleton entries in creation order. The root directory itself is not
/// listed; it is always created first.
pub const ENTRIES: &[Entry] = &[
    Entry::Dir("src"),
    Entry::Dir("src/ressources"),
    Entry::EmptyFile("src/main.py"),
    Entry::EmptyFile("src/__init__.py"),
    Entry::Dir("tests"),
    Entry::EmptyFile("tests/main.py"),
    Entry::EmptyFile("tests/__init__.py"),
    Entry::EmptyFile("requirements.txt"),
];

/// Boilerplate files copied verbatim from the template source into the
/// project root, in copy order.
pub const TEMPLATE_FILES: &[&str] = &["README.md", "LICENSE"];

#[cfg(test)]
mod tests {
    use super::{Entry, ENTRIES, TEMPLATE_FILES};

    #[test]
    fn dirs_precede_their_files() {
        for (i, entry) in ENTRIES.iter().enumerate() {
            if let Entry::EmptyFile(rel) = entry {
                let Some((parent, _)) = rel.rsplit_once('/') else {
                    continue;
                };

                assert!(
                    ENTRIES[..i].contains(&Entry::Dir(parent)),
                    "{rel} listed before its parent directory"
                );
            }
        }
    }

    #[test]
    fn skeleton_is_complete() {
        use Entry::*;

        assert_eq!(
            ENTRIES,
            &[
                Dir("src"),
                Dir("src/ressources"),
                EmptyFile("src/main.py"),
                EmptyFile("src/__init__.py"),
                Dir("tests"),
                EmptyFile("tests/main.py"),
                EmptyFile("tests/__init__.py"),
                EmptyFile("requirements.txt"),
            ]
        );
        assert_eq!(TEMPLATE_FILES, &["README.md", "LICENSE"]);
    }
}
