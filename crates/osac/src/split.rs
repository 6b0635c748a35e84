//! Splitting of `name-version` labels from release pages.

/// Version reported when a label does not split into exactly two parts.
pub const UNDETERMINED_VERSION: &str = "problem";

const SEPARATOR: char = '-';

/// Split a combined label such as `bash-3.2` into `(name, version)`.
///
/// Labels with no hyphen, or with more than one, keep their first segment as
/// the name and get [`UNDETERMINED_VERSION`]. Hyphenated project names are
/// therefore not recovered (`"a-b-c"` gives `("a", "problem")`).
pub fn split_project_name(label: &str) -> (String, String) {
    let mut parts = label.split(SEPARATOR);
    // split always yields at least one item
    let first = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (Some(version), None) => (first.to_string(), version.to_string()),
        _ => (first.to_string(), UNDETERMINED_VERSION.to_string()),
    }
}

/// Rebuild the original label, or `None` when the version was undetermined.
pub fn join_project_name(name: &str, version: &str) -> Option<String> {
    (version != UNDETERMINED_VERSION).then(|| format!("{name}{SEPARATOR}{version}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_parts() {
        assert_eq!(
            split_project_name("foo-1.2.3"),
            ("foo".to_string(), "1.2.3".to_string())
        );
    }

    #[test]
    fn test_split_no_separator() {
        assert_eq!(
            split_project_name("foo"),
            ("foo".to_string(), UNDETERMINED_VERSION.to_string())
        );
    }

    #[test]
    fn test_split_too_many_parts() {
        let (name, version) = split_project_name("a-b-c");
        assert_eq!(name, "a");
        assert_eq!(version, UNDETERMINED_VERSION);
        assert!(!version.is_empty());
    }

    #[test]
    fn test_split_empty_label() {
        assert_eq!(
            split_project_name(""),
            (String::new(), UNDETERMINED_VERSION.to_string())
        );
    }

    #[test]
    fn test_split_partitions_label() {
        for label in ["bash-3.2", "zlib-12", "OpenSSH-189", "x-"] {
            let (name, version) = split_project_name(label);
            assert_eq!(join_project_name(&name, &version).as_deref(), Some(label));
        }
    }
}
