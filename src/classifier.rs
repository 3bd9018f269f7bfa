/// Filename classification by extension.
///
/// This module groups filenames by their extension, defined as the substring
/// starting at the last `.` of the name (dot included). Names without a `.`
/// carry no extension and are left out of the classification entirely.
///
/// # Examples
///
/// ```
/// use dirsweep::classifier::file_extension;
///
/// assert_eq!(file_extension("notes.txt"), Some(".txt"));
/// assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(file_extension("Makefile"), None);
/// ```
use std::collections::HashMap;

/// Mapping from extension (leading dot included) to the filenames sharing it,
/// in the order they were classified.
pub type ClassificationMap = HashMap<String, Vec<String>>;

/// Extracts the extension of a filename, including the leading dot.
///
/// Returns `None` when the name contains no `.` at all. A name whose only
/// `.` is the leading character (`.gitignore`) yields the whole name as its
/// extension, so such files classify under a directory named after
/// themselves.
///
/// # Examples
///
/// ```
/// use dirsweep::classifier::file_extension;
///
/// assert_eq!(file_extension(".gitignore"), Some(".gitignore"));
/// assert_eq!(file_extension("trailing."), Some("."));
/// ```
pub fn file_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i..])
}

/// Groups filenames by extension into a [`ClassificationMap`].
///
/// Names without an extension are skipped. Within each extension the input
/// order is preserved.
///
/// # Examples
///
/// ```
/// use dirsweep::classifier::classify;
///
/// let map = classify(vec![
///     "a.txt".to_string(),
///     "b.md".to_string(),
///     "c.txt".to_string(),
///     "README".to_string(),
/// ]);
///
/// assert_eq!(map[".txt"], vec!["a.txt", "c.txt"]);
/// assert_eq!(map[".md"], vec!["b.md"]);
/// assert!(!map.contains_key(""));
/// ```
pub fn classify(names: Vec<String>) -> ClassificationMap {
    let mut map = ClassificationMap::new();

    for name in names {
        if let Some(extension) = file_extension(&name) {
            map.entry(extension.to_string()).or_default().push(name);
        }
    }

    map
}
