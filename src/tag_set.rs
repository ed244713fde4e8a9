use std::fmt;

use indexmap::IndexSet;

/// Insertion-ordered set of image tag strings.
///
/// Duplicates are collapsed by string equality on insert with the
/// first occurrence keeping its position, which is exactly the
/// behavior the tag list needs when a literal version tag collides
/// with `latest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, returning `false` if it was already present.
    pub fn insert<S>(&mut self, tag: S) -> bool
    where
        S: Into<String>,
    {
        self.0.insert(tag.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().cloned().collect::<Vec<_>>().join(" "))
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TagSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use imapfetch_build_utils::string_vec;

    use super::TagSet;

    #[test]
    fn insert_preserves_first_seen_order() {
        let mut tags = TagSet::new();

        assert!(tags.insert("imapfetch:1"));
        assert!(tags.insert("imapfetch:latest"));
        assert!(tags.insert("imapfetch:1.2"));
        assert!(!tags.insert("imapfetch:latest"));

        assert_eq!(
            Vec::from(tags),
            string_vec!["imapfetch:1", "imapfetch:latest", "imapfetch:1.2"],
        );
    }

    #[test]
    fn display_joins_with_spaces() {
        let tags: TagSet = string_vec!["a:1", "a:latest"].into_iter().collect();

        assert_eq!(tags.to_string(), "a:1 a:latest");
    }

    #[test]
    fn empty() {
        let tags = TagSet::new();

        assert!(tags.is_empty());
        assert_eq!(tags.len(), 0);
        assert_eq!(tags.to_string(), "");
    }
}
