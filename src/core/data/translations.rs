use indexmap::IndexMap;

/// A single value inside a translation document.
///
/// Leaves are always strings and nested levels are always [`Translations`],
/// so a document is a plain tree with no mixed shapes at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A translated string: `'submit' => 'Send'`
    Leaf(String),
    /// A nested group: `'form' => ['submit' => 'Send']`
    Node(Translations),
}

impl Entry {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Entry::Leaf(value) => Some(value),
            Entry::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Translations> {
        match self {
            Entry::Leaf(_) => None,
            Entry::Node(node) => Some(node),
        }
    }
}

/// An insertion-ordered translation tree (one level of a document).
///
/// Keys keep the order they were read or inserted in, so a document that is
/// parsed and rendered again produces the same layout. Equality is
/// order-sensitive for the same reason.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: IndexMap<String, Entry>,
}

impl PartialEq for Translations {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Translations {}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Insert an entry at this level. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    /// Look up an entry by dotted key path (e.g. `"form.submit"`).
    ///
    /// A key that literally contains the whole path wins over nested lookup.
    pub fn get_path(&self, path: &str) -> Option<&Entry> {
        if let Some(entry) = self.entries.get(path) {
            return Some(entry);
        }
        let (head, rest) = path.split_once('.')?;
        match self.entries.get(head)? {
            Entry::Node(node) => node.get_path(rest),
            Entry::Leaf(_) => None,
        }
    }

    /// True if the path addresses a leaf or a subtree.
    pub fn contains_path(&self, path: &str) -> bool {
        self.get_path(path).is_some()
    }

    /// Set a leaf at a dotted key path, creating intermediate levels.
    ///
    /// A leaf standing where an intermediate level is needed is replaced.
    pub fn set_path(&mut self, path: &str, value: impl Into<String>) {
        let segments: Vec<&str> = path.split('.').collect();
        self.set_segments(&segments, value.into());
    }

    fn set_segments(&mut self, segments: &[&str], value: String) {
        match segments {
            [] => {}
            [last] => {
                self.entries.insert((*last).to_string(), Entry::Leaf(value));
            }
            [head, rest @ ..] => {
                let entry = self
                    .entries
                    .entry((*head).to_string())
                    .or_insert_with(|| Entry::Node(Translations::new()));
                if matches!(entry, Entry::Leaf(_)) {
                    *entry = Entry::Node(Translations::new());
                }
                if let Entry::Node(node) = entry {
                    node.set_segments(rest, value);
                }
            }
        }
    }

    /// Remove the entry at a dotted key path together with its subtree.
    ///
    /// Sibling order is preserved; parents left empty are kept.
    pub fn remove_path(&mut self, path: &str) -> Option<Entry> {
        if self.entries.contains_key(path) {
            return self.entries.shift_remove(path);
        }
        let (head, rest) = path.split_once('.')?;
        match self.entries.get_mut(head)? {
            Entry::Node(node) => node.remove_path(rest),
            Entry::Leaf(_) => None,
        }
    }

    /// Rename the last segment of `path` to `new_name`, keeping its position.
    ///
    /// Returns `false` when the path does not exist or a sibling named
    /// `new_name` is already present.
    pub fn rename_path(&mut self, path: &str, new_name: &str) -> bool {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => match self.node_at_mut(parent) {
                Some(node) => (node, last),
                None => return false,
            },
            None => (self, path),
        };

        if parent.entries.contains_key(new_name) {
            return false;
        }
        let Some((index, _, entry)) = parent.entries.shift_remove_full(last) else {
            return false;
        };
        parent.entries.shift_insert(index, new_name.to_string(), entry);
        true
    }

    fn node_at_mut(&mut self, path: &str) -> Option<&mut Translations> {
        let mut current = self;
        for segment in path.split('.') {
            current = match current.entries.get_mut(segment)? {
                Entry::Node(node) => node,
                Entry::Leaf(_) => return None,
            };
        }
        Some(current)
    }

    /// Deep-merge `overlay` into this tree.
    ///
    /// Nested levels are merged key by key; anything else in the overlay
    /// replaces the existing entry. Keys missing from the overlay survive.
    pub fn merge(&mut self, overlay: Translations) {
        for (key, incoming) in overlay.entries {
            match incoming {
                Entry::Node(node) => match self.entries.get_mut(&key) {
                    Some(Entry::Node(existing)) => existing.merge(node),
                    _ => {
                        self.entries.insert(key, Entry::Node(node));
                    }
                },
                leaf => {
                    self.entries.insert(key, leaf);
                }
            }
        }
    }

    /// All leaves as `(dotted key, value)` pairs in document order.
    pub fn flatten(&self) -> Vec<(String, &str)> {
        let mut leaves = Vec::new();
        self.flatten_into("", &mut leaves);
        leaves
    }

    fn flatten_into<'a>(&'a self, prefix: &str, leaves: &mut Vec<(String, &'a str)>) {
        for (key, entry) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match entry {
                Entry::Leaf(value) => leaves.push((path, value)),
                Entry::Node(node) => node.flatten_into(&path, leaves),
            }
        }
    }
}

impl FromIterator<(String, Entry)> for Translations {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::data::translations::*;

    fn leaf(value: &str) -> Entry {
        Entry::Leaf(value.to_string())
    }

    fn dotted(pairs: &[(&str, &str)]) -> Translations {
        let mut translations = Translations::new();
        for (path, value) in pairs {
            translations.set_path(path, *value);
        }
        translations
    }

    #[test]
    fn test_set_path_nests_dotted_keys() {
        let translations = dotted(&[("form.submit", "Send"), ("form.cancel", "Cancel")]);

        let form = translations.get("form").and_then(Entry::as_node).unwrap();
        assert_eq!(form.get("submit"), Some(&leaf("Send")));
        assert_eq!(form.get("cancel"), Some(&leaf("Cancel")));
    }

    #[test]
    fn test_set_path_replaces_leaf_with_node() {
        let mut translations = dotted(&[("title", "Title")]);
        translations.set_path("title.short", "T");

        assert_eq!(
            translations.get_path("title.short").and_then(Entry::as_leaf),
            Some("T")
        );
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = dotted(&[("a", "1"), ("b", "2")]);
        let b = dotted(&[("b", "2"), ("a", "1")]);
        assert_ne!(a, b);
        assert_eq!(a, dotted(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_merge_keeps_siblings() {
        let mut existing = dotted(&[("a.b", "1"), ("c", "2")]);
        existing.merge(dotted(&[("a.x", "9")]));

        assert_eq!(existing, dotted(&[("a.b", "1"), ("a.x", "9"), ("c", "2")]));
    }

    #[test]
    fn test_merge_creates_missing_path() {
        let mut existing = dotted(&[("c", "2")]);
        existing.merge(dotted(&[("a.b.c", "deep")]));

        assert_eq!(
            existing.get_path("a.b.c").and_then(Entry::as_leaf),
            Some("deep")
        );
        assert_eq!(existing.get_path("c").and_then(Entry::as_leaf), Some("2"));
    }

    #[test]
    fn test_merge_overwrites_leaf_in_place() {
        let mut existing = dotted(&[("first", "1"), ("second", "2")]);
        existing.merge(dotted(&[("first", "one")]));

        let keys: Vec<&String> = existing.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["first", "second"]);
        assert_eq!(existing.get("first"), Some(&leaf("one")));
    }

    #[test]
    fn test_remove_path_subtree() {
        let mut translations = dotted(&[("a.b", "1"), ("a.c", "2"), ("d", "3")]);
        let removed = translations.remove_path("a");

        assert!(matches!(removed, Some(Entry::Node(_))));
        assert_eq!(translations, dotted(&[("d", "3")]));
    }

    #[test]
    fn test_remove_path_keeps_empty_parent() {
        let mut translations = dotted(&[("a.b", "1")]);
        translations.remove_path("a.b");

        assert_eq!(
            translations.get("a"),
            Some(&Entry::Node(Translations::new()))
        );
    }

    #[test]
    fn test_remove_missing_path_is_noop() {
        let mut translations = dotted(&[("a.b", "1"), ("c", "2")]);
        let before = translations.clone();

        assert_eq!(translations.remove_path("x.y.z"), None);
        assert_eq!(translations.remove_path("a.b.c"), None);
        assert_eq!(translations, before);
    }

    #[test]
    fn test_remove_preserves_sibling_order() {
        let mut translations = dotted(&[("z", "1"), ("a", "2"), ("m", "3")]);
        translations.remove_path("a");

        let keys: Vec<&String> = translations.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_literal_dotted_key_takes_precedence() {
        let translations: Translations = [("a.b".to_string(), leaf("literal"))]
            .into_iter()
            .collect();

        assert_eq!(
            translations.get_path("a.b").and_then(Entry::as_leaf),
            Some("literal")
        );
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut translations = dotted(&[("form.first", "1"), ("form.old", "2"), ("form.last", "3")]);

        assert!(translations.rename_path("form.old", "new"));

        let form = translations.get("form").and_then(Entry::as_node).unwrap();
        let keys: Vec<&String> = form.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["first", "new", "last"]);
    }

    #[test]
    fn test_rename_refuses_existing_sibling() {
        let mut translations = dotted(&[("a", "1"), ("b", "2")]);
        assert!(!translations.rename_path("a", "b"));
        assert!(!translations.rename_path("missing", "c"));
        assert_eq!(translations, dotted(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_flatten_in_document_order() {
        let translations = dotted(&[("b", "2"), ("a.y", "y"), ("a.x", "x")]);

        assert_eq!(
            translations.flatten(),
            vec![
                ("b".to_string(), "2"),
                ("a.y".to_string(), "y"),
                ("a.x".to_string(), "x"),
            ]
        );
    }
}
