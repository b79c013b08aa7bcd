use std::fmt;

/// Separator between a vendor package and a topic name (`package::topic`).
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Logical name of a translation document shared by every language.
///
/// Application topics are plain file names (`user`). Topics owned by a
/// vendor package carry the package as namespace (`courier::user`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic {
    pub namespace: Option<String>,
    pub name: String,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    pub fn vendor(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(package.into()),
            name: name.into(),
        }
    }

    /// Parse `"user"` or `"package::user"`.
    pub fn parse(topic: &str) -> Self {
        match topic.split_once(NAMESPACE_SEPARATOR) {
            Some((package, name)) => Self::vendor(package, name),
            None => Self::new(topic),
        }
    }

    pub fn is_vendor(&self) -> bool {
        self.namespace.is_some()
    }

    /// Split a full key reference into its topic and key path.
    ///
    /// The topic is everything before the first dot:
    /// - `"user.profile.title"` -> (`user`, `"profile.title"`)
    /// - `"courier::user.name"` -> (`courier::user`, `"name"`)
    ///
    /// Returns `None` when there is no dot or either side is empty.
    pub fn split_reference(reference: &str) -> Option<(Topic, &str)> {
        let (topic, key) = reference.split_once('.')?;
        if topic.is_empty() || key.is_empty() {
            return None;
        }
        Some((Topic::parse(topic), key))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(package) => write!(f, "{}{}{}", package, NAMESPACE_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::data::topic::*;

    #[test]
    fn test_parse_plain_topic() {
        let topic = Topic::parse("user");
        assert_eq!(topic, Topic::new("user"));
        assert!(!topic.is_vendor());
    }

    #[test]
    fn test_parse_vendor_topic() {
        let topic = Topic::parse("courier::mail");
        assert_eq!(topic, Topic::vendor("courier", "mail"));
        assert_eq!(topic.to_string(), "courier::mail");
    }

    #[test]
    fn test_split_reference_on_first_dot() {
        let (topic, key) = Topic::split_reference("user.profile.title").unwrap();
        assert_eq!(topic, Topic::new("user"));
        assert_eq!(key, "profile.title");

        let (topic, key) = Topic::split_reference("courier::mail.subject").unwrap();
        assert_eq!(topic, Topic::vendor("courier", "mail"));
        assert_eq!(key, "subject");
    }

    #[test]
    fn test_split_reference_rejects_incomplete() {
        assert!(Topic::split_reference("user").is_none());
        assert!(Topic::split_reference(".title").is_none());
        assert!(Topic::split_reference("user.").is_none());
    }
}
