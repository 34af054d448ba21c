use crate::compat::{String, ToString, Vec};

/// One node of a parsed query: an absent value, a scalar, an ordered list,
/// or a nested key/value mapping.
///
/// `Null` is what a bare key (`flag`) parses to; it is distinct from the
/// empty-string scalar produced by `flag=`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Scalar(String),
    List(Vec<Value>),
    Map(ParamTree),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Scalar content, if this node is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ParamTree> {
        match self {
            Self::Map(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

/// A bare key carries no value; `None` maps to `Null`.
impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        match s {
            Some(s) => Self::Scalar(s.to_string()),
            None => Self::Null,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<ParamTree> for Value {
    fn from(tree: ParamTree) -> Self {
        Self::Map(tree)
    }
}

/// An insertion-ordered mapping from parameter keys to [`Value`] nodes.
///
/// Keys iterate in order of first appearance; overwriting a key keeps its
/// original position. Lookup is linear, which wins for query-string-sized
/// maps and keeps ordering trivial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamTree {
    entries: Vec<(String, Value)>,
}

impl ParamTree {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert or overwrite. Returns the previous value; an overwritten key
    /// keeps its first-appearance position.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key.to_string(), value));
                None
            }
        }
    }

    /// Append a value under `key`: a missing key is set outright, an
    /// existing non-list value is wrapped into a list first, and a list
    /// grows by one element.
    pub fn append(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let Some(index) = self.entries.iter().position(|(k, _)| k == key) else {
            self.entries.push((key.to_string(), value));
            return;
        };
        match &mut self.entries[index].1 {
            Value::List(items) => items.push(value),
            slot => {
                let mut items = Vec::with_capacity(2);
                items.push(core::mem::take(slot));
                items.push(value);
                *slot = Value::List(items);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Mutable slot for `key`, created as `Null` when absent.
    /// This is the hydration entry point: a fresh slot reads as `Null`
    /// until its first write decides the node's shape.
    pub(crate) fn slot(&mut self, key: &str) -> &mut Value {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), Value::Null));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Consume the tree, keeping its values in order.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParamTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            let key = key.into();
            tree.insert(&key, value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_insert_preserves_first_appearance_order() {
        let mut tree = ParamTree::new();
        tree.insert("a", "1");
        tree.insert("c", "2");
        tree.insert("b", "3");
        tree.insert("a", "4"); // overwrite keeps position
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["a", "c", "b"]);
        assert_eq!(tree.get("a").and_then(Value::as_str), Some("4"));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut tree = ParamTree::new();
        assert_eq!(tree.insert("a", "1"), None);
        assert_eq!(tree.insert("a", "2"), Some(Value::from("1")));
    }

    #[test]
    fn test_append_wraps_scalar() {
        let mut tree = ParamTree::new();
        tree.append("k", "a");
        assert_eq!(tree.get("k").and_then(Value::as_str), Some("a"));
        tree.append("k", "b");
        tree.append("k", "c");
        assert_eq!(
            tree.get("k"),
            Some(&Value::List(vec![
                Value::from("a"),
                Value::from("b"),
                Value::from("c"),
            ]))
        );
    }

    #[test]
    fn test_remove() {
        let mut tree = ParamTree::new();
        tree.insert("a", "1");
        tree.insert("b", "2");
        assert_eq!(tree.remove("a"), Some(Value::from("1")));
        assert_eq!(tree.remove("a"), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_slot_creates_null() {
        let mut tree = ParamTree::new();
        assert!(tree.slot("fresh").is_null());
        assert!(tree.contains_key("fresh"));
        *tree.slot("fresh") = Value::from("x");
        assert_eq!(tree.get("fresh").and_then(Value::as_str), Some("x"));
    }

    #[test]
    fn test_null_distinct_from_empty_scalar() {
        assert_ne!(Value::Null, Value::from(""));
        assert_eq!(Value::from(None), Value::Null);
    }

    #[test]
    fn test_from_iterator() {
        let tree: ParamTree = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("b").and_then(Value::as_str), Some("2"));
    }
}
