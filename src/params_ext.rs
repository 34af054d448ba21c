use crate::param_tree::{ParamTree, Value};
use crate::params_parser::ParamsParser;
use crate::params_serializer::ParamsSerializer;
use crate::policy::CollisionPolicy;
use crate::url::QueryCarrier;

/// Parameter-level operations over any query-carrying URL value.
///
/// Reads go through [`ParamsParser`]; every write re-parses the carried
/// query, edits a fresh tree, and hands the rebuilt string back through
/// [`QueryCarrier::with_query`] — explicit forwarding, so the carrier keeps
/// its value semantics.
pub trait ParamsExt: QueryCarrier {
    /// Parse the carried query under the given policy. The returned tree is
    /// a caller-owned snapshot; mutating it does not touch the carrier.
    fn params_as(&self, policy: CollisionPolicy) -> ParamTree {
        ParamsParser::new(policy).parse(self.query())
    }

    /// Parse the carried query under the default [`CollisionPolicy::Brackets`].
    fn params(&self) -> ParamTree {
        self.params_as(CollisionPolicy::Brackets)
    }

    /// Look up a single root-level parameter.
    fn param(&self, key: &str) -> Option<Value> {
        self.params().remove(key)
    }

    /// Rebuild the query from an edited tree.
    #[must_use]
    fn with_param_tree(&self, tree: &ParamTree) -> Self {
        self.with_query(&ParamsSerializer::new().serialize(tree))
    }

    /// Set a root-level parameter, replacing whatever the key held —
    /// including a whole list or subtree.
    #[must_use]
    fn with_param(&self, key: &str, value: impl Into<Value>) -> Self {
        let mut tree = self.params();
        tree.insert(key, value);
        self.with_param_tree(&tree)
    }

    /// Append to a root-level parameter: a missing key is set outright, an
    /// existing scalar becomes a two-element list, and an existing list
    /// grows by one element.
    #[must_use]
    fn with_appended_param(&self, key: &str, value: impl Into<Value>) -> Self {
        let mut tree = self.params();
        tree.append(key, value);
        self.with_param_tree(&tree)
    }

    /// Set several parameters at once, in iteration order.
    #[must_use]
    fn with_params<K, V, I>(&self, entries: I) -> Self
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tree = self.params();
        for (key, value) in entries {
            tree.insert(key.as_ref(), value);
        }
        self.with_param_tree(&tree)
    }

    /// Drop a root-level parameter. A missing key is a no-op.
    #[must_use]
    fn without_param(&self, key: &str) -> Self {
        let mut tree = self.params();
        tree.remove(key);
        self.with_param_tree(&tree)
    }

    /// Drop several parameters at once.
    #[must_use]
    fn without_params<K, I>(&self, keys: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let mut tree = self.params();
        for key in keys {
            tree.remove(key.as_ref());
        }
        self.with_param_tree(&tree)
    }

    /// Drop the whole query.
    #[must_use]
    fn with_cleared_params(&self) -> Self {
        self.with_query("")
    }
}

impl<T: QueryCarrier> ParamsExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{String, ToString};

    /// Minimal carrier proving the extension needs nothing beyond the
    /// capability pair.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Query(String);

    impl QueryCarrier for Query {
        fn query(&self) -> &str {
            &self.0
        }

        fn with_query(&self, query: &str) -> Self {
            Query(query.to_string())
        }
    }

    #[test]
    fn test_with_param_sets_and_overwrites() {
        let q = Query("a=foo".to_string());
        assert_eq!(q.with_param("b", "bar").0, "a=foo&b=bar");
        assert_eq!(q.with_param("a", "new").0, "a=new");
    }

    #[test]
    fn test_with_param_replaces_list_wholesale() {
        let q = Query("a=foo&b[]=baz".to_string());
        assert_eq!(q.with_param("b", "bar").0, "a=foo&b=bar");
    }

    #[test]
    fn test_with_appended_param_grows_list() {
        let q = Query("b[]=baz".to_string());
        let appended = q.with_appended_param("b", "bar");
        assert_eq!(appended.0, "b[0]=baz&b[1]=bar");
    }

    #[test]
    fn test_without_param() {
        let q = Query("a=1&b=2".to_string());
        assert_eq!(q.without_param("a").0, "b=2");
        assert_eq!(q.without_param("missing").0, "a=1&b=2");
    }

    #[test]
    fn test_param_lookup() {
        let q = Query("a=1&flag".to_string());
        assert_eq!(q.param("a"), Some(Value::from("1")));
        assert_eq!(q.param("flag"), Some(Value::Null));
        assert_eq!(q.param("missing"), None);
    }

    #[test]
    fn test_with_cleared_params() {
        let q = Query("a=1&b=2".to_string());
        assert_eq!(q.with_cleared_params().0, "");
    }
}
