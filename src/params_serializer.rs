use crate::compat::String;
use crate::param_tree::{ParamTree, Value};
use crate::percent_encode::{percent_encode_key_into, percent_encode_value_into};

/// How list slots are spelled in emitted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexStyle {
    /// Explicit `[0]`, `[1]`, ... — stable, the default. Re-parses as a map
    /// keyed by the indices, per the bracket-notation grammar.
    #[default]
    Numeric,
    /// Anonymous `[]` append markers. Re-parses back into a list.
    Append,
}

/// Serializes a [`ParamTree`] back into a canonical query string, depth
/// first in insertion order.
///
/// Inverse-compatible with the parser: a map/scalar-only tree round-trips
/// as-is, and a list-bearing tree round-trips under [`IndexStyle::Append`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamsSerializer {
    index_style: IndexStyle,
}

impl ParamsSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_style(index_style: IndexStyle) -> Self {
        Self { index_style }
    }

    pub fn index_style(&self) -> IndexStyle {
        self.index_style
    }

    /// Serialize to a query string without leading `?`. An empty tree
    /// yields the empty string.
    pub fn serialize(&self, tree: &ParamTree) -> String {
        let mut output = String::new();
        for (key, value) in tree.iter() {
            let mut path = String::with_capacity(key.len());
            percent_encode_key_into(&mut path, key);
            self.emit(&mut output, &path, value);
        }
        output
    }

    fn emit(&self, output: &mut String, path: &str, value: &Value) {
        match value {
            // A null leaf is a bare key, keeping it distinct from `=`
            Value::Null => {
                push_separator(output);
                output.push_str(path);
            }
            Value::Scalar(scalar) => {
                push_separator(output);
                output.push_str(path);
                output.push('=');
                percent_encode_value_into(output, scalar);
            }
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    let mut sub_path = String::with_capacity(path.len() + 4);
                    sub_path.push_str(path);
                    sub_path.push('[');
                    if self.index_style == IndexStyle::Numeric {
                        push_decimal(&mut sub_path, index);
                    }
                    sub_path.push(']');
                    self.emit(output, &sub_path, item);
                }
            }
            Value::Map(map) => {
                for (key, item) in map.iter() {
                    let mut sub_path = String::with_capacity(path.len() + key.len() + 2);
                    sub_path.push_str(path);
                    sub_path.push('[');
                    percent_encode_key_into(&mut sub_path, key);
                    sub_path.push(']');
                    self.emit(output, &sub_path, item);
                }
            }
        }
    }
}

fn push_separator(output: &mut String) {
    if !output.is_empty() {
        output.push('&');
    }
}

fn push_decimal(output: &mut String, index: usize) {
    use core::fmt::Write;
    let _ = write!(output, "{index}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::Vec;
    use crate::params_parser::ParamsParser;
    use crate::policy::CollisionPolicy;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn serialize(tree: &ParamTree) -> String {
        ParamsSerializer::new().serialize(tree)
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(serialize(&ParamTree::new()), "");
    }

    #[test]
    fn test_scalar_and_null_leaves() {
        let mut tree = ParamTree::new();
        tree.insert("a", "1");
        tree.insert("flag", Value::Null);
        tree.insert("empty", "");
        assert_eq!(serialize(&tree), "a=1&flag&empty=");
    }

    #[test]
    fn test_nested_map_path() {
        let mut inner = ParamTree::new();
        inner.insert("c", "1");
        let mut mid = ParamTree::new();
        mid.insert("b", inner);
        let mut tree = ParamTree::new();
        tree.insert("a", mid);
        assert_eq!(serialize(&tree), "a[b][c]=1");
    }

    #[test]
    fn test_list_numeric_indices() {
        let mut tree = ParamTree::new();
        tree.insert("a", vec![Value::from("1"), Value::from("2")]);
        assert_eq!(serialize(&tree), "a[0]=1&a[1]=2");
    }

    #[test]
    fn test_list_append_markers() {
        let mut tree = ParamTree::new();
        tree.insert("a", vec![Value::from("1"), Value::from("2")]);
        let serializer = ParamsSerializer::with_index_style(IndexStyle::Append);
        assert_eq!(serializer.serialize(&tree), "a[]=1&a[]=2");
    }

    #[test]
    fn test_empty_containers_emit_nothing() {
        let mut tree = ParamTree::new();
        tree.insert("a", Vec::<Value>::new());
        tree.insert("b", ParamTree::new());
        tree.insert("c", "1");
        assert_eq!(serialize(&tree), "c=1");
    }

    #[test]
    fn test_literal_brackets_in_key_are_escaped() {
        let mut tree = ParamTree::new();
        tree.insert("a[b]", "1");
        let encoded = serialize(&tree);
        assert_eq!(encoded, "a%5Bb%5D=1");

        // Keys decode before bracket scanning, so the grammar still reads
        // this as path structure on the way back in
        let parsed = ParamsParser::new(CollisionPolicy::Brackets).parse(&encoded);
        let map = parsed.get("a").and_then(Value::as_map).unwrap();
        assert_eq!(map.get("b").and_then(Value::as_str), Some("1"));
    }

    #[test]
    fn test_append_style_round_trips_lists() {
        let parser = ParamsParser::new(CollisionPolicy::Brackets);
        let tree = parser.parse("a[]=1&a[]=2&b[x][]=3");
        let serializer = ParamsSerializer::with_index_style(IndexStyle::Append);
        assert_eq!(parser.parse(&serializer.serialize(&tree)), tree);
    }
}
