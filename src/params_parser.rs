use crate::compat::{String, ToString, Vec, format};
use crate::helpers::first_bracket;
use crate::param_tree::{ParamTree, Value};
use crate::percent_encode::percent_decode_lossy;
use crate::policy::CollisionPolicy;

/// One step of a bracketed key path. `a[b][]` walks the named segment `b`
/// and then an anonymous append slot.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Named(String),
    Append,
}

/// Parses a raw query string into a [`ParamTree`], honoring PHP-style
/// bracket notation for nesting (`a[b][]=1`).
///
/// Parsing is total: any input string produces some deterministic tree, and
/// no call mutates the parser, so one instance is freely shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamsParser {
    policy: CollisionPolicy,
}

impl ParamsParser {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Parse a query string (with or without leading `?`).
    pub fn parse(&self, query: &str) -> ParamTree {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut tree = ParamTree::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            // Split at the FIRST '='; later '=' stay in the raw value.
            // A segment without '=' carries no value at all.
            let (key, raw_value) = match pair.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (pair, None),
            };
            let key = percent_decode_lossy(key);
            let (root, path) = split_key_path(&key);
            let value = self.shape_value(raw_value);
            self.write_path(tree.slot(root), &path, value);
        }
        tree
    }

    /// Value-shaping rule: under `ComaSeparated` a `,`-carrying value
    /// becomes a list of scalars. Values are never percent-decoded here;
    /// that stays with the caller.
    fn shape_value(&self, raw_value: Option<&str>) -> Value {
        let Some(raw) = raw_value else {
            return Value::Null;
        };
        if self.policy == CollisionPolicy::ComaSeparated && raw.contains(',') {
            return Value::List(
                raw.split(',')
                    .map(|piece| Value::Scalar(piece.to_string()))
                    .collect(),
            );
        }
        Value::Scalar(raw.to_string())
    }

    /// Hydration step: walk one node of the path, reshaping the current
    /// node to the container kind the segment demands, and recurse into the
    /// sub-slot. Each hydration level owns the slot it hands down; no alias
    /// into a parent survives the walk.
    fn write_path(&self, node: &mut Value, path: &[Segment], value: Value) {
        let Some((segment, rest)) = path.split_first() else {
            self.write_leaf(node, value);
            return;
        };
        match segment {
            Segment::Named(name) => {
                self.write_path(make_map(node).slot(name), rest, value);
            }
            Segment::Append => {
                let items = make_list(node);
                // Every append traversal opens a fresh slot; arrival order
                // is the list order.
                items.push(Value::Null);
                let last = items.len() - 1;
                self.write_path(&mut items[last], rest, value);
            }
        }
    }

    /// Collision rule at the terminal node. A `Null` node (fresh slot or a
    /// bare key's residue) holds no value and is written outright.
    fn write_leaf(&self, node: &mut Value, value: Value) {
        if self.policy == CollisionPolicy::FlattenAsArray && !node.is_null() {
            let mut items = match core::mem::take(node) {
                Value::List(items) => items,
                existing => {
                    let mut items = Vec::with_capacity(2);
                    items.push(existing);
                    items
                }
            };
            match value {
                Value::List(new_items) => items.extend(new_items),
                new_value => items.push(new_value),
            }
            *node = Value::List(items);
        } else {
            *node = value;
        }
    }
}

/// Split a decoded key into its root (text before the first `[`, possibly
/// empty) and its bracketed path segments.
///
/// Segments are matched lazily left to right: each is the text between a
/// `[` and the next `]`. An unclosed `[` ends the scan; stray text between
/// segments is skipped.
fn split_key_path(key: &str) -> (&str, Vec<Segment>) {
    let Some(root_end) = first_bracket(key) else {
        return (key, Vec::new());
    };

    let root = &key[..root_end];
    let mut path = Vec::new();
    let mut rest = &key[root_end..];
    loop {
        let Some(open) = first_bracket(rest) else {
            break;
        };
        let after_open = &rest[open + 1..];
        let Some(close) = memchr::memchr(b']', after_open.as_bytes()) else {
            break;
        };
        let content = &after_open[..close];
        path.push(if content.is_empty() {
            Segment::Append
        } else {
            Segment::Named(content.to_string())
        });
        rest = &after_open[close + 1..];
    }
    (root, path)
}

/// Reshape a node so a named segment can descend into it. A list converts
/// to a map keyed by its decimal indices; anything else is vivified as an
/// empty map.
fn make_map(node: &mut Value) -> &mut ParamTree {
    if !matches!(node, Value::Map(_)) {
        let tree = match core::mem::take(node) {
            Value::List(items) => {
                let mut tree = ParamTree::new();
                for (index, item) in items.into_iter().enumerate() {
                    tree.insert(&format!("{index}"), item);
                }
                tree
            }
            _ => ParamTree::new(),
        };
        *node = Value::Map(tree);
    }
    match node {
        Value::Map(tree) => tree,
        _ => unreachable!(),
    }
}

/// Reshape a node so an append segment can push into it. A map keeps its
/// values (in order, keys dropped); anything else is vivified as an empty
/// list.
fn make_list(node: &mut Value) -> &mut Vec<Value> {
    if !matches!(node, Value::List(_)) {
        let items = match core::mem::take(node) {
            Value::Map(tree) => tree.into_values(),
            _ => Vec::new(),
        };
        *node = Value::List(items);
    }
    match node {
        Value::List(items) => items,
        _ => unreachable!(),
    }
}
