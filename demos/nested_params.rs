use qstree::{CollisionPolicy, IndexStyle, ParamsParser, ParamsSerializer, Value};

fn main() {
    let parser = ParamsParser::new(CollisionPolicy::Brackets);

    // Bracket notation nests maps and lists
    let tree = parser.parse("filter[tags][]=alpha&filter[tags][]=beta&filter[owner]=me");
    let filter = tree.get("filter").and_then(Value::as_map).unwrap();
    println!("owner = {:?}", filter.get("owner").and_then(Value::as_str));
    println!(
        "tags  = {}",
        filter
            .get("tags")
            .and_then(Value::as_list)
            .map(|items| items.len())
            .unwrap_or(0)
    );

    // Lists re-serialize with numeric indices by default...
    let serializer = ParamsSerializer::new();
    println!("numeric: {}", serializer.serialize(&tree));

    // ...or with append markers, which round-trip back into lists
    let serializer = ParamsSerializer::with_index_style(IndexStyle::Append);
    println!("append:  {}", serializer.serialize(&tree));

    // Policies change how repeated keys land
    let flat = ParamsParser::new(CollisionPolicy::FlattenAsArray).parse("b=baz&b=bar");
    println!("flattened: {:?}", flat.get("b"));

    let coma = ParamsParser::new(CollisionPolicy::ComaSeparated).parse("a=1,2,3");
    println!("coma-split: {:?}", coma.get("a"));
}
