#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: qstree vs form_urlencoded vs the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qstree::{CollisionPolicy, IndexStyle, ParamsParser, ParamsSerializer};

const FLAT_QUERY: &str = "q=rust+query&page=3&per_page=50&sort=stars&order=desc";
const NESTED_QUERY: &str =
    "filter[tags][]=alpha&filter[tags][]=beta&filter[owner]=me&page=1&flags[]=a&flags[]=b";

fn bench_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    let parser = ParamsParser::new(CollisionPolicy::Brackets);
    group.bench_function("qstree", |b| {
        b.iter(|| parser.parse(black_box(FLAT_QUERY)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(FLAT_QUERY).as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });
    });

    group.bench_function("url_crate", |b| {
        let base = url::Url::parse("http://example.com/").unwrap();
        b.iter(|| {
            let mut u = base.clone();
            u.set_query(Some(black_box(FLAT_QUERY)));
            u.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    for policy in [
        CollisionPolicy::Brackets,
        CollisionPolicy::FlattenAsArray,
        CollisionPolicy::ComaSeparated,
    ] {
        let parser = ParamsParser::new(policy);
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| parser.parse(black_box(NESTED_QUERY)));
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let parser = ParamsParser::new(CollisionPolicy::Brackets);
    let tree = parser.parse(NESTED_QUERY);

    let numeric = ParamsSerializer::new();
    group.bench_function("numeric_indices", |b| {
        b.iter(|| numeric.serialize(black_box(&tree)));
    });

    let append = ParamsSerializer::with_index_style(IndexStyle::Append);
    group.bench_function("append_markers", |b| {
        b.iter(|| append.serialize(black_box(&tree)));
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    let parser = ParamsParser::new(CollisionPolicy::Brackets);
    let serializer = ParamsSerializer::with_index_style(IndexStyle::Append);

    group.bench_function("qstree", |b| {
        b.iter(|| {
            let tree = parser.parse(black_box(NESTED_QUERY));
            serializer.serialize(&tree)
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            let pairs: Vec<(String, String)> = form_urlencoded::parse(NESTED_QUERY.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let mut out = form_urlencoded::Serializer::new(String::new());
            out.extend_pairs(pairs.iter());
            out.finish()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_flat,
    bench_parse_nested,
    bench_serialize,
    bench_round_trip
);

criterion_main!(benches);
