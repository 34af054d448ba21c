use qstree::{ParamsExt, QueryCarrier, Url};

fn main() {
    let url = Url::parse("https://example.com:8080/search?q=rust&page=2#results")
        .expect("Failed to parse URL");

    println!("URL: {}", url); // https://example.com:8080/search?q=rust&page=2#results
    println!("Scheme: {}", url.scheme()); // https
    println!("Host: {}", url.host()); // example.com
    println!("Port: {:?}", url.port()); // Some(8080)
    println!("Path: {}", url.path()); // /search
    println!("Query: {}", url.query()); // q=rust&page=2
    println!("Fragment: {}", url.fragment()); // results

    // Edit parameters; every step returns a new value
    let url = url.with_param("page", "3").without_param("q");
    println!("Edited: {}", url); // https://example.com:8080/search?page=3#results
}
