#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI against a catalog URL with an isolated data directory.
pub fn run_cli_with_env(args: &[&str], data_dir: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_estate"));
    cmd.args(args);
    cmd.env("ESTATE_API", api_url);
    cmd.env("ESTATE_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_with_env_success(args: &[&str], data_dir: &Path, api_url: &str) -> String {
    let output = run_cli_with_env(args, data_dir, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Base URL of a mock server.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// A property record as the catalog API sends it.
pub fn property(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": { "rendered": title },
        "content": {
            "rendered": "<p>Lovely home<br />\n&#8211; 3 bedrooms<br />\n&#8211; Garden</p>"
        },
        "property_type": "Duplex",
        "property_city": "ikoyi",
        "property_meta": { "fave_property_price": [format!("{},000,000", id)] },
        "_embedded": {
            "wp:featuredmedia": [{ "source_url": format!("https://cdn.example/{}.jpg", id) }]
        }
    })
}

/// Serve `pages` of listings for the unfiltered catalog, then empty pages,
/// plus the type list and detail records for every listing served.
pub async fn mount_catalog(server: &MockServer, pages: &[Vec<(u64, &str)>]) {
    for (index, page) in pages.iter().enumerate() {
        let body: Vec<Value> = page.iter().map(|(id, title)| property(*id, title)).collect();
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/properties"))
            .and(wiremock::matchers::query_param(
                "page",
                (index + 1).to_string().as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;

        for (id, title) in page {
            Mock::given(method("GET"))
                .and(path(format!("/wp-json/wp/v2/properties/{}", id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(property(*id, title)))
                .mount(server)
                .await;
        }
    }

    // Anything past the scripted pages is empty.
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .with_priority(10)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/property_type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 14, "name": "Duplex" },
            { "id": 20, "name": "Land" }
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/wp-json/wp/v2/properties/\d+$"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": { "status": 404 }
        })))
        .with_priority(10)
        .mount(server)
        .await;
}
