//! Feature bullets embedded in a listing description.

use scraper::Html;

/// HTML entity the description uses as a bullet marker (en dash).
const BULLET: &str = "&#8211;";

/// Extract the feature list from a rendered listing description.
///
/// Features are the `<br />`-separated lines that carry an en-dash
/// bullet. Each line is parsed as an HTML fragment, so markup is dropped
/// and entities are decoded. The leading bullet itself is removed.
pub fn extract_features(html: &str) -> Vec<String> {
    html.split("<br />")
        .filter(|line| line.contains(BULLET))
        .map(line_text)
        .filter(|feature| !feature.is_empty())
        .collect()
}

fn line_text(line: &str) -> String {
    let fragment = Html::parse_fragment(line);
    let text: String = fragment.root_element().text().collect();
    text.replacen('\u{2013}', "", 1).trim().to_string()
}
