use once_cell::sync::Lazy;
use pulldown_cmark::{ html, Options, Parser };
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s{2,}|\r\n|\n)").expect("whitespace pattern is valid")
});

/// Collapse whitespace runs in model output before rendering. Any run of
/// two or more whitespace characters, or any single line-break sequence,
/// becomes a `<br/>` marker when the run is purely whitespace, otherwise a
/// single space. Idempotent: the markers contain no whitespace runs, so a
/// second pass is a no-op.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, |caps: &regex::Captures| {
            if caps[0].trim().is_empty() { "<br/>" } else { " " }
        })
        .into_owned()
}

/// Render normalized text as a markdown fragment. The `<br/>` markers pass
/// through as inline HTML.
pub fn render_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
