use crate::http::response::HttpResponse;

use super::escape_html;
use super::json::highlight;
use super::style;

/// Highlighted JSON when the body parses strictly, escaped text otherwise.
pub fn render_body(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => format!(
            r#"<pre class="body"><code class="language-json">{}</code></pre>"#,
            highlight(&value)
        ),
        Err(_) => format!(r#"<pre class="body plain">{}</pre>"#, escape_html(raw)),
    }
}

/// Split a CRLF-delimited header block into trimmed `(name, value)` pairs.
/// Only the first colon separates; lines without one (the status line,
/// the terminating blank line) are skipped. Order and repeats are kept.
pub fn parse_headers(raw: &str) -> Vec<(String, String)> {
    raw.split("\r\n")
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

pub fn view(response: &HttpResponse) -> String {
    let body = render_body(&response.body);
    let header_rows: String = parse_headers(&response.raw_headers)
        .iter()
        .map(|(name, value)| {
            format!(
                "<tr><td class=\"header-name\">{}</td><td>{}</td></tr>\n",
                escape_html(name),
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<section id="response-section">
    <h2>Response</h2>
    <div class="summary">
        <span>Status: <span class="badge {status_class}">{status}</span></span>
        <span>Time: <span class="metric">{time} ms</span></span>
        <span>Size: <span class="metric">{size} KB</span></span>
    </div>
    <div class="tabs" id="response-tabs">
        <div class="tab-bar">
            <button type="button" class="tab-button active" data-target="response-body">Body</button>
            <button type="button" class="tab-button" data-target="response-headers">Headers</button>
        </div>
        <div id="response-body-content" class="tab-content">{body}</div>
        <div id="response-headers-content" class="tab-content hidden">
            <table class="headers">
{header_rows}            </table>
            <details><summary>Raw</summary><pre>{raw_headers}</pre></details>
        </div>
    </div>
</section>
"#,
        status_class = style::status_class(response.status),
        status = response.status,
        time = response.duration_ms,
        size = response.size_kb(),
        body = body,
        raw_headers = escape_html(&response.raw_headers),
    )
}
