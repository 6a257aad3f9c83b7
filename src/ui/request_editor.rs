use crate::http::method::HttpMethod;

use super::escape_html;
use super::request_bar;

/// Values shown in the request form. Rows are kept as typed, blank keys
/// included, so a failed submission can be corrected in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEditorState {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub body: String,
}

impl RequestEditorState {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Self::default()
        }
    }
}

pub fn view(state: &RequestEditorState) -> String {
    format!(
        r#"<form id="request-form" method="post" action="/">
{bar}<div class="tabs" id="request-tabs">
    <div class="tab-bar">
        <button type="button" class="tab-button active" data-target="headers">Headers</button>
        <button type="button" class="tab-button" data-target="params">Query Params</button>
        <button type="button" class="tab-button" data-target="body">Body</button>
    </div>
    <div id="headers-content" class="tab-content" data-kind="header">
{headers}        <button type="button" class="add-pair">+ Add Header</button>
    </div>
    <div id="params-content" class="tab-content hidden" data-kind="param">
{params}        <button type="button" class="add-pair">+ Add Param</button>
    </div>
    <div id="body-content" class="tab-content hidden">
        <textarea name="post_body" placeholder='{{ "key": "value" }}'>{body}</textarea>
    </div>
</div>
</form>
"#,
        bar = request_bar::view(state.method, &state.url),
        headers = pair_rows("header", &state.headers),
        params = pair_rows("param", &state.params),
        body = escape_html(&state.body),
    )
}

/// One row per pair, or a single blank row when there are none.
fn pair_rows(kind: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return pair_row(kind, "", "");
    }
    pairs
        .iter()
        .map(|(key, value)| pair_row(kind, key, value))
        .collect()
}

pub fn pair_row(kind: &str, key: &str, value: &str) -> String {
    format!(
        r#"        <div class="pair">
            <input type="text" name="{kind}_keys[]" placeholder="Key" value="{key}">
            <input type="text" name="{kind}_values[]" placeholder="Value" value="{value}">
            <button type="button" class="remove-pair">&times;</button>
        </div>
"#,
        key = escape_html(key),
        value = escape_html(value),
    )
}
