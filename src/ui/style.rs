use crate::http::method::HttpMethod;

pub const BG: &str = "#12151b";
pub const SURFACE_0: &str = "#141820";
pub const SURFACE_1: &str = "#191e26";
pub const SURFACE_2: &str = "#1f252e";
pub const SURFACE_3: &str = "#252d38";
pub const BORDER: &str = "#303a46";
pub const TEXT: &str = "#e6ecf4";
pub const TEXT_MUTED: &str = "#8491a0";
pub const PRIMARY: &str = "#3ac96f";
pub const PRIMARY_HOVER: &str = "#47d67c";
pub const WARNING: &str = "#f2c40f";
pub const DANGER: &str = "#e25c5c";

pub const METHOD_GET: &str = "#49cc90";
pub const METHOD_POST: &str = "#ffb03b";

pub const JSON_KEY: &str = "#e978b4";
pub const JSON_NUMBER: &str = "#52a7f4";

pub fn method_class(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "method-get",
        HttpMethod::Post => "method-post",
    }
}

/// Badge class by status code class.
pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "status-success",
        300..=399 => "status-redirect",
        _ => "status-error",
    }
}

pub fn stylesheet() -> String {
    format!(
        r#":root {{
    --bg: {BG};
    --surface-0: {SURFACE_0};
    --surface-1: {SURFACE_1};
    --surface-2: {SURFACE_2};
    --surface-3: {SURFACE_3};
    --border: {BORDER};
    --text: {TEXT};
    --text-muted: {TEXT_MUTED};
    --primary: {PRIMARY};
    --primary-hover: {PRIMARY_HOVER};
    --warning: {WARNING};
    --danger: {DANGER};
}}
* {{ box-sizing: border-box; }}
body {{ margin: 0; background: var(--bg); color: var(--text); font-family: Inter, system-ui, sans-serif; font-size: 14px; }}
a {{ color: inherit; text-decoration: none; }}
.layout {{ display: flex; min-height: 100vh; }}
aside {{ width: 280px; flex-shrink: 0; background: var(--surface-0); border-right: 1px solid var(--border); padding: 16px; }}
aside h2 {{ font-size: 16px; margin: 0 0 12px; }}
aside ul {{ list-style: none; margin: 0; padding: 0; }}
aside li a {{ display: block; padding: 8px; border-radius: 6px; }}
aside li a:hover {{ background: var(--surface-2); }}
.history-url {{ display: inline-block; max-width: 180px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; vertical-align: middle; color: var(--text-muted); }}
.history-status, .empty {{ font-size: 12px; color: var(--text-muted); margin-top: 4px; }}
.clear-history {{ display: inline-block; margin-top: 16px; color: var(--danger); }}
main {{ flex: 1; padding: 24px; overflow-x: hidden; }}
h1 {{ margin: 0 0 20px; }}
.request-bar {{ display: flex; gap: 8px; }}
input, select, textarea {{ background: var(--surface-2); color: var(--text); border: 1px solid var(--border); border-radius: 6px; padding: 8px 10px; font: inherit; }}
input:focus, select:focus, textarea:focus {{ outline: none; border-color: var(--primary); }}
.request-bar input[name=url] {{ flex: 1; }}
textarea {{ width: 100%; height: 12rem; font-family: "Fira Code", monospace; }}
button {{ cursor: pointer; border: none; border-radius: 6px; padding: 8px 14px; font: inherit; }}
.send {{ background: var(--primary); color: var(--bg); font-weight: 700; }}
.send:hover {{ background: var(--primary-hover); }}
.tabs {{ background: var(--surface-1); border-radius: 8px; padding: 12px; margin-top: 16px; }}
.tab-bar {{ display: flex; border-bottom: 1px solid var(--border); margin-bottom: 12px; }}
.tab-button {{ background: none; color: var(--text-muted); border-radius: 0; }}
.tab-button.active {{ color: var(--text); border-bottom: 2px solid var(--primary); }}
.hidden {{ display: none; }}
.pair {{ display: flex; gap: 8px; margin-bottom: 8px; }}
.pair input {{ flex: 1; }}
.remove-pair {{ background: var(--danger); color: var(--text); width: 32px; padding: 0; }}
.add-pair {{ background: none; color: var(--primary); padding: 4px 0; }}
.badge {{ display: inline-block; padding: 2px 8px; border-radius: 6px; font-weight: 700; font-size: 12px; color: var(--bg); }}
.method-get {{ background: {METHOD_GET}; }}
.method-post {{ background: {METHOD_POST}; }}
.status-success {{ background: var(--primary); }}
.status-redirect {{ background: var(--warning); }}
.status-error {{ background: var(--danger); }}
.alert {{ margin-top: 24px; background: #3a1d1d; border: 1px solid var(--danger); color: #f3b7b7; padding: 12px 16px; border-radius: 6px; }}
#response-section {{ margin-top: 32px; }}
.summary {{ display: flex; gap: 16px; align-items: center; }}
.metric {{ color: {JSON_NUMBER}; }}
pre {{ margin: 0; white-space: pre-wrap; word-break: break-word; font-family: "Fira Code", monospace; font-size: 13px; }}
table.headers {{ border-collapse: collapse; width: 100%; }}
table.headers td {{ border-bottom: 1px solid var(--border); padding: 4px 8px; vertical-align: top; }}
.header-name {{ color: var(--text-muted); white-space: nowrap; }}
details {{ margin-top: 12px; color: var(--text-muted); }}
.json-key {{ color: {JSON_KEY}; }}
.json-string {{ color: var(--primary); }}
.json-number {{ color: {JSON_NUMBER}; }}
.json-boolean {{ color: {METHOD_POST}; }}
.json-null {{ color: var(--text-muted); }}
"#
    )
}
