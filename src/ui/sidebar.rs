use url::form_urlencoded::byte_serialize;

use crate::history::HistoryEntry;

use super::escape_html;
use super::style;

pub fn view(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return r#"<aside>
    <h2>Request History</h2>
    <p class="empty">No requests yet.</p>
</aside>
"#
        .to_string();
    }

    let items: String = history.iter().map(history_item).collect();
    format!(
        r#"<aside>
    <h2>Request History</h2>
    <ul>
{items}    </ul>
    <a href="/?clear_history=1" class="clear-history">Clear History</a>
</aside>
"#
    )
}

/// Clicking an entry reloads its method and URL into the form.
fn history_item(entry: &HistoryEntry) -> String {
    let href = format!(
        "/?method={}&url={}",
        entry.method,
        byte_serialize(entry.url.as_bytes()).collect::<String>()
    );
    let url = escape_html(&entry.url);
    format!(
        r#"        <li>
            <a href="{href}">
                <span class="badge {method_class}">{method}</span>
                <span class="history-url" title="{url}">{url}</span>
                <div class="history-status">Status: {status}</div>
            </a>
        </li>
"#,
        href = escape_html(&href),
        method_class = style::method_class(entry.method),
        method = entry.method,
        status = entry.status,
    )
}
