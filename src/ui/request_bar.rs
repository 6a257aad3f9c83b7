use crate::http::method::HttpMethod;

use super::escape_html;

pub fn view(method: HttpMethod, url: &str) -> String {
    let options: String = HttpMethod::ALL
        .iter()
        .map(|option| {
            let selected = if *option == method { " selected" } else { "" };
            format!(r#"<option value="{option}"{selected}>{option}</option>"#)
        })
        .collect();

    format!(
        r#"<div class="request-bar">
    <select name="method" id="method-select">{options}</select>
    <input type="url" name="url" placeholder="https://api.example.com" value="{url}" required>
    <button type="submit" class="send">Send</button>
</div>
"#,
        url = escape_html(url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_current_method_selected() {
        let html = view(HttpMethod::Post, "https://example.com");
        assert!(html.contains(r#"<option value="GET">GET</option>"#));
        assert!(html.contains(r#"<option value="POST" selected>POST</option>"#));
    }

    #[test]
    fn url_is_escaped_into_attribute() {
        let html = view(HttpMethod::Get, r#"https://example.com/?q="x"&y=1"#);
        assert!(html.contains(r#"value="https://example.com/?q=&quot;x&quot;&amp;y=1""#));
    }
}
