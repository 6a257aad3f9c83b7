pub mod json;
pub mod page;
pub mod request_bar;
pub mod request_editor;
pub mod response_panel;
pub mod sidebar;
pub mod style;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
