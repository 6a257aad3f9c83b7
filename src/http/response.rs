/// Outcome of one successful HTTP exchange. Status codes of any class count
/// as success here; only transport failures do not produce one.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Normalized URL the request was sent to, query params included.
    pub url: String,
    pub status: u16,
    /// Status line plus `name: value` lines, CRLF-delimited, ending in a blank line.
    pub raw_headers: String,
    pub body: String,
    pub duration_ms: u64,
    pub size_bytes: usize,
}

impl HttpResponse {
    /// Body size in kilobytes, rounded to two decimals.
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 100.0).round() / 100.0
    }
}
