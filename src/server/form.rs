use url::form_urlencoded;

use crate::error::RequestError;
use crate::http::method::HttpMethod;
use crate::http::request::{OutboundRequest, pairs_from_form, unique_keys};
use crate::ui::request_editor::RequestEditorState;

/// Fields of the request form as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub method: Option<String>,
    pub url: String,
    pub header_keys: Vec<String>,
    pub header_values: Vec<String>,
    pub param_keys: Vec<String>,
    pub param_values: Vec<String>,
    pub post_body: String,
}

impl FormSubmission {
    /// Decode an `application/x-www-form-urlencoded` body. Repeated list
    /// fields keep their order; unknown fields are ignored.
    pub fn parse(body: &[u8]) -> Self {
        let mut form = Self::default();
        for (name, value) in form_urlencoded::parse(body) {
            let value = value.into_owned();
            match name.as_ref() {
                "method" => form.method = Some(value),
                "url" => form.url = value,
                "header_keys[]" => form.header_keys.push(value),
                "header_values[]" => form.header_values.push(value),
                "param_keys[]" => form.param_keys.push(value),
                "param_values[]" => form.param_values.push(value),
                "post_body" => form.post_body = value,
                _ => {}
            }
        }
        form
    }

    /// A missing or blank method means GET.
    pub fn method(&self) -> Result<HttpMethod, RequestError> {
        match self.method.as_deref().map(str::trim) {
            None | Some("") => Ok(HttpMethod::Get),
            Some(raw) => raw.parse(),
        }
    }

    pub fn to_request(&self) -> Result<OutboundRequest, RequestError> {
        let method = self.method()?;
        let mut request = OutboundRequest::new(method, self.url.trim());
        request.headers = pairs_from_form(&self.header_keys, &self.header_values);
        match method {
            HttpMethod::Get => {
                request.query_params =
                    unique_keys(pairs_from_form(&self.param_keys, &self.param_values));
            }
            HttpMethod::Post => request.body = self.post_body.clone(),
        }
        Ok(request)
    }

    /// The form as it should be shown again after submission.
    pub fn editor_state(&self) -> RequestEditorState {
        RequestEditorState {
            method: self.method().unwrap_or_default(),
            url: self.url.clone(),
            headers: typed_rows(&self.header_keys, &self.header_values),
            params: typed_rows(&self.param_keys, &self.param_values),
            body: self.post_body.clone(),
        }
    }
}

fn typed_rows(keys: &[String], values: &[String]) -> Vec<(String, String)> {
    keys.iter()
        .enumerate()
        .map(|(index, key)| (key.clone(), values.get(index).cloned().unwrap_or_default()))
        .filter(|(key, value)| !key.trim().is_empty() || !value.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_fields_in_order() {
        let body = b"method=GET&url=https%3A%2F%2Fexample.com%2Fa%3Fx%3D1\
&header_keys%5B%5D=Accept&header_values%5B%5D=application%2Fjson\
&header_keys%5B%5D=X-Two&header_values%5B%5D=2\
&param_keys%5B%5D=q&param_values%5B%5D=two+words";
        let form = FormSubmission::parse(body);
        assert_eq!(form.method.as_deref(), Some("GET"));
        assert_eq!(form.url, "https://example.com/a?x=1");
        assert_eq!(form.header_keys, vec!["Accept", "X-Two"]);
        assert_eq!(form.header_values, vec!["application/json", "2"]);
        assert_eq!(form.param_values, vec!["two words"]);
    }

    #[test]
    fn missing_method_defaults_to_get() {
        let form = FormSubmission::parse(b"url=https%3A%2F%2Fexample.com");
        assert_eq!(form.method(), Ok(HttpMethod::Get));
    }

    #[test]
    fn unsupported_method_is_rejected() {
        let form = FormSubmission::parse(b"method=PATCH&url=https%3A%2F%2Fexample.com");
        assert_eq!(
            form.to_request(),
            Err(RequestError::UnsupportedMethod("PATCH".into()))
        );
        assert_eq!(form.editor_state().method, HttpMethod::Get);
    }

    #[test]
    fn get_request_uses_params_and_ignores_body() {
        let form = FormSubmission {
            method: Some("get".into()),
            url: "  https://example.com  ".into(),
            param_keys: vec!["a".into(), " ".into(), "a".into()],
            param_values: vec!["1".into(), "x".into(), "2".into()],
            post_body: "ignored".into(),
            ..FormSubmission::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.query_params, vec![("a".to_string(), "2".to_string())]);
        assert!(request.body.is_empty());
    }

    #[test]
    fn post_request_uses_body_and_ignores_params() {
        let form = FormSubmission {
            method: Some("POST".into()),
            url: "https://example.com".into(),
            header_keys: vec!["Content-Type".into()],
            header_values: vec!["text/plain".into()],
            param_keys: vec!["a".into()],
            param_values: vec!["1".into()],
            post_body: " raw body ".into(),
            ..FormSubmission::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.body, " raw body ");
        assert!(request.query_params.is_empty());
        assert_eq!(
            request.headers,
            vec![("Content-Type".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn editor_state_keeps_rows_as_typed() {
        let form = FormSubmission {
            url: "not-a-url".into(),
            header_keys: vec![" Accept ".into(), "".into(), "".into()],
            header_values: vec!["*/*".into(), "".into(), "orphan".into()],
            ..FormSubmission::default()
        };
        let state = form.editor_state();
        assert_eq!(state.url, "not-a-url");
        assert_eq!(
            state.headers,
            vec![
                (" Accept ".to_string(), "*/*".to_string()),
                (String::new(), "orphan".to_string()),
            ]
        );
    }
}
