use url::form_urlencoded;

/// Full request URL for `endpoint` carrying exactly `key` then `q`, both
/// form-urlencoded. The location is passed through unvalidated.
pub fn build_url(endpoint: &str, api_key: &str, location: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("key", api_key)
        .append_pair("q", location)
        .finish();
    format!("{endpoint}?{query}")
}
