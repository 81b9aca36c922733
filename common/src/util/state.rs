/// Process configuration, read once at startup and passed in explicitly so
/// tests can inject fake credentials and a fake provider endpoint.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub api_key: Option<String>,
    pub api_uri: String,
}
