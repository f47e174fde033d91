/// POST /login request body. Missing fields decode as empty strings so the
/// verifier sees them as ordinary mismatching input.
#[derive(Debug, serde::Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Decode a raw request body. A parse error here is the distinct
    /// decode-failure condition; callers must not collapse it into
    /// "empty credentials".
    pub fn from_bytes(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
