use thiserror::Error;

/// All errors that can occur in the ipgeolocation CLI.
#[derive(Debug, Error)]
pub enum IpGeoError {
    // --- Vault errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Stored API key is not valid base64: {0}")]
    Decode(String),

    #[error("Stored API key is malformed: {len} bytes is shorter than the nonce")]
    MalformedCiphertext { len: usize },

    #[error("Stored API key failed authentication. Re-run `ipgeolocation config --apikey=<your-key>`")]
    AuthenticationFailed,

    // --- Renderer errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Response nesting exceeds the table depth limit of {0}")]
    DepthExceeded(usize),

    // --- Config errors ---
    #[error("API key not found. Please run: ipgeolocation config --apikey=<your-key>")]
    ApiKeyMissing,

    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- API errors ---
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Error parsing JSON: {0}")]
    InvalidJson(String),

    // --- CLI errors ---
    #[error("{0}")]
    CommandFailed(String),
}

/// Convenience type alias for CLI results.
pub type Result<T> = std::result::Result<T, IpGeoError>;
