use thiserror::Error;

/// Result type for oauth signature
pub type OAuthSigResult<T> = std::result::Result<T, OAuthSigError>;

/// Error type for oauth signature
#[derive(Error, Debug)]
pub enum OAuthSigError {
  /* ----- Codec errors ----- */
  /// Malformed `%XX` triplet encountered while percent-decoding
  #[error("Invalid percent-encoded triplet: {0}")]
  InvalidPercentEncoding(String),
  /// Percent-decoded octet sequence is not valid utf-8
  #[error("Percent-decoded octets are not valid UTF-8: {0}")]
  InvalidUtf8(#[from] std::string::FromUtf8Error),

  /* ----- Crypto errors ----- */
  /// Unsupported signature method name
  #[error("Invalid algorithm name: {0}")]
  InvalidAlgorithmName(String),
}
