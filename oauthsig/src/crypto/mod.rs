mod symmetric;

use crate::error::{OAuthSigError, OAuthSigResult};

pub use symmetric::HmacSha1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Signature method names
pub enum AlgorithmName {
  HmacSha1,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::HmacSha1 => "HMAC-SHA1",
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for AlgorithmName {
  type Err = OAuthSigError;

  fn from_str(s: &str) -> OAuthSigResult<Self> {
    match s {
      "HMAC-SHA1" => Ok(Self::HmacSha1),
      _ => Err(OAuthSigError::InvalidAlgorithmName(s.to_string())),
    }
  }
}

/* ---------------------------------------------------------------- */
