use crate::{
  crypto::AlgorithmName,
  request_element::{ParameterValue, ParameterValueMap, ParametersLoader, RequestParameters},
};
use base64::{engine::general_purpose, Engine as _};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Version advertised as `oauth_version` unless overridden
const DEFAULT_VERSION: &str = "1.0";

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Oauth protocol parameters (`oauth_*`) attached to a signed request
/// https://datatracker.ietf.org/doc/html/rfc5849#section-3.1
pub struct OAuthParameters {
  /// consumer key identifying the client
  pub consumer_key: String,
  /// optional delegated-access token
  pub token: Option<String>,
  /// single-use random value
  pub nonce: String,
  /// unix timestamp of the request
  pub timestamp: u64,
  /// protocol version advertised as `oauth_version`
  pub version: Option<String>,
  /// signature method advertised as `oauth_signature_method`
  pub signature_method: AlgorithmName,
}

impl OAuthParameters {
  /// Create the parameter set for the given consumer key with the current
  /// unix timestamp and a fresh random nonce
  pub fn new(consumer_key: &str) -> Self {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    let mut params = Self {
      consumer_key: consumer_key.to_string(),
      token: None,
      nonce: String::new(),
      timestamp,
      version: Some(DEFAULT_VERSION.to_string()),
      signature_method: AlgorithmName::HmacSha1,
    };
    params.set_random_nonce();
    params
  }

  /// Set the delegated-access token emitted as `oauth_token`
  pub fn set_token(&mut self, token: &str) -> &mut Self {
    self.token = Some(token.to_string());
    self
  }

  /// Set an explicit nonce
  pub fn set_nonce(&mut self, nonce: &str) -> &mut Self {
    self.nonce = nonce.to_string();
    self
  }

  /// Set a fresh random nonce; url-safe base64 keeps it query-string friendly
  pub fn set_random_nonce(&mut self) -> &mut Self {
    let mut rng = rand::rng();
    let nonce = rng.random::<[u8; 16]>();
    self.nonce = general_purpose::URL_SAFE_NO_PAD.encode(nonce);
    self
  }

  /// Set an artificial timestamp
  pub fn set_timestamp(&mut self, timestamp: u64) -> &mut Self {
    self.timestamp = timestamp;
    self
  }

  /// Set the advertised protocol version; the empty string suppresses
  /// `oauth_version` altogether
  pub fn set_version(&mut self, version: &str) -> &mut Self {
    self.version = if version.is_empty() {
      None
    } else {
      Some(version.to_string())
    };
    self
  }

  /// Assemble the `oauth_*` parameters and merge the request `fields` over
  /// them, yielding the parameter set to be signed. `oauth_token` and
  /// `oauth_version` are emitted only when non-empty; a field with the same
  /// name as a protocol parameter replaces it.
  pub fn to_parameters(&self, fields: &RequestParameters) -> RequestParameters {
    let mut map = ParameterValueMap::default();
    map.insert("oauth_consumer_key".to_string(), ParameterValue::from(self.consumer_key.as_str()));
    map.insert("oauth_nonce".to_string(), ParameterValue::from(self.nonce.as_str()));
    map.insert("oauth_timestamp".to_string(), ParameterValue::from(self.timestamp.to_string()));
    map.insert(
      "oauth_signature_method".to_string(),
      ParameterValue::from(self.signature_method.as_str()),
    );
    if let Some(token) = self.token.as_deref().filter(|v| !v.is_empty()) {
      map.insert("oauth_token".to_string(), ParameterValue::from(token));
    }
    if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
      map.insert("oauth_version".to_string(), ParameterValue::from(version));
    }
    for (name, values) in ParametersLoader::new(fields).get() {
      map.insert(name, ParameterValue::Many(values));
    }
    RequestParameters::Map(map)
  }
}

/* ---------------------------------------- */
