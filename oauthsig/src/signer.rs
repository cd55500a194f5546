use crate::{
  crypto::HmacSha1, request_element::RequestParameters, rfc3986, signature_base::SignatureBaseString, trace::*,
};

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone)]
/// Options honored by [`generate_with_options`]
pub struct SignatureOptions {
  /// Percent-encode the base64 signature for direct use in a query string or
  /// `Authorization` header
  pub encode_signature: bool,
}

impl Default for SignatureOptions {
  fn default() -> Self {
    Self { encode_signature: true }
  }
}

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone)]
/// Hmac-sha1 signature of a signature base string: derives the signing key
/// from the shared secrets and digests the base string
pub struct HmacSha1Signature {
  base_string: String,
  consumer_secret: String,
  token_secret: String,
}

impl HmacSha1Signature {
  /// Create a new signature input; the token secret is optional and stands in
  /// for the absent token when empty
  pub fn new(base_string: &str, consumer_secret: &str, token_secret: &str) -> Self {
    Self {
      base_string: base_string.to_string(),
      consumer_secret: consumer_secret.to_string(),
      token_secret: token_secret.to_string(),
    }
  }

  /// Signing key of RFC 5849 Section 3.4.2: the encoded secrets joined with
  /// `&`; the separator is emitted even when the token secret is empty
  pub fn key(&self) -> String {
    format!(
      "{}&{}",
      rfc3986::encode(&self.consumer_secret),
      rfc3986::encode(&self.token_secret)
    )
  }

  /// Base64 signature, additionally percent-encoded when `encode` is set
  pub fn generate(&self, encode: bool) -> String {
    let signature = HmacSha1::new(&self.base_string, &self.key()).base64_encoded_hash();
    if encode {
      rfc3986::encode(&signature)
    } else {
      signature
    }
  }
}

/* ---------------------------------------------------------------- */
/// Generate the percent-encoded OAuth 1.0a signature for a request. This is
/// the canonical entry point; the individual elements stay composable for
/// introspecting intermediate values such as the base string itself.
pub fn generate(
  method: &str,
  url: &str,
  parameters: &RequestParameters,
  consumer_secret: &str,
  token_secret: Option<&str>,
) -> String {
  generate_with_options(
    method,
    url,
    parameters,
    consumer_secret,
    token_secret,
    &SignatureOptions::default(),
  )
}

/// [`generate`] honoring [`SignatureOptions`]
pub fn generate_with_options(
  method: &str,
  url: &str,
  parameters: &RequestParameters,
  consumer_secret: &str,
  token_secret: Option<&str>,
  options: &SignatureOptions,
) -> String {
  let base_string = SignatureBaseString::new(method, url, parameters).generate();
  debug!("signature base string: {base_string}");
  HmacSha1Signature::new(&base_string, consumer_secret, token_secret.unwrap_or_default()).generate(options.encode_signature)
}

/* ---------------------------------------------------------------- */
