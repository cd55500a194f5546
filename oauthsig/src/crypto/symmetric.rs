use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

/* -------------------------------- */
#[derive(Debug, Clone)]
/// Keyed HMAC-SHA1 digest over a signature base string
/// https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.2
pub struct HmacSha1 {
  base_string: String,
  key: String,
}

impl HmacSha1 {
  /// Create a new digest input; both the base string and the key stand in
  /// for absent input when empty
  pub fn new(base_string: &str, key: &str) -> Self {
    Self {
      base_string: base_string.to_string(),
      key: key.to_string(),
    }
  }

  /// Raw digest bytes
  pub fn digest(&self) -> Vec<u8> {
    // hmac accepts keys of any length, the empty key included
    let mut mac = Hmac::<Sha1>::new_from_slice(self.key.as_bytes()).unwrap();
    mac.update(self.base_string.as_bytes());
    mac.finalize().into_bytes().to_vec()
  }

  /// Base64 encoding of the raw digest
  pub fn base64_encoded_hash(&self) -> String {
    general_purpose::STANDARD.encode(self.digest())
  }
}

/* -------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digests_a_test_string() {
    let hash = HmacSha1::new("testSignatureBaseString", "consumerSecret&tokenSecret").base64_encoded_hash();
    assert_eq!(hash, "+8JOwipB49F+1y2W0/2S4q0Tp4s=");
  }

  #[test]
  fn digests_the_oauth_10a_reference_base_string() {
    let base_string = "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal";
    let key = "kd94hf93k423kf44&pfkkdhi9sl3r4s00";
    assert_eq!(HmacSha1::new(base_string, key).base64_encoded_hash(), "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
  }

  #[test]
  fn empty_inputs_reproduce_the_baseline_digest() {
    // regression baseline: the digest of the fully empty input is fixed
    assert_eq!(HmacSha1::new("", "").base64_encoded_hash(), "+9sdGxiqbAgyS31ktx+3Y3BpDh0=");
  }
}
