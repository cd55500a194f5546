use crate::{
  request_element::{HttpMethodElement, ParametersElement, ParametersLoader, RequestParameters, UrlElement},
  rfc3986,
};

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, Default)]
/// Signature base string of RFC 5849 Section 3.4.1: the normalized http
/// method, url and parameter string joined with `&`
pub struct SignatureBaseString {
  method: String,
  url: String,
  parameters: RequestParameters,
}

impl SignatureBaseString {
  /// Create a new signature base string from the raw request triple; every
  /// element may be empty
  pub fn new(method: &str, url: &str, parameters: &RequestParameters) -> Self {
    Self {
      method: method.to_string(),
      url: url.to_string(),
      parameters: parameters.clone(),
    }
  }

  /// Assemble the base string. Each element is normalized independently and an
  /// absent element contributes an empty string, so the result carries exactly
  /// two `&` separators in every case. The url and the parameter string are
  /// percent-encoded as whole elements; the characters of the parameter string
  /// thus end up encoded twice, as RFC 5849 Section 3.4.1.1 requires.
  pub fn generate(&self) -> String {
    let method = HttpMethodElement::new(&self.method).get();
    let url = rfc3986::encode(&UrlElement::new(&self.url).get());
    let parameters = ParametersElement::new(&ParametersLoader::new(&self.parameters).get()).get();
    format!("{}&{}&{}", method, url, rfc3986::encode(&parameters))
  }
}

/* ---------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;
  use crate::request_element::ParameterValue;

  fn base_string(method: &str, url: &str, parameters: &RequestParameters) -> String {
    SignatureBaseString::new(method, url, parameters).generate()
  }

  #[test]
  fn starts_with_the_uppercased_method() {
    let none = RequestParameters::new();
    assert_eq!(base_string("get", "", &none), "GET&&");
    assert_eq!(base_string("pOsT", "", &none), "POST&&");
  }

  #[test]
  fn includes_the_encoded_url_as_the_second_element() {
    let none = RequestParameters::new();
    let tuples = vec![
      ("GET", "http://example.co.uk", "GET&http%3A%2F%2Fexample.co.uk&"),
      ("", "http://EXAMPLE.co.UK/endpoint", "&http%3A%2F%2Fexample.co.uk%2Fendpoint&"),
      ("", "http://EXAMPLE.co.UK/endpoint/", "&http%3A%2F%2Fexample.co.uk%2Fendpoint%2F&"),
      ("", "HTTP://example.org", "&http%3A%2F%2Fexample.org&"),
      ("", "http://example.org:80", "&http%3A%2F%2Fexample.org&"),
      ("", "https://example.org:443", "&https%3A%2F%2Fexample.org&"),
      ("", "http://example.org:8080", "&http%3A%2F%2Fexample.org%3A8080&"),
      ("", "https://example.org:8080", "&https%3A%2F%2Fexample.org%3A8080&"),
      ("GET", "http://example.org/?foo=bar", "GET&http%3A%2F%2Fexample.org%2F&"),
      ("GET", "http://example.org/#anchor", "GET&http%3A%2F%2Fexample.org%2F&"),
      ("", "example.org", "&http%3A%2F%2Fexample.org&"),
      ("", "example.org:100", "&http%3A%2F%2Fexample.org%3A100&"),
      ("", "example.org:80", "&http%3A%2F%2Fexample.org&"),
    ];
    for (method, url, expected) in tuples {
      assert_eq!(base_string(method, url, &none), expected);
    }
  }

  #[test]
  fn ends_with_the_normalized_parameters() {
    assert_eq!(
      base_string("", "", &RequestParameters::from_map([("foo", "bar")])),
      "&&foo%3Dbar"
    );
    assert_eq!(
      base_string("", "", &RequestParameters::from_map([("foo", "bar"), ("baz", "qux")])),
      "&&baz%3Dqux%26foo%3Dbar"
    );
    assert_eq!(
      base_string("", "", &RequestParameters::from_entries([("foo", "bar"), ("baz", "qux")])),
      "&&baz%3Dqux%26foo%3Dbar"
    );
    // repeated names order by value, whichever shape supplied them
    assert_eq!(
      base_string(
        "",
        "",
        &RequestParameters::from_entries([("foo", "qux"), ("foo", "bar"), ("foo", "baz"), ("a", "b")])
      ),
      "&&a%3Db%26foo%3Dbar%26foo%3Dbaz%26foo%3Dqux"
    );
    assert_eq!(
      base_string(
        "",
        "",
        &RequestParameters::from_map([
          ("foo", ParameterValue::from(vec!["qux", "bar", "baz"])),
          ("a", ParameterValue::from("b")),
        ])
      ),
      "&&a%3Db%26foo%3Dbar%26foo%3Dbaz%26foo%3Dqux"
    );
    // the parameter name is encoded twice like the rest of the parameter string
    assert_eq!(
      base_string("", "", &RequestParameters::from_map([("c@", "")])),
      "&&c%2540%3D"
    );
    assert_eq!(
      base_string("", "", &RequestParameters::from_entries([("c", "hi there"), ("a", "1")])),
      "&&a%3D1%26c%3Dhi%2520there"
    );
  }

  #[test]
  fn always_carries_exactly_two_separators() {
    let none = RequestParameters::new();
    assert_eq!(base_string("", "", &none), "&&");
    let only_method = base_string("GET", "", &none);
    assert_eq!(only_method.matches('&').count(), 2);
    let all_present = base_string("GET", "http://example.org", &RequestParameters::from_map([("a", "b")]));
    assert_eq!(all_present.matches('&').count(), 2);
  }

  #[test]
  fn produces_the_oauth_10a_reference_base_string() {
    let parameters = RequestParameters::from_map([
      ("oauth_consumer_key", "dpf43f3p2l4k3l03"),
      ("oauth_token", "nnch734d00sl2jdk"),
      ("oauth_nonce", "kllo9940pd9333jh"),
      ("oauth_timestamp", "1191242096"),
      ("oauth_signature_method", "HMAC-SHA1"),
      ("oauth_version", "1.0"),
      ("file", "vacation.jpg"),
      ("size", "original"),
    ]);
    let expected_suffix = "http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal";
    assert_eq!(
      base_string("GET", "http://photos.example.net/photos", &parameters),
      format!("GET&{expected_suffix}")
    );
    assert_eq!(
      base_string("POST", "http://photos.example.net/photos", &parameters),
      format!("POST&{expected_suffix}")
    );
  }

  #[test]
  fn produces_the_rfc5849_reference_base_string() {
    let parameters = RequestParameters::from_map([
      ("oauth_consumer_key", ParameterValue::from("9djdj82h48djs9d2")),
      ("oauth_token", ParameterValue::from("kkk9d7dh3k39sjv7")),
      ("oauth_nonce", ParameterValue::from("7d8f3e4a")),
      ("oauth_timestamp", ParameterValue::from("137131201")),
      ("oauth_signature_method", ParameterValue::from("HMAC-SHA1")),
      ("b5", ParameterValue::from("=%3D")),
      ("a3", ParameterValue::from(vec!["a", "2 q"])),
      ("c@", ParameterValue::from("")),
      ("a2", ParameterValue::from("r b")),
      ("c2", ParameterValue::from("")),
    ]);
    let expected = "POST&http%3A%2F%2Fexample.com%2Frequest&a2%3Dr%2520b%26a3%3D2%2520q%26a3%3Da%26b5%3D%253D%25253D%26c%2540%3D%26c2%3D%26oauth_consumer_key%3D9djdj82h48djs9d2%26oauth_nonce%3D7d8f3e4a%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D137131201%26oauth_token%3Dkkk9d7dh3k39sjv7";
    assert_eq!(base_string("POST", "http://example.com/request", &parameters), expected);
  }
}
