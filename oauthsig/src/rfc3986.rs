use crate::error::{OAuthSigError, OAuthSigResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape everything outside the RFC 3986 unreserved set `A-Z a-z 0-9 - _ . ~`,
/// `%` itself included.
const RFC3986_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/* ---------------------------------------------------------------- */
/// Percent-encode `value` following RFC 3986 Section 2.1 with uppercase hex
/// digits. The value is treated as text: multi-byte characters are encoded as
/// their UTF-8 octets, octet by octet (e.g. `å` becomes `%C3%A5`).
pub fn encode(value: &str) -> String {
  utf8_percent_encode(value, RFC3986_ESCAPED).to_string()
}

/// Inverse of [`encode`]: each `%XX` triplet becomes its raw octet and the
/// resulting octet sequence is decoded as UTF-8. Unescaped characters pass
/// through unchanged. Fails on a malformed triplet or on octets that do not
/// form valid UTF-8.
pub fn decode(value: &str) -> OAuthSigResult<String> {
  let bytes = value.as_bytes();
  let mut octets = Vec::with_capacity(bytes.len());
  let mut pos = 0;
  while pos < bytes.len() {
    if bytes[pos] == b'%' {
      let parsed = if pos + 2 < bytes.len() {
        let hi = (bytes[pos + 1] as char).to_digit(16);
        let lo = (bytes[pos + 2] as char).to_digit(16);
        hi.zip(lo).map(|(hi, lo)| (hi * 16 + lo) as u8)
      } else {
        None
      };
      let Some(octet) = parsed else {
        let triplet = &bytes[pos..bytes.len().min(pos + 3)];
        return Err(OAuthSigError::InvalidPercentEncoding(
          String::from_utf8_lossy(triplet).into_owned(),
        ));
      };
      octets.push(octet);
      pos += 3;
    } else {
      octets.push(bytes[pos]);
      pos += 1;
    }
  }
  Ok(String::from_utf8(octets)?)
}

/* ---------------------------------------------------------------- */
