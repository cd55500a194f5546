/// Scheme inserted when the url carries none
const DEFAULT_SCHEME: &str = "http";

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone)]
/// Resource url element of the signature base string
pub struct UrlElement {
  url: String,
}

impl UrlElement {
  /// Create a new url element; the empty string stands for an absent url
  pub fn new(url: &str) -> Self {
    Self { url: url.to_string() }
  }

  /// Normalized url per RFC 5849 Section 3.4.1.2: lowercase scheme and host,
  /// default port (80 for `http`, 443 for `https`) omitted, query string and
  /// fragment stripped, path preserved verbatim, trailing slash included.
  /// The scheme defaults to `http` when absent; the empty string stays empty.
  pub fn get(&self) -> String {
    if self.url.is_empty() {
      return String::new();
    }
    // the query string and the fragment are not part of the normalized url
    let without_fragment = self.url.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();

    let (scheme, rest) = match without_query.split_once("://") {
      Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
      None => (DEFAULT_SCHEME.to_string(), without_query),
    };

    let (authority, path) = match rest.find('/') {
      Some(pos) => rest.split_at(pos),
      None => (rest, ""),
    };
    // userinfo is not part of the normalized authority
    let host_port = authority.rsplit_once('@').map(|(_, host)| host).unwrap_or(authority);
    let (host, port) = split_port(host_port);
    let host = host.to_ascii_lowercase();

    match port {
      Some(port) if Some(port) != default_port(&scheme) => format!("{scheme}://{host}:{port}{path}"),
      _ => format!("{scheme}://{host}{path}"),
    }
  }
}

/// Split a trailing `:<digits>` port off the authority; any other suffix stays
/// part of the host
fn split_port(host_port: &str) -> (&str, Option<u16>) {
  match host_port.rsplit_once(':') {
    Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => match port.parse::<u16>() {
      Ok(port) => (host, Some(port)),
      Err(_) => (host_port, None),
    },
    _ => (host_port, None),
  }
}

fn default_port(scheme: &str) -> Option<u16> {
  match scheme {
    "http" => Some(80),
    "https" => Some(443),
    _ => None,
  }
}

/* ---------------------------------------------------------------- */
