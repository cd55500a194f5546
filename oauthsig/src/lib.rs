mod crypto;
mod error;
mod oauth_params;
mod request_element;
pub mod rfc3986;
mod signature_base;
mod signer;
mod trace;

pub mod prelude {
  pub use crate::{
    crypto::{AlgorithmName, HmacSha1},
    error::{OAuthSigError, OAuthSigResult},
    oauth_params::OAuthParameters,
    request_element::{
      HttpMethodElement, ParameterMap, ParameterValue, ParameterValueMap, ParametersElement, ParametersLoader,
      RequestParameters, UrlElement,
    },
    rfc3986,
    signature_base::SignatureBaseString,
    signer::{generate, generate_with_options, HmacSha1Signature, SignatureOptions},
  };
}

/* ----------------------------------------------------------------- */
