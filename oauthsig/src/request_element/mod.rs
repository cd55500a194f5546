mod method;
mod parameters;
mod url;

pub use method::HttpMethodElement;
pub use parameters::{ParameterMap, ParameterValue, ParameterValueMap, ParametersElement, ParametersLoader, RequestParameters};
pub use url::UrlElement;
