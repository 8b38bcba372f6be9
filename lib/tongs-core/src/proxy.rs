//! Operation dispatch.

use tracing::{debug, instrument};

use crate::{Arg, Endpoint, Error, HttpRequest, RequestDescriptor, Result, assemble, classify};

/// Turns an operation call into a buildable request.
///
/// The proxy holds no state: every call classifies, resolves and
/// assembles into fresh local values, so one value can serve any number
/// of endpoints from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestProxy;

impl RequestProxy {
    /// Build the request for `operation` of `endpoint` called with `args`.
    ///
    /// Fallback operations run their closure as-is; declared operations go
    /// through classification, descriptor resolution and assembly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for an unknown operation, a wrong
    /// number of arguments or an unresolvable host.
    #[instrument(skip(self, endpoint, args), fields(endpoint = endpoint.name()))]
    pub fn invoke(&self, endpoint: &Endpoint, operation: &str, args: &[Arg]) -> Result<HttpRequest> {
        if let Some(fallback) = endpoint.fallback(operation) {
            debug!("running fallback operation");
            return fallback(endpoint, args);
        }

        let declared = endpoint.operation(operation).ok_or_else(|| {
            Error::configuration(format!(
                "endpoint '{}' has no operation '{operation}'",
                endpoint.name()
            ))
        })?;
        if declared.params().len() != args.len() {
            return Err(Error::configuration(format!(
                "operation '{operation}' expects {} arguments, got {}",
                declared.params().len(),
                args.len()
            )));
        }

        let params = classify(endpoint.statics(), declared.params(), args);
        let descriptor = RequestDescriptor::resolve(endpoint, declared, params)?;
        assemble(descriptor)
    }
}
