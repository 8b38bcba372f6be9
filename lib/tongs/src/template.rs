//! The executor: builds, sends and records requests.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, instrument};

use crate::{
    ClientConfig, CookiePolicy, Error, HttpClient, HttpRequest, HttpResult, HyperClient, Result,
    ResultActions, ResultHandler, ResultMatcher,
};

/// Executes buildable requests and hands back a [`ResultActions`] pipeline.
///
/// Matchers and handlers registered with
/// [`always_expect`](WebTemplateBuilder::always_expect) and
/// [`always_do`](WebTemplateBuilder::always_do) run on every result, matchers
/// first, in registration order. The first failure aborts the call.
///
/// A template holds no per-call state and can be shared across tasks.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use tongs::prelude::*;
///
/// # async fn run() -> tongs::Result<()> {
/// let template = WebTemplate::builder()
///     .timeout(Duration::from_secs(5))
///     .always_expect(status().is_success())
///     .always_do(print())
///     .build();
///
/// let result = template
///     .perform(HttpRequest::get("http://localhost:8080/health"))
///     .await?
///     .and_return();
/// # Ok(())
/// # }
/// ```
pub struct WebTemplate<C = HyperClient> {
    client: C,
    matchers: Vec<Arc<dyn ResultMatcher>>,
    handlers: Vec<Arc<dyn ResultHandler>>,
    runtime: OnceLock<Runtime>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for WebTemplate<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebTemplate")
            .field("client", &self.client)
            .field("matchers_count", &self.matchers.len())
            .field("handlers_count", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl<C> Drop for WebTemplate<C> {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which tokio forbids inside async code.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl WebTemplate {
    /// Create a new template builder.
    #[must_use]
    pub fn builder() -> WebTemplateBuilder {
        WebTemplateBuilder::default()
    }
}

impl Default for WebTemplate {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<C: HttpClient> WebTemplate<C> {
    /// A template over `client`, with no global matcher or handler.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            matchers: Vec::new(),
            handlers: Vec::new(),
            runtime: OnceLock::new(),
        }
    }

    /// The transport client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Execute `request`.
    ///
    /// The request is built, sent and timed; global matchers then global
    /// handlers are applied before the pipeline is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the transport fails,
    /// or a global matcher or handler fails.
    #[instrument(skip_all, fields(method = %request.method(), url = request.url()))]
    pub async fn perform(&self, request: HttpRequest) -> Result<ResultActions> {
        let description = request.description_text().map(str::to_string);
        let request = request.build()?;

        let start = Instant::now();
        let response = self.client.execute(request.clone()).await?;
        let cost_time = start.elapsed();

        let result = HttpResult::new(request, response, cost_time, description);
        debug!(
            status = result.status(),
            cost_time_ms = result.cost_time_ms(),
            "request performed"
        );

        for matcher in &self.matchers {
            matcher.check(&result)?;
        }
        for handler in &self.handlers {
            handler.handle(&result)?;
        }

        Ok(ResultActions::new(result))
    }

    /// Execute `request`, blocking the current thread.
    ///
    /// The call is driven by a current-thread runtime owned by this template
    /// and created on first use, so pooled connections survive between calls.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`perform`](Self::perform), and a
    /// configuration error when called from within an async runtime.
    pub fn perform_blocking(&self, request: HttpRequest) -> Result<ResultActions> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::configuration(
                "perform_blocking cannot run inside an async runtime, use perform",
            ));
        }
        self.runtime()?.block_on(self.perform(request))
    }

    fn runtime(&self) -> Result<&Runtime> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::configuration(format!("cannot start runtime: {e}")))?;
        Ok(self.runtime.get_or_init(|| runtime))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`WebTemplate`].
///
/// Timeouts configure the default [`HyperClient`]; they are ignored once a
/// custom client is supplied with [`client`](Self::client).
#[must_use]
pub struct WebTemplateBuilder<C = HyperClient> {
    client: Option<C>,
    config: ClientConfig,
    matchers: Vec<Arc<dyn ResultMatcher>>,
    handlers: Vec<Arc<dyn ResultHandler>>,
}

impl Default for WebTemplateBuilder {
    fn default() -> Self {
        Self {
            client: None,
            config: ClientConfig::default(),
            matchers: Vec::new(),
            handlers: Vec::new(),
        }
    }
}

impl<C> std::fmt::Debug for WebTemplateBuilder<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebTemplateBuilder")
            .field("custom_client", &self.client.is_some())
            .field("config", &self.config)
            .field("matchers_count", &self.matchers.len())
            .field("handlers_count", &self.handlers.len())
            .finish()
    }
}

impl WebTemplateBuilder {
    /// Set the request timeout of the default client.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout of the default client.
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the cookie policy of the default client.
    pub const fn cookies(mut self, policy: CookiePolicy) -> Self {
        self.config.cookies = policy;
        self
    }

    /// Use `config` for the default client.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the template.
    pub fn build(self) -> WebTemplate {
        let config = self.config;
        let client = self
            .client
            .unwrap_or_else(|| HyperClient::builder().config(&config).with_logging().build());
        WebTemplate {
            client,
            matchers: self.matchers,
            handlers: self.handlers,
            runtime: OnceLock::new(),
        }
    }
}

impl<C> WebTemplateBuilder<C> {
    /// Use `client` as the transport.
    pub fn client<D: HttpClient>(self, client: D) -> WebTemplateBuilder<D> {
        WebTemplateBuilder {
            client: Some(client),
            config: self.config,
            matchers: self.matchers,
            handlers: self.handlers,
        }
    }

    /// Apply `matcher` to every result.
    pub fn always_expect(mut self, matcher: impl ResultMatcher + 'static) -> Self {
        self.matchers.push(Arc::new(matcher));
        self
    }

    /// Apply `handler` to every result, after the matchers.
    pub fn always_do(mut self, handler: impl ResultHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }
}

impl<C: HttpClient> WebTemplateBuilder<C> {
    /// Build the template over the supplied client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no client was supplied.
    pub fn build_with_client(self) -> Result<WebTemplate<C>> {
        let client = self
            .client
            .ok_or_else(|| Error::configuration("no transport client supplied"))?;
        Ok(WebTemplate {
            client,
            matchers: self.matchers,
            handlers: self.handlers,
            runtime: OnceLock::new(),
        })
    }
}
