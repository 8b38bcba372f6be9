//! Transport settings shared by [`HyperClient`](crate::HyperClient) and
//! [`WebTemplate`](crate::WebTemplate).

use std::time::Duration;

/// What the transport does with cookies set by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CookiePolicy {
    /// Keep `Set-Cookie` values per host and send them back on later requests.
    ///
    /// The jar is scoped by host only: `Domain`, `Path`, `Expires` and
    /// `Secure` are not interpreted, so a cookie goes to every path of the
    /// host that set it. `Max-Age=0` removes it.
    #[default]
    Keep,
    /// Never store cookies. Only explicitly declared `Cookie` headers are sent.
    Ignore,
}

/// Transport settings.
///
/// Timeouts bound a whole exchange. A test that waits on a slow endpoint fails
/// with a timeout error instead of hanging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Time allowed from sending the request to the end of the response body.
    pub timeout: Duration,
    /// Time allowed to open the TCP connection.
    pub connect_timeout: Duration,
    /// Idle connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
    /// Cookie handling.
    pub cookies: CookiePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 8,
            pool_idle_timeout: Duration::from_secs(90),
            cookies: CookiePolicy::Keep,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Continue editing this configuration.
    #[must_use]
    pub fn to_builder(&self) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: self.clone(),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Whole-exchange timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Idle connections kept per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config.pool_idle_per_host = count;
        self
    }

    /// Idle connection lifetime.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Cookie handling.
    #[must_use]
    pub const fn cookies(mut self, policy: CookiePolicy) -> Self {
        self.config.cookies = policy;
        self
    }

    /// Finish.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
