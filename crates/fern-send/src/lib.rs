//! # fern-send: delivery client
//!
//! Normalizes a request, renders its HTML and posts the result to the
//! Sendfern delivery API in a single request. No retries, no scheduling:
//! whatever the API answers is handed back as JSON.

use fern_render::{
    Clock, DiagnosticSink, EmailRequest, EmailSpec, Renderer, SystemClock, TracingDiagnostics,
};
use serde::Serialize;
use serde_json::Value;

pub mod error;

pub use error::{Error, Result};

/// Delivery endpoint of the hosted API.
pub const DEFAULT_ENDPOINT: &str = "https://api.sendfern.com/v1/send";

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "x-sendfern-token";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request body: every normalized field, with `content` replaced by the
/// rendered HTML.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    #[serde(flatten)]
    pub spec: &'a EmailSpec,
    pub content: String,
}

impl<'a> Envelope<'a> {
    /// Render `spec` and wrap it for delivery.
    #[must_use]
    pub fn render<C: Clock, D: DiagnosticSink>(spec: &'a EmailSpec, renderer: &Renderer<C, D>) -> Self {
        Self {
            spec,
            content: renderer.render_html(spec),
        }
    }
}

/// Sends rendered emails to the delivery API.
pub struct Mailer<C = SystemClock, D = TracingDiagnostics> {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    renderer: Renderer<C, D>,
}

impl Mailer {
    /// A mailer for the hosted API, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built (e.g. no TLS backend).
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            renderer: Renderer::new(),
        })
    }
}

impl<C: Clock, D: DiagnosticSink> Mailer<C, D> {
    /// Post somewhere other than the hosted API.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Render with a custom clock or diagnostics sink.
    #[must_use]
    pub fn with_renderer<C2: Clock, D2: DiagnosticSink>(self, renderer: Renderer<C2, D2>) -> Mailer<C2, D2> {
        Mailer {
            client: self.client,
            endpoint: self.endpoint,
            token: self.token,
            renderer,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Normalize, render and post `request`, returning the API's JSON reply.
    ///
    /// # Errors
    ///
    /// Transport failures and non-JSON replies. HTTP error statuses are not
    /// errors; their JSON body is returned like any other.
    pub async fn try_send(&self, request: EmailRequest) -> Result<Value> {
        let spec = EmailSpec::from(request);
        self.try_send_spec(&spec).await
    }

    /// [`try_send`](Self::try_send) for an already normalized request.
    ///
    /// # Errors
    ///
    /// See [`try_send`](Self::try_send).
    pub async fn try_send_spec(&self, spec: &EmailSpec) -> Result<Value> {
        let envelope = Envelope::render(spec, &self.renderer);

        tracing::debug!(endpoint = %self.endpoint, "sending email");

        let res = self
            .client
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .json(&envelope)
            .send()
            .await?;

        let status = res.status();
        let full = res.bytes().await?;
        let reply = serde_json::from_slice(&full)?;

        tracing::debug!(%status, "delivery API replied");

        Ok(reply)
    }

    /// Fire-and-forget [`try_send`](Self::try_send): failures are logged and
    /// come back as `None`.
    pub async fn send(&self, request: EmailRequest) -> Option<Value> {
        match self.try_send(request).await {
            Ok(reply) => Some(reply),
            Err(error) => {
                tracing::error!(%error, "failed to send email");
                None
            }
        }
    }
}
