//! Guild bot

use guild_common::BotConfig;
use guild_rest::RestClient;
use std::future::Future;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use super::GatewayResolver;
use crate::connection::{Connector, GatewayStats, SessionState, StatsSnapshot, WsConnector};
use crate::dispatch::EventRegistry;
use crate::error::{GatewayError, GatewayResult};
use crate::events::{Event, GatewayEventType};
use crate::session::{GatewaySession, ReconnectPolicy, SessionContext, SessionIdentity};

/// A bot connected to the platform gateway
///
/// Cheap to clone; clones share the session, registry and REST client.
/// Dereferences to [`RestClient`] so handlers can call the REST API directly.
#[derive(Clone)]
pub struct GuildBot {
    inner: Arc<BotInner>,
}

struct BotInner {
    config: BotConfig,
    rest: RestClient,
    registry: Arc<EventRegistry<GuildBot>>,
    state: Arc<SessionState>,
    stats: Arc<GatewayStats>,
    resolver: Arc<dyn GatewayResolver>,
    connector: Arc<dyn Connector>,
    running: AtomicBool,
    shutdown: watch::Sender<bool>,
}

/// Builder for [`GuildBot`]
pub struct GuildBotBuilder {
    config: BotConfig,
    resolver: Option<Arc<dyn GatewayResolver>>,
    connector: Option<Arc<dyn Connector>>,
}

impl GuildBotBuilder {
    /// Resolve the gateway URL some other way than `GET /gateway`
    pub fn with_resolver(mut self, resolver: impl GatewayResolver) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Open sockets some other way than `tokio-tungstenite`
    pub fn with_connector(mut self, connector: impl Connector) -> Self {
        self.connector = Some(Arc::new(connector));
        self
    }

    pub fn build(self) -> GatewayResult<GuildBot> {
        let rest = RestClient::from_config(&self.config)?;
        let stats = Arc::new(GatewayStats::new());
        let registry = Arc::new(EventRegistry::new().with_stats(Arc::clone(&stats)));
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(rest.clone()) as Arc<dyn GatewayResolver>);
        let connector = self
            .connector
            .unwrap_or_else(|| Arc::new(WsConnector) as Arc<dyn Connector>);
        let (shutdown, _) = watch::channel(false);

        Ok(GuildBot {
            inner: Arc::new(BotInner {
                config: self.config,
                rest,
                registry,
                state: Arc::new(SessionState::new()),
                stats,
                resolver,
                connector,
                running: AtomicBool::new(false),
                shutdown,
            }),
        })
    }
}

impl GuildBot {
    /// Create a bot with the default resolver and WebSocket connector
    pub fn new(config: BotConfig) -> GatewayResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: BotConfig) -> GuildBotBuilder {
        GuildBotBuilder {
            config,
            resolver: None,
            connector: None,
        }
    }

    /// Register a handler for an event type
    ///
    /// Handlers for the same event run in registration order, each as its
    /// own task. Errors and panics are logged and do not affect other
    /// handlers.
    pub fn on<F, Fut>(&self, event_type: impl Into<String>, handler: F) -> &Self
    where
        F: Fn(GuildBot, Arc<Event>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let event_type = event_type.into();
        let required = GatewayEventType::from_str(&event_type).and_then(GatewayEventType::intent);
        if let Some(intent) = required {
            if !self.inner.config.intents.contains(intent) {
                tracing::warn!(
                    event_type = %event_type,
                    intents = %self.inner.config.intents,
                    "Handler registered for an event the configured intents do not cover"
                );
            }
        }

        self.inner.registry.register(event_type, handler);
        self
    }

    /// Connect and process events until [`shutdown`](Self::shutdown) or a
    /// terminal failure
    pub async fn run(&self) -> GatewayResult<()> {
        let _guard = RunningGuard::acquire(&self.inner.running)?;
        self.inner.shutdown.send_replace(false);

        let config = &self.inner.config;
        tracing::info!(
            app_id = %config.app_id,
            intents = %config.intents,
            shard_id = config.shard_id,
            shard_count = config.shard_count,
            sandbox = config.is_sandbox(),
            "Starting bot"
        );

        let ctx = SessionContext::new(
            SessionIdentity::from_config(config),
            Arc::clone(&self.inner.state),
            Arc::clone(&self.inner.stats),
            Arc::clone(&self.inner.registry),
            self.clone(),
        );
        let session = GatewaySession::new(
            ctx,
            Arc::clone(&self.inner.resolver),
            Arc::clone(&self.inner.connector),
            ReconnectPolicy::new(config.reconnect_delay, config.reconnect_max_attempts),
            self.inner.shutdown.subscribe(),
        );
        session.run().await
    }

    /// Ask a running [`run`](Self::run) to return `Ok(())`
    pub fn shutdown(&self) {
        tracing::info!("Shutdown requested");
        self.inner.shutdown.send_replace(true);
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &BotConfig {
        &self.inner.config
    }

    pub fn rest(&self) -> &RestClient {
        &self.inner.rest
    }

    /// Current session state (sequence, session id, phase, bot user)
    pub fn session(&self) -> &SessionState {
        &self.inner.state
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }
}

impl Deref for GuildBot {
    type Target = RestClient;

    fn deref(&self) -> &Self::Target {
        &self.inner.rest
    }
}

impl std::fmt::Debug for GuildBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuildBot")
            .field("app_id", &self.inner.config.app_id)
            .field("phase", &self.inner.state.phase())
            .field("registry", &self.inner.registry)
            .finish()
    }
}

/// Clears the running flag when `run` returns
struct RunningGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunningGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> GatewayResult<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(GatewayError::AlreadyRunning);
        }
        Ok(Self { flag })
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
