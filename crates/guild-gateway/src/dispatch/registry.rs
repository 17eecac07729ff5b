//! Event handler registry
//!
//! Maps event type names to ordered handler lists. Every invocation runs as
//! its own task under a supervisor that logs failures and panics.

use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::connection::GatewayStats;
use crate::events::Event;

/// A registered handler
pub type EventHandler<C> =
    Arc<dyn Fn(C, Arc<Event>) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Event type name to handlers, in registration order
pub struct EventRegistry<C> {
    handlers: DashMap<String, Vec<EventHandler<C>>>,
    stats: Arc<GatewayStats>,
}

impl<C> EventRegistry<C>
where
    C: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
            stats: Arc::new(GatewayStats::new()),
        }
    }

    /// Count handler failures into shared stats
    pub fn with_stats(mut self, stats: Arc<GatewayStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Append a handler for an event type
    pub fn register<F, Fut>(&self, event_type: impl Into<String>, handler: F)
    where
        F: Fn(C, Arc<Event>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let event_type = event_type.into();
        let handler: EventHandler<C> = Arc::new(move |ctx, event| handler(ctx, event).boxed());

        tracing::debug!(event_type = %event_type, "Registering event handler");
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Number of handlers registered for an event type
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.get(event_type).map_or(0, |h| h.len())
    }

    /// Invoke every handler for the event, in registration order
    ///
    /// Returns immediately; each handler's future runs as its own task.
    /// Returns the number of handlers started.
    pub fn dispatch(&self, ctx: &C, event: Arc<Event>) -> usize {
        // Clone out so the map shard lock is not held while handlers run
        let handlers = match self.handlers.get(&event.event_type) {
            Some(handlers) => handlers.clone(),
            None => {
                tracing::trace!(event_type = %event.event_type, "No handlers registered");
                return 0;
            }
        };

        let mut started = 0;
        for (index, handler) in handlers.iter().enumerate() {
            let future = match std::panic::catch_unwind(AssertUnwindSafe(|| {
                handler(ctx.clone(), Arc::clone(&event))
            })) {
                Ok(future) => future,
                Err(panic) => {
                    tracing::error!(
                        event_type = %event.event_type,
                        handler = index,
                        panic = %panic_message(panic.as_ref()),
                        "Event handler panicked"
                    );
                    self.stats.record_handler_failure();
                    continue;
                }
            };

            let task = tokio::spawn(future);
            let stats = Arc::clone(&self.stats);
            let event_type = event.event_type.clone();
            tokio::spawn(async move {
                match task.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        tracing::error!(
                            event_type = %event_type,
                            handler = index,
                            error = %format!("{e:#}"),
                            "Event handler failed"
                        );
                        stats.record_handler_failure();
                    }
                    Err(join) if join.is_panic() => {
                        let panic = join.into_panic();
                        tracing::error!(
                            event_type = %event_type,
                            handler = index,
                            panic = %panic_message(panic.as_ref()),
                            "Event handler panicked"
                        );
                        stats.record_handler_failure();
                    }
                    Err(_) => {
                        tracing::debug!(
                            event_type = %event_type,
                            handler = index,
                            "Event handler cancelled"
                        );
                    }
                }
            });
            started += 1;
        }
        started
    }
}

impl<C> Default for EventRegistry<C>
where
    C: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for EventRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<(String, usize)> = self
            .handlers
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().len()))
            .collect();
        f.debug_struct("EventRegistry").field("handlers", &counts).finish()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn event(event_type: &str) -> Arc<Event> {
        Arc::new(Event::new(event_type, Some(1), None))
    }

    async fn wait_for(stats: &GatewayStats, failures: u64) {
        for _ in 0..200 {
            if stats.snapshot().handler_failures >= failures {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {failures} handler failures");
    }

    #[tokio::test]
    async fn test_dispatch_without_handlers_is_noop() {
        let registry: EventRegistry<()> = EventRegistry::new();
        assert_eq!(registry.dispatch(&(), event("READY")), 0);
        assert_eq!(registry.handler_count("READY"), 0);
    }

    #[tokio::test]
    async fn test_handlers_invoked_in_registration_order() {
        let registry: EventRegistry<()> = EventRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for id in 1..=2 {
            let order = Arc::clone(&order);
            registry.register("AT_MESSAGE_CREATE", move |(), _event| {
                order.lock().push(id);
                async { anyhow::Ok(()) }
            });
        }

        assert_eq!(registry.handler_count("AT_MESSAGE_CREATE"), 2);
        assert_eq!(registry.dispatch(&(), event("AT_MESSAGE_CREATE")), 2);
        assert_eq!(*order.lock(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_handlers_receive_context_and_event() {
        let registry: EventRegistry<u32> = EventRegistry::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        registry.register("GUILD_CREATE", move |ctx, event| {
            let tx = tx.clone();
            async move {
                tx.send((ctx, event.event_type.clone(), event.sequence))?;
                anyhow::Ok(())
            }
        });

        registry.dispatch(&7, event("GUILD_CREATE"));
        let (ctx, event_type, seq) = rx.recv().await.unwrap();
        assert_eq!(ctx, 7);
        assert_eq!(event_type, "GUILD_CREATE");
        assert_eq!(seq, Some(1));
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_block_siblings() {
        let stats = Arc::new(GatewayStats::new());
        let registry: EventRegistry<()> = EventRegistry::new().with_stats(Arc::clone(&stats));
        let (tx, mut rx) = mpsc::unbounded_channel();

        registry.register("READY", |(), _event| async {
            Err::<(), _>(anyhow::anyhow!("boom"))
        });
        registry.register("READY", |(), _event| async {
            if true {
                panic!("handler panic");
            }
            anyhow::Ok(())
        });
        registry.register("READY", |(), _event| -> futures::future::Ready<anyhow::Result<()>> {
            panic!("sync panic")
        });
        registry.register("READY", move |(), _event| {
            let tx = tx.clone();
            async move {
                tx.send("ran")?;
                anyhow::Ok(())
            }
        });

        assert_eq!(registry.dispatch(&(), event("READY")), 3);
        assert_eq!(rx.recv().await, Some("ran"));
        wait_for(&stats, 3).await;
    }

    #[tokio::test]
    async fn test_dispatch_does_not_await_handlers() {
        let registry: EventRegistry<()> = EventRegistry::new();
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();

        registry.register("AUDIO_START", move |(), _event| {
            let tx = tx.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                tx.send(())?;
                anyhow::Ok(())
            }
        });

        registry.dispatch(&(), event("AUDIO_START"));
        assert!(rx.try_recv().is_err());
        assert!(rx.recv().await.is_some());
    }
}
