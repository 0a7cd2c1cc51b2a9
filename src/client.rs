//! A minimal chat client.
//!
//! [`Client`] logs in, joins one channel and runs a read loop that keeps the
//! session alive: it answers `PING`, re-establishes the session on
//! `RECONNECT` and skips lines that fail to classify. Everything else goes
//! to a [`Handler`], which can reply through the [`OutboundQueue`].

use anyhow::Result;
use tracing::{debug, info, instrument, trace, warn};

use crate::config::ClientConfig;
use crate::encode;
use crate::message::Message;
use crate::queue::{OutboundQueue, Throttle};
use crate::transport::{Endpoint, Transport};

/// Receives every message the client does not handle itself.
pub trait Handler {
    fn on_message(&mut self, msg: &Message, out: &OutboundQueue);
}

impl<F> Handler for F
where
    F: FnMut(&Message, &OutboundQueue),
{
    fn on_message(&mut self, msg: &Message, out: &OutboundQueue) {
        (*self)(msg, out)
    }
}

/// What the read loop did with one message.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Handled,
    Reconnect,
    Forward,
}

/// One logged-in chat session.
pub struct Client {
    config: ClientConfig,
    endpoint: Endpoint,
    transport: Transport,
    queue: OutboundQueue,
    throttle: Throttle,
}

impl Client {
    /// Connect over plain TCP to the configured server.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let endpoint = Endpoint::Tcp {
            addr: config.address(),
        };
        Self::connect_to(endpoint, config).await
    }

    /// Connect to `endpoint` and log in.
    #[instrument(skip_all, fields(channel = %config.channel))]
    pub async fn connect_to(endpoint: Endpoint, config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let mut transport = endpoint.open(config.parser.clone()).await?;
        login(&mut transport, &config).await?;
        info!(?endpoint, "logged in");

        Ok(Self {
            throttle: Throttle::new(config.write_delay),
            config,
            endpoint,
            transport,
            queue: OutboundQueue::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle for queueing outbound lines from other tasks.
    pub fn queue(&self) -> OutboundQueue {
        self.queue.clone()
    }

    /// Queue `text` for the joined channel, split to the length limit.
    pub fn say(&self, text: &str) {
        for line in encode::privmsg_chunked(&self.config.channel, text) {
            self.queue.push(line);
        }
    }

    /// Run until the server closes the connection or an I/O error occurs.
    #[instrument(skip_all, fields(channel = %self.config.channel))]
    pub async fn run<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        loop {
            tokio::select! {
                msg = self.transport.read_message() => {
                    let msg = match msg? {
                        Some(msg) => msg,
                        None => {
                            info!("connection closed by server");
                            return Ok(());
                        }
                    };

                    match respond(&msg, &self.queue) {
                        Action::Handled => {}
                        Action::Reconnect => self.reconnect().await?,
                        Action::Forward => handler.on_message(&msg, &self.queue),
                    }
                }
                line = self.queue.pop() => {
                    self.throttle.wait().await;
                    trace!(%line, "sending");
                    self.transport.write_line(line).await?;
                }
            }
        }
    }

    /// Open a fresh session, dropping anything still queued.
    async fn reconnect(&mut self) -> Result<()> {
        let dropped = self.queue.drain();
        info!(dropped = dropped.len(), "server requested reconnect");

        let mut transport = self.endpoint.open(self.config.parser.clone()).await?;
        login(&mut transport, &self.config).await?;
        self.transport = transport;
        self.throttle.reset();
        Ok(())
    }
}

/// Send the login sequence: capabilities, credentials, then the join.
async fn login(transport: &mut Transport, config: &ClientConfig) -> Result<()> {
    if !config.capabilities.is_empty() {
        transport.write_line(encode::cap_req(&config.capabilities)).await?;
    }
    transport.write_line(encode::pass(&config.token)).await?;
    transport.write_line(encode::nick(&config.nick)).await?;
    transport.write_line(encode::join(&config.channel)).await?;
    debug!(nick = %config.nick, "sent login");
    Ok(())
}

/// Protocol obligations the client meets before a handler sees anything.
fn respond(msg: &Message, queue: &OutboundQueue) -> Action {
    match msg {
        Message::Ping(ping) => {
            trace!(host = %ping.host, "answering ping");
            queue.push_priority(ping.pong());
            Action::Handled
        }
        Message::Reconnect(_) => Action::Reconnect,
        Message::ParseError(err) => {
            warn!(raw = %err.raw.trim_end(), "unrecognized line");
            Action::Handled
        }
        _ => Action::Forward,
    }
}
