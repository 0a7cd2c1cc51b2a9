//! Connections to the chat service.
//!
//! A [`Transport`] carries lines over plain TCP, TLS or WebSocket and hands
//! back classified [`Message`]s.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use socket2::{SockRef, TcpKeepalive};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::TlsConnector;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tokio_util::codec::Framed;
use tracing::{debug, warn};

use crate::classify::Classifier;
use crate::codec::TmiCodec;
use crate::config::ParserConfig;
use crate::error::ProtocolError;
use crate::line::{is_illegal_control_char, MAX_LINE_LEN};
use crate::message::Message;

/// Errors that can occur when reading from a transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportReadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where to open a [`Transport`], kept so a session can be re-established.
#[derive(Clone)]
pub enum Endpoint {
    /// Plain TCP to `host:port`.
    Tcp { addr: String },
    /// TLS to `host:port`, verifying the certificate for `domain`.
    Tls {
        addr: String,
        domain: String,
        connector: TlsConnector,
    },
    /// WebSocket `ws://` or `wss://` URL.
    WebSocket { url: String },
}

impl Endpoint {
    pub async fn open(&self, config: ParserConfig) -> Result<Transport> {
        match self {
            Endpoint::Tcp { addr } => Transport::connect_tcp(addr, config).await,
            Endpoint::Tls {
                addr,
                domain,
                connector,
            } => Transport::connect_tls(addr, domain, connector, config).await,
            Endpoint::WebSocket { url } => Transport::connect_websocket(url, config).await,
        }
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Tcp { addr } => f.debug_struct("Tcp").field("addr", addr).finish(),
            Endpoint::Tls { addr, domain, .. } => f
                .debug_struct("Tls")
                .field("addr", addr)
                .field("domain", domain)
                .finish_non_exhaustive(),
            Endpoint::WebSocket { url } => f.debug_struct("WebSocket").field("url", url).finish(),
        }
    }
}

#[allow(clippy::large_enum_variant)]
pub enum Transport {
    Tcp {
        framed: Framed<TcpStream, TmiCodec>,
    },
    Tls {
        framed: Framed<TlsStream<TcpStream>, TmiCodec>,
    },
    WebSocket {
        stream: WsStream,
        classifier: Classifier,
        /// Lines from a frame that carried more than one.
        pending: VecDeque<String>,
    },
}

impl Transport {
    pub fn tcp(stream: TcpStream, config: ParserConfig) -> Self {
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        Self::Tcp {
            framed: Framed::new(stream, TmiCodec::new(config)),
        }
    }

    fn enable_keepalive(stream: &TcpStream) -> Result<()> {
        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(120))
            .with_interval(Duration::from_secs(30));

        sock.set_tcp_keepalive(&keepalive)?;
        Ok(())
    }

    pub fn tls(stream: TlsStream<TcpStream>, config: ParserConfig) -> Self {
        Self::Tls {
            framed: Framed::new(stream, TmiCodec::new(config)),
        }
    }

    pub fn websocket(stream: WsStream, config: ParserConfig) -> Self {
        Self::WebSocket {
            stream,
            classifier: Classifier::new(config),
            pending: VecDeque::new(),
        }
    }

    /// Open a plain TCP connection to `addr` (`host:port`).
    pub async fn connect_tcp(addr: &str, config: ParserConfig) -> Result<Self> {
        debug!(addr, "connecting over tcp");
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("failed to connect to {}", addr))?;
        Ok(Self::tcp(stream, config))
    }

    /// Open a TLS connection to `addr`, verifying the certificate for
    /// `domain` with `connector`.
    pub async fn connect_tls(
        addr: &str,
        domain: &str,
        connector: &TlsConnector,
        config: ParserConfig,
    ) -> Result<Self> {
        debug!(addr, domain, "connecting over tls");
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("failed to connect to {}", addr))?;
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }
        let server_name = ServerName::try_from(domain.to_owned())
            .with_context(|| format!("invalid tls server name: {}", domain))?;
        let stream = connector.connect(server_name, stream).await?;
        Ok(Self::tls(stream, config))
    }

    /// Open a WebSocket connection to `url`.
    pub async fn connect_websocket(url: &str, config: ParserConfig) -> Result<Self> {
        debug!(url, "connecting over websocket");
        let (stream, _response) = tokio_tungstenite::connect_async(url)
            .await
            .with_context(|| format!("websocket handshake with {} failed", url))?;
        Ok(Self::websocket(stream, config))
    }

    pub fn is_tls(&self) -> bool {
        matches!(self, Self::Tls { .. })
    }

    pub fn is_websocket(&self) -> bool {
        matches!(self, Self::WebSocket { .. })
    }

    /// Next classified message, or `None` once the peer closed the
    /// connection.
    pub async fn read_message(&mut self) -> Result<Option<Message>, TransportReadError> {
        macro_rules! read_framed {
            ($framed:expr) => {
                match $framed.next().await {
                    Some(Ok(msg)) => Ok(Some(msg)),
                    Some(Err(e)) => Err(TransportReadError::from(e)),
                    None => Ok(None),
                }
            };
        }

        match self {
            Transport::Tcp { framed } => read_framed!(framed),
            Transport::Tls { framed } => read_framed!(framed),
            Transport::WebSocket {
                stream,
                classifier,
                pending,
            } => loop {
                if let Some(line) = pending.pop_front() {
                    return Ok(Some(classifier.classify(&line)));
                }
                match read_websocket_frame(stream).await? {
                    Some(lines) => pending.extend(lines),
                    None => return Ok(None),
                }
            },
        }
    }

    /// Send one command line; the terminator is added here.
    pub async fn write_line(&mut self, line: String) -> Result<()> {
        macro_rules! write_framed {
            ($framed:expr, $line:expr) => {
                $framed.send($line).await.map_err(|e| anyhow::anyhow!(e))
            };
        }

        match self {
            Transport::Tcp { framed } => write_framed!(framed, line),
            Transport::Tls { framed } => write_framed!(framed, line),
            Transport::WebSocket { stream, .. } => write_websocket_line(stream, line).await,
        }
    }
}

/// Read frames until one carries text, split into its lines.
///
/// The service batches several lines into one frame.
async fn read_websocket_frame(
    stream: &mut WsStream,
) -> Result<Option<Vec<String>>, TransportReadError> {
    loop {
        match stream.next().await {
            Some(Ok(WsMessage::Text(text))) => {
                if let Some(ch) = text.chars().find(|ch| is_illegal_control_char(*ch)) {
                    return Err(TransportReadError::Protocol(
                        ProtocolError::IllegalControlChar(ch),
                    ));
                }

                let lines: Vec<String> = text
                    .split('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line))
                    .filter(|line| !line.is_empty())
                    .map(str::to_owned)
                    .collect();

                if let Some(line) = lines.iter().find(|line| line.len() > MAX_LINE_LEN) {
                    return Err(TransportReadError::Protocol(ProtocolError::MessageTooLong {
                        actual: line.len(),
                        limit: MAX_LINE_LEN,
                    }));
                }

                return Ok(Some(lines));
            }
            Some(Ok(WsMessage::Close(_))) | None => {
                return Ok(None);
            }
            Some(Ok(WsMessage::Ping(_))) | Some(Ok(WsMessage::Pong(_))) => {
                continue;
            }
            Some(Ok(WsMessage::Binary(_))) => {
                warn!("ignoring binary WebSocket frame");
                continue;
            }
            Some(Ok(WsMessage::Frame(_))) => {
                continue;
            }
            Some(Err(e)) => {
                return Err(TransportReadError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("WebSocket error: {}", e),
                )));
            }
        }
    }
}

async fn write_websocket_line(stream: &mut WsStream, line: String) -> Result<()> {
    let line = TmiCodec::sanitize(line)?;
    stream
        .send(WsMessage::Text(line.trim_end_matches(['\r', '\n']).to_string()))
        .await
        .map_err(|e| anyhow::anyhow!("WebSocket send error: {}", e))?;
    Ok(())
}
