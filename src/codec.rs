//! Chat message codec for tokio.
//!
//! Decodes received lines into [`Message`]s through a [`Classifier`] and
//! encodes outbound command lines, appending the `\r\n` terminator.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::classify::Classifier;
use crate::config::ParserConfig;
use crate::error::{ProtocolError, Result};
use crate::line::{is_illegal_control_char, LineCodec};
use crate::message::Message;

/// Tokio codec for chat lines.
///
/// Wraps [`LineCodec`]. A line no shape accepts decodes to
/// [`Message::ParseError`] rather than an error, so one bad line never ends
/// the stream.
#[derive(Debug, Default)]
pub struct TmiCodec {
    inner: LineCodec,
    classifier: Classifier,
}

impl TmiCodec {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            inner: LineCodec::new(),
            classifier: Classifier::new(config),
        }
    }

    pub fn with_max_len(config: ParserConfig, max_len: usize) -> Self {
        Self {
            inner: LineCodec::with_max_len(max_len),
            classifier: Classifier::new(config),
        }
    }

    /// Sanitize an outgoing line.
    ///
    /// - Truncates at the first line ending
    /// - Rejects control characters
    /// - Terminates with `\r\n`
    pub fn sanitize(mut data: String) -> Result<String> {
        if let Some(pos) = data.find(['\r', '\n']) {
            data.truncate(pos);
        }

        if let Some(ch) = data.chars().find(|ch| is_illegal_control_char(*ch)) {
            return Err(ProtocolError::IllegalControlChar(ch));
        }

        data.push_str("\r\n");
        Ok(data)
    }
}

impl Decoder for TmiCodec {
    type Item = Message;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>> {
        Ok(self
            .inner
            .decode(src)?
            .map(|line| self.classifier.classify(&line)))
    }
}

impl Encoder<String> for TmiCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<()> {
        let sanitized = Self::sanitize(line)?;
        self.inner.encode(sanitized, dst)
    }
}
