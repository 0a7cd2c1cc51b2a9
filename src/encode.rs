//! Outbound command lines.
//!
//! Helpers for the handful of lines a chat client sends. They return the
//! line without a terminator; the codec appends `\r\n`.

use crate::caps::Capability;

/// Longest chat message body the service accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// `PONG :<host>`, the reply to `PING :<host>`.
pub fn pong(host: &str) -> String {
    format!("PONG :{}", host)
}

/// `PASS <token>`.
pub fn pass(token: &str) -> String {
    format!("PASS {}", token)
}

/// `NICK <nick>`.
pub fn nick(nick: &str) -> String {
    format!("NICK {}", nick)
}

/// `JOIN <channel>`.
pub fn join(channel: &str) -> String {
    format!("JOIN {}", channel)
}

/// `PART <channel>`.
pub fn part(channel: &str) -> String {
    format!("PART {}", channel)
}

/// `CAP REQ :<cap> <cap>...`.
pub fn cap_req(caps: &[Capability]) -> String {
    let names: Vec<&str> = caps.iter().map(Capability::as_str).collect();
    format!("CAP REQ :{}", names.join(" "))
}

/// `PRIVMSG <channel> :<text>`.
///
/// Line breaks in `text` are replaced with spaces so one call always
/// produces exactly one line.
pub fn privmsg(channel: &str, text: &str) -> String {
    let text: String = text
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();
    format!("PRIVMSG {} :{}", channel, text)
}

/// Split `text` into `PRIVMSG` lines whose bodies stay within
/// [`MAX_MESSAGE_CHARS`].
pub fn privmsg_chunked(channel: &str, text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(MAX_MESSAGE_CHARS)
        .map(|chunk| privmsg(channel, &chunk.iter().collect::<String>()))
        .collect()
}
