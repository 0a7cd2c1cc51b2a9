//! Message source (prefix) types.
//!
//! The source names the origin of a line: either a server such as
//! `tmi.twitch.tv`, or a chatter as `nick!user@host`.

/// Host every server-originated tagged line comes from.
pub const TMI_HOST: &str = "tmi.twitch.tv";

/// Pseudo-user that announces operator mode changes.
pub const JTV: &str = "jtv";

/// Borrowed message source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source<'a> {
    /// A bare server or service name.
    Server(&'a str),
    /// A `nick!user@host` mask.
    User {
        nick: &'a str,
        user: &'a str,
        host: &'a str,
    },
}

impl<'a> Source<'a> {
    /// Split a raw source (without its leading `:`).
    ///
    /// Returns `None` when the text is neither a bare name nor a mask whose
    /// three parts are all non-empty.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        match raw.split_once('!') {
            None if raw.contains('@') => None,
            None => Some(Source::Server(raw)),
            Some((nick, rest)) => {
                let (user, host) = rest.split_once('@')?;
                if [nick, user, host].iter().any(|part| part.is_empty())
                    || host.contains(['!', '@'])
                    || user.contains('!')
                {
                    return None;
                }
                Some(Source::User { nick, user, host })
            }
        }
    }

    pub fn nick(&self) -> Option<&'a str> {
        match self {
            Source::User { nick, .. } => Some(nick),
            Source::Server(_) => None,
        }
    }

    /// The host part of a mask, or the whole name of a server.
    pub fn host(&self) -> &'a str {
        match self {
            Source::Server(name) => name,
            Source::User { host, .. } => host,
        }
    }

    pub fn is_server(&self, name: &str) -> bool {
        matches!(self, Source::Server(server) if *server == name)
    }
}
