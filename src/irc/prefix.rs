/// A message source.
///
/// ```text,ignore
/// :nick!user@host
/// ```
///
/// Only `!` separates the nick. A source without `!`,
/// such as `:irc.example.org`, is all nick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Prefix<'src> {
  /// The `nick` part of the prefix.
  pub nick: &'src str,
  /// The `user` part of the prefix.
  pub user: Option<&'src str>,
  /// The `host` part of the prefix.
  pub host: Option<&'src str>,
}

impl<'src> Prefix<'src> {
  /// Split a source token, with or without its leading `:`.
  ///
  /// Returns `None` if the token has no nick.
  pub fn parse(token: &'src str) -> Option<Self> {
    let token = token.strip_prefix(':').unwrap_or(token);
    let (nick, rest) = match token.split_once('!') {
      Some((nick, rest)) => (nick, Some(rest)),
      None => (token, None),
    };
    if nick.is_empty() {
      return None;
    }

    let (user, host) = match rest.map(|rest| rest.split_once('@')) {
      Some(Some((user, host))) => (Some(user), Some(host)),
      Some(None) => (rest, None),
      None => (None, None),
    };

    Some(Prefix { nick, user, host })
  }
}

impl<'src> std::fmt::Display for Prefix<'src> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match (self.nick, self.user, self.host) {
      (nick, Some(user), Some(host)) => write!(f, "{nick}!{user}@{host}"),
      (nick, Some(user), None) => write!(f, "{nick}!{user}"),
      (nick, None, _) => write!(f, "{nick}"),
    }
  }
}

/// The nick part of a source token.
#[inline]
pub fn nick(token: &str) -> Option<&str> {
  Prefix::parse(token).map(|prefix| prefix.nick)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn full_prefix() {
    assert_eq!(
      Prefix::parse(":alice!~alice@example.org"),
      Some(Prefix {
        nick: "alice",
        user: Some("~alice"),
        host: Some("example.org"),
      })
    );
  }

  #[test]
  fn without_colon() {
    assert_eq!(nick("bob!b@host"), Some("bob"));
  }

  #[test]
  fn server_source_is_nick() {
    assert_eq!(nick(":irc.example.org"), Some("irc.example.org"));
  }

  #[test]
  fn empty_nick() {
    assert_eq!(nick(":"), None);
    assert_eq!(nick(":!user@host"), None);
  }

  #[test]
  fn display() {
    let prefix = Prefix::parse(":alice!~alice@example.org").unwrap();
    assert_eq!(prefix.to_string(), "alice!~alice@example.org");
  }
}
