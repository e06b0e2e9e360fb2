/// Translator configuration.
///
/// ```rust
/// let config = irc2as::Config::new("irc.libera.chat");
/// assert_eq!(config.server, "irc.libera.chat");
/// assert_eq!(config.pending_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
  /// Server identity embedded into every `irc://` URI.
  ///
  /// This is not taken from the wire, so it stays stable
  /// no matter which node of a network answers.
  pub server: String,

  /// Upper bound on the number of multi-line replies buffered at once.
  ///
  /// [`None`] means unbounded: a reply whose terminator never arrives
  /// stays buffered for the lifetime of the translator. When the bound is
  /// reached, a line that would start another reply is passed through on
  /// the `unprocessed` channel instead.
  #[cfg_attr(feature = "serde", serde(default))]
  pub pending_limit: Option<usize>,
}

impl Config {
  /// Instantiate a config for `server`, with no pending limit.
  pub fn new(server: impl ToString) -> Self {
    Self {
      server: server.to_string(),
      pending_limit: None,
    }
  }

  /// Set the pending reply limit.
  pub fn with_pending_limit(mut self, limit: usize) -> Self {
    self.pending_limit = Some(limit);
    self
  }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
  use super::*;

  #[test]
  fn deserialize_minimal() {
    let config: Config = serde_json::from_str(r#"{"server":"irc.example.org"}"#).unwrap();
    assert_eq!(config, Config::new("irc.example.org"));
  }

  #[test]
  fn deserialize_with_limit() {
    let config: Config =
      serde_json::from_str(r#"{"server":"irc.example.org","pending_limit":8}"#).unwrap();
    assert_eq!(config, Config::new("irc.example.org").with_pending_limit(8));
  }
}
