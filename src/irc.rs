//! ## IRC line tokenizer
//!
//! The entrypoint to this module is [`Line`].
//!
//! ```rust
//! let line = irc2as::Line::parse(":alice!a@host PRIVMSG #rust :hello").unwrap();
//! assert_eq!(line.channel(), Some("#rust"));
//! assert_eq!(line.content(), Some("hello"));
//! ```
//!
//! ⚠ This tokenizer is _not_ compliant with any IRC RFC!
//! It splits lines positionally, the way most servers happen to
//! format them, and leaves interpretation to the translator.

pub mod command;
pub mod prefix;

pub use command::Command;
pub use prefix::Prefix;

use crate::error::InputError;
use smallvec::SmallVec;
use std::fmt::Debug;

/// Separator between the positional part of a line and its free text.
const CONTENT_SEPARATOR: &str = " :";

/// Lines shorter than this (after trimming) are rejected.
pub const MIN_LINE_LEN: usize = 3;

/// A tokenized IRC line.
///
/// This references the original string instead of owning it.
#[derive(Clone, PartialEq, Eq)]
pub struct Line<'src> {
  src: &'src str,
  metadata: &'src str,
  source: &'src str,
  command: Option<Command<'src>>,
  pos: [Option<&'src str>; 3],
  extra: SmallVec<[&'src str; 4]>,
  content: Option<&'src str>,
}

impl<'src> Line<'src> {
  /// Tokenize a single line.
  ///
  /// Surrounding whitespace is trimmed first. Fails if what remains
  /// is shorter than [`MIN_LINE_LEN`] characters.
  pub fn parse(src: &'src str) -> Result<Self, InputError> {
    let src = src.trim();
    let len = src.chars().take(MIN_LINE_LEN).count();
    if len < MIN_LINE_LEN {
      return Err(InputError::TooShort { len });
    }

    let (metadata, content) = match src.split_once(CONTENT_SEPARATOR) {
      Some((metadata, content)) => (metadata, Some(content)),
      None => (src, None),
    };

    let mut tokens = metadata.split(' ');
    let source = tokens.next().unwrap_or_default();
    let command = tokens.next().and_then(Command::parse);
    let pos = [tokens.next(), tokens.next(), tokens.next()];
    let extra = tokens.collect();

    Ok(Line {
      src,
      metadata,
      source,
      command,
      pos,
      extra,
      content,
    })
  }

  /// Get the trimmed string from which this line was parsed.
  pub fn raw(&self) -> &'src str {
    self.src
  }

  /// Whether this is a bare server `PING`.
  ///
  /// Only an exact `PING` metadata counts, a trailing token is ignored.
  pub fn is_ping(&self) -> bool {
    self.metadata == "PING"
  }

  /// The first token, usually `:nick!user@host` or `:server`.
  pub fn source(&self) -> &'src str {
    self.source
  }

  /// The second token, resolved to a [`Command`].
  pub fn command(&self) -> Option<Command<'src>> {
    self.command
  }

  /// Positional parameter `n`, where `n` is `1`, `2` or `3`.
  pub fn pos(&self, n: usize) -> Option<&'src str> {
    n.checked_sub(1)
      .and_then(|i| self.pos.get(i))
      .copied()
      .flatten()
  }

  /// Positional parameters after the third.
  pub fn extra(&self) -> &[&'src str] {
    &self.extra
  }

  /// The free text after ` :`.
  pub fn content(&self) -> Option<&'src str> {
    self.content
  }

  /// The first of the three positional parameters that names a channel.
  pub fn channel(&self) -> Option<&'src str> {
    self
      .pos
      .iter()
      .flatten()
      .copied()
      .find(|param| param.starts_with('#'))
  }
}

impl<'src> Debug for Line<'src> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Line")
      .field("source", &self.source)
      .field("command", &self.command)
      .field("pos", &self.pos)
      .field("extra", &self.extra)
      .field("content", &self.content)
      .finish()
  }
}

static_assert_send!(Line);
static_assert_sync!(Line);
