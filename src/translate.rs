//! ## IRC to ActivityStreams translator
//!
//! The entrypoint to this module is [`Translator`].
//!
//! ```rust
//! use irc2as::{Emission, Translator};
//!
//! let mut translator = Translator::new(irc2as::Config::new("irc.example.org"));
//! translator.input(":irc.example.org 353 me = #rust :alice bob");
//! translator.input(":irc.example.org 366 me #rust :End of /NAMES list.");
//!
//! let emissions = translator.take_emissions();
//! assert_eq!(emissions.len(), 1);
//! let Emission::Incoming(names) = &emissions[0] else { unreachable!() };
//! assert_eq!(names.object().members().map(<[String]>::len), Some(2));
//! ```
//!
//! Lines are translated one at a time, in order. Each call emits at most
//! one [`Emission`] to the translator's [`Sink`]. Replies that span several
//! lines are held back until their terminator arrives.

use crate::buffer::{Key, ReplyBuffer};
use crate::config::Config;
use crate::error::InputError;
use crate::irc::{Command, Line, Prefix};
use crate::rules::{self, Context, Step};
use crate::sink::{Channel, Emission, Sink};
use chrono::{DateTime, Utc};

/// What happened to a line accepted by [`Translator::try_input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
  /// Something was emitted on this channel.
  Emitted(Channel),

  /// The line became part of a pending multi-line reply.
  Buffered,

  /// The line was recognized but deliberately produced nothing,
  /// such as a terminator with no pending reply.
  Discarded,
}

/// Translates IRC lines into activities.
///
/// The translator owns the pending multi-line replies, so feed every line
/// of a connection to the same instance. It is not synchronized: if it is
/// shared between tasks, calls must be serialized by the host.
pub struct Translator<S = Vec<Emission>> {
  config: Config,
  buffer: ReplyBuffer,
  clock: fn() -> DateTime<Utc>,
  sink: S,
}

impl Translator<Vec<Emission>> {
  /// Create a translator which collects emissions into a `Vec`.
  ///
  /// Retrieve them with [`Translator::take_emissions`].
  pub fn new(config: Config) -> Self {
    Self::with_sink(config, Vec::new())
  }

  /// Start building a translator for `server`.
  pub fn builder(server: impl ToString) -> TranslatorBuilder<Vec<Emission>> {
    TranslatorBuilder {
      config: Config::new(server),
      clock: Utc::now,
      sink: Vec::new(),
    }
  }

  /// Take everything emitted so far.
  pub fn take_emissions(&mut self) -> Vec<Emission> {
    std::mem::take(&mut self.sink)
  }
}

impl<S: Sink> Translator<S> {
  /// Create a translator which emits into `sink`.
  pub fn with_sink(config: Config, sink: S) -> Self {
    Self {
      config,
      buffer: ReplyBuffer::new(),
      clock: Utc::now,
      sink,
    }
  }

  /// Feed one line.
  ///
  /// Returns `false` if the line was rejected, see [`Translator::try_input`].
  /// Returns `true` otherwise, including when nothing was emitted yet.
  pub fn input(&mut self, line: &str) -> bool {
    self.try_input(line).is_ok()
  }

  /// Feed one line of raw bytes.
  ///
  /// Returns `false` if the bytes are not valid UTF-8, otherwise behaves
  /// like [`Translator::input`].
  pub fn input_bytes(&mut self, line: &[u8]) -> bool {
    match std::str::from_utf8(line) {
      Ok(line) => self.input(line),
      Err(e) => {
        debug!(error = %e, "unable to process line: not utf-8");
        false
      }
    }
  }

  /// Feed one line, reporting what became of it.
  ///
  /// Fails with [`InputError::TooShort`] if the trimmed line is shorter than
  /// three characters. A rejected line emits nothing and leaves pending
  /// replies untouched.
  pub fn try_input(&mut self, line: &str) -> Result<Outcome, InputError> {
    trace!(line, "input");
    let line = Line::parse(line).map_err(|e| {
      debug!(error = %e, "unable to process line");
      e
    })?;
    let now = (self.clock)();

    if line.is_ping() {
      return Ok(self.emit(Emission::Ping(now)));
    }

    trace!(
      command = ?line.command(),
      nick = ?Prefix::parse(line.source()).map(|prefix| prefix.nick),
      user = ?Prefix::parse(line.source()).and_then(|prefix| prefix.user),
      host = ?Prefix::parse(line.source()).and_then(|prefix| prefix.host),
      channel = ?line.channel(),
      pos1 = ?line.pos(1),
      pos2 = ?line.pos(2),
      pos3 = ?line.pos(3),
      content = ?line.content(),
      "dispatch"
    );

    let step = self.dispatch(&line, now);
    Ok(match step {
      Step::Emit(emission) => self.emit(emission),
      Step::Buffered => Outcome::Buffered,
      Step::Discarded => {
        trace!(command = ?line.command(), "discarded");
        Outcome::Discarded
      }
      Step::Unmatched => self.emit(Emission::Unprocessed(line.raw().to_string())),
    })
  }

  fn emit(&mut self, emission: Emission) -> Outcome {
    let channel = emission.channel();
    self.sink.emit(emission);
    Outcome::Emitted(channel)
  }

  fn dispatch(&mut self, line: &Line<'_>, now: DateTime<Utc>) -> Step {
    let ctx = Context {
      server: &self.config.server,
      now,
      pending_limit: self.config.pending_limit,
    };
    let buffer = &mut self.buffer;

    use rules::{errors, membership, message, motd, names, topic, who};
    use Command as C;
    let Some(command) = line.command() else {
      return Step::Unmatched;
    };
    match command {
      C::ErrChannelIsFull
      | C::ErrUnknownMode
      | C::ErrInviteOnlyChan
      | C::ErrBannedFromChan
      | C::ErrBadChannelKey
      | C::ErrBadChanMask
      | C::ErrNoChanModes
      | C::ErrBanListFull
      | C::ErrChanOPrivsNeeded => Step::Emit(Emission::Error(errors::channel(&ctx, line))),
      C::ErrErroneousNickname | C::ErrNicknameInUse | C::ErrUnavailResource => {
        Step::error(errors::nick(&ctx, line))
      }
      C::ErrNoSuchChannel => Step::error(errors::no_such_channel(&ctx, line)),

      C::Join => Step::incoming(membership::join(&ctx, line)),
      C::Part => Step::incoming(membership::part(&ctx, line)),
      C::Quit => Step::incoming(membership::quit(&ctx, line)),
      C::Nick => Step::incoming(membership::nick(&ctx, line)),
      C::Notice => Step::incoming(message::notice(&ctx, line)),
      C::Privmsg => Step::incoming(message::privmsg(&ctx, line)),
      C::Topic => Step::incoming(message::topic(&ctx, line)),
      C::Pong => Step::Emit(Emission::Pong(now)),

      C::RplMotd => motd::reply(&ctx, buffer, line),
      C::RplEndOfMotd => motd::end(buffer),
      C::RplNamReply => names::reply(&ctx, buffer, line),
      C::RplEndOfNames => names::end(buffer, line),
      C::RplWhoReply | C::RplWhoSpcRpl => who::reply(&ctx, buffer, line),
      C::RplEndOfWho => who::end(&ctx, buffer, line),
      C::RplTopic => topic::is(&ctx, buffer, line),
      C::RplTopicWhoTime => topic::set_by(&ctx, buffer, line),

      // a prefixed PING is not a liveness check
      C::Ping | C::Other(_) => Step::Unmatched,
    }
  }

  /// The configuration this translator was built with.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Number of multi-line replies waiting for their terminator.
  pub fn pending_len(&self) -> usize {
    self.buffer.len()
  }

  /// Which multi-line replies are waiting for their terminator.
  pub fn pending_keys(&self) -> impl Iterator<Item = &Key> + '_ {
    self.buffer.keys()
  }

  /// Drop every multi-line reply still waiting for its terminator.
  ///
  /// Useful after a reconnect, when those terminators will never arrive.
  pub fn discard_pending(&mut self) {
    if !self.buffer.is_empty() {
      debug!(count = self.buffer.len(), "discarding pending replies");
    }
    self.buffer.clear();
  }

  pub fn sink(&self) -> &S {
    &self.sink
  }

  pub fn sink_mut(&mut self) -> &mut S {
    &mut self.sink
  }

  pub fn into_sink(self) -> S {
    self.sink
  }
}

impl<S> std::fmt::Debug for Translator<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Translator")
      .field("config", &self.config)
      .field("pending", &self.buffer.len())
      .finish_non_exhaustive()
  }
}

/// Builder for a [`Translator`].
pub struct TranslatorBuilder<S> {
  config: Config,
  clock: fn() -> DateTime<Utc>,
  sink: S,
}

impl<S: Sink> TranslatorBuilder<S> {
  /// Bound the number of pending multi-line replies,
  /// see [`Config::pending_limit`].
  pub fn pending_limit(mut self, limit: usize) -> Self {
    self.config.pending_limit = Some(limit);
    self
  }

  /// Use `clock` to timestamp activities instead of [`Utc::now`].
  pub fn clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
    self.clock = clock;
    self
  }

  /// Emit into `sink`.
  pub fn sink<T: Sink>(self, sink: T) -> TranslatorBuilder<T> {
    TranslatorBuilder {
      config: self.config,
      clock: self.clock,
      sink,
    }
  }

  pub fn build(self) -> Translator<S> {
    Translator {
      config: self.config,
      buffer: ReplyBuffer::new(),
      clock: self.clock,
      sink: self.sink,
    }
  }
}

static_assert_send!(Translator);
static_assert_send!(Translator<crate::Callbacks>);
