//! ## Output channels
//!
//! Every translated line ends up on at most one of five channels:
//!
//! - [`Channel::Incoming`]: regular activity
//! - [`Channel::Error`]: the server rejected something
//! - [`Channel::Ping`]: the server wants a `PONG` back
//! - [`Channel::Pong`]: a reply to our own `PING`
//! - [`Channel::Unprocessed`]: no rule matched, the raw line is passed through
//!
//! A [`Sink`] receives them as [`Emission`]s. Collect them into a
//! `Vec<Emission>`, handle them in a closure, route each channel to its own
//! closure with [`Callbacks`], or, with the `tokio` feature, forward them
//! to unbounded channels.

use crate::activity::Activity;
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// Names one of the five output channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
  Incoming,
  Error,
  Ping,
  Pong,
  Unprocessed,
}

impl Channel {
  pub fn as_str(&self) -> &'static str {
    match self {
      Channel::Incoming => "incoming",
      Channel::Error => "error",
      Channel::Ping => "ping",
      Channel::Pong => "pong",
      Channel::Unprocessed => "unprocessed",
    }
  }
}

impl Display for Channel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Something the translator emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission {
  Incoming(Activity),
  Error(Activity),
  /// The time the server's `PING` was seen.
  Ping(DateTime<Utc>),
  /// The time a `PONG` was seen.
  Pong(DateTime<Utc>),
  /// The trimmed line, exactly as received.
  Unprocessed(String),
}

impl Emission {
  /// The channel this emission belongs on.
  pub fn channel(&self) -> Channel {
    match self {
      Emission::Incoming(_) => Channel::Incoming,
      Emission::Error(_) => Channel::Error,
      Emission::Ping(_) => Channel::Ping,
      Emission::Pong(_) => Channel::Pong,
      Emission::Unprocessed(_) => Channel::Unprocessed,
    }
  }

  /// The activity, for `incoming` and `error` emissions.
  pub fn activity(&self) -> Option<&Activity> {
    match self {
      Emission::Incoming(activity) | Emission::Error(activity) => Some(activity),
      _ => None,
    }
  }

  pub fn into_activity(self) -> Option<Activity> {
    match self {
      Emission::Incoming(activity) | Emission::Error(activity) => Some(activity),
      _ => None,
    }
  }
}

/// Receives everything a translator emits.
pub trait Sink {
  fn emit(&mut self, emission: Emission);
}

impl Sink for Vec<Emission> {
  fn emit(&mut self, emission: Emission) {
    self.push(emission);
  }
}

impl<F> Sink for F
where
  F: FnMut(Emission),
{
  fn emit(&mut self, emission: Emission) {
    self(emission)
  }
}

type Handler<T> = Box<dyn FnMut(T) + Send>;

/// One optional handler per channel.
///
/// Emissions on channels without a handler are dropped.
///
/// ```rust
/// let sink = irc2as::Callbacks::new()
///   .on_incoming(|activity| println!("{activity:?}"))
///   .on_ping(|_| println!("PONG is due"));
/// let mut translator = irc2as::Translator::builder("irc.example.org").sink(sink).build();
/// translator.input("PING :irc.example.org");
/// ```
#[derive(Default)]
pub struct Callbacks {
  incoming: Option<Handler<Activity>>,
  error: Option<Handler<Activity>>,
  ping: Option<Handler<DateTime<Utc>>>,
  pong: Option<Handler<DateTime<Utc>>>,
  unprocessed: Option<Handler<String>>,
}

impl Callbacks {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn on_incoming(mut self, f: impl FnMut(Activity) + Send + 'static) -> Self {
    self.incoming = Some(Box::new(f));
    self
  }

  pub fn on_error(mut self, f: impl FnMut(Activity) + Send + 'static) -> Self {
    self.error = Some(Box::new(f));
    self
  }

  pub fn on_ping(mut self, f: impl FnMut(DateTime<Utc>) + Send + 'static) -> Self {
    self.ping = Some(Box::new(f));
    self
  }

  pub fn on_pong(mut self, f: impl FnMut(DateTime<Utc>) + Send + 'static) -> Self {
    self.pong = Some(Box::new(f));
    self
  }

  pub fn on_unprocessed(mut self, f: impl FnMut(String) + Send + 'static) -> Self {
    self.unprocessed = Some(Box::new(f));
    self
  }
}

impl Sink for Callbacks {
  fn emit(&mut self, emission: Emission) {
    match emission {
      Emission::Incoming(activity) => {
        if let Some(f) = &mut self.incoming {
          f(activity)
        }
      }
      Emission::Error(activity) => {
        if let Some(f) = &mut self.error {
          f(activity)
        }
      }
      Emission::Ping(at) => {
        if let Some(f) = &mut self.ping {
          f(at)
        }
      }
      Emission::Pong(at) => {
        if let Some(f) = &mut self.pong {
          f(at)
        }
      }
      Emission::Unprocessed(line) => {
        if let Some(f) = &mut self.unprocessed {
          f(line)
        }
      }
    }
  }
}

impl std::fmt::Debug for Callbacks {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Callbacks")
      .field("incoming", &self.incoming.is_some())
      .field("error", &self.error.is_some())
      .field("ping", &self.ping.is_some())
      .field("pong", &self.pong.is_some())
      .field("unprocessed", &self.unprocessed.is_some())
      .finish()
  }
}

static_assert_send!(Callbacks);

#[cfg(feature = "tokio")]
pub use self::channels::{Channels, Subscriptions};

#[cfg(feature = "tokio")]
mod channels {
  use super::{Emission, Sink};
  use crate::activity::Activity;
  use chrono::{DateTime, Utc};
  use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
  use tokio_stream::wrappers::UnboundedReceiverStream;

  /// Forwards every emission to a single channel.
  ///
  /// A closed receiver is not an error, emissions are dropped.
  impl Sink for UnboundedSender<Emission> {
    fn emit(&mut self, emission: Emission) {
      if self.send(emission).is_err() {
        trace!("emission dropped, receiver closed");
      }
    }
  }

  /// Forwards each channel to its own unbounded channel.
  ///
  /// Create it together with its receiving half using [`Channels::new`].
  #[derive(Clone, Debug)]
  pub struct Channels {
    incoming: UnboundedSender<Activity>,
    error: UnboundedSender<Activity>,
    ping: UnboundedSender<DateTime<Utc>>,
    pong: UnboundedSender<DateTime<Utc>>,
    unprocessed: UnboundedSender<String>,
  }

  /// The receiving half of [`Channels`], one stream per channel.
  #[derive(Debug)]
  pub struct Subscriptions {
    pub incoming: UnboundedReceiverStream<Activity>,
    pub error: UnboundedReceiverStream<Activity>,
    pub ping: UnboundedReceiverStream<DateTime<Utc>>,
    pub pong: UnboundedReceiverStream<DateTime<Utc>>,
    pub unprocessed: UnboundedReceiverStream<String>,
  }

  impl Channels {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Channels, Subscriptions) {
      let (incoming, incoming_rx) = unbounded_channel();
      let (error, error_rx) = unbounded_channel();
      let (ping, ping_rx) = unbounded_channel();
      let (pong, pong_rx) = unbounded_channel();
      let (unprocessed, unprocessed_rx) = unbounded_channel();
      (
        Channels {
          incoming,
          error,
          ping,
          pong,
          unprocessed,
        },
        Subscriptions {
          incoming: UnboundedReceiverStream::new(incoming_rx),
          error: UnboundedReceiverStream::new(error_rx),
          ping: UnboundedReceiverStream::new(ping_rx),
          pong: UnboundedReceiverStream::new(pong_rx),
          unprocessed: UnboundedReceiverStream::new(unprocessed_rx),
        },
      )
    }
  }

  impl Sink for Channels {
    fn emit(&mut self, emission: Emission) {
      let channel = emission.channel();
      let sent = match emission {
        Emission::Incoming(activity) => self.incoming.send(activity).is_ok(),
        Emission::Error(activity) => self.error.send(activity).is_ok(),
        Emission::Ping(at) => self.ping.send(at).is_ok(),
        Emission::Pong(at) => self.pong.send(at).is_ok(),
        Emission::Unprocessed(line) => self.unprocessed.send(line).is_ok(),
      };
      if !sent {
        trace!(%channel, "emission dropped, subscriber closed");
      }
    }
  }
}
