//! ## Translation rules
//!
//! One function per command (or per reply run), grouped by what they
//! describe. Immediate rules build an [`Activity`] from a single line.
//! Buffered rules open, extend or flush an entry in the [`ReplyBuffer`].

use crate::activity::{Activity, Object};
use crate::buffer::{Key, ReplyBuffer};
use crate::irc::Line;
use crate::sink::Emission;
use chrono::{DateTime, Utc};

pub(crate) mod errors;
pub(crate) mod membership;
pub(crate) mod message;
pub(crate) mod motd;
pub(crate) mod names;
pub(crate) mod topic;
pub(crate) mod who;

/// What a rule did with a line.
#[derive(Debug)]
pub(crate) enum Step {
  /// Emit this.
  Emit(Emission),
  /// Stored in, or appended to, a pending reply.
  Buffered,
  /// Deliberately dropped.
  Discarded,
  /// The line can't be translated and is passed through as-is.
  Unmatched,
}

impl Step {
  pub(crate) fn incoming(activity: Option<Activity>) -> Self {
    activity.map_or(Step::Unmatched, |activity| {
      Step::Emit(Emission::Incoming(activity))
    })
  }

  pub(crate) fn error(activity: Option<Activity>) -> Self {
    activity.map_or(Step::Unmatched, |activity| {
      Step::Emit(Emission::Error(activity))
    })
  }

  /// Emit a flushed reply, or do nothing if there was none.
  pub(crate) fn flushed(activity: Option<Activity>) -> Self {
    activity.map_or(Step::Discarded, |activity| {
      Step::Emit(Emission::Incoming(activity))
    })
  }
}

/// Everything a rule needs besides the line itself.
pub(crate) struct Context<'a> {
  pub(crate) server: &'a str,
  pub(crate) now: DateTime<Utc>,
  pub(crate) pending_limit: Option<usize>,
}

impl<'a> Context<'a> {
  pub(crate) fn person(&self, nick: &str) -> Object {
    Object::person(self.server, nick)
  }

  pub(crate) fn room(&self, channel: &str) -> Object {
    Object::room(self.server, channel)
  }

  pub(crate) fn service(&self) -> Object {
    Object::service(self.server)
  }

  /// Start a pending reply under `key`, unless the pending limit is reached.
  pub(crate) fn open(
    &self,
    buffer: &mut ReplyBuffer,
    key: Key,
    activity: impl FnOnce() -> Activity,
  ) -> Step {
    if let Some(limit) = self.pending_limit {
      if !buffer.contains(&key) && buffer.len() >= limit {
        debug!(?key, limit, "pending reply limit reached");
        return Step::Unmatched;
      }
    }
    buffer.set(key, activity());
    Step::Buffered
  }
}

/// The nick of whoever sent `line`.
pub(crate) fn sender<'src>(line: &Line<'src>) -> Option<&'src str> {
  crate::irc::prefix::nick(line.source())
}


#[cfg(test)]
mod tests {
  use super::test_util::*;
  use super::*;
  use crate::activity::{Kind, Verb};

  #[test]
  fn open_respects_limit() {
    let ctx = Context {
      pending_limit: Some(1),
      ..ctx()
    };
    let mut buffer = ReplyBuffer::new();
    let make = || Activity::new(Verb::Observe, Object::new(Kind::Attendance));

    assert!(matches!(ctx.open(&mut buffer, Key::Who, make), Step::Buffered));
    assert!(matches!(ctx.open(&mut buffer, Key::Motd, make), Step::Unmatched));
    // replacing an existing entry does not count against the limit
    assert!(matches!(ctx.open(&mut buffer, Key::Who, make), Step::Buffered));
    assert_eq!(buffer.len(), 1);
  }

  #[test]
  fn sender_nick() {
    assert_eq!(sender(&line(":alice!a@h JOIN #c")), Some("alice"));
    assert_eq!(sender(&line(":irc.example.org NOTICE * :hi")), Some("irc.example.org"));
  }
}
