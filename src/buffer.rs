//! ## Pending multi-line replies
//!
//! Some replies arrive as a run of lines closed by a terminator:
//! `372`…`376`, `353`…`366`, `352`/`354`…`315`, and `332` followed by `333`.
//! [`ReplyBuffer`] holds the partially built [`Activity`] for each run
//! until its terminator arrives.
//!
//! Entries are created lazily by the first line of a run and removed
//! exactly once, by [`ReplyBuffer::flush`] or [`ReplyBuffer::discard`].
//! A run whose terminator never arrives stays buffered.

use crate::activity::Activity;
use std::collections::HashMap;

/// Identifies one pending reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
  /// Message of the day, `372` until `376`.
  Motd,

  /// Channel member list, `353` until `366`. One entry per channel.
  Names(String),

  /// `WHO` listing, `352`/`354` until `315`.
  Who,

  /// Current topic, `332` until `333`.
  Topic,
}

impl Key {
  pub fn names(channel: impl Into<String>) -> Self {
    Key::Names(channel.into())
  }
}

/// Partially built activities, keyed by the reply they belong to.
#[derive(Clone, Debug, Default)]
pub struct ReplyBuffer {
  pending: HashMap<Key, Activity>,
}

impl ReplyBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  /// The pending activity for `key`.
  pub fn get(&self, key: &Key) -> Option<&Activity> {
    self.pending.get(key)
  }

  pub fn contains(&self, key: &Key) -> bool {
    self.pending.contains_key(key)
  }

  /// Start (or restart) a pending activity for `key`.
  pub fn set(&mut self, key: Key, activity: Activity) {
    self.pending.insert(key, activity);
  }

  /// Append fragments to the pending activity for `key`.
  ///
  /// `Motd` fragments accumulate as content lines, `Names` and `Who`
  /// fragments as members. Returns `false` if nothing is pending for `key`.
  pub fn append<I>(&mut self, key: &Key, fragments: I) -> bool
  where
    I: IntoIterator<Item = String>,
  {
    let Some(activity) = self.pending.get_mut(key) else {
      return false;
    };
    let object = activity.object_mut();
    match key {
      Key::Motd => object.push_lines(fragments),
      Key::Names(_) | Key::Who => object.push_members(fragments),
      // a topic is a single line, there is nothing to accumulate
      Key::Topic => return false,
    }
    true
  }

  /// Remove and return the pending activity for `key`.
  pub fn flush(&mut self, key: &Key) -> Option<Activity> {
    self.pending.remove(key)
  }

  /// Drop the pending activity for `key` without emitting it.
  pub fn discard(&mut self, key: &Key) -> bool {
    self.pending.remove(key).is_some()
  }

  /// Drop every pending activity.
  pub fn clear(&mut self) {
    self.pending.clear();
  }

  pub fn len(&self) -> usize {
    self.pending.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pending.is_empty()
  }

  /// Keys of all pending replies, in no particular order.
  pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
    self.pending.keys()
  }
}

static_assert_send!(ReplyBuffer);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::activity::{Content, Kind, Object, Verb};

  fn attendance() -> Activity {
    Activity::new(Verb::Observe, Object::new(Kind::Attendance).with_members(vec![]))
  }

  #[test]
  fn append_requires_open_entry() {
    let mut buffer = ReplyBuffer::new();
    assert!(!buffer.append(&Key::Who, ["alice".to_string()]));
    assert!(buffer.is_empty());
  }

  #[test]
  fn names_are_per_channel() {
    let mut buffer = ReplyBuffer::new();
    buffer.set(Key::names("#a"), attendance());
    buffer.set(Key::names("#b"), attendance());
    buffer.append(&Key::names("#a"), ["x".to_string(), "y".to_string()]);
    buffer.append(&Key::names("#b"), ["z".to_string()]);

    let a = buffer.flush(&Key::names("#a")).unwrap();
    assert_eq!(a.object().members(), Some(&["x".to_string(), "y".to_string()][..]));
    assert!(buffer.contains(&Key::names("#b")));
    assert_eq!(buffer.len(), 1);
  }

  #[test]
  fn motd_accumulates_lines() {
    let mut buffer = ReplyBuffer::new();
    buffer.set(
      Key::Motd,
      Activity::new(Verb::Update, Object::new(Kind::Topic).with_lines(vec!["1".into()])),
    );
    buffer.append(&Key::Motd, ["2".to_string()]);
    let motd = buffer.flush(&Key::Motd).unwrap();
    assert_eq!(
      motd.object().content(),
      Some(&Content::Lines(vec!["1".into(), "2".into()]))
    );
  }

  #[test]
  fn flush_removes_once() {
    let mut buffer = ReplyBuffer::new();
    buffer.set(Key::Who, attendance());
    assert!(buffer.flush(&Key::Who).is_some());
    assert!(buffer.flush(&Key::Who).is_none());
  }

  #[test]
  fn discard_and_clear() {
    let mut buffer = ReplyBuffer::new();
    buffer.set(Key::Who, attendance());
    buffer.set(Key::Motd, attendance());
    assert!(buffer.discard(&Key::Who));
    assert!(!buffer.discard(&Key::Who));
    buffer.clear();
    assert!(buffer.is_empty());
  }

  #[test]
  fn topic_does_not_accumulate() {
    let mut buffer = ReplyBuffer::new();
    buffer.set(Key::Topic, Activity::new(Verb::Update, Object::new(Kind::Topic)));
    assert!(!buffer.append(&Key::Topic, ["x".to_string()]));
  }
}
