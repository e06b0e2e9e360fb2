//! Current channel topic, `332` followed immediately by `333`.

use super::{Context, Step};
use crate::activity::{Activity, Kind, Object, Published, Verb};
use crate::buffer::{Key, ReplyBuffer};
use crate::irc::{prefix, Line};

/// `:server 332 <client> #channel :topic text`
///
/// Replaces any topic still waiting for its `333`.
pub(crate) fn is(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let Some(channel) = line.channel() else {
    return Step::Unmatched;
  };
  ctx.open(buffer, Key::Topic, || {
    let object = Object::new(Kind::Topic);
    let object = match line.content() {
      Some(topic) => object.with_topic(topic),
      None => object,
    };
    Activity::new(Verb::Update, object).with_target(ctx.room(channel))
  })
}

/// `:server 333 <client> #channel <nick!user@host> <set at>`
///
/// The set time is forwarded as sent.
pub(crate) fn set_by(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let Some(mut activity) = buffer.flush(&Key::Topic) else {
    return Step::Discarded;
  };
  if let Some(nick) = line.pos(3).and_then(prefix::nick) {
    activity.set_actor(ctx.person(nick));
  }
  if let Some(set_at) = line.extra().first() {
    activity.set_published(Published::Verbatim(set_at.to_string()));
  }
  Step::flushed(Some(activity))
}

#[cfg(test)]
mod tests {
  use super::super::test_util::*;
  use super::*;
  use crate::sink::Emission;

  #[test]
  fn topic_with_author() {
    let mut buffer = ReplyBuffer::new();
    let step = is(
      &ctx(),
      &mut buffer,
      &line(":irc.example.org 332 me #rust :Rust programming"),
    );
    assert!(matches!(step, Step::Buffered));
    assert!(buffer.get(&Key::Topic).unwrap().actor().is_none());

    let step = set_by(
      &ctx(),
      &mut buffer,
      &line(":irc.example.org 333 me #rust alice!a@example.org 1699999999"),
    );
    let Emission::Incoming(activity) = emitted(step) else {
      panic!("topic is emitted as incoming");
    };
    assert_eq!(activity.verb(), Verb::Update);
    assert_eq!(activity.object().topic(), Some("Rust programming"));
    assert_eq!(
      activity.actor().and_then(Object::id),
      Some("irc://alice@irc.example.org")
    );
    assert_eq!(
      activity.target().and_then(Object::id),
      Some("irc://irc.example.org/#rust")
    );
    assert_eq!(
      activity.published(),
      Some(&Published::Verbatim("1699999999".into()))
    );
    assert!(buffer.is_empty());
  }

  #[test]
  fn set_by_without_topic() {
    let mut buffer = ReplyBuffer::new();
    let step = set_by(
      &ctx(),
      &mut buffer,
      &line(":irc.example.org 333 me #rust alice!a@example.org 1699999999"),
    );
    assert!(matches!(step, Step::Discarded));
  }

  #[test]
  fn newer_topic_replaces_pending() {
    let mut buffer = ReplyBuffer::new();
    is(&ctx(), &mut buffer, &line(":s 332 me #a :first"));
    is(&ctx(), &mut buffer, &line(":s 332 me #b :second"));
    assert_eq!(buffer.len(), 1);
    assert_eq!(
      buffer.get(&Key::Topic).unwrap().object().topic(),
      Some("second")
    );
  }
}
