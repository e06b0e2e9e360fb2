//! `WHO` listings, `352`/`354` lines closed by `315`.

use super::{Context, Step};
use crate::activity::{Activity, Kind, Object, Verb};
use crate::buffer::{Key, ReplyBuffer};
use crate::irc::Line;

/// Servers fill missing fields with this.
const PLACEHOLDER: &str = "undefined";

/// Pick the nick out of a `352` or `354` reply.
///
/// The two formats put it at different offsets. When the fourth extra
/// parameter is at most two characters long it is the flags field
/// (`H`, `G*`, ...) and the nick sits right before it, otherwise the
/// fourth extra parameter is the nick itself.
fn nick<'src>(line: &Line<'src>) -> Option<&'src str> {
  let extra = line.extra();
  let flags_len = extra.get(3).map_or(0, |param| param.chars().count());
  let nick = if flags_len <= 2 {
    extra.get(2)
  } else {
    extra.get(3)
  };
  nick.copied().filter(|nick| *nick != PLACEHOLDER)
}

/// ```text,ignore
/// :server 352 <client> #channel <user> <host> <server> <nick> <flags> :<hops> <realname>
/// ```
pub(crate) fn reply(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let Some(nick) = nick(line) else {
    trace!("who reply without a usable nick");
    return Step::Discarded;
  };
  if buffer.contains(&Key::Who) {
    buffer.append(&Key::Who, [nick.to_string()]);
    return Step::Buffered;
  }

  ctx.open(buffer, Key::Who, || {
    Activity::new(
      Verb::Observe,
      Object::new(Kind::Attendance).with_members(vec![nick.to_string()]),
    )
    .with_published(ctx.now)
  })
}

/// `:server 315 <client> <mask> :End of /WHO list.`
///
/// The listing is attributed to the room when the mask is a channel,
/// otherwise to the person named by the mask.
pub(crate) fn end(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let Some(mut activity) = buffer.flush(&Key::Who) else {
    return Step::Discarded;
  };
  let actor = match line.channel() {
    Some(channel) => Some(ctx.room(channel)),
    None => line.pos(2).map(|mask| ctx.person(mask)),
  };
  if let Some(actor) = actor {
    activity.set_actor(actor);
  }
  Step::flushed(Some(activity))
}

#[cfg(test)]
mod tests {
  use super::super::test_util::*;
  use super::*;
  use crate::sink::Emission;

  const WHO_ALICE: &str =
    ":irc.example.org 352 me #rust ~alice host.example irc.example.org alice H :0 Alice";
  const WHOX_BOB: &str =
    ":irc.example.org 354 me 152 #rust ~bob host.example irc.example.org bob H@ :Bob";

  fn flush(buffer: &mut ReplyBuffer, data: &str) -> Activity {
    match emitted(end(&ctx(), buffer, &line(data))) {
      Emission::Incoming(activity) => activity,
      other => panic!("expected incoming, got {other:?}"),
    }
  }

  #[test]
  fn nick_position() {
    assert_eq!(nick(&line(WHO_ALICE)), Some("alice"));
    // the query token shifts everything by one
    assert_eq!(nick(&line(WHOX_BOB)), Some("bob"));
    // too few fields to hold flags
    assert_eq!(nick(&line(":s 354 me #c user host server carol :x")), Some("carol"));
  }

  #[test]
  fn placeholder_nick_is_skipped() {
    let mut buffer = ReplyBuffer::new();
    let step = reply(
      &ctx(),
      &mut buffer,
      &line(":s 352 me #c user host server undefined H :0 x"),
    );
    assert!(matches!(step, Step::Discarded));
    assert!(buffer.is_empty());
  }

  #[test]
  fn missing_nick_is_skipped() {
    let mut buffer = ReplyBuffer::new();
    let step = reply(&ctx(), &mut buffer, &line(":s 352 me #c user host"));
    assert!(matches!(step, Step::Discarded));
  }

  #[test]
  fn listing_for_channel() {
    let mut buffer = ReplyBuffer::new();
    reply(&ctx(), &mut buffer, &line(WHO_ALICE));
    reply(
      &ctx(),
      &mut buffer,
      &line(":irc.example.org 352 me #rust ~bob host.example irc.example.org bob G :0 Bob"),
    );

    let activity = flush(&mut buffer, ":irc.example.org 315 me #rust :End of /WHO list.");
    assert_eq!(activity.verb(), Verb::Observe);
    assert_eq!(
      activity.object().members(),
      Some(&["alice", "bob"].map(String::from)[..])
    );
    let actor = activity.actor().unwrap();
    assert_eq!(actor.kind(), Some(Kind::Room));
    assert_eq!(actor.id(), Some("irc://irc.example.org/#rust"));
  }

  #[test]
  fn listing_for_person() {
    let mut buffer = ReplyBuffer::new();
    reply(&ctx(), &mut buffer, &line(WHO_ALICE));

    let activity = flush(&mut buffer, ":irc.example.org 315 me alice :End of /WHO list.");
    let actor = activity.actor().unwrap();
    assert_eq!(actor.kind(), Some(Kind::Person));
    assert_eq!(actor.id(), Some("irc://alice@irc.example.org"));
    assert_eq!(actor.display_name(), Some("alice"));
  }

  #[test]
  fn end_without_listing() {
    let mut buffer = ReplyBuffer::new();
    let step = end(
      &ctx(),
      &mut buffer,
      &line(":irc.example.org 315 me #rust :End of /WHO list."),
    );
    assert!(matches!(step, Step::Discarded));
  }
}
