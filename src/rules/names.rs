//! Channel member lists, `353` lines closed by `366`, one list per channel.

use super::{Context, Step};
use crate::activity::{Activity, Kind, Object, Verb};
use crate::buffer::{Key, ReplyBuffer};
use crate::irc::Line;

fn members(content: Option<&str>) -> Vec<String> {
  content
    .unwrap_or_default()
    .split(' ')
    .filter(|name| !name.is_empty())
    .map(String::from)
    .collect()
}

/// `:server 353 <client> <symbol> #channel :nick1 @nick2 +nick3`
pub(crate) fn reply(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let Some(channel) = line.channel() else {
    return Step::Unmatched;
  };
  let key = Key::names(channel);
  let members = members(line.content());
  if buffer.contains(&key) {
    buffer.append(&key, members);
    return Step::Buffered;
  }

  ctx.open(buffer, key, || {
    Activity::new(
      Verb::Observe,
      Object::new(Kind::Attendance).with_members(members),
    )
    .with_actor(ctx.room(channel))
    .with_published(ctx.now)
  })
}

/// `:server 366 <client> #channel :End of /NAMES list.`
pub(crate) fn end(buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  match line.channel() {
    Some(channel) => Step::flushed(buffer.flush(&Key::names(channel))),
    None => Step::Discarded,
  }
}
