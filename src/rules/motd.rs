//! Message of the day, `372` lines closed by `376`.

use super::{Context, Step};
use crate::activity::{Activity, Kind, Object, Verb};
use crate::buffer::{Key, ReplyBuffer};
use crate::irc::Line;

/// `:server 372 <client> :- line`
pub(crate) fn reply(ctx: &Context<'_>, buffer: &mut ReplyBuffer, line: &Line<'_>) -> Step {
  let text = line.content().unwrap_or_default().to_string();
  if buffer.contains(&Key::Motd) {
    buffer.append(&Key::Motd, [text]);
    return Step::Buffered;
  }

  ctx.open(buffer, Key::Motd, || {
    Activity::new(Verb::Update, Object::new(Kind::Topic).with_lines(vec![text]))
      .with_actor(ctx.service().with_display_name(ctx.server))
      .with_published(ctx.now)
  })
}

/// `:server 376 <client> :End of /MOTD command.`
pub(crate) fn end(buffer: &mut ReplyBuffer) -> Step {
  Step::flushed(buffer.flush(&Key::Motd))
}
