//! Who is where, and under which name.

use super::{sender, Context};
use crate::activity::{Activity, Kind, Object, Verb};
use crate::irc::Line;

/// `:nick!user@host JOIN #channel`
///
/// Some servers send the channel as free text, `JOIN :#channel`.
pub(crate) fn join(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = sender(line)?;
  let channel = line
    .channel()
    .or_else(|| line.content().filter(|content| content.starts_with('#')))?;
  Some(
    Activity::new(Verb::Join, Object::default())
      .with_actor(ctx.person(nick))
      .with_target(ctx.room(channel))
      .with_published(ctx.now),
  )
}

/// `:nick!user@host PART #channel :reason`
pub(crate) fn part(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = sender(line)?;
  let channel = line.channel()?;
  Some(
    Activity::new(
      Verb::Leave,
      Object::new(Kind::Message).with_content("user has left the channel"),
    )
    .with_actor(ctx.person(nick))
    .with_target(ctx.room(channel))
    .with_published(ctx.now),
  )
}

/// `:nick!user@host QUIT :reason`
pub(crate) fn quit(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = sender(line)?;
  Some(
    Activity::new(
      Verb::Leave,
      Object::new(Kind::Message).with_content("user has quit"),
    )
    .with_actor(ctx.person(nick))
    .with_target(ctx.service())
    .with_published(ctx.now),
  )
}

/// `:old!user@host NICK :new`
pub(crate) fn nick(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let old = sender(line)?;
  let new = line.content().or_else(|| line.pos(1))?;
  Some(
    Activity::new(Verb::Update, Object::new(Kind::Address))
      .with_actor(ctx.person(old))
      .with_target(ctx.person(new))
      .with_published(ctx.now),
  )
}
