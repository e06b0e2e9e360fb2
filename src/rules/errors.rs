//! Numeric error replies, translated into `error` channel activities.

use super::Context;
use crate::activity::{Activity, Kind, Object, Verb};
use crate::irc::Line;

fn reason(content: Option<&str>) -> Object {
  let object = Object::new(Kind::Error);
  match content {
    Some(content) => object.with_content(content),
    None => object,
  }
}

/// `471`-`478`, `482`: the server refused something in a channel.
///
/// ```text,ignore
/// :server 474 <client> <channel> :Cannot join channel (+b)
/// ```
///
/// The refused name is taken as the room even when it isn't a `#` channel,
/// which is the usual case for `476`. Without any name the service is blamed.
pub(crate) fn channel(ctx: &Context<'_>, line: &Line<'_>) -> Activity {
  let actor = match line.channel().or_else(|| line.pos(2)) {
    Some(channel) => ctx.room(channel).without_display_name(),
    None => ctx.service(),
  };
  let activity = Activity::new(Verb::Send, reason(line.content())).with_actor(actor);
  match line.pos(1) {
    Some(client) => activity.with_target(ctx.person(client).without_display_name()),
    None => activity,
  }
}

/// `432`, `433`, `437`: the requested nick can't be used.
///
/// ```text,ignore
/// :server 433 <client> <nick> :Nickname is already in use
/// ```
pub(crate) fn nick(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = line.pos(2)?;
  Some(
    Activity::new(Verb::Update, reason(line.content()))
      .with_actor(ctx.service())
      .with_target(ctx.person(nick))
      .with_published(ctx.now),
  )
}

/// `403`: a join was attempted on a channel that doesn't exist.
pub(crate) fn no_such_channel(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let name = line.pos(2)?;
  Some(
    Activity::new(
      Verb::Join,
      Object::new(Kind::Error).with_content(format!("no such channel {name}")),
    )
    .with_actor(ctx.service())
    .with_target(ctx.person(name).without_display_name())
    .with_published(ctx.now),
  )
}
