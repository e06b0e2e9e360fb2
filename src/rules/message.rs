//! Things people and servers say.

use super::{sender, Context};
use crate::activity::{Activity, Kind, Object, Verb};
use crate::irc::Line;

/// Unwrap a CTCP `ACTION` (`/me`) envelope, `+\x01ACTION <text>\x01`.
///
/// Only the `+` prefixed form is an action, a bare `\x01ACTION` stays a
/// regular message. A missing closing `\x01` is tolerated.
///
/// Returns the action text, or `None` if this is a regular message.
fn parse_action(text: &str) -> Option<&str> {
  let action = text.strip_prefix("+\u{0001}ACTION ")?.trim_start();
  Some(action.strip_suffix('\u{0001}').unwrap_or(action))
}

/// `:nick!user@host PRIVMSG <target> :text`
///
/// The target is only named, as it may be a channel or a user.
pub(crate) fn privmsg(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = sender(line)?;
  let content = line.content()?;
  let object = match parse_action(content) {
    Some(action) => Object::new(Kind::Me).with_content(action),
    None => Object::new(Kind::Message).with_content(content),
  };

  let mut target = Object::default();
  if let Some(name) = line.pos(1) {
    target = target.with_display_name(name);
  }

  Some(
    Activity::new(Verb::Send, object)
      .with_actor(ctx.person(nick))
      .with_target(target)
      .with_published(ctx.now),
  )
}

/// `:server NOTICE <nick> :text`
pub(crate) fn notice(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = line.pos(1)?;
  let object = Object::new(Kind::Error);
  let object = match line.content() {
    Some(content) => object.with_content(content),
    None => object,
  };
  Some(
    Activity::new(Verb::Update, object)
      .with_actor(ctx.service())
      .with_target(ctx.person(nick))
      .with_published(ctx.now),
  )
}

/// `:nick!user@host TOPIC #channel :new topic`
pub(crate) fn topic(ctx: &Context<'_>, line: &Line<'_>) -> Option<Activity> {
  let nick = sender(line)?;
  let channel = line.channel()?;
  let object = Object::new(Kind::Topic);
  let object = match line.content() {
    Some(topic) => object.with_topic(topic),
    None => object,
  };
  Some(
    Activity::new(Verb::Update, object)
      .with_actor(ctx.person(nick))
      .with_target(ctx.room(channel))
      .with_published(ctx.now),
  )
}
