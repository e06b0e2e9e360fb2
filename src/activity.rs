//! ## ActivityStreams-like events
//!
//! The entrypoint to this module is [`Activity`].
//!
//! With the `serde` feature enabled, activities serialize into the
//! JSON-LD flavored shape hosts expect: `@type` and `@id` keys,
//! `displayName`, and absent fields left out entirely.

use chrono::{DateTime, Utc};

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "lowercase")
)]
pub enum Verb {
  Send,
  Update,
  Join,
  Leave,
  Observe,
}

impl Verb {
  pub fn as_str(&self) -> &'static str {
    match self {
      Verb::Send => "send",
      Verb::Update => "update",
      Verb::Join => "join",
      Verb::Leave => "leave",
      Verb::Observe => "observe",
    }
  }
}

/// The `@type` of an actor, target or object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "lowercase")
)]
pub enum Kind {
  Person,
  Room,
  Service,
  Topic,
  Attendance,
  Message,
  /// A `/me` action.
  Me,
  Error,
  Address,
}

impl Kind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Kind::Person => "person",
      Kind::Room => "room",
      Kind::Service => "service",
      Kind::Topic => "topic",
      Kind::Attendance => "attendance",
      Kind::Message => "message",
      Kind::Me => "me",
      Kind::Error => "error",
      Kind::Address => "address",
    }
  }
}

/// Free text carried by an object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(untagged)
)]
pub enum Content {
  /// A single piece of text.
  Text(String),

  /// Lines accumulated from a multi-line reply, in arrival order.
  Lines(Vec<String>),
}

impl Content {
  /// The single text, if this is not a multi-line content.
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Content::Text(text) => Some(text),
      Content::Lines(_) => None,
    }
  }

  /// The accumulated lines, if this is a multi-line content.
  pub fn as_lines(&self) -> Option<&[String]> {
    match self {
      Content::Text(_) => None,
      Content::Lines(lines) => Some(lines),
    }
  }
}

/// When an activity happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(untagged)
)]
pub enum Published {
  /// Observed locally. Serialized as milliseconds since the epoch.
  At(
    #[cfg_attr(feature = "serde", serde(with = "chrono::serde::ts_milliseconds"))] DateTime<Utc>,
  ),

  /// Supplied by the server and forwarded untouched.
  ///
  /// `333` replies carry the topic's set time this way.
  Verbatim(String),
}

impl From<DateTime<Utc>> for Published {
  fn from(value: DateTime<Utc>) -> Self {
    Published::At(value)
  }
}

/// An actor, target or object of an [`Activity`].
///
/// Which fields are present depends on [`Object::kind`]:
/// people, rooms and services carry an `@id` URI, topics carry
/// a `topic`, attendance carries `members`, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "camelCase")
)]
pub struct Object {
  #[cfg_attr(
    feature = "serde",
    serde(rename = "@type", default, skip_serializing_if = "Option::is_none")
  )]
  kind: Option<Kind>,

  #[cfg_attr(
    feature = "serde",
    serde(rename = "@id", default, skip_serializing_if = "Option::is_none")
  )]
  id: Option<String>,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  display_name: Option<String>,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  content: Option<Content>,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  topic: Option<String>,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  members: Option<Vec<String>>,
}

generate_getters! {
  for Object as self {
    /// The `@type` of this object.
    kind -> Option<Kind>,

    /// `irc://` URI identifying a person, room or service.
    id -> Option<&str> = self.id.as_deref(),

    /// Human readable name.
    display_name -> Option<&str> = self.display_name.as_deref(),

    content -> Option<&Content> = self.content.as_ref(),

    /// Channel topic text.
    topic -> Option<&str> = self.topic.as_deref(),

    /// Member nicks, in arrival order.
    members -> Option<&[String]> = self.members.as_deref(),
  }
}

impl Object {
  /// An object of the given kind, with nothing else set.
  pub fn new(kind: Kind) -> Self {
    Object {
      kind: Some(kind),
      ..Default::default()
    }
  }

  /// `irc://<nick>@<server>`, displayed as `nick`.
  pub fn person(server: &str, nick: &str) -> Self {
    Object::new(Kind::Person)
      .with_id(format!("irc://{nick}@{server}"))
      .with_display_name(nick)
  }

  /// `irc://<server>/<channel>`, displayed as `channel`.
  pub fn room(server: &str, channel: &str) -> Self {
    Object::new(Kind::Room)
      .with_id(format!("irc://{server}/{channel}"))
      .with_display_name(channel)
  }

  /// `irc://<server>`.
  pub fn service(server: &str) -> Self {
    Object::new(Kind::Service).with_id(format!("irc://{server}"))
  }

  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
    self.display_name = Some(name.into());
    self
  }

  pub fn without_display_name(mut self) -> Self {
    self.display_name = None;
    self
  }

  pub fn with_content(mut self, content: impl Into<String>) -> Self {
    self.content = Some(Content::Text(content.into()));
    self
  }

  pub fn with_lines(mut self, lines: Vec<String>) -> Self {
    self.content = Some(Content::Lines(lines));
    self
  }

  pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
    self.topic = Some(topic.into());
    self
  }

  pub fn with_members(mut self, members: Vec<String>) -> Self {
    self.members = Some(members);
    self
  }

  /// Append to the accumulated lines, turning any single text into the first line.
  pub(crate) fn push_lines(&mut self, lines: impl IntoIterator<Item = String>) {
    let mut content = match self.content.take() {
      Some(Content::Lines(content)) => content,
      Some(Content::Text(text)) => vec![text],
      None => Vec::new(),
    };
    content.extend(lines);
    self.content = Some(Content::Lines(content));
  }

  pub(crate) fn push_members(&mut self, members: impl IntoIterator<Item = String>) {
    self.members.get_or_insert_with(Vec::new).extend(members);
  }
}

/// A translated IRC event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
  #[cfg_attr(feature = "serde", serde(rename = "@type"))]
  verb: Verb,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  actor: Option<Object>,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  target: Option<Object>,

  #[cfg_attr(feature = "serde", serde(default))]
  object: Object,

  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
  published: Option<Published>,
}

generate_getters! {
  for Activity as self {
    /// The `@type` of this activity.
    verb -> Verb,

    /// Who did it.
    actor -> Option<&Object> = self.actor.as_ref(),

    /// Who or what it was done to.
    target -> Option<&Object> = self.target.as_ref(),

    /// What was done.
    object -> &Object = &self.object,

    /// When it happened.
    published -> Option<&Published> = self.published.as_ref(),
  }
}

impl Activity {
  pub fn new(verb: Verb, object: Object) -> Self {
    Activity {
      verb,
      actor: None,
      target: None,
      object,
      published: None,
    }
  }

  pub fn with_actor(mut self, actor: Object) -> Self {
    self.actor = Some(actor);
    self
  }

  pub fn with_target(mut self, target: Object) -> Self {
    self.target = Some(target);
    self
  }

  pub fn with_published(mut self, published: impl Into<Published>) -> Self {
    self.published = Some(published.into());
    self
  }

  pub(crate) fn set_actor(&mut self, actor: Object) {
    self.actor = Some(actor);
  }

  pub(crate) fn set_published(&mut self, published: Published) {
    self.published = Some(published);
  }

  pub(crate) fn object_mut(&mut self) -> &mut Object {
    &mut self.object
  }
}

static_assert_send!(Activity);
static_assert_sync!(Activity);

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
  }

  #[test]
  fn identities() {
    let person = Object::person("irc.example.org", "alice");
    assert_eq!(person.kind(), Some(Kind::Person));
    assert_eq!(person.id(), Some("irc://alice@irc.example.org"));
    assert_eq!(person.display_name(), Some("alice"));

    let room = Object::room("irc.example.org", "#rust");
    assert_eq!(room.id(), Some("irc://irc.example.org/#rust"));
    assert_eq!(room.display_name(), Some("#rust"));

    let service = Object::service("irc.example.org");
    assert_eq!(service.id(), Some("irc://irc.example.org"));
    assert_eq!(service.display_name(), None);
  }

  #[test]
  fn push_lines_promotes_text() {
    let mut object = Object::new(Kind::Topic).with_content("first");
    object.push_lines(["second".to_string()]);
    assert_eq!(
      object.content().and_then(Content::as_lines),
      Some(&["first".to_string(), "second".to_string()][..])
    );
  }

  #[test]
  fn push_members_opens_list() {
    let mut object = Object::new(Kind::Attendance);
    object.push_members(["a".to_string()]);
    object.push_members(["b".to_string(), "c".to_string()]);
    assert_eq!(object.members().map(<[String]>::len), Some(3));
  }

  #[cfg(feature = "serde")]
  #[test]
  fn join_json_shape() {
    let activity = Activity::new(Verb::Join, Object::default())
      .with_actor(Object::person("irc.example.org", "alice"))
      .with_target(Object::room("irc.example.org", "#rust"))
      .with_published(at(1_700_000_000_000));

    let json = serde_json::to_string(&activity).unwrap();
    insta::assert_snapshot!(json, @r###"{"@type":"join","actor":{"@type":"person","@id":"irc://alice@irc.example.org","displayName":"alice"},"target":{"@type":"room","@id":"irc://irc.example.org/#rust","displayName":"#rust"},"object":{},"published":1700000000000}"###);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn motd_json_shape() {
    let activity = Activity::new(
      Verb::Update,
      Object::new(Kind::Topic).with_lines(vec!["- one".into(), "- two".into()]),
    )
    .with_actor(Object::service("irc.example.org").with_display_name("irc.example.org"));

    let json = serde_json::to_string(&activity).unwrap();
    insta::assert_snapshot!(json, @r###"{"@type":"update","actor":{"@type":"service","@id":"irc://irc.example.org","displayName":"irc.example.org"},"object":{"@type":"topic","content":["- one","- two"]}}"###);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn names_match_serialized_form() {
    for verb in [Verb::Send, Verb::Update, Verb::Join, Verb::Leave, Verb::Observe] {
      assert_eq!(serde_json::to_value(verb).unwrap(), verb.as_str());
    }
    for kind in [
      Kind::Person,
      Kind::Room,
      Kind::Service,
      Kind::Topic,
      Kind::Attendance,
      Kind::Message,
      Kind::Me,
      Kind::Error,
      Kind::Address,
    ] {
      assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
    }
  }

  #[cfg(feature = "serde")]
  #[test]
  fn published_deserializes_both_forms() {
    let millis: Published = serde_json::from_str("1700000000000").unwrap();
    assert_eq!(millis, Published::At(at(1_700_000_000_000)));

    let verbatim: Published = serde_json::from_str("\"1700000000\"").unwrap();
    assert_eq!(verbatim, Published::Verbatim("1700000000".into()));
  }

  #[cfg(feature = "serde")]
  #[test]
  fn deserialize_activity() {
    let json = r##"{"@type":"send","actor":{"@type":"person","@id":"irc://bob@s","displayName":"bob"},"target":{"displayName":"#c"},"object":{"@type":"me","content":"waves"},"published":5}"##;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.verb(), Verb::Send);
    assert_eq!(activity.object().kind(), Some(Kind::Me));
    assert_eq!(
      activity.object().content().and_then(Content::as_text),
      Some("waves")
    );
    assert_eq!(activity.target().and_then(Object::kind), None);
    assert_eq!(activity.published(), Some(&Published::At(at(5))));
  }
}
