use std::fmt::Display;

/// An IRC command verb or numeric reply code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command<'src> {
  /// Server liveness check
  Ping,
  /// The peer's response to a [`Command::Ping`]
  Pong,
  /// A user joined a channel
  Join,
  /// A user left a channel
  Part,
  /// A user disconnected
  Quit,
  /// A user changed their nick
  Nick,
  /// General notices from the server
  Notice,
  /// A message to a channel or user
  Privmsg,
  /// A channel topic was changed
  Topic,
  // Numeric replies
  /// `315`
  RplEndOfWho,
  /// `332`
  RplTopic,
  /// `333`
  RplTopicWhoTime,
  /// `352`
  RplWhoReply,
  /// `353`
  RplNamReply,
  /// `354`
  RplWhoSpcRpl,
  /// `366`
  RplEndOfNames,
  /// `372`
  RplMotd,
  /// `376`
  RplEndOfMotd,
  // Numeric errors
  /// `403`
  ErrNoSuchChannel,
  /// `432`
  ErrErroneousNickname,
  /// `433`
  ErrNicknameInUse,
  /// `437`
  ErrUnavailResource,
  /// `471`
  ErrChannelIsFull,
  /// `472`
  ErrUnknownMode,
  /// `473`
  ErrInviteOnlyChan,
  /// `474`
  ErrBannedFromChan,
  /// `475`
  ErrBadChannelKey,
  /// `476`
  ErrBadChanMask,
  /// `477`
  ErrNoChanModes,
  /// `478`
  ErrBanListFull,
  /// `482`
  ErrChanOPrivsNeeded,
  /// Unknown command
  Other(&'src str),
}

impl<'src> Display for Command<'src> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl<'src> Command<'src> {
  /// Resolve a command token.
  ///
  /// Returns `None` if the token is empty.
  #[inline]
  pub fn parse(code: &'src str) -> Option<Self> {
    use Command as C;
    Some(match code {
      "PING" => C::Ping,
      "PONG" => C::Pong,
      "JOIN" => C::Join,
      "PART" => C::Part,
      "QUIT" => C::Quit,
      "NICK" => C::Nick,
      "NOTICE" => C::Notice,
      "PRIVMSG" => C::Privmsg,
      "TOPIC" => C::Topic,
      "315" => C::RplEndOfWho,
      "332" => C::RplTopic,
      "333" => C::RplTopicWhoTime,
      "352" => C::RplWhoReply,
      "353" => C::RplNamReply,
      "354" => C::RplWhoSpcRpl,
      "366" => C::RplEndOfNames,
      "372" => C::RplMotd,
      "376" => C::RplEndOfMotd,
      "403" => C::ErrNoSuchChannel,
      "432" => C::ErrErroneousNickname,
      "433" => C::ErrNicknameInUse,
      "437" => C::ErrUnavailResource,
      "471" => C::ErrChannelIsFull,
      "472" => C::ErrUnknownMode,
      "473" => C::ErrInviteOnlyChan,
      "474" => C::ErrBannedFromChan,
      "475" => C::ErrBadChannelKey,
      "476" => C::ErrBadChanMask,
      "477" => C::ErrNoChanModes,
      "478" => C::ErrBanListFull,
      "482" => C::ErrChanOPrivsNeeded,
      "" => return None,
      other => C::Other(other),
    })
  }

  /// Get the string value of the [`Command`].
  pub fn as_str(&self) -> &'src str {
    use Command::*;
    match self {
      Ping => "PING",
      Pong => "PONG",
      Join => "JOIN",
      Part => "PART",
      Quit => "QUIT",
      Nick => "NICK",
      Notice => "NOTICE",
      Privmsg => "PRIVMSG",
      Topic => "TOPIC",
      RplEndOfWho => "315",
      RplTopic => "332",
      RplTopicWhoTime => "333",
      RplWhoReply => "352",
      RplNamReply => "353",
      RplWhoSpcRpl => "354",
      RplEndOfNames => "366",
      RplMotd => "372",
      RplEndOfMotd => "376",
      ErrNoSuchChannel => "403",
      ErrErroneousNickname => "432",
      ErrNicknameInUse => "433",
      ErrUnavailResource => "437",
      ErrChannelIsFull => "471",
      ErrUnknownMode => "472",
      ErrInviteOnlyChan => "473",
      ErrBannedFromChan => "474",
      ErrBadChannelKey => "475",
      ErrBadChanMask => "476",
      ErrNoChanModes => "477",
      ErrBanListFull => "478",
      ErrChanOPrivsNeeded => "482",
      Other(cmd) => cmd,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn command() {
    assert_eq!(Command::parse("PING"), Some(Command::Ping));
    assert_eq!(Command::parse("353"), Some(Command::RplNamReply));
    assert_eq!(Command::parse("CAP"), Some(Command::Other("CAP")));
    assert_eq!(Command::parse(""), None);
  }

  #[test]
  fn numeric_as_str() {
    for code in ["315", "332", "333", "352", "353", "354", "366", "372", "376", "403", "482"] {
      assert_eq!(Command::parse(code).unwrap().as_str(), code);
    }
  }

  #[test]
  fn lowercase_is_unknown() {
    assert_eq!(Command::parse("privmsg"), Some(Command::Other("privmsg")));
  }
}
