use thiserror::Error;

/// A line was rejected before translation.
///
/// Rejected input never touches pending replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InputError {
  /// The line is shorter than [`MIN_LINE_LEN`][crate::irc::MIN_LINE_LEN] after trimming.
  #[error("line too short: {len} characters after trimming")]
  TooShort { len: usize },

  /// The input bytes are not valid UTF-8.
  #[error("line is not valid utf-8")]
  NotUtf8,
}

impl From<std::str::Utf8Error> for InputError {
  fn from(_: std::str::Utf8Error) -> Self {
    Self::NotUtf8
  }
}
