#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

pub(crate) const fn assert_sync<T: ?Sized + Sync>() {}
macro_rules! static_assert_sync {
  ($T:ty) => {
    const _: () = {
      let _ = $crate::assert_sync::<$T>;
    };
  };
}

pub(crate) const fn assert_send<T: ?Sized + Send>() {}
macro_rules! static_assert_send {
  ($T:ty) => {
    const _: () = {
      let _ = $crate::assert_send::<$T>;
    };
  };
}

#[macro_use]
mod macros;

pub mod activity;
pub use activity::{Activity, Content, Kind, Object, Published, Verb};

pub mod buffer;

pub mod config;
pub use config::Config;

pub mod error;
pub use error::InputError;

pub mod irc;
pub use irc::{Command, Line, Prefix};

mod rules;

pub mod sink;
pub use sink::{Callbacks, Channel, Emission, Sink};

#[cfg(feature = "tokio")]
pub use sink::{Channels, Subscriptions};

pub mod translate;
pub use translate::{Outcome, Translator, TranslatorBuilder};
