//! Translate lines read from stdin, printing one JSON object per emission.
//!
//! ```text,ignore
//! $ cargo run --example stdin -- --server irc.libera.chat < session.log
//! ```

use anyhow::Result;
use clap::Parser;
use irc2as::{Activity, Emission, Translator};
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version)]
struct Args {
  /// Server identity used in `irc://` URIs
  #[arg(long)]
  server: String,

  /// Maximum number of multi-line replies buffered at once
  #[arg(long)]
  pending_limit: Option<usize>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let mut builder = Translator::builder(&args.server).sink(print);
  if let Some(limit) = args.pending_limit {
    builder = builder.pending_limit(limit);
  }
  let mut translator = builder.build();

  for line in std::io::stdin().lock().lines() {
    let line = line?;
    if !translator.input(&line) {
      tracing::debug!(%line, "skipped");
    }
  }

  if translator.pending_len() > 0 {
    tracing::warn!(
      pending = ?translator.pending_keys().collect::<Vec<_>>(),
      "input ended with unterminated replies"
    );
  }

  Ok(())
}

fn print(emission: Emission) {
  let channel = emission.channel();
  let payload = match emission {
    Emission::Ping(at) | Emission::Pong(at) => Ok(at.timestamp_millis().into()),
    Emission::Unprocessed(line) => Ok(line.into()),
    emission => activity(emission.into_activity()),
  };
  match payload {
    Ok(payload) => println!("{}", serde_json::json!({ "channel": channel.as_str(), "payload": payload })),
    Err(e) => tracing::error!(error = %e, %channel, "failed to serialize emission"),
  }
}

fn activity(activity: Option<Activity>) -> serde_json::Result<serde_json::Value> {
  let Some(activity) = activity else {
    return Ok(serde_json::Value::Null);
  };
  tracing::debug!(
    verb = activity.verb().as_str(),
    kind = activity.object().kind().map(|kind| kind.as_str()),
    "activity"
  );
  serde_json::to_value(activity)
}
