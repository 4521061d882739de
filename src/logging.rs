use {
  super::*,
  std::{fs::OpenOptions, sync::Mutex},
  tracing_subscriber::EnvFilter,
};

const DEFAULT_FILTER: &str = "rcs=info,tower_http=info";

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub(crate) fn init_file(path: &Path) -> Result {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))
}

pub(crate) fn init_stderr() -> Result {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(io::stderr)
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_subscriber_is_reported() {
    init_stderr().ok();

    assert!(init_stderr().is_err());
  }
}
