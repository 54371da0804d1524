use std::error::Error;
use env_logger::{Builder, Env};

/// Install the logger of the binaries.  Messages go to stderr; the
/// level defaults to `info` and is overridden by `RUST_LOG`.
pub fn setup() -> Result<(), Box<dyn Error + Sync + Send>> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;
    Ok(())
}
