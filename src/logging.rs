//! Logging Setup
//!
//! Library code logs through the `log` facade. Hosts that want output call
//! [`init`] once; `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that also receives `log` records
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init(default_filter: &str) -> Result<bool, tracing_subscriber::filter::ParseError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug").unwrap();
        let second = init("debug").unwrap();
        assert!(!second);
        log::info!("[Logging] routed through the log facade");
    }
}
