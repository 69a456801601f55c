//! Tracing setup.
//!
//! The subscriber is installed before the config file is read so config
//! loading is logged. The config's `log_filter` is swapped in afterwards,
//! unless `RUST_LOG` was set.

use crate::config::Config;
use std::io;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for replacing the active filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Reloadable filter layer. The handle is `None` when `from_env` is given,
/// because an explicit `RUST_LOG` takes precedence over the config.
pub fn filter_layer(
    from_env: Option<EnvFilter>,
) -> (reload::Layer<EnvFilter, Registry>, Option<FilterHandle>) {
    let env_given = from_env.is_some();
    let initial = from_env.unwrap_or_else(|| EnvFilter::new(Config::default().log_filter()));
    let (layer, handle) = reload::Layer::new(initial);
    (layer, (!env_given).then_some(handle))
}

/// Installs the global subscriber, writing to stderr so logs never
/// interleave with the board.
pub fn init_tracing() -> Option<FilterHandle> {
    let (filter, handle) = filter_layer(EnvFilter::try_from_default_env().ok());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    handle
}

/// Applies the config's filter if the handle allows it.
pub fn apply_config_filter(
    handle: Option<&FilterHandle>,
    config: &Config,
) -> Result<(), reload::Error> {
    match handle {
        Some(handle) => handle.reload(EnvFilter::new(config.log_filter())),
        None => Ok(()),
    }
}
