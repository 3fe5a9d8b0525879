use std::{error::Error, fmt::Display};

use fluster_oracle_core::{
    feed::{Cluster, FeedProvider},
    ACTIVE_CLUSTER, ACTIVE_PROVIDER,
};
use serde::{Deserialize, Serialize};

pub const PROVIDER_ENV_VAR: &str = "FLUSTER_ORACLE_PROVIDER";

pub const CLUSTER_ENV_VAR: &str = "FLUSTER_ORACLE_CLUSTER";

/// Selects the single active feed.
///
/// Defaults to [`ACTIVE_PROVIDER`] on [`ACTIVE_CLUSTER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FeedConfig {
    pub provider: FeedProvider,
    pub cluster: Cluster,
}

impl Default for FeedConfig {
    #[inline]
    fn default() -> Self {
        Self {
            provider: ACTIVE_PROVIDER,
            cluster: ACTIVE_CLUSTER,
        }
    }
}

/// Only the `[oracle]` table is read, the rest of the file belongs to the host app
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    oracle: FeedConfig,
}

impl FeedConfig {
    /// ```toml
    /// [oracle]
    /// provider = "pyth"
    /// cluster = "mainnet"
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigErr> {
        toml::from_str::<ConfigFile>(s)
            .map(|f| f.oracle)
            .map_err(ConfigErr::Toml)
    }

    /// Defaults overridden by [`PROVIDER_ENV_VAR`] and [`CLUSTER_ENV_VAR`]
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::default().with_overrides(|k| std::env::var(k).ok())
    }

    /// Replaces each field whose variable `lookup` returns.
    /// Unset variables leave the field as is.
    pub fn with_overrides(
        self,
        mut lookup: impl FnMut(&str) -> Option<String>,
    ) -> Result<Self, ConfigErr> {
        let Self { provider, cluster } = self;
        let provider = match lookup(PROVIDER_ENV_VAR) {
            None => provider,
            Some(v) => v.parse().map_err(|_| ConfigErr::UnknownProvider(v))?,
        };
        let cluster = match lookup(CLUSTER_ENV_VAR) {
            None => cluster,
            Some(v) => v.parse().map_err(|_| ConfigErr::UnknownCluster(v))?,
        };
        Ok(Self { provider, cluster })
    }
}

#[derive(Clone, Debug)]
pub enum ConfigErr {
    Toml(toml::de::Error),
    UnknownProvider(String),
    UnknownCluster(String),
}

impl Display for ConfigErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml(e) => f.write_fmt(format_args!("oracle config: {e}")),
            Self::UnknownProvider(v) => f.write_fmt(format_args!("unknown oracle provider {v:?}")),
            Self::UnknownCluster(v) => f.write_fmt(format_args!("unknown cluster {v:?}")),
        }
    }
}

impl Error for ConfigErr {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Toml(e) => Some(e),
            _ => None,
        }
    }
}
