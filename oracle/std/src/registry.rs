use std::sync::OnceLock;

use fluster_oracle_core::{
    feed::{Cluster, FeedKeys, FeedProvider},
    FeedId,
};
use tracing::{debug, info, warn};

use crate::{config::FeedConfig, decode::decode_feed_id, err::RegistryErr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedEntry {
    pub provider: FeedProvider,
    pub cluster: Cluster,
    pub keys: FeedKeys,
}

/// Every known feed, each verified at construction, plus the single active one.
///
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedRegistry {
    entries: Vec<FeedEntry>,

    /// index into `entries`
    active: usize,
}

impl FeedRegistry {
    /// Decodes every feed known to [`FeedProvider::feed_keys`] and selects
    /// the one named by `config`.
    pub fn init(config: &FeedConfig) -> Result<Self, RegistryErr> {
        Self::init_from(
            FeedProvider::ALL.into_iter().flat_map(|provider| {
                Cluster::ALL.into_iter().filter_map(move |cluster| {
                    provider
                        .feed_keys(cluster)
                        .map(|keys| (provider, cluster, keys))
                })
            }),
            config,
        )
    }

    pub(crate) fn init_from<'a>(
        table: impl IntoIterator<Item = (FeedProvider, Cluster, &'a FeedKeys)>,
        config: &FeedConfig,
    ) -> Result<Self, RegistryErr> {
        let entries = table
            .into_iter()
            .map(|(provider, cluster, keys)| verified_entry(provider, cluster, keys))
            .collect::<Result<Vec<_>, _>>()?;

        let FeedConfig { provider, cluster } = *config;
        let active = entries
            .iter()
            .position(|e| e.provider == provider && e.cluster == cluster)
            .ok_or(RegistryErr::Unavailable { provider, cluster })?;

        let keys = &entries[active].keys;
        info!(
            %provider,
            %cluster,
            feed = keys.feed_str,
            program = keys.program_str,
            "active SOL/USD price feed"
        );

        Ok(Self { entries, active })
    }
}

fn verified_entry(
    provider: FeedProvider,
    cluster: Cluster,
    keys: &FeedKeys,
) -> Result<FeedEntry, RegistryErr> {
    verify_literal(keys.feed_str, &keys.feed)?;
    verify_literal(keys.program_str, &keys.program)?;
    debug!(%provider, %cluster, feed = keys.feed_str, "verified feed keys");
    Ok(FeedEntry {
        provider,
        cluster,
        keys: *keys,
    })
}

fn verify_literal(literal: &'static str, compiled: &FeedId) -> Result<(), RegistryErr> {
    let decoded = decode_feed_id(literal)
        .map_err(|err| RegistryErr::InvalidAddressEncoding { literal, err })?;
    if decoded != *compiled {
        return Err(RegistryErr::KeyMismatch { literal });
    }
    Ok(())
}

/// Accessors
impl FeedRegistry {
    #[inline]
    pub fn active_entry(&self) -> &FeedEntry {
        &self.entries[self.active]
    }

    #[inline]
    pub fn active(&self) -> &FeedKeys {
        &self.active_entry().keys
    }

    #[inline]
    pub fn active_provider(&self) -> FeedProvider {
        self.active_entry().provider
    }

    #[inline]
    pub fn active_cluster(&self) -> Cluster {
        self.active_entry().cluster
    }

    #[inline]
    pub fn sol_price_feed_id(&self) -> &FeedId {
        &self.active().feed
    }

    /// Owner of [`Self::sol_price_feed_id`]
    #[inline]
    pub fn program_id(&self) -> &FeedId {
        &self.active().program
    }

    #[inline]
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, provider: FeedProvider, cluster: Cluster) -> Option<&FeedKeys> {
        self.entries
            .iter()
            .find(|e| e.provider == provider && e.cluster == cluster)
            .map(|e| &e.keys)
    }

    #[inline]
    pub fn provider_of_program(&self, program_id: &FeedId) -> Option<FeedProvider> {
        FeedProvider::try_from_program_id(program_id)
    }

    /// Checks a fetched account against the active feed.
    pub fn verify_feed_account(&self, key: &FeedId, owner: &FeedId) -> Result<(), RegistryErr> {
        let FeedKeys {
            feed,
            program,
            feed_str,
            program_str,
        } = self.active();
        if key != feed {
            warn!(expected = feed_str, "wrong feed account");
            return Err(RegistryErr::WrongFeedAccount {
                expected: *feed,
                actual: *key,
            });
        }
        if owner != program {
            warn!(expected = program_str, "wrong feed owner");
            return Err(RegistryErr::WrongFeedOwner {
                expected: *program,
                actual: *owner,
            });
        }
        Ok(())
    }
}

static INSTALLED: OnceLock<FeedRegistry> = OnceLock::new();

/// Builds the process-wide registry. Call once at startup, before any reader.
///
/// Errors with [`RegistryErr::AlreadyInstalled`] on every call after the first
/// successful one, leaving the installed registry untouched.
pub fn install(config: &FeedConfig) -> Result<&'static FeedRegistry, RegistryErr> {
    if INSTALLED.get().is_some() {
        return Err(RegistryErr::AlreadyInstalled);
    }
    let registry = FeedRegistry::init(config)?;

    let mut won = false;
    let installed = INSTALLED.get_or_init(|| {
        won = true;
        registry
    });
    if !won {
        return Err(RegistryErr::AlreadyInstalled);
    }
    info!("feed registry installed");
    Ok(installed)
}

#[inline]
pub fn installed() -> Option<&'static FeedRegistry> {
    INSTALLED.get()
}
