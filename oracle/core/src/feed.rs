use core::{error::Error, fmt::Display, str::FromStr};

use crate::keys::{chainlink, pyth};

/// A feed account together with the program that owns it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedKeys {
    pub feed: [u8; 32],
    pub program: [u8; 32],
    pub feed_str: &'static str,
    pub program_str: &'static str,
}

pub const CHAINLINK_DEVNET_SOL_USD: FeedKeys = FeedKeys {
    feed: chainlink::devnet::SOL_USD_FEED_ID,
    program: chainlink::ID,
    feed_str: chainlink::devnet::SOL_USD_FEED_ID_STR,
    program_str: chainlink::ID_STR,
};

pub const PYTH_DEVNET_SOL_USD: FeedKeys = FeedKeys {
    feed: pyth::devnet::SOL_USD_FEED_ID,
    program: pyth::devnet::ID,
    feed_str: pyth::devnet::SOL_USD_FEED_ID_STR,
    program_str: pyth::devnet::ID_STR,
};

pub const PYTH_MAINNET_SOL_USD: FeedKeys = FeedKeys {
    feed: pyth::mainnet::SOL_USD_FEED_ID,
    program: pyth::mainnet::ID,
    feed_str: pyth::mainnet::SOL_USD_FEED_ID_STR,
    program_str: pyth::mainnet::ID_STR,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FeedProvider {
    Chainlink,
    Pyth,
}

impl FeedProvider {
    pub const ALL: [Self; 2] = [Self::Chainlink, Self::Pyth];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chainlink => "chainlink",
            Self::Pyth => "pyth",
        }
    }

    /// SOL/USD feed keys for this provider on `cluster`.
    ///
    /// Returns `None` if the provider has no known feed on that cluster.
    #[inline]
    pub const fn feed_keys(&self, cluster: Cluster) -> Option<&'static FeedKeys> {
        match (self, cluster) {
            (Self::Chainlink, Cluster::Devnet) => Some(&CHAINLINK_DEVNET_SOL_USD),
            (Self::Chainlink, Cluster::Mainnet) => None,
            (Self::Pyth, Cluster::Devnet) => Some(&PYTH_DEVNET_SOL_USD),
            (Self::Pyth, Cluster::Mainnet) => Some(&PYTH_MAINNET_SOL_USD),
        }
    }

    /// Identifies the provider from the owner of a feed account
    #[inline]
    pub const fn try_from_program_id(program_id: &[u8; 32]) -> Option<Self> {
        Some(match *program_id {
            chainlink::ID => Self::Chainlink,
            pyth::devnet::ID | pyth::mainnet::ID => Self::Pyth,
            _ => return None,
        })
    }
}

impl Display for FeedProvider {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownProviderErr;

impl Display for UnknownProviderErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown oracle provider")
    }
}

impl Error for UnknownProviderErr {}

impl FromStr for FeedProvider {
    type Err = UnknownProviderErr;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownProviderErr)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Cluster {
    Devnet,
    #[cfg_attr(feature = "serde", serde(alias = "mainnet-beta"))]
    Mainnet,
}

impl Cluster {
    pub const ALL: [Self; 2] = [Self::Devnet, Self::Mainnet];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Devnet => "devnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl Display for Cluster {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownClusterErr;

impl Display for UnknownClusterErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown cluster")
    }
}

impl Error for UnknownClusterErr {}

impl FromStr for Cluster {
    type Err = UnknownClusterErr;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mainnet-beta") {
            return Ok(Self::Mainnet);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownClusterErr)
    }
}
