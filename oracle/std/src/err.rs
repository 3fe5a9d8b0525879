use std::{error::Error, fmt::Display};

use fluster_oracle_core::{
    feed::{Cluster, FeedProvider},
    FeedId,
};

use crate::decode::{encode_feed_id, InvalidAddressEncoding};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistryErr {
    AlreadyInstalled,
    InvalidAddressEncoding {
        literal: &'static str,
        err: InvalidAddressEncoding,
    },
    /// Runtime decode of a literal disagrees with its compiled-in bytes
    KeyMismatch { literal: &'static str },
    Unavailable {
        provider: FeedProvider,
        cluster: Cluster,
    },
    WrongFeedAccount { expected: FeedId, actual: FeedId },
    WrongFeedOwner { expected: FeedId, actual: FeedId },
}

impl Display for RegistryErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled => f.write_str("feed registry already installed"),
            Self::InvalidAddressEncoding { literal, err } => {
                f.write_fmt(format_args!("{err}: {literal:?}"))
            }
            Self::KeyMismatch { literal } => {
                f.write_fmt(format_args!("decoded {literal} does not match compiled key"))
            }
            Self::Unavailable { provider, cluster } => {
                f.write_fmt(format_args!("no {provider} SOL/USD feed on {cluster}"))
            }
            Self::WrongFeedAccount { expected, actual } => f.write_fmt(format_args!(
                "wrong feed account. Expected: {} Got: {}",
                encode_feed_id(expected),
                encode_feed_id(actual)
            )),
            Self::WrongFeedOwner { expected, actual } => f.write_fmt(format_args!(
                "wrong feed owner. Expected: {} Got: {}",
                encode_feed_id(expected),
                encode_feed_id(actual)
            )),
        }
    }
}

impl Error for RegistryErr {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAddressEncoding { err, .. } => Some(err),
            _ => None,
        }
    }
}
