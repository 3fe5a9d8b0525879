#![cfg_attr(not(test), no_std)]

pub mod feed;
pub mod keys;

use feed::{Cluster, FeedKeys, FeedProvider};

pub type FeedId = [u8; 32];

pub const ACTIVE_PROVIDER: FeedProvider = FeedProvider::Chainlink;

pub const ACTIVE_CLUSTER: Cluster = Cluster::Devnet;

pub const ACTIVE_FEED_KEYS: FeedKeys = match ACTIVE_PROVIDER.feed_keys(ACTIVE_CLUSTER) {
    Some(k) => *k,
    None => panic!("active provider has no feed on active cluster"),
};

/// SOL/USD price account of [`ACTIVE_PROVIDER`]
pub const SOL_PRICE_FEED_ID_STR: &str = ACTIVE_FEED_KEYS.feed_str;
pub const SOL_PRICE_FEED_ID: FeedId = ACTIVE_FEED_KEYS.feed;

pub const CHAINLINK_PROGRAM_ID_STR: &str = keys::chainlink::ID_STR;
pub const CHAINLINK_PROGRAM_ID: FeedId = keys::chainlink::ID;
