use fluster_oracle_std::{
    config::FeedConfig,
    decode::decode_feed_id,
    feed::{Cluster, FeedProvider},
    registry::FeedRegistry,
};

use crate::common::reference_decode;

#[test]
fn every_entry_matches_ledger_client() {
    let r = FeedRegistry::init(&FeedConfig::default()).unwrap();
    r.entries().iter().for_each(|e| {
        let k = &e.keys;
        assert_eq!(reference_decode(k.feed_str), Some(k.feed));
        assert_eq!(reference_decode(k.program_str), Some(k.program));
        assert_eq!(decode_feed_id(k.feed_str), Ok(k.feed));
        assert_eq!(
            FeedProvider::try_from_program_id(&k.program),
            Some(e.provider)
        );
    });
}

#[test]
fn exactly_one_active() {
    Cluster::ALL.into_iter().for_each(|cluster| {
        FeedProvider::ALL.into_iter().for_each(|provider| {
            let config = FeedConfig { provider, cluster };
            let Ok(r) = FeedRegistry::init(&config) else {
                assert!(provider.feed_keys(cluster).is_none());
                return;
            };
            let actives = r
                .entries()
                .iter()
                .filter(|e| e.keys == *r.active())
                .count();
            assert_eq!(actives, 1);
            assert_eq!(r.active_provider(), provider);
            assert_eq!(r.active_cluster(), cluster);
        });
    });
}

#[test]
fn toml_config_selects_pyth() {
    let config = FeedConfig::from_toml_str("[oracle]\nprovider = \"pyth\"\n").unwrap();
    let r = FeedRegistry::init(&config).unwrap();
    assert_eq!(r.active_provider(), FeedProvider::Pyth);
    assert_eq!(
        r.active().feed_str,
        "J83w4HKfqxwcq3BEMMkPFSppX3gqekLyLJBexebFVkix"
    );
}
