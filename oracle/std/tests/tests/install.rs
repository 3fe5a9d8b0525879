use std::thread;

use fluster_oracle_std::{
    config::FeedConfig,
    err::RegistryErr,
    feed::{Cluster, FeedProvider},
    registry::{install, installed},
    CHAINLINK_PROGRAM_ID, SOL_PRICE_FEED_ID,
};

// only test in this binary that touches the process-wide registry
#[test]
fn install_once_then_shared() {
    assert!(installed().is_none());

    let unavailable = FeedConfig {
        provider: FeedProvider::Chainlink,
        cluster: Cluster::Mainnet,
    };
    assert!(matches!(
        install(&unavailable),
        Err(RegistryErr::Unavailable { .. })
    ));
    assert!(installed().is_none());

    let r = install(&FeedConfig::default()).unwrap();
    assert_eq!(*r.sol_price_feed_id(), SOL_PRICE_FEED_ID);

    let pyth = FeedConfig {
        provider: FeedProvider::Pyth,
        cluster: Cluster::Devnet,
    };
    assert_eq!(install(&pyth), Err(RegistryErr::AlreadyInstalled));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let r = installed().unwrap();
                (*r.sol_price_feed_id(), *r.program_id())
            })
        })
        .collect();
    handles.into_iter().for_each(|h| {
        assert_eq!(h.join().unwrap(), (SOL_PRICE_FEED_ID, CHAINLINK_PROGRAM_ID));
    });
}
