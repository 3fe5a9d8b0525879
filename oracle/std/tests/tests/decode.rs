use fluster_oracle_std::{
    decode::{decode_feed_id, InvalidAddressEncoding, InvalidAddressReason},
    keys::pyth,
    CHAINLINK_PROGRAM_ID, SOL_PRICE_FEED_ID,
};
use proptest::prelude::*;

use crate::common::{reference_decode, SOURCE_FEED_LITERAL, SOURCE_PROGRAM_LITERAL};

#[test]
fn source_literals_decode_to_exports() {
    let feed = decode_feed_id(SOURCE_FEED_LITERAL).unwrap();
    let prog = decode_feed_id(SOURCE_PROGRAM_LITERAL).unwrap();

    assert_eq!(feed.len(), 32);
    assert_eq!(feed, SOL_PRICE_FEED_ID);
    assert_eq!(prog, CHAINLINK_PROGRAM_ID);
    assert_ne!(feed, prog);

    assert_eq!(reference_decode(SOURCE_FEED_LITERAL), Some(feed));
    assert_eq!(reference_decode(SOURCE_PROGRAM_LITERAL), Some(prog));
}

#[test]
fn empty_and_short_never_partial() {
    let s = pyth::devnet::ID_STR;
    ["", &s[..s.len() - 1], "1", "11111111111111111111111111111"]
        .into_iter()
        .for_each(|s| {
            assert_eq!(
                decode_feed_id(s),
                Err(InvalidAddressEncoding {
                    reason: InvalidAddressReason::WrongSize
                }),
                "{s:?}"
            );
        });
}

proptest! {
    #[test]
    fn agrees_with_ledger_client(s in "[1-9A-HJ-NP-Za-km-z0OIl]{0,46}") {
        prop_assert_eq!(decode_feed_id(&s).ok(), reference_decode(&s));
    }

    #[test]
    fn deterministic(s in "[1-9A-HJ-NP-Za-km-z]{40,44}") {
        prop_assert_eq!(decode_feed_id(&s), decode_feed_id(&s));
    }
}
