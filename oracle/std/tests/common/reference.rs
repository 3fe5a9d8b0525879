use solana_pubkey::Pubkey;

/// Decodes with the ledger client directly, bypassing the crate under test
pub fn reference_decode(s: &str) -> Option<[u8; 32]> {
    s.parse::<Pubkey>().ok().map(|pk| pk.to_bytes())
}

pub const SOURCE_FEED_LITERAL: &str = "99B2bTijsU6f1GCT73HmdR7HCFFjGMBcPZY6jZ96ynrR";

pub const SOURCE_PROGRAM_LITERAL: &str = "HEvSKofvBgfaexv23kMabbYqxasxU3mQ4ibBMEmJWHny";
