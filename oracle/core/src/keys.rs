macro_rules! id_str {
    ($ID_STR:ident, $ID:ident, $pkstr:expr) => {
        pub const $ID_STR: &str = $pkstr;
        pub const $ID: [u8; 32] = const_crypto::bs58::decode_pubkey($ID_STR);
    };
}
pub(crate) use id_str;

/// Chainlink OCR2 store program and the feeds it owns.
///
/// The store program is deployed at the same address on every cluster.
pub mod chainlink {
    use super::*;

    id_str!(ID_STR, ID, "HEvSKofvBgfaexv23kMabbYqxasxU3mQ4ibBMEmJWHny");

    pub mod devnet {
        use crate::keys::id_str;

        id_str!(
            SOL_USD_FEED_ID_STR,
            SOL_USD_FEED_ID,
            "99B2bTijsU6f1GCT73HmdR7HCFFjGMBcPZY6jZ96ynrR"
        );
    }
}

/// Pyth oracle programs and price accounts.
///
/// Unlike chainlink, pyth deploys a separate oracle program per cluster.
pub mod pyth {
    pub mod devnet {
        use crate::keys::id_str;

        id_str!(ID_STR, ID, "gSbePebfvPy7tRqimPoVecS2UsBvYv46ynrzWocc92s");
        id_str!(
            SOL_USD_FEED_ID_STR,
            SOL_USD_FEED_ID,
            "J83w4HKfqxwcq3BEMMkPFSppX3gqekLyLJBexebFVkix"
        );
    }

    pub mod mainnet {
        use crate::keys::id_str;

        id_str!(ID_STR, ID, "FsJ3A3u2vn5cTVofAjvy6y5kwABJAqYWpe4975bi2epH");
        id_str!(
            SOL_USD_FEED_ID_STR,
            SOL_USD_FEED_ID,
            "H6ARHf6YXhGYeQfUzQNGk6rDNnLBQKrenN712K4AQJEG"
        );
    }
}
