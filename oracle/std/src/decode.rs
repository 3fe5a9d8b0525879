use std::{error::Error, fmt::Display, str::FromStr};

use fluster_oracle_core::FeedId;
use solana_pubkey::{ParsePubkeyError, Pubkey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidAddressReason {
    /// Not base58
    Malformed,

    /// Empty, too long, or does not decode to exactly 32 bytes
    WrongSize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidAddressEncoding {
    pub reason: InvalidAddressReason,
}

impl Display for InvalidAddressEncoding {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self.reason {
            InvalidAddressReason::Malformed => "invalid address encoding: malformed base58",
            InvalidAddressReason::WrongSize => "invalid address encoding: wrong size",
        })
    }
}

impl Error for InvalidAddressEncoding {}

impl From<ParsePubkeyError> for InvalidAddressEncoding {
    #[inline]
    fn from(e: ParsePubkeyError) -> Self {
        let reason = match e {
            ParsePubkeyError::WrongSize => InvalidAddressReason::WrongSize,
            _ => InvalidAddressReason::Malformed,
        };
        Self { reason }
    }
}

/// Decodes a base58 address.
///
/// Never returns a partially filled or zeroed key: anything that is not
/// exactly 32 bytes of valid base58 is an error.
#[inline]
pub fn decode_feed_id(s: &str) -> Result<FeedId, InvalidAddressEncoding> {
    Ok(Pubkey::from_str(s)?.to_bytes())
}

#[inline]
pub fn encode_feed_id(id: &FeedId) -> String {
    Pubkey::new_from_array(*id).to_string()
}
