use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::DataKey;

/// Per-auction bid registry: ciphertext handles keyed by (auction id, bidder)
/// plus the append-ordered bidder roster.
///
/// The registry only ever stores opaque handles. Once the owning auction
/// resolves, its registry entries are never written again and stay queryable
/// for historical audit.
pub struct BidRegistry;

impl BidRegistry {
    /// Insert-or-overwrite the bidder's ciphertext handle. Returns `true` if
    /// this is the bidder's first bid in the auction, in which case the
    /// bidder was appended to the roster.
    pub fn record_bid(env: &Env, auction_id: u32, bidder: &Address, handle: &BytesN<32>) -> bool {
        let key = DataKey::Bid(auction_id, bidder.clone());
        let is_new = !env.storage().persistent().has(&key);

        env.storage().persistent().set(&key, handle);

        if is_new {
            let mut roster = Self::bidders(env, auction_id);
            roster.push_back(bidder.clone());
            env.storage()
                .persistent()
                .set(&DataKey::Bidders(auction_id), &roster);
        }

        is_new
    }

    pub fn has_bid(env: &Env, auction_id: u32, bidder: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Bid(auction_id, bidder.clone()))
    }

    /// The stored handle, or the all-zero handle if the bidder never bid.
    /// Deliberately infallible so that bid existence cannot be probed through
    /// error-vs-success behavior.
    pub fn get_bid(env: &Env, auction_id: u32, bidder: &Address) -> BytesN<32> {
        env.storage()
            .persistent()
            .get(&DataKey::Bid(auction_id, bidder.clone()))
            .unwrap_or_else(|| BytesN::from_array(env, &[0u8; 32]))
    }

    /// Roster in submission order. Insertion order is the only ordering
    /// guarantee; no bid-amount ordering is derivable from it.
    pub fn bidders(env: &Env, auction_id: u32) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Bidders(auction_id))
            .unwrap_or_else(|| Vec::new(env))
    }
}
