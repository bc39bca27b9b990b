use soroban_sdk::{contracttype, Address};

/// Keys used to store contract data in Soroban storage.
///
/// Configuration and counters live in instance storage; per-auction records
/// (auctions, bids, rosters, token ownership) live in persistent storage and
/// are retained forever for historical query.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Operator,              // Privileged account that starts and resolves auctions
    Gateway,               // Confidentiality service contract address
    FeeToken,              // Token used to pay the gateway fee on bid submission
    BidWindow,             // Bid window duration in seconds
    EnforceWindow,         // If true, resolution before end_time is rejected
    NextAuctionId,         // 0-based, bumped at each start
    NextTokenId,           // 1-based, bumped at each start
    Auction(u32),          // Auction record by auction id
    Bid(u32, Address),     // Ciphertext handle by (auction id, bidder)
    Bidders(u32),          // Append-ordered roster by auction id
    TokenOwner(u32),       // Prize token owner by token id
}

/// How a resolved auction got its winner, so audits can tell confidential
/// resolutions from manual overrides apart.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ResolutionKind {
    None,
    Confidential,
    Override,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub token_id: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub resolved: bool,
    pub winner: Option<Address>,
    pub bidder_count: u32,
    pub resolution: ResolutionKind,
}

/// Read-only snapshot of the current auction returned by `get_current_auction`.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CurrentAuction {
    pub auction_id: u32,
    pub token_id: u32,
    pub end_time: u64,
    pub time_remaining: u64,
    pub resolved: bool,
    pub bidder_count: u32,
}

impl Auction {
    pub fn is_open(&self, now: u64) -> bool {
        !self.resolved && now <= self.end_time
    }
}
