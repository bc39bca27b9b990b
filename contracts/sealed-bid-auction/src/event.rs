use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing AUCTION events.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

// Symbol representing auction start events.
pub const START: Symbol = symbol_short!("START");

// Symbol representing bid submission events.
pub const BID: Symbol = symbol_short!("BID");

// Symbol representing confidential resolution events.
pub const RESOLVE: Symbol = symbol_short!("RESOLVE");

// Symbol representing manual override resolution events.
pub const OVERRIDE: Symbol = symbol_short!("OVERRIDE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStarted {
    pub auction_id: u32,
    pub token_id: u32,
    pub start_time: u64,
    pub end_time: u64,
}

/// Carries no amount. Bid magnitudes never appear in event payloads.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidSubmitted {
    pub auction_id: u32,
    pub bidder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionResolved {
    pub auction_id: u32,
    pub winner: Option<Address>,
    pub token_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionOverridden {
    pub auction_id: u32,
    pub winner: Address,
    pub token_id: u32,
    pub timestamp: u64,
}
