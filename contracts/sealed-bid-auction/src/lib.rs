#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub mod auction;
pub mod bid;
pub mod errors;
pub mod event;
pub mod gateway;
pub mod prize;
pub mod resolution;
pub mod types;


use crate::auction::AuctionManager;
use crate::bid::BidRegistry;
use crate::errors::Error;
use crate::prize::PrizeLedger;
use crate::resolution::ResolutionEngine;
use crate::types::{Auction, CurrentAuction};

#[contract]
pub struct SealedBidAuctionContract;

#[contractimpl]
impl SealedBidAuctionContract {
    /// One-time setup: the operator account, the confidentiality gateway
    /// contract, the token the gateway fee is paid in, the bid window
    /// duration, and whether resolution before the window closes is rejected
    /// or merely permitted.
    pub fn initialize(
        env: Env,
        operator: Address,
        gateway: Address,
        fee_token: Address,
        bid_window_secs: u64,
        enforce_window: bool,
    ) -> Result<(), Error> {
        AuctionManager::init(
            &env,
            &operator,
            &gateway,
            &fee_token,
            bid_window_secs,
            enforce_window,
        )
    }

    /// Opens a new auction and reserves its prize token. Operator only; the
    /// previous auction must be resolved.
    pub fn start_auction(env: Env, operator: Address) -> Result<u32, Error> {
        AuctionManager::start_auction(&env, &operator)
    }

    /// Submits (or overwrites) the caller's sealed bid for the current
    /// auction. `fee` must cover the gateway fee and is collected in the
    /// configured token at submission time.
    pub fn submit_encrypted_bid(
        env: Env,
        bidder: Address,
        handle: BytesN<32>,
        fee: i128,
    ) -> Result<(), Error> {
        AuctionManager::submit_bid(&env, &bidder, &handle, fee)
    }

    /// Resolves the current auction through the gateway's confidential
    /// comparison. Operator only. Returns the winner, or `None` when the
    /// auction had no bids.
    pub fn resolve_auction(env: Env, operator: Address) -> Result<Option<Address>, Error> {
        ResolutionEngine::resolve(&env, &operator)
    }

    /// Manually assigns a winner, bypassing the confidential comparison.
    /// Operator-only recovery path for when the gateway is unreachable.
    pub fn resolve_auction_with_winner(
        env: Env,
        operator: Address,
        auction_id: u32,
        winner: Address,
    ) -> Result<(), Error> {
        ResolutionEngine::resolve_with_winner(&env, &operator, auction_id, &winner)
    }

    pub fn get_current_auction(env: Env) -> Result<CurrentAuction, Error> {
        AuctionManager::current_snapshot(&env)
    }

    pub fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        AuctionManager::load_auction(&env, auction_id)
    }

    /// Winner of a resolved auction. Fails while unresolved and for auctions
    /// that resolved without bids.
    pub fn get_auction_winner(env: Env, auction_id: u32) -> Result<Address, Error> {
        let auction = AuctionManager::load_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        if !auction.resolved {
            return Err(Error::WinnerNotSet);
        }
        auction.winner.ok_or(Error::WinnerNotSet)
    }

    /// Whether `bidder` has bid in the current auction.
    pub fn has_bid(env: Env, bidder: Address) -> bool {
        match AuctionManager::current_auction_id(&env) {
            Ok(id) => BidRegistry::has_bid(&env, id, &bidder),
            Err(_) => false,
        }
    }

    /// The bidder's ciphertext handle, or the all-zero handle if none.
    pub fn get_bid(env: Env, auction_id: u32, bidder: Address) -> BytesN<32> {
        BidRegistry::get_bid(&env, auction_id, &bidder)
    }

    /// Bidders of an auction in submission order.
    pub fn get_auction_bidders(env: Env, auction_id: u32) -> Vec<Address> {
        BidRegistry::bidders(&env, auction_id)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        PrizeLedger::owner_of(&env, token_id)
    }

    pub fn next_token_id(env: Env) -> u32 {
        PrizeLedger::next_token_id(&env)
    }

    pub fn current_auction_id(env: Env) -> Result<u32, Error> {
        AuctionManager::current_auction_id(&env)
    }

    pub fn get_operator(env: Env) -> Result<Address, Error> {
        AuctionManager::operator(&env)
    }
}
