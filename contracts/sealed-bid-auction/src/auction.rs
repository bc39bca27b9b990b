use soroban_sdk::{token, Address, BytesN, Env};

use crate::bid::BidRegistry;
use crate::errors::Error;
use crate::event::{self, AuctionStarted, BidSubmitted};
use crate::gateway::GatewayClient;
use crate::prize::PrizeLedger;
use crate::types::{Auction, CurrentAuction, DataKey, ResolutionKind};

/// Auction lifecycle state machine.
///
/// At most one auction is unresolved at a time; a new auction can only start
/// once the previous one is resolved. Auction ids are 0-based and strictly
/// increasing, one per start.
pub struct AuctionManager;

impl AuctionManager {
    pub fn init(
        env: &Env,
        operator: &Address,
        gateway: &Address,
        fee_token: &Address,
        bid_window_secs: u64,
        enforce_window: bool,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Operator) {
            return Err(Error::AlreadyInitialized);
        }

        operator.require_auth();

        env.storage().instance().set(&DataKey::Operator, operator);
        env.storage().instance().set(&DataKey::Gateway, gateway);
        env.storage().instance().set(&DataKey::FeeToken, fee_token);
        env.storage()
            .instance()
            .set(&DataKey::BidWindow, &bid_window_secs);
        env.storage()
            .instance()
            .set(&DataKey::EnforceWindow, &enforce_window);
        env.storage().instance().set(&DataKey::NextAuctionId, &0u32);

        Ok(())
    }

    pub fn operator(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Operator)
            .ok_or(Error::NotInitialized)
    }

    pub fn gateway(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Gateway)
            .ok_or(Error::NotInitialized)
    }

    /// Authenticates `caller` and checks it against the stored operator.
    /// Every privileged path (start, resolve, override) goes through here.
    pub fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != Self::operator(env)? {
            return Err(Error::NotOperator);
        }
        Ok(())
    }

    pub fn enforce_window(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::EnforceWindow)
            .unwrap_or(false)
    }

    /// Id of the most recently started auction. Fails before the first start.
    pub fn current_auction_id(env: &Env) -> Result<u32, Error> {
        let next: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextAuctionId)
            .ok_or(Error::NotInitialized)?;
        if next == 0 {
            return Err(Error::AuctionNotFound);
        }
        Ok(next - 1)
    }

    pub fn load_auction(env: &Env, auction_id: u32) -> Option<Auction> {
        env.storage().persistent().get(&DataKey::Auction(auction_id))
    }

    pub fn save_auction(env: &Env, auction: &Auction) {
        env.storage()
            .persistent()
            .set(&DataKey::Auction(auction.id), auction);
    }

    /// Opens a new auction: allocates the next auction id, reserves the next
    /// prize token id, and fixes the bid window.
    pub fn start_auction(env: &Env, operator: &Address) -> Result<u32, Error> {
        Self::require_operator(env, operator)?;

        let next: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextAuctionId)
            .ok_or(Error::NotInitialized)?;

        // The previous auction must be resolved before a new one opens.
        if next > 0 {
            let prev = Self::load_auction(env, next - 1).ok_or(Error::AuctionNotFound)?;
            if !prev.resolved {
                return Err(Error::AuctionInProgress);
            }
        }

        let bid_window: u64 = env
            .storage()
            .instance()
            .get(&DataKey::BidWindow)
            .ok_or(Error::NotInitialized)?;

        let now = env.ledger().timestamp();
        let token_id = PrizeLedger::reserve_next(env);

        let auction = Auction {
            id: next,
            token_id,
            start_time: now,
            end_time: now + bid_window,
            resolved: false,
            winner: None,
            bidder_count: 0,
            resolution: ResolutionKind::None,
        };

        Self::save_auction(env, &auction);
        env.storage()
            .instance()
            .set(&DataKey::NextAuctionId, &(next + 1));

        env.events().publish(
            (event::AUCTION, event::START),
            AuctionStarted {
                auction_id: auction.id,
                token_id,
                start_time: auction.start_time,
                end_time: auction.end_time,
            },
        );

        Ok(auction.id)
    }

    /// Accepts a ciphertext handle into the current auction's registry. The
    /// gateway fee is collected synchronously so unpaid bids never occupy
    /// registry slots.
    pub fn submit_bid(
        env: &Env,
        bidder: &Address,
        handle: &BytesN<32>,
        fee: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let auction_id = match Self::current_auction_id(env) {
            Ok(id) => id,
            // No auction has ever been started.
            Err(Error::AuctionNotFound) => return Err(Error::AuctionNotActive),
            Err(e) => return Err(e),
        };
        let mut auction = Self::load_auction(env, auction_id).ok_or(Error::AuctionNotActive)?;

        if !auction.is_open(env.ledger().timestamp()) {
            return Err(Error::AuctionNotActive);
        }

        let gateway_addr = Self::gateway(env)?;
        let required = GatewayClient::new(env, &gateway_addr).get_fee();
        if fee < required {
            return Err(Error::InsufficientFee);
        }

        // Pay the confidentiality service before touching the registry.
        let fee_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::FeeToken)
            .ok_or(Error::NotInitialized)?;
        token::Client::new(env, &fee_token).transfer(bidder, &gateway_addr, &fee);

        if BidRegistry::record_bid(env, auction_id, bidder, handle) {
            auction.bidder_count += 1;
            Self::save_auction(env, &auction);
        }

        env.events().publish(
            (event::AUCTION, event::BID),
            BidSubmitted {
                auction_id,
                bidder: bidder.clone(),
            },
        );

        Ok(())
    }

    pub fn current_snapshot(env: &Env) -> Result<CurrentAuction, Error> {
        let auction_id = Self::current_auction_id(env)?;
        let auction = Self::load_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;
        let now = env.ledger().timestamp();

        Ok(CurrentAuction {
            auction_id: auction.id,
            token_id: auction.token_id,
            end_time: auction.end_time,
            time_remaining: auction.end_time.saturating_sub(now),
            resolved: auction.resolved,
            bidder_count: auction.bidder_count,
        })
    }
}
