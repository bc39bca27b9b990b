use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::auction::AuctionManager;
use crate::bid::BidRegistry;
use crate::errors::Error;
use crate::event::{self, AuctionOverridden, AuctionResolved};
use crate::gateway::GatewayClient;
use crate::prize::PrizeLedger;
use crate::types::{Auction, ResolutionKind};

/// Drives the confidential winner-selection protocol and the privileged
/// manual-override path.
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Resolves the current auction through the gateway's aggregate
    /// comparison. With zero bidders the auction still resolves, with no
    /// winner and no mint.
    ///
    /// Gateway failure surfaces as `ResolutionUnavailable` before any state
    /// is written; the auction stays unresolved and the call can be retried,
    /// or the operator can fall back to `resolve_with_winner`. Ties between
    /// equal sealed maxima go to the first-submitted bid (roster order),
    /// which the gateway interface requires of its implementations.
    pub fn resolve(env: &Env, operator: &Address) -> Result<Option<Address>, Error> {
        AuctionManager::require_operator(env, operator)?;

        let auction_id = AuctionManager::current_auction_id(env)?;
        let mut auction =
            AuctionManager::load_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.resolved {
            return Err(Error::AuctionAlreadyResolved);
        }

        // Early forced resolution is an operator policy choice, configured
        // at initialization. The permissive default mirrors operational
        // tooling that proceeds before the window closes.
        let now = env.ledger().timestamp();
        if AuctionManager::enforce_window(env) && now < auction.end_time {
            return Err(Error::AuctionInProgress);
        }

        let roster = BidRegistry::bidders(env, auction_id);
        if roster.is_empty() {
            Self::finalize(env, &mut auction, None, ResolutionKind::Confidential);
            return Ok(None);
        }

        let mut handles: Vec<BytesN<32>> = Vec::new(env);
        for bidder in roster.iter() {
            handles.push_back(BidRegistry::get_bid(env, auction_id, &bidder));
        }

        // Single aggregate comparison; individual plaintexts never cross
        // back over the trust boundary.
        let gateway = GatewayClient::new(env, &AuctionManager::gateway(env)?);
        let winner_index = match gateway.try_compare_and_reveal(&handles) {
            Ok(Ok(index)) => index,
            _ => return Err(Error::ResolutionUnavailable),
        };

        let winner = roster
            .get(winner_index)
            .ok_or(Error::ResolutionUnavailable)?;

        PrizeLedger::mint_to(env, auction.token_id, &winner)?;
        Self::finalize(
            env,
            &mut auction,
            Some(winner.clone()),
            ResolutionKind::Confidential,
        );

        Ok(Some(winner))
    }

    /// Privileged override bypassing the confidential comparison entirely.
    /// Exists for operational recovery when the gateway is unavailable; the
    /// distinct event lets audits separate overridden auctions from
    /// confidentially resolved ones.
    pub fn resolve_with_winner(
        env: &Env,
        operator: &Address,
        auction_id: u32,
        winner: &Address,
    ) -> Result<(), Error> {
        AuctionManager::require_operator(env, operator)?;

        let mut auction =
            AuctionManager::load_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.resolved {
            return Err(Error::AuctionAlreadyResolved);
        }

        PrizeLedger::mint_to(env, auction.token_id, winner)?;

        auction.resolved = true;
        auction.winner = Some(winner.clone());
        auction.resolution = ResolutionKind::Override;
        AuctionManager::save_auction(env, &auction);

        env.events().publish(
            (event::AUCTION, event::OVERRIDE),
            AuctionOverridden {
                auction_id,
                winner: winner.clone(),
                token_id: auction.token_id,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    fn finalize(env: &Env, auction: &mut Auction, winner: Option<Address>, kind: ResolutionKind) {
        auction.resolved = true;
        auction.winner = winner.clone();
        auction.resolution = kind;
        AuctionManager::save_auction(env, auction);

        env.events().publish(
            (event::AUCTION, event::RESOLVE),
            AuctionResolved {
                auction_id: auction.id,
                winner,
                token_id: auction.token_id,
                timestamp: env.ledger().timestamp(),
            },
        );
    }
}
