use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::DataKey;

/// Minimal mint/ownership primitive for prize tokens.
///
/// Token ids are sequential, 1-based, and never reused. One id is reserved at
/// every auction start; ownership is assigned at most once, at resolution. An
/// auction that resolves with no winner leaves its id permanently unminted.
pub struct PrizeLedger;

impl PrizeLedger {
    /// Next token id to be reserved. 1-based.
    pub fn next_token_id(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(1)
    }

    /// Reserves the next token id for a starting auction and bumps the
    /// counter. The token stays unminted until resolution.
    pub fn reserve_next(env: &Env) -> u32 {
        let token_id = Self::next_token_id(env);
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));
        token_id
    }

    pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotMinted)
    }

    /// Assigns ownership of a reserved token, exactly once. The double-mint
    /// guard is the integrity property protecting the prize: a second mint
    /// of the same id aborts the whole operation.
    pub fn mint_to(env: &Env, token_id: u32, owner: &Address) -> Result<(), Error> {
        let key = DataKey::TokenOwner(token_id);
        if env.storage().persistent().has(&key) {
            return Err(Error::AlreadyMinted);
        }
        env.storage().persistent().set(&key, owner);
        Ok(())
    }
}
