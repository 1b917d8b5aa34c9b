use soroban_sdk::{Address, Env, String};

use crate::storage_types::*;

/// Current billing clock: the ledger sequence number.
pub fn current_tick(env: &Env) -> Tick {
    env.ledger().sequence() as Tick
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TokenAddress)
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn get_token_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenAddress)
        .ok_or(Error::NotInitialized)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn validate_period(period: Tick) -> Result<(), Error> {
    if period == 0 {
        return Err(Error::InvalidPeriod);
    }
    Ok(())
}

pub fn validate_price(price: i128) -> Result<(), Error> {
    if price < 0 {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

/// Name is required; description may be empty.
pub fn validate_metadata(name: &String, description: &String) -> Result<(), Error> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidMetadata);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidMetadata);
    }
    Ok(())
}
