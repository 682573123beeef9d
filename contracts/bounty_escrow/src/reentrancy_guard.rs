//! Lock shared by every path that pays out of the pool.

use soroban_sdk::Env;

use crate::errors::EscrowError;
use crate::types::DataKey;

pub fn acquire(env: &Env) -> Result<(), EscrowError> {
    let storage = env.storage().instance();
    if storage.has(&DataKey::ReentrancyGuard) {
        return Err(EscrowError::Reentrancy);
    }
    storage.set(&DataKey::ReentrancyGuard, &true);
    Ok(())
}

pub fn release(env: &Env) {
    env.storage().instance().remove(&DataKey::ReentrancyGuard);
}

#[cfg(test)]
pub fn is_active(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::ReentrancyGuard)
}
