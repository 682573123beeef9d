//! Bounty records keyed by [`BountyId`], paired with an ordered sequence of
//! the ids currently stored so the set can be enumerated.
//!
//! Layout:
//! - `DataKey::Bounty(id)` holds the record (persistent storage)
//! - `DataKey::BountyIds` holds the id sequence (persistent storage)
//! - `DataKey::BountyPos(id)` holds the id's position in the sequence
//!
//! The position index keeps duplicate checks and removal O(1). Removal
//! swaps the last id into the freed slot, so order is not preserved once
//! anything has been removed.

use soroban_sdk::{Env, Vec};

use crate::errors::EscrowError;
use crate::types::{Bounty, BountyId, DataKey, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

pub fn keys(env: &Env) -> Vec<BountyId> {
    env.storage()
        .persistent()
        .get(&DataKey::BountyIds)
        .unwrap_or(Vec::new(env))
}

fn store_keys(env: &Env, ids: &Vec<BountyId>) {
    env.storage().persistent().set(&DataKey::BountyIds, ids);
    env.storage().persistent().extend_ttl(
        &DataKey::BountyIds,
        RECORD_TTL_THRESHOLD,
        RECORD_TTL_EXTEND,
    );
}

pub fn size(env: &Env) -> u32 {
    keys(env).len()
}

pub fn get(env: &Env, id: &BountyId) -> Option<Bounty> {
    env.storage().persistent().get(&DataKey::Bounty(id.clone()))
}

pub fn get_key_at(env: &Env, index: u32) -> Result<BountyId, EscrowError> {
    keys(env).get(index).ok_or(EscrowError::IndexOutOfRange)
}

pub fn contains(env: &Env, id: &BountyId) -> bool {
    env.storage().persistent().has(&DataKey::BountyPos(id.clone()))
}

/// Upserts the record. The id is appended to the sequence only on first insert.
pub fn set(env: &Env, id: &BountyId, bounty: &Bounty) {
    let value_key = DataKey::Bounty(id.clone());
    env.storage().persistent().set(&value_key, bounty);
    env.storage()
        .persistent()
        .extend_ttl(&value_key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

    let pos_key = DataKey::BountyPos(id.clone());
    if !env.storage().persistent().has(&pos_key) {
        let mut ids = keys(env);
        env.storage().persistent().set(&pos_key, &ids.len());
        ids.push_back(id.clone());
        store_keys(env, &ids);
    }
    env.storage()
        .persistent()
        .extend_ttl(&pos_key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

/// Deletes the record and swap-removes the id from the sequence.
///
/// The record is deleted even when the id is not in the sequence.
pub fn remove(env: &Env, id: &BountyId) {
    env.storage().persistent().remove(&DataKey::Bounty(id.clone()));

    let pos_key = DataKey::BountyPos(id.clone());
    let pos: Option<u32> = env.storage().persistent().get(&pos_key);
    let Some(pos) = pos else {
        return;
    };
    env.storage().persistent().remove(&pos_key);

    let mut ids = keys(env);
    let Some(last) = ids.len().checked_sub(1) else {
        return;
    };
    if pos != last {
        let moved = ids.get_unchecked(last);
        ids.set(pos, moved.clone());
        env.storage()
            .persistent()
            .set(&DataKey::BountyPos(moved), &pos);
    }
    ids.pop_back();
    store_keys(env, &ids);
}
