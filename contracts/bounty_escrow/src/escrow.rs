use soroban_sdk::{
    contract, contractimpl, log, token, xdr::ToXdr, Address, Bytes, BytesN, Env, Vec,
};

use crate::errors::EscrowError;
use crate::events::{
    emit_bounty_submitted, emit_bounty_withdrawn, emit_report_approved, emit_report_submitted,
    BountySubmitted, BountyWithdrawn, ReportApproved, ReportSubmitted, EVENT_VERSION,
};
use crate::indexed_map;
use crate::reentrancy_guard;
use crate::types::{
    Bounty, BountyId, BountyStatus, BountyType, DataKey, Report, ID_DOMAIN_TAG, MAX_ID_ATTEMPTS,
    RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};

#[contract]
pub struct BountyEscrowContract;

#[contractimpl]
impl BountyEscrowContract {
    /// One-shot setup of the reward token. Not auth-gated: the first caller
    /// after deployment picks the token.
    pub fn initialize(env: Env, token: Address) -> Result<(), EscrowError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(EscrowError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::IdNonce, &0u64);

        log!(&env, "escrow initialized", token);
        Ok(())
    }

    /// Posts a bounty. No funds move here; the pool is funded separately
    /// through `deposit_reward`.
    pub fn submit_bounty(
        env: Env,
        submitter: Address,
        kind: BountyType,
        reward: i128,
        content_hash: BytesN<32>,
    ) -> Result<BountyId, EscrowError> {
        Self::require_initialized(&env)?;
        submitter.require_auth();

        if reward <= 0 {
            return Err(EscrowError::InvalidAmount);
        }

        let bounty_id = Self::mint_bounty_id(&env, &submitter)?;
        let bounty = Bounty {
            submitter: submitter.clone(),
            kind,
            reward,
            content_hash,
            status: BountyStatus::Open,
        };
        indexed_map::set(&env, &bounty_id, &bounty);

        emit_bounty_submitted(
            &env,
            BountySubmitted {
                version: EVENT_VERSION,
                bounty_id: bounty_id.clone(),
                submitter: submitter.clone(),
                kind,
                reward,
            },
        );
        log!(&env, "bounty submitted", bounty_id, submitter, reward);

        Ok(bounty_id)
    }

    /// Adds funds to the shared pool. Deposits are not earmarked per bounty.
    pub fn deposit_reward(env: Env, from: Address, amount: i128) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount == 0 {
            return Err(EscrowError::ZeroValue);
        }
        if amount < 0 {
            return Err(EscrowError::InvalidAmount);
        }

        let token = Self::token_client(&env)?;
        token.transfer(&from, &env.current_contract_address(), &amount);

        log!(&env, "reward deposited", from, amount);
        Ok(())
    }

    /// Accepts an unsolicited payment into the pool. Zero is a no-op.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount < 0 {
            return Err(EscrowError::InvalidAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let token = Self::token_client(&env)?;
        token.transfer(&from, &env.current_contract_address(), &amount);
        Ok(())
    }

    /// Attaches a report to a live bounty, replacing any earlier report.
    pub fn submit_report(
        env: Env,
        worker: Address,
        bounty_id: BountyId,
        content_hash: BytesN<32>,
    ) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        worker.require_auth();

        Self::load_live_bounty(&env, &bounty_id)?;

        let report = Report {
            worker: worker.clone(),
            content_hash,
            is_submitted: true,
        };
        let key = DataKey::Report(bounty_id.clone());
        env.storage().persistent().set(&key, &report);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        emit_report_submitted(
            &env,
            ReportSubmitted {
                version: EVENT_VERSION,
                bounty_id: bounty_id.clone(),
                worker: worker.clone(),
            },
        );
        log!(&env, "report submitted", bounty_id, worker);

        Ok(())
    }

    /// Pays the bounty's reward to the reporting worker and closes the bounty.
    ///
    /// Both records are deleted before the transfer runs.
    pub fn approve_report(env: Env, caller: Address, bounty_id: BountyId) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let bounty = Self::load_live_bounty(&env, &bounty_id)?;
        if caller != bounty.submitter {
            log!(&env, "approve rejected: not submitter", bounty_id, caller);
            return Err(EscrowError::Unauthorized);
        }
        let report = Self::load_report(&env, &bounty_id).ok_or(EscrowError::ReportMissing)?;

        let token = Self::token_client(&env)?;
        let contract = env.current_contract_address();
        if token.balance(&contract) < bounty.reward {
            log!(&env, "approve rejected: pool underfunded", bounty_id, bounty.reward);
            return Err(EscrowError::InsufficientFunds);
        }

        reentrancy_guard::acquire(&env)?;

        indexed_map::remove(&env, &bounty_id);
        env.storage()
            .persistent()
            .remove(&DataKey::Report(bounty_id.clone()));

        emit_report_approved(
            &env,
            ReportApproved {
                version: EVENT_VERSION,
                bounty_id: bounty_id.clone(),
                worker: report.worker.clone(),
                amount: bounty.reward,
            },
        );

        token.transfer(&contract, &report.worker, &bounty.reward);

        reentrancy_guard::release(&env);

        log!(&env, "report approved", bounty_id, report.worker, bounty.reward);
        Ok(())
    }

    /// Returns the reward of a bounty with no approved report to its submitter.
    ///
    /// The stored reward is zeroed and the bounty marked withdrawn before the
    /// transfer, so any call reaching this bounty afterwards sees `NotFound`.
    /// The record stays enumerable.
    pub fn withdraw_unapproved_bounty(
        env: Env,
        caller: Address,
        bounty_id: BountyId,
    ) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut bounty = Self::load_live_bounty(&env, &bounty_id)?;
        if caller != bounty.submitter {
            log!(&env, "withdraw rejected: not submitter", bounty_id, caller);
            return Err(EscrowError::Unauthorized);
        }

        let token = Self::token_client(&env)?;
        let contract = env.current_contract_address();
        let amount = bounty.reward;
        if token.balance(&contract) < amount {
            log!(&env, "withdraw rejected: pool underfunded", bounty_id, amount);
            return Err(EscrowError::InsufficientFunds);
        }

        reentrancy_guard::acquire(&env)?;

        bounty.reward = 0;
        bounty.status = BountyStatus::Withdrawn;
        indexed_map::set(&env, &bounty_id, &bounty);

        emit_bounty_withdrawn(
            &env,
            BountyWithdrawn {
                version: EVENT_VERSION,
                bounty_id: bounty_id.clone(),
                submitter: bounty.submitter.clone(),
                amount,
            },
        );

        token.transfer(&contract, &bounty.submitter, &amount);

        reentrancy_guard::release(&env);

        log!(&env, "bounty withdrawn", bounty_id, amount);
        Ok(())
    }

    /// True while the bounty is live: recorded, not approved, not withdrawn.
    pub fn bounty_exists(env: Env, bounty_id: BountyId) -> bool {
        indexed_map::get(&env, &bounty_id).map_or(false, |bounty| bounty.is_live())
    }

    pub fn report_exists(env: Env, bounty_id: BountyId) -> bool {
        Self::load_report(&env, &bounty_id).map_or(false, |report| report.is_submitted)
    }

    pub fn get(env: Env, bounty_id: BountyId) -> Result<Bounty, EscrowError> {
        indexed_map::get(&env, &bounty_id).ok_or(EscrowError::NotFound)
    }

    pub fn get_key_at(env: Env, index: u32) -> Result<BountyId, EscrowError> {
        indexed_map::get_key_at(&env, index)
    }

    pub fn size(env: Env) -> u32 {
        indexed_map::size(&env)
    }

    pub fn bounty_ids(env: Env) -> Vec<BountyId> {
        indexed_map::keys(&env)
    }

    pub fn get_report(env: Env, bounty_id: BountyId) -> Result<Report, EscrowError> {
        Self::load_report(&env, &bounty_id).ok_or(EscrowError::NotFound)
    }

    pub fn pool_balance(env: Env) -> Result<i128, EscrowError> {
        let token = Self::token_client(&env)?;
        Ok(token.balance(&env.current_contract_address()))
    }

    pub fn reward_token(env: Env) -> Result<Address, EscrowError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(EscrowError::NotInitialized)
    }

    fn require_initialized(env: &Env) -> Result<(), EscrowError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(EscrowError::NotInitialized);
        }
        Ok(())
    }

    fn token_client(env: &Env) -> Result<token::Client<'_>, EscrowError> {
        let token_address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(EscrowError::NotInitialized)?;
        Ok(token::Client::new(env, &token_address))
    }

    fn load_live_bounty(env: &Env, bounty_id: &BountyId) -> Result<Bounty, EscrowError> {
        match indexed_map::get(env, bounty_id) {
            Some(bounty) if bounty.is_live() => Ok(bounty),
            _ => {
                log!(env, "bounty not found", bounty_id.clone());
                Err(EscrowError::NotFound)
            }
        }
    }

    fn load_report(env: &Env, bounty_id: &BountyId) -> Option<Report> {
        env.storage()
            .persistent()
            .get(&DataKey::Report(bounty_id.clone()))
    }

    /// Derives a 16-byte id from a domain tag, a monotonic nonce, ledger
    /// time and sequence, host randomness, the submitter and the live count.
    /// An id already present in the index is never reused; generation retries
    /// with the next nonce and gives up after `MAX_ID_ATTEMPTS`.
    fn mint_bounty_id(env: &Env, submitter: &Address) -> Result<BountyId, EscrowError> {
        let submitter_xdr = submitter.clone().to_xdr(env);
        let live_count = indexed_map::size(env);
        let mut nonce: u64 = env
            .storage()
            .instance()
            .get(&DataKey::IdNonce)
            .unwrap_or(0u64);

        for _ in 0..MAX_ID_ATTEMPTS {
            nonce = nonce.wrapping_add(1);

            let mut preimage = Bytes::from_slice(env, ID_DOMAIN_TAG);
            preimage.extend_from_array(&nonce.to_be_bytes());
            preimage.extend_from_array(&env.ledger().timestamp().to_be_bytes());
            preimage.extend_from_array(&env.ledger().sequence().to_be_bytes());
            preimage.extend_from_array(&env.prng().gen::<u64>().to_be_bytes());
            preimage.append(&submitter_xdr);
            preimage.extend_from_array(&live_count.to_be_bytes());

            let digest = env.crypto().sha256(&preimage).to_array();
            let mut raw = [0u8; 16];
            raw.copy_from_slice(&digest[..16]);
            let bounty_id = BytesN::from_array(env, &raw);

            if !indexed_map::contains(env, &bounty_id) {
                env.storage().instance().set(&DataKey::IdNonce, &nonce);
                return Ok(bounty_id);
            }
        }

        log!(env, "bounty id generation exhausted", submitter.clone());
        Err(EscrowError::IdCollision)
    }
}
