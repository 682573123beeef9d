use soroban_sdk::{contracttype, Address, BytesN};

/// 16-byte identifier minted by the contract for every bounty.
pub type BountyId = BytesN<16>;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Token,
    IdNonce,
    ReentrancyGuard,
    BountyIds,
    Bounty(BountyId),
    BountyPos(BountyId),
    Report(BountyId),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BountyType {
    ApiKey,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BountyStatus {
    Open,
    Withdrawn,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounty {
    pub submitter: Address,
    pub kind: BountyType,
    pub reward: i128,
    pub content_hash: BytesN<32>,
    pub status: BountyStatus,
}

impl Bounty {
    pub fn is_live(&self) -> bool {
        self.status == BountyStatus::Open && self.reward > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub worker: Address,
    pub content_hash: BytesN<32>,
    pub is_submitted: bool,
}

// Persistent record TTL, in ledgers (~30 days threshold, ~120 days extension)
pub const RECORD_TTL_THRESHOLD: u32 = 518_400;
pub const RECORD_TTL_EXTEND: u32 = 2_073_600;

/// Retries allowed when a freshly minted id is already taken.
pub const MAX_ID_ATTEMPTS: u32 = 8;

pub const ID_DOMAIN_TAG: &[u8; 12] = b"bounty-id-v1";
