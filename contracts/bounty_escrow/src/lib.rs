#![no_std]

mod errors;
mod escrow;
mod events;
mod indexed_map;
mod reentrancy_guard;
mod types;

pub use crate::errors::EscrowError;
pub use crate::escrow::{BountyEscrowContract, BountyEscrowContractClient};
pub use crate::types::{Bounty, BountyId, BountyStatus, BountyType, Report};
