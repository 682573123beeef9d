use soroban_sdk::{contractevent, Address, Env};

use crate::types::{BountyId, BountyType};

pub const EVENT_VERSION: u32 = 1;

#[contractevent(topics = ["b_submit"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountySubmitted {
    #[topic]
    pub bounty_id: BountyId,
    pub version: u32,
    pub submitter: Address,
    pub kind: BountyType,
    pub reward: i128,
}

pub fn emit_bounty_submitted(env: &Env, event: BountySubmitted) {
    event.publish(env);
}

#[contractevent(topics = ["r_submit"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSubmitted {
    #[topic]
    pub bounty_id: BountyId,
    pub version: u32,
    pub worker: Address,
}

pub fn emit_report_submitted(env: &Env, event: ReportSubmitted) {
    event.publish(env);
}

#[contractevent(topics = ["r_approve"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportApproved {
    #[topic]
    pub bounty_id: BountyId,
    pub version: u32,
    pub worker: Address,
    pub amount: i128,
}

pub fn emit_report_approved(env: &Env, event: ReportApproved) {
    event.publish(env);
}

#[contractevent(topics = ["b_withdr"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountyWithdrawn {
    #[topic]
    pub bounty_id: BountyId,
    pub version: u32,
    pub submitter: Address,
    pub amount: i128,
}

pub fn emit_bounty_withdrawn(env: &Env, event: BountyWithdrawn) {
    event.publish(env);
}
