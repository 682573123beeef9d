use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Bounty or report absent, or the bounty is already closed
    NotFound = 3,
    /// Caller is not the bounty's submitter
    Unauthorized = 4,
    /// Approval attempted before any report was submitted
    ReportMissing = 5,
    ZeroValue = 6,
    IndexOutOfRange = 7,
    /// Pooled balance cannot cover the transfer
    InsufficientFunds = 8,
    InvalidAmount = 9,
    IdCollision = 10,
    /// A payout path was entered while another was in flight
    Reentrancy = 11,
}
