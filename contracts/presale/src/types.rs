use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub operator: Address,      // Privileged identity for admin operations
    pub sale_token: Address,    // Token being sold
    pub payment_token: Address, // Native asset contract contributions are paid in
    pub rate: i128,             // Sale tokens per unit of payment token
    pub soft_cap: i128,         // Minimum raise for success
    pub hard_cap: i128,         // Maximum raise ever accepted
    pub min_buy: i128,          // Per-call lower bound
    pub max_buy: i128,          // Per-call and per-participant upper bound
    pub start_time: u64,
    pub end_time: u64,
}

/// Per-participant bookkeeping. `contributed` is zeroed by a refund and
/// `entitlement` by a claim; the two are never zeroed by the same call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Participant {
    pub contributed: i128,
    pub entitlement: i128,
}

/// Lifecycle of the sale, derived from the ledger clock and the amount
/// raised. Never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    NotStarted,
    Open,
    Failed,
    Succeeded,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleInfo {
    pub rate: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub total_raised: i128,
    pub total_sold: i128,
    pub tokens_deposited: i128,
    pub participant_count: u32,
    pub status: SaleStatus,
}

#[contracttype]
pub enum DataKey {
    Config,
    TotalRaised,
    TotalSold,
    TokensDeposited,
    ParticipantCount,
    AllowListEnabled,
    UnsoldWithdrawn,
    Participant(Address),
    AllowListed(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
