use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_total_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSold)
        .unwrap_or(0)
}

pub fn set_total_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSold, &amount);
}

pub fn get_tokens_deposited(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensDeposited)
        .unwrap_or(0)
}

pub fn set_tokens_deposited(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TokensDeposited, &amount);
}

pub fn get_participant_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ParticipantCount)
        .unwrap_or(0)
}

pub fn set_participant_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCount, &count);
}

pub fn is_allow_list_enabled(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::AllowListEnabled)
        .unwrap_or(false)
}

pub fn set_allow_list_enabled(env: &Env, enabled: bool) {
    env.storage()
        .instance()
        .set(&DataKey::AllowListEnabled, &enabled);
}

pub fn is_unsold_withdrawn(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::UnsoldWithdrawn)
        .unwrap_or(false)
}

pub fn set_unsold_withdrawn(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::UnsoldWithdrawn, &true);
}

pub fn has_participant(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Participant(user.clone()))
}

pub fn get_participant(env: &Env, user: &Address) -> Participant {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(user.clone()))
        .unwrap_or_default()
}

pub fn set_participant(env: &Env, user: &Address, participant: &Participant) {
    env.storage()
        .persistent()
        .set(&DataKey::Participant(user.clone()), participant);
}

pub fn is_allow_listed(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::AllowListed(user.clone()))
        .unwrap_or(false)
}

pub fn set_allow_listed(env: &Env, user: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::AllowListed(user.clone()), &true);
}
