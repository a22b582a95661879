use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::types::SaleConfig;

pub fn sale_initialized(env: &Env, config: &SaleConfig) {
    env.events().publish(
        (symbol_short!("init"), config.operator.clone()),
        (
            config.sale_token.clone(),
            config.rate,
            config.soft_cap,
            config.hard_cap,
            config.start_time,
            config.end_time,
        ),
    );
}

pub fn purchase(env: &Env, participant: &Address, amount: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("purchase"), participant.clone()),
        (amount, tokens),
    );
}

pub fn tokens_claimed(env: &Env, participant: &Address, tokens: i128) {
    env.events()
        .publish((symbol_short!("claim"), participant.clone()), tokens);
}

pub fn refunded(env: &Env, participant: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"), participant.clone()), amount);
}

pub fn tokens_deposited(env: &Env, amount: i128, total_deposited: i128) {
    env.events()
        .publish((symbol_short!("deposit"),), (amount, total_deposited));
}

pub fn funds_withdrawn(env: &Env, operator: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), operator.clone()), amount);
}

pub fn unsold_withdrawn(env: &Env, operator: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("unsold"), operator.clone()), amount);
}

pub fn asset_rescued(env: &Env, asset: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("rescue"), asset.clone()), amount);
}

pub fn allow_list_toggled(env: &Env, enabled: bool) {
    env.events().publish((symbol_short!("al_toggle"),), enabled);
}

pub fn allow_list_added(env: &Env, identities: &Vec<Address>) {
    env.events()
        .publish((symbol_short!("al_add"),), identities.clone());
}
