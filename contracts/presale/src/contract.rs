use crate::errors::Error;
use crate::events;
use crate::settlement::*;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped presale with soft-cap refunds and deferred claims"
);

#[contract]
pub struct PresaleContract;

fn require_operator(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
    caller.require_auth();
    let config = get_config(env)?;
    if *caller != config.operator {
        return Err(Error::NotOperator);
    }
    Ok(config)
}

fn current_status(env: &Env, config: &SaleConfig) -> SaleStatus {
    sale_status(config, get_ledger_timestamp(env), get_total_raised(env))
}

fn validate_config(config: &SaleConfig) -> Result<(), Error> {
    let valid = config.rate > 0
        && config.hard_cap > 0
        && config.soft_cap >= 0
        && config.soft_cap <= config.hard_cap
        && config.min_buy > 0
        && config.min_buy <= config.max_buy
        && config.start_time < config.end_time;
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidConfig)
    }
}

#[contractimpl]
impl PresaleContract {
    /// Initialize the presale. The configuration is immutable afterwards.
    pub fn initialize(env: Env, config: SaleConfig) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        config.operator.require_auth();
        validate_config(&config)?;

        set_config(&env, &config);
        set_total_raised(&env, 0);
        set_total_sold(&env, 0);
        set_tokens_deposited(&env, 0);
        set_participant_count(&env, 0);
        set_allow_list_enabled(&env, false);

        events::sale_initialized(&env, &config);
        Ok(())
    }

    /// Contribute `amount` of the payment token during the open window.
    /// Returns the sale tokens granted by this call.
    pub fn contribute(env: Env, participant: Address, amount: i128) -> Result<i128, Error> {
        participant.require_auth();

        let config = get_config(&env)?;
        require_open(current_status(&env, &config))?;

        if is_allow_list_enabled(&env) && !is_allow_listed(&env, &participant) {
            return Err(Error::NotAllowListed);
        }

        if amount < config.min_buy || amount > config.max_buy {
            return Err(Error::AmountOutOfRange);
        }

        // Cumulative check on the post-increment total; no partial fills
        let mut record = get_participant(&env, &participant);
        let contributed = record
            .contributed
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if contributed > config.max_buy {
            return Err(Error::AllocationExceeded);
        }

        let total_raised = get_total_raised(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if total_raised > config.hard_cap {
            return Err(Error::HardCapExceeded);
        }

        let tokens = amount.checked_mul(config.rate).ok_or(Error::Overflow)?;
        let total_sold = get_total_sold(&env)
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;

        if !has_participant(&env, &participant) {
            set_participant_count(&env, get_participant_count(&env) + 1);
        }

        record.contributed = contributed;
        record.entitlement = record
            .entitlement
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;
        set_participant(&env, &participant, &record);
        set_total_raised(&env, total_raised);
        set_total_sold(&env, total_sold);

        // Pull payment into custody
        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&participant, &env.current_contract_address(), &amount);

        events::purchase(&env, &participant, amount, tokens);
        Ok(tokens)
    }

    /// Claim the full entitlement once the sale has succeeded.
    pub fn claim(env: Env, participant: Address) -> Result<i128, Error> {
        participant.require_auth();

        let config = get_config(&env)?;
        require_succeeded(current_status(&env, &config))?;

        let mut record = get_participant(&env, &participant);
        let tokens = record.entitlement;
        if tokens <= 0 {
            return Err(Error::NothingToClaim);
        }

        let sale_token = token::Client::new(&env, &config.sale_token);
        let custody = sale_token.balance(&env.current_contract_address());
        if custody < tokens {
            return Err(Error::InsufficientTokens);
        }

        // Zero before transfer so a callback observes nothing to claim
        record.entitlement = 0;
        set_participant(&env, &participant, &record);

        sale_token.transfer(&env.current_contract_address(), &participant, &tokens);

        events::tokens_claimed(&env, &participant, tokens);
        Ok(tokens)
    }

    /// Return the participant's contribution once the sale has failed.
    pub fn refund(env: Env, participant: Address) -> Result<i128, Error> {
        participant.require_auth();

        let config = get_config(&env)?;
        require_failed(current_status(&env, &config))?;

        let mut record = get_participant(&env, &participant);
        let amount = record.contributed;
        if amount <= 0 {
            return Err(Error::NothingToRefund);
        }

        record.contributed = 0;
        set_participant(&env, &participant, &record);

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&env.current_contract_address(), &participant, &amount);

        events::refunded(&env, &participant, amount);
        Ok(amount)
    }

    /// Pull sale tokens from the operator into custody.
    pub fn deposit_tokens(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let config = require_operator(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let sale_token = token::Client::new(&env, &config.sale_token);
        sale_token.transfer(&caller, &env.current_contract_address(), &amount);

        let deposited = get_tokens_deposited(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_tokens_deposited(&env, deposited);

        events::tokens_deposited(&env, amount, deposited);
        Ok(())
    }

    /// Send the whole payment-token balance to the operator. Repeat calls
    /// move nothing.
    pub fn withdraw_funds(env: Env, caller: Address) -> Result<i128, Error> {
        let config = require_operator(&env, &caller)?;
        require_succeeded(current_status(&env, &config))?;

        let payment = token::Client::new(&env, &config.payment_token);
        let balance = payment.balance(&env.current_contract_address());
        if balance > 0 {
            payment.transfer(&env.current_contract_address(), &config.operator, &balance);
        }

        events::funds_withdrawn(&env, &config.operator, balance);
        Ok(balance)
    }

    /// Recover sale tokens in excess of `total_sold`. One-shot: the latch is
    /// set even when there is nothing to recover.
    pub fn withdraw_unsold_tokens(env: Env, caller: Address) -> Result<i128, Error> {
        let config = require_operator(&env, &caller)?;
        require_ended(current_status(&env, &config))?;

        if is_unsold_withdrawn(&env) {
            return Err(Error::UnsoldAlreadyWithdrawn);
        }
        set_unsold_withdrawn(&env);

        let sale_token = token::Client::new(&env, &config.sale_token);
        let custody = sale_token.balance(&env.current_contract_address());
        let total_sold = get_total_sold(&env);

        let unsold = if custody > total_sold {
            custody - total_sold
        } else {
            log!(&env, "custody does not exceed total sold", custody, total_sold);
            0
        };

        if unsold > 0 {
            sale_token.transfer(&env.current_contract_address(), &config.operator, &unsold);
        }

        events::unsold_withdrawn(&env, &config.operator, unsold);
        Ok(unsold)
    }

    /// Send an asset other than the sale token to the operator.
    pub fn rescue_asset(env: Env, caller: Address, asset: Address, amount: i128) -> Result<(), Error> {
        let config = require_operator(&env, &caller)?;
        if asset == config.sale_token || asset == config.payment_token {
            return Err(Error::ProtectedAsset);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let client = token::Client::new(&env, &asset);
        client.transfer(&env.current_contract_address(), &config.operator, &amount);

        events::asset_rescued(&env, &asset, amount);
        Ok(())
    }

    pub fn set_allow_list_enabled(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        set_allow_list_enabled(&env, enabled);
        events::allow_list_toggled(&env, enabled);
        Ok(())
    }

    pub fn add_to_allow_list(env: Env, caller: Address, identities: Vec<Address>) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        for identity in identities.iter() {
            set_allow_listed(&env, &identity);
        }
        events::allow_list_added(&env, &identities);
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_status(env: Env) -> Result<SaleStatus, Error> {
        let config = get_config(&env)?;
        Ok(current_status(&env, &config))
    }

    pub fn get_participant(env: Env, user: Address) -> Participant {
        get_participant(&env, &user)
    }

    pub fn get_total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn get_total_sold(env: Env) -> i128 {
        get_total_sold(&env)
    }

    pub fn get_tokens_deposited(env: Env) -> i128 {
        get_tokens_deposited(&env)
    }

    pub fn get_participant_count(env: Env) -> u32 {
        get_participant_count(&env)
    }

    pub fn is_allow_list_enabled(env: Env) -> bool {
        is_allow_list_enabled(&env)
    }

    pub fn is_allow_listed(env: Env, user: Address) -> bool {
        is_allow_listed(&env, &user)
    }

    pub fn is_unsold_withdrawn(env: Env) -> bool {
        is_unsold_withdrawn(&env)
    }

    pub fn get_claimable_tokens(env: Env, user: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        if current_status(&env, &config) != SaleStatus::Succeeded {
            return Ok(0);
        }
        Ok(get_participant(&env, &user).entitlement)
    }

    pub fn get_refundable_amount(env: Env, user: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        if current_status(&env, &config) != SaleStatus::Failed {
            return Ok(0);
        }
        Ok(get_participant(&env, &user).contributed)
    }

    pub fn get_remaining_allocation(env: Env, user: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let contributed = get_participant(&env, &user).contributed;
        Ok((config.max_buy - contributed).max(0))
    }

    pub fn get_sale_info(env: Env) -> Result<SaleInfo, Error> {
        let config = get_config(&env)?;
        Ok(SaleInfo {
            rate: config.rate,
            start_time: config.start_time,
            end_time: config.end_time,
            soft_cap: config.soft_cap,
            hard_cap: config.hard_cap,
            total_raised: get_total_raised(&env),
            total_sold: get_total_sold(&env),
            tokens_deposited: get_tokens_deposited(&env),
            participant_count: get_participant_count(&env),
            status: current_status(&env, &config),
        })
    }
}
