#![allow(dead_code)]

use presale::{PresaleContract, PresaleContractClient, SaleConfig};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

// Payment amounts use 7 decimals, like the native asset
pub const UNIT: i128 = 10_000_000;
pub const RATE: i128 = 1_000;
pub const START: u64 = 1_000;
pub const END: u64 = 2_000;

pub struct PresaleOptions {
    pub sale_token: Option<Address>,
    pub payment_token: Option<Address>,
    pub max_buy: i128,
}

impl Default for PresaleOptions {
    fn default() -> Self {
        Self {
            sale_token: None,
            payment_token: None,
            max_buy: 2 * UNIT,
        }
    }
}

pub struct PresaleTest<'a> {
    pub env: &'a Env,
    pub client: PresaleContractClient<'a>,
    pub contract_id: Address,
    pub operator: Address,
    pub sale_token: token::Client<'a>,
    pub payment: token::Client<'a>,
    // Only set when the fixture created the asset itself
    pub payment_admin: Option<token::StellarAssetClient<'a>>,
}

impl<'a> PresaleTest<'a> {
    /// A fresh participant holding 100 units of the payment asset.
    pub fn participant(&self) -> Address {
        let user = Address::generate(self.env);
        if let Some(admin) = &self.payment_admin {
            admin.mint(&user, &(100 * UNIT));
        }
        user
    }

    pub fn open(&self) {
        set_time(self.env, START);
    }

    pub fn end(&self) {
        set_time(self.env, END + 1);
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

pub fn sale_config(
    operator: &Address,
    sale_token: &Address,
    payment_token: &Address,
    max_buy: i128,
) -> SaleConfig {
    SaleConfig {
        operator: operator.clone(),
        sale_token: sale_token.clone(),
        payment_token: payment_token.clone(),
        rate: RATE,
        soft_cap: 5 * UNIT,
        hard_cap: 10 * UNIT,
        min_buy: UNIT / 10,
        max_buy,
        start_time: START,
        end_time: END,
    }
}

pub fn setup_presale<'a>(env: &'a Env) -> PresaleTest<'a> {
    setup_presale_with(env, PresaleOptions::default())
}

pub fn setup_presale_with<'a>(env: &'a Env, options: PresaleOptions) -> PresaleTest<'a> {
    env.mock_all_auths();

    let operator = Address::generate(env);
    let asset_admin = Address::generate(env);

    let sale_token_id = match options.sale_token {
        Some(id) => id,
        None => {
            let id = env
                .register_stellar_asset_contract_v2(asset_admin.clone())
                .address();
            token::StellarAssetClient::new(env, &id).mint(&operator, &(1_000 * UNIT * RATE));
            id
        }
    };

    let (payment_token_id, payment_admin) = match options.payment_token {
        Some(id) => (id, None),
        None => {
            let id = env
                .register_stellar_asset_contract_v2(asset_admin.clone())
                .address();
            let admin = token::StellarAssetClient::new(env, &id);
            (id, Some(admin))
        }
    };

    let contract_id = env.register_contract(None, PresaleContract);
    let client = PresaleContractClient::new(env, &contract_id);

    client.initialize(&sale_config(
        &operator,
        &sale_token_id,
        &payment_token_id,
        options.max_buy,
    ));

    PresaleTest {
        env,
        client,
        contract_id,
        operator,
        sale_token: token::Client::new(env, &sale_token_id),
        payment: token::Client::new(env, &payment_token_id),
        payment_admin,
    }
}
