#![no_std]
//! Minimal NFT marketplace: every token id is listed at one flat price and can be
//! bought exactly once. Payment is pulled from the buyer in the payment token.

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

mod types;

pub use types::*;

#[contract]
pub struct NftMarketplace;

#[contractimpl]
impl NftMarketplace {
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        price: i128,
    ) -> Result<(), MarketplaceError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(MarketplaceError::AlreadyInitialized);
        }
        admin.require_auth();
        if price <= 0 {
            return Err(MarketplaceError::InvalidPrice);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::Price, &price);

        env.events().publish((MARKET, INIT), (admin, payment_token, price));
        Ok(())
    }

    /// True until someone buys `token_id`.
    pub fn is_available(env: Env, token_id: u32) -> bool {
        !env.storage().persistent().has(&DataKey::Owner(token_id))
    }

    pub fn price_of(env: Env, _token_id: u32) -> Result<i128, MarketplaceError> {
        Self::price(env)
    }

    pub fn price(env: Env) -> Result<i128, MarketplaceError> {
        env.storage()
            .instance()
            .get(&DataKey::Price)
            .ok_or(MarketplaceError::NotInitialized)
    }

    /// Buy `token_id` for `buyer`, transferring the price from `buyer` to the
    /// marketplace.
    pub fn purchase(env: Env, buyer: Address, token_id: u32) -> Result<(), MarketplaceError> {
        buyer.require_auth();

        let key = DataKey::Owner(token_id);
        if env.storage().persistent().has(&key) {
            return Err(MarketplaceError::NotAvailable);
        }

        let price = Self::price(env.clone())?;
        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(MarketplaceError::NotInitialized)?;
        TokenClient::new(&env, &payment_token).transfer(
            &buyer,
            &env.current_contract_address(),
            &price,
        );

        env.storage().persistent().set(&key, &buyer);
        log!(&env, "token {} sold for {}", token_id, price);

        env.events().publish(
            (MARKET, PURCHASE),
            TokenPurchased {
                token_id,
                buyer,
                price,
            },
        );
        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner(token_id))
    }
}
