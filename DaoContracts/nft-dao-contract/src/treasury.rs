use crate::{
    admin::DaoAdmin,
    events::{TreasuryMoved, DEPOSIT, TREASURY, WITHDRAW},
    types::Error,
};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log,
    token::TokenClient,
    vec, Address, Env, IntoVal, Symbol,
};

/// TreasuryManager keeps the DAO's funds as its balance of the native token.
/// Anything sent to the contract address counts as treasury.
pub struct TreasuryManager;

impl TreasuryManager {
    fn token(env: &Env) -> Result<TokenClient, Error> {
        let config = DaoAdmin::config(env)?;
        Ok(TokenClient::new(env, &config.native_token))
    }

    pub fn balance(env: &Env) -> Result<i128, Error> {
        Ok(Self::token(env)?.balance(&env.current_contract_address()))
    }

    /// Pull `amount` from `from` into the treasury. `from` must have authorized the
    /// enclosing invocation.
    pub fn credit(env: &Env, from: &Address, amount: i128) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token = Self::token(env)?;
        let treasury = env.current_contract_address();
        token.transfer(from, &treasury, &amount);

        let balance = token.balance(&treasury);
        env.events().publish(
            (TREASURY, DEPOSIT),
            TreasuryMoved {
                account: from.clone(),
                amount,
                balance,
            },
        );

        Ok(balance)
    }

    /// Send the whole balance to the owner.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `caller` - The address requesting the withdrawal
    ///
    /// # Returns
    /// * `Result<i128, Error>` - The amount withdrawn
    pub fn withdraw_all(env: &Env, caller: &Address) -> Result<i128, Error> {
        let owner = DaoAdmin::owner(env)?;
        if *caller != owner {
            return Err(Error::Unauthorized);
        }

        let token = Self::token(env)?;
        let treasury = env.current_contract_address();
        let amount = token.balance(&treasury);
        if amount == 0 {
            return Err(Error::EmptyTreasury);
        }

        token.transfer(&treasury, &owner, &amount);
        log!(env, "treasury withdrawn to owner: {}", amount);

        env.events().publish(
            (TREASURY, WITHDRAW),
            TreasuryMoved {
                account: owner,
                amount,
                balance: 0,
            },
        );

        Ok(amount)
    }

    /// Check that `amount` is covered and pre-authorize a single transfer of it from
    /// the treasury to `recipient`. The recipient collects it in the nested call
    /// that follows (the marketplace pulls its price during `purchase`).
    pub fn spend(env: &Env, amount: i128, recipient: &Address) -> Result<(), Error> {
        let config = DaoAdmin::config(env)?;
        let treasury = env.current_contract_address();
        let balance = TokenClient::new(env, &config.native_token).balance(&treasury);
        if amount > balance {
            log!(env, "treasury short: need {}, have {}", amount, balance);
            return Err(Error::InsufficientFunds);
        }

        env.authorize_as_current_contract(vec![
            env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: config.native_token,
                    fn_name: Symbol::new(env, "transfer"),
                    args: (treasury, recipient.clone(), amount).into_val(env),
                },
                sub_invocations: vec![env],
            }),
        ]);

        Ok(())
    }
}
