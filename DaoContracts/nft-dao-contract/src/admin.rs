use crate::types::{DaoConfig, DataKey, Error};
use soroban_sdk::{Address, Env};

/// Owner identity and the configuration fixed at initialization.
pub struct DaoAdmin;

impl DaoAdmin {
    /// Store the owner and configuration. Fails if either is already present.
    pub fn init(env: &Env, owner: &Address, config: &DaoConfig) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        if config.voting_period == 0 {
            return Err(Error::InvalidConfig);
        }

        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::Config, config);
        env.storage().instance().set(&DataKey::ProposalCount, &0u32);

        Ok(())
    }

    pub fn config(env: &Env) -> Result<DaoConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn is_owner(env: &Env, address: &Address) -> bool {
        Self::owner(env).map_or(false, |owner| owner == *address)
    }
}
