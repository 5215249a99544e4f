use crate::{
    admin::DaoAdmin,
    external::AssetRegistryClient,
    types::{DataKey, Error},
};
use soroban_sdk::{log, Address, Env, Vec};

/// MembershipOracle answers ownership questions against the NFT registry and keeps
/// the per-proposal vote receipts.
pub struct MembershipOracle;

impl MembershipOracle {
    fn registry(env: &Env) -> Result<AssetRegistryClient, Error> {
        let config = DaoAdmin::config(env)?;
        Ok(AssetRegistryClient::new(env, &config.asset_registry))
    }

    /// Whether `member` holds at least one unit of the collection.
    pub fn owns_at_least_one(env: &Env, member: &Address) -> Result<bool, Error> {
        Ok(Self::voting_weight_available(env, member)? > 0)
    }

    /// Number of units `member` currently holds.
    pub fn voting_weight_available(env: &Env, member: &Address) -> Result<u32, Error> {
        Ok(Self::registry(env)?.balance_of(member))
    }

    /// Units held by `member` that have not voted on `proposal_id` yet.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `member` - The holder whose units are enumerated
    /// * `proposal_id` - The proposal the receipts are checked against
    ///
    /// # Returns
    /// * `(owned, unused)` - How many enumerated units `owner_of` confirms for the
    ///   member and the ids still free to vote
    pub fn unused_units(
        env: &Env,
        member: &Address,
        proposal_id: u32,
    ) -> Result<(u32, Vec<u32>), Error> {
        let registry = Self::registry(env)?;
        let listed = registry.balance_of(member);

        let mut owned = 0;
        let mut unused = Vec::new(env);
        for index in 0..listed {
            let unit_id = registry.token_of_owner_by_index(member, &index);
            if registry.owner_of(&unit_id) != *member {
                log!(env, "unit {} listed for a holder that does not own it", unit_id);
                continue;
            }
            owned += 1;
            if !Self::has_voted(env, proposal_id, unit_id) {
                unused.push_back(unit_id);
            }
        }

        Ok((owned, unused))
    }

    pub fn has_voted(env: &Env, proposal_id: u32, unit_id: u32) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Receipt(proposal_id, unit_id))
    }

    /// Mark `unit_id` as used on `proposal_id`.
    pub fn record_vote(env: &Env, proposal_id: u32, unit_id: u32) -> Result<(), Error> {
        let key = DataKey::Receipt(proposal_id, unit_id);
        if env.storage().persistent().has(&key) {
            return Err(Error::AlreadyVoted);
        }
        env.storage().persistent().set(&key, &true);
        Ok(())
    }
}
