#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub mod admin;
pub mod events;
pub mod execution;
pub mod external;
pub mod interface;
pub mod membership;
pub mod proposals;
pub mod treasury;
pub mod types;
pub mod voting;

use admin::DaoAdmin;
use events::{DAO, INIT};
use execution::ExecutionEngine;
use interface::NftDaoTrait;
use membership::MembershipOracle;
use proposals::ProposalStore;
use treasury::TreasuryManager;
use voting::VotingEngine;

pub use types::{DaoConfig, Error, Proposal, ProposalState, Vote, DEFAULT_VOTING_PERIOD};

#[contract]
pub struct NftDao;

#[contractimpl]
impl NftDaoTrait for NftDao {
    fn initialize(
        env: Env,
        owner: Address,
        config: DaoConfig,
        initial_funds: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        if initial_funds < 0 {
            return Err(Error::InvalidAmount);
        }

        DaoAdmin::init(&env, &owner, &config)?;
        if initial_funds > 0 {
            TreasuryManager::credit(&env, &owner, initial_funds)?;
        }

        env.events().publish(
            (DAO, INIT),
            (owner, config.asset_registry, config.marketplace),
        );

        Ok(())
    }

    fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, Error> {
        from.require_auth();
        TreasuryManager::credit(&env, &from, amount)
    }

    fn create_proposal(env: Env, proposer: Address, nft_token_id: u32) -> Result<u32, Error> {
        proposer.require_auth();
        VotingEngine::create_proposal(&env, &proposer, nft_token_id)
    }

    fn vote_on_proposal(
        env: Env,
        voter: Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<u32, Error> {
        voter.require_auth();
        VotingEngine::cast_vote(&env, &voter, proposal_id, vote)
    }

    fn execute_proposal(env: Env, executor: Address, proposal_id: u32) -> Result<bool, Error> {
        executor.require_auth();
        ExecutionEngine::execute(&env, &executor, proposal_id)
    }

    fn withdraw_treasury(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        TreasuryManager::withdraw_all(&env, &caller)
    }

    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error> {
        ProposalStore::get(&env, proposal_id)
    }

    fn list_proposals(env: Env) -> Vec<Proposal> {
        ProposalStore::list(&env, 0, ProposalStore::count(&env))
    }

    fn list_proposals_page(env: Env, start: u32, limit: u32) -> Vec<Proposal> {
        ProposalStore::list(&env, start, limit)
    }

    fn proposal_count(env: Env) -> u32 {
        ProposalStore::count(&env)
    }

    fn proposal_state(env: Env, proposal_id: u32) -> Result<ProposalState, Error> {
        VotingEngine::proposal_state(&env, proposal_id)
    }

    fn has_voted(env: Env, proposal_id: u32, unit_id: u32) -> bool {
        MembershipOracle::has_voted(&env, proposal_id, unit_id)
    }

    fn voting_power(env: Env, member: Address) -> Result<u32, Error> {
        MembershipOracle::voting_weight_available(&env, &member)
    }

    fn treasury_balance(env: Env) -> Result<i128, Error> {
        TreasuryManager::balance(&env)
    }

    fn is_owner(env: Env, address: Address) -> bool {
        DaoAdmin::is_owner(&env, &address)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        DaoAdmin::owner(&env)
    }

    fn config(env: Env) -> Result<DaoConfig, Error> {
        DaoAdmin::config(&env)
    }
}
