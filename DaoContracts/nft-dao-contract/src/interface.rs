//! Public interface of the NFT-gated DAO contract.
//!
//! Holders of the membership NFT collection propose purchases from a marketplace,
//! vote with their units until the proposal deadline, and anyone may execute a
//! closed proposal. The treasury is the contract's native-token balance; only the
//! owner can withdraw it.

use crate::types::{DaoConfig, Error, Proposal, ProposalState, Vote};
use soroban_sdk::{Address, Env, Vec};

pub trait NftDaoTrait {
    /// Set the owner and collaborators and optionally fund the treasury from the
    /// owner in the same call.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    /// * `InvalidConfig` - If the voting period is zero
    /// * `InvalidAmount` - If `initial_funds` is negative
    fn initialize(
        env: Env,
        owner: Address,
        config: DaoConfig,
        initial_funds: i128,
    ) -> Result<(), Error>;

    /// Send `amount` of the native token from `from` to the treasury.
    ///
    /// # Returns
    /// The treasury balance after the deposit
    fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, Error>;

    /// Propose buying `nft_token_id` from the marketplace.
    ///
    /// # Returns
    /// The new proposal id
    ///
    /// # Errors
    /// * `NotAMember` - If the proposer holds no membership NFT
    /// * `UnavailableAsset` - If the marketplace does not list the token
    fn create_proposal(env: Env, proposer: Address, nft_token_id: u32) -> Result<u32, Error>;

    /// Vote on an active proposal with every unit of `voter` not used on it yet.
    ///
    /// # Returns
    /// The weight added
    ///
    /// # Errors
    /// * `NotFound` - If the proposal doesn't exist
    /// * `VotingClosed` - If the deadline has passed
    /// * `NotAMember` - If the voter holds no membership NFT
    /// * `AlreadyVoted` - If all of the voter's units already voted
    fn vote_on_proposal(
        env: Env,
        voter: Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<u32, Error>;

    /// Resolve a proposal after its deadline, buying the token if it passed.
    ///
    /// # Returns
    /// Whether the proposal passed
    ///
    /// # Errors
    /// * `NotFound` - If the proposal doesn't exist
    /// * `AlreadyExecuted` - If the proposal was resolved before
    /// * `VotingOpen` - If the deadline has not passed
    /// * `InsufficientFunds` - If the treasury cannot pay the listing price
    /// * `PurchaseFailed` - If the marketplace refused the purchase
    fn execute_proposal(env: Env, executor: Address, proposal_id: u32) -> Result<bool, Error>;

    /// Send the entire treasury to the owner.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `EmptyTreasury` - If there is nothing to withdraw
    fn withdraw_treasury(env: Env, caller: Address) -> Result<i128, Error>;

    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error>;

    /// All proposals in ascending id order.
    fn list_proposals(env: Env) -> Vec<Proposal>;

    /// Up to `limit` proposals in ascending id order, starting at id `start`.
    fn list_proposals_page(env: Env, start: u32, limit: u32) -> Vec<Proposal>;

    fn proposal_count(env: Env) -> u32;

    fn proposal_state(env: Env, proposal_id: u32) -> Result<ProposalState, Error>;

    /// Whether membership unit `unit_id` has voted on `proposal_id`.
    fn has_voted(env: Env, proposal_id: u32, unit_id: u32) -> bool;

    /// Units held by `member`, i.e. the most weight it can put on one proposal.
    fn voting_power(env: Env, member: Address) -> Result<u32, Error>;

    fn treasury_balance(env: Env) -> Result<i128, Error>;

    fn is_owner(env: Env, address: Address) -> bool;

    fn owner(env: Env) -> Result<Address, Error>;

    fn config(env: Env) -> Result<DaoConfig, Error>;
}
