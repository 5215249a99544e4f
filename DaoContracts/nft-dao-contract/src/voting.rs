use crate::{
    admin::DaoAdmin,
    events::{ProposalCreated, VoteCast, CAST, CREATED, PROPOSAL, VOTE},
    external::MarketplaceClient,
    membership::MembershipOracle,
    proposals::ProposalStore,
    types::{Error, ProposalState, Vote},
};
use soroban_sdk::{log, Address, Env};

/// VotingEngine drives proposal creation and vote casting. It is the only writer of
/// vote receipts and tallies.
pub struct VotingEngine;

impl VotingEngine {
    /// Open a proposal to buy `nft_token_id`.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `proposer` - The member creating the proposal
    /// * `nft_token_id` - The marketplace token to buy
    ///
    /// # Returns
    /// * `Result<u32, Error>` - The new proposal id
    pub fn create_proposal(
        env: &Env,
        proposer: &Address,
        nft_token_id: u32,
    ) -> Result<u32, Error> {
        let config = DaoAdmin::config(env)?;

        if !MembershipOracle::owns_at_least_one(env, proposer)? {
            return Err(Error::NotAMember);
        }

        // Availability is locked in here and not rechecked at execution.
        let marketplace = MarketplaceClient::new(env, &config.marketplace);
        if !marketplace.is_available(&nft_token_id) {
            return Err(Error::UnavailableAsset);
        }

        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(config.voting_period)
            .ok_or(Error::InvalidConfig)?;
        let proposal_id = ProposalStore::create(env, proposer, nft_token_id, deadline);

        env.events().publish(
            (PROPOSAL, CREATED),
            ProposalCreated {
                proposal_id,
                proposer: proposer.clone(),
                nft_token_id,
                deadline,
            },
        );

        Ok(proposal_id)
    }

    /// Vote with every unit of `voter` that has not voted on the proposal yet.
    ///
    /// Weight is one per unit. A holder who later acquires more units can vote
    /// again with those units only.
    ///
    /// # Returns
    /// * `Result<u32, Error>` - The weight added by this call
    pub fn cast_vote(
        env: &Env,
        voter: &Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<u32, Error> {
        let proposal = ProposalStore::get(env, proposal_id)?;
        if proposal.state(env.ledger().timestamp()) != ProposalState::Active {
            return Err(Error::VotingClosed);
        }

        let (owned, unused) = MembershipOracle::unused_units(env, voter, proposal_id)?;
        if owned == 0 {
            return Err(Error::NotAMember);
        }
        if unused.is_empty() {
            return Err(Error::AlreadyVoted);
        }

        for unit_id in unused.iter() {
            MembershipOracle::record_vote(env, proposal_id, unit_id)?;
        }
        let weight = unused.len();
        let proposal = ProposalStore::record_vote(env, proposal_id, vote, weight)?;
        log!(
            env,
            "proposal {} tally: yay {}, nay {}",
            proposal_id,
            proposal.yay_votes,
            proposal.nay_votes
        );

        env.events().publish(
            (VOTE, CAST),
            VoteCast {
                proposal_id,
                voter: voter.clone(),
                vote,
                weight,
            },
        );

        Ok(weight)
    }

    pub fn proposal_state(env: &Env, proposal_id: u32) -> Result<ProposalState, Error> {
        let proposal = ProposalStore::get(env, proposal_id)?;
        Ok(proposal.state(env.ledger().timestamp()))
    }
}
