use crate::types::{DataKey, Error, Proposal, Vote};
use soroban_sdk::{Address, Env, Vec};

/// ProposalStore owns the proposal records and the id allocator.
/// Ids start at 0 and grow by one per proposal; records are never deleted.
pub struct ProposalStore;

impl ProposalStore {
    /// Allocate the next id and store a fresh proposal under it.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `proposer` - The member creating the proposal
    /// * `nft_token_id` - The marketplace token the proposal offers to buy
    /// * `deadline` - Ledger timestamp at which voting closes
    ///
    /// # Returns
    /// * `u32` - The new proposal id
    pub fn create(env: &Env, proposer: &Address, nft_token_id: u32, deadline: u64) -> u32 {
        let proposal_id = Self::count(env);
        let next = proposal_id
            .checked_add(1)
            .expect("proposal id space exhausted");

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            nft_token_id,
            created_at: env.ledger().timestamp(),
            deadline,
            yay_votes: 0,
            nay_votes: 0,
            executed: false,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal_id), &proposal);
        env.storage()
            .instance()
            .set(&DataKey::ProposalCount, &next);

        proposal_id
    }

    pub fn get(env: &Env, proposal_id: u32) -> Result<Proposal, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(Error::NotFound)
    }

    /// Add `weight` to the counter matching `vote`.
    pub fn record_vote(
        env: &Env,
        proposal_id: u32,
        vote: Vote,
        weight: u32,
    ) -> Result<Proposal, Error> {
        let mut proposal = Self::get(env, proposal_id)?;
        match vote {
            Vote::Yay => proposal.yay_votes += weight,
            Vote::Nay => proposal.nay_votes += weight,
        }
        Self::save(env, &proposal);
        Ok(proposal)
    }

    pub fn mark_executed(env: &Env, proposal_id: u32) -> Result<(), Error> {
        let mut proposal = Self::get(env, proposal_id)?;
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        proposal.executed = true;
        Self::save(env, &proposal);
        Ok(())
    }

    pub fn count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0)
    }

    /// Up to `limit` proposals in ascending id order, starting at `start`.
    pub fn list(env: &Env, start: u32, limit: u32) -> Vec<Proposal> {
        let end = Self::count(env).min(start.saturating_add(limit));
        let mut proposals = Vec::new(env);
        for proposal_id in start..end {
            if let Ok(proposal) = Self::get(env, proposal_id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }

    fn save(env: &Env, proposal: &Proposal) {
        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }
}
