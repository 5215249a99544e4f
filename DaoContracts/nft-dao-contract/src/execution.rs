use crate::{
    admin::DaoAdmin,
    events::{ProposalExecuted, EXECUTED, PROPOSAL},
    external::MarketplaceClient,
    proposals::ProposalStore,
    treasury::TreasuryManager,
    types::{Error, Proposal},
};
use soroban_sdk::{log, Address, Env};

/// ExecutionEngine resolves closed proposals. Execution is open to any caller and
/// happens at most once per proposal.
pub struct ExecutionEngine;

impl ExecutionEngine {
    /// Resolve a proposal whose deadline has passed.
    ///
    /// A passing proposal (strictly more yay than nay) buys its token from the
    /// marketplace with treasury funds. The proposal is marked executed only after
    /// the purchase went through, so a purchase that cannot be paid or is refused
    /// leaves it retriable.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `executor` - The account triggering execution
    /// * `proposal_id` - The proposal to resolve
    ///
    /// # Returns
    /// * `Result<bool, Error>` - Whether the proposal passed
    pub fn execute(env: &Env, executor: &Address, proposal_id: u32) -> Result<bool, Error> {
        let proposal = ProposalStore::get(env, proposal_id)?;
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        if env.ledger().timestamp() < proposal.deadline {
            return Err(Error::VotingOpen);
        }

        let passed = proposal.passed();
        let spent = if passed {
            Self::purchase(env, &proposal)?
        } else {
            log!(
                env,
                "proposal {} rejected: yay {}, nay {}",
                proposal_id,
                proposal.yay_votes,
                proposal.nay_votes
            );
            0
        };

        ProposalStore::mark_executed(env, proposal_id)?;

        env.events().publish(
            (PROPOSAL, EXECUTED),
            ProposalExecuted {
                proposal_id,
                executor: executor.clone(),
                passed,
                spent,
            },
        );

        Ok(passed)
    }

    /// Pay the marketplace its listing price and take the token. Returns the price.
    fn purchase(env: &Env, proposal: &Proposal) -> Result<i128, Error> {
        let config = DaoAdmin::config(env)?;
        let marketplace = MarketplaceClient::new(env, &config.marketplace);

        let price = marketplace.price_of(&proposal.nft_token_id);
        TreasuryManager::spend(env, price, &config.marketplace)?;

        match marketplace.try_purchase(&env.current_contract_address(), &proposal.nft_token_id) {
            Ok(Ok(())) => {
                log!(
                    env,
                    "proposal {} bought token {} for {}",
                    proposal.id,
                    proposal.nft_token_id,
                    price
                );
                Ok(price)
            }
            _ => Err(Error::PurchaseFailed),
        }
    }
}
