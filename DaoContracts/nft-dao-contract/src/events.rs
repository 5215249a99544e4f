use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::types::Vote;

// Topic for contract-level events.
pub const DAO: Symbol = symbol_short!("dao");

// Topic for proposal lifecycle events.
pub const PROPOSAL: Symbol = symbol_short!("proposal");

// Topic for vote events.
pub const VOTE: Symbol = symbol_short!("vote");

// Topic for treasury movements.
pub const TREASURY: Symbol = symbol_short!("treasury");

pub const INIT: Symbol = symbol_short!("init");
pub const CREATED: Symbol = symbol_short!("created");
pub const CAST: Symbol = symbol_short!("cast");
pub const EXECUTED: Symbol = symbol_short!("executed");
pub const DEPOSIT: Symbol = symbol_short!("deposit");
pub const WITHDRAW: Symbol = symbol_short!("withdraw");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u32,
    pub proposer: Address,
    pub nft_token_id: u32,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub proposal_id: u32,
    pub voter: Address,
    pub vote: Vote,
    pub weight: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    pub proposal_id: u32,
    pub executor: Address,
    pub passed: bool,
    /// Amount paid to the marketplace, zero when the proposal failed.
    pub spent: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryMoved {
    pub account: Address,
    pub amount: i128,
    pub balance: i128,
}
