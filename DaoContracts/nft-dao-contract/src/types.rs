use soroban_sdk::{contracterror, contracttype, Address};

/// Default voting window in seconds (five minutes).
pub const DEFAULT_VOTING_PERIOD: u64 = 300;

/// Direction of a vote.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Vote {
    Yay = 0,
    Nay = 1,
}

/// Lifecycle of a proposal, derived from its deadline, its executed flag and the
/// ledger clock. Never stored.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    /// Deadline not reached yet; the only state accepting votes.
    Active = 0,
    /// Deadline reached, outcome not resolved yet.
    AwaitingExecution = 1,
    /// Terminal.
    Executed = 2,
}

/// An offer to buy `nft_token_id` from the marketplace with treasury funds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub proposer: Address,
    pub nft_token_id: u32,
    pub created_at: u64,
    pub deadline: u64,
    pub yay_votes: u32,
    pub nay_votes: u32,
    pub executed: bool,
}

impl Proposal {
    pub fn state(&self, now: u64) -> ProposalState {
        if self.executed {
            ProposalState::Executed
        } else if now < self.deadline {
            ProposalState::Active
        } else {
            ProposalState::AwaitingExecution
        }
    }

    /// Strict majority; a tie does not pass.
    pub fn passed(&self) -> bool {
        self.yay_votes > self.nay_votes
    }
}

/// Collaborators and parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    /// NFT collection whose holders are members.
    pub asset_registry: Address,
    /// Marketplace proposals buy from.
    pub marketplace: Address,
    /// Token the treasury is held in.
    pub native_token: Address,
    /// Seconds between proposal creation and its deadline.
    pub voting_period: u64,
}

/// Storage keys for the DAO contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Immutable owner allowed to withdraw the treasury.
    Owner,
    /// `DaoConfig`.
    Config,
    /// Number of proposals created so far; also the next id.
    ProposalCount,
    /// Proposal record by id.
    Proposal(u32),
    /// Vote receipt for (proposal id, asset unit id).
    Receipt(u32, u32),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,
    // Membership and proposals
    NotAMember = 101,
    NotFound = 102,
    UnavailableAsset = 103,
    // Voting
    VotingClosed = 201,
    VotingOpen = 202,
    AlreadyVoted = 203,
    // Execution
    AlreadyExecuted = 301,
    InsufficientFunds = 302,
    PurchaseFailed = 303,
    // Treasury
    Unauthorized = 401,
    EmptyTreasury = 402,
}
