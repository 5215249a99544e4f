use soroban_sdk::{contractclient, Address};

/// NFT collection backing membership. Any enumerable collection exposing these
/// calls can serve as the registry.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of `unit_id`.
    fn owner_of(unit_id: u32) -> Address;

    /// Number of units held by `owner`.
    fn balance_of(owner: Address) -> u32;

    /// Id of the `index`-th unit held by `owner`, for `index < balance_of(owner)`.
    fn token_of_owner_by_index(owner: Address, index: u32) -> u32;
}

/// Marketplace proposals purchase from.
#[allow(dead_code)]
#[contractclient(name = "MarketplaceClient")]
pub trait Marketplace {
    /// Whether `token_id` can currently be bought.
    fn is_available(token_id: u32) -> bool;

    /// Listing price of `token_id` in the payment token.
    fn price_of(token_id: u32) -> i128;

    /// Buys `token_id` for `buyer`, pulling the listing price from `buyer`.
    fn purchase(buyer: Address, token_id: u32);
}
