use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

// Topic for marketplace events.
pub const MARKET: Symbol = symbol_short!("market");

pub const INIT: Symbol = symbol_short!("init");
pub const PURCHASE: Symbol = symbol_short!("purchase");

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address that set the listing up.
    Admin,
    /// Token purchases are paid in.
    PaymentToken,
    /// Flat price of every listed token.
    Price,
    /// Buyer of a token id, present once sold.
    Owner(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenPurchased {
    pub token_id: u32,
    pub buyer: Address,
    pub price: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketplaceError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidPrice = 3,
    NotAvailable = 4,
}
