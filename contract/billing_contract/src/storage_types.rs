use soroban_sdk::{contracterror, contracttype, Address, String};

// Ledger sequence number, widened so period arithmetic has headroom.
pub type Tick = u64;
pub type PlanId = u32;

// Storage keys. Config and the plan counter live in instance storage,
// plans and enrollments are individual persistent entries.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenAddress,
    PlanCount,
    Plan(PlanId),
    Enrollment(Address, PlanId), // (account, plan)
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Plan {
    pub plan_id: PlanId,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub price: i128,
    pub period: Tick,
    pub active: bool,
}

/// Billing state of one account on one plan.
///
/// `next_payment_tick` always equals `start_tick` plus the sum of the plan
/// periods in effect at each charge, and `payment_count` counts the charges
/// taken so far including the one made on enrollment.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Enrollment {
    pub start_tick: Tick,
    pub next_payment_tick: Tick,
    pub active: bool,
    pub payment_count: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Billing period must be at least one ledger.
    InvalidPeriod = 3,
    /// Unknown plan id, or no enrollment for the (account, plan) pair.
    InvalidSubscription = 4,
    Unauthorized = 5,
    /// An enrollment already exists for the pair, cancelled or not.
    AlreadySubscribed = 6,
    /// The plan or the enrollment has been deactivated.
    SubscriptionInactive = 7,
    /// Charge not yet due, or the token transfer was rejected.
    PaymentFailed = 8,
    InvalidPrice = 9,
    InvalidMetadata = 10,
    Overflow = 11,
}

// Constants
pub const MAX_NAME_LEN: u32 = 50; // bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256; // bytes
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
