#![no_std]

mod events;
mod payment;
mod plans;
mod storage_types;
mod subscription;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use storage_types::{Enrollment, Error, Plan, PlanId, Tick, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use storage_types::DataKey;

#[contract]
pub struct BillingContract;

#[contractimpl]
impl BillingContract {
    /// Initialize the contract with an admin and the token every plan is priced in
    pub fn initialize(env: Env, admin: Address, token_address: Address) -> Result<(), Error> {
        if utils::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TokenAddress, &token_address);
        env.storage().instance().set(&DataKey::PlanCount, &0u32);
        utils::extend_instance(&env);

        events::emit_initialized(
            &env,
            events::InitializedEvent {
                admin,
                token: token_address,
            },
        );

        Ok(())
    }

    /// Publish a new plan owned by `owner`
    pub fn create_plan(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        price: i128,
        period: Tick,
    ) -> Result<PlanId, Error> {
        owner.require_auth();
        plans::create_plan(&env, owner, name, description, price, period)
    }

    /// Replace a plan's mutable fields (owner only)
    #[allow(clippy::too_many_arguments)]
    pub fn update_plan(
        env: Env,
        caller: Address,
        plan_id: PlanId,
        name: String,
        description: String,
        price: i128,
        period: Tick,
        active: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        plans::update_plan(&env, caller, plan_id, name, description, price, period, active)
    }

    /// Look up a plan by id
    pub fn get_plan(env: Env, plan_id: PlanId) -> Option<Plan> {
        plans::get_plan(&env, plan_id)
    }

    /// Number of plans ever created, which is also the highest plan id
    pub fn get_plan_count(env: Env) -> u32 {
        plans::get_plan_count(&env)
    }

    /// Enroll the signing account in a plan, paying the first period up front
    pub fn subscribe(env: Env, account: Address, plan_id: PlanId) -> Result<(), Error> {
        account.require_auth();
        subscription::subscribe(&env, account, plan_id).map(|_| ())
    }

    /// Stop billing for the signing account on a plan. The record is kept.
    pub fn cancel(env: Env, account: Address, plan_id: PlanId) -> Result<(), Error> {
        account.require_auth();
        subscription::cancel(&env, account, plan_id)
    }

    /// Whether an active enrollment has reached its next charge tick
    pub fn is_payment_due(env: Env, account: Address, plan_id: PlanId) -> bool {
        payment::is_payment_due(&env, &account, plan_id)
    }

    /// Charge one due billing cycle. Anyone may trigger this; the funds move
    /// under the allowance `account` granted this contract on the token.
    pub fn process_payment(
        env: Env,
        caller: Address,
        account: Address,
        plan_id: PlanId,
    ) -> Result<(), Error> {
        caller.require_auth();
        payment::process_payment(&env, caller, account, plan_id).map(|_| ())
    }

    /// Look up the enrollment of `account` on a plan, cancelled or not
    pub fn get_user_subscription(env: Env, account: Address, plan_id: PlanId) -> Option<Enrollment> {
        subscription::get_enrollment(&env, &account, plan_id)
    }

    /// Token every plan is priced in
    pub fn get_token(env: Env) -> Result<Address, Error> {
        utils::get_token_address(&env)
    }

    /// Address that initialized the contract
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        utils::get_admin(&env)
    }
}
