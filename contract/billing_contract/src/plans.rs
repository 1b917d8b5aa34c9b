use soroban_sdk::{Address, Env, String};

use crate::events;
use crate::storage_types::*;
use crate::utils::*;

pub fn get_plan(env: &Env, plan_id: PlanId) -> Option<Plan> {
    env.storage().persistent().get(&DataKey::Plan(plan_id))
}

pub fn get_plan_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::PlanCount).unwrap_or(0)
}

fn write_plan(env: &Env, plan: &Plan) {
    let key = DataKey::Plan(plan.plan_id);
    env.storage().persistent().set(&key, plan);
    extend_persistent(env, &key);
}

/// Registers a new plan owned by `owner` and returns its id. Ids start at 1
/// and are never reused.
pub fn create_plan(
    env: &Env,
    owner: Address,
    name: String,
    description: String,
    price: i128,
    period: Tick,
) -> Result<PlanId, Error> {
    require_initialized(env)?;
    validate_period(period)?;
    validate_price(price)?;
    validate_metadata(&name, &description)?;

    let plan_id = get_plan_count(env).checked_add(1).ok_or(Error::Overflow)?;

    let plan = Plan {
        plan_id,
        owner: owner.clone(),
        name,
        description,
        price,
        period,
        active: true,
    };

    write_plan(env, &plan);
    env.storage().instance().set(&DataKey::PlanCount, &plan_id);
    extend_instance(env);

    events::emit_plan_created(
        env,
        events::PlanCreatedEvent {
            plan_id,
            owner,
            price,
            period,
        },
    );

    Ok(plan_id)
}

/// Overwrites every mutable field of an existing plan. Only the owner may
/// update; deactivation through `active = false` is the only way to retire
/// a plan.
#[allow(clippy::too_many_arguments)]
pub fn update_plan(
    env: &Env,
    caller: Address,
    plan_id: PlanId,
    name: String,
    description: String,
    price: i128,
    period: Tick,
    active: bool,
) -> Result<(), Error> {
    require_initialized(env)?;

    let existing = get_plan(env, plan_id).ok_or(Error::InvalidSubscription)?;
    if existing.owner != caller {
        return Err(Error::Unauthorized);
    }
    validate_period(period)?;
    validate_price(price)?;
    validate_metadata(&name, &description)?;

    let plan = Plan {
        plan_id,
        owner: caller,
        name,
        description,
        price,
        period,
        active,
    };

    write_plan(env, &plan);
    extend_instance(env);

    events::emit_plan_updated(
        env,
        events::PlanUpdatedEvent {
            plan_id,
            price,
            period,
            active,
        },
    );

    Ok(())
}
