use soroban_sdk::{Address, Env};

use crate::events;
use crate::payment;
use crate::plans;
use crate::storage_types::*;
use crate::utils::*;

pub fn get_enrollment(env: &Env, account: &Address, plan_id: PlanId) -> Option<Enrollment> {
    env.storage()
        .persistent()
        .get(&DataKey::Enrollment(account.clone(), plan_id))
}

pub fn has_enrollment(env: &Env, account: &Address, plan_id: PlanId) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Enrollment(account.clone(), plan_id))
}

pub fn write_enrollment(env: &Env, account: &Address, plan_id: PlanId, enrollment: &Enrollment) {
    let key = DataKey::Enrollment(account.clone(), plan_id);
    env.storage().persistent().set(&key, enrollment);
    extend_persistent(env, &key);
}

/// Enrolls `account` in a plan and takes the first charge.
///
/// The enrollment is only written once the transfer has gone through, so a
/// rejected transfer leaves no record behind. A key that exists at all, even
/// a cancelled one, blocks a second enrollment.
pub fn subscribe(env: &Env, account: Address, plan_id: PlanId) -> Result<Enrollment, Error> {
    require_initialized(env)?;

    let plan = plans::get_plan(env, plan_id).ok_or(Error::InvalidSubscription)?;
    if !plan.active {
        return Err(Error::SubscriptionInactive);
    }
    if has_enrollment(env, &account, plan_id) {
        return Err(Error::AlreadySubscribed);
    }

    let now = current_tick(env);
    let next_payment_tick = now.checked_add(plan.period).ok_or(Error::Overflow)?;

    payment::charge_direct(env, &account, &plan)?;

    let enrollment = Enrollment {
        start_tick: now,
        next_payment_tick,
        active: true,
        payment_count: 1,
    };
    write_enrollment(env, &account, plan_id, &enrollment);
    extend_instance(env);

    events::emit_subscribed(
        env,
        events::SubscribedEvent {
            account,
            plan_id,
            amount_paid: plan.price,
            next_payment_tick,
        },
    );

    Ok(enrollment)
}

/// Marks the enrollment inactive. Cancelling twice is harmless; the record
/// is kept and never becomes active again.
pub fn cancel(env: &Env, account: Address, plan_id: PlanId) -> Result<(), Error> {
    require_initialized(env)?;

    let mut enrollment =
        get_enrollment(env, &account, plan_id).ok_or(Error::InvalidSubscription)?;
    enrollment.active = false;

    write_enrollment(env, &account, plan_id, &enrollment);
    extend_instance(env);

    events::emit_cancelled(env, events::CancelledEvent { account, plan_id });

    Ok(())
}
