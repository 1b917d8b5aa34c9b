use soroban_sdk::{log, token, Address, Env};

use crate::events;
use crate::plans;
use crate::storage_types::*;
use crate::subscription;
use crate::utils::*;

/// Charges `plan.price` to `payer` with the payer's own signature.
///
/// Used for the first charge on enrollment. A rejected transfer (balance,
/// trustline, auth) comes back as `PaymentFailed` instead of aborting the
/// invocation, and nothing has been written at that point.
pub fn charge_direct(env: &Env, payer: &Address, plan: &Plan) -> Result<(), Error> {
    if plan.price == 0 {
        return Ok(());
    }
    let token_client = token::TokenClient::new(env, &get_token_address(env)?);

    match token_client.try_transfer(payer, &plan.owner, &plan.price) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "initial charge rejected", payer.clone(), plan.plan_id, plan.price);
            Err(Error::PaymentFailed)
        }
    }
}

/// Charges `plan.price` to `account` against the allowance the account gave
/// this contract, so any caller can trigger a due charge.
pub fn charge_from_allowance(env: &Env, account: &Address, plan: &Plan) -> Result<(), Error> {
    if plan.price == 0 {
        return Ok(());
    }
    let token_client = token::TokenClient::new(env, &get_token_address(env)?);
    let spender = env.current_contract_address();

    match token_client.try_transfer_from(&spender, account, &plan.owner, &plan.price) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "recurring charge rejected", account.clone(), plan.plan_id, plan.price);
            Err(Error::PaymentFailed)
        }
    }
}

/// True when the enrollment exists, is active and its next charge tick has
/// been reached. Plan state is not consulted.
pub fn is_payment_due(env: &Env, account: &Address, plan_id: PlanId) -> bool {
    match subscription::get_enrollment(env, account, plan_id) {
        Some(enrollment) => enrollment.active && current_tick(env) >= enrollment.next_payment_tick,
        None => false,
    }
}

/// Takes one billing cycle's payment from `account` and advances the
/// enrollment by the plan's current period.
pub fn process_payment(
    env: &Env,
    caller: Address,
    account: Address,
    plan_id: PlanId,
) -> Result<Enrollment, Error> {
    require_initialized(env)?;

    let plan = plans::get_plan(env, plan_id).ok_or(Error::InvalidSubscription)?;
    let mut enrollment =
        subscription::get_enrollment(env, &account, plan_id).ok_or(Error::InvalidSubscription)?;

    if !plan.active || !enrollment.active {
        return Err(Error::SubscriptionInactive);
    }
    if current_tick(env) < enrollment.next_payment_tick {
        return Err(Error::PaymentFailed);
    }

    let next_payment_tick = enrollment
        .next_payment_tick
        .checked_add(plan.period)
        .ok_or(Error::Overflow)?;
    let payment_count = enrollment
        .payment_count
        .checked_add(1)
        .ok_or(Error::Overflow)?;

    charge_from_allowance(env, &account, &plan)?;

    enrollment.next_payment_tick = next_payment_tick;
    enrollment.payment_count = payment_count;
    subscription::write_enrollment(env, &account, plan_id, &enrollment);
    extend_instance(env);

    events::emit_payment_processed(
        env,
        events::PaymentProcessedEvent {
            caller,
            account,
            plan_id,
            amount_paid: plan.price,
            payment_count,
            next_payment_tick,
        },
    );

    Ok(enrollment)
}
