use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{PlanId, Tick};

#[contracttype]
#[derive(Clone)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct PlanCreatedEvent {
    pub plan_id: PlanId,
    pub owner: Address,
    pub price: i128,
    pub period: Tick,
}

#[contracttype]
#[derive(Clone)]
pub struct PlanUpdatedEvent {
    pub plan_id: PlanId,
    pub price: i128,
    pub period: Tick,
    pub active: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct SubscribedEvent {
    pub account: Address,
    pub plan_id: PlanId,
    pub amount_paid: i128,
    pub next_payment_tick: Tick,
}

#[contracttype]
#[derive(Clone)]
pub struct CancelledEvent {
    pub account: Address,
    pub plan_id: PlanId,
}

#[contracttype]
#[derive(Clone)]
pub struct PaymentProcessedEvent {
    pub caller: Address,
    pub account: Address,
    pub plan_id: PlanId,
    pub amount_paid: i128,
    pub payment_count: u32,
    pub next_payment_tick: Tick,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_plan_created(env: &Env, event: PlanCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "plan_created"), event.plan_id),
        event,
    );
}

pub fn emit_plan_updated(env: &Env, event: PlanUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "plan_updated"), event.plan_id),
        event,
    );
}

pub fn emit_subscribed(env: &Env, event: SubscribedEvent) {
    env.events().publish(
        (Symbol::new(env, "subscribed"), event.plan_id),
        event,
    );
}

pub fn emit_cancelled(env: &Env, event: CancelledEvent) {
    env.events().publish(
        (Symbol::new(env, "cancelled"), event.plan_id),
        event,
    );
}

pub fn emit_payment_processed(env: &Env, event: PaymentProcessedEvent) {
    env.events().publish(
        (Symbol::new(env, "payment_processed"), event.plan_id),
        event,
    );
}
