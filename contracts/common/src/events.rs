#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::{
    accrual::{PoolState, Position},
    config::PoolConfig,
};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub principal_asset: Address,
    pub reward_asset: Address,
    pub reward_rate: i128,
    pub timestamp: u64,
}

/// Fired when principal enters or leaves a position.
///
/// Carries the post-operation position and pool totals so an indexer can
/// rebuild the ledger from the event stream alone.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrincipalEvent {
    pub participant: Address,
    pub units: i128,
    pub principal_amount: i128,
    pub pending_reward: i128,
    pub total_principal: i128,
    pub acc_reward_per_principal: i128,
    pub timestamp: u64,
}

/// Fired when a participant is paid reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub participant: Address,
    pub amount: i128,
    pub acc_reward_per_principal: i128,
    pub timestamp: u64,
}

/// Fired when the owner changes the reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub old_rate: i128,
    pub new_rate: i128,
    pub acc_reward_per_principal: i128,
    pub timestamp: u64,
}

/// Fired when reward tokens are moved into the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipProposedEvent {
    pub owner: Address,
    pub candidate: Address,
    pub timestamp: u64,
}

/// Fired when the candidate accepts ownership.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when a pending ownership transfer is withdrawn.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_candidate: Address,
    pub timestamp: u64,
}

/// Fired when staking is paused or resumed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseEvent {
    pub owner: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

fn principal_event(
    env: &Env,
    participant: Address,
    units: i128,
    position: &Position,
    state: &PoolState,
) -> PrincipalEvent {
    PrincipalEvent {
        participant,
        units,
        principal_amount: position.principal_amount,
        pending_reward: position.pending_reward,
        total_principal: state.total_principal,
        acc_reward_per_principal: state.acc_reward_per_principal,
        timestamp: env.ledger().timestamp(),
    }
}

pub fn publish_initialized(env: &Env, config: &PoolConfig, reward_rate: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner: config.owner.clone(),
            principal_asset: config.principal_asset.clone(),
            reward_asset: config.reward_asset.clone(),
            reward_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    participant: &Address,
    units: i128,
    position: &Position,
    state: &PoolState,
) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        principal_event(env, participant.clone(), units, position, state),
    );
}

pub fn publish_unstaked(
    env: &Env,
    participant: &Address,
    units: i128,
    position: &Position,
    state: &PoolState,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), participant.clone()),
        principal_event(env, participant.clone(), units, position, state),
    );
}

pub fn publish_reward_claimed(env: &Env, participant: &Address, amount: i128, state: &PoolState) {
    env.events().publish(
        (symbol_short!("CLAIMED"), participant.clone()),
        RewardClaimedEvent {
            participant: participant.clone(),
            amount,
            acc_reward_per_principal: state.acc_reward_per_principal,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, old_rate: i128, state: &PoolState) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RewardRateSetEvent {
            old_rate,
            new_rate: state.reward_rate,
            acc_reward_per_principal: state.acc_reward_per_principal,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_funded(env: &Env, funder: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), funder.clone()),
        RewardsFundedEvent {
            funder,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_proposed(env: &Env, owner: Address, candidate: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), owner.clone()),
        OwnershipProposedEvent {
            owner,
            candidate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnershipAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_cancelled(env: &Env, owner: Address, cancelled_candidate: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnershipTransferCancelledEvent {
            owner,
            cancelled_candidate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PauseEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        PauseEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
