use soroban_sdk::{contracttype, Address, Env};

use crate::{
    accrual::{PoolState, MAX_REWARD_RATE},
    events,
    storage::{self, CONFIG},
    PoolError,
};

/// Construction parameters of a pool.
///
/// `principal_asset` and `reward_asset` never change after `initialize`;
/// `owner` changes only through the two-step transfer in [`crate::ownership`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub owner: Address,
    pub principal_asset: Address,
    pub reward_asset: Address,
}

/// Validates a candidate reward rate.
pub fn check_rate(reward_rate: i128) -> Result<(), PoolError> {
    if !(0..=MAX_REWARD_RATE).contains(&reward_rate) {
        return Err(PoolError::InvalidRate);
    }
    Ok(())
}

/// Writes the pool configuration and a fresh accrual state.
pub fn initialize(
    env: &Env,
    owner: Address,
    principal_asset: Address,
    reward_asset: Address,
    reward_rate: i128,
) -> Result<(), PoolError> {
    if env.storage().instance().has(&CONFIG) {
        return Err(PoolError::AlreadyInitialized);
    }
    check_rate(reward_rate)?;
    if principal_asset == reward_asset {
        return Err(PoolError::AssetsIdentical);
    }

    let config = PoolConfig {
        owner,
        principal_asset,
        reward_asset,
    };
    env.storage().instance().set(&CONFIG, &config);
    storage::save_state(env, &PoolState::new(reward_rate, env.ledger().timestamp()));
    storage::extend_instance(env);

    events::publish_initialized(env, &config, reward_rate);

    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(PoolError::NotInitialized)
}

pub(crate) fn save(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&CONFIG, config);
}
