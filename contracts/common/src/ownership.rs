//! Two-step ownership transfer.
//!
//! The owner proposes a candidate, and ownership moves only when that
//! candidate calls `accept`. A mistyped address therefore never receives
//! control of the pool.

use soroban_sdk::{Address, Env};

use crate::{
    config,
    events,
    storage::{self, PENDING_OWNER},
    PoolError,
};

/// Guard: revert if `caller` is not the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), PoolError> {
    let config = config::load(env)?;
    if *caller != config.owner {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, PoolError> {
    Ok(config::load(env)?.owner)
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

pub fn propose(env: &Env, caller: Address, candidate: Address) -> Result<(), PoolError> {
    caller.require_auth();
    require_owner(env, &caller)?;

    env.storage().instance().set(&PENDING_OWNER, &candidate);
    storage::extend_instance(env);

    events::publish_ownership_proposed(env, caller, candidate);

    Ok(())
}

pub fn accept(env: &Env, candidate: Address) -> Result<(), PoolError> {
    candidate.require_auth();

    let pending = pending_owner(env).ok_or(PoolError::NoPendingOwner)?;
    if candidate != pending {
        return Err(PoolError::Unauthorized);
    }

    let mut config = config::load(env)?;
    let old_owner = config.owner.clone();
    config.owner = candidate.clone();
    config::save(env, &config);
    env.storage().instance().remove(&PENDING_OWNER);
    storage::extend_instance(env);

    events::publish_ownership_accepted(env, old_owner, candidate);

    Ok(())
}

pub fn cancel(env: &Env, caller: Address) -> Result<(), PoolError> {
    caller.require_auth();
    require_owner(env, &caller)?;

    let pending = pending_owner(env).ok_or(PoolError::NoPendingOwner)?;
    env.storage().instance().remove(&PENDING_OWNER);
    storage::extend_instance(env);

    events::publish_ownership_cancelled(env, caller, pending);

    Ok(())
}
