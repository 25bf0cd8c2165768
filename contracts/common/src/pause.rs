use soroban_sdk::{Address, Env};

use crate::{
    events, ownership,
    storage::{self, PAUSED},
    PoolError,
};

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Only new deposits are gated. Withdrawals and claims stay open so
/// participants can always leave.
pub fn require_not_paused(env: &Env) -> Result<(), PoolError> {
    if is_paused(env) {
        return Err(PoolError::Paused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: Address) -> Result<(), PoolError> {
    caller.require_auth();
    ownership::require_owner(env, &caller)?;

    env.storage().instance().set(&PAUSED, &true);
    storage::extend_instance(env);

    events::publish_paused(env, caller);

    Ok(())
}

pub fn unpause(env: &Env, caller: Address) -> Result<(), PoolError> {
    caller.require_auth();
    ownership::require_owner(env, &caller)?;

    env.storage().instance().set(&PAUSED, &false);
    storage::extend_instance(env);

    events::publish_unpaused(env, caller);

    Ok(())
}
