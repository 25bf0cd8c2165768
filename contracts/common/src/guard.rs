use soroban_sdk::Env;

use crate::{storage::LOCKED, PoolError};

/// Per-pool "call in progress" flag.
///
/// Acquired at the top of every state-mutating entry point that talks to an
/// external asset contract. The flag is cleared when the guard is dropped, on
/// success and on every early `?` return alike.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PoolError> {
        if env.storage().instance().has(&LOCKED) {
            return Err(PoolError::Reentrancy);
        }
        env.storage().instance().set(&LOCKED, &true);
        Ok(Self { env })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage().instance().has(&LOCKED)
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&LOCKED);
    }
}
