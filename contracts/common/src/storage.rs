use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{
    accrual::{PoolState, Position},
    PoolError,
};

// ── Storage keys ─────────────────────────────────────────────────────────────

pub(crate) const CONFIG: Symbol = symbol_short!("CONFIG");
pub(crate) const STATE: Symbol = symbol_short!("STATE");
pub(crate) const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
pub(crate) const PAUSED: Symbol = symbol_short!("PAUSED");
pub(crate) const LOCKED: Symbol = symbol_short!("LOCKED");

// Per-participant persistent entries use tuple keys: (prefix, participant)
const POSITION: Symbol = symbol_short!("POS");

/// ~30 days of ledgers.
pub const TTL_THRESHOLD: u32 = 518_400;
/// ~60 days of ledgers.
pub const TTL_EXTEND_TO: u32 = 1_036_800;

// ── TTL ──────────────────────────────────────────────────────────────────────

/// Extends the instance storage TTL (config, pool state, flags).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Pool state ───────────────────────────────────────────────────────────────

pub fn load_state(env: &Env) -> Result<PoolState, PoolError> {
    env.storage()
        .instance()
        .get(&STATE)
        .ok_or(PoolError::NotInitialized)
}

pub fn save_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&STATE, state);
}

// ── Positions ────────────────────────────────────────────────────────────────

fn position_key(participant: &Address) -> (Symbol, Address) {
    (POSITION, participant.clone())
}

/// Returns the participant's position, or an empty one if none is stored.
pub fn load_position(env: &Env, participant: &Address) -> Position {
    let key = position_key(participant);
    let position: Option<Position> = env.storage().persistent().get(&key);
    match position {
        Some(position) => {
            extend_persistent(env, &key);
            position
        }
        None => Position::default(),
    }
}

/// Stores the position, or removes the entry once it is empty.
pub fn save_position(env: &Env, participant: &Address, position: &Position) {
    let key = position_key(participant);
    if position.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, position);
    extend_persistent(env, &key);
}
