use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::PoolError;

/// Principal bookkeeping for one pool variant.
///
/// The accrual engine only sees principal as an `i128` count of units. Each
/// variant decides what a deposit/withdraw *unit* is (a token amount, an NFT
/// id), how it is validated and recorded, and how the underlying asset moves.
///
/// The engine calls, in order: [`principal_units`](Self::principal_units),
/// [`deposit_principal`](Self::deposit_principal) or
/// [`withdraw_principal`](Self::withdraw_principal), then updates the
/// position, and only then [`transfer_in`](Self::transfer_in) or
/// [`transfer_out`](Self::transfer_out). No ledger method may touch the
/// position or pool totals itself.
pub trait PrincipalLedger {
    type Unit: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val>;

    /// Principal units `unit` adds to (or removes from) a position.
    fn principal_units(&self, unit: &Self::Unit) -> Result<i128, PoolError>;

    /// Validates and records a deposit before the asset is pulled in.
    fn deposit_principal(
        &self,
        env: &Env,
        participant: &Address,
        unit: &Self::Unit,
    ) -> Result<(), PoolError>;

    /// Validates and records a withdrawal before the asset is sent back.
    fn withdraw_principal(
        &self,
        env: &Env,
        participant: &Address,
        unit: &Self::Unit,
    ) -> Result<(), PoolError>;

    /// Pulls the asset from `participant` into the pool.
    fn transfer_in(&self, env: &Env, participant: &Address, unit: &Self::Unit);

    /// Returns the asset from the pool to `participant`.
    fn transfer_out(&self, env: &Env, participant: &Address, unit: &Self::Unit);

    /// Every unit `participant` currently holds; what `exit` withdraws.
    fn held_units(&self, env: &Env, participant: &Address) -> Vec<Self::Unit>;
}
