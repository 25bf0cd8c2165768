use soroban_sdk::contracttype;

use crate::PoolError;

/// Fixed-point scaling factor for `acc_reward_per_principal`.
///
/// The accumulator stores cumulative reward per unit of principal multiplied
/// by this constant. 10^12 keeps a rate of 1 unit/second from truncating to
/// zero until the pool holds more than 10^12 units of principal.
pub const ACC_PRECISION: i128 = 1_000_000_000_000;

/// Upper bound for `reward_rate` (reward base units per second, pool-wide).
///
/// The accumulator is never reset, so the limit is on its running total:
/// `acc_reward_per_principal ≤ rate × staked_seconds × ACC_PRECISION` when a
/// single unit is staked. At this cap that stays below `i128::MAX` for more
/// than 5,000 years of accrual, whatever the settlement frequency.
/// `principal × (acc − reward_debt)` has the same bound since a position
/// never holds more than `total_principal`.
pub const MAX_REWARD_RATE: i128 = 1_000_000_000_000_000;

// ── State ───────────────────────────────────────────────────────────────────

/// Pool-wide accrual state.
///
/// `reward_rate` is the number of reward base units emitted **per second
/// across the whole pool**, split between participants in proportion to
/// their principal. `acc_reward_per_principal` is scaled by [`ACC_PRECISION`].
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub reward_rate: i128,
    pub total_principal: i128,
    pub acc_reward_per_principal: i128,
    pub last_accrual_time: u64,
}

/// One participant's stake position.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Token quantity (staking) or number of staked NFTs (farming).
    pub principal_amount: i128,
    /// Accumulator snapshot taken at the last settlement.
    pub reward_debt: i128,
    /// Settled reward not yet paid out.
    pub pending_reward: i128,
}

// ── Core math ───────────────────────────────────────────────────────────────

/// Accumulator increase for `elapsed` seconds at `reward_rate` shared by
/// `total_principal` units:
///
/// ```text
/// Δacc = reward_rate × elapsed × ACC_PRECISION / total_principal
/// ```
///
/// Division truncates toward zero. Returns `0` when nobody is staked.
pub fn reward_per_principal(
    reward_rate: i128,
    elapsed: u64,
    total_principal: i128,
) -> Result<i128, PoolError> {
    if total_principal <= 0 || elapsed == 0 {
        return Ok(0);
    }

    reward_rate
        .checked_mul(i128::from(elapsed))
        .and_then(|v| v.checked_mul(ACC_PRECISION))
        .and_then(|v| v.checked_div(total_principal))
        .ok_or(PoolError::ArithmeticOverflow)
}

/// Reward earned by `principal` while the accumulator moved from
/// `reward_debt` to `acc`:
///
/// ```text
/// owed = principal × (acc − reward_debt) / ACC_PRECISION
/// ```
pub fn accrued(principal: i128, acc: i128, reward_debt: i128) -> Result<i128, PoolError> {
    let delta = acc
        .checked_sub(reward_debt)
        .ok_or(PoolError::ArithmeticOverflow)?;
    if delta < 0 {
        // The accumulator never decreases, so a debt above it is corrupt state.
        return Err(PoolError::ArithmeticOverflow);
    }

    principal
        .checked_mul(delta)
        .and_then(|v| v.checked_div(ACC_PRECISION))
        .ok_or(PoolError::ArithmeticOverflow)
}

impl PoolState {
    pub fn new(reward_rate: i128, now: u64) -> Self {
        Self {
            reward_rate,
            total_principal: 0,
            acc_reward_per_principal: 0,
            last_accrual_time: now,
        }
    }

    /// Global settlement: bring the accumulator up to `now` at the rate in
    /// force, then advance `last_accrual_time`.
    ///
    /// Time that passes with no principal staked is not distributed.
    /// A `now` earlier than the last settlement leaves the state untouched.
    pub fn accumulate(&mut self, now: u64) -> Result<(), PoolError> {
        if now <= self.last_accrual_time {
            return Ok(());
        }
        let elapsed = now - self.last_accrual_time;

        let delta = reward_per_principal(self.reward_rate, elapsed, self.total_principal)?;
        self.acc_reward_per_principal = self
            .acc_reward_per_principal
            .checked_add(delta)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.last_accrual_time = now;
        Ok(())
    }

    /// Accumulator value as of `now`, without mutating the stored state.
    pub fn preview_acc(&self, now: u64) -> Result<i128, PoolError> {
        let mut projected = self.clone();
        projected.accumulate(now)?;
        Ok(projected.acc_reward_per_principal)
    }

    pub fn add_principal(&mut self, units: i128) -> Result<(), PoolError> {
        self.total_principal = self
            .total_principal
            .checked_add(units)
            .ok_or(PoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn remove_principal(&mut self, units: i128) -> Result<(), PoolError> {
        if units > self.total_principal {
            return Err(PoolError::InsufficientPrincipal);
        }
        self.total_principal -= units;
        Ok(())
    }
}

impl Position {
    /// Per-position settlement against an already-accumulated `acc`.
    ///
    /// Moves everything earned since the last snapshot into `pending_reward`
    /// and re-bases `reward_debt`. Returns the newly credited amount.
    pub fn settle(&mut self, acc: i128) -> Result<i128, PoolError> {
        let owed = accrued(self.principal_amount, acc, self.reward_debt)?;
        self.pending_reward = self
            .pending_reward
            .checked_add(owed)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.reward_debt = acc;
        Ok(owed)
    }

    /// Total reward this position could claim if settled at `acc`.
    pub fn entitlement(&self, acc: i128) -> Result<i128, PoolError> {
        accrued(self.principal_amount, acc, self.reward_debt)?
            .checked_add(self.pending_reward)
            .ok_or(PoolError::ArithmeticOverflow)
    }

    pub fn deposit(&mut self, units: i128) -> Result<(), PoolError> {
        self.principal_amount = self
            .principal_amount
            .checked_add(units)
            .ok_or(PoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, units: i128) -> Result<(), PoolError> {
        if units > self.principal_amount {
            return Err(PoolError::InsufficientPrincipal);
        }
        self.principal_amount -= units;
        Ok(())
    }

    /// No principal and nothing left to pay.
    pub fn is_empty(&self) -> bool {
        self.principal_amount == 0 && self.pending_reward == 0
    }
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
