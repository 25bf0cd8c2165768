//! Generic pool operations shared by the farming and staking facades.
//!
//! Every principal- or reward-affecting operation settles first, then
//! mutates and persists the ledger, and only then calls out to an asset
//! contract. Settlement running unconditionally at the start of each call is
//! what makes reward accounting independent of call order.

use soroban_sdk::{contracttype, token, Address, Env};

use crate::{
    accrual::{PoolState, Position},
    config::{self, PoolConfig},
    events,
    guard::ReentrancyGuard,
    ledger::PrincipalLedger,
    ownership, pause, storage, PoolError,
};

// ── Public-facing types ─────────────────────────────────────────────────────

/// Snapshot of a participant's position returned by `get_position`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub principal_amount: i128,
    pub reward_debt: i128,
    /// Reward settled at the last interaction.
    pub pending_reward: i128,
    /// Reward claimable right now, including accrual since the last interaction.
    pub claimable: i128,
}

/// What `exit` returned to the participant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExitSummary {
    pub principal: i128,
    pub reward: i128,
}

// ── Validation ──────────────────────────────────────────────────────────────

/// Rejects zero and negative token amounts.
pub fn check_amount(amount: i128) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::InvalidAmount);
    }
    if amount == 0 {
        return Err(PoolError::ZeroAmount);
    }
    Ok(())
}

// ── Settlement ──────────────────────────────────────────────────────────────

/// Loads the pool state and `participant`'s position and settles both up to
/// the current ledger timestamp. Nothing is written; callers persist the
/// returned values once their own mutation succeeds.
pub fn settle(env: &Env, participant: &Address) -> Result<(PoolState, Position), PoolError> {
    let mut state = storage::load_state(env)?;
    state.accumulate(env.ledger().timestamp())?;

    let mut position = storage::load_position(env, participant);
    position.settle(state.acc_reward_per_principal)?;

    Ok((state, position))
}

fn persist(env: &Env, participant: &Address, state: &PoolState, position: &Position) {
    storage::save_state(env, state);
    storage::save_position(env, participant, position);
    storage::extend_instance(env);
}

// ── Principal ───────────────────────────────────────────────────────────────

/// Deposit `unit` into `participant`'s position.
///
/// Reward owed under the old principal is settled before the amount
/// changes, so the new deposit never earns retroactively.
pub fn stake<L: PrincipalLedger>(
    env: &Env,
    ledger: &L,
    participant: Address,
    unit: L::Unit,
) -> Result<(), PoolError> {
    config::load(env)?;
    participant.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;
    pause::require_not_paused(env)?;

    let units = ledger.principal_units(&unit)?;
    let (mut state, mut position) = settle(env, &participant)?;

    ledger.deposit_principal(env, &participant, &unit)?;
    position.deposit(units)?;
    state.add_principal(units)?;
    persist(env, &participant, &state, &position);

    ledger.transfer_in(env, &participant, &unit);

    events::publish_staked(env, &participant, units, &position, &state);

    Ok(())
}

/// Withdraw `unit` from `participant`'s position and return the asset.
/// Never blocked by `pause`.
pub fn unstake<L: PrincipalLedger>(
    env: &Env,
    ledger: &L,
    participant: Address,
    unit: L::Unit,
) -> Result<i128, PoolError> {
    config::load(env)?;
    participant.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    withdraw(env, ledger, &participant, &unit)
}

fn withdraw<L: PrincipalLedger>(
    env: &Env,
    ledger: &L,
    participant: &Address,
    unit: &L::Unit,
) -> Result<i128, PoolError> {
    let units = ledger.principal_units(unit)?;
    let (mut state, mut position) = settle(env, participant)?;

    ledger.withdraw_principal(env, participant, unit)?;
    position.withdraw(units)?;
    state.remove_principal(units)?;
    persist(env, participant, &state, &position);

    ledger.transfer_out(env, participant, unit);

    events::publish_unstaked(env, participant, units, &position, &state);

    Ok(units)
}

// ── Rewards ─────────────────────────────────────────────────────────────────

/// Settle and pay out everything `participant` has earned.
///
/// Returns `0` without error when nothing is owed. A claim the pool cannot
/// fully cover fails with `InsufficientRewardBalance` and leaves the pending
/// reward in place for a later retry.
pub fn claim(env: &Env, participant: Address) -> Result<i128, PoolError> {
    let config = config::load(env)?;
    participant.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    pay_reward(env, &config, &participant)
}

fn pay_reward(env: &Env, config: &PoolConfig, participant: &Address) -> Result<i128, PoolError> {
    let (state, mut position) = settle(env, participant)?;

    let amount = position.pending_reward;
    if amount == 0 {
        persist(env, participant, &state, &position);
        return Ok(0);
    }

    let reward_token = token::Client::new(env, &config.reward_asset);
    let available = reward_token.balance(&env.current_contract_address());
    if available < amount {
        return Err(PoolError::InsufficientRewardBalance);
    }

    position.pending_reward = 0;
    persist(env, participant, &state, &position);

    reward_token.transfer(&env.current_contract_address(), participant, &amount);

    events::publish_reward_claimed(env, participant, amount, &state);

    Ok(amount)
}

/// Withdraw all principal and claim all reward in one call.
///
/// Atomic: if the reward cannot be paid the principal stays staked too.
/// `unstake` remains available to recover principal from an unfunded pool.
pub fn exit<L: PrincipalLedger>(
    env: &Env,
    ledger: &L,
    participant: Address,
) -> Result<ExitSummary, PoolError> {
    let config = config::load(env)?;
    participant.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let mut principal: i128 = 0;
    for unit in ledger.held_units(env, &participant).iter() {
        let units = withdraw(env, ledger, &participant, &unit)?;
        principal = principal
            .checked_add(units)
            .ok_or(PoolError::ArithmeticOverflow)?;
    }

    let reward = pay_reward(env, &config, &participant)?;

    Ok(ExitSummary { principal, reward })
}

/// Move `amount` reward tokens from `funder` into the pool.
pub fn fund_rewards(env: &Env, funder: Address, amount: i128) -> Result<(), PoolError> {
    let config = config::load(env)?;
    funder.require_auth();
    check_amount(amount)?;

    token::Client::new(env, &config.reward_asset).transfer(
        &funder,
        &env.current_contract_address(),
        &amount,
    );
    storage::extend_instance(env);

    events::publish_rewards_funded(env, funder, amount);

    Ok(())
}

// ── Rate controller ─────────────────────────────────────────────────────────

/// Replace the reward rate.
///
/// The accumulator is flushed at the *old* rate up to now before the new
/// rate is installed, so reward for elapsed time is never repriced.
pub fn set_reward_rate(env: &Env, caller: Address, new_rate: i128) -> Result<(), PoolError> {
    config::load(env)?;
    caller.require_auth();
    ownership::require_owner(env, &caller)?;
    config::check_rate(new_rate)?;

    let mut state = storage::load_state(env)?;
    state.accumulate(env.ledger().timestamp())?;
    let old_rate = state.reward_rate;
    state.reward_rate = new_rate;
    storage::save_state(env, &state);
    storage::extend_instance(env);

    events::publish_reward_rate_set(env, old_rate, &state);

    Ok(())
}

// ── Views ───────────────────────────────────────────────────────────────────

/// Real-time claimable reward for `participant`, without mutating state.
pub fn pending_rewards(env: &Env, participant: &Address) -> Result<i128, PoolError> {
    let state = storage::load_state(env)?;
    let acc = state.preview_acc(env.ledger().timestamp())?;
    storage::load_position(env, participant).entitlement(acc)
}

pub fn position_info(env: &Env, participant: &Address) -> Result<PositionInfo, PoolError> {
    let state = storage::load_state(env)?;
    let acc = state.preview_acc(env.ledger().timestamp())?;
    let position = storage::load_position(env, participant);

    Ok(PositionInfo {
        principal_amount: position.principal_amount,
        reward_debt: position.reward_debt,
        pending_reward: position.pending_reward,
        claimable: position.entitlement(acc)?,
    })
}

/// Reward tokens currently held by the pool.
pub fn reward_balance(env: &Env) -> Result<i128, PoolError> {
    let config = config::load(env)?;
    Ok(token::Client::new(env, &config.reward_asset).balance(&env.current_contract_address()))
}
