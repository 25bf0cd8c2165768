#![no_std]

pub mod ledger;

use common::{
    config, ownership, pause, pool, storage, ExitSummary, PoolConfig, PoolError, PoolState,
    PositionInfo,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use ledger::TokenLedger;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Fungible-token staking pool paying rewards in a separate token.
#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `stake_token`  – SEP-41 token participants deposit.
    /// * `reward_token` – SEP-41 token paid out as rewards; must differ from
    ///   `stake_token` so staked principal can never be paid out as reward.
    /// * `reward_rate`  – reward base units emitted **per second** across all
    ///   stakers; the accumulator is scaled by `common::ACC_PRECISION`.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate: i128,
    ) -> Result<(), PoolError> {
        config::initialize(&env, owner, stake_token, reward_token, reward_rate)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// Rewards owed on the existing balance are settled first, so the new
    /// tokens only earn from this point on.
    pub fn stake(env: Env, participant: Address, amount: i128) -> Result<(), PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::stake(&env, &ledger, participant, amount)
    }

    /// Withdraw `amount` stake tokens. Partial withdrawals are allowed.
    pub fn unstake(env: Env, participant: Address, amount: i128) -> Result<(), PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::unstake(&env, &ledger, participant, amount)?;
        Ok(())
    }

    /// Claim all accumulated rewards for `participant`.
    ///
    /// Fails with `InsufficientRewardBalance`, leaving the reward pending,
    /// if the pool has not been funded enough to pay it in full.
    pub fn claim(env: Env, participant: Address) -> Result<i128, PoolError> {
        pool::claim(&env, participant)
    }

    /// Withdraw the whole balance and claim rewards in one call.
    pub fn exit(env: Env, participant: Address) -> Result<ExitSummary, PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::exit(&env, &ledger, participant)
    }

    pub fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<(), PoolError> {
        pool::fund_rewards(&env, funder, amount)
    }

    // ── Owner functions ─────────────────────────────────────────────────────

    /// Update the reward emission rate.
    ///
    /// The global accumulator is flushed at the current rate *before* the
    /// rate changes, so existing stakers never lose or gain rewards
    /// retroactively.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), PoolError> {
        pool::set_reward_rate(&env, caller, new_rate)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), PoolError> {
        pause::pause(&env, caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), PoolError> {
        pause::unpause(&env, caller)
    }

    /// Propose a new owner. The candidate must call `accept_ownership`.
    pub fn propose_owner(env: Env, caller: Address, candidate: Address) -> Result<(), PoolError> {
        ownership::propose(&env, caller, candidate)
    }

    pub fn accept_ownership(env: Env, candidate: Address) -> Result<(), PoolError> {
        ownership::accept(&env, candidate)
    }

    pub fn cancel_ownership_transfer(env: Env, caller: Address) -> Result<(), PoolError> {
        ownership::cancel(&env, caller)
    }

    // ── View functions ──────────────────────────────────────────────────────

    /// Return the participant's current staked balance.
    pub fn get_staked(env: Env, participant: Address) -> i128 {
        storage::load_position(&env, &participant).principal_amount
    }

    pub fn get_position(env: Env, participant: Address) -> Result<PositionInfo, PoolError> {
        pool::position_info(&env, &participant)
    }

    /// Return real-time pending rewards for a participant without mutating state.
    pub fn get_pending_rewards(env: Env, participant: Address) -> Result<i128, PoolError> {
        pool::pending_rewards(&env, &participant)
    }

    pub fn get_pool_state(env: Env) -> Result<PoolState, PoolError> {
        storage::load_state(&env)
    }

    pub fn get_reward_rate(env: Env) -> Result<i128, PoolError> {
        Ok(storage::load_state(&env)?.reward_rate)
    }

    /// Return the sum of all currently staked tokens.
    pub fn get_total_principal(env: Env) -> Result<i128, PoolError> {
        Ok(storage::load_state(&env)?.total_principal)
    }

    pub fn get_reward_balance(env: Env) -> Result<i128, PoolError> {
        pool::reward_balance(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        config::load(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, PoolError> {
        ownership::owner(&env)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownership::pending_owner(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn ledger(env: &Env) -> Result<TokenLedger, PoolError> {
        Ok(TokenLedger::new(config::load(env)?.principal_asset))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────



#[cfg(test)]
mod test_owner;
