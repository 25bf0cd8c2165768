#![no_std]

pub mod events;
pub mod ledger;

use common::{
    config, ownership, pause, pool, storage, ExitSummary, PoolConfig, PoolError, PoolState,
    PositionInfo,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use ledger::NftLedger;

// ── Contract ─────────────────────────────────────────────────────────────────

/// NFT farm: each staked token id counts as one unit of principal and earns
/// an equal share of the pool-wide reward emission.
#[contract]
pub struct FarmingContract;

#[contractimpl]
impl FarmingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the farm.
    ///
    /// * `nft`          – collection whose tokens may be staked.
    /// * `reward_token` – SEP-41 token paid out as rewards.
    /// * `reward_rate`  – reward base units emitted **per second** across all
    ///   staked NFTs; the accumulator is scaled by `common::ACC_PRECISION`.
    pub fn initialize(
        env: Env,
        owner: Address,
        nft: Address,
        reward_token: Address,
        reward_rate: i128,
    ) -> Result<(), PoolError> {
        config::initialize(&env, owner, nft, reward_token, reward_rate)
    }

    // ── Farming ─────────────────────────────────────────────────────────────

    /// Stake `token_id`. The caller must own it; the farm takes custody.
    pub fn stake(env: Env, participant: Address, token_id: u64) -> Result<(), PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::stake(&env, &ledger, participant, token_id)
    }

    /// Return `token_id` to the participant who staked it.
    pub fn unstake(env: Env, participant: Address, token_id: u64) -> Result<(), PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::unstake(&env, &ledger, participant, token_id)?;
        Ok(())
    }

    /// Claim all accrued rewards. Returns the amount paid (possibly zero).
    pub fn claim(env: Env, participant: Address) -> Result<i128, PoolError> {
        pool::claim(&env, participant)
    }

    /// Unstake every NFT the participant has in the farm and claim rewards.
    pub fn exit(env: Env, participant: Address) -> Result<ExitSummary, PoolError> {
        let ledger = Self::ledger(&env)?;
        pool::exit(&env, &ledger, participant)
    }

    /// Move reward tokens from `funder` into the farm.
    pub fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<(), PoolError> {
        pool::fund_rewards(&env, funder, amount)
    }

    // ── Owner functions ─────────────────────────────────────────────────────

    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), PoolError> {
        pool::set_reward_rate(&env, caller, new_rate)
    }

    /// Block new stakes. Unstake, claim and exit keep working.
    pub fn pause(env: Env, caller: Address) -> Result<(), PoolError> {
        pause::pause(&env, caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), PoolError> {
        pause::unpause(&env, caller)
    }

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

    pub fn get_position(env: Env, participant: Address) -> Result<PositionInfo, PoolError> {
        pool::position_info(&env, &participant)
    }

    pub fn get_pending_rewards(env: Env, participant: Address) -> Result<i128, PoolError> {
        pool::pending_rewards(&env, &participant)
    }

    /// Token ids the participant has staked, in deposit order.
    pub fn get_staked_ids(env: Env, participant: Address) -> Vec<u64> {
        ledger::staked_ids(&env, &participant)
    }

    pub fn get_depositor(env: Env, token_id: u64) -> Option<Address> {
        ledger::depositor(&env, token_id)
    }

    /// Accrual state as of the last settlement.
    pub fn get_pool_state(env: Env) -> Result<PoolState, PoolError> {
        storage::load_state(&env)
    }

    pub fn get_reward_rate(env: Env) -> Result<i128, PoolError> {
        Ok(storage::load_state(&env)?.reward_rate)
    }

    /// Number of NFTs currently staked.
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

    fn ledger(env: &Env) -> Result<NftLedger, PoolError> {
        Ok(NftLedger::new(config::load(env)?.principal_asset))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
