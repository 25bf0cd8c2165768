//! Shared stake-accounting and reward-accrual engine for the reward pools.
//!
//! This crate provides:
//! - [`PoolError`] — the error codes returned by both pool contracts.
//! - [`accrual`] — fixed-point accumulator math ([`PoolState`], [`Position`]).
//! - [`ledger`] — the [`PrincipalLedger`] capability each pool variant implements.
//! - [`pool`] — generic stake / unstake / claim / exit / rate operations.
//! - Ownership, pause, reentrancy-guard and storage helpers.
//!
//! The farming (NFT) and staking (fungible) contracts are thin facades over
//! [`pool`]; only principal bookkeeping differs between them.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod accrual;
pub mod config;
pub mod events;
pub mod guard;
pub mod ledger;
pub mod nft;
pub mod ownership;
pub mod pause;
pub mod pool;
pub mod storage;

pub use accrual::{PoolState, Position, ACC_PRECISION, MAX_REWARD_RATE};
pub use config::PoolConfig;
pub use ledger::PrincipalLedger;
pub use nft::NftClient;
pub use pool::{ExitSummary, PositionInfo};

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes returned by every reward-pool entry point.
///
/// Codes are part of the public interface and must stay stable.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum PoolError {
    // ── Lifecycle ────────────────────────────────────────────
    /// The pool has not been initialised yet.
    NotInitialized = 1,
    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Authorisation ────────────────────────────────────────
    /// Caller is not the pool owner, or not the proposed owner.
    Unauthorized = 3,

    // ── Validation ───────────────────────────────────────────
    /// Reward rate is negative or above [`MAX_REWARD_RATE`].
    InvalidRate = 4,
    /// Zero-amount stake, unstake or funding.
    ZeroAmount = 5,
    /// Negative amount.
    InvalidAmount = 6,

    // ── Principal ────────────────────────────────────────────
    /// Withdrawal exceeds the participant's principal.
    InsufficientPrincipal = 7,
    /// NFT is not owned by the caller, or not held in the caller's position.
    NotOwnerOfAsset = 8,
    /// NFT is already staked in this pool.
    AlreadyStaked = 9,

    // ── Pool state ───────────────────────────────────────────
    /// Staking is paused.
    Paused = 10,
    /// The pool's reward balance cannot cover the claim.
    InsufficientRewardBalance = 11,
    /// Checked arithmetic failed.
    ArithmeticOverflow = 12,
    /// A pool call is already in progress.
    Reentrancy = 13,
    /// No ownership transfer has been proposed.
    NoPendingOwner = 14,
    /// Principal asset and reward asset are the same contract.
    AssetsIdentical = 15,
}
