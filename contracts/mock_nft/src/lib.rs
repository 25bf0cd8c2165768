//! Minimal mintable NFT collection for exercising the farming pool.
//!
//! Minting is open to anyone; this contract exists for tests only.

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");
const BALANCE: Symbol = symbol_short!("BAL");

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum NftError {
    AlreadyMinted = 1,
    TokenNotFound = 2,
    NotTokenOwner = 3,
    BalanceOverflow = 4,
}

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u64) -> Result<(), NftError> {
        let key = (OWNER, token_id);
        if env.storage().persistent().has(&key) {
            return Err(NftError::AlreadyMinted);
        }
        env.storage().persistent().set(&key, &to);
        Self::adjust_balance(&env, &to, 1)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftError> {
        env.storage()
            .persistent()
            .get(&(OWNER, token_id))
            .ok_or(NftError::TokenNotFound)
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&(BALANCE, owner))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), NftError> {
        from.require_auth();

        let current = Self::owner_of(env.clone(), token_id)?;
        if current != from {
            return Err(NftError::NotTokenOwner);
        }

        env.storage().persistent().set(&(OWNER, token_id), &to);
        Self::adjust_balance(&env, &from, -1)?;
        Self::adjust_balance(&env, &to, 1)
    }

    fn adjust_balance(env: &Env, owner: &Address, delta: i64) -> Result<(), NftError> {
        let key = (BALANCE, owner.clone());
        let current: u32 = env.storage().persistent().get(&key).unwrap_or(0);
        let next = i64::from(current)
            .checked_add(delta)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(NftError::BalanceOverflow)?;
        env.storage().persistent().set(&key, &next);
        Ok(())
    }
}
