use common::{nft::NftClient, storage::extend_persistent, PoolError, PrincipalLedger};
use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::events;

// Persistent registry keys.
const DEPOSITOR: Symbol = symbol_short!("NFT_DEP");
const STAKED_IDS: Symbol = symbol_short!("NFT_IDS");

fn depositor_key(token_id: u64) -> (Symbol, u64) {
    (DEPOSITOR, token_id)
}

fn staked_ids_key(participant: &Address) -> (Symbol, Address) {
    (STAKED_IDS, participant.clone())
}

/// Who staked `token_id`, if it is currently in the pool.
pub fn depositor(env: &Env, token_id: u64) -> Option<Address> {
    let key = depositor_key(token_id);
    let who: Option<Address> = env.storage().persistent().get(&key);
    if who.is_some() {
        extend_persistent(env, &key);
    }
    who
}

/// Ids staked by `participant`, in deposit order.
pub fn staked_ids(env: &Env, participant: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&staked_ids_key(participant))
        .unwrap_or_else(|| Vec::new(env))
}

fn save_staked_ids(env: &Env, participant: &Address, ids: &Vec<u64>) {
    let key = staked_ids_key(participant);
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, ids);
    extend_persistent(env, &key);
}

/// NFT-backed principal: one unit per staked token id.
pub struct NftLedger {
    collection: Address,
}

impl NftLedger {
    pub fn new(collection: Address) -> Self {
        Self { collection }
    }
}

impl PrincipalLedger for NftLedger {
    type Unit = u64;

    fn principal_units(&self, _token_id: &u64) -> Result<i128, PoolError> {
        Ok(1)
    }

    fn deposit_principal(
        &self,
        env: &Env,
        participant: &Address,
        token_id: &u64,
    ) -> Result<(), PoolError> {
        if depositor(env, *token_id).is_some() {
            return Err(PoolError::AlreadyStaked);
        }

        let nft = NftClient::new(env, &self.collection);
        match nft.try_owner_of(token_id) {
            Ok(Ok(owner)) if owner == *participant => {}
            _ => return Err(PoolError::NotOwnerOfAsset),
        }

        let key = depositor_key(*token_id);
        env.storage().persistent().set(&key, participant);
        extend_persistent(env, &key);

        let mut ids = staked_ids(env, participant);
        ids.push_back(*token_id);
        save_staked_ids(env, participant, &ids);

        Ok(())
    }

    fn withdraw_principal(
        &self,
        env: &Env,
        participant: &Address,
        token_id: &u64,
    ) -> Result<(), PoolError> {
        match depositor(env, *token_id) {
            Some(owner) if owner == *participant => {}
            _ => return Err(PoolError::NotOwnerOfAsset),
        }

        let mut ids = staked_ids(env, participant);
        let index = ids
            .first_index_of(*token_id)
            .ok_or(PoolError::NotOwnerOfAsset)?;
        ids.remove(index);
        save_staked_ids(env, participant, &ids);
        env.storage().persistent().remove(&depositor_key(*token_id));

        Ok(())
    }

    fn transfer_in(&self, env: &Env, participant: &Address, token_id: &u64) {
        NftClient::new(env, &self.collection).transfer(
            participant,
            &env.current_contract_address(),
            token_id,
        );
        events::publish_nft_deposited(env, participant.clone(), *token_id);
    }

    fn transfer_out(&self, env: &Env, participant: &Address, token_id: &u64) {
        NftClient::new(env, &self.collection).transfer(
            &env.current_contract_address(),
            participant,
            token_id,
        );
        events::publish_nft_withdrawn(env, participant.clone(), *token_id);
    }

    fn held_units(&self, env: &Env, participant: &Address) -> Vec<u64> {
        staked_ids(env, participant)
    }
}
