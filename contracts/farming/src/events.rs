#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

/// Fired when an NFT moves between a participant and the farm.
///
/// Complements the shared `STAKED`/`UNSTAKED` events, which only carry unit
/// counts, with the token id itself.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftMovedEvent {
    pub participant: Address,
    pub token_id: u64,
    pub timestamp: u64,
}

pub fn publish_nft_deposited(env: &Env, participant: Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("NFT_IN"), participant.clone()),
        NftMovedEvent {
            participant,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_nft_withdrawn(env: &Env, participant: Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("NFT_OUT"), participant.clone()),
        NftMovedEvent {
            participant,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}
