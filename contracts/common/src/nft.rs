use soroban_sdk::{contractclient, Address, Env};

/// Interface the farming pool expects from its NFT collection.
///
/// Only ownership lookup and transfer are used. `transfer` must require
/// `from`'s authorisation and fail if `from` does not own `token_id`.
#[allow(dead_code)]
#[contractclient(name = "NftClient")]
pub trait NonFungibleToken {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}
