extern crate std;

use common::{
    storage::{TTL_EXTEND_TO, TTL_THRESHOLD},
    PoolError,
};
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger as _},
    Address, Env,
};

use crate::{StakingContract, StakingContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_token.address(), &reward_token.address(), &10);

    (env, client, owner)
}

fn instance_ttl(env: &Env, client: &StakingContractClient) -> u32 {
    env.as_contract(&client.address, || env.storage().instance().get_ttl())
}

/// Advance the ledger until the pool's instance entry needs extending.
fn age_instance(env: &Env, client: &StakingContractClient) {
    let sequence = env.ledger().sequence();
    env.ledger()
        .set_sequence_number(sequence + TTL_EXTEND_TO - TTL_THRESHOLD + 1);
    assert!(instance_ttl(env, client) < TTL_THRESHOLD);
}

// ── Two-step transfer ────────────────────────────────────────────────────────

#[test]
fn test_propose_and_accept_ownership() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.propose_owner(&owner, &candidate);
    assert_eq!(client.get_pending_owner(), Some(candidate.clone()));
    // Nothing changes until the candidate accepts.
    assert_eq!(client.get_owner(), owner);

    client.accept_ownership(&candidate);
    assert_eq!(client.get_owner(), candidate);
    assert_eq!(client.get_pending_owner(), None);
}

#[test]
fn test_new_owner_gains_and_old_owner_loses_rights() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.propose_owner(&owner, &candidate);
    client.accept_ownership(&candidate);

    client.set_reward_rate(&candidate, &20);
    assert_eq!(client.get_reward_rate(), 20);

    assert_eq!(
        client.try_set_reward_rate(&owner, &30).unwrap_err().unwrap(),
        PoolError::Unauthorized
    );
    assert_eq!(
        client.try_pause(&owner).unwrap_err().unwrap(),
        PoolError::Unauthorized
    );
}

#[test]
fn test_propose_by_non_owner_fails() {
    let (env, client, _owner) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_propose_owner(&intruder, &intruder);
    assert_eq!(result.unwrap_err().unwrap(), PoolError::Unauthorized);
    assert_eq!(client.get_pending_owner(), None);
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);
    let mistyped = Address::generate(&env);

    client.propose_owner(&owner, &candidate);

    let result = client.try_accept_ownership(&mistyped);
    assert_eq!(result.unwrap_err().unwrap(), PoolError::Unauthorized);
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _owner) = setup();
    let someone = Address::generate(&env);

    let result = client.try_accept_ownership(&someone);
    assert_eq!(result.unwrap_err().unwrap(), PoolError::NoPendingOwner);
}

#[test]
fn test_cancel_ownership_transfer() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.propose_owner(&owner, &candidate);
    client.cancel_ownership_transfer(&owner);
    assert_eq!(client.get_pending_owner(), None);

    let result = client.try_accept_ownership(&candidate);
    assert_eq!(result.unwrap_err().unwrap(), PoolError::NoPendingOwner);
}

#[test]
fn test_cancel_without_proposal_fails() {
    let (_env, client, owner) = setup();

    let result = client.try_cancel_ownership_transfer(&owner);
    assert_eq!(result.unwrap_err().unwrap(), PoolError::NoPendingOwner);
}

#[test]
fn test_repropose_replaces_candidate() {
    let (env, client, owner) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.propose_owner(&owner, &first);
    client.propose_owner(&owner, &second);

    assert_eq!(
        client.try_accept_ownership(&first).unwrap_err().unwrap(),
        PoolError::Unauthorized
    );
    client.accept_ownership(&second);
    assert_eq!(client.get_owner(), second);
}

// ── Storage lifetime ─────────────────────────────────────────────────────────

#[test]
fn test_pause_and_unpause_extend_instance_ttl() {
    let (env, client, owner) = setup();

    age_instance(&env, &client);
    client.pause(&owner);
    assert_eq!(instance_ttl(&env, &client), TTL_EXTEND_TO);

    age_instance(&env, &client);
    client.unpause(&owner);
    assert_eq!(instance_ttl(&env, &client), TTL_EXTEND_TO);
}

#[test]
fn test_cancel_ownership_transfer_extends_instance_ttl() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.propose_owner(&owner, &candidate);
    age_instance(&env, &client);
    client.cancel_ownership_transfer(&owner);

    assert_eq!(instance_ttl(&env, &client), TTL_EXTEND_TO);
}
