#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Fairness of the reward split.
//!
//! Two participants staking `p1` and `p2` at the same timestamp must end up
//! with rewards in ratio `p1:p2`, whatever order their calls land in.

use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};
use staking::{StakingContract, StakingContractClient};

fn setup(rate: i128) -> (Env, StakingContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env), &stake_token, &reward_token, &rate);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000_000);

    (env, client, stake_token)
}

fn funded(env: &Env, stake_token: &Address, amount: i128) -> Address {
    let who = Address::generate(env);
    StellarAssetClient::new(env, stake_token).mint(&who, &amount);
    who
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rewards_proportional_to_principal(
        p1 in 1i128..=1_000_000,
        p2 in 1i128..=1_000_000,
        rate in 1i128..=10_000,
        secs in 1u64..=50_000,
        a_first in any::<bool>(),
        claim_midway in any::<bool>(),
    ) {
        let (env, client, stake_token) = setup(rate);
        let a = funded(&env, &stake_token, p1);
        let b = funded(&env, &stake_token, p2);

        if a_first {
            client.stake(&a, &p1);
            client.stake(&b, &p2);
        } else {
            client.stake(&b, &p2);
            client.stake(&a, &p1);
        }

        let mut paid_a = 0;
        if claim_midway {
            env.ledger().set_timestamp(secs / 2);
            paid_a = client.claim(&a);
        }

        env.ledger().set_timestamp(secs);
        let r1 = paid_a + client.get_pending_rewards(&a);
        let r2 = client.get_pending_rewards(&b);

        // r_i = p_i × acc / P − e_i with 0 ≤ e_i < 1 per settlement, so the
        // cross products differ by less than max(p1, p2) per settlement.
        let skew = (p2 * r1 - p1 * r2).abs();
        prop_assert!(skew < 2 * p1.max(p2), "skew {} for {}:{}", skew, p1, p2);
        prop_assert!(r1 + r2 <= rate * secs as i128);
    }

    #[test]
    fn prop_two_stakers_scenario_exact(rate in 1i128..=1_000) {
        // 100 and 300 staked at t=0; emission 4·rate per 4 s divides evenly.
        let (env, client, stake_token) = setup(rate);
        let a = funded(&env, &stake_token, 100);
        let b = funded(&env, &stake_token, 300);
        client.stake(&a, &100);
        client.stake(&b, &300);

        env.ledger().set_timestamp(4);
        let r1 = client.get_pending_rewards(&a);
        let r2 = client.get_pending_rewards(&b);
        prop_assert_eq!(r1 * 3, r2);
        prop_assert_eq!(r1 + r2, rate * 4);
    }
}
