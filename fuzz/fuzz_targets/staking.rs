#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: i64 },
    Unstake { amount: i64 },
    Claim,
    Exit,
    SetRate { rate: u32 },
    Pause,
    Unpause,
    Advance { secs: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let owner = Address::generate(&env);
    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    client.initialize(&owner, &stake_token, &reward_token, &1_000);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000);

    let mut users = vec![owner.clone()];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }
    for user in &users {
        StellarAssetClient::new(&env, &stake_token).mint(user, &(i64::MAX as i128));
    }

    let stake = TokenClient::new(&env, &stake_token);
    let mut now: u64 = 0;

    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &i128::from(amount));
            }
            FuzzAction::Unstake { amount } => {
                let _ = client.try_unstake(caller, &i128::from(amount));
            }
            FuzzAction::Claim => {
                let _ = client.try_claim(caller);
            }
            FuzzAction::Exit => {
                let _ = client.try_exit(caller);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_set_reward_rate(caller, &i128::from(rate));
            }
            FuzzAction::Pause => {
                let _ = client.try_pause(caller);
            }
            FuzzAction::Unpause => {
                let _ = client.try_unpause(caller);
            }
            FuzzAction::Advance { secs } => {
                now = now.saturating_add(u64::from(secs));
                env.ledger().set_timestamp(now);
            }
        }

        // Principal held by the pool always matches the ledger.
        let staked: i128 = users.iter().map(|u| client.get_staked(u)).sum();
        let total = client.get_total_principal();
        assert_eq!(total, staked);
        assert_eq!(stake.balance(&contract_id), total);
    }
});
