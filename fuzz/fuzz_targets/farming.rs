#![no_main]

use arbitrary::Arbitrary;
use farming::{FarmingContract, FarmingContractClient};
use libfuzzer_sys::fuzz_target;
use mock_nft::{MockNft, MockNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

const TOKENS: u64 = 8;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { token: u8 },
    Unstake { token: u8 },
    Claim,
    Exit,
    SetRate { rate: u32 },
    Advance { secs: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let owner = Address::generate(&env);
    let nft = MockNftClient::new(&env, &env.register(MockNft, ()));
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(FarmingContract, ());
    let client = FarmingContractClient::new(&env, &contract_id);
    client.initialize(&owner, &nft.address, &reward_token, &1_000);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000);

    let users: Vec<Address> = (0..3).map(|_| Address::generate(&env)).collect();
    for id in 0..TOKENS {
        nft.mint(&users[id as usize % users.len()], &id);
    }

    let mut now: u64 = 0;

    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { token } => {
                let _ = client.try_stake(caller, &(u64::from(token) % TOKENS));
            }
            FuzzAction::Unstake { token } => {
                let _ = client.try_unstake(caller, &(u64::from(token) % TOKENS));
            }
            FuzzAction::Claim => {
                let _ = client.try_claim(caller);
            }
            FuzzAction::Exit => {
                let _ = client.try_exit(caller);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_set_reward_rate(&owner, &i128::from(rate));
            }
            FuzzAction::Advance { secs } => {
                now = now.saturating_add(u64::from(secs));
                env.ledger().set_timestamp(now);
            }
        }

        // Custody and the registry never disagree.
        let listed: u32 = users.iter().map(|u| client.get_staked_ids(u).len()).sum();
        assert_eq!(client.get_total_principal(), i128::from(listed));
        assert_eq!(nft.balance(&contract_id), listed);
    }
});
