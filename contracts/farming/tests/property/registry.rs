//! Custody registry invariants under random farming sequences.
//!
//! Invariants tested after every step:
//! - every token id is either with its holder and unregistered, or in the
//!   farm's custody and listed exactly once under its depositor
//! - `total_principal` equals the number of ids in custody
//! - paid + outstanding reward never exceeds what the rate emitted

use farming::{FarmingContract, FarmingContractClient};
use mock_nft::{MockNft, MockNftClient};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};

const PARTICIPANTS: usize = 3;
const TOKENS: u64 = 6;
const RATE: i128 = 12;

#[derive(Debug, Clone, Arbitrary)]
enum Action {
    Stake { who: u8, token: u8 },
    Unstake { who: u8, token: u8 },
    Claim { who: u8 },
    Exit { who: u8 },
    Advance { secs: u16 },
}

struct Harness {
    env: Env,
    client: FarmingContractClient<'static>,
    nft: MockNftClient<'static>,
    reward_token: Address,
    participants: Vec<Address>,
}

fn setup() -> Harness {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let nft = MockNftClient::new(&env, &env.register(MockNft, ()));
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(FarmingContract, ());
    let client = FarmingContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env), &nft.address, &reward_token, &RATE);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000_000);

    let participants: Vec<Address> = (0..PARTICIPANTS).map(|_| Address::generate(&env)).collect();
    // Token `id` belongs to participant `id % PARTICIPANTS`.
    for id in 0..TOKENS {
        nft.mint(&participants[id as usize % PARTICIPANTS], &id);
    }

    Harness {
        env,
        client,
        nft,
        reward_token,
        participants,
    }
}

impl Harness {
    fn who(&self, index: u8) -> &Address {
        &self.participants[index as usize % PARTICIPANTS]
    }

    fn token(index: u8) -> u64 {
        u64::from(index) % TOKENS
    }

    fn accounted(&self) -> i128 {
        let reward = TokenClient::new(&self.env, &self.reward_token);
        self.participants
            .iter()
            .map(|p| reward.balance(p) + self.client.get_pending_rewards(p))
            .sum()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_custody_registry_consistent(
        actions in proptest::collection::vec(any::<Action>(), 1..30),
    ) {
        let h = setup();
        let farm = h.client.address.clone();
        let mut now: u64 = 0;
        let mut emitted: i128 = 0;

        for action in actions {
            match action {
                Action::Stake { who, token } => {
                    let _ = h.client.try_stake(h.who(who), &Harness::token(token));
                }
                Action::Unstake { who, token } => {
                    let _ = h.client.try_unstake(h.who(who), &Harness::token(token));
                }
                Action::Claim { who } => {
                    let _ = h.client.try_claim(h.who(who));
                }
                Action::Exit { who } => {
                    let _ = h.client.try_exit(h.who(who));
                }
                Action::Advance { secs } => {
                    if h.client.get_total_principal() > 0 {
                        emitted += RATE * i128::from(secs);
                    }
                    now += u64::from(secs);
                    h.env.ledger().set_timestamp(now);
                }
            }

            let mut in_custody: i128 = 0;
            for id in 0..TOKENS {
                let holder = &h.participants[id as usize % PARTICIPANTS];
                match h.client.get_depositor(&id) {
                    Some(depositor) => {
                        prop_assert_eq!(&depositor, holder);
                        prop_assert_eq!(h.nft.owner_of(&id), farm.clone());
                        let listed = h
                            .client
                            .get_staked_ids(&depositor)
                            .iter()
                            .filter(|staked| *staked == id)
                            .count();
                        prop_assert_eq!(listed, 1);
                        in_custody += 1;
                    }
                    None => {
                        prop_assert_eq!(&h.nft.owner_of(&id), holder);
                    }
                }
            }

            let listed_total: u32 = h
                .participants
                .iter()
                .map(|p| h.client.get_staked_ids(p).len())
                .sum();
            prop_assert_eq!(i128::from(listed_total), in_custody);
            prop_assert_eq!(h.client.get_total_principal(), in_custody);

            let accounted = h.accounted();
            prop_assert!(accounted <= emitted, "accounted {} > emitted {}", accounted, emitted);
        }
    }

    /// Rewards follow NFT count: a participant with `n` staked ids earns `n`
    /// times what a participant with one earns.
    #[test]
    fn prop_reward_scales_with_nft_count(
        count in 1u64..=2,
        secs in 1u64..=10_000,
    ) {
        let h = setup();
        let many = h.participants[0].clone();
        let one = h.participants[1].clone();

        // Participant 0 owns 0, 3; participant 1 owns 1, 4.
        for k in 0..count {
            h.client.stake(&many, &(k * PARTICIPANTS as u64));
        }
        h.client.stake(&one, &1);

        h.env.ledger().set_timestamp(secs);
        let r_many = h.client.get_pending_rewards(&many);
        let r_one = h.client.get_pending_rewards(&one);

        let skew = (r_many - r_one * count as i128).abs();
        prop_assert!(skew <= count as i128, "skew {} for {} nfts", skew, count);
        prop_assert!(r_many + r_one <= RATE * secs as i128);
    }
}
