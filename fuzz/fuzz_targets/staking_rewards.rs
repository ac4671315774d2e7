#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::StellarAssetClient,
    Address, Bytes, Env,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

const STAKERS: usize = 4;
const WINDOW: u64 = 30 * 86_400;

#[derive(Arbitrary, Debug)]
enum Op {
    Stake { who: u8, amount: u32 },
    Withdraw { who: u8, amount: u32 },
    Claim { who: u8 },
    Exit { who: u8 },
    Advance { seconds: u32 },
    Extend { amount: u32 },
}

fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_000_000);

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let stake_addr = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let reward_addr = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);
    client.initialize(&owner, &stake_addr, &reward_addr, &WINDOW);

    let stake_sac = StellarAssetClient::new(&env, &stake_addr);
    let reward_sac = StellarAssetClient::new(&env, &reward_addr);

    let stakers: Vec<Address> = (0..STAKERS)
        .map(|_| {
            let staker = Address::generate(&env);
            stake_sac.mint(&staker, &i128::from(u32::MAX));
            staker
        })
        .collect();

    for op in ops.iter().take(64) {
        match *op {
            Op::Stake { who, amount } => {
                let staker = &stakers[who as usize % STAKERS];
                let _ = client.try_stake(staker, &i128::from(amount), &Bytes::new(&env));
            }
            Op::Withdraw { who, amount } => {
                let staker = &stakers[who as usize % STAKERS];
                let _ = client.try_withdraw(staker, &i128::from(amount));
            }
            Op::Claim { who } => {
                client.get_reward(&stakers[who as usize % STAKERS]);
            }
            Op::Exit { who } => {
                client.exit(&stakers[who as usize % STAKERS]);
            }
            Op::Advance { seconds } => {
                env.ledger()
                    .with_mut(|li| li.timestamp += u64::from(seconds % (7 * 86_400)));
            }
            Op::Extend { amount } => {
                reward_sac.mint(&contract_id, &i128::from(amount));
                client.initialize_or_extend(&owner, &i128::from(amount));
            }
        }

        let sum: i128 = stakers.iter().map(|s| client.balance_of(s)).sum();
        assert_eq!(client.total_supply(), sum);

        let pool = client.get_pool();
        assert!(pool.last_update_time <= pool.period_finish);
        for staker in &stakers {
            let participant = client.get_participant(staker);
            assert!(participant.reward_per_token_paid <= pool.reward_per_token_stored);
        }
    }
});
