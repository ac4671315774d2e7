#![no_std]

pub mod distribution;
pub mod events;
pub mod rewards;
pub mod state;
mod storage;

use common::ownership;
use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env};

pub use state::{Config, Participant, PoolState, WindowState};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    TransferFailed = 6,
    InsufficientRewardReserve = 7,
    WindowActive = 8,
    InvalidDuration = 9,
    TokensIdentical = 10,
    ArithmeticOverflow = 11,
    NoPendingOwner = 12,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `stake_token`      – SAC address of the token users stake.
    /// * `reward_token`     – SAC address of the token paid out; must differ
    ///   from `stake_token` so the reserve is never mixed with stakes.
    /// * `rewards_duration` – length in seconds of each distribution window.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if rewards_duration == 0 {
            return Err(ContractError::InvalidDuration);
        }

        ownership::set_owner(&env, &owner);
        storage::set_config(
            &env,
            &Config {
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        storage::set_pool(
            &env,
            &PoolState {
                rewards_duration,
                ..PoolState::default()
            },
        );
        storage::mark_initialized(&env);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, stake_token, reward_token, rewards_duration);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens. `data` is echoed in the `STAKED` event.
    ///
    /// The accumulator is checkpointed first so the new tokens never earn
    /// rewards for time that already passed.
    pub fn stake(env: Env, staker: Address, amount: i128, data: Bytes) -> Result<(), ContractError> {
        let config = Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut pool = storage::get_pool(&env);
        let mut participant = storage::get_participant(&env, &staker);

        // 1. Checkpoint before the denominator changes.
        rewards::checkpoint(&mut pool, Some(&mut participant), now)?;

        // 2. Increase the staker's balance and the global total.
        participant.balance = participant
            .balance
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Self::commit(&env, &staker, &pool, &participant);

        // 3. Pull the tokens; a rejection reverts everything above.
        Self::transfer_in(&env, &config.stake_token, &staker, amount)?;

        log!(&env, "stake", staker, amount, pool.total_staked);
        events::publish_staked(&env, staker, amount, data);

        Ok(())
    }

    /// Return `amount` staked tokens to `staker`.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::require_initialized(&env)?;
        staker.require_auth();
        Self::withdraw_stake(&env, &config, &staker, amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has earned so far. Returns the amount paid,
    /// which is zero (and not an error) when nothing has accrued.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        staker.require_auth();
        Self::claim(&env, &config, &staker)
    }

    /// Withdraw the whole stake and claim rewards in one call.
    pub fn exit(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        staker.require_auth();

        let balance = storage::get_participant(&env, &staker).balance;
        if balance > 0 {
            Self::withdraw_stake(&env, &config, &staker, balance)?;
        }
        Self::claim(&env, &config, &staker)
    }

    /// Move `amount` reward tokens from `funder` into the reward reserve.
    ///
    /// Funding alone starts nothing; the owner still has to call
    /// `initialize_or_extend`.
    pub fn fund_reserve(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::require_initialized(&env)?;
        funder.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        Self::transfer_in(&env, &config.reward_token, &funder, amount)?;
        storage::extend_instance_ttl(&env);

        events::publish_reserve_funded(&env, funder, amount);

        Ok(())
    }

    // ── Distribution window ─────────────────────────────────────────────────

    /// Open a window emitting `reward_amount` over `rewards_duration`, or
    /// restart the running one with its unemitted remainder rolled in.
    ///
    /// Owner only. The reward reserve must cover the full emission.
    pub fn initialize_or_extend(
        env: Env,
        caller: Address,
        reward_amount: i128,
    ) -> Result<(), ContractError> {
        let config = Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        let reserve = Self::reserve_balance(&env, &config);
        let mut pool = storage::get_pool(&env);

        distribution::initialize_or_extend(&mut pool, reward_amount, reserve, now)?;

        storage::set_pool(&env, &pool);
        storage::extend_instance_ttl(&env);

        log!(&env, "window", reward_amount, pool.reward_rate, pool.period_finish);
        events::publish_reward_added(&env, reward_amount, pool.reward_rate, pool.period_finish);

        Ok(())
    }

    /// Change the length of future windows. Owner only; rejected while a
    /// window is active.
    pub fn set_rewards_duration(
        env: Env,
        caller: Address,
        duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut pool = storage::get_pool(&env);
        distribution::set_rewards_duration(&mut pool, duration, env.ledger().timestamp())?;
        storage::set_pool(&env, &pool);

        events::publish_duration_updated(&env, duration);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Rewards `account` could claim right now, computed without mutating state.
    pub fn earned(env: Env, account: Address) -> Result<i128, ContractError> {
        let pool = storage::get_pool(&env);
        let participant = storage::get_participant(&env, &account);
        rewards::earned(&pool, &participant, env.ledger().timestamp())
    }

    /// The reward-per-token accumulator as of the current ledger time.
    pub fn reward_per_token(env: Env) -> Result<i128, ContractError> {
        rewards::current_reward_per_token(&storage::get_pool(&env), env.ledger().timestamp())
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_pool(&env).total_staked
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::get_participant(&env, &account).balance
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        rewards::last_time_reward_applicable(&storage::get_pool(&env), env.ledger().timestamp())
    }

    /// Total emission of one window at the current rate.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        distribution::reward_for_duration(&storage::get_pool(&env))
    }

    /// Reward tokens currently held by the contract.
    pub fn reward_reserve(env: Env) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        Ok(Self::reserve_balance(&env, &config))
    }

    pub fn window_state(env: Env) -> WindowState {
        distribution::window_state(&storage::get_pool(&env), env.ledger().timestamp())
    }

    pub fn get_pool(env: Env) -> PoolState {
        storage::get_pool(&env)
    }

    pub fn get_participant(env: Env, account: Address) -> Participant {
        storage::get_participant(&env, &account)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        Self::require_initialized(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownership::get_pending_owner(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Ownership transfer (two-step) ───────────────────────────────────────

    /// Nominate a new owner. Only the current owner can call this; the
    /// nominee must call `accept_owner` to complete the transfer.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();

        if !ownership::propose_owner(&env, &current_owner, &new_owner) {
            return Err(ContractError::Unauthorized);
        }

        events::publish_owner_proposed(&env, current_owner, new_owner);

        Ok(())
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending = ownership::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        if pending != new_owner {
            return Err(ContractError::Unauthorized);
        }
        let previous =
            ownership::accept_owner(&env, &new_owner).ok_or(ContractError::NotInitialized)?;

        events::publish_owner_accepted(&env, previous, new_owner);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let cancelled = ownership::cancel_transfer(&env).ok_or(ContractError::NoPendingOwner)?;

        events::publish_owner_transfer_cancelled(&env, current_owner, cancelled);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<Config, ContractError> {
        storage::get_config(env).ok_or(ContractError::NotInitialized)
    }

    /// Guard: revert if `caller` is not the owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownership::is_owner(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn reserve_balance(env: &Env, config: &Config) -> i128 {
        token::Client::new(env, &config.reward_token).balance(&env.current_contract_address())
    }

    fn commit(env: &Env, account: &Address, pool: &PoolState, participant: &Participant) {
        storage::set_pool(env, pool);
        storage::set_participant(env, account, participant);
        storage::extend_instance_ttl(env);
    }

    fn withdraw_stake(
        env: &Env,
        config: &Config,
        staker: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut pool = storage::get_pool(env);
        let mut participant = storage::get_participant(env, staker);

        // 1. Checkpoint before the denominator changes.
        rewards::checkpoint(&mut pool, Some(&mut participant), now)?;

        // 2. Verify the staker has enough staked.
        if amount > participant.balance {
            return Err(ContractError::InsufficientBalance);
        }

        // 3. Reduce the balance and the global total.
        participant.balance -= amount;
        pool.total_staked -= amount;
        Self::commit(env, staker, &pool, &participant);

        // 4. Return the tokens.
        Self::transfer_out(env, &config.stake_token, staker, amount)?;

        log!(env, "withdraw", *staker, amount, pool.total_staked);
        events::publish_withdrawn(env, staker.clone(), amount);

        Ok(())
    }

    fn claim(env: &Env, config: &Config, staker: &Address) -> Result<i128, ContractError> {
        let now = env.ledger().timestamp();
        let mut pool = storage::get_pool(env);
        let mut participant = storage::get_participant(env, staker);

        rewards::checkpoint(&mut pool, Some(&mut participant), now)?;

        let reward = participant.rewards_accrued;
        if reward > 0 {
            participant.rewards_accrued = 0;
        }
        Self::commit(env, staker, &pool, &participant);

        if reward > 0 {
            Self::transfer_out(env, &config.reward_token, staker, reward)?;
            events::publish_reward_paid(env, staker.clone(), reward);
        }

        Ok(reward)
    }

    /// Pull `amount` of `token` from `from` into the contract.
    fn transfer_in(
        env: &Env,
        token: &Address,
        from: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(
            from,
            &env.current_contract_address(),
            &amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }

    /// Push `amount` of `token` from the contract to `to`.
    fn transfer_out(
        env: &Env,
        token: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(
            &env.current_contract_address(),
            to,
            &amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
