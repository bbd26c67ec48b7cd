#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub type Timestamp = u64;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct StakeState<M: ManagedTypeApi> {
    pub staked: BigUint<M>,
    pub accumulated: BigUint<M>,
    pub since: Timestamp,
    pub lock_duration: u64,
    pub withdraw_requested_at: Timestamp,
    pub agent: Option<ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> Default for StakeState<M> {
    fn default() -> Self {
        StakeState {
            staked: BigUint::zero(),
            accumulated: BigUint::zero(),
            since: 0,
            lock_duration: 0,
            withdraw_requested_at: 0,
            agent: None,
        }
    }
}

/// Two-step unlock staking: stake-time accumulates while the stake is locked and
/// freezes as soon as a withdrawal is requested.
#[multiversx_sc::contract]
pub trait LockedStakingMock {
    #[init]
    fn init(&self, staking_token: TokenIdentifier) {
        self.staking_token().set(staking_token);
    }

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self, lock_duration: u64) {
        let caller = self.blockchain().get_caller();
        let amount = self.require_staking_payment();
        self.add_stake(&caller, &amount, lock_duration, None);
    }

    #[payable("*")]
    #[endpoint(stakeOnBehalf)]
    fn stake_on_behalf(&self, account: ManagedAddress, lock_duration: u64) {
        let caller = self.blockchain().get_caller();
        let amount = self.require_staking_payment();
        let stake_mapper = self.stake_state(&account);
        if !stake_mapper.is_empty() {
            if let Some(agent) = stake_mapper.get().agent {
                require!(agent == caller, "Only the staking agent can add stake");
            }
        }
        self.add_stake(&account, &amount, lock_duration, Some(caller));
    }

    #[endpoint(requestWithdraw)]
    fn request_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.mark_withdraw_request(&caller);
    }

    #[endpoint(requestWithdrawOnBehalf)]
    fn request_withdraw_on_behalf(&self, account: ManagedAddress) {
        self.require_agent(&account);
        self.mark_withdraw_request(&account);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.release_stake(&caller);
        self.tx()
            .to(&caller)
            .single_esdt(&self.staking_token().get(), 0, &amount)
            .transfer();
        amount
    }

    #[endpoint(withdrawOnBehalf)]
    fn withdraw_on_behalf(&self, account: ManagedAddress) -> BigUint {
        let agent = self.require_agent(&account);
        let amount = self.release_stake(&account);
        self.tx()
            .to(&agent)
            .single_esdt(&self.staking_token().get(), 0, &amount)
            .transfer();
        amount
    }

    #[view(estimateAccumulated)]
    fn estimate_accumulated(&self, account: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let state = self.get_stake_state(account);
        let accumulated = self.accumulated_at(&state, self.blockchain().get_block_timestamp());
        (accumulated, state.staked).into()
    }

    #[view(withdrawRequestedAt)]
    fn withdraw_requested_at(&self, account: ManagedAddress) -> Timestamp {
        self.get_stake_state(account).withdraw_requested_at
    }

    #[view(getStakeState)]
    fn get_stake_state(&self, account: ManagedAddress) -> StakeState<Self::Api> {
        let stake_mapper = self.stake_state(&account);
        if stake_mapper.is_empty() {
            StakeState::default()
        } else {
            stake_mapper.get()
        }
    }

    fn accumulated_at(&self, state: &StakeState<Self::Api>, now: Timestamp) -> BigUint {
        if state.withdraw_requested_at > 0 || now <= state.since {
            return state.accumulated.clone();
        }
        &state.accumulated + &(&state.staked * &BigUint::from(now - state.since))
    }

    fn checkpoint(&self, state: &mut StakeState<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        state.accumulated = self.accumulated_at(state, now);
        state.since = now;
    }

    fn add_stake(
        &self,
        account: &ManagedAddress,
        amount: &BigUint,
        lock_duration: u64,
        agent: Option<ManagedAddress>,
    ) {
        let mut state = self.get_stake_state(account.clone());
        self.checkpoint(&mut state);

        // restaking cancels a pending unlock
        state.withdraw_requested_at = 0;
        state.staked += amount;
        if lock_duration > state.lock_duration {
            state.lock_duration = lock_duration;
        }
        if agent.is_some() {
            state.agent = agent;
        }

        self.stake_state(account).set(state);
    }

    fn mark_withdraw_request(&self, account: &ManagedAddress) {
        let mut state = self.get_stake_state(account.clone());
        require!(state.staked > 0u64, "Nothing staked");
        require!(state.withdraw_requested_at == 0, "Withdraw already requested");

        self.checkpoint(&mut state);
        state.withdraw_requested_at = self.blockchain().get_block_timestamp();

        self.stake_state(account).set(state);
    }

    fn release_stake(&self, account: &ManagedAddress) -> BigUint {
        let mut state = self.get_stake_state(account.clone());
        let now = self.blockchain().get_block_timestamp();

        require!(state.withdraw_requested_at > 0, "Withdraw not requested");
        require!(
            now >= state.withdraw_requested_at + state.lock_duration,
            "Cannot withdraw yet"
        );

        let amount = state.staked.clone();
        state.staked = BigUint::zero();
        state.withdraw_requested_at = 0;
        state.since = now;

        self.stake_state(account).set(state);
        amount
    }

    fn require_staking_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.staking_token().get(),
            "Invalid staking token"
        );
        require!(payment.amount > 0u64, "Invalid stake amount");
        payment.amount.clone()
    }

    fn require_agent(&self, account: &ManagedAddress) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let agent = self.get_stake_state(account.clone()).agent;
        require!(agent == Some(caller.clone()), "Only the staking agent can do this");
        caller
    }

    #[view(getStakingToken)]
    #[storage_mapper("stakingToken")]
    fn staking_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("stakeState")]
    fn stake_state(&self, account: &ManagedAddress) -> SingleValueMapper<StakeState<Self::Api>>;
}
