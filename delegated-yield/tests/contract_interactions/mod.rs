use multiversx_sc::types::{BigUint, ManagedAddress, TestAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectError, ReturnsResult, ReturnsResultUnmanaged, RustBigUint},
    managed_biguint, ScenarioTxRun, ScenarioTxWhitebox,
};

use delegated_yield::proxy::{
    proxy_delegated_yield::DelegatedYieldProxy, proxy_locked_staking::LockedStakingMockProxy,
};
use delegated_yield::storage::StorageModule;
use delegated_yield::structs::DelegatorState;

use crate::contract_setup::*;
use crate::utils::bytes_to_str;

impl DelegatedYieldSetup {
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.current_timestamp = timestamp;
        self.b_mock.current_block().block_timestamp(timestamp);
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.set_timestamp(self.current_timestamp + seconds);
    }

    pub fn go_to_epoch(&mut self, epoch: u64) {
        self.set_timestamp(START_TIMESTAMP + epoch * WEEK);
    }

    // locked staking source

    pub fn stake_on_source(&mut self, caller: TestAddress, amount: u64) {
        self.b_mock
            .tx()
            .from(caller)
            .to(LOCKED_STAKING_ADDRESS)
            .typed(LockedStakingMockProxy)
            .stake(LOCK_DURATION)
            .payment(reward_payment(amount))
            .run();
    }

    pub fn request_withdraw_on_source(&mut self, caller: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(LOCKED_STAKING_ADDRESS)
            .typed(LockedStakingMockProxy)
            .request_withdraw()
            .run();
    }

    pub fn withdraw_on_source(&mut self, caller: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(LOCKED_STAKING_ADDRESS)
            .typed(LockedStakingMockProxy)
            .withdraw()
            .run();
    }

    // delegators

    pub fn delegate(&mut self, caller: TestAddress, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .delegate(provider)
            .run();
    }

    pub fn delegate_error(&mut self, caller: TestAddress, provider: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .delegate(provider)
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn undelegate(&mut self, caller: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .undelegate()
            .run();
    }

    pub fn undelegate_error(&mut self, caller: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .undelegate()
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn sync_withdraw_request(&mut self, caller: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .sync_withdraw_request()
            .run();
    }

    pub fn reset_account(&mut self, caller: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .reset_account()
            .run();
    }

    pub fn reset_account_error(&mut self, caller: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .reset_account()
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn claim_yield(&mut self, caller: TestAddress, delegator: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_yield(delegator)
            .run();
    }

    pub fn claim_yield_error(&mut self, caller: TestAddress, delegator: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_yield(delegator)
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    // providers

    pub fn stake_provider(&mut self, caller: TestAddress, amount: u64) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .stake_provider(LOCK_DURATION)
            .payment(reward_payment(amount))
            .run();
    }

    pub fn stake_provider_error(&mut self, caller: TestAddress, amount: u64, error: &[u8]) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .stake_provider(LOCK_DURATION)
            .payment(reward_payment(amount))
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn withdraw_provider(&mut self, caller: TestAddress, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .withdraw_provider(provider)
            .run();
    }

    pub fn withdraw_provider_error(
        &mut self,
        caller: TestAddress,
        provider: TestAddress,
        error: &[u8],
    ) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .withdraw_provider(provider)
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn complete_provider_withdraw(&mut self, caller: TestAddress, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .complete_provider_withdraw(provider)
            .run();
    }

    pub fn complete_provider_withdraw_error(
        &mut self,
        caller: TestAddress,
        provider: TestAddress,
        error: &str,
    ) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .complete_provider_withdraw(provider)
            .returns(ExpectError(4, error))
            .run();
    }

    pub fn claim_provider_yield(&mut self, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(provider)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_provider_yield()
            .run();
    }

    pub fn claim_provider_yield_error(&mut self, provider: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(provider)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_provider_yield()
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    pub fn claim_provider_delegation_reward(&mut self, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(provider)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_provider_delegation_reward()
            .run();
    }

    pub fn claim_all_provider_rewards(&mut self, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(provider)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_all_provider_rewards()
            .run();
    }

    pub fn claim_all_provider_rewards_error(&mut self, provider: TestAddress, error: &[u8]) {
        self.b_mock
            .tx()
            .from(provider)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .claim_all_provider_rewards()
            .returns(ExpectError(4, bytes_to_str(error)))
            .run();
    }

    // owner and funding

    pub fn set_state_inactive(&mut self) {
        self.b_mock
            .tx()
            .from(OWNER_ADDRESS)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .set_state_inactive()
            .run();
    }

    pub fn add_to_whitelist(&mut self, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(OWNER_ADDRESS)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .add_to_whitelist(provider)
            .run();
    }

    pub fn add_to_whitelist_error(&mut self, caller: TestAddress, provider: TestAddress, error: &str) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .add_to_whitelist(provider)
            .returns(ExpectError(4, error))
            .run();
    }

    pub fn remove_from_whitelist(&mut self, provider: TestAddress) {
        self.b_mock
            .tx()
            .from(OWNER_ADDRESS)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .remove_from_whitelist(provider)
            .run();
    }

    pub fn grant_additional_reward(
        &mut self,
        caller: TestAddress,
        provider: TestAddress,
        epoch: u64,
        amount: u64,
    ) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .grant_additional_reward(provider, epoch, amount)
            .payment(reward_payment(amount))
            .run();
    }

    pub fn grant_additional_reward_unfunded(
        &mut self,
        caller: TestAddress,
        provider: TestAddress,
        epoch: u64,
        amount: u64,
    ) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .grant_additional_reward(provider, epoch, amount)
            .run();
    }

    pub fn grant_additional_reward_error(
        &mut self,
        caller: TestAddress,
        provider: TestAddress,
        epoch: u64,
        amount: u64,
        payment: u64,
        error: &[u8],
    ) {
        if payment > 0 {
            self.b_mock
                .tx()
                .from(caller)
                .to(DELEGATED_YIELD_ADDRESS)
                .typed(DelegatedYieldProxy)
                .grant_additional_reward(provider, epoch, amount)
                .payment(reward_payment(payment))
                .returns(ExpectError(4, bytes_to_str(error)))
                .run();
        } else {
            self.b_mock
                .tx()
                .from(caller)
                .to(DELEGATED_YIELD_ADDRESS)
                .typed(DelegatedYieldProxy)
                .grant_additional_reward(provider, epoch, amount)
                .returns(ExpectError(4, bytes_to_str(error)))
                .run();
        }
    }

    pub fn fund_reserve(&mut self, caller: TestAddress, amount: u64) {
        self.b_mock
            .tx()
            .from(caller)
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .fund_reserve()
            .payment(reward_payment(amount))
            .run();
    }

    // views

    pub fn estimate_yield(&mut self, delegator: TestAddress) -> RustBigUint {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .estimate_yield(delegator)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn estimate_provider_yield(&mut self, provider: TestAddress) -> RustBigUint {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .estimate_provider_yield(provider)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn estimate_delegation_reward(&mut self, provider: TestAddress) -> RustBigUint {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .estimate_delegation_reward(provider)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn calculate_total_delegation(&mut self, epoch: u64, provider: TestAddress) -> RustBigUint {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .calculate_total_delegation(epoch, provider)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn current_epoch(&mut self) -> u64 {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .get_current_epoch()
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn epoch_bounds(&mut self, epoch: u64) -> (u64, u64) {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .get_epoch_bounds(epoch)
            .returns(ReturnsResultUnmanaged)
            .run()
            .into_tuple()
    }

    pub fn is_whitelisted(&mut self, provider: TestAddress) -> bool {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .is_whitelisted(provider)
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn reserve(&mut self) -> RustBigUint {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .get_reserve()
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    pub fn delegator_state(&mut self, delegator: TestAddress) -> DelegatorState<StaticApi> {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .delegator_states(delegator)
            .returns(ReturnsResult)
            .run()
    }

    // checks

    pub fn check_balance(&mut self, address: TestAddress, balance: u64) {
        self.b_mock
            .check_account(address)
            .esdt_balance(REWARD_TOKEN, balance);
    }

    pub fn check_delegation_reward_balance(&mut self, provider: TestAddress, balance: u64) {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .whitebox(delegated_yield::contract_obj, |sc| {
                let provider_state = sc.provider_state(&provider.to_managed_address()).get();
                assert_eq!(
                    provider_state.delegation_reward_balance,
                    managed_biguint!(balance)
                );
            });
    }

    pub fn check_pending_yield(&mut self, delegator: TestAddress, pending: u64) {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .whitebox(delegated_yield::contract_obj, |sc| {
                let state = sc.delegator_state(&delegator.to_managed_address()).get();
                assert_eq!(state.pending_yield, managed_biguint!(pending));
            });
    }

    pub fn check_delegator_cleared(&mut self, delegator: TestAddress) {
        self.b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .whitebox(delegated_yield::contract_obj, |sc| {
                assert!(sc.delegator_state(&delegator.to_managed_address()).is_empty());
            });
    }

    pub fn check_delegated_to(&mut self, delegator: TestAddress, provider: Option<TestAddress>) {
        let expected: Option<ManagedAddress<StaticApi>> =
            provider.map(|provider| provider.to_managed_address());
        let state = self.delegator_state(delegator);
        assert_eq!(state.delegated_to, expected);
    }

    pub fn check_bonus_grant(&mut self, provider: TestAddress, epoch: u64, amount: u64) {
        let granted: RustBigUint = self
            .b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .bonus_grant(provider, epoch)
            .returns(ReturnsResultUnmanaged)
            .run();
        assert_eq!(granted, RustBigUint::from(amount));
    }

    pub fn check_total_paid_out(&mut self, amount: u64) {
        let paid_out: BigUint<StaticApi> = self
            .b_mock
            .query()
            .to(DELEGATED_YIELD_ADDRESS)
            .typed(DelegatedYieldProxy)
            .total_paid_out()
            .returns(ReturnsResult)
            .run();
        assert_eq!(paid_out, BigUint::from(amount));
    }
}
