use crate::{
    contexts::base::StorageCache,
    errors::{
        ERROR_BAD_PAYMENT_AMOUNT, ERROR_BAD_PAYMENT_TOKEN, ERROR_INSUFFICIENT_RESERVE,
        ERROR_NO_PROVIDER_STAKE, ERROR_WITHDRAW_REQUEST_DESYNC,
    },
    structs::ProviderState,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ClaimsModule:
    crate::storage::StorageModule
    + crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::accumulator::AccumulatorModule
    + crate::yield_engine::YieldEngineModule
    + crate::grants::GrantsModule
    + crate::registry::RegistryModule
    + crate::delegation::DelegationModule
{
    /// Settles `delegator` and pays its net yield. Anyone may push the claim, the
    /// tokens always go to `delegator`.
    #[endpoint(claimYield)]
    fn claim_yield(&self, delegator: ManagedAddress) {
        let mut storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let mut state = self.require_initialized(&delegator);
        let source = storage_cache.accumulator_source.clone();
        let requested_at = self.read_withdraw_request(&source, &delegator);
        require!(
            requested_at == state.last_synced_withdraw_request,
            ERROR_WITHDRAW_REQUEST_DESYNC
        );

        let (accumulated, staked) = self.read_accumulated(&source, &delegator);
        self.settle_delegator(&storage_cache, &mut state, &accumulated);
        // a completed withdraw or a restake on the source leaves both markers at 0
        if requested_at == 0 && state.is_delegated() && staked != state.delegated_amount {
            self.reattribute_principal(&storage_cache, &mut state, &staked);
        }

        let amount = state.pending_yield.clone();
        state.pending_yield = BigUint::zero();
        self.delegator_state(&delegator).set(&state);

        self.pay_out(&mut storage_cache, &delegator, &amount);
        self.emit_claim_yield_event(&storage_cache, &delegator, &amount);
    }

    #[endpoint(claimProviderDelegationReward)]
    fn claim_provider_delegation_reward(&self) {
        let mut storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let provider = self.blockchain().get_caller();
        let mut provider_state = self.get_known_provider(&provider);
        let amount = self.take_delegation_reward(&storage_cache, &provider, &mut provider_state);
        self.provider_state(&provider).set(provider_state);

        self.pay_out(&mut storage_cache, &provider, &amount);
        self.emit_claim_delegation_reward_event(&storage_cache, &provider, &amount);
    }

    #[endpoint(claimProviderYield)]
    fn claim_provider_yield(&self) {
        let mut storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let provider = self.blockchain().get_caller();
        let mut provider_state = self.get_known_provider(&provider);
        let amount = self.take_provider_yield(&storage_cache, &provider, &mut provider_state);
        self.provider_state(&provider).set(provider_state);

        self.pay_out(&mut storage_cache, &provider, &amount);
        self.emit_claim_provider_yield_event(&storage_cache, &provider, &amount);
    }

    /// Both provider claims in one transfer. The reserve is checked against the sum, so
    /// either both parts are paid or the call fails with nothing applied.
    #[endpoint(claimAllProviderRewards)]
    fn claim_all_provider_rewards(&self) {
        let mut storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let provider = self.blockchain().get_caller();
        let mut provider_state = self.get_known_provider(&provider);
        // fee-only providers have no own stake to flush
        let own_yield = if provider_state.stake_recorded {
            self.take_provider_yield(&storage_cache, &provider, &mut provider_state)
        } else {
            BigUint::zero()
        };
        let delegation_reward =
            self.take_delegation_reward(&storage_cache, &provider, &mut provider_state);
        self.provider_state(&provider).set(provider_state);

        let total = &own_yield + &delegation_reward;
        self.pay_out(&mut storage_cache, &provider, &total);

        self.emit_claim_provider_yield_event(&storage_cache, &provider, &own_yield);
        self.emit_claim_delegation_reward_event(&storage_cache, &provider, &delegation_reward);
    }

    #[payable("*")]
    #[endpoint(fundReserve)]
    fn fund_reserve(&self) {
        let storage_cache = StorageCache::new(self);
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == storage_cache.reward_token,
            ERROR_BAD_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERROR_BAD_PAYMENT_AMOUNT);

        self.fund_reserve_event(&self.blockchain().get_caller(), &payment.amount);
    }

    #[view(getReserve)]
    fn get_reserve(&self) -> BigUint {
        self.blockchain().get_esdt_balance(
            &self.blockchain().get_sc_address(),
            &self.reward_token().get(),
            0,
        )
    }

    fn take_provider_yield(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        provider_state: &mut ProviderState<Self::Api>,
    ) -> BigUint {
        require!(provider_state.stake_recorded, ERROR_NO_PROVIDER_STAKE);

        let (accumulated, _) = self.read_accumulated(&storage_cache.accumulator_source, provider);
        self.flush_provider_yield(storage_cache, provider_state, &accumulated);

        let amount = provider_state.own_yield_pending.clone();
        provider_state.own_yield_pending = BigUint::zero();
        provider_state.own_yield_processed += &amount;
        amount
    }

    /// Fee income plus every bonus grant of an epoch already reached.
    fn take_delegation_reward(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        provider_state: &mut ProviderState<Self::Api>,
    ) -> BigUint {
        let matured = self.sweep_matured_grants(provider, storage_cache.current_epoch);
        provider_state.delegation_reward_balance += &matured;
        provider_state.rewards_claimed_through = Some(storage_cache.current_epoch);

        let amount = provider_state.delegation_reward_balance.clone();
        provider_state.delegation_reward_balance = BigUint::zero();
        amount
    }

    /// Single exit point for reward tokens. Callers commit their ledger updates first.
    fn pay_out(&self, storage_cache: &mut StorageCache<Self>, to: &ManagedAddress, amount: &BigUint) {
        if amount == &0u64 {
            return;
        }

        require!(&self.get_reserve() >= amount, ERROR_INSUFFICIENT_RESERVE);
        storage_cache.total_paid_out += amount;

        self.tx()
            .to(to)
            .single_esdt(&storage_cache.reward_token, 0, amount)
            .transfer();
    }
}
