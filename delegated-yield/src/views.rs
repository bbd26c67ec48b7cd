use crate::{
    contexts::base::StorageCache,
    structs::{DelegatorState, ProviderState},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::config::ConfigModule
    + crate::accumulator::AccumulatorModule
    + crate::yield_engine::YieldEngineModule
    + crate::events::EventsModule
    + crate::grants::GrantsModule
{
    /// Net yield `claimYield` would pay right now.
    #[view(estimateYield)]
    fn estimate_yield(&self, delegator: ManagedAddress) -> BigUint {
        let storage_cache = StorageCache::new(self);
        let state = self.delegator_states(delegator.clone());
        if !state.is_delegated() {
            return state.pending_yield;
        }

        let (accumulated, _) = self.read_accumulated(&storage_cache.accumulator_source, &delegator);
        let split = self.compute_delegator_yield(&storage_cache, &state, &accumulated);
        state.pending_yield + split.delegator_net
    }

    #[view(estimateProviderYield)]
    fn estimate_provider_yield(&self, provider: ManagedAddress) -> BigUint {
        let provider_state = self.get_provider_state(&provider);
        if !provider_state.stake_recorded {
            return provider_state.own_yield_pending;
        }

        let storage_cache = StorageCache::new(self);
        let (accumulated, _) = self.read_accumulated(&storage_cache.accumulator_source, &provider);
        let unflushed = self.compute_provider_yield(&storage_cache, &provider_state, &accumulated);
        provider_state.own_yield_pending + unflushed
    }

    /// Fee balance plus the bonus grants of epochs already reached.
    #[view(estimateDelegationReward)]
    fn estimate_delegation_reward(&self, provider: ManagedAddress) -> BigUint {
        let storage_cache = StorageCache::new(self);
        let provider_state = self.get_provider_state(&provider);
        provider_state.delegation_reward_balance
            + self.matured_grants(&provider, storage_cache.current_epoch)
    }

    #[view(delegatorStates)]
    fn delegator_states(&self, delegator: ManagedAddress) -> DelegatorState<Self::Api> {
        let state_mapper = self.delegator_state(&delegator);
        if state_mapper.is_empty() {
            return DelegatorState::default();
        }
        state_mapper.get()
    }

    /// Provider record together with `(staked, withdraw_requested_at)` read from the source.
    #[view(getProviderStakeState)]
    fn get_provider_stake_state(
        &self,
        provider: ManagedAddress,
    ) -> MultiValue3<ProviderState<Self::Api>, BigUint, u64> {
        let source = self.accumulator_source().get();
        let (_, staked) = self.read_accumulated(&source, &provider);
        let withdraw_requested_at = self.read_withdraw_request(&source, &provider);
        (self.get_provider_state(&provider), staked, withdraw_requested_at).into()
    }

    fn get_provider_state(&self, provider: &ManagedAddress) -> ProviderState<Self::Api> {
        let provider_mapper = self.provider_state(provider);
        if provider_mapper.is_empty() {
            return ProviderState::default();
        }
        provider_mapper.get()
    }
}
