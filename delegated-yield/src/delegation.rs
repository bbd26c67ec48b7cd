use crate::{
    contexts::base::StorageCache,
    errors::{
        ERROR_FIRST_DELEGATION, ERROR_NOT_DELEGATED, ERROR_NO_STAKE, ERROR_PENDING_YIELD,
        ERROR_PROVIDER_NOT_WHITELISTED, ERROR_WITHDRAW_PENDING,
    },
    structs::DelegatorState,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait DelegationModule:
    crate::storage::StorageModule
    + crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::accumulator::AccumulatorModule
    + crate::yield_engine::YieldEngineModule
    + crate::grants::GrantsModule
    + crate::registry::RegistryModule
{
    /// Points the caller's stake-weight at `provider`. Accrual toward the previous
    /// provider is settled first; a fresh delegation starts from the current
    /// accumulator value.
    #[endpoint(delegate)]
    fn delegate(&self, provider: ManagedAddress) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let caller = self.blockchain().get_caller();
        require!(
            self.is_whitelisted_at(&storage_cache, &provider, storage_cache.current_epoch),
            ERROR_PROVIDER_NOT_WHITELISTED
        );

        let source = &storage_cache.accumulator_source;
        let (accumulated, staked) = self.read_accumulated(source, &caller);
        require!(staked > 0u64, ERROR_NO_STAKE);
        require!(
            self.read_withdraw_request(source, &caller) == 0,
            ERROR_WITHDRAW_PENDING
        );

        let mut state = self.get_delegator_state(&caller);
        if state.is_delegated() {
            self.settle_delegator(&storage_cache, &mut state, &accumulated);
            self.detach_principal(&storage_cache, &mut state);
        } else {
            state.processed_accumulator = accumulated;
            state.last_settled_epoch = storage_cache.current_epoch;
        }

        self.record_delegation_change(&storage_cache, &provider, &staked, &BigUint::zero());
        state.initialized = true;
        state.delegated_to = Some(provider.clone());
        state.delegated_amount = staked.clone();
        state.last_synced_withdraw_request = 0;
        self.delegator_state(&caller).set(&state);

        self.emit_delegate_event(&storage_cache, &caller, &provider, &staked);
    }

    #[endpoint(undelegate)]
    fn undelegate(&self) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let caller = self.blockchain().get_caller();
        let mut state = self.require_initialized(&caller);
        let provider = match state.delegated_to.clone() {
            Some(provider) => provider,
            None => sc_panic!(ERROR_NOT_DELEGATED),
        };

        let (accumulated, _) = self.read_accumulated(&storage_cache.accumulator_source, &caller);
        self.settle_delegator(&storage_cache, &mut state, &accumulated);
        self.detach_principal(&storage_cache, &mut state);
        state.delegated_to = None;
        self.delegator_state(&caller).set(&state);

        self.emit_undelegate_event(&storage_cache, &caller, &provider);
    }

    /// Copies the source's withdraw-request marker into the local record. The open
    /// window is settled at the old principal; then a pending request takes the
    /// caller's principal out of its provider's running total, a cleared one puts the
    /// current stake back.
    #[endpoint(syncWithdrawRequest)]
    fn sync_withdraw_request(&self) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let caller = self.blockchain().get_caller();
        let source = &storage_cache.accumulator_source;
        let requested_at = self.read_withdraw_request(source, &caller);

        let mut state = self.get_delegator_state(&caller);
        state.last_synced_withdraw_request = requested_at;

        if state.is_delegated() {
            let (accumulated, staked) = self.read_accumulated(source, &caller);
            self.settle_delegator(&storage_cache, &mut state, &accumulated);
            if requested_at > 0 {
                self.detach_principal(&storage_cache, &mut state);
            } else {
                self.reattribute_principal(&storage_cache, &mut state, &staked);
            }
        }
        self.delegator_state(&caller).set(&state);

        self.sync_withdraw_request_event(&caller, requested_at);
    }

    /// Detaches the caller completely. The open window is settled first so the
    /// provider keeps its fee; the resulting yield must be claimed before the reset.
    #[endpoint(resetAccount)]
    fn reset_account(&self) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let caller = self.blockchain().get_caller();
        let state_mapper = self.delegator_state(&caller);
        if state_mapper.is_empty() {
            return;
        }

        let mut state = state_mapper.get();
        if state.is_delegated() {
            let (accumulated, _) =
                self.read_accumulated(&storage_cache.accumulator_source, &caller);
            self.settle_delegator(&storage_cache, &mut state, &accumulated);
        }
        require!(state.pending_yield == 0u64, ERROR_PENDING_YIELD);
        self.detach_principal(&storage_cache, &mut state);
        state_mapper.clear();

        self.reset_account_event(&caller);
    }

    fn detach_principal(
        &self,
        storage_cache: &StorageCache<Self>,
        state: &mut DelegatorState<Self::Api>,
    ) {
        if let Some(provider) = &state.delegated_to {
            self.record_delegation_change(
                storage_cache,
                provider,
                &BigUint::zero(),
                &state.delegated_amount,
            );
        }
        state.delegated_amount = BigUint::zero();
    }

    /// Moves the attributed principal to `staked` when the source balance changed.
    fn reattribute_principal(
        &self,
        storage_cache: &StorageCache<Self>,
        state: &mut DelegatorState<Self::Api>,
        staked: &BigUint,
    ) {
        if let Some(provider) = &state.delegated_to {
            self.record_delegation_change(
                storage_cache,
                provider,
                staked,
                &state.delegated_amount,
            );
        }
        state.delegated_amount = staked.clone();
    }

    fn get_delegator_state(&self, delegator: &ManagedAddress) -> DelegatorState<Self::Api> {
        let state_mapper = self.delegator_state(delegator);
        if state_mapper.is_empty() {
            DelegatorState::default()
        } else {
            state_mapper.get()
        }
    }

    fn require_initialized(&self, delegator: &ManagedAddress) -> DelegatorState<Self::Api> {
        let state = self.get_delegator_state(delegator);
        require!(state.initialized, ERROR_FIRST_DELEGATION);
        state
    }
}
