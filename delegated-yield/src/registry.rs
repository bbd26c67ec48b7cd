use crate::{
    contexts::base::StorageCache,
    errors::{
        ERROR_BAD_PAYMENT_AMOUNT, ERROR_BAD_PAYMENT_TOKEN, ERROR_NOT_PROVIDER,
        ERROR_NO_PROVIDER_STAKE, ERROR_PROVIDER_WITHDRAW_NOT_REQUESTED, ERROR_UNKNOWN_PROVIDER,
        ERROR_WHITELIST_DISABLED,
    },
    structs::{DelegationCheckpoint, ProviderState, WhitelistChange},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::storage::StorageModule
    + crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::accumulator::AccumulatorModule
    + crate::yield_engine::YieldEngineModule
    + crate::grants::GrantsModule
{
    #[only_owner]
    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, provider: ManagedAddress) {
        let storage_cache = StorageCache::new(self);
        require!(
            storage_cache.config.whitelist_enabled,
            ERROR_WHITELIST_DISABLED
        );

        self.set_whitelisted(&storage_cache, &provider, true);
    }

    #[only_owner]
    #[endpoint(removeFromWhitelist)]
    fn remove_from_whitelist(&self, provider: ManagedAddress) {
        let storage_cache = StorageCache::new(self);
        require!(
            storage_cache.config.whitelist_enabled,
            ERROR_WHITELIST_DISABLED
        );

        if self.provider_state(&provider).is_empty() {
            return;
        }
        self.set_whitelisted(&storage_cache, &provider, false);
    }

    #[payable("*")]
    #[endpoint(stakeProvider)]
    fn stake_provider(&self, lock_duration: u64) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);

        let caller = self.blockchain().get_caller();
        let provider = if storage_cache.config.whitelist_enabled {
            caller
        } else {
            // legacy mode: the owner may stake on behalf of the single provider
            let single_provider = self.single_provider().get();
            require!(
                caller == single_provider || caller == self.blockchain().get_owner_address(),
                ERROR_NOT_PROVIDER
            );
            single_provider
        };

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == storage_cache.reward_token,
            ERROR_BAD_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERROR_BAD_PAYMENT_AMOUNT);
        let amount = payment.amount.clone();

        let (accumulated, _) =
            self.read_accumulated(&storage_cache.accumulator_source, &provider);
        let mut provider_state = self.get_or_create_provider(&provider);
        if provider_state.stake_recorded {
            self.flush_provider_yield(&storage_cache, &mut provider_state, &accumulated);
        } else {
            // stake-time generated before the first engine stake earns nothing here
            provider_state.own_stake_snapshot = accumulated;
            provider_state.stake_recorded = true;
        }
        self.provider_state(&provider).set(provider_state);

        self.stake_on_behalf(
            &storage_cache.accumulator_source,
            &provider,
            &storage_cache.reward_token,
            &amount,
            lock_duration,
        );

        self.provider_stake_event(&provider, &amount, lock_duration);
    }

    /// Requests the unstake of the provider's own stake. Own yield and matured bonus
    /// grants are flushed first: once the request lands the accumulator stops moving.
    #[endpoint(withdrawProvider)]
    fn withdraw_provider(&self, provider: ManagedAddress) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);
        self.require_provider_or_owner(&provider);

        let mut provider_state = self.get_known_provider(&provider);
        require!(provider_state.stake_recorded, ERROR_NO_PROVIDER_STAKE);

        let (accumulated, staked) =
            self.read_accumulated(&storage_cache.accumulator_source, &provider);
        self.flush_provider_yield(&storage_cache, &mut provider_state, &accumulated);

        let matured = self.sweep_matured_grants(&provider, storage_cache.current_epoch);
        provider_state.delegation_reward_balance += &matured;
        provider_state.rewards_claimed_through = Some(storage_cache.current_epoch);
        self.provider_state(&provider).set(provider_state);

        self.request_withdraw_on_behalf(&storage_cache.accumulator_source, &provider);

        self.provider_withdraw_event(&provider, &staked);
    }

    #[endpoint(completeProviderWithdraw)]
    fn complete_provider_withdraw(&self, provider: ManagedAddress) {
        let storage_cache = StorageCache::new(self);
        self.is_state_active(storage_cache.contract_state);
        self.require_provider_or_owner(&provider);

        let provider_state = self.get_known_provider(&provider);
        require!(provider_state.stake_recorded, ERROR_NO_PROVIDER_STAKE);
        require!(
            self.read_withdraw_request(&storage_cache.accumulator_source, &provider) > 0,
            ERROR_PROVIDER_WITHDRAW_NOT_REQUESTED
        );

        let amount = self.withdraw_on_behalf(&storage_cache.accumulator_source, &provider);
        if amount > 0u64 {
            self.tx()
                .to(&provider)
                .single_esdt(&storage_cache.reward_token, 0, &amount)
                .transfer();
        }

        self.provider_withdraw_event(&provider, &amount);
    }

    /// Principal attributed to `provider` at `epoch`. Source-side balance changes are
    /// picked up on the delegator's next delegate, sync or claim.
    #[view(calculateTotalDelegation)]
    fn calculate_total_delegation(&self, epoch: u64, provider: ManagedAddress) -> BigUint {
        let checkpoints = self.delegation_checkpoints(&provider);

        // latest checkpoint with checkpoint.epoch <= epoch
        let mut low = 1usize;
        let mut high = checkpoints.len();
        let mut found = BigUint::zero();
        while low <= high {
            let mid = low + (high - low) / 2;
            let checkpoint = checkpoints.get(mid);
            if checkpoint.epoch <= epoch {
                found = checkpoint.total;
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
        found
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, provider: ManagedAddress) -> bool {
        let storage_cache = StorageCache::new(self);
        self.is_whitelisted_at(&storage_cache, &provider, storage_cache.current_epoch)
    }

    #[view(getWhitelistTimeline)]
    fn get_whitelist_timeline(&self, provider: ManagedAddress) -> MultiValueEncoded<WhitelistChange> {
        let mut result = MultiValueEncoded::new();
        for change in self.whitelist_timeline(&provider).iter() {
            result.push(change);
        }
        result
    }

    fn set_whitelisted(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        whitelisted: bool,
    ) {
        let mut provider_state = self.get_or_create_provider(provider);
        if provider_state.is_whitelisted == whitelisted {
            return;
        }
        provider_state.is_whitelisted = whitelisted;
        self.provider_state(provider).set(provider_state);

        let epoch = storage_cache.current_epoch;
        let mut timeline = self.whitelist_timeline(provider);
        let change = WhitelistChange { epoch, whitelisted };
        let len = timeline.len();
        if len > 0 && timeline.get(len).epoch == epoch {
            timeline.set(len, &change);
        } else {
            timeline.push(&change);
        }

        self.whitelist_event(provider, whitelisted, epoch);
    }

    /// Applies a principal change to the provider's running total and checkpoints it
    /// for the current epoch.
    fn record_delegation_change(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        added: &BigUint,
        removed: &BigUint,
    ) {
        if added == removed {
            return;
        }

        let epoch = storage_cache.current_epoch;
        let mut total = BigUint::zero();
        self.provider_state(provider).update(|provider_state| {
            provider_state.total_delegated += added;
            if provider_state.total_delegated > *removed {
                provider_state.total_delegated -= removed;
            } else {
                provider_state.total_delegated = BigUint::zero();
            }
            provider_state.last_delegation_sync_epoch = epoch;
            total = provider_state.total_delegated.clone();
        });

        let mut checkpoints = self.delegation_checkpoints(provider);
        let checkpoint = DelegationCheckpoint { epoch, total };
        let len = checkpoints.len();
        if len > 0 && checkpoints.get(len).epoch == epoch {
            checkpoints.set(len, &checkpoint);
        } else {
            checkpoints.push(&checkpoint);
        }
    }

    fn get_or_create_provider(&self, provider: &ManagedAddress) -> ProviderState<Self::Api> {
        let provider_mapper = self.provider_state(provider);
        if provider_mapper.is_empty() {
            ProviderState::default()
        } else {
            provider_mapper.get()
        }
    }

    fn get_known_provider(&self, provider: &ManagedAddress) -> ProviderState<Self::Api> {
        let provider_mapper = self.provider_state(provider);
        require!(!provider_mapper.is_empty(), ERROR_UNKNOWN_PROVIDER);
        provider_mapper.get()
    }

    fn require_provider_or_owner(&self, provider: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            &caller == provider || caller == self.blockchain().get_owner_address(),
            ERROR_NOT_PROVIDER
        );
    }
}
