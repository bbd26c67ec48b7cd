use crate::contexts::base::StorageCache;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode)]
pub struct EngineEventContext<M: ManagedTypeApi> {
    caller: ManagedAddress<M>,
    block: u64,
    epoch: u64,
    timestamp: u64,
}

#[multiversx_sc::module]
pub trait EventsModule: crate::storage::StorageModule + crate::config::ConfigModule {
    fn event_context(&self, storage_cache: &StorageCache<Self>) -> EngineEventContext<Self::Api> {
        EngineEventContext {
            caller: self.blockchain().get_caller(),
            block: self.blockchain().get_block_nonce(),
            epoch: storage_cache.current_epoch,
            timestamp: self.blockchain().get_block_timestamp(),
        }
    }

    fn emit_delegate_event(
        &self,
        storage_cache: &StorageCache<Self>,
        delegator: &ManagedAddress,
        provider: &ManagedAddress,
        principal: &BigUint,
    ) {
        self.delegate_event(
            delegator,
            provider,
            principal,
            &self.event_context(storage_cache),
        );
    }

    fn emit_undelegate_event(
        &self,
        storage_cache: &StorageCache<Self>,
        delegator: &ManagedAddress,
        provider: &ManagedAddress,
    ) {
        self.undelegate_event(delegator, provider, &self.event_context(storage_cache));
    }

    fn emit_claim_yield_event(
        &self,
        storage_cache: &StorageCache<Self>,
        delegator: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.claim_yield_event(delegator, amount, &self.event_context(storage_cache));
    }

    fn emit_claim_provider_yield_event(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.claim_provider_yield_event(provider, amount, &self.event_context(storage_cache));
    }

    fn emit_claim_delegation_reward_event(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.claim_delegation_reward_event(provider, amount, &self.event_context(storage_cache));
    }

    #[event("delegate")]
    fn delegate_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] provider: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] context: &EngineEventContext<Self::Api>,
    );

    #[event("undelegate")]
    fn undelegate_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] provider: &ManagedAddress,
        #[indexed] context: &EngineEventContext<Self::Api>,
    );

    #[event("sync_withdraw_request")]
    fn sync_withdraw_request_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] withdraw_requested_at: u64,
    );

    #[event("reset_account")]
    fn reset_account_event(&self, #[indexed] delegator: &ManagedAddress);

    #[event("claim_yield")]
    fn claim_yield_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] context: &EngineEventContext<Self::Api>,
    );

    #[event("provider_stake")]
    fn provider_stake_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] lock_duration: u64,
    );

    #[event("provider_withdraw")]
    fn provider_withdraw_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("claim_provider_yield")]
    fn claim_provider_yield_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] context: &EngineEventContext<Self::Api>,
    );

    #[event("claim_delegation_reward")]
    fn claim_delegation_reward_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] context: &EngineEventContext<Self::Api>,
    );

    #[event("whitelist")]
    fn whitelist_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] whitelisted: bool,
        #[indexed] epoch: u64,
    );

    #[event("bonus_grant")]
    fn bonus_grant_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] epoch: u64,
        #[indexed] amount: &BigUint,
    );

    #[event("fund_reserve")]
    fn fund_reserve_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);
}
