use crate::structs::{
    DelegationCheckpoint, DelegatorState, EngineConfig, ProviderState, State, WhitelistChange,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getState)]
    #[storage_mapper("state")]
    fn state(&self) -> SingleValueMapper<State>;

    #[view(getConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<EngineConfig<Self::Api>>;

    #[view(getRewardToken)]
    #[storage_mapper("rewardToken")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getAccumulatorSource)]
    #[storage_mapper("accumulatorSource")]
    fn accumulator_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSingleProvider)]
    #[storage_mapper("singleProvider")]
    fn single_provider(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getEpochStart)]
    #[storage_mapper("epochStart")]
    fn epoch_start(&self) -> SingleValueMapper<u64>;

    #[view(getTotalPaidOut)]
    #[storage_mapper("totalPaidOut")]
    fn total_paid_out(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delegatorState")]
    fn delegator_state(
        &self,
        delegator: &ManagedAddress,
    ) -> SingleValueMapper<DelegatorState<Self::Api>>;

    #[storage_mapper("providerState")]
    fn provider_state(
        &self,
        provider: &ManagedAddress,
    ) -> SingleValueMapper<ProviderState<Self::Api>>;

    #[storage_mapper("whitelistTimeline")]
    fn whitelist_timeline(&self, provider: &ManagedAddress) -> VecMapper<WhitelistChange>;

    #[storage_mapper("delegationCheckpoints")]
    fn delegation_checkpoints(
        &self,
        provider: &ManagedAddress,
    ) -> VecMapper<DelegationCheckpoint<Self::Api>>;

    #[view(getBonusGrant)]
    #[storage_mapper("bonusGrant")]
    fn bonus_grant(&self, provider: &ManagedAddress, epoch: u64) -> SingleValueMapper<BigUint>;

    #[view(getBonusGrantEpochs)]
    #[storage_mapper("bonusGrantEpochs")]
    fn bonus_grant_epochs(&self, provider: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
