multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{EngineConfig, State};

pub struct StorageCache<'a, C>
where
    C: crate::config::ConfigModule,
{
    sc_ref: &'a C,
    pub contract_state: State,
    pub reward_token: TokenIdentifier<C::Api>,
    pub accumulator_source: ManagedAddress<C::Api>,
    pub config: EngineConfig<C::Api>,
    pub current_epoch: u64,
    pub total_paid_out: BigUint<C::Api>,
}

impl<'a, C> StorageCache<'a, C>
where
    C: crate::config::ConfigModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let config = sc_ref.config().get();
        let now = sc_ref.blockchain().get_block_timestamp();
        let epoch_start = sc_ref.epoch_start().get();

        StorageCache {
            contract_state: sc_ref.state().get(),
            reward_token: sc_ref.reward_token().get(),
            accumulator_source: sc_ref.accumulator_source().get(),
            current_epoch: crate::epoch::epoch_at(now, epoch_start, config.epoch_length_seconds),
            config,
            total_paid_out: sc_ref.total_paid_out().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for StorageCache<'_, C>
where
    C: crate::config::ConfigModule,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_paid_out().set(&self.total_paid_out);
    }
}
