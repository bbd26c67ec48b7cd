use crate::{
    errors::{
        ERROR_INVALID_EPOCH_LENGTH, ERROR_INVALID_FEE, ERROR_INVALID_REWARD_RATE, ERROR_NOT_ACTIVE,
    },
    structs::{EngineConfig, State},
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const MAX_PERCENTAGE: u64 = 100_000;
pub const RATE_PRECISION: u64 = 1_000_000;

#[multiversx_sc::module]
pub trait ConfigModule: crate::storage::StorageModule {
    #[only_owner]
    #[endpoint(setStateActive)]
    fn set_state_active(&self) {
        self.state().set(State::Active);
    }

    #[only_owner]
    #[endpoint(setStateInactive)]
    fn set_state_inactive(&self) {
        self.state().set(State::Inactive);
    }

    fn validate_config(&self, config: &EngineConfig<Self::Api>) {
        require!(
            config.provider_fee <= BigUint::from(MAX_PERCENTAGE),
            ERROR_INVALID_FEE
        );
        require!(config.epoch_length_seconds > 0, ERROR_INVALID_EPOCH_LENGTH);
        require!(
            config.reward_rate_per_epoch > BigUint::zero(),
            ERROR_INVALID_REWARD_RATE
        );
    }

    #[inline]
    fn is_state_active(&self, state: State) {
        require!(State::Active == state, ERROR_NOT_ACTIVE);
    }
}
