#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accumulator;
pub mod claims;
pub mod config;
pub mod delegation;
pub mod epoch;
pub mod errors;
pub mod grants;
pub mod proxy;
pub mod registry;
pub mod storage;
pub mod structs;
pub mod views;
pub mod yield_engine;

pub mod contexts;
pub mod events;

use structs::{EngineConfig, ProviderState, State, WhitelistChange};

#[multiversx_sc::contract]
pub trait DelegatedYield:
    storage::StorageModule
    + config::ConfigModule
    + events::EventsModule
    + epoch::EpochModule
    + accumulator::AccumulatorModule
    + yield_engine::YieldEngineModule
    + grants::GrantsModule
    + registry::RegistryModule
    + delegation::DelegationModule
    + claims::ClaimsModule
    + views::ViewsModule
{
    #[upgrade]
    fn upgrade(&self) {}

    #[init]
    fn init(
        &self,
        reward_token: TokenIdentifier,
        accumulator_source: ManagedAddress,
        initial_provider: ManagedAddress,
        config: EngineConfig<Self::Api>,
    ) {
        self.state().set(State::Inactive);
        self.validate_config(&config);

        self.reward_token().set(reward_token);
        self.accumulator_source().set(accumulator_source);
        self.single_provider().set(&initial_provider);
        self.epoch_start().set(self.blockchain().get_block_timestamp());

        if config.whitelist_enabled {
            self.whitelist_timeline(&initial_provider).push(&WhitelistChange {
                epoch: 0,
                whitelisted: true,
            });
        }
        self.provider_state(&initial_provider).set(ProviderState {
            is_whitelisted: true,
            ..ProviderState::default()
        });

        self.config().set(config);
    }
}
