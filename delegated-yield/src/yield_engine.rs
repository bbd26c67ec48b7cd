use crate::{
    config::{MAX_PERCENTAGE, RATE_PRECISION},
    contexts::base::StorageCache,
    structs::{DelegatorState, EngineConfig, ProviderState, YieldSplit},
};

multiversx_sc::imports!();

/// Converts accumulator deltas into token amounts. Every committing operation goes
/// through `settle_delegator` or `flush_provider_yield`; estimates reuse the same math
/// without writing anything.
#[multiversx_sc::module]
pub trait YieldEngineModule:
    crate::storage::StorageModule + crate::config::ConfigModule
{
    fn accumulator_delta(&self, processed: &BigUint, current: &BigUint) -> BigUint {
        if current > processed {
            current - processed
        } else {
            BigUint::zero()
        }
    }

    /// `delta` is stake-seconds; the rate applies per epoch-length of stake-time.
    fn gross_yield(&self, delta: &BigUint, config: &EngineConfig<Self::Api>) -> BigUint {
        let scale = BigUint::from(RATE_PRECISION) * config.epoch_length_seconds;
        delta * &config.reward_rate_per_epoch / scale
    }

    /// Floor division on the fee keeps `provider_fee + delegator_net == gross`.
    fn split_fee(&self, gross: BigUint, provider_fee: &BigUint) -> YieldSplit<Self::Api> {
        let fee = &gross * provider_fee / MAX_PERCENTAGE;
        let net = &gross - &fee;
        YieldSplit {
            gross,
            provider_fee: fee,
            delegator_net: net,
        }
    }

    fn is_whitelisted_at(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        epoch: u64,
    ) -> bool {
        if !storage_cache.config.whitelist_enabled {
            return provider == &self.single_provider().get();
        }

        let timeline = self.whitelist_timeline(provider);
        for index in (1..=timeline.len()).rev() {
            let change = timeline.get(index);
            if change.epoch <= epoch {
                return change.whitelisted;
            }
        }
        false
    }

    /// Number of epochs in `[from, to)` during which `provider` was whitelisted.
    /// Walks the transition list backwards and stops at the first change before `from`.
    fn whitelisted_epochs(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        from: u64,
        to: u64,
    ) -> u64 {
        if from >= to {
            return 0;
        }
        if !storage_cache.config.whitelist_enabled {
            return if provider == &self.single_provider().get() {
                to - from
            } else {
                0
            };
        }

        let timeline = self.whitelist_timeline(provider);
        let mut count = 0u64;
        let mut upper = to;
        for index in (1..=timeline.len()).rev() {
            let change = timeline.get(index);
            if change.epoch >= upper {
                continue;
            }

            let lower = core::cmp::max(change.epoch, from);
            if change.whitelisted {
                count += upper - lower;
            }
            upper = lower;
            if upper <= from {
                break;
            }
        }
        count
    }

    /// Whitelist changes apply at epoch granularity: the window's gross yield is
    /// scaled by the share of its epochs in which the provider was whitelisted, and
    /// capped at what `principal` earns over those epochs. Stake added on the source
    /// after a removal therefore never earns at the whitelisted share.
    fn eligible_yield(
        &self,
        storage_cache: &StorageCache<Self>,
        provider: &ManagedAddress,
        principal: &BigUint,
        gross: BigUint,
        from_epoch: u64,
        to_epoch: u64,
    ) -> BigUint {
        if from_epoch >= to_epoch {
            return if self.is_whitelisted_at(storage_cache, provider, to_epoch) {
                gross
            } else {
                BigUint::zero()
            };
        }

        let window = to_epoch - from_epoch;
        let eligible = self.whitelisted_epochs(storage_cache, provider, from_epoch, to_epoch);
        if eligible == window {
            return gross;
        }

        let prorated = gross * eligible / window;
        let whitelisted_stake_time =
            principal.clone() * eligible * storage_cache.config.epoch_length_seconds;
        let cap = self.gross_yield(&whitelisted_stake_time, &storage_cache.config);
        if cap < prorated {
            cap
        } else {
            prorated
        }
    }

    fn compute_delegator_yield(
        &self,
        storage_cache: &StorageCache<Self>,
        state: &DelegatorState<Self::Api>,
        accumulated: &BigUint,
    ) -> YieldSplit<Self::Api> {
        let provider = match &state.delegated_to {
            Some(provider) => provider,
            None => return YieldSplit::zero(),
        };

        let delta = self.accumulator_delta(&state.processed_accumulator, accumulated);
        if delta == 0u64 {
            return YieldSplit::zero();
        }

        let gross = self.gross_yield(&delta, &storage_cache.config);
        let eligible = self.eligible_yield(
            storage_cache,
            provider,
            &state.delegated_amount,
            gross,
            state.last_settled_epoch,
            storage_cache.current_epoch,
        );
        self.split_fee(eligible, &storage_cache.config.provider_fee)
    }

    /// Commits the window `[processed_accumulator, accumulated]`: the fee goes to the
    /// provider's delegation-reward balance, the net part waits in `pending_yield`.
    fn settle_delegator(
        &self,
        storage_cache: &StorageCache<Self>,
        state: &mut DelegatorState<Self::Api>,
        accumulated: &BigUint,
    ) -> YieldSplit<Self::Api> {
        let split = self.compute_delegator_yield(storage_cache, state, accumulated);

        if let Some(provider) = &state.delegated_to {
            if split.provider_fee > 0u64 {
                self.provider_state(provider).update(|provider_state| {
                    provider_state.delegation_reward_balance += &split.provider_fee;
                });
            }
        }

        state.pending_yield += &split.delegator_net;
        if accumulated > &state.processed_accumulator {
            state.processed_accumulator = accumulated.clone();
        }
        state.last_settled_epoch = storage_cache.current_epoch;

        split
    }

    fn compute_provider_yield(
        &self,
        storage_cache: &StorageCache<Self>,
        provider_state: &ProviderState<Self::Api>,
        accumulated: &BigUint,
    ) -> BigUint {
        let delta = self.accumulator_delta(&provider_state.own_stake_snapshot, accumulated);
        self.gross_yield(&delta, &storage_cache.config)
    }

    /// Moves the provider's own accrual since the last snapshot into `own_yield_pending`.
    fn flush_provider_yield(
        &self,
        storage_cache: &StorageCache<Self>,
        provider_state: &mut ProviderState<Self::Api>,
        accumulated: &BigUint,
    ) {
        let own_yield = self.compute_provider_yield(storage_cache, provider_state, accumulated);
        provider_state.own_yield_pending += &own_yield;
        if accumulated > &provider_state.own_stake_snapshot {
            provider_state.own_stake_snapshot = accumulated.clone();
        }
    }
}
