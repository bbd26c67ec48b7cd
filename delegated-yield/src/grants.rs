use crate::{
    contexts::base::StorageCache,
    errors::{
        ERROR_BAD_GRANT_AMOUNT, ERROR_BAD_PAYMENT_TOKEN, ERROR_EPOCH_SETTLED,
        ERROR_GRANT_NOT_FUNDED, ERROR_NOT_GRANTOR, ERROR_UNKNOWN_PROVIDER,
    },
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait GrantsModule:
    crate::storage::StorageModule + crate::config::ConfigModule + crate::events::EventsModule
{
    /// Adds `amount` to the (provider, epoch) bonus slot. Grants for epochs already
    /// swept by a provider claim are rejected so settled totals never move.
    #[payable("*")]
    #[endpoint(grantAdditionalReward)]
    fn grant_additional_reward(&self, provider: ManagedAddress, epoch: u64, amount: BigUint) {
        let storage_cache = StorageCache::new(self);
        let caller = self.blockchain().get_caller();

        let is_owner = caller == self.blockchain().get_owner_address();
        let is_fund = storage_cache.config.bonus_fund_source.as_ref() == Some(&caller);
        require!(is_owner || is_fund, ERROR_NOT_GRANTOR);
        require!(amount > 0u64, ERROR_BAD_GRANT_AMOUNT);

        let provider_mapper = self.provider_state(&provider);
        require!(!provider_mapper.is_empty(), ERROR_UNKNOWN_PROVIDER);
        if let Some(claimed_through) = provider_mapper.get().rewards_claimed_through {
            require!(epoch > claimed_through, ERROR_EPOCH_SETTLED);
        }

        let payments = self.call_value().all_esdt_transfers();
        if payments.is_empty() {
            require!(!is_fund, ERROR_GRANT_NOT_FUNDED);
        } else {
            require!(payments.len() == 1, ERROR_GRANT_NOT_FUNDED);
            let payment = payments.get(0);
            require!(
                payment.token_identifier == storage_cache.reward_token,
                ERROR_BAD_PAYMENT_TOKEN
            );
            require!(payment.amount == amount, ERROR_GRANT_NOT_FUNDED);
        }

        self.bonus_grant(&provider, epoch)
            .update(|granted| *granted += &amount);
        self.bonus_grant_epochs(&provider).insert(epoch);

        self.bonus_grant_event(&provider, epoch, &amount);
    }

    /// Sums and clears every grant slot with `epoch <= up_to_epoch`.
    fn sweep_matured_grants(&self, provider: &ManagedAddress, up_to_epoch: u64) -> BigUint {
        let mut grant_epochs = self.bonus_grant_epochs(provider);

        let mut matured = ManagedVec::<Self::Api, u64>::new();
        for epoch in grant_epochs.iter() {
            if epoch <= up_to_epoch {
                matured.push(epoch);
            }
        }

        let mut total = BigUint::zero();
        for epoch in matured.iter() {
            total += self.bonus_grant(provider, epoch).take();
            grant_epochs.swap_remove(&epoch);
        }
        total
    }

    fn matured_grants(&self, provider: &ManagedAddress, up_to_epoch: u64) -> BigUint {
        let mut total = BigUint::zero();
        for epoch in self.bonus_grant_epochs(provider).iter() {
            if epoch <= up_to_epoch {
                total += self.bonus_grant(provider, epoch).get();
            }
        }
        total
    }
}
