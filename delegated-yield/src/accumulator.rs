use crate::proxy::proxy_locked_staking::LockedStakingMockProxy;

multiversx_sc::imports!();

/// Thin adapter over the external locked-staking contract. The engine only ever
/// takes deltas between two readings of the accumulated stake-time.
#[multiversx_sc::module]
pub trait AccumulatorModule: crate::storage::StorageModule {
    /// Returns `(accumulated stake-time, currently staked principal)`.
    fn read_accumulated(
        &self,
        source: &ManagedAddress,
        account: &ManagedAddress,
    ) -> (BigUint, BigUint) {
        self.tx()
            .to(source)
            .typed(LockedStakingMockProxy)
            .estimate_accumulated(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple()
    }

    /// Timestamp of the pending withdraw request, 0 when there is none.
    fn read_withdraw_request(&self, source: &ManagedAddress, account: &ManagedAddress) -> u64 {
        self.tx()
            .to(source)
            .typed(LockedStakingMockProxy)
            .withdraw_requested_at(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn stake_on_behalf(
        &self,
        source: &ManagedAddress,
        account: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
        lock_duration: u64,
    ) {
        self.tx()
            .to(source)
            .typed(LockedStakingMockProxy)
            .stake_on_behalf(account, lock_duration)
            .single_esdt(token, 0, amount)
            .sync_call();
    }

    fn request_withdraw_on_behalf(&self, source: &ManagedAddress, account: &ManagedAddress) {
        self.tx()
            .to(source)
            .typed(LockedStakingMockProxy)
            .request_withdraw_on_behalf(account)
            .sync_call();
    }

    fn withdraw_on_behalf(&self, source: &ManagedAddress, account: &ManagedAddress) -> BigUint {
        self.tx()
            .to(source)
            .typed(LockedStakingMockProxy)
            .withdraw_on_behalf(account)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(estimateAccumulated)]
    fn estimate_accumulated(&self, account: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        self.read_accumulated(&self.accumulator_source().get(), &account)
            .into()
    }

    #[view(getStakeState)]
    fn get_stake_state(&self, account: ManagedAddress) -> MultiValue3<BigUint, BigUint, u64> {
        let source = self.accumulator_source().get();
        let (accumulated, staked) = self.read_accumulated(&source, &account);
        let withdraw_requested_at = self.read_withdraw_request(&source, &account);
        (staked, accumulated, withdraw_requested_at).into()
    }
}
