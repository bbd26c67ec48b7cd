multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, PartialEq, Eq, Copy, Clone, Debug)]
pub enum State {
    Inactive,
    Active,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct EngineConfig<M: ManagedTypeApi> {
    pub provider_fee: BigUint<M>,
    pub reward_rate_per_epoch: BigUint<M>,
    pub epoch_length_seconds: u64,
    pub whitelist_enabled: bool,
    pub bonus_fund_source: Option<ManagedAddress<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct DelegatorState<M: ManagedTypeApi> {
    pub initialized: bool,
    pub delegated_to: Option<ManagedAddress<M>>,
    /// Accumulator value already converted into yield.
    pub processed_accumulator: BigUint<M>,
    /// Principal attributed to `delegated_to` in its running total.
    pub delegated_amount: BigUint<M>,
    /// Net yield settled but not yet paid out.
    pub pending_yield: BigUint<M>,
    pub last_settled_epoch: u64,
    pub last_synced_withdraw_request: u64,
}

impl<M: ManagedTypeApi> Default for DelegatorState<M> {
    fn default() -> Self {
        DelegatorState {
            initialized: false,
            delegated_to: None,
            processed_accumulator: BigUint::zero(),
            delegated_amount: BigUint::zero(),
            pending_yield: BigUint::zero(),
            last_settled_epoch: 0,
            last_synced_withdraw_request: 0,
        }
    }
}

impl<M: ManagedTypeApi> DelegatorState<M> {
    pub fn is_delegated(&self) -> bool {
        self.delegated_to.is_some()
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct ProviderState<M: ManagedTypeApi> {
    pub is_whitelisted: bool,
    pub stake_recorded: bool,
    pub own_stake_snapshot: BigUint<M>,
    /// Own yield already paid out.
    pub own_yield_processed: BigUint<M>,
    /// Own yield flushed from the accumulator but not yet paid out.
    pub own_yield_pending: BigUint<M>,
    pub delegation_reward_balance: BigUint<M>,
    pub total_delegated: BigUint<M>,
    pub last_delegation_sync_epoch: u64,
    /// Last epoch whose bonus grants were swept into a claim or a withdrawal flush.
    pub rewards_claimed_through: Option<u64>,
}

impl<M: ManagedTypeApi> Default for ProviderState<M> {
    fn default() -> Self {
        ProviderState {
            is_whitelisted: false,
            stake_recorded: false,
            own_stake_snapshot: BigUint::zero(),
            own_yield_processed: BigUint::zero(),
            own_yield_pending: BigUint::zero(),
            delegation_reward_balance: BigUint::zero(),
            total_delegated: BigUint::zero(),
            last_delegation_sync_epoch: 0,
            rewards_claimed_through: None,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct WhitelistChange {
    pub epoch: u64,
    pub whitelisted: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct DelegationCheckpoint<M: ManagedTypeApi> {
    pub epoch: u64,
    pub total: BigUint<M>,
}

/// Outcome of converting an accumulator delta into tokens.
pub struct YieldSplit<M: ManagedTypeApi> {
    pub gross: BigUint<M>,
    pub provider_fee: BigUint<M>,
    pub delegator_net: BigUint<M>,
}

impl<M: ManagedTypeApi> YieldSplit<M> {
    pub fn zero() -> Self {
        YieldSplit {
            gross: BigUint::zero(),
            provider_fee: BigUint::zero(),
            delegator_net: BigUint::zero(),
        }
    }
}
