use multiversx_sc::types::{BigUint, TestAddress, TestEsdtTransfer, TestSCAddress, TestTokenIdentifier};

use multiversx_sc_scenario::{api::StaticApi, imports::MxscPath, ScenarioTxRun, ScenarioWorld};

use delegated_yield::proxy::{
    proxy_delegated_yield::DelegatedYieldProxy, proxy_locked_staking::LockedStakingMockProxy,
};
use delegated_yield::structs::EngineConfig;

extern crate delegated_yield;
extern crate locked_staking_mock;

pub const REWARD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("REWARD-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");

pub const DELEGATED_YIELD_DEPLOY_CODE: MxscPath =
    MxscPath::new("output/delegated-yield.mxsc.json");
pub const LOCKED_STAKING_DEPLOY_CODE: MxscPath =
    MxscPath::new("../locked-staking-mock/output/locked-staking-mock.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const PROVIDER_ADDRESS: TestAddress = TestAddress::new("provider");
pub const SECOND_PROVIDER_ADDRESS: TestAddress = TestAddress::new("second-provider");
pub const FUND_ADDRESS: TestAddress = TestAddress::new("bonus-fund");
pub const FIRST_DELEGATOR: TestAddress = TestAddress::new("first-delegator");
pub const SECOND_DELEGATOR: TestAddress = TestAddress::new("second-delegator");
pub const THIRD_DELEGATOR: TestAddress = TestAddress::new("third-delegator");

pub const DELEGATED_YIELD_ADDRESS: TestSCAddress = TestSCAddress::new("delegated-yield");
pub const LOCKED_STAKING_ADDRESS: TestSCAddress = TestSCAddress::new("locked-staking");

pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 7 * DAY;
pub const LOCK_DURATION: u64 = 2 * WEEK;

pub const REWARD_RATE: u64 = 7;
pub const PROVIDER_FEE: u64 = 10_000;

pub const STAKE_AMOUNT: u64 = 10_000_000_000;
pub const ACCOUNT_BALANCE: u64 = 100_000_000_000;
pub const RESERVE_AMOUNT: u64 = 50_000_000;

pub struct DelegatedYieldSetup {
    pub b_mock: ScenarioWorld,
    pub current_timestamp: u64,
}

fn setup_locked_staking(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(LockedStakingMockProxy)
        .init(REWARD_TOKEN)
        .code(LOCKED_STAKING_DEPLOY_CODE)
        .new_address(LOCKED_STAKING_ADDRESS)
        .run();
}

pub fn engine_config(whitelist_enabled: bool) -> EngineConfig<StaticApi> {
    EngineConfig {
        provider_fee: BigUint::from(PROVIDER_FEE),
        reward_rate_per_epoch: BigUint::from(REWARD_RATE),
        epoch_length_seconds: WEEK,
        whitelist_enabled,
        bonus_fund_source: Some(FUND_ADDRESS.to_managed_address()),
    }
}

fn setup_delegated_yield(world: &mut ScenarioWorld, whitelist_enabled: bool) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(DelegatedYieldProxy)
        .init(
            REWARD_TOKEN,
            LOCKED_STAKING_ADDRESS,
            PROVIDER_ADDRESS,
            engine_config(whitelist_enabled),
        )
        .code(DELEGATED_YIELD_DEPLOY_CODE)
        .new_address(DELEGATED_YIELD_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(DELEGATED_YIELD_ADDRESS)
        .typed(DelegatedYieldProxy)
        .set_state_active()
        .run();
}

impl DelegatedYieldSetup {
    /// Deploys both contracts at `START_TIMESTAMP` and funds the reward reserve.
    pub fn new(whitelist_enabled: bool) -> Self {
        let mut setup = Self::new_unfunded(whitelist_enabled);
        setup.fund_reserve(OWNER_ADDRESS, RESERVE_AMOUNT);
        setup
    }

    pub fn new_unfunded(whitelist_enabled: bool) -> Self {
        let mut world = world();
        world.current_block().block_timestamp(START_TIMESTAMP);

        setup_locked_staking(&mut world);
        setup_delegated_yield(&mut world, whitelist_enabled);

        DelegatedYieldSetup {
            b_mock: world,
            current_timestamp: START_TIMESTAMP,
        }
    }
}

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("delegated-yield");

    blockchain.register_contract(DELEGATED_YIELD_DEPLOY_CODE, delegated_yield::ContractBuilder);
    blockchain.register_contract(
        LOCKED_STAKING_DEPLOY_CODE,
        locked_staking_mock::ContractBuilder,
    );

    setup_accounts(&mut blockchain);
    blockchain
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(REWARD_TOKEN, ACCOUNT_BALANCE)
        .esdt_balance(OTHER_TOKEN, ACCOUNT_BALANCE);

    for address in [
        PROVIDER_ADDRESS,
        SECOND_PROVIDER_ADDRESS,
        FUND_ADDRESS,
        FIRST_DELEGATOR,
        SECOND_DELEGATOR,
        THIRD_DELEGATOR,
    ] {
        world
            .account(address)
            .nonce(1)
            .esdt_balance(REWARD_TOKEN, ACCOUNT_BALANCE);
    }
}

pub fn reward_payment(amount: u64) -> TestEsdtTransfer<'static> {
    TestEsdtTransfer(REWARD_TOKEN, 0, amount)
}
