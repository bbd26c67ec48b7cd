pub mod proxy_delegated_yield;
pub mod proxy_locked_staking;
