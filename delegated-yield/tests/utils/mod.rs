use crate::contract_setup::{PROVIDER_FEE, REWARD_RATE, WEEK};

pub fn bytes_to_str(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap()
}

/// Gross reward for `stake` held during `seconds`, floored like the contract does.
pub fn gross_yield(stake: u64, seconds: u64) -> u64 {
    let accumulated = u128::from(stake) * u128::from(seconds);
    (accumulated * u128::from(REWARD_RATE) / (1_000_000u128 * u128::from(WEEK))) as u64
}

/// `(provider_fee, delegator_net)` of a gross amount.
pub fn split_fee(gross: u64) -> (u64, u64) {
    let fee = gross * PROVIDER_FEE / 100_000;
    (fee, gross - fee)
}
