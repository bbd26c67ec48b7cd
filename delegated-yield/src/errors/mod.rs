pub static ERROR_NOT_ACTIVE: &[u8] = b"Not active";

pub static ERROR_INVALID_FEE: &[u8] = b"Provider fee cannot exceed 100%";
pub static ERROR_INVALID_EPOCH_LENGTH: &[u8] = b"Epoch length must be greater than 0";
pub static ERROR_INVALID_REWARD_RATE: &[u8] = b"Reward rate must be greater than 0";

pub static ERROR_FIRST_DELEGATION: &[u8] = b"Address must make a first delegation.";
pub static ERROR_NOT_DELEGATED: &[u8] = b"Address is not delegated.";
pub static ERROR_NO_STAKE: &[u8] = b"Address must have a stake.";
pub static ERROR_WITHDRAW_PENDING: &[u8] = b"Stake has a pending withdraw request.";
pub static ERROR_WITHDRAW_REQUEST_DESYNC: &[u8] =
    b"Withdraw request out of sync. Call syncWithdrawRequest first.";
pub static ERROR_PENDING_YIELD: &[u8] = b"Claim pending yield before reset.";

pub static ERROR_PROVIDER_NOT_WHITELISTED: &[u8] = b"Provider is not whitelisted.";
pub static ERROR_UNKNOWN_PROVIDER: &[u8] = b"Unknown provider.";
pub static ERROR_NO_PROVIDER_STAKE: &[u8] = b"Provider has no stake.";
pub static ERROR_PROVIDER_WITHDRAW_NOT_REQUESTED: &[u8] = b"Provider withdraw not requested.";
pub static ERROR_NOT_PROVIDER: &[u8] = b"Caller is not the provider.";
pub static ERROR_WHITELIST_DISABLED: &[u8] = b"Whitelist is disabled.";

pub static ERROR_NOT_GRANTOR: &[u8] = b"Caller cannot grant rewards.";
pub static ERROR_EPOCH_SETTLED: &[u8] = b"Epoch already settled.";
pub static ERROR_BAD_GRANT_AMOUNT: &[u8] = b"Grant amount must be greater than 0.";
pub static ERROR_GRANT_NOT_FUNDED: &[u8] = b"Grant must be funded with the reward amount.";

pub static ERROR_BAD_PAYMENT_TOKEN: &[u8] = b"Bad payment token";
pub static ERROR_BAD_PAYMENT_AMOUNT: &[u8] = b"Bad payment amount";
pub static ERROR_INSUFFICIENT_RESERVE: &[u8] = b"Insufficient reward reserve.";
