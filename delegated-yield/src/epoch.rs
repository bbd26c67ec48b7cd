multiversx_sc::imports!();

/// Epoch `e` covers `[epoch_start + e * epoch_length, epoch_start + (e + 1) * epoch_length)`.
pub fn epoch_at(timestamp: u64, epoch_start: u64, epoch_length: u64) -> u64 {
    timestamp.saturating_sub(epoch_start) / epoch_length
}

#[multiversx_sc::module]
pub trait EpochModule: crate::storage::StorageModule {
    #[view(getCurrentEpoch)]
    fn get_current_epoch(&self) -> u64 {
        epoch_at(
            self.blockchain().get_block_timestamp(),
            self.epoch_start().get(),
            self.config().get().epoch_length_seconds,
        )
    }

    #[view(getEpochBounds)]
    fn get_epoch_bounds(&self, epoch: u64) -> MultiValue2<u64, u64> {
        let length = self.config().get().epoch_length_seconds;
        let start = self
            .epoch_start()
            .get()
            .saturating_add(epoch.saturating_mul(length));
        (start, start.saturating_add(length)).into()
    }
}

