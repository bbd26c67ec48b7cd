fn main() {
    multiversx_sc_meta_lib::cli_main::<locked_staking_mock::AbiProvider>();
}
