pub mod test_vesting;
