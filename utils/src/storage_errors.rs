use soroban_sdk::contracterror;

// Raised by the generated instance getters when a constructor value was never written.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StorageError {
    ValueNotInitialized = 501,
}
