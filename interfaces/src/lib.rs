#![no_std]

// Client-side views of the protocol contracts. Contracts call each other through
// these generated clients so no contract crate has to link another one.

pub mod flash_swap;
pub mod legacy_exchange;
pub mod pool;
pub mod router;
pub mod wrapped_native;
