#![no_std]

mod contract;
mod events;
mod storage;
mod testutils;

pub use contract::{WrappedNative, WrappedNativeClient};
