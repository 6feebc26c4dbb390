pub mod client;
#[cfg(feature = "linux-hal")]
pub mod i2c;
#[cfg(test)]
pub(crate) mod mock;

use crate::errors::BusResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Register transfer surface implemented by each platform bus backend.
#[async_trait]
pub trait RegisterBus: Send {
    /// Read `buf.len()` bytes starting at register `reg` of the peripheral
    /// at `address`.
    async fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> BusResult<()>;

    /// Write one byte to register `reg` of the peripheral at `address`.
    async fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> BusResult<()>;
}

/// Shared handle to one physical bus; transfers from all attached clients
/// are serialized through the mutex.
pub type SharedBus = Arc<Mutex<dyn RegisterBus>>;
