//! Mock bus for unit tests: records transactions and serves canned reads.

use super::{RegisterBus, SharedBus};
use crate::errors::{BusError, BusResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex as StdMutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Read { address: u8, reg: u8, len: usize },
    Write { address: u8, reg: u8, value: u8 },
}

#[derive(Default)]
struct MockState {
    transactions: Vec<Transaction>,
    read_data: Vec<u8>,
    fail_message: Option<String>,
}

/// Clones share state, so tests keep one copy for inspection while the bus
/// handle owns another.
#[derive(Default, Clone)]
pub struct MockBus {
    state: Arc<StdMutex<MockState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box a clone of this bus into a shared handle.
    pub fn handle(&self) -> SharedBus {
        Arc::new(tokio::sync::Mutex::new(self.clone()))
    }

    /// Bytes served to subsequent reads.
    pub fn set_read_data(&self, data: &[u8]) {
        self.state.lock().unwrap().read_data = data.to_vec();
    }

    /// Make every following transfer fail with the given message.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().fail_message = Some(message.to_string());
    }

    /// Transaction log for test verification.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().transactions.clone()
    }
}

#[async_trait]
impl RegisterBus for MockBus {
    async fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> BusResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.fail_message {
            return Err(BusError::Transfer(message.clone()));
        }
        state.transactions.push(Transaction::Read {
            address,
            reg,
            len: buf.len(),
        });
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = state.read_data.get(i).copied().unwrap_or(0);
        }
        Ok(())
    }

    async fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> BusResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.fail_message {
            return Err(BusError::Transfer(message.clone()));
        }
        state.transactions.push(Transaction::Write {
            address,
            reg,
            value,
        });
        Ok(())
    }
}
