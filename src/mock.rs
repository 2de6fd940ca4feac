//! Simulated FT6x36 register file used by the unit tests.

use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

/// One recorded bus operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transaction {
  Write(SevenBitAddress, Vec<u8>),
  Read(SevenBitAddress, usize),
}

/// 256 byte register array behind an auto-incrementing register pointer,
/// the way the chip itself behaves.
///
/// A write sets the pointer from its first byte and stores the rest
/// sequentially. A read returns bytes from the pointer onward.
pub(crate) struct RegisterFile {
  regs: [u8; 256],
  pointer: u8,
  log: Vec<Transaction>,
  failing: bool,
}

impl RegisterFile {
  pub(crate) fn new() -> Self {
    Self { regs: [0; 256], pointer: 0, log: Vec::new(), failing: false }
  }

  pub(crate) fn set(&mut self, reg: u8, value: u8) {
    self.regs[reg as usize] = value;
  }

  pub(crate) fn get(&self, reg: u8) -> u8 {
    self.regs[reg as usize]
  }

  /// Make every following transaction NACK.
  pub(crate) fn fail(&mut self, failing: bool) {
    self.failing = failing;
  }

  pub(crate) fn log(&self) -> &[Transaction] {
    &self.log
  }

  /// Registers selected by every write that carried only a register address.
  pub(crate) fn selected(&self) -> Vec<u8> {
    self
      .log
      .iter()
      .filter_map(|t| match t {
        Transaction::Write(_, bytes) if bytes.len() == 1 => Some(bytes[0]),
        _ => None,
      })
      .collect()
  }

  /// Values written by register writes, as `(register, value)` pairs.
  pub(crate) fn writes(&self) -> Vec<(u8, u8)> {
    self
      .log
      .iter()
      .filter_map(|t| match t {
        Transaction::Write(_, bytes) if bytes.len() == 2 => Some((bytes[0], bytes[1])),
        _ => None,
      })
      .collect()
  }
}

impl ErrorType for RegisterFile {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for RegisterFile {
  fn transaction(&mut self, address: SevenBitAddress, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    if self.failing {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }
    for op in operations {
      match op {
        Operation::Write(bytes) => {
          self.log.push(Transaction::Write(address, bytes.to_vec()));
          if let Some((&reg, data)) = bytes.split_first() {
            self.pointer = reg;
            for &b in data {
              self.regs[self.pointer as usize] = b;
              self.pointer = self.pointer.wrapping_add(1);
            }
          }
        }
        Operation::Read(buf) => {
          self.log.push(Transaction::Read(address, buf.len()));
          for b in buf.iter_mut() {
            *b = self.regs[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
          }
        }
      }
    }
    Ok(())
  }
}
