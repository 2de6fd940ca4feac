#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the FocalTech FT6x36 family of capacitive
//! touch controllers (FT6206, FT6236, FT6336 and friends).
//!
//! The FT6x36 reports up to two simultaneous touch points plus a handful of
//! gesture codes over I²C. This crate maps the register file onto a small
//! typed API:
//!
//! - Touch count and per-point coordinates, event flag, ID, weight and area
//! - Gesture readout, raw or decoded into [`Gesture`]
//! - Detection threshold, active/monitor scan periods and automatic
//!   power-mode switching
//! - Chip identification helpers
//! - A [`Lenient`] facade that never returns an error, for callers that want
//!   the classic "best effort byte" behaviour
//!
//! The driver is generic over `embedded-hal` 1.0's blocking
//! [`I2c`](embedded_hal::i2c::I2c) trait. Pass `&mut bus` instead of the bus
//! itself when the peripheral must stay owned elsewhere.
//!
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use ft6x36::{Ft6x36, TouchPoint};
//!
//! fn example<I2C: I2c>(bus: &mut I2C) -> Result<(), ft6x36::Error<I2C::Error>> {
//!   let mut touch = Ft6x36::new(bus);
//!   touch.set_threshold(40)?;
//!
//!   let mut point = TouchPoint::default();
//!   for index in 1..=touch.touch_count()? {
//!     touch.touch_point(index, &mut point)?;
//!   }
//!   Ok(())
//! }
//! ```
mod config;
mod control;
mod gesture;
mod info;
mod lenient;
mod reg;
mod rw;
mod touch;

#[cfg(test)]
extern crate std;
#[cfg(test)]
mod mock;

use embedded_hal::i2c::{ErrorKind, I2c, SevenBitAddress};
use reg::Reg;

pub use config::*;
pub use control::InterruptMode;
pub use gesture::Gesture;
pub use info::{ChipFamily, Info};
pub use lenient::Lenient;
pub use reg::DEFAULT_ADDRESS;
pub use touch::{TouchEvent, TouchPoint, Touches};

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
}

impl<E: embedded_hal::i2c::Error> embedded_hal::i2c::Error for Error<E> {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::I2c(e) => e.kind(),
    }
  }
}

impl<E: embedded_hal::i2c::Error> core::fmt::Display for Error<E> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Error::I2c(e) => write!(f, "I2C transaction failed: {:?}", e.kind()),
    }
  }
}

/// Driver for one FT6x36 controller on an I²C bus.
///
/// The driver is stateless: every method goes straight to the chip and
/// nothing is cached between calls. The bus address is fixed at
/// construction.
pub struct Ft6x36<I> {
  i2c: I,
  address: SevenBitAddress,
}

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver talking to the factory address [`DEFAULT_ADDRESS`].
  pub fn new(i2c: I) -> Self {
    Self::new_with_address(i2c, DEFAULT_ADDRESS)
  }

  /// Create a driver for a controller at a non-default 7-bit address.
  ///
  /// Pass the address unshifted; the HAL adds the R/W bit on the wire.
  pub fn new_with_address(i2c: I, address: SevenBitAddress) -> Self {
    Self { i2c, address }
  }

  /// The 7-bit address this driver talks to.
  pub fn address(&self) -> SevenBitAddress {
    self.address
  }

  /// The address as it appears on the wire, shifted left by one with the
  /// R/W bit clear.
  pub fn wire_address(&self) -> u8 {
    self.address << 1
  }

  /// Borrow the driver as a [`Lenient`] facade whose accessors swallow bus
  /// errors.
  pub fn lenient(&mut self) -> Lenient<'_, I> {
    Lenient::new(self)
  }

  /// Give the bus back.
  pub fn release(self) -> I {
    self.i2c
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::RegisterFile;

  #[test]
  fn default_address_is_factory_address() {
    let dev = Ft6x36::new(RegisterFile::new());
    assert_eq!(dev.address(), 0x38);
    assert_eq!(dev.wire_address(), 0x70);
  }

  #[test]
  fn custom_address_is_kept_unshifted() {
    let dev = Ft6x36::new_with_address(RegisterFile::new(), 0x15);
    assert_eq!(dev.address(), 0x15);
    assert_eq!(dev.wire_address(), 0x2A);
  }

  #[test]
  fn borrowed_bus_is_usable_after_driver_drops() {
    let mut bus = RegisterFile::new();
    bus.set(0xA8, 0x11);
    {
      let mut dev = Ft6x36::new(&mut bus);
      assert_eq!(dev.read_chip_id(), Ok(0x11));
    }
    assert_eq!(bus.log().len(), 2);
  }

  #[test]
  fn error_reports_hal_kind() {
    use embedded_hal::i2c::{Error as _, NoAcknowledgeSource};

    let err: Error<ErrorKind> = Error::I2c(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    assert_eq!(err.kind(), ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
  }
}
