use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft6x36, Reg};

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read a single register.
  ///
  /// Issued as two separate transactions, a one byte write selecting the
  /// register followed by a one byte read, without a repeated start. Any
  /// address is passed through unchecked.
  pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<E>> {
    let mut buf = [0u8];
    self.read_register_into(reg, &mut buf)?;
    Ok(buf[0])
  }

  /// Write a single register with one two byte transaction.
  pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg, value]).map_err(Error::I2c)?;
    log::trace!("ft6x36@{:#04x}: [{:#04x}] <- {:#04x}", self.wire_address(), reg, value);
    Ok(())
  }

  /// Same as [`Ft6x36::read_register`], but lands the byte in a caller
  /// buffer which is left untouched when the bus fails.
  pub(crate) fn read_register_into(&mut self, reg: u8, buf: &mut [u8; 1]) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg]).map_err(Error::I2c)?;
    self.i2c.read(self.address, buf).map_err(Error::I2c)?;
    log::trace!("ft6x36@{:#04x}: [{:#04x}] -> {:#04x}", self.wire_address(), reg, buf[0]);
    Ok(())
  }

  // Typed helpers
  pub(crate) fn read(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    self.read_register(reg.into())
  }

  pub(crate) fn write(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_register(reg.into(), value)
  }
}
