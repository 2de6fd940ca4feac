use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::{CIPHER_FT6206, CIPHER_FT6236, CIPHER_FT6236U};
use crate::{Error, Ft6x36, Reg};

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// FocalTech ID register identifying the connected chip.
  pub fn read_chip_id(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::FocaltechId)
  }

  /// Raw chip-family ("cipher") register.
  pub fn cipher(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::Cipher)
  }

  pub fn chip_family(&mut self) -> Result<ChipFamily, Error<E>> {
    self.cipher().map(ChipFamily::from_cipher)
  }

  pub fn firmware_version(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::FirmId)
  }

  /// Fetch all identification registers at once.
  pub fn info(&mut self) -> Result<Info, Error<E>> {
    let info = Info {
      chip_id: self.read_chip_id()?,
      family: self.chip_family()?,
      firmware: self.firmware_version()?,
    };
    if let ChipFamily::Unknown(cipher) = info.family {
      log::warn!("ft6x36: unrecognised chip cipher {:#04x}", cipher);
    }
    Ok(info)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipFamily {
  Ft6206,
  Ft6236,
  Ft6236U,
  Unknown(u8),
}

impl ChipFamily {
  pub const fn from_cipher(cipher: u8) -> Self {
    match cipher {
      CIPHER_FT6206 => Self::Ft6206,
      CIPHER_FT6236 => Self::Ft6236,
      CIPHER_FT6236U => Self::Ft6236U,
      other => Self::Unknown(other),
    }
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, ChipFamily::Unknown(_))
  }
}

/// Identification registers of the connected controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Info {
  pub chip_id: u8,
  pub family: ChipFamily,
  pub firmware: u8,
}
