/******************************************************************************
 * Refer to the FocalTech FT6x36 datasheet / application note for details:   *
 * - "FT6x36 Self-Capacitive Touch Panel Controller", register section       *
 * ========================================================================== *
 *                        FT6x36 - Registers & Memory Map                     *
*******************************************************************************/

/// Factory-fixed 7-bit bus address of every FT6x36 part.
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Register offset between the point-1 and point-2 register blocks.
pub(crate) const POINT_STRIDE: u8 = 6;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  DevMode = 0x00,

  // Touch report (0x01..0x0E)
  GestId = 0x01,
  TdStatus = 0x02,
  P1Xh = 0x03,
  P1Xl = 0x04,
  P1Yh = 0x05,
  P1Yl = 0x06,
  P1Weight = 0x07,
  P1Misc = 0x08,
  P2Xh = 0x09,
  P2Xl = 0x0A,
  P2Yh = 0x0B,
  P2Yl = 0x0C,
  P2Weight = 0x0D,
  P2Misc = 0x0E,

  // Configuration (0x80..0x89)
  ThGroup = 0x80,
  Ctrl = 0x86,
  TimeEnterMonitor = 0x87,
  PeriodActive = 0x88,
  PeriodMonitor = 0x89,

  // Identification & mode (0xA1..0xAF)
  LibVersionH = 0xA1,
  LibVersionL = 0xA2,
  Cipher = 0xA3,
  GMode = 0xA4,
  PowerMode = 0xA5,
  FirmId = 0xA6,
  FocaltechId = 0xA8,
  ReleaseCodeId = 0xAF,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

impl Reg {
  /// Address of this point-1 register shifted into the block of the
  /// 1-based point `index`.
  ///
  /// Index 1 is the register itself, index 2 is one stride further. Other
  /// indices are not rejected, the arithmetic simply wraps.
  #[inline]
  pub(crate) fn for_point(self, index: u8) -> u8 {
    u8::from(self).wrapping_add(POINT_STRIDE.wrapping_mul(index.wrapping_sub(1)))
  }
}

pub(crate) const CIPHER_FT6206: u8 = 0x06;
pub(crate) const CIPHER_FT6236: u8 = 0x36;
pub(crate) const CIPHER_FT6236U: u8 = 0x64;
