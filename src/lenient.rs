use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::touch::count_from_status;
use crate::{Ft6x36, Reg, TouchPoint};

/// Infallible view of a [`Ft6x36`], obtained with [`Ft6x36::lenient`].
///
/// Every accessor returns a plain value. When a bus transaction fails the
/// error is logged at `warn` level and the read buffer is returned as it
/// stands, which is zero for a fresh read. Writes that fail are dropped.
/// Use this when a stale or zero reading is preferable to handling errors,
/// e.g. in a UI poll loop.
pub struct Lenient<'a, I> {
  dev: &'a mut Ft6x36<I>,
}

impl<'a, I> Lenient<'a, I>
where
  I: I2c<SevenBitAddress>,
{
  pub(crate) fn new(dev: &'a mut Ft6x36<I>) -> Self {
    Self { dev }
  }

  pub fn read_register(&mut self, reg: u8) -> u8 {
    let mut buf = [0u8];
    if let Err(e) = self.dev.read_register_into(reg, &mut buf) {
      log::warn!("ft6x36@{:#04x}: read of {:#04x} failed: {:?}", self.dev.wire_address(), reg, e);
    }
    buf[0]
  }

  pub fn write_register(&mut self, reg: u8, value: u8) {
    if let Err(e) = self.dev.write_register(reg, value) {
      log::warn!("ft6x36@{:#04x}: write of {:#04x} failed: {:?}", self.dev.wire_address(), reg, e);
    }
  }

  pub fn read_chip_id(&mut self) -> u8 {
    self.read_register(Reg::FocaltechId.into())
  }

  /// See [`Ft6x36::touch_count`]. The power-up clamp still applies.
  pub fn touch_count(&mut self) -> u8 {
    count_from_status(self.read_register(Reg::TdStatus.into()))
  }

  /// See [`Ft6x36::touch_point`]. Each field register is read on its own,
  /// so a failing transfer only zeroes the fields it feeds.
  pub fn touch_point(&mut self, index: u8, point: &mut TouchPoint) {
    let xh = self.read_register(Reg::P1Xh.for_point(index));
    let xl = self.read_register(Reg::P1Xl.for_point(index));
    let yh = self.read_register(Reg::P1Yh.for_point(index));
    let yl = self.read_register(Reg::P1Yl.for_point(index));
    let weight = self.read_register(Reg::P1Weight.for_point(index));
    let misc = self.read_register(Reg::P1Misc.for_point(index));
    *point = TouchPoint::from_registers([xh, xl, yh, yl, weight, misc]);
  }

  pub fn gesture(&mut self) -> u8 {
    self.read_register(Reg::GestId.into())
  }

  pub fn threshold(&mut self) -> u8 {
    self.read_register(Reg::ThGroup.into())
  }

  pub fn set_threshold(&mut self, threshold: u8) {
    self.write_register(Reg::ThGroup.into(), threshold)
  }

  pub fn set_mode_switching(&mut self, enable: bool) {
    self.write_register(Reg::Ctrl.into(), u8::from(enable))
  }

  pub fn set_mode_switch_delay(&mut self, delay: u8) {
    self.write_register(Reg::TimeEnterMonitor.into(), delay)
  }

  pub fn period_active(&mut self) -> u8 {
    self.read_register(Reg::PeriodActive.into())
  }

  pub fn set_period_active(&mut self, period: u8) {
    self.write_register(Reg::PeriodActive.into(), period)
  }

  pub fn period_monitor(&mut self) -> u8 {
    self.read_register(Reg::PeriodMonitor.into())
  }

  pub fn set_period_monitor(&mut self, period: u8) {
    self.write_register(Reg::PeriodMonitor.into(), period)
  }
}
