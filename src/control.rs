use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft6x36, Reg};

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Touch detection threshold. Lower is more sensitive.
  pub fn threshold(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::ThGroup)
  }

  pub fn set_threshold(&mut self, threshold: u8) -> Result<(), Error<E>> {
    self.write(Reg::ThGroup, threshold)
  }

  /// Whether the chip drops from active to monitor mode on its own when
  /// there is no touch.
  pub fn mode_switching(&mut self) -> Result<bool, Error<E>> {
    self.read(Reg::Ctrl).map(|ctrl| ctrl & 0x01 != 0)
  }

  /// Enable (`0x01`) or disable (`0x00`) automatic active/monitor switching.
  pub fn set_mode_switching(&mut self, enable: bool) -> Result<(), Error<E>> {
    self.write(Reg::Ctrl, u8::from(enable))
  }

  /// Delay without touch before entering monitor mode.
  pub fn mode_switch_delay(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::TimeEnterMonitor)
  }

  pub fn set_mode_switch_delay(&mut self, delay: u8) -> Result<(), Error<E>> {
    self.write(Reg::TimeEnterMonitor, delay)
  }

  /// Scan period in active mode.
  pub fn period_active(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::PeriodActive)
  }

  pub fn set_period_active(&mut self, period: u8) -> Result<(), Error<E>> {
    self.write(Reg::PeriodActive, period)
  }

  /// Scan period in monitor mode.
  pub fn period_monitor(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::PeriodMonitor)
  }

  pub fn set_period_monitor(&mut self, period: u8) -> Result<(), Error<E>> {
    self.write(Reg::PeriodMonitor, period)
  }

  /// Current INT pin behaviour.
  pub fn interrupt_mode(&mut self) -> Result<InterruptMode, Error<E>> {
    self.read(Reg::GMode).map(InterruptMode::from_bits)
  }

  pub fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), Error<E>> {
    self.write(Reg::GMode, mode.into())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
  /// INT stays asserted while a touch is present.
  Polling = 0x00,
  /// INT pulses once per report.
  Trigger = 0x01,
}

impl InterruptMode {
  pub const fn from_bits(bits: u8) -> Self {
    match bits & 0b1 {
      0b0 => Self::Polling,
      _ => Self::Trigger,
    }
  }
}

impl From<InterruptMode> for u8 {
  fn from(v: InterruptMode) -> Self {
    v as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::RegisterFile;

  #[test]
  fn threshold_round_trips() {
    let mut bus = RegisterFile::new();
    let mut dev = Ft6x36::new(&mut bus);

    for v in [0x00, 0x16, 0x80, 0xFF] {
      dev.set_threshold(v).unwrap();
      assert_eq!(dev.threshold(), Ok(v));
    }
  }

  #[test]
  fn mode_switching_writes_exact_bytes() {
    let mut bus = RegisterFile::new();
    {
      let mut dev = Ft6x36::new(&mut bus);
      dev.set_mode_switching(true).unwrap();
      assert_eq!(dev.mode_switching(), Ok(true));
      dev.set_mode_switching(false).unwrap();
      assert_eq!(dev.mode_switching(), Ok(false));
    }
    assert_eq!(bus.writes(), std::vec![(0x86, 0x01), (0x86, 0x00)]);
  }

  #[test]
  fn scan_periods_and_delay_hit_their_registers() {
    let mut bus = RegisterFile::new();
    {
      let mut dev = Ft6x36::new(&mut bus);
      dev.set_mode_switch_delay(0x1E).unwrap();
      dev.set_period_active(0x0C).unwrap();
      dev.set_period_monitor(0x28).unwrap();

      assert_eq!(dev.mode_switch_delay(), Ok(0x1E));
      assert_eq!(dev.period_active(), Ok(0x0C));
      assert_eq!(dev.period_monitor(), Ok(0x28));
    }
    assert_eq!(bus.writes(), std::vec![(0x87, 0x1E), (0x88, 0x0C), (0x89, 0x28)]);
  }

  #[test]
  fn interrupt_mode_round_trips() {
    let mut bus = RegisterFile::new();
    let mut dev = Ft6x36::new(&mut bus);

    dev.set_interrupt_mode(InterruptMode::Trigger).unwrap();
    assert_eq!(dev.interrupt_mode(), Ok(InterruptMode::Trigger));
    dev.set_interrupt_mode(InterruptMode::Polling).unwrap();
    assert_eq!(dev.interrupt_mode(), Ok(InterruptMode::Polling));
  }
}
