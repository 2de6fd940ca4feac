use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft6x36, InterruptMode};

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Write every field set in `config` to the chip.
  ///
  /// Fields left as `None` are not touched, so the chip keeps its current
  /// value for them.
  pub fn configure(&mut self, config: &Config) -> Result<(), Error<E>> {
    log::debug!("ft6x36@{:#04x}: applying {:?}", self.wire_address(), config);

    if let Some(threshold) = config.threshold {
      self.set_threshold(threshold)?;
    }
    if let Some(enable) = config.mode_switching {
      self.set_mode_switching(enable)?;
    }
    if let Some(delay) = config.mode_switch_delay {
      self.set_mode_switch_delay(delay)?;
    }
    if let Some(period) = config.period_active {
      self.set_period_active(period)?;
    }
    if let Some(period) = config.period_monitor {
      self.set_period_monitor(period)?;
    }
    if let Some(mode) = config.interrupt_mode {
      self.set_interrupt_mode(mode)?;
    }
    Ok(())
  }
}

/// Staged register settings for [`Ft6x36::configure`].
///
/// ```no_run
/// use ft6x36::Config;
///
/// let config = Config::builder()
///   .with_threshold(40)
///   .with_mode_switching(true)
///   .with_period_active(12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub threshold: Option<u8>,
  pub mode_switching: Option<bool>,
  pub mode_switch_delay: Option<u8>,
  pub period_active: Option<u8>,
  pub period_monitor: Option<u8>,
  pub interrupt_mode: Option<InterruptMode>,
}

impl Config {
  /// Empty configuration; applying it writes nothing.
  pub const fn builder() -> Self {
    Self {
      threshold: None,
      mode_switching: None,
      mode_switch_delay: None,
      period_active: None,
      period_monitor: None,
      interrupt_mode: None,
    }
  }

  pub const fn with_threshold(mut self, threshold: u8) -> Self {
    self.threshold = Some(threshold);
    self
  }

  pub const fn with_mode_switching(mut self, enable: bool) -> Self {
    self.mode_switching = Some(enable);
    self
  }

  pub const fn with_mode_switch_delay(mut self, delay: u8) -> Self {
    self.mode_switch_delay = Some(delay);
    self
  }

  pub const fn with_period_active(mut self, period: u8) -> Self {
    self.period_active = Some(period);
    self
  }

  pub const fn with_period_monitor(mut self, period: u8) -> Self {
    self.period_monitor = Some(period);
    self
  }

  pub const fn with_interrupt_mode(mut self, mode: InterruptMode) -> Self {
    self.interrupt_mode = Some(mode);
    self
  }
}
