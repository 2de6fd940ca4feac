use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft6x36, Reg};

/// Most touch points the controller tracks at once.
pub(crate) const MAX_TOUCHES: u8 = 2;

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Number of active touches, 0 to 2.
  ///
  /// The status register can hold garbage (commonly `0xFF`) right after
  /// power-up, so anything above two is reported as no touch.
  pub fn touch_count(&mut self) -> Result<u8, Error<E>> {
    let status = self.read(Reg::TdStatus)?;
    Ok(count_from_status(status))
  }

  /// Read touch point `index` (1 or 2) into `point`.
  ///
  /// Six registers are read from the point's block. There is no check that
  /// the point is active, call [`Ft6x36::touch_count`] first. On error
  /// `point` is left as it was.
  pub fn touch_point(&mut self, index: u8, point: &mut TouchPoint) -> Result<(), Error<E>> {
    let regs = self.read_point_registers(index)?;
    *point = TouchPoint::from_registers(regs);
    Ok(())
  }

  /// Like [`Ft6x36::touch_point`], returning the decoded point.
  pub fn read_touch_point(&mut self, index: u8) -> Result<TouchPoint, Error<E>> {
    self.read_point_registers(index).map(TouchPoint::from_registers)
  }

  /// Snapshot of every active touch point.
  ///
  /// Reads the count first and only fetches the blocks that are live.
  pub fn touches(&mut self) -> Result<Touches, Error<E>> {
    let count = self.touch_count()?;
    let mut touches = Touches::default();
    for index in 1..=count {
      touches.points[usize::from(index - 1)] = Some(self.read_touch_point(index)?);
    }
    Ok(touches)
  }

  fn read_point_registers(&mut self, index: u8) -> Result<[u8; 6], Error<E>> {
    const FIELDS: [Reg; 6] = [Reg::P1Xh, Reg::P1Xl, Reg::P1Yh, Reg::P1Yl, Reg::P1Weight, Reg::P1Misc];

    let mut regs = [0u8; 6];
    for (value, reg) in regs.iter_mut().zip(FIELDS) {
      *value = self.read_register(reg.for_point(index))?;
    }
    Ok(regs)
  }
}

#[inline]
pub(crate) fn count_from_status(status: u8) -> u8 {
  let count = status & 0b111;
  if count > MAX_TOUCHES {
    log::debug!("ft6x36: discarding bogus touch count {} (status {:#04x})", count, status);
    0
  } else {
    count
  }
}

/// Event flag carried in the top two bits of the X-high register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
  #[default]
  PressDown = 0b00,
  LiftUp = 0b01,
  Contact = 0b10,
  NoEvent = 0b11,
}

impl TouchEvent {
  pub const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::PressDown,
      0b01 => Self::LiftUp,
      0b10 => Self::Contact,
      _ => Self::NoEvent,
    }
  }

  /// Finger is on the panel (just pressed or still in contact).
  pub fn is_down(&self) -> bool {
    matches!(self, TouchEvent::PressDown | TouchEvent::Contact)
  }
}

impl From<TouchEvent> for u8 {
  fn from(v: TouchEvent) -> Self {
    v as u8
  }
}

/// One decoded touch sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
  /// X coordinate, 12 bits.
  pub x: u16,
  /// Y coordinate, 12 bits.
  pub y: u16,
  /// Tracking ID distinguishing concurrent touches, normally 0 or 1.
  pub touch_id: u8,
  /// Raw weight (pressure) register.
  pub weight: u8,
  /// Touch area field of the misc register.
  pub area: u8,
  pub event: TouchEvent,
}

impl TouchPoint {
  /// Decode a point block laid out as X-high, X-low, Y-high, Y-low, weight,
  /// misc.
  pub const fn from_registers(regs: [u8; 6]) -> Self {
    let [xh, xl, yh, yl, weight, misc] = regs;
    Self {
      x: coordinate(xh, xl),
      y: coordinate(yh, yl),
      touch_id: yh >> 4,
      weight,
      area: misc >> 4,
      event: TouchEvent::from_bits(xh >> 6),
    }
  }
}

/// 12-bit coordinate from the low nibble of the high register and the low
/// register.
#[inline]
pub(crate) const fn coordinate(high: u8, low: u8) -> u16 {
  ((high as u16 & 0x0F) << 8) | low as u16
}

/// Every touch point active at the time of a [`Ft6x36::touches`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Touches {
  points: [Option<TouchPoint>; MAX_TOUCHES as usize],
}

impl Touches {
  pub fn count(&self) -> usize {
    self.iter().count()
  }

  pub fn is_empty(&self) -> bool {
    self.points[0].is_none()
  }

  /// First reported point.
  pub fn primary(&self) -> Option<&TouchPoint> {
    self.points[0].as_ref()
  }

  pub fn secondary(&self) -> Option<&TouchPoint> {
    self.points[1].as_ref()
  }

  pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
    self.points.iter().flatten()
  }
}
