use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft6x36, Reg};

impl<I, E> Ft6x36<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Raw gesture ID register.
  pub fn gesture(&mut self) -> Result<u8, Error<E>> {
    self.read(Reg::GestId)
  }

  /// Gesture ID decoded into a [`Gesture`], `None` when no (or an unknown)
  /// gesture is latched. Not every panel firmware reports gestures.
  pub fn read_gesture(&mut self) -> Result<Option<Gesture>, Error<E>> {
    self.gesture().map(Gesture::from_id)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gesture {
  MoveUp = 0x10,
  MoveRight = 0x14,
  MoveDown = 0x18,
  MoveLeft = 0x1C,
  ZoomIn = 0x48,
  ZoomOut = 0x49,
}

impl Gesture {
  pub const fn from_id(id: u8) -> Option<Self> {
    match id {
      0x10 => Some(Self::MoveUp),
      0x14 => Some(Self::MoveRight),
      0x18 => Some(Self::MoveDown),
      0x1C => Some(Self::MoveLeft),
      0x48 => Some(Self::ZoomIn),
      0x49 => Some(Self::ZoomOut),
      _ => None,
    }
  }

  pub fn id(&self) -> u8 {
    *self as u8
  }

  pub fn is_swipe(&self) -> bool {
    matches!(self, Gesture::MoveUp | Gesture::MoveRight | Gesture::MoveDown | Gesture::MoveLeft)
  }

  pub fn is_zoom(&self) -> bool {
    matches!(self, Gesture::ZoomIn | Gesture::ZoomOut)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::RegisterFile;

  #[test]
  fn known_ids_decode_and_encode() {
    for g in [
      Gesture::MoveUp,
      Gesture::MoveRight,
      Gesture::MoveDown,
      Gesture::MoveLeft,
      Gesture::ZoomIn,
      Gesture::ZoomOut,
    ] {
      assert_eq!(Gesture::from_id(g.id()), Some(g));
    }
    assert!(Gesture::MoveLeft.is_swipe());
    assert!(Gesture::ZoomOut.is_zoom());
  }

  #[test]
  fn no_gesture_and_unknown_ids_are_none() {
    assert_eq!(Gesture::from_id(0x00), None);
    assert_eq!(Gesture::from_id(0x11), None);
  }

  #[test]
  fn reads_gesture_register() {
    let mut bus = RegisterFile::new();
    bus.set(0x01, 0x48);
    {
      let mut dev = Ft6x36::new(&mut bus);
      assert_eq!(dev.gesture(), Ok(0x48));
      assert_eq!(dev.read_gesture(), Ok(Some(Gesture::ZoomIn)));
    }
    assert_eq!(bus.selected(), std::vec![0x01, 0x01]);
  }
}
