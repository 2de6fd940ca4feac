//! Polling example: configure the controller, then read touches and gestures.
#![allow(unused)]
use embedded_hal::i2c::{I2c, SevenBitAddress};
use ft6x36::{Config, Ft6x36, Gesture, TouchPoint};

#[allow(dead_code)]
fn poll<I2C, E>(i2c: &mut I2C) -> Result<(), ft6x36::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
{
  let mut dev = Ft6x36::new(i2c);
  let info = dev.info()?;
  let _ = info;

  dev.configure(&Config::builder().with_threshold(40).with_mode_switching(true))?;

  let mut point = TouchPoint::default();
  loop {
    for index in 1..=dev.touch_count()? {
      dev.touch_point(index, &mut point)?;
      // handle point
    }

    if let Some(gesture) = dev.read_gesture()? {
      match gesture {
        Gesture::ZoomIn | Gesture::ZoomOut => {}
        _ => {}
      }
    }

    // same loop without error handling
    let mut quiet = dev.lenient();
    let _ = quiet.touch_count();
  }
}

fn main() {}
