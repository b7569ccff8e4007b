//! The rendering surface handle.
//!
//! A non-send resource: surface backends usually wrap window handles that
//! must stay on the main thread. Use `NonSend<ScreenSurface>` /
//! `NonSendMut<ScreenSurface>` in system parameters.

use crate::surface::Surface;

pub struct ScreenSurface(pub Box<dyn Surface>);
