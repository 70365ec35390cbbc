mod camera_control;

pub use camera_control::apply_input_to_camera;

//
// ──────────────────────────────────────────────────────────────
//   Input events
//
//   The windowing layer (app.rs) translates winit events into
//   this enum, so the sampler never sees a winit type and the
//   whole input→camera path stays testable off-screen.
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent
{
  /// Pointer moved to absolute window coordinates (origin top-left,
  /// y grows downward).
  PointerMoved
  {
    x: f32, y: f32
  },

  /// The look button (left mouse) changed state.
  DragButton
  {
    pressed: bool
  },

  /// Scroll wheel, in lines. Positive is "up".
  Scroll
  {
    lines: f32
  },
}

//
// ──────────────────────────────────────────────────────────────
//   Drag sampler
//
//   Accumulates sensitivity-scaled look deltas while the look
//   button is held. The first move after a press only records
//   the pointer position: without that, a press after the
//   pointer wandered elsewhere would whip the camera across the
//   gap between the stale and fresh coordinates.
// ──────────────────────────────────────────────────────────────
//

pub struct DragSampler
{
  sensitivity: f32, // degrees of rotation per pixel of drag

  dragging: bool,
  first_sample: bool,
  last_x: f32,
  last_y: f32,

  /// Scaled look delta accumulated since `end_frame`, in degrees.
  pub dx: f32,
  pub dy: f32,

  /// Scroll lines accumulated since `end_frame`.
  pub scroll: f32,
}

impl DragSampler
{
  pub fn new(sensitivity: f32) -> Self
  {
    Self {
      sensitivity,

      dragging: false,
      first_sample: true,
      last_x: 0.0,
      last_y: 0.0,

      dx: 0.0,
      dy: 0.0,

      scroll: 0.0,
    }
  }

  /// True while the look button is held. The windowing layer uses this
  /// to keep routing pointer events here even when an overlay would
  /// otherwise capture them, so a drag that crosses the overlay neither
  /// stalls nor jumps on exit.
  pub fn is_dragging(&self) -> bool
  {
    self.dragging
  }

  pub fn handle(&mut self, event: InputEvent)
  {
    match event
    {
      InputEvent::PointerMoved { x, y } => self.pointer_moved(x, y),

      InputEvent::DragButton { pressed } =>
      {
        self.dragging = pressed;
        // Armed on press so a fresh drag starts clean, and on release
        // so the next press starts clean too.
        self.first_sample = true;
      }

      InputEvent::Scroll { lines } => self.scroll += lines,
    }
  }

  /// Clear the per-frame accumulators once the frame driver has
  /// consumed them.
  pub fn end_frame(&mut self)
  {
    self.dx = 0.0;
    self.dy = 0.0;
    self.scroll = 0.0;
  }

  fn pointer_moved(&mut self, x: f32, y: f32)
  {
    if !self.dragging
    {
      return;
    }

    if self.first_sample
    {
      self.last_x = x;
      self.last_y = y;
      self.first_sample = false;
      return;
    }

    // y is inverted: screen coordinates grow downward, pitch grows upward
    self.dx += (x - self.last_x) * self.sensitivity;
    self.dy += (self.last_y - y) * self.sensitivity;

    self.last_x = x;
    self.last_y = y;
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  fn press() -> InputEvent
  {
    InputEvent::DragButton { pressed: true }
  }

  fn release() -> InputEvent
  {
    InputEvent::DragButton { pressed: false }
  }

  fn moved(x: f32, y: f32) -> InputEvent
  {
    InputEvent::PointerMoved { x, y }
  }

  #[test]
  fn first_move_after_press_is_swallowed()
  {
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(press());
    sampler.handle(moved(400.0, 300.0));

    assert_eq!(sampler.dx, 0.0);
    assert_eq!(sampler.dy, 0.0);
  }

  #[test]
  fn second_move_produces_scaled_delta()
  {
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(press());
    sampler.handle(moved(400.0, 300.0));
    sampler.handle(moved(410.0, 280.0));

    assert!((sampler.dx - 1.0).abs() < 1e-6); // 10 px right × 0.1
    assert!((sampler.dy - 2.0).abs() < 1e-6); // 20 px up × 0.1, inverted
  }

  #[test]
  fn moves_without_drag_do_nothing()
  {
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(moved(100.0, 100.0));
    sampler.handle(moved(900.0, 900.0));

    assert_eq!(sampler.dx, 0.0);
    assert_eq!(sampler.dy, 0.0);
  }

  #[test]
  fn release_rearms_first_sample()
  {
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(press());
    sampler.handle(moved(0.0, 0.0));
    sampler.handle(moved(10.0, 0.0));
    sampler.handle(release());
    sampler.end_frame();

    // Pointer wanders far away with the button up, then a new drag
    // starts: the gap must not turn into a delta.
    sampler.handle(moved(800.0, 600.0));
    sampler.handle(press());
    sampler.handle(moved(805.0, 600.0));

    assert_eq!(sampler.dx, 0.0);
    assert_eq!(sampler.dy, 0.0);

    sampler.handle(moved(810.0, 600.0));
    assert!((sampler.dx - 0.5).abs() < 1e-6);
  }

  #[test]
  fn is_dragging_tracks_button_state()
  {
    let mut sampler = DragSampler::new(0.1);
    assert!(!sampler.is_dragging());

    sampler.handle(press());
    assert!(sampler.is_dragging());

    sampler.handle(release());
    assert!(!sampler.is_dragging());
  }

  #[test]
  fn drag_fed_every_move_stays_continuous()
  {
    // A drag that passes over the overlay panel: as long as the button
    // is down the windowing layer keeps routing moves here, so each
    // delta is measured against the immediately previous position and
    // the total is exactly the path covered — no stale-position jump.
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(press());
    sampler.handle(moved(100.0, 100.0));
    sampler.handle(moved(120.0, 100.0)); // over the panel
    sampler.handle(moved(150.0, 100.0)); // still over the panel
    sampler.handle(moved(200.0, 100.0)); // back on the scene

    assert!((sampler.dx - 10.0).abs() < 1e-6); // (20 + 30 + 50) px × 0.1
    assert_eq!(sampler.dy, 0.0);
  }

  #[test]
  fn deltas_accumulate_within_a_frame()
  {
    let mut sampler = DragSampler::new(1.0);

    sampler.handle(press());
    sampler.handle(moved(0.0, 0.0));
    sampler.handle(moved(3.0, 0.0));
    sampler.handle(moved(7.0, 0.0));

    assert!((sampler.dx - 7.0).abs() < 1e-6);

    sampler.end_frame();
    assert_eq!(sampler.dx, 0.0);
  }

  #[test]
  fn scroll_accumulates_and_clears()
  {
    let mut sampler = DragSampler::new(0.1);

    sampler.handle(InputEvent::Scroll { lines: 1.0 });
    sampler.handle(InputEvent::Scroll { lines: -3.0 });
    assert_eq!(sampler.scroll, -2.0);

    sampler.end_frame();
    assert_eq!(sampler.scroll, 0.0);
  }
}
