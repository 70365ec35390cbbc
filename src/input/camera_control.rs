use crate::camera::{Camera, Orientation};
use crate::input::DragSampler;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

/// Drain one frame's worth of sampled input into the camera.
pub fn apply_input_to_camera(
  sampler: &DragSampler,
  orientation: &mut Orientation,
  camera: &mut Camera,
)
{
  apply_look(sampler, orientation, camera);
  apply_zoom(sampler, camera);
}

//
// ──────────────────────────────────────────────────────────────
//   Input handlers
// ──────────────────────────────────────────────────────────────
//

fn apply_look(sampler: &DragSampler, orientation: &mut Orientation, camera: &mut Camera)
{
  if sampler.dx == 0.0 && sampler.dy == 0.0
  {
    return;
  }

  orientation.apply_delta(sampler.dx, sampler.dy);
  camera.set_front(orientation.front());
}

fn apply_zoom(sampler: &DragSampler, camera: &mut Camera)
{
  if sampler.scroll == 0.0
  {
    return;
  }

  camera.apply_zoom_delta(sampler.scroll);
}

#[cfg(test)]
mod tests
{
  use glam::Vec3;

  use super::*;
  use crate::input::InputEvent;

  fn rig() -> (DragSampler, Orientation, Camera)
  {
    let sampler = DragSampler::new(0.1);
    let orientation = Orientation::default();
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), 45.0, 16.0 / 9.0);

    (sampler, orientation, camera)
  }

  #[test]
  fn drag_turns_the_camera()
  {
    let (mut sampler, mut orientation, mut camera) = rig();

    sampler.handle(InputEvent::DragButton { pressed: true });
    sampler.handle(InputEvent::PointerMoved { x: 400.0, y: 300.0 });
    sampler.handle(InputEvent::PointerMoved { x: 500.0, y: 300.0 });

    apply_input_to_camera(&sampler, &mut orientation, &mut camera);

    // 100 px × 0.1 = 10° of yaw to the right of −Z
    assert!((orientation.yaw + 80.0).abs() < 1e-4);
    assert!((camera.front - orientation.front()).length() < 1e-6);
  }

  #[test]
  fn released_button_leaves_camera_untouched()
  {
    let (mut sampler, mut orientation, mut camera) = rig();
    let front_before = camera.front;

    sampler.handle(InputEvent::PointerMoved { x: 0.0, y: 0.0 });
    sampler.handle(InputEvent::PointerMoved { x: 640.0, y: 480.0 });

    apply_input_to_camera(&sampler, &mut orientation, &mut camera);

    assert_eq!(camera.front, front_before);
    assert_eq!(orientation.yaw, -90.0);
    assert_eq!(orientation.pitch, 0.0);
  }

  #[test]
  fn scroll_reaches_the_zoom()
  {
    let (mut sampler, mut orientation, mut camera) = rig();

    sampler.handle(InputEvent::Scroll { lines: 10.0 });
    apply_input_to_camera(&sampler, &mut orientation, &mut camera);

    assert_eq!(camera.zoom, 35.0);
  }
}
