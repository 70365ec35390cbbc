use glam::{Mat4, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Free-fly camera (right-handed, Y-up)
//
//   Unlike an orbit camera there is no target point: the camera
//   sits at `position` and looks along `front`, which the
//   orientation model keeps unit length. `zoom` is the vertical
//   field of view in degrees — scrolling shrinks it, which reads
//   as zooming in.
// ──────────────────────────────────────────────────────────────
//

const ZOOM_MIN: f32 = 1.0; // degrees
const ZOOM_MAX: f32 = 45.0;

const ZNEAR: f32 = 0.1;
const ZFAR: f32 = 100.0;

/// Strafe/advance directions for keyboard movement.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection
{
  Forward,
  Backward,
  Left,
  Right,
}

pub struct Camera
{
  pub position: Vec3,
  pub front: Vec3,
  pub up: Vec3,

  pub zoom: f32,
  pub aspect: f32,
  pub znear: f32,
  pub zfar: f32,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Camera
{
  pub fn new(position: Vec3, zoom: f32, aspect: f32) -> Self
  {
    Self {
      position,
      front: Vec3::NEG_Z,
      up: Vec3::Y,

      zoom: zoom.clamp(ZOOM_MIN, ZOOM_MAX),
      aspect,
      znear: ZNEAR,
      zfar: ZFAR,
    }
  }

  pub fn set_aspect(&mut self, aspect: f32)
  {
    self.aspect = aspect;
  }

  /// Store a new facing direction from the orientation model.
  ///
  /// Precondition: `front` must be unit length — the orientation model
  /// normalizes before handing it over, and nothing here re-checks.
  pub fn set_front(&mut self, front: Vec3)
  {
    self.front = front;
  }

  /// Scroll-wheel zoom: positive `lines` (scrolling up) narrows the
  /// field of view, i.e. zooms in. Clamped to [1, 45] degrees.
  pub fn apply_zoom_delta(&mut self, lines: f32)
  {
    self.zoom = (self.zoom - lines).clamp(ZOOM_MIN, ZOOM_MAX);
  }

  /// Move the eye along the view axes. `amount` is already
  /// speed × frame time, in world units.
  pub fn advance(&mut self, dir: MoveDirection, amount: f32)
  {
    let right = right_vector(self);

    match dir
    {
      MoveDirection::Forward => self.position += self.front * amount,
      MoveDirection::Backward => self.position -= self.front * amount,
      MoveDirection::Left => self.position -= right * amount,
      MoveDirection::Right => self.position += right * amount,
    }
  }

  pub fn view_matrix(&self) -> Mat4
  {
    build_view_matrix(self)
  }

  pub fn projection_matrix(&self) -> Mat4
  {
    build_projection_matrix(self)
  }

  pub fn build_view_proj(&self) -> Mat4
  {
    self.projection_matrix() * self.view_matrix()
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helper functions (flat, readable, no nesting)
// ──────────────────────────────────────────────────────────────
//

fn right_vector(cam: &Camera) -> Vec3
{
  cam.front.cross(cam.up).normalize()
}

fn build_view_matrix(cam: &Camera) -> Mat4
{
  Mat4::look_at_rh(cam.position, cam.position + cam.front, cam.up)
}

fn build_projection_matrix(cam: &Camera) -> Mat4
{
  Mat4::perspective_rh(cam.zoom.to_radians(), cam.aspect, cam.znear, cam.zfar)
}

#[cfg(test)]
mod tests
{
  use super::*;

  fn test_camera() -> Camera
  {
    Camera::new(Vec3::new(0.0, 0.0, 3.0), 45.0, 16.0 / 9.0)
  }

  #[test]
  fn scroll_up_zooms_in()
  {
    let mut cam = test_camera();

    cam.apply_zoom_delta(10.0);
    assert_eq!(cam.zoom, 35.0);
  }

  #[test]
  fn zoom_clamps_to_range()
  {
    let mut cam = test_camera();

    cam.apply_zoom_delta(100.0);
    assert_eq!(cam.zoom, 1.0);

    cam.apply_zoom_delta(-100.0);
    assert_eq!(cam.zoom, 45.0);

    for _ in 0..1000
    {
      cam.apply_zoom_delta(3.7);
    }
    assert!(cam.zoom >= 1.0 && cam.zoom <= 45.0);
  }

  #[test]
  fn constructor_clamps_zoom()
  {
    let cam = Camera::new(Vec3::ZERO, 90.0, 1.0);
    assert_eq!(cam.zoom, 45.0);
  }

  #[test]
  fn view_matrix_looks_along_front()
  {
    let cam = test_camera();

    // Default front is −Z, so a point straight ahead of the eye should
    // land on the view-space −Z axis.
    let ahead = cam.position + cam.front * 5.0;
    let in_view = cam.view_matrix().transform_point3(ahead);

    assert!(in_view.x.abs() < 1e-5);
    assert!(in_view.y.abs() < 1e-5);
    assert!((in_view.z + 5.0).abs() < 1e-5);
  }

  #[test]
  fn advance_moves_along_axes()
  {
    let mut cam = test_camera();

    cam.advance(MoveDirection::Forward, 2.0);
    assert!((cam.position.z - 1.0).abs() < 1e-5);

    cam.advance(MoveDirection::Right, 1.5);
    assert!((cam.position.x - 1.5).abs() < 1e-5);

    cam.advance(MoveDirection::Left, 1.5);
    cam.advance(MoveDirection::Backward, 2.0);
    assert!((cam.position - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
  }
}
