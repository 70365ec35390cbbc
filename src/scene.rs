use glam::{Mat4, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Cube field
//
//   Ten cubes scattered down the −Z axis. Each carries a fixed
//   tilt of 20°·i about (1, 0.3, 0.5); every third one also
//   spins about (0.5, 1, 0) by a time-driven angle.
// ──────────────────────────────────────────────────────────────
//

pub const CUBE_COUNT: usize = 10;

const CUBE_POSITIONS: [Vec3; CUBE_COUNT] = [
  Vec3::new(0.0, 0.0, 0.0),
  Vec3::new(2.0, 5.0, -15.0),
  Vec3::new(-1.5, -2.2, -2.5),
  Vec3::new(-3.8, -2.0, -12.3),
  Vec3::new(2.4, -0.4, -3.5),
  Vec3::new(-1.7, 3.0, -7.5),
  Vec3::new(1.3, -2.0, -2.5),
  Vec3::new(1.5, 2.0, -2.5),
  Vec3::new(1.5, 0.2, -1.5),
  Vec3::new(-1.3, 1.0, -1.5),
];

const TILT_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);
const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
const TILT_STEP_DEG: f32 = 20.0;

pub struct Scene
{
  spin: f32,      // radians, wrapped to [0, 2π)
  spin_rate: f32, // radians per second
}

impl Scene
{
  pub fn new(spin_rate: f32) -> Self
  {
    Self { spin: 0.0, spin_rate }
  }

  pub fn spin(&self) -> f32
  {
    self.spin
  }

  /// Advance the time-driven rotation by `dt` seconds. Wrapped every
  /// frame so the angle never grows without bound.
  pub fn advance(&mut self, dt: f32)
  {
    self.spin = (self.spin + self.spin_rate * dt) % std::f32::consts::TAU;
  }

  /// World transform for every cube, in draw order.
  pub fn model_matrices(&self) -> [Mat4; CUBE_COUNT]
  {
    std::array::from_fn(|i| model_matrix(i, self.spin))
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Per-cube transform
// ──────────────────────────────────────────────────────────────
//

fn model_matrix(index: usize, spin: f32) -> Mat4
{
  let mut model = Mat4::from_translation(CUBE_POSITIONS[index]);

  if index % 3 == 2
  {
    model *= Mat4::from_axis_angle(SPIN_AXIS.normalize(), spin);
  }

  let tilt = (TILT_STEP_DEG * index as f32).to_radians();
  model * Mat4::from_axis_angle(TILT_AXIS.normalize(), tilt)
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn spin_wraps_modulo_tau()
  {
    let mut scene = Scene::new(1.0);

    for _ in 0..100
    {
      scene.advance(0.5);
    }

    assert!(scene.spin() >= 0.0);
    assert!(scene.spin() < std::f32::consts::TAU);
  }

  #[test]
  fn one_matrix_per_cube()
  {
    let scene = Scene::new(0.6);
    assert_eq!(scene.model_matrices().len(), CUBE_COUNT);
  }

  #[test]
  fn only_every_third_cube_spins()
  {
    let mut scene = Scene::new(1.0);
    let before = scene.model_matrices();

    scene.advance(0.25);
    let after = scene.model_matrices();

    for i in 0..CUBE_COUNT
    {
      let changed = before[i] != after[i];
      assert_eq!(changed, i % 3 == 2, "cube {i}");
    }
  }

  #[test]
  fn first_cube_is_untilted_at_origin()
  {
    let scene = Scene::new(0.6);
    let m = scene.model_matrices()[0];

    // index 0 → tilt angle 0 → pure (identity) translation to the origin
    assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
  }

  #[test]
  fn transform_places_cube_at_its_position()
  {
    let scene = Scene::new(0.6);
    let m = scene.model_matrices()[1];

    let centre = m.transform_point3(glam::Vec3::ZERO);
    assert!((centre - CUBE_POSITIONS[1]).length() < 1e-5);
  }
}
