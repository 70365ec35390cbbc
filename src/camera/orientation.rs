use glam::Vec3;

//
// ──────────────────────────────────────────────────────────────
//   Orientation (yaw/pitch accumulator, Y-up right-hand rule)
//
//   Coordinate system:
//     X → right
//     Y → up
//     Z → toward the viewer (−Z points into the cube field)
//
//   yaw   = horizontal angle in degrees (−90 faces −Z)
//   pitch = vertical angle in degrees, clamped so the derived
//           front vector never flips past vertical
//
//   Yaw is deliberately unclamped: it wraps on its own through
//   the trig in `front_vector`.
// ──────────────────────────────────────────────────────────────
//

const DEFAULT_YAW: f32 = -90.0;
const PITCH_LIMIT: f32 = 89.0; // degrees either side of horizontal

pub struct Orientation
{
  pub yaw: f32,
  pub pitch: f32,
}

impl Orientation
{
  pub fn new(yaw: f32, pitch: f32) -> Self
  {
    Self { yaw, pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT) }
  }

  /// Accumulate a sensitivity-scaled pointer delta, in degrees.
  pub fn apply_delta(&mut self, dx: f32, dy: f32)
  {
    self.yaw += dx;
    self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
  }

  /// Facing direction, recomputed in full from (yaw, pitch) every call.
  /// Rebuilding from the angles instead of nudging the previous vector
  /// keeps the direction drift-free over long drags.
  pub fn front(&self) -> Vec3
  {
    front_vector(self)
  }
}

impl Default for Orientation
{
  fn default() -> Self
  {
    Self::new(DEFAULT_YAW, 0.0)
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Angle → direction helper
// ──────────────────────────────────────────────────────────────
//

fn front_vector(o: &Orientation) -> Vec3
{
  let yaw = o.yaw.to_radians();
  let pitch = o.pitch.to_radians();

  let dir = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());

  dir.normalize()
}

#[cfg(test)]
mod tests
{
  use super::*;

  const EPS: f32 = 1e-5;

  #[test]
  fn default_faces_negative_z()
  {
    let front = Orientation::default().front();

    assert!((front.x).abs() < EPS);
    assert!((front.y).abs() < EPS);
    assert!((front.z + 1.0).abs() < EPS);
  }

  #[test]
  fn pitch_clamps_at_limit()
  {
    let mut o = Orientation::default();

    for _ in 0..50
    {
      o.apply_delta(0.0, 10.0);
    }
    assert_eq!(o.pitch, PITCH_LIMIT);

    for _ in 0..200
    {
      o.apply_delta(0.0, -17.3);
    }
    assert_eq!(o.pitch, -PITCH_LIMIT);
  }

  #[test]
  fn yaw_is_never_clamped()
  {
    let mut o = Orientation::default();

    o.apply_delta(4000.0, 0.0);
    assert_eq!(o.yaw, -90.0 + 4000.0);
  }

  #[test]
  fn front_stays_unit_length()
  {
    let mut o = Orientation::default();

    for i in 0..360
    {
      o.apply_delta(7.3, if i % 2 == 0 { 5.1 } else { -4.9 });
      assert!((o.front().length() - 1.0).abs() < EPS);
    }
  }

  #[test]
  fn full_yaw_turn_returns_to_start()
  {
    let mut o = Orientation::default();
    let before = o.front();

    o.apply_delta(360.0, 0.0);
    let after = o.front();

    assert!((before - after).length() < 1e-4);
  }

  #[test]
  fn constructor_clamps_out_of_range_pitch()
  {
    let o = Orientation::new(0.0, 179.0);
    assert_eq!(o.pitch, PITCH_LIMIT);
  }
}
