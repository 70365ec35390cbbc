use glam::Mat4;

use super::flycam::Camera;

//
// ──────────────────────────────────────────────────────────────
//   Scene Uniform (GPU side)
//
//   WGSL layout (cube.wgsl):
//     view_proj : mat4x4<f32>   → 64 bytes
//     blend     : f32           →  4 bytes
//     _pad      : 3 × f32       → 12 bytes
//   Total: 80 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform
{
  pub view_proj: [[f32; 4]; 4], // 64 bytes
  pub blend: f32,               // wall/floor texture mix, [0, 1]
  pub _pad: [f32; 3],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<SceneUniform>() == 80);

impl SceneUniform
{
  pub fn from_camera(camera: &Camera, blend: f32) -> Self
  {
    let mat: Mat4 = camera.build_view_proj();
    Self { view_proj: mat.to_cols_array_2d(), blend, _pad: [0.0; 3] }
  }
}
