use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::scene::CUBE_COUNT;

//
// ──────────────────────────────────────────────────────────────
//   Cube geometry
//
//   Non-indexed: 6 faces × 2 triangles × 3 vertices, each with a
//   position and a texture coordinate. Kept non-indexed because
//   the corner UVs differ per face, so almost nothing would be
//   shared anyway.
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex
{
  pub position: [f32; 3],
  pub uv: [f32; 2],
}

const fn v(x: f32, y: f32, z: f32, s: f32, t: f32) -> Vertex
{
  Vertex { position: [x, y, z], uv: [s, t] }
}

#[rustfmt::skip]
const VERTICES: [Vertex; 36] = [
  // back face (Z-)
  v(-0.5, -0.5, -0.5, 0.0, 0.0), v( 0.5, -0.5, -0.5, 1.0, 0.0), v( 0.5,  0.5, -0.5, 1.0, 1.0),
  v( 0.5,  0.5, -0.5, 1.0, 1.0), v(-0.5,  0.5, -0.5, 0.0, 1.0), v(-0.5, -0.5, -0.5, 0.0, 0.0),
  // front face (Z+)
  v(-0.5, -0.5,  0.5, 0.0, 0.0), v( 0.5, -0.5,  0.5, 1.0, 0.0), v( 0.5,  0.5,  0.5, 1.0, 1.0),
  v( 0.5,  0.5,  0.5, 1.0, 1.0), v(-0.5,  0.5,  0.5, 0.0, 1.0), v(-0.5, -0.5,  0.5, 0.0, 0.0),
  // left face (X-)
  v(-0.5,  0.5,  0.5, 1.0, 0.0), v(-0.5,  0.5, -0.5, 1.0, 1.0), v(-0.5, -0.5, -0.5, 0.0, 1.0),
  v(-0.5, -0.5, -0.5, 0.0, 1.0), v(-0.5, -0.5,  0.5, 0.0, 0.0), v(-0.5,  0.5,  0.5, 1.0, 0.0),
  // right face (X+)
  v( 0.5,  0.5,  0.5, 1.0, 0.0), v( 0.5,  0.5, -0.5, 1.0, 1.0), v( 0.5, -0.5, -0.5, 0.0, 1.0),
  v( 0.5, -0.5, -0.5, 0.0, 1.0), v( 0.5, -0.5,  0.5, 0.0, 0.0), v( 0.5,  0.5,  0.5, 1.0, 0.0),
  // bottom face (Y-)
  v(-0.5, -0.5, -0.5, 0.0, 1.0), v( 0.5, -0.5, -0.5, 1.0, 1.0), v( 0.5, -0.5,  0.5, 1.0, 0.0),
  v( 0.5, -0.5,  0.5, 1.0, 0.0), v(-0.5, -0.5,  0.5, 0.0, 0.0), v(-0.5, -0.5, -0.5, 0.0, 1.0),
  // top face (Y+)
  v(-0.5,  0.5, -0.5, 0.0, 1.0), v( 0.5,  0.5, -0.5, 1.0, 1.0), v( 0.5,  0.5,  0.5, 1.0, 0.0),
  v( 0.5,  0.5,  0.5, 1.0, 0.0), v(-0.5,  0.5,  0.5, 0.0, 0.0), v(-0.5,  0.5, -0.5, 0.0, 1.0),
];

//
// ──────────────────────────────────────────────────────────────
//   Per-instance data: one model matrix per cube
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw
{
  pub model: [[f32; 4]; 4],
}

impl InstanceRaw
{
  fn from_mat4(m: &Mat4) -> Self
  {
    Self { model: m.to_cols_array_2d() }
  }
}

pub struct CubeMesh
{
  pub vertex_buffer: wgpu::Buffer,
  pub instance_buffer: wgpu::Buffer,
  pub vertex_count: u32,
  pub instance_count: u32,
}

impl CubeMesh
{
  pub fn create(device: &wgpu::Device) -> Self
  {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Cube Vertex Buffer"),
      contents: bytemuck::cast_slice(&VERTICES),
      usage: wgpu::BufferUsages::VERTEX,
    });

    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
      label: Some("Cube Instance Buffer"),
      size: (CUBE_COUNT * std::mem::size_of::<InstanceRaw>()) as u64,
      usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
      mapped_at_creation: false,
    });

    Self {
      vertex_buffer,
      instance_buffer,
      vertex_count: VERTICES.len() as u32,
      instance_count: CUBE_COUNT as u32,
    }
  }

  /// Re-upload the per-cube model matrices (the spinning cubes change
  /// every frame).
  pub fn update_instances(&self, queue: &wgpu::Queue, models: &[Mat4; CUBE_COUNT])
  {
    let raw: [InstanceRaw; CUBE_COUNT] = std::array::from_fn(|i| InstanceRaw::from_mat4(&models[i]));
    queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raw));
  }

  pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static>
  {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
      wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<Vertex>() as u64,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &ATTRIBS,
    }
  }

  pub fn instance_layout() -> wgpu::VertexBufferLayout<'static>
  {
    // A mat4 arrives as four vec4 attributes, locations 2..=5
    const ATTRIBS: [wgpu::VertexAttribute; 4] =
      wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<InstanceRaw>() as u64,
      step_mode: wgpu::VertexStepMode::Instance,
      attributes: &ATTRIBS,
    }
  }
}
