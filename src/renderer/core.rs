use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::camera::{Camera, SceneUniform};
use crate::scene::Scene;

use super::cube::CubeMesh;
use super::hud::HudRenderer;
use super::texture::CubeTextures;

pub struct Renderer
{
  surface: wgpu::Surface<'static>,
  device: wgpu::Device,
  queue: wgpu::Queue,
  config: wgpu::SurfaceConfiguration,

  depth_view: wgpu::TextureView,
  scene_buffer: wgpu::Buffer,
  scene_bind_group: wgpu::BindGroup,

  pipeline: wgpu::RenderPipeline,
  cube: CubeMesh,
  textures: CubeTextures,

  pub hud: HudRenderer,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Renderer
{
  pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self>
  {
    let instance = wgpu::Instance::default();
    let surface =
      instance.create_surface(window.clone()).context("failed to create render surface")?;

    let adapter = request_adapter(&instance, &surface).await?;
    let (device, queue) = request_device(&adapter).await?;

    let config = configure_surface(&window, &surface, &adapter, &device, vsync);
    let depth_view = create_depth_view(&device, &config);

    let (scene_buffer, scene_bind_group, scene_bgl) = create_scene_resources(&device);
    let textures = CubeTextures::create(&device, &queue);

    let pipeline = create_pipeline(&device, &config, &scene_bgl, &textures.bind_group_layout);
    let cube = CubeMesh::create(&device);

    let hud = HudRenderer::new(&device, config.format, &window);

    Ok(Self {
      surface,
      device,
      queue,
      config,
      depth_view,
      scene_buffer,
      scene_bind_group,
      pipeline,
      cube,
      textures,
      hud,
    })
  }

  pub fn resize(&mut self, width: u32, height: u32)
  {
    self.config.width = width;
    self.config.height = height;
    self.surface.configure(&self.device, &self.config);
    // Depth must track the surface size exactly
    self.depth_view = create_depth_view(&self.device, &self.config);
  }

  /// Upload the view/projection and blend factor for this frame.
  pub fn update_scene(&mut self, camera: &Camera, blend: f32)
  {
    let uniform = SceneUniform::from_camera(camera, blend);
    self.queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniform));
  }

  /// Upload the per-cube model matrices for this frame.
  pub fn update_instances(&mut self, scene: &Scene)
  {
    self.cube.update_instances(&self.queue, &scene.model_matrices());
  }

  pub fn render(&mut self, window: &Window, hud_output: egui::FullOutput)
  {
    let frame = match self.surface.get_current_texture()
    {
      Ok(frame) => frame,
      Err(_) =>
      {
        // Surface lost/outdated — reconfigure once and retry
        self.surface.configure(&self.device, &self.config);
        self.surface.get_current_texture().expect("Failed to acquire frame")
      }
    };

    let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = self
      .device
      .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });

    record_render_pass(
      &mut encoder,
      &view,
      &self.depth_view,
      &self.pipeline,
      &self.scene_bind_group,
      &self.textures.bind_group,
      &self.cube,
    );

    self.hud.render(&self.device, &self.queue, &mut encoder, window, &view, hud_output);

    self.queue.submit(Some(encoder.finish()));
    frame.present();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Initialization Helpers
// ──────────────────────────────────────────────────────────────
//

async fn request_adapter(
  instance: &wgpu::Instance,
  surface: &wgpu::Surface<'_>,
) -> Result<wgpu::Adapter>
{
  let adapter = instance
    .request_adapter(&wgpu::RequestAdapterOptions {
      power_preference: wgpu::PowerPreference::HighPerformance,
      compatible_surface: Some(surface),
      ..Default::default()
    })
    .await
    .context("no suitable GPU adapter found")?;

  log::info!("adapter: {} ({:?})", adapter.get_info().name, adapter.get_info().backend);

  Ok(adapter)
}

async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)>
{
  adapter
    .request_device(&wgpu::DeviceDescriptor {
      label: Some("Freefly Device"),
      required_features: wgpu::Features::empty(),
      required_limits: wgpu::Limits::default(),
      ..Default::default()
    })
    .await
    .context("failed to create device")
}

fn configure_surface(
  window: &Window,
  surface: &wgpu::Surface<'_>,
  adapter: &wgpu::Adapter,
  device: &wgpu::Device,
  vsync: bool,
) -> wgpu::SurfaceConfiguration
{
  let size = window.inner_size();
  let caps = surface.get_capabilities(adapter);
  let format = caps.formats[0];

  let config = wgpu::SurfaceConfiguration {
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    format,
    width: size.width,
    height: size.height,
    present_mode: if vsync { wgpu::PresentMode::Fifo } else { wgpu::PresentMode::AutoNoVsync },
    alpha_mode: wgpu::CompositeAlphaMode::Auto,
    view_formats: vec![],
    desired_maximum_frame_latency: 2,
  };

  surface.configure(device, &config);
  config
}

/// Depth32Float attachment matching the surface; recreated on every resize.
fn create_depth_view(
  device: &wgpu::Device,
  config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView
{
  let texture = device.create_texture(&wgpu::TextureDescriptor {
    label: Some("Freefly Depth Texture"),
    size: wgpu::Extent3d {
      width: config.width,
      height: config.height,
      depth_or_array_layers: 1,
    },
    mip_level_count: 1,
    sample_count: 1,
    dimension: wgpu::TextureDimension::D2,
    format: wgpu::TextureFormat::Depth32Float,
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  });

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_scene_resources(
  device: &wgpu::Device,
) -> (wgpu::Buffer, wgpu::BindGroup, wgpu::BindGroupLayout)
{
  let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
    label: Some("Scene Buffer"),
    size: std::mem::size_of::<SceneUniform>() as u64,
    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    mapped_at_creation: false,
  });

  let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Scene BGL"),
    entries: &[wgpu::BindGroupLayoutEntry {
      binding: 0,
      visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
      ty: wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: None,
      },
      count: None,
    }],
  });

  let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
    label: Some("Scene BG"),
    layout: &scene_bgl,
    entries: &[wgpu::BindGroupEntry { binding: 0, resource: scene_buffer.as_entire_binding() }],
  });

  (scene_buffer, scene_bind_group, scene_bgl)
}

fn create_pipeline(
  device: &wgpu::Device,
  config: &wgpu::SurfaceConfiguration,
  scene_bgl: &wgpu::BindGroupLayout,
  texture_bgl: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline
{
  let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
    label: Some("Cube Shader"),
    source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/cube.wgsl").into()),
  });

  let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
    label: Some("Cube Pipeline Layout"),
    bind_group_layouts: &[scene_bgl, texture_bgl],
    push_constant_ranges: &[],
  });

  device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
    label: Some("Cube Pipeline"),
    layout: Some(&layout),
    vertex: wgpu::VertexState {
      module: &shader,
      entry_point: Some("vs_main"),
      buffers: &[CubeMesh::vertex_layout(), CubeMesh::instance_layout()],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    },
    fragment: Some(wgpu::FragmentState {
      module: &shader,
      entry_point: Some("fs_main"),
      targets: &[Some(wgpu::ColorTargetState {
        format: config.format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
      })],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    }),
    primitive: wgpu::PrimitiveState::default(),
    depth_stencil: Some(wgpu::DepthStencilState {
      format: wgpu::TextureFormat::Depth32Float,
      depth_write_enabled: true,
      depth_compare: wgpu::CompareFunction::Less,
      stencil: wgpu::StencilState::default(),
      bias: wgpu::DepthBiasState::default(),
    }),
    multisample: wgpu::MultisampleState::default(),
    multiview: None,
    cache: None,
  })
}

//
// ──────────────────────────────────────────────────────────────
//   Render Pass
// ──────────────────────────────────────────────────────────────
//

fn record_render_pass(
  encoder: &mut wgpu::CommandEncoder,
  color_view: &wgpu::TextureView,
  depth_view: &wgpu::TextureView,
  pipeline: &wgpu::RenderPipeline,
  scene_bg: &wgpu::BindGroup,
  texture_bg: &wgpu::BindGroup,
  cube: &CubeMesh,
)
{
  let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
    label: Some("Cube Render Pass"),
    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
      view: color_view,
      resolve_target: None,
      ops: wgpu::Operations {
        load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.2, g: 0.3, b: 0.3, a: 1.0 }),
        store: wgpu::StoreOp::Store,
      },
      depth_slice: None,
    })],
    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
      view: depth_view,
      depth_ops: Some(wgpu::Operations { load: wgpu::LoadOp::Clear(1.0), store: wgpu::StoreOp::Store }),
      stencil_ops: None,
    }),
    occlusion_query_set: None,
    timestamp_writes: None,
  });

  pass.set_pipeline(pipeline);
  pass.set_bind_group(0, scene_bg, &[]);
  pass.set_bind_group(1, texture_bg, &[]);
  pass.set_vertex_buffer(0, cube.vertex_buffer.slice(..));
  pass.set_vertex_buffer(1, cube.instance_buffer.slice(..));
  pass.draw(0..cube.vertex_count, 0..cube.instance_count);
}
