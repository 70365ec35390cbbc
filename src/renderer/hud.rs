use egui_wgpu::{Renderer, RendererOptions, ScreenDescriptor};
use egui_winit::State;
use winit::event::WindowEvent;
use winit::window::Window;

//
// ──────────────────────────────────────────────────────────────
//   HUD overlay (egui)
//
//   A single translucent panel drawn over the scene: frame rate,
//   camera readout, and the texture blend slider. The app
//   describes the panel contents; this module owns the egui
//   plumbing.
// ──────────────────────────────────────────────────────────────
//

pub struct HudRenderer
{
  pub context: egui::Context,
  state: State,
  renderer: Renderer,
}

impl HudRenderer
{
  pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Window) -> Self
  {
    let context = egui::Context::default();
    let state = State::new(
      context.clone(),
      egui::viewport::ViewportId::ROOT,
      window,
      Some(window.scale_factor() as f32),
      None,
      None,
    );

    let renderer = Renderer::new(
      device,
      output_format,
      RendererOptions {
        depth_stencil_format: None,
        msaa_samples: 1,
        predictable_texture_filtering: false,
        dithering: true,
      },
    );

    Self { context, state, renderer }
  }

  /// Feed a window event to egui. Returns true when egui consumed it
  /// (pointer over the panel, slider drag, ...), in which case the
  /// camera input path should not see it.
  pub fn on_event(&mut self, window: &Window, event: &WindowEvent) -> bool
  {
    self.state.on_window_event(window, event).consumed
  }

  /// Run the UI closure for this frame and return the shapes to paint.
  pub fn run(&mut self, window: &Window, ui: impl FnMut(&egui::Context)) -> egui::FullOutput
  {
    let input = self.state.take_egui_input(window);
    self.context.run(input, ui)
  }

  pub fn render(
    &mut self,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    encoder: &mut wgpu::CommandEncoder,
    window: &Window,
    view: &wgpu::TextureView,
    full_output: egui::FullOutput,
  )
  {
    let size = window.inner_size();
    let ppp = window.scale_factor() as f32;
    let screen_descriptor =
      ScreenDescriptor { size_in_pixels: [size.width, size.height], pixels_per_point: ppp };

    for (id, delta) in full_output.textures_delta.set
    {
      self.renderer.update_texture(device, queue, id, &delta);
    }

    let tris = self.context.tessellate(full_output.shapes, ppp);
    self.renderer.update_buffers(device, queue, encoder, &tris, &screen_descriptor);

    {
      let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Hud Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
          view,
          resolve_target: None,
          ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
          depth_slice: None,
        })],
        ..Default::default()
      });

      // Safety: the pass is dropped at the end of this block, before
      // `encoder` is used again — we're just erasing the lifetime annotation.
      let mut pass = pass.forget_lifetime();

      self.renderer.render(&mut pass, &tris, &screen_descriptor);
    } // pass drops here

    for id in full_output.textures_delta.free
    {
      self.renderer.free_texture(&id);
    }
  }
}
