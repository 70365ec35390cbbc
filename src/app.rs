use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use glam::Vec3;
use winit::{
  application::ApplicationHandler,
  dpi::LogicalSize,
  event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  keyboard::{KeyCode, PhysicalKey},
  window::{Window, WindowId},
};

use crate::camera::{Camera, MoveDirection, Orientation};
use crate::config::Config;
use crate::input::{apply_input_to_camera, DragSampler, InputEvent};
use crate::renderer::Renderer;
use crate::scene::Scene;

// Touchpads report scroll in pixels; one wheel "line" is worth about this many
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

const FPS_WINDOW: u32 = 100; // frames per FPS sample, as in the original exercise

pub fn run(config: Config) -> Result<()>
{
  let event_loop = EventLoop::new()?;
  let mut app = FreeflyApp::new(config);

  event_loop.run_app(&mut app)?;

  Ok(())
}

//
// ──────────────────────────────────────────────────────────────
//   App state
//
//   Everything the frame loop touches lives here — no globals.
// ──────────────────────────────────────────────────────────────
//

struct FreeflyApp
{
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,

  camera: Camera,
  orientation: Orientation,
  sampler: DragSampler,
  scene: Scene,
  blend: f32,

  move_keys: MoveKeys,
  move_speed: f32,

  timing: FrameTiming,

  config: Config,
}

#[derive(Default)]
struct MoveKeys
{
  forward: bool,
  backward: bool,
  left: bool,
  right: bool,
}

struct FrameTiming
{
  last_frame: Instant,
  frames: u32,
  elapsed: f32,
  fps: f32,
}

impl FrameTiming
{
  fn new() -> Self
  {
    Self { last_frame: Instant::now(), frames: 0, elapsed: 0.0, fps: 0.0 }
  }

  /// Seconds since the previous call; refreshes the FPS average every
  /// `FPS_WINDOW` frames.
  fn tick(&mut self) -> f32
  {
    let now = Instant::now();
    let dt = now.duration_since(self.last_frame).as_secs_f32();
    self.last_frame = now;

    self.frames += 1;
    self.elapsed += dt;

    if self.frames >= FPS_WINDOW && self.elapsed > 0.0
    {
      self.fps = self.frames as f32 / self.elapsed;
      log::info!("FPS: {:.1}", self.fps);

      self.frames = 0;
      self.elapsed = 0.0;
    }

    dt
  }
}

impl FreeflyApp
{
  fn new(config: Config) -> Self
  {
    let aspect = config.window.width as f32 / config.window.height as f32;
    let orientation = Orientation::new(config.camera.yaw, config.camera.pitch);

    let mut camera = Camera::new(Vec3::from(config.camera.position), config.camera.fov, aspect);
    camera.set_front(orientation.front());

    Self {
      window: None,
      renderer: None,

      camera,
      orientation,
      sampler: DragSampler::new(config.controls.mouse_sensitivity),
      scene: Scene::new(config.scene.spin_rate),
      blend: config.scene.blend,

      move_keys: MoveKeys::default(),
      move_speed: config.controls.move_speed,

      timing: FrameTiming::new(),

      config,
    }
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop)
  {
    if self.window.is_some()
    {
      return;
    }

    let attrs = Window::default_attributes()
      .with_title("Freefly — Spinning Cubes")
      .with_inner_size(LogicalSize::new(self.config.window.width, self.config.window.height));

    let window = match event_loop.create_window(attrs)
    {
      Ok(w) => Arc::new(w),
      Err(err) =>
      {
        log::error!("failed to create window: {err}");
        event_loop.exit();
        return;
      }
    };

    {
      let size = window.inner_size();
      self.camera.set_aspect(size.width as f32 / size.height as f32);
    }

    let renderer = match pollster::block_on(Renderer::new(window.clone(), self.config.window.vsync))
    {
      Ok(r) => r,
      Err(err) =>
      {
        log::error!("failed to initialise renderer: {err:#}");
        event_loop.exit();
        return;
      }
    };

    self.window = Some(window);
    self.renderer = Some(renderer);
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w.clone(),
      _ => return,
    };

    // The HUD gets first refusal on pointer events (slider drags etc.).
    // A camera drag already in progress overrides that: the sampler must
    // keep seeing every move while the pointer crosses the panel, or its
    // last position goes stale and the camera jumps when the pointer
    // comes out the other side.
    let hud_consumed = match &mut self.renderer
    {
      Some(renderer) => renderer.hud.on_event(&window, &event),
      None => false,
    };
    let hud_blocks = hud_consumed && !self.sampler.is_dragging();

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
        }

        self.camera.set_aspect(size.width as f32 / size.height as f32);
      }

      WindowEvent::KeyboardInput { event, .. } =>
      {
        self.handle_key(elwt, event.physical_key, event.state == ElementState::Pressed);
      }

      WindowEvent::CursorMoved { position, .. } if !hud_blocks =>
      {
        self
          .sampler
          .handle(InputEvent::PointerMoved { x: position.x as f32, y: position.y as f32 });
      }

      // `hud_blocks` rather than `hud_consumed`: a release over the
      // panel must still end an in-progress drag.
      WindowEvent::MouseInput { state, button: MouseButton::Left, .. } if !hud_blocks =>
      {
        self.sampler.handle(InputEvent::DragButton { pressed: state == ElementState::Pressed });
      }

      WindowEvent::MouseWheel { delta, .. } if !hud_consumed =>
      {
        let lines = match delta
        {
          MouseScrollDelta::LineDelta(_, y) => y,
          MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_SCROLL_LINE,
        };

        self.sampler.handle(InputEvent::Scroll { lines });
      }

      _ =>
      {}
    }
  }

  fn handle_key(&mut self, elwt: &ActiveEventLoop, key: PhysicalKey, pressed: bool)
  {
    match key
    {
      PhysicalKey::Code(KeyCode::Escape) if pressed => elwt.exit(),

      PhysicalKey::Code(KeyCode::KeyW) => self.move_keys.forward = pressed,
      PhysicalKey::Code(KeyCode::KeyS) => self.move_keys.backward = pressed,
      PhysicalKey::Code(KeyCode::KeyA) => self.move_keys.left = pressed,
      PhysicalKey::Code(KeyCode::KeyD) => self.move_keys.right = pressed,

      _ =>
      {}
    }
  }

  fn apply_movement(&mut self, dt: f32)
  {
    let amount = self.move_speed * dt;

    if self.move_keys.forward
    {
      self.camera.advance(MoveDirection::Forward, amount);
    }
    if self.move_keys.backward
    {
      self.camera.advance(MoveDirection::Backward, amount);
    }
    if self.move_keys.left
    {
      self.camera.advance(MoveDirection::Left, amount);
    }
    if self.move_keys.right
    {
      self.camera.advance(MoveDirection::Right, amount);
    }
  }

  fn frame(&mut self)
  {
    let dt = self.timing.tick();

    self.scene.advance(dt);
    self.apply_movement(dt);
    apply_input_to_camera(&self.sampler, &mut self.orientation, &mut self.camera);

    // Split borrows: the HUD closure mutates `blend` while the
    // renderer is borrowed for the frame.
    let Self { window, renderer, camera, orientation, scene, blend, timing, .. } = self;

    if let (Some(window), Some(renderer)) = (window, renderer)
    {
      renderer.update_scene(camera, *blend);
      renderer.update_instances(scene);

      let stats = HudStats {
        fps: timing.fps,
        yaw: orientation.yaw,
        pitch: orientation.pitch,
        zoom: camera.zoom,
        position: camera.position,
        spin: scene.spin(),
      };

      let hud_output = renderer.hud.run(window, |ctx| draw_hud(ctx, &stats, blend));

      renderer.render(window, hud_output);
      window.request_redraw();
      self.sampler.end_frame();
    }
  }
}

impl ApplicationHandler for FreeflyApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);
    self.init_window_and_renderer(event_loop);
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop)
  {
    self.frame();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   HUD contents
// ──────────────────────────────────────────────────────────────
//

struct HudStats
{
  fps: f32,
  yaw: f32,
  pitch: f32,
  zoom: f32,
  position: Vec3,
  spin: f32,
}

fn draw_hud(ctx: &egui::Context, stats: &HudStats, blend: &mut f32)
{
  egui::Window::new("freefly").resizable(false).show(ctx, |ui| {
    ui.label(format!("fps: {:.1}", stats.fps));
    ui.label(format!("yaw {:+.1}°  pitch {:+.1}°  fov {:.1}°", stats.yaw, stats.pitch, stats.zoom));
    ui.label(format!(
      "eye ({:.2}, {:.2}, {:.2})  spin {:.2} rad",
      stats.position.x, stats.position.y, stats.position.z, stats.spin
    ));
    ui.add(egui::Slider::new(blend, 0.0..=1.0).text("wall mix"));
  });
}
