mod app;
mod camera;
mod config;
mod input;
mod renderer;
mod scene;

fn main() -> anyhow::Result<()>
{
  // Initialise the logger so wgpu validation errors and warnings appear in the console.
  // Set RUST_LOG=warn (default) or RUST_LOG=wgpu=debug for more verbose GPU output.

  if std::env::var_os("RUST_LOG").is_none()
  {
    std::env::set_var("RUST_LOG", "info,wgpu_hal=off,naga=warn");
  }
  env_logger::init();

  let config = config::load_config("freefly.json")?;

  app::run(config)
}
