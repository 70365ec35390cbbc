use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────────
//   Settings (freefly.json, optional)
//
//   Every field has a default, so a missing file or a file with
//   only the keys the user cares about both work.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config
{
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub controls: ControlsConfig,
  pub scene: SceneConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig
{
  pub width: u32,
  pub height: u32,
  pub vsync: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig
{
  pub position: [f32; 3],
  pub yaw: f32,
  pub pitch: f32,
  pub fov: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig
{
  /// Degrees of rotation per pixel of drag.
  pub mouse_sensitivity: f32,
  /// World units per second for the WASD keys.
  pub move_speed: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig
{
  /// Radians per second for the spinning cubes.
  pub spin_rate: f32,
  /// Initial wall/floor texture mix, [0, 1].
  pub blend: f32,
}

impl Default for WindowConfig
{
  fn default() -> Self
  {
    Self { width: 800, height: 600, vsync: true }
  }
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    Self { position: [0.0, 0.0, 3.0], yaw: -90.0, pitch: 0.0, fov: 45.0 }
  }
}

impl Default for ControlsConfig
{
  fn default() -> Self
  {
    Self { mouse_sensitivity: 0.1, move_speed: 2.5 }
  }
}

impl Default for SceneConfig
{
  fn default() -> Self
  {
    Self { spin_rate: 0.6, blend: 0.5 }
  }
}

/// Load settings from `path`, falling back to defaults when the file
/// does not exist. A file that exists but fails to parse is an error:
/// silently ignoring a typo'd config is worse than refusing to start.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config>
{
  let path = path.as_ref();

  if !path.exists()
  {
    return Ok(Config::default());
  }

  let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
  let config = serde_json::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))?;

  Ok(config)
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn defaults_match_the_classic_setup()
  {
    let config = Config::default();

    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.camera.yaw, -90.0);
    assert_eq!(config.camera.fov, 45.0);
    assert_eq!(config.controls.mouse_sensitivity, 0.1);
  }

  #[test]
  fn defaults_round_trip_through_json()
  {
    let defaults = Config::default();

    let json = serde_json::to_string(&defaults).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(back, defaults);
  }

  #[test]
  fn partial_json_fills_in_defaults()
  {
    let json = r#"{ "controls": { "mouse_sensitivity": 0.25 } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.controls.mouse_sensitivity, 0.25);
    assert_eq!(config.controls.move_speed, 2.5);
    assert_eq!(config.window.height, 600);
  }

  #[test]
  fn missing_file_yields_defaults()
  {
    let config = load_config("does-not-exist.json").unwrap();
    assert_eq!(config.scene.blend, 0.5);
  }
}
