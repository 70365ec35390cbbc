//
// ──────────────────────────────────────────────────────────────
//   Procedural textures
//
//   The original exercise sampled a floor and a wall photo from
//   disk; here the two patterns are generated at startup so the
//   binary has no asset files to find. The fragment shader mixes
//   them by the `blend` factor in the scene uniform.
// ──────────────────────────────────────────────────────────────
//

const TEXTURE_SIZE: u32 = 64; // pixels per side, square

const FLOOR_LIGHT: [u8; 4] = [0xb8, 0xa8, 0x90, 0xff]; // sandstone
const FLOOR_DARK: [u8; 4] = [0x6a, 0x5c, 0x4c, 0xff];
const WALL_BRICK: [u8; 4] = [0xa8, 0x46, 0x32, 0xff]; // fired clay
const WALL_MORTAR: [u8; 4] = [0xc8, 0xc0, 0xb4, 0xff];

pub struct CubeTextures
{
  pub bind_group: wgpu::BindGroup,
  pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CubeTextures
{
  pub fn create(device: &wgpu::Device, queue: &wgpu::Queue) -> Self
  {
    let floor = upload_texture(device, queue, "Floor Texture", &checker_pixels());
    let wall = upload_texture(device, queue, "Wall Texture", &brick_pixels());

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
      label: Some("Cube Sampler"),
      address_mode_u: wgpu::AddressMode::Repeat,
      address_mode_v: wgpu::AddressMode::Repeat,
      address_mode_w: wgpu::AddressMode::Repeat,
      mag_filter: wgpu::FilterMode::Linear,
      min_filter: wgpu::FilterMode::Linear,
      mipmap_filter: wgpu::FilterMode::Nearest,
      ..Default::default()
    });

    let bind_group_layout = create_bind_group_layout(device);

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
      label: Some("Texture BG"),
      layout: &bind_group_layout,
      entries: &[
        wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(&floor) },
        wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&wall) },
        wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&sampler) },
      ],
    });

    Self { bind_group, bind_group_layout }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   GPU upload
// ──────────────────────────────────────────────────────────────
//

fn upload_texture(
  device: &wgpu::Device,
  queue: &wgpu::Queue,
  label: &str,
  pixels: &[u8],
) -> wgpu::TextureView
{
  let size = wgpu::Extent3d { width: TEXTURE_SIZE, height: TEXTURE_SIZE, depth_or_array_layers: 1 };

  let texture = device.create_texture(&wgpu::TextureDescriptor {
    label: Some(label),
    size,
    mip_level_count: 1,
    sample_count: 1,
    dimension: wgpu::TextureDimension::D2,
    format: wgpu::TextureFormat::Rgba8UnormSrgb,
    usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    view_formats: &[],
  });

  queue.write_texture(
    wgpu::TexelCopyTextureInfo {
      texture: &texture,
      mip_level: 0,
      origin: wgpu::Origin3d::ZERO,
      aspect: wgpu::TextureAspect::All,
    },
    pixels,
    wgpu::TexelCopyBufferLayout {
      offset: 0,
      bytes_per_row: Some(4 * TEXTURE_SIZE),
      rows_per_image: Some(TEXTURE_SIZE),
    },
    size,
  );

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout
{
  let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
    binding,
    visibility: wgpu::ShaderStages::FRAGMENT,
    ty: wgpu::BindingType::Texture {
      sample_type: wgpu::TextureSampleType::Float { filterable: true },
      view_dimension: wgpu::TextureViewDimension::D2,
      multisampled: false,
    },
    count: None,
  };

  device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Texture BGL"),
    entries: &[
      texture_entry(0),
      texture_entry(1),
      wgpu::BindGroupLayoutEntry {
        binding: 2,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
      },
    ],
  })
}

//
// ──────────────────────────────────────────────────────────────
//   Pattern generators (RGBA8, row-major)
// ──────────────────────────────────────────────────────────────
//

fn checker_pixels() -> Vec<u8>
{
  let mut pixels = Vec::with_capacity((TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);

  for y in 0..TEXTURE_SIZE
  {
    for x in 0..TEXTURE_SIZE
    {
      let cell = (x / 8 + y / 8) % 2;
      let color = if cell == 0 { FLOOR_LIGHT } else { FLOOR_DARK };
      pixels.extend_from_slice(&color);
    }
  }

  pixels
}

fn brick_pixels() -> Vec<u8>
{
  let mut pixels = Vec::with_capacity((TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);

  for y in 0..TEXTURE_SIZE
  {
    for x in 0..TEXTURE_SIZE
    {
      let row = y / 16;
      // odd courses are offset half a brick
      let shifted = x + if row % 2 == 1 { 16 } else { 0 };

      let mortar = y % 16 < 2 || shifted % 32 < 2;
      let color = if mortar { WALL_MORTAR } else { WALL_BRICK };
      pixels.extend_from_slice(&color);
    }
  }

  pixels
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn patterns_fill_the_whole_texture()
  {
    let expected = (TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize;

    assert_eq!(checker_pixels().len(), expected);
    assert_eq!(brick_pixels().len(), expected);
  }

  #[test]
  fn checker_alternates_cells()
  {
    let pixels = checker_pixels();

    let at = |x: u32, y: u32| {
      let i = ((y * TEXTURE_SIZE + x) * 4) as usize;
      [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    };

    assert_eq!(at(0, 0), FLOOR_LIGHT);
    assert_eq!(at(8, 0), FLOOR_DARK);
    assert_eq!(at(8, 8), FLOOR_LIGHT);
  }
}
