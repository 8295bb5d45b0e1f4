use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    pick_format(&caps.formats, prefer_srgb)
}

fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;
    // Non-sRGB callers still want an sRGB format's linear twin when the
    // platform lists the sRGB one first.
    let wanted = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb);
    Some(wanted.unwrap_or(first))
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Size a surface can be configured with: a window that reports 0×0 at
/// creation (minimised, or before the first configure) gets a 1×1 surface.
pub(crate) fn configurable_extent(size: PhysicalSize<u32>) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.max(1), size.height.max(1))
}

/// Applies a new size to the surface config; zero sizes are recorded but not configured.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn srgb_preferred_when_requested() {
        let formats = [F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(F::Bgra8UnormSrgb));
    }

    #[test]
    fn linear_preferred_when_srgb_declined() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm];
        assert_eq!(pick_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn zero_sized_window_gets_unit_surface() {
        assert_eq!(configurable_extent(PhysicalSize::new(0, 0)), PhysicalSize::new(1, 1));
        assert_eq!(configurable_extent(PhysicalSize::new(800, 0)), PhysicalSize::new(800, 1));
        assert_eq!(configurable_extent(PhysicalSize::new(800, 600)), PhysicalSize::new(800, 600));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(pick_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(pick_format(&[], true), None);
    }
}
