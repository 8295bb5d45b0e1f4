use winit::dpi::PhysicalSize;

/// Depth format shared by the depth buffer and every depth-tested pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth attachment sized to the surface.
pub(crate) struct DepthBuffer {
    size: PhysicalSize<u32>,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    pub(crate) fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let extent = depth_extent(size);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("cgkit depth texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            size: PhysicalSize::new(extent.width, extent.height),
            view,
        }
    }

    /// Recreates the texture when the surface size changed.
    pub(crate) fn ensure_size(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        let extent = depth_extent(size);
        if self.size.width == extent.width && self.size.height == extent.height {
            return;
        }
        log::debug!("depth buffer resized to {}x{}", extent.width, extent.height);
        *self = Self::new(device, size);
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

fn depth_extent(size: PhysicalSize<u32>) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width.max(1),
        height: size.height.max(1),
        depth_or_array_layers: 1,
    }
}
