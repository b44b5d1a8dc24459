use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use tracing::warn;
use winit::window::Window;

/// Shows rendered frames in a window through a `pixels` surface, with the
/// egui overlay drawn on top.
///
/// The pixel buffer keeps the configured frame size; `pixels` scales it onto
/// whatever size the window surface currently has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(frame_width, frame_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Resizes the window surface. A zero-sized surface (minimised window)
    /// is ignored.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;
        Ok(())
    }

    /// Maps a physical window position onto the frame. Positions outside the
    /// frame are still reported, so the plane location under the cursor can
    /// be shown while it hovers over the letterbox border.
    #[must_use]
    pub fn window_pos_to_frame_pixel(&self, position: (f32, f32)) -> Point {
        let (x, y) = match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => (x as isize, y as isize),
            Err(clamped_outside) => clamped_outside,
        };

        Point {
            x: x.clamp(i32::MIN as isize, i32::MAX as isize) as i32,
            y: y.clamp(i32::MIN as isize, i32::MAX as isize) as i32,
        }
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: Arc<FrameBuffer>) {
        let target = self.pixels.frame_mut();

        if target.len() != frame.buffer_size() {
            warn!(
                frame_len = frame.buffer_size(),
                target_len = target.len(),
                "dropping frame with mismatched size"
            );
            return;
        }

        target.copy_from_slice(frame.buffer());
    }
}
