use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::navigation::ViewportController;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// Colours one row of the frame. `row` is exactly `width * 4` bytes.
fn render_row<Alg, Map>(
    row: &mut [u8],
    y: usize,
    pixel_rect: PixelRect,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &Map,
) where
    Alg: FractalAlgorithm + ?Sized,
    Map: ColourMap + ?Sized,
{
    // frame extents are capped well inside i32
    let y = y as i32;

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let c = pixel_to_complex_coords(Point { x: x as i32, y }, pixel_rect, viewport);
        let colour = colour_map.colour_of(algorithm.compute(c));
        pixel.copy_from_slice(&colour.to_rgba());
    }
}

fn row_bytes(pixel_rect: PixelRect) -> usize {
    pixel_rect.width() as usize * BYTES_PER_PIXEL
}

/// Single-threaded reference renderer. Produces the same bytes as
/// [`FrameRenderer::render_with`] for the same inputs.
pub fn render_frame_serial<Alg, Map>(
    viewport: &Viewport,
    pixel_rect: PixelRect,
    algorithm: &Alg,
    colour_map: &Map,
) -> FrameBuffer
where
    Alg: FractalAlgorithm + ?Sized,
    Map: ColourMap + ?Sized,
{
    let mut frame = FrameBuffer::new(pixel_rect);

    frame
        .data_mut()
        .chunks_exact_mut(row_bytes(pixel_rect))
        .enumerate()
        .for_each(|(y, row)| render_row(row, y, pixel_rect, viewport, algorithm, colour_map));

    frame
}

/// A freshly rendered or cached frame, as handed to presenters.
#[derive(Debug, Clone)]
pub struct RefreshedFrame {
    pub frame: Arc<FrameBuffer>,
    /// `false` when the cached frame was reused.
    pub rendered: bool,
}

/// Renders whole frames on a dedicated rayon pool.
///
/// Rows are the unit of work. Each row owns a disjoint slice of the output
/// buffer, and `ThreadPool::install` does not return until every row is
/// written, so a frame is never observable half-finished.
pub struct FrameRenderer<Map: ColourMap = Box<dyn ColourMap>> {
    pool: ThreadPool,
    colour_map: Map,
    last_frame: Option<Arc<FrameBuffer>>,
    last_render_duration: Option<Duration>,
}

impl<Map: ColourMap> FrameRenderer<Map> {
    /// `threads == 0` lets rayon pick the worker count.
    pub fn new(colour_map: Map, threads: usize) -> Result<Self, RenderError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("render-{index}"))
            .build()?;

        Ok(Self {
            pool,
            colour_map,
            last_frame: None,
            last_render_duration: None,
        })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[must_use]
    pub fn colour_map(&self) -> &Map {
        &self.colour_map
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    /// Renders `viewport` with the Mandelbrot evaluator at the viewport's cap.
    pub fn render(&self, viewport: &Viewport, pixel_rect: PixelRect) -> FrameBuffer {
        let algorithm = MandelbrotAlgorithm::new(viewport.iteration_cap());
        self.render_with(viewport, pixel_rect, &algorithm)
    }

    #[tracing::instrument(
        name = "render_frame",
        skip_all,
        fields(width = pixel_rect.width(), height = pixel_rect.height())
    )]
    pub fn render_with<Alg>(&self, viewport: &Viewport, pixel_rect: PixelRect, algorithm: &Alg) -> FrameBuffer
    where
        Alg: FractalAlgorithm + ?Sized,
    {
        let mut frame = FrameBuffer::new(pixel_rect);
        let colour_map = &self.colour_map;

        self.pool.install(|| {
            frame
                .data_mut()
                .par_chunks_exact_mut(row_bytes(pixel_rect))
                .enumerate()
                .for_each(|(y, row)| render_row(row, y, pixel_rect, viewport, algorithm, colour_map));
        });

        frame
    }

    /// Returns the cached frame while the view is clean, otherwise renders
    /// the current view, caches it and clears the dirty flag.
    pub fn refresh(&mut self, navigation: &mut ViewportController) -> RefreshedFrame {
        if !navigation.is_dirty() {
            if let Some(frame) = &self.last_frame {
                return RefreshedFrame {
                    frame: Arc::clone(frame),
                    rendered: false,
                };
            }
        }

        let viewport = navigation.viewport();
        let started = Instant::now();
        let frame = Arc::new(self.render(&viewport, navigation.pixel_rect()));
        let elapsed = started.elapsed();

        debug!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            max_iterations = viewport.max_iterations(),
            "frame rendered"
        );

        navigation.clear_dirty();
        self.last_frame = Some(Arc::clone(&frame));
        self.last_render_duration = Some(elapsed);

        RefreshedFrame {
            frame,
            rendered: true,
        }
    }
}

impl<Map: ColourMap> std::fmt::Debug for FrameRenderer<Map> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("threads", &self.threads())
            .field("colour_map", &self.colour_map.display_name())
            .field("has_frame", &self.last_frame.is_some())
            .finish()
    }
}
