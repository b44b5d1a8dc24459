use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::controllers::data::explorer_config::{ConfigError, ExplorerConfig, RenderSession};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;

/// Renders the configured view once and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    session: RenderSession,
    frame: Option<Arc<FrameBuffer>>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(config: &ExplorerConfig, presenter: P) -> Result<Self, ConfigError> {
        Ok(Self {
            presenter,
            session: config.build_session()?,
            frame: None,
        })
    }

    pub fn generate(&mut self) -> Arc<FrameBuffer> {
        let refreshed = self.session.renderer.refresh(&mut self.session.navigation);

        if let Some(duration) = self.session.renderer.last_render_duration() {
            info!(duration_ms = duration.as_secs_f64() * 1000.0, "frame rendered");
        }

        self.frame = Some(Arc::clone(&refreshed.frame));
        refreshed.frame
    }

    /// Writes the last generated frame. Does nothing before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            let filepath = filepath.as_ref();
            self.presenter.present(frame, filepath)?;
            info!(path = %filepath.display(), "frame written");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingFilePresenter {
        writes: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingFilePresenter {
        fn present(&self, frame: &FrameBuffer, filepath: &Path) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((filepath.to_path_buf(), frame.buffer_size()));
            Ok(())
        }
    }

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            width: 24,
            height: 16,
            threads: 1,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn write_before_generate_is_a_no_op() {
        let controller = CliRenderController::new(&config(), RecordingFilePresenter::default())
            .unwrap();

        controller.write("unused.ppm").unwrap();

        assert!(controller.presenter.writes.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_full_frame() {
        let mut controller =
            CliRenderController::new(&config(), RecordingFilePresenter::default()).unwrap();

        let frame = controller.generate();
        controller.write("out.ppm").unwrap();

        assert_eq!(frame.buffer_size(), 24 * 16 * 4);
        assert_eq!(
            *controller.presenter.writes.borrow(),
            vec![(PathBuf::from("out.ppm"), 24 * 16 * 4)]
        );
    }

    #[test]
    fn generated_frame_is_deterministic_across_thread_counts() {
        let mut single = CliRenderController::new(&config(), RecordingFilePresenter::default())
            .unwrap();
        let mut pooled = CliRenderController::new(
            &ExplorerConfig {
                threads: 4,
                ..config()
            },
            RecordingFilePresenter::default(),
        )
        .unwrap();

        assert_eq!(*single.generate(), *pooled.generate());
    }

    #[test]
    fn set_interior_is_coloured_from_palette() {
        let mut controller = CliRenderController::new(
            &ExplorerConfig {
                width: 4,
                height: 4,
                ..config()
            },
            RecordingFilePresenter::default(),
        )
        .unwrap();

        let frame = controller.generate();

        // pixel (2, 1) samples -0.5 - 0.3i inside the main cardioid and
        // takes the inside colour
        assert_eq!(frame.pixel(Point { x: 2, y: 1 }), Some(Colour::BLACK));
        // -2 - 1i escapes on the first step
        assert_ne!(frame.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }
}
