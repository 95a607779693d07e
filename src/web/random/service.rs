use std::sync::Arc;

use tracing::debug;

use crate::catalog::image_catalog::ImageCatalog;
use crate::error::pipeline::PipelineError;
use crate::image::{
    dimensions::{DimensionBounds, DimensionRequest},
    encoder::EncodedImage,
    processor::ImageProcessor,
    transform::FitMode,
};

/// Runs the whole request pipeline: validate, pick, decode, transform, encode.
///
/// Holds only shared read-only state, so one instance serves every request.
#[derive(Clone)]
pub struct RandomImageService {
    catalog: Arc<ImageCatalog>,
    image: Arc<dyn ImageProcessor>,
    bounds: DimensionBounds,
    validate_resolved: bool,
}

impl RandomImageService {
    pub fn new(
        catalog: Arc<ImageCatalog>,
        image: Arc<dyn ImageProcessor>,
        bounds: DimensionBounds,
    ) -> Self {
        Self {
            catalog,
            image,
            bounds,
            validate_resolved: false,
        }
    }

    /// Also bounds-checks dimensions filled in from the source image.
    pub fn with_validate_resolved(mut self, on: bool) -> Self {
        self.validate_resolved = on;
        self
    }

    pub fn bounds(&self) -> DimensionBounds {
        self.bounds
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    /// Renders one random catalog image at the requested size.
    ///
    /// Explicit dimensions are checked before any file is touched. Nothing
    /// is retried here: a failed read is reported and left to the caller.
    pub fn render(
        &self,
        req: DimensionRequest,
        mode: FitMode,
    ) -> Result<EncodedImage, PipelineError> {
        self.bounds.check(&req)?;

        let path = self.catalog.pick_random();
        let source = self.image.decode(path)?;

        if self.validate_resolved {
            let (w, h) = req.resolve(source.dimensions());
            self.bounds.check_resolved(w, h)?;
        }

        let out = self.image.render_same_format(&source, req, mode)?;
        debug!(
            "rendered {} as {} ({} bytes)",
            path.display(),
            out.content_type(),
            out.len()
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::random::FixedSequence;
    use crate::image::{encoder::SourceFormat, processor::DecodedImage};
    use image::{DynamicImage, RgbImage};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubImageProc {
        decoded: Mutex<Vec<PathBuf>>,
        rendered: Mutex<Vec<(DimensionRequest, FitMode)>>,
        fail_decode: bool,
    }

    impl StubImageProc {
        fn failing() -> Self {
            Self {
                fail_decode: true,
                ..Default::default()
            }
        }
    }

    impl ImageProcessor for StubImageProc {
        fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
            self.decoded.lock().unwrap().push(path.to_path_buf());
            if self.fail_decode {
                return Err(PipelineError::SourceReadFailure {
                    path: path.to_path_buf(),
                    source: image::ImageError::IoError(std::io::ErrorKind::NotFound.into()),
                });
            }
            Ok(DecodedImage::new(
                DynamicImage::ImageRgb8(RgbImage::new(4000, 500)),
                SourceFormat::Png,
            ))
        }

        fn render_same_format(
            &self,
            source: &DecodedImage,
            target: DimensionRequest,
            mode: FitMode,
        ) -> Result<EncodedImage, PipelineError> {
            self.rendered.lock().unwrap().push((target, mode));
            Ok(EncodedImage {
                bytes: b"img".to_vec(),
                format: source.format,
            })
        }
    }

    fn service(proc_: Arc<StubImageProc>) -> RandomImageService {
        let catalog = ImageCatalog::from_entries(
            vec!["one.png".into(), "two.png".into()],
            Arc::new(FixedSequence::new(vec![1, 0])),
        )
        .unwrap();
        RandomImageService::new(Arc::new(catalog), proc_, DimensionBounds::default())
    }

    #[test]
    fn render_decodes_picked_file_and_forwards_request() {
        let stub = Arc::new(StubImageProc::default());
        let svc = service(stub.clone());

        let out = svc
            .render(DimensionRequest::new(800, 600), FitMode::ExactFill)
            .expect("render ok");
        assert_eq!(out.format, SourceFormat::Png);

        svc.render(DimensionRequest::new(100, 100), FitMode::Stretch)
            .expect("render ok");

        assert_eq!(
            *stub.decoded.lock().unwrap(),
            vec![PathBuf::from("two.png"), PathBuf::from("one.png")]
        );
        assert_eq!(
            *stub.rendered.lock().unwrap(),
            vec![
                (DimensionRequest::new(800, 600), FitMode::ExactFill),
                (DimensionRequest::new(100, 100), FitMode::Stretch),
            ]
        );
    }

    #[test]
    fn invalid_dimensions_rejected_before_decode() {
        let stub = Arc::new(StubImageProc::default());
        let svc = service(stub.clone());

        let err = svc
            .render(DimensionRequest::new(1921, 1080), FitMode::ExactFill)
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDimensions { .. }));
        assert!(stub.decoded.lock().unwrap().is_empty());
    }

    #[test]
    fn resolved_dimension_skipped_by_default() {
        // The stub source is 4000 px wide, well past MAX_WIDTH.
        let stub = Arc::new(StubImageProc::default());
        let svc = service(stub.clone());
        assert!(svc
            .render(DimensionRequest::new(0, 500), FitMode::Stretch)
            .is_ok());
    }

    #[test]
    fn resolved_dimension_checked_when_enabled() {
        let stub = Arc::new(StubImageProc::default());
        let svc = service(stub.clone()).with_validate_resolved(true);

        let err = svc
            .render(DimensionRequest::new(0, 500), FitMode::Stretch)
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDimensions { .. }));
        assert!(stub.rendered.lock().unwrap().is_empty());

        assert!(svc
            .render(DimensionRequest::new(1000, 500), FitMode::Stretch)
            .is_ok());
    }

    #[test]
    fn read_failure_is_surfaced_without_retry() {
        let stub = Arc::new(StubImageProc::failing());
        let svc = service(stub.clone());

        let err = svc
            .render(DimensionRequest::new(100, 100), FitMode::ExactFill)
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(stub.decoded.lock().unwrap().len(), 1);
        assert_eq!(svc.catalog().len(), 2);
    }
}
