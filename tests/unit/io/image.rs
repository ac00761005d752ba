//! Tests for image decoding handles and PNG output

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use image::{Rgba, RgbaImage};
    use montage::EngineError;
    use montage::io::image::{SourceImage, save_png};

    #[test]
    fn test_from_raster_exposes_dimensions() {
        let source: SourceImage = RgbaImage::new(320, 240).into();

        assert_eq!(source.width(), 320);
        assert_eq!(source.height(), 240);
        assert_eq!(source.dims().width, 320);
        assert_eq!(source.dims().height, 240);
    }

    #[test]
    fn test_debug_output_is_compact() {
        let source: SourceImage = RgbaImage::new(8, 4).into();
        let debug = format!("{source:?}");

        assert!(debug.contains("width"));
        assert!(!debug.contains("data"));
    }

    #[test]
    fn test_open_missing_file_reports_the_path() {
        let result = SourceImage::open(Path::new("/no/such/image.png"));

        let Err(error) = result else {
            unreachable!("missing file must not decode");
        };
        assert!(matches!(error, EngineError::ImageLoad { .. }));
        assert!(error.to_string().contains("/no/such/image.png"));
    }

    #[test]
    fn test_open_roundtrips_a_written_png() -> montage::Result<()> {
        let dir = tempfile::tempdir().map_err(|source| EngineError::FileSystem {
            path: "tempdir".into(),
            operation: "create directory",
            source,
        })?;
        let path = dir.path().join("tiny.png");

        let raster = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]));
        raster
            .save(&path)
            .map_err(|source| EngineError::ImageEncode { source })?;

        let decoded = SourceImage::open(&path)?;
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.data().get_pixel(0, 0).0, [9, 8, 7, 255]);
        Ok(())
    }

    #[test]
    fn test_save_png_creates_missing_parent_directories() -> montage::Result<()> {
        let dir = tempfile::tempdir().map_err(|source| EngineError::FileSystem {
            path: "tempdir".into(),
            operation: "create directory",
            source,
        })?;
        let nested = dir.path().join("a").join("b").join("out.png");

        let payload = [0x89, b'P', b'N', b'G'];
        save_png(&payload, &nested)?;

        let written = fs::read(&nested).map_err(|source| EngineError::FileSystem {
            path: nested.clone(),
            operation: "read",
            source,
        })?;
        assert_eq!(written, payload);
        Ok(())
    }
}
