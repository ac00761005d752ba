//! Tests for CLI parsing and end-to-end file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use montage::EngineError;
    use montage::config::Resolution;
    use montage::io::cli::{Cli, WallpaperProcessor};
    use montage::layout::Strategy;

    #[test]
    fn test_defaults_match_the_documented_configuration() {
        let Ok(cli) = Cli::try_parse_from(["montage", "a.png"]) else {
            unreachable!("a single target must parse");
        };

        assert_eq!(cli.layout, Strategy::Grid);
        assert_eq!(cli.resolution, Resolution::Desktop);
        assert_eq!(cli.frame_color, "#ffffff");
        assert_eq!(cli.background_color, "#ffffff");
        assert!((cli.frame_opacity - 0.85).abs() < f32::EPSILON);
        assert_eq!(cli.border_width, 8);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.output.to_string_lossy(), "wallpaper.png");
        assert!(cli.background_image.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_value_enums_parse_from_kebab_case() {
        let Ok(cli) = Cli::try_parse_from([
            "montage",
            "--layout",
            "masonry",
            "--resolution",
            "mobile",
            "--background-mode",
            "tiled",
            "a.png",
        ]) else {
            unreachable!("valid enum values must parse");
        };

        assert_eq!(cli.layout, Strategy::Masonry);
        assert_eq!(cli.resolution, Resolution::Mobile);
    }

    #[test]
    fn test_missing_target_is_a_parse_error() {
        assert!(Cli::try_parse_from(["montage"]).is_err());
    }

    #[test]
    fn test_invalid_frame_color_aborts_processing() -> montage::Result<()> {
        let dir = tempfile::tempdir().map_err(|source| EngineError::FileSystem {
            path: "tempdir".into(),
            operation: "create directory",
            source,
        })?;
        let input = dir.path().join("a.png");
        RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 255]))
            .save(&input)
            .map_err(|source| EngineError::ImageEncode { source })?;

        let args = vec![
            "montage".to_string(),
            "--quiet".to_string(),
            "--frame-color".to_string(),
            "#badhex".to_string(),
            input.to_string_lossy().into_owned(),
        ];
        let Ok(cli) = Cli::try_parse_from(args) else {
            unreachable!("arguments must parse");
        };

        let result = WallpaperProcessor::new(cli).process();
        assert!(matches!(result, Err(EngineError::InvalidColor { .. })));
        Ok(())
    }

    #[test]
    fn test_directory_input_produces_a_wallpaper() -> montage::Result<()> {
        let dir = tempfile::tempdir().map_err(|source| EngineError::FileSystem {
            path: "tempdir".into(),
            operation: "create directory",
            source,
        })?;

        for (name, color) in [("one.png", [255, 0, 0, 255]), ("two.png", [0, 255, 0, 255])] {
            let raster = RgbaImage::from_pixel(64, 48, Rgba(color));
            raster
                .save(dir.path().join(name))
                .map_err(|source| EngineError::ImageEncode { source })?;
        }
        // Non-image files in the directory are ignored
        std::fs::write(dir.path().join("notes.txt"), b"skip me").map_err(|source| {
            EngineError::FileSystem {
                path: dir.path().join("notes.txt"),
                operation: "write",
                source,
            }
        })?;

        let output = dir.path().join("out").join("wall.png");
        let args = vec![
            "montage".to_string(),
            "--quiet".to_string(),
            "--resolution".to_string(),
            "mobile".to_string(),
            "--output".to_string(),
            output.to_string_lossy().into_owned(),
            dir.path().to_string_lossy().into_owned(),
        ];
        let Ok(cli) = Cli::try_parse_from(args) else {
            unreachable!("arguments must parse");
        };

        WallpaperProcessor::new(cli).process()?;

        let bytes = std::fs::read(&output).map_err(|source| EngineError::FileSystem {
            path: output.clone(),
            operation: "read",
            source,
        })?;
        assert_eq!(bytes.get(..4), Some(&[0x89, b'P', b'N', b'G'][..]));
        Ok(())
    }
}
