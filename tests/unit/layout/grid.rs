//! Tests for grid dimension bands, jitter bounds, and draw-order sorting

#[cfg(test)]
mod tests {
    use montage::io::configuration::{
        GRID_JITTER_X_FRACTION, GRID_JITTER_Y_FRACTION, GRID_MAX_ROTATION_DEG,
        GRID_PADDING_DESKTOP, GRID_TOP_MARGIN_FRACTION_DESKTOP,
    };
    use montage::layout::grid::{grid_dims, place};
    use montage::layout::{DeviceClass, ImageDims};
    use rand::{SeedableRng, rngs::StdRng};

    fn square_dims(count: usize) -> Vec<ImageDims> {
        vec![
            ImageDims {
                width: 400,
                height: 400
            };
            count
        ]
    }

    #[test]
    fn test_desktop_bands() {
        assert_eq!(grid_dims(1, DeviceClass::Desktop), (1, 3));
        assert_eq!(grid_dims(3, DeviceClass::Desktop), (1, 3));
        assert_eq!(grid_dims(4, DeviceClass::Desktop), (2, 3));
        assert_eq!(grid_dims(6, DeviceClass::Desktop), (2, 3));
        assert_eq!(grid_dims(8, DeviceClass::Desktop), (2, 4));
        assert_eq!(grid_dims(9, DeviceClass::Desktop), (3, 3));
        assert_eq!(grid_dims(12, DeviceClass::Desktop), (3, 4));
    }

    #[test]
    fn test_desktop_falls_back_to_near_square() {
        assert_eq!(grid_dims(13, DeviceClass::Desktop), (4, 4));
        assert_eq!(grid_dims(16, DeviceClass::Desktop), (4, 4));
        assert_eq!(grid_dims(20, DeviceClass::Desktop), (4, 5));
        assert_eq!(grid_dims(26, DeviceClass::Desktop), (5, 6));
    }

    #[test]
    fn test_mobile_bands_stay_two_columns_wide() {
        assert_eq!(grid_dims(1, DeviceClass::Mobile), (2, 1));
        assert_eq!(grid_dims(2, DeviceClass::Mobile), (2, 1));
        assert_eq!(grid_dims(4, DeviceClass::Mobile), (2, 2));
        assert_eq!(grid_dims(6, DeviceClass::Mobile), (3, 2));
        assert_eq!(grid_dims(8, DeviceClass::Mobile), (4, 2));
        assert_eq!(grid_dims(9, DeviceClass::Mobile), (5, 2));
        assert_eq!(grid_dims(15, DeviceClass::Mobile), (8, 2));
    }

    #[test]
    fn test_six_desktop_images_fill_a_two_by_three_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        let placed = place(
            &square_dims(6),
            3840.0,
            2160.0,
            DeviceClass::Desktop,
            &mut rng,
        );

        assert_eq!(placed.len(), 6);

        // Every input image appears exactly once
        let mut seen = [false; 6];
        for rect in &placed {
            assert!(!seen[rect.image_index]);
            seen[rect.image_index] = true;
        }
        assert!(seen.iter().all(|present| *present));

        // Cell width follows the padding formula exactly
        let expected_width = (3840.0 - GRID_PADDING_DESKTOP * 4.0) / 3.0;
        for rect in &placed {
            assert!((rect.width - expected_width).abs() < 0.01);
        }
    }

    #[test]
    fn test_jitter_and_rotation_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let placed = place(
            &square_dims(12),
            3840.0,
            2160.0,
            DeviceClass::Desktop,
            &mut rng,
        );

        let padding = GRID_PADDING_DESKTOP;
        let top_margin = 2160.0 * GRID_TOP_MARGIN_FRACTION_DESKTOP;
        let (cols, cell_w, cell_h) = (4, placed[0].width, placed[0].height);

        for rect in &placed {
            let row = (rect.image_index / cols) as f32;
            let col = (rect.image_index % cols) as f32;
            let nominal_x = padding + col * (cell_w + padding);
            let nominal_y = top_margin + row * (cell_h + padding);

            let dx = rect.x - nominal_x;
            let dy = rect.y - nominal_y;
            assert!(dx.abs() <= padding * GRID_JITTER_X_FRACTION / 2.0 + 0.01);
            assert!(dy >= -0.01 && dy <= padding * GRID_JITTER_Y_FRACTION + 0.01);
            assert!(rect.rotation_deg.abs() <= GRID_MAX_ROTATION_DEG + 0.01);
        }
    }

    #[test]
    fn test_placements_are_sorted_by_y_for_layering() {
        let mut rng = StdRng::seed_from_u64(3);
        let placed = place(
            &square_dims(9),
            3840.0,
            2160.0,
            DeviceClass::Desktop,
            &mut rng,
        );

        for pair in placed.windows(2) {
            assert!(pair[0].y <= pair[1].y);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_layout() {
        let dims = square_dims(8);
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = place(&dims, 3840.0, 2160.0, DeviceClass::Desktop, &mut first_rng);
        let second = place(&dims, 3840.0, 2160.0, DeviceClass::Desktop, &mut second_rng);
        assert_eq!(first, second);
    }
}
