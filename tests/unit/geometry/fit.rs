//! Tests for aspect-ratio preserving fits

#[cfg(test)]
mod tests {
    use montage::geometry::fit::{FitMode, FittedBox, fit_aspect};

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_contain_never_overflows_and_preserves_ratio() {
        let cases = [
            (1600.0, 900.0, 400.0, 400.0),
            (900.0, 1600.0, 400.0, 400.0),
            (100.0, 100.0, 500.0, 300.0),
            (3.0, 2.0, 2000.0, 100.0),
        ];

        for (content_w, content_h, box_w, box_h) in cases {
            let fit = fit_aspect(content_w, content_h, box_w, box_h, FitMode::Contain);

            assert!(fit.draw_w <= box_w + EPSILON, "width overflow for {content_w}x{content_h}");
            assert!(fit.draw_h <= box_h + EPSILON, "height overflow for {content_w}x{content_h}");

            let content_ratio = content_w / content_h;
            let drawn_ratio = fit.draw_w / fit.draw_h;
            assert!((content_ratio - drawn_ratio).abs() < EPSILON);
        }
    }

    #[test]
    fn test_contain_centers_the_shortfall() {
        let fit = fit_aspect(100.0, 100.0, 300.0, 200.0, FitMode::Contain);

        assert!((fit.draw_w - 200.0).abs() < EPSILON);
        assert!((fit.draw_h - 200.0).abs() < EPSILON);
        assert!((fit.offset_x - 50.0).abs() < EPSILON);
        assert!(fit.offset_y.abs() < EPSILON);
    }

    #[test]
    fn test_cover_always_fills_the_box() {
        let cases = [
            (1600.0, 900.0, 400.0, 400.0),
            (900.0, 1600.0, 400.0, 400.0),
            (50.0, 50.0, 800.0, 100.0),
        ];

        for (content_w, content_h, box_w, box_h) in cases {
            let fit = fit_aspect(content_w, content_h, box_w, box_h, FitMode::Cover);

            assert!(fit.draw_w >= box_w - EPSILON);
            assert!(fit.draw_h >= box_h - EPSILON);
            // The short axis matches the box exactly; overflow is centered
            assert!(
                (fit.draw_w - box_w).abs() < EPSILON || (fit.draw_h - box_h).abs() < EPSILON
            );
        }
    }

    #[test]
    fn test_cover_centers_the_overflow() {
        let fit = fit_aspect(200.0, 100.0, 100.0, 100.0, FitMode::Cover);

        assert!((fit.draw_h - 100.0).abs() < EPSILON);
        assert!((fit.draw_w - 200.0).abs() < EPSILON);
        assert!((fit.offset_x + 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_inputs_yield_the_zero_box() {
        assert_eq!(
            fit_aspect(0.0, 100.0, 50.0, 50.0, FitMode::Contain),
            FittedBox::default()
        );
        assert_eq!(
            fit_aspect(100.0, 100.0, 0.0, 50.0, FitMode::Cover),
            FittedBox::default()
        );
        assert_eq!(
            fit_aspect(100.0, -5.0, 50.0, 50.0, FitMode::Contain),
            FittedBox::default()
        );
    }
}
