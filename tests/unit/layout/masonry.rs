//! Tests for greedy shortest-column masonry packing

#[cfg(test)]
mod tests {
    use montage::io::configuration::{
        MASONRY_COLUMNS_DESKTOP, MASONRY_PADDING_DESKTOP, MASONRY_PADDING_MOBILE,
    };
    use montage::layout::masonry::place;
    use montage::layout::{DeviceClass, ImageDims, PlacedRect};

    fn column_of(rect: &PlacedRect, padding: f32, column_width: f32) -> usize {
        ((rect.x - padding) / (column_width + padding)).round() as usize
    }

    #[test]
    fn test_every_image_is_placed_exactly_once() {
        let dims: Vec<ImageDims> = (0..10)
            .map(|index| ImageDims {
                width: 400,
                height: 200 + index * 60,
            })
            .collect();

        let placed = place(&dims, 3840.0, DeviceClass::Desktop);
        assert_eq!(placed.len(), 10);

        let mut seen = [false; 10];
        for rect in &placed {
            assert!(!seen[rect.image_index]);
            seen[rect.image_index] = true;
            assert!((rect.rotation_deg).abs() < f32::EPSILON);
        }
        assert!(seen.iter().all(|present| *present));
    }

    #[test]
    fn test_column_width_follows_the_padding_formula() {
        let dims = vec![ImageDims { width: 100, height: 100 }; 3];
        let placed = place(&dims, 1080.0, DeviceClass::Mobile);

        let expected = (1080.0 - MASONRY_PADDING_MOBILE * 3.0) / 2.0;
        for rect in &placed {
            assert!((rect.width - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_equal_heights_round_robin_the_columns() {
        // With identical images every column ties, so the lowest index wins
        let dims = vec![ImageDims { width: 400, height: 400 }; 4];
        let placed = place(&dims, 3840.0, DeviceClass::Desktop);

        let padding = MASONRY_PADDING_DESKTOP;
        let column_width = placed[0].width;
        for (index, rect) in placed.iter().enumerate() {
            assert_eq!(column_of(rect, padding, column_width), index);
            assert!((rect.y - padding).abs() < 0.01);
        }
    }

    #[test]
    fn test_columns_stay_balanced_within_one_item() {
        let dims: Vec<ImageDims> = (0..17)
            .map(|index| ImageDims {
                width: 600,
                height: 240 + (index * 97) % 600,
            })
            .collect();

        let placed = place(&dims, 3840.0, DeviceClass::Desktop);

        let padding = MASONRY_PADDING_DESKTOP;
        let column_width = placed[0].width;
        let mut heights = vec![padding; MASONRY_COLUMNS_DESKTOP];
        let mut tallest = 0.0f32;
        for rect in &placed {
            let column = column_of(rect, padding, column_width);
            heights[column] += rect.height + padding;
            tallest = tallest.max(rect.height);
        }

        let max = heights.iter().copied().fold(f32::MIN, f32::max);
        let min = heights.iter().copied().fold(f32::MAX, f32::min);
        assert!(max - min <= tallest + padding + 0.01);
    }

    #[test]
    fn test_each_image_lands_on_the_shortest_column() {
        let dims: Vec<ImageDims> = (0..9)
            .map(|index| ImageDims {
                width: 500,
                height: 100 + (index * 211) % 700,
            })
            .collect();

        let placed = place(&dims, 3840.0, DeviceClass::Desktop);

        let padding = MASONRY_PADDING_DESKTOP;
        let column_width = placed[0].width;
        let mut heights = vec![padding; MASONRY_COLUMNS_DESKTOP];
        for rect in &placed {
            let column = column_of(rect, padding, column_width);
            let shortest = heights.iter().copied().fold(f32::MAX, f32::min);

            assert!((rect.y - heights[column]).abs() < 0.01);
            assert!(heights[column] - shortest < 0.01);
            heights[column] += rect.height + padding;
        }
    }
}
