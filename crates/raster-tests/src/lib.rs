//! Integration tests for raster-rs crates.
//!
//! End-to-end pipelines over synthetic frames, exercising the interaction
//! between `raster-core` and `raster-ops`: geometry round trips, color
//! chains, and the full backdrop-replacement workflows.

#[cfg(test)]
mod tests {
    use raster_core::{PixelGrid, Rgb8};
    use raster_ops::key::ColorKey;
    use raster_ops::{color, composite, transform};

    const BOARD: Rgb8 = [34, 85, 51];

    /// Deterministic non-symmetric test frame.
    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set_pixel(
                    x,
                    y,
                    [
                        ((x * 5 + 3) % 256) as u8,
                        ((y * 9 + 7) % 256) as u8,
                        ((x * y + 11) % 256) as u8,
                    ],
                );
            }
        }
        grid
    }

    /// A board-colored frame with a rectangle of "chalk" pixels drawn on it.
    fn board_frame(width: u32, height: u32) -> PixelGrid {
        let mut frame = PixelGrid::filled(width, height, BOARD);
        for y in height / 3..height / 2 {
            for x in width / 3..width / 2 {
                frame.set_pixel(x, y, [235, 235, 235]);
            }
        }
        frame
    }

    #[test]
    fn test_geometry_round_trips() {
        let frame = gradient(31, 18);

        assert_eq!(transform::mirror(&transform::mirror(&frame)), frame);

        let mut rotated = frame.clone();
        for _ in 0..4 {
            rotated = transform::rotate(&rotated);
        }
        assert_eq!(rotated, frame);

        assert_eq!(transform::scale(&frame, 1.0).unwrap(), frame);
    }

    #[test]
    fn test_rotate_then_mirror_consistency() {
        // Rotating a mirrored frame equals transposing the original:
        // rotate = transpose . mirror and mirror is an involution.
        let frame = gradient(12, 7);
        let via_ops = transform::rotate(&transform::mirror(&frame));
        assert_eq!(via_ops.dimensions(), (7, 12));
        for (x, y, px) in frame.pixels() {
            assert_eq!(via_ops.pixel(y, x), px);
        }
    }

    #[test]
    fn test_color_chain_preserves_dimensions() {
        let frame = gradient(40, 25);
        let out = color::negative(&color::grayscale(&color::isolate_red(&frame)));
        assert_eq!(out.dimensions(), frame.dimensions());
        // red-isolate zeroes green, grayscale replicates green, negative inverts
        for (_, _, px) in out.pixels() {
            assert_eq!(px, [255, 255, 255]);
        }
    }

    #[test]
    fn test_backdrop_fill_pipeline() {
        let frame = board_frame(24, 24);
        let out = composite::replace_backdrop(&frame, [255, 0, 0]).unwrap();

        for (x, y, px) in out.pixels() {
            if frame.pixel(x, y) == BOARD {
                assert_eq!(px, [255, 0, 0]);
            } else {
                assert_eq!(px, [235, 235, 235]);
            }
        }
    }

    #[test]
    fn test_vacation_pipeline() {
        // Chalk subject transplanted into a scenic background at the
        // half-dimension offset; everything else untouched.
        let frame = board_frame(12, 12);
        let scenery = gradient(40, 30);

        let out = composite::transplant_backdrop(&frame, &scenery).unwrap();
        assert_eq!(out.dimensions(), scenery.dimensions());

        let (ox, oy) = (20, 15);
        for (x, y, px) in out.pixels() {
            let from_subject = x >= ox
                && y >= oy
                && frame.get_pixel(x - ox, y - oy) == Some([235, 235, 235]);
            if from_subject {
                assert_eq!(px, [235, 235, 235]);
            } else {
                assert_eq!(px, scenery.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_scaled_transplant_pipeline() {
        // Shrink the frame, then transplant: exercises scale + keying
        // together the way a host application chains them.
        let frame = board_frame(16, 16);
        let small = transform::scale(&frame, 0.5).unwrap();
        assert_eq!(small.dimensions(), (8, 8));

        let scenery = PixelGrid::filled(30, 30, [7, 7, 7]);
        let key = ColorKey::sample(&small).unwrap();
        let out = composite::transplant(&small, &scenery, &key);
        assert_eq!(out.dimensions(), (30, 30));
        // Scenery corner far from the paste region is untouched
        assert_eq!(out.pixel(0, 0), [7, 7, 7]);
        assert_eq!(out.pixel(29, 29), [7, 7, 7]);
    }

    #[test]
    fn test_parallel_agrees_with_serial_pipeline() {
        let frame = gradient(200, 150);
        assert_eq!(
            raster_ops::parallel::negative(&frame),
            color::negative(&frame)
        );
    }
}
