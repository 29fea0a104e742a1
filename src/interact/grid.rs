// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geom::Point;

/// Default lattice spacing when the preferences collaborator supplies none.
pub const DEFAULT_SPACING: i32 = 10;

/// Rounds each coordinate independently to the nearest multiple of
/// `spacing`, ties rounding half-up. Idempotent; a spacing below 2 snaps
/// nothing.
pub fn snap(point: Point, spacing: i32) -> Point {
    Point::new(snap_coordinate(point.x, spacing), snap_coordinate(point.y, spacing))
}

fn snap_coordinate(value: i32, spacing: i32) -> i32 {
    if spacing <= 1 {
        return value;
    }
    (value + spacing / 2).div_euclid(spacing) * spacing
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{snap, DEFAULT_SPACING};
    use crate::geom::Point;

    #[rstest]
    #[case(Point::new(0, 0), Point::new(0, 0))]
    #[case(Point::new(4, 6), Point::new(0, 10))]
    #[case(Point::new(15, 25), Point::new(20, 30))]
    #[case(Point::new(14, 16), Point::new(10, 20))]
    #[case(Point::new(-15, -14), Point::new(-10, -10))]
    fn snaps_to_nearest_lattice_point(#[case] input: Point, #[case] expected: Point) {
        assert_eq!(snap(input, DEFAULT_SPACING), expected);
    }

    #[test]
    fn snap_is_idempotent() {
        for x in -40..40 {
            for y in -40..40 {
                let once = snap(Point::new(x, y), DEFAULT_SPACING);
                assert_eq!(snap(once, DEFAULT_SPACING), once);
            }
        }
    }

    #[test]
    fn degenerate_spacing_is_identity() {
        assert_eq!(snap(Point::new(7, 13), 1), Point::new(7, 13));
        assert_eq!(snap(Point::new(7, 13), 0), Point::new(7, 13));
    }
}
