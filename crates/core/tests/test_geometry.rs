use assert_approx_eq::assert_approx_eq;
use strum::IntoEnumIterator;
use tacgrid::{
    axial_to_offset, column_to_label, is_within_offset_bounds,
    offset_to_axial, AxialCoord, CellPosition, CoordinateSystem, DiagonalRule,
    DistanceOptions, GeometryConfig, GridCoord, GridType, HexGeometry,
    HexOrientation, MapGeometry, RectBounds, SquareGeometry, Vector2,
    Viewport, WorldPoint,
};

fn map_geometries() -> Vec<MapGeometry> {
    let mut geometries =
        vec![MapGeometry::new(&GeometryConfig::default()).unwrap()];
    for orientation in HexOrientation::iter() {
        for &bounds in &[None, Some(RectBounds::new(26, 20))] {
            geometries.push(
                MapGeometry::new(&GeometryConfig {
                    grid_type: GridType::Hex,
                    cell_size: 80.0,
                    orientation,
                    bounds,
                    ..Default::default()
                })
                .unwrap(),
            );
        }
    }
    geometries
}

#[test]
fn test_offset_round_trip() {
    for orientation in HexOrientation::iter() {
        for q in -50..=50 {
            for r in -50..=50 {
                let coord = AxialCoord::new(q, r);
                let offset = axial_to_offset(coord, orientation);
                assert_eq!(offset_to_axial(offset, orientation), coord);
            }
        }
    }
}

#[test]
fn test_bounds_exclusive() {
    let bounds = Some(RectBounds::new(26, 20));
    assert!(is_within_offset_bounds(25, 19, bounds));
    assert!(!is_within_offset_bounds(26, 0, bounds));
    assert!(!is_within_offset_bounds(0, 20, bounds));
    assert!(is_within_offset_bounds(-1000, 1000, None));
}

#[test]
fn test_labels() {
    assert_eq!(column_to_label(0), "A");
    assert_eq!(column_to_label(25), "Z");
    assert_eq!(column_to_label(26), "AA");
}

#[test]
fn test_square_scenarios() {
    let geo = SquareGeometry::new(40.0).unwrap();
    let origin = GridCoord::ORIGIN;

    let alternating = DistanceOptions::new(DiagonalRule::Alternating);
    assert_eq!(
        geo.cell_distance(origin, GridCoord::new(3, 1), alternating),
        3.0
    );

    assert_eq!(
        geo.cells_in_rectangle(origin, GridCoord::new(2, 2)).len(),
        9
    );
    assert_eq!(
        geo.cells_in_line(origin, GridCoord::new(3, 3)),
        vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 1),
            GridCoord::new(2, 2),
            GridCoord::new(3, 3),
        ]
    );
}

#[test]
fn test_hex_scenarios() {
    let geo = HexGeometry::new(
        80.0,
        HexOrientation::Flat,
        Some(RectBounds::new(26, 20)),
    )
    .unwrap();
    assert!(!geo.is_within_bounds(AxialCoord::new(30, 0)));
    assert_eq!(geo.hex_distance(AxialCoord::ORIGIN, AxialCoord::new(2, -1)), 2);

    assert_eq!(geo.grid_to_world(AxialCoord::ORIGIN), WorldPoint::ORIGIN);
    let world = geo.grid_to_world(AxialCoord::new(1, 0));
    assert_approx_eq!(world.x, 120.0);
    assert_approx_eq!(world.y, 69.282_032, 1e-5);
}

#[test]
fn test_distance_symmetry() {
    let rules = [
        DiagonalRule::Alternating,
        DiagonalRule::Equal,
        DiagonalRule::Euclidean,
    ];
    let cells = [(0, 0), (3, 1), (-4, 7), (5, -5), (0, -9)]
        .iter()
        .map(|&(a, b)| CellPosition::Square { x: a, y: b })
        .collect::<Vec<_>>();

    for geo in map_geometries() {
        for &a in &cells {
            assert_eq!(geo.manhattan_distance(a, a), 0.0);
            assert_eq!(geo.euclidean_distance(a, a), 0.0);
            for &b in &cells {
                assert_eq!(
                    geo.manhattan_distance(a, b),
                    geo.manhattan_distance(b, a)
                );
                assert_eq!(
                    geo.euclidean_distance(a, b),
                    geo.euclidean_distance(b, a)
                );
                for &rule in &rules {
                    let options = DistanceOptions::new(rule);
                    assert_eq!(geo.cell_distance(a, a, options), 0.0);
                    assert_eq!(
                        geo.cell_distance(a, b, options),
                        geo.cell_distance(b, a, options),
                        "{:?} {:?} {:?}",
                        a,
                        b,
                        rule
                    );
                }
            }
        }
    }
}

#[test]
fn test_clamp_idempotent() {
    for geo in map_geometries() {
        for x in -40..=40 {
            for y in -40..=40 {
                let cell = CellPosition::Square { x, y };
                let clamped = geo.clamp_to_bounds(cell);
                assert_eq!(geo.clamp_to_bounds(clamped), clamped);
                assert!(geo.is_within_bounds(clamped));
            }
        }
    }
}

#[test]
fn test_clamp_extremes() {
    let extremes = [i32::MIN, -1, 0, 1, i32::MAX];
    for geo in map_geometries() {
        for &x in &extremes {
            for &y in &extremes {
                let cell = geo.from_cell_position(CellPosition::Hex {
                    q: x,
                    r: y,
                });
                let clamped = geo.clamp_to_bounds(cell);
                assert_eq!(geo.clamp_to_bounds(clamped), clamped);
                assert!(geo.is_within_bounds(clamped), "{:?}", cell);
                // Neighbors off the edge of the plane wrap instead of
                // overflowing
                assert!(!geo.neighbors(cell).is_empty());
            }
        }
    }
}

#[test]
fn test_bounded_circle_covers_map() {
    let bounds = RectBounds::new(26, 20);
    let geo = MapGeometry::new(&GeometryConfig {
        grid_type: GridType::Hex,
        cell_size: 80.0,
        bounds: Some(bounds),
        ..Default::default()
    })
    .unwrap();
    let center = CellPosition::Hex { q: 5, r: 0 };
    for &radius in &[1000.0, 2.2e9, 2_147_483_647.0, 1e10] {
        let cells = geo.cells_in_circle(center, radius);
        assert_eq!(cells.len() as u64, bounds.area(), "radius {}", radius);
    }
}

#[test]
fn test_screen_round_trip() {
    let pan = Vector2::new(-250.0, 133.0);
    for geo in map_geometries() {
        for &zoom in &[0.25, 1.0, 3.0] {
            for x in -10..=10 {
                for y in -10..=10 {
                    let cell = geo.from_cell_position(CellPosition::Hex {
                        q: x,
                        r: y,
                    });
                    let expected = geo.grid_to_world(cell);
                    assert_eq!(geo.world_to_grid(expected), cell);
                    let screen = geo.grid_to_screen(cell, pan, zoom);
                    let world = geo.screen_to_world(screen, pan, zoom);
                    assert_approx_eq!(world.x, expected.x, 1e-6);
                    assert_approx_eq!(world.y, expected.y, 1e-6);
                }
            }
        }
    }
}

#[test]
fn test_shapes_within_bounds() {
    for geo in map_geometries() {
        let a = CellPosition::Hex { q: -3, r: 2 };
        let b = CellPosition::Hex { q: 12, r: 4 };
        let shapes = [
            geo.cells_in_rectangle(a, b),
            geo.cells_in_circle(b, 4.0),
            geo.cells_in_line(a, b),
        ];
        for cells in &shapes {
            assert!(!cells.is_empty());
            assert!(cells.iter().all(|c| geo.is_within_bounds(*c)));
        }
    }
}

#[test]
fn test_malformed_viewport() {
    let hex = HexGeometry::new(80.0, HexOrientation::Pointy, None).unwrap();
    let square = SquareGeometry::new(40.0).unwrap();
    let viewports = [
        Viewport::new(Vector2::new(f64::NAN, 0.0), 1.0, 800.0, 600.0),
        Viewport::new(Vector2::ZERO, 0.0, 800.0, 600.0),
        Viewport::new(Vector2::ZERO, f64::INFINITY, 800.0, 600.0),
    ];
    for viewport in &viewports {
        assert!(hex.hexes_to_render(viewport).is_err());
        assert!(hex.visible_hex_range(viewport).is_err());
        assert!(square.visible_grid_range(viewport).is_err());
    }
}
