use tacgrid::{
    GeometryConfig, GridType, HexOrientation, MapGeometry, RectBounds,
    RenderLimits,
};
use validator::ValidationErrors;

#[test]
fn test_geometry_config_validation() {
    let config = GeometryConfig {
        grid_type: GridType::Hex,
        cell_size: -5.0,                       // invalid
        orientation: HexOrientation::Pointy,   // valid
        bounds: Some(RectBounds::new(0, 100)), // valid (but empty)
        limits: RenderLimits {
            max_render_hexes: 0, // invalid
            max_offset_area: 1,  // valid (but tiny)
        },
    };

    // This is a bit of a lazy check but it works well enough
    let err = MapGeometry::new(&config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["cell_size", "limits"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_default_config_is_valid() {
    MapGeometry::new(&GeometryConfig::default()).unwrap();
    MapGeometry::new(&GeometryConfig {
        grid_type: GridType::Hex,
        ..Default::default()
    })
    .unwrap();
}
