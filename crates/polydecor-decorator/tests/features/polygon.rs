use crate::common::{as_context, map_at, LAT};
use polydecor_core::LatLng;
use polydecor_decorator::{
    MarkerSymbol, PathInput, PatternDefinition, PolylineDecorator, Symbol,
};
use polydecor_pattern::RawPatternSpec;

fn square() -> Vec<LatLng> {
    vec![
        LatLng::new(LAT, 17.0),
        LatLng::new(LAT, 17.01),
        LatLng::new(LAT - 0.005, 17.01),
        LatLng::new(LAT - 0.005, 17.0),
    ]
}

fn markers(ring: Vec<LatLng>) -> Vec<(LatLng, f64)> {
    let map = map_at(14.0);
    let pattern = PatternDefinition::new(
        RawPatternSpec::new(0.0, 0.0, "25%"),
        MarkerSymbol::rotated(0.0),
    );
    let decorator = PolylineDecorator::new(&[PathInput::polygon(ring)], &[pattern]).unwrap();
    decorator.on_add(as_context(&map));

    decorator.layers()[0].paths[0]
        .symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Marker { lat_lng, options } => Some((*lat_lng, options.rotation_angle?)),
            _ => None,
        })
        .collect()
}

fn near(a: LatLng, b: LatLng) -> bool {
    (a.lat - b.lat).abs() < 1e-9 && (a.lng - b.lng).abs() < 1e-9
}

#[test]
fn test_polygon_pattern_runs_over_closing_edge() {
    let placed = markers(square());
    assert_eq!(placed.len(), 5);

    let start = LatLng::new(LAT, 17.0);
    assert!(near(placed[0].0, start));
    assert!(near(placed[4].0, start));

    // first edge heads east, closing edge heads north
    assert!((placed[0].1 - 90.0).abs() < 1e-9);
    let last = placed[4].1;
    assert!(last < 1e-9 || last > 360.0 - 1e-9, "heading {}", last);
}

#[test]
fn test_already_closed_ring_behaves_the_same() {
    let mut closed = square();
    closed.push(closed[0]);
    let a = markers(square());
    let b = markers(closed);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert!(near(x.0, y.0));
        assert!((x.1 - y.1).abs() < 1e-9);
    }
}
