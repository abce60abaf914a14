use crate::common::{as_context, map_at, LAT};
use polydecor_core::{LatLng, Point};
use polydecor_decorator::{
    direction_points, MapProjector, MarkerSymbol, PathInput, PatternDefinition, PolylineDecorator,
    Symbol, VISIBLE_BOUNDS_PADDING,
};
use polydecor_pattern::RawPatternSpec;

fn long_path() -> PathInput {
    PathInput::polyline(vec![LatLng::new(LAT, 16.0), LatLng::new(LAT, 18.0)])
}

fn marker_positions(decorator: &PolylineDecorator) -> Vec<LatLng> {
    decorator.layers()[0].paths[0]
        .symbols
        .iter()
        .filter_map(|s| match s {
            Symbol::Marker { lat_lng, .. } => Some(*lat_lng),
            _ => None,
        })
        .collect()
}

#[test]
fn test_only_visible_placements_are_drawn() {
    let map = map_at(14.0);
    let pattern = PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, 20.0), MarkerSymbol::default());
    let decorator = PolylineDecorator::new(&[long_path()], &[pattern.clone()]).unwrap();
    decorator.on_add(as_context(&map));

    let all = direction_points(
        map.as_ref(),
        &decorator.paths()[0],
        &pattern.spec.parse().unwrap(),
    );
    let drawn = marker_positions(&decorator);

    assert!(all.len() > 1000);
    // padded viewport is about 1229 px wide
    assert!(drawn.len() > 50 && drawn.len() < 70, "drew {}", drawn.len());

    let visible = map.bounds().pad(VISIBLE_BOUNDS_PADDING);
    assert!(drawn.iter().all(|ll| visible.contains(ll)));
}

#[test]
fn test_panning_slides_the_window() {
    let map = map_at(14.0);
    let pattern = PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, 20.0), MarkerSymbol::default());
    let decorator = PolylineDecorator::new(&[long_path()], &[pattern]).unwrap();
    decorator.on_add(as_context(&map));

    let before = marker_positions(&decorator);
    map.pan_by(Point::new(3000.0, 0.0)).unwrap();
    let after = marker_positions(&decorator);

    assert!(!after.is_empty());
    let max_before = before.iter().map(|ll| ll.lng).fold(f64::MIN, f64::max);
    let min_after = after.iter().map(|ll| ll.lng).fold(f64::MAX, f64::min);
    assert!(min_after > max_before);
}

#[test]
fn test_path_outside_view_draws_nothing() {
    let map = map_at(14.0);
    let far = PathInput::polyline(vec![LatLng::new(10.0, 100.0), LatLng::new(10.5, 100.5)]);
    let pattern = PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, "10%"), MarkerSymbol::default());
    let decorator = PolylineDecorator::new(&[far], &[pattern]).unwrap();
    decorator.on_add(as_context(&map));
    assert_eq!(decorator.layers()[0].symbol_count(), 0);
}
