use crate::common::{as_context, map_at, short_east_path, LAT};
use polydecor_core::LatLng;
use polydecor_decorator::{
    DashSymbol, DecoratorError, MapContext, PathInput, PatternDefinition, PolylineDecorator,
};
use polydecor_pattern::RawPatternSpec;

fn every_20px() -> PatternDefinition {
    PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, 20.0), DashSymbol::default())
}

#[test]
fn test_on_add_draws_immediately() {
    let map = map_at(14.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));

    assert!(decorator.is_attached());
    let layers = decorator.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].paths.len(), 1);
    // 0.01 degrees is about 116.5 px at zoom 14
    assert_eq!(layers[0].symbol_count(), 6);
}

#[test]
fn test_move_end_triggers_redraw() {
    let map = map_at(14.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));
    assert_eq!(decorator.layers()[0].symbol_count(), 6);

    map.set_view(LatLng::new(LAT, 17.005), 15.0).unwrap();
    assert_eq!(decorator.layers()[0].symbol_count(), 12);

    map.set_view(LatLng::new(LAT, 17.005), 13.0).unwrap();
    assert_eq!(decorator.layers()[0].symbol_count(), 3);
}

#[test]
fn test_on_remove_unsubscribes_and_clears() {
    let map = map_at(14.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));
    assert_eq!(map.events().subscriber_count(), 1);

    decorator.on_remove();
    assert!(!decorator.is_attached());
    assert!(decorator.layers().is_empty());
    assert_eq!(map.events().subscriber_count(), 0);

    map.set_view(LatLng::new(LAT, 17.005), 15.0).unwrap();
    assert!(decorator.layers().is_empty());

    // removing twice is harmless
    decorator.on_remove();
}

#[test]
fn test_reattach_keeps_single_subscription() {
    let first = map_at(14.0);
    let second = map_at(15.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();

    decorator.on_add(as_context(&first));
    decorator.on_add(as_context(&second));
    assert_eq!(first.events().subscriber_count(), 0);
    assert_eq!(second.events().subscriber_count(), 1);
    assert_eq!(decorator.layers()[0].symbol_count(), 12);
}

#[test]
fn test_drop_unsubscribes() {
    let map = map_at(14.0);
    {
        let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
        decorator.on_add(as_context(&map));
        assert_eq!(map.events().subscriber_count(), 1);
    }
    assert_eq!(map.events().subscriber_count(), 0);
}

#[test]
fn test_set_patterns_redraws() {
    let map = map_at(14.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));

    let sparse = PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, "50%"), DashSymbol::default());
    decorator.set_patterns(&[sparse, every_20px()]).unwrap();
    let layers = decorator.layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].symbol_count(), 3);
    assert_eq!(layers[1].symbol_count(), 6);
}

#[test]
fn test_set_patterns_error_keeps_previous() {
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    let bad = PatternDefinition::new(
        RawPatternSpec::new(0.0, "px", 10.0),
        DashSymbol::default(),
    );

    let err = decorator.set_patterns(&[every_20px(), bad]).unwrap_err();
    assert!(matches!(err, DecoratorError::InvalidPattern { index: 1, .. }));
    assert_eq!(decorator.pattern_specs().len(), 1);
}

#[test]
fn test_set_paths_redraws_and_updates_bounds() {
    let map = map_at(14.0);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));

    let two = vec![
        short_east_path(),
        PathInput::polyline(vec![LatLng::new(LAT + 0.001, 17.0), LatLng::new(LAT + 0.001, 17.005)]),
    ];
    decorator.set_paths(&two);

    let layers = decorator.layers();
    assert_eq!(layers[0].paths.len(), 2);
    assert_eq!(layers[0].paths[1].path_index, 1);
    assert_eq!(layers[0].paths[1].symbols.len(), 3);
    assert_eq!(decorator.bounds().unwrap().north_east.lat, LAT + 0.001);
}

#[test]
fn test_degenerate_paths_draw_nothing() {
    let map = map_at(14.0);
    let paths = vec![
        PathInput::polyline(vec![]),
        PathInput::polyline(vec![LatLng::new(LAT, 17.0)]),
        PathInput::polyline(vec![LatLng::new(LAT, 17.0); 3]),
    ];
    let decorator = PolylineDecorator::new(&paths, &[every_20px()]).unwrap();
    decorator.on_add(as_context(&map));
    assert_eq!(decorator.layers()[0].symbol_count(), 0);
}
