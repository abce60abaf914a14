use crate::common::{as_context, map_at, short_east_path};
use polydecor_decorator::{
    ArrowHeadSymbol, DashSymbol, MapProjector, PatternDefinition, PolylineDecorator, Symbol,
};
use polydecor_pattern::RawPatternSpec;

fn single_placement(symbol: impl Into<polydecor_decorator::SymbolDefinition>) -> (Symbol, f64) {
    let map = map_at(14.0);
    let pattern = PatternDefinition::new(RawPatternSpec::new("50%", 0.0, 0.0), symbol);
    let decorator = PolylineDecorator::new(&[short_east_path()], &[pattern]).unwrap();
    decorator.on_add(as_context(&map));

    let layers = decorator.layers();
    assert_eq!(layers[0].symbol_count(), 1);
    let symbol = layers[0].paths[0].symbols[0].clone();

    // pixel distance between the first two vertices
    let ends = match &symbol {
        Symbol::Polyline { lat_lngs, .. } | Symbol::Polygon { lat_lngs, .. } => {
            (map.project(&lat_lngs[0]), map.project(&lat_lngs[1]))
        }
        Symbol::Marker { lat_lng, .. } => (map.project(lat_lng), map.project(lat_lng)),
    };
    (symbol, ends.0.distance_to(&ends.1))
}

#[test]
fn test_dash_has_pixel_length() {
    let (symbol, length) = single_placement(DashSymbol::new(14.0));
    assert!((length - 14.0).abs() < 1e-6);
    assert!(!symbol.is_interactive());
}

#[test]
fn test_arrow_wing_has_pixel_length() {
    let (symbol, length) = single_placement(ArrowHeadSymbol::new(12.0, 60.0));
    assert!((length - 12.0).abs() < 1e-6);

    let Symbol::Polyline { lat_lngs, .. } = symbol else {
        panic!("Expected polyline");
    };
    assert_eq!(lat_lngs.len(), 3);
    // path heads east, so both wings lie west of the tip
    assert!(lat_lngs[0].lng < lat_lngs[1].lng);
    assert!(lat_lngs[2].lng < lat_lngs[1].lng);
    // and on opposite sides of the path
    assert!(lat_lngs[0].lat < lat_lngs[1].lat);
    assert!(lat_lngs[2].lat > lat_lngs[1].lat);
}

#[test]
fn test_filled_arrow_is_polygon() {
    let (symbol, _) = single_placement(ArrowHeadSymbol::default().filled());
    assert!(matches!(symbol, Symbol::Polygon { .. }));
}
