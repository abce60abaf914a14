use crate::common::{as_context, map_at, short_east_path, LAT};
use polydecor_core::LatLng;
use polydecor_decorator::{DashSymbol, PatternDefinition, PolylineDecorator};
use polydecor_pattern::RawPatternSpec;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_decorator_is_send_sync() {
    assert_send_sync::<PolylineDecorator>();
    assert_send_sync::<polydecor_decorator::WebMercatorMap>();
}

#[test]
fn test_concurrent_moves_and_reads() {
    let map = map_at(14.0);
    let pattern = PatternDefinition::new(RawPatternSpec::new(0.0, 0.0, 20.0), DashSymbol::default());
    let decorator = Arc::new(PolylineDecorator::new(&[short_east_path()], &[pattern]).unwrap());
    decorator.on_add(as_context(&map));

    thread::scope(|s| {
        for i in 0..4 {
            let map = map.clone();
            s.spawn(move || {
                for step in 0..25 {
                    let zoom = 13.0 + ((i + step) % 3) as f64;
                    map.set_view(LatLng::new(LAT, 17.005), zoom).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let decorator = decorator.clone();
            s.spawn(move || {
                for _ in 0..25 {
                    let count = decorator.layers()[0].symbol_count();
                    assert!([3, 6, 12].contains(&count), "unexpected count {}", count);
                }
            });
        }
    });

    // settle on a known view
    map.set_view(LatLng::new(LAT, 17.005), 15.0).unwrap();
    assert_eq!(decorator.layers()[0].symbol_count(), 12);
}
