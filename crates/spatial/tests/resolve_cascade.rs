//! Integration tests for the three-tier resolution cascade.

use std::collections::BTreeMap;

use approx::assert_abs_diff_eq;
use notus_grid::{ClimateIndex, GriddedIndex, IndexStore};
use notus_spatial::{Resolution, ResolveMethod, SpatialError, resolve_index};

/// Build a store holding one index whose samples come from `f(t, y, x)`.
fn store_with(
    index: ClimateIndex,
    lats: Vec<f64>,
    lons: Vec<f64>,
    n_time: usize,
    f: impl Fn(usize, usize, usize) -> Option<f64>,
) -> IndexStore {
    let mut samples = Vec::with_capacity(n_time * lats.len() * lons.len());
    for t in 0..n_time {
        for y in 0..lats.len() {
            for x in 0..lons.len() {
                samples.push(f(t, y, x));
            }
        }
    }
    let grid = GriddedIndex::new(lats, lons, n_time, samples).unwrap();
    let mut map = BTreeMap::new();
    map.insert(index, grid);
    IndexStore::from_indices(map)
}

#[test]
fn tier1_direct_extraction_when_cell_is_valid() {
    let store = store_with(
        ClimateIndex::Txx,
        vec![20.0, 22.5, 25.0],
        vec![-80.0, -77.5, -75.0],
        10,
        |t, _, _| Some(30.0 + t as f64),
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 22.4, -77.6).unwrap();
    match r {
        Resolution::Series { values, method } => {
            assert_eq!(method, ResolveMethod::Direct);
            assert_eq!(values.len(), 10);
            assert_eq!(values[0], Some(30.0));
            assert_eq!(values[9], Some(39.0));
        }
        Resolution::Baseline { .. } => panic!("expected a series"),
    }
}

#[test]
fn tier1_accepts_exactly_half_valid() {
    // Center cell alternates valid/missing: exactly 50 % valid.
    let store = store_with(
        ClimateIndex::Txx,
        vec![20.0, 22.5, 25.0],
        vec![-80.0, -77.5, -75.0],
        10,
        |t, y, x| {
            if y == 1 && x == 1 && t % 2 == 1 {
                None
            } else {
                Some(31.0)
            }
        },
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 22.5, -77.5).unwrap();
    assert!(matches!(
        r,
        Resolution::Series {
            method: ResolveMethod::Direct,
            ..
        }
    ));
}

#[test]
fn tier2_interpolation_preferred_over_baseline() {
    // Center cell is mostly missing, all 8 neighbors fully valid: the
    // resolver must interpolate even though a baseline also exists.
    let store = store_with(
        ClimateIndex::Txx,
        vec![20.0, 22.5, 25.0],
        vec![-80.0, -77.5, -75.0],
        10,
        |t, y, x| {
            if y == 1 && x == 1 {
                if t < 8 { None } else { Some(30.0) }
            } else {
                Some(35.0)
            }
        },
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 22.5, -77.5).unwrap();
    match r {
        Resolution::Series { values, method } => {
            assert_eq!(method, ResolveMethod::Interpolated);
            // All neighbors agree, so every interpolated value is 35.0.
            for v in values {
                assert_abs_diff_eq!(v.unwrap(), 35.0, epsilon = 1e-9);
            }
        }
        Resolution::Baseline { .. } => panic!("interpolation must win over baseline"),
    }
}

#[test]
fn tier2_weights_nearer_neighbors_more() {
    // 3x3 grid with a missing center; the western column holds 10.0, the
    // rest 20.0. A query pulled toward the west must weight 10.0 harder.
    let store = store_with(
        ClimateIndex::Txx,
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        4,
        |_, y, x| {
            if y == 1 && x == 1 {
                None
            } else if x == 0 {
                Some(10.0)
            } else {
                Some(20.0)
            }
        },
    );

    // Query near the center cell but pulled toward the western column.
    let r = resolve_index(&store, ClimateIndex::Txx, 1.0, 0.8).unwrap();
    let Resolution::Series { values, method } = r else {
        panic!("expected series");
    };
    assert_eq!(method, ResolveMethod::Interpolated);

    let v = values[0].unwrap();
    // Western neighbors (value 10) are nearer, so the weighted average must
    // sit between the extremes and below the unweighted neighbor mean.
    let unweighted: f64 = (3.0 * 10.0 + 5.0 * 20.0) / 8.0;
    assert!(v > 10.0 && v < 20.0);
    assert!(v < unweighted, "weighting must favour the nearer column: {v}");
}

#[test]
fn tier2_requires_three_qualifying_neighbors() {
    // Center missing, only two neighbors valid: cascade falls to baseline.
    let store = store_with(
        ClimateIndex::Txx,
        vec![20.0, 22.5, 25.0],
        vec![-80.0, -77.5, -75.0],
        10,
        |_, y, x| {
            if (y == 0 && x == 1) || (y == 2 && x == 1) {
                Some(33.0)
            } else {
                None
            }
        },
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 22.5, -77.5).unwrap();
    match r {
        Resolution::Baseline { value, region } => {
            // (22.5, -77.5) falls in the tropics band.
            assert_eq!(region, "tropics");
            assert_abs_diff_eq!(value, 34.0, epsilon = 1e-12);
        }
        Resolution::Series { .. } => panic!("expected baseline fallback"),
    }
}

#[test]
fn tier2_time_indices_without_valid_neighbors_stay_missing() {
    // Neighbors qualify overall (60 % valid) but all share the same
    // missing years.
    let store = store_with(
        ClimateIndex::Txx,
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        10,
        |t, y, x| {
            if y == 1 && x == 1 {
                None
            } else if t < 4 {
                None
            } else {
                Some(25.0)
            }
        },
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 1.0, 1.0).unwrap();
    let Resolution::Series { values, method } = r else {
        panic!("expected series");
    };
    assert_eq!(method, ResolveMethod::Interpolated);
    for t in 0..4 {
        assert_eq!(values[t], None, "year {t} should remain missing");
    }
    for t in 4..10 {
        assert_abs_diff_eq!(values[t].unwrap(), 25.0, epsilon = 1e-9);
    }
}

#[test]
fn edge_cell_has_fewer_than_eight_candidates() {
    // Corner cell: only 3 neighbors exist and all qualify, which meets the
    // minimum exactly.
    let store = store_with(
        ClimateIndex::Txx,
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        4,
        |_, y, x| if y == 0 && x == 0 { None } else { Some(28.0) },
    );

    let r = resolve_index(&store, ClimateIndex::Txx, 0.0, 0.0).unwrap();
    assert!(matches!(
        r,
        Resolution::Series {
            method: ResolveMethod::Interpolated,
            ..
        }
    ));
}

#[test]
fn missing_index_is_an_error() {
    let store = IndexStore::from_indices(BTreeMap::new());
    let err = resolve_index(&store, ClimateIndex::Cdd, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, SpatialError::IndexUnavailable { .. }));
}

#[test]
fn baseline_without_proxy_is_an_error() {
    // An all-missing grid forces tier 3, but tr has no baseline proxy.
    let store = store_with(
        ClimateIndex::Tr,
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        4,
        |_, _, _| None,
    );

    let err = resolve_index(&store, ClimateIndex::Tr, 0.5, 0.5).unwrap_err();
    assert!(matches!(err, SpatialError::NoBaselineProxy { .. }));
}
