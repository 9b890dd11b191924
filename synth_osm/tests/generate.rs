//! End-to-end checks over the shipped Singapore data set.

use geojson::GeoJson;

use synth_osm::{layers, singapore, sink};

#[test]
fn generate_all_singapore_layers() {
    let city = singapore::city_map();
    let results = layers::generate(&city);

    let names: Vec<&str> = results.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "expressways",
            "arterials",
            "traffic_signals",
            "parks",
            "industrial",
            "buildings",
            "cycleways"
        ]
    );

    for (name, result) in &results {
        let collection = result.as_ref().unwrap();
        assert!(!collection.features.is_empty(), "{} is empty", name);
        for feature in &collection.features {
            assert!(
                feature.properties.is_some(),
                "{} has a feature with null properties",
                name
            );
            assert!(feature.geometry.is_some());
        }
    }

    let count = |layer: &str| {
        results
            .iter()
            .find(|(name, _)| *name == layer)
            .unwrap()
            .1
            .as_ref()
            .unwrap()
            .features
            .len()
    };
    assert_eq!(count("expressways"), 9);
    assert_eq!(count("arterials"), 30);
    assert_eq!(count("parks"), 20);
    assert_eq!(count("industrial"), 8);
    assert_eq!(count("buildings"), 48);
    assert_eq!(count("cycleways"), 5);

    // Signals: every hand-placed junction, plus ceil(M / stride) derived per
    // densified expressway.
    let expected_derived: usize = city
        .expressways
        .iter()
        .map(|road| {
            let dense_len = (road.waypoints.len() - 1) * layers::EXPRESSWAY_DENSITY + 1;
            (dense_len + city.signal_stride - 1) / city.signal_stride
        })
        .sum();
    assert_eq!(
        count("traffic_signals"),
        city.junctions.len() + expected_derived
    );
}

#[test]
fn property_keys_match_osm_tagging() {
    let city = singapore::city_map();
    let results = layers::generate(&city);
    let first = |layer: &str| {
        results
            .iter()
            .find(|(name, _)| *name == layer)
            .unwrap()
            .1
            .as_ref()
            .unwrap()
            .features[0]
            .clone()
    };

    let expressway = first("expressways");
    for key in ["name", "highway", "ref", "lanes"] {
        assert!(expressway.property(key).is_some(), "missing {}", key);
    }
    assert_eq!(expressway.property("highway"), Some(&"motorway".into()));

    assert_eq!(
        first("arterials").property("highway"),
        Some(&"primary".into())
    );
    assert_eq!(
        first("traffic_signals").property("highway"),
        Some(&"traffic_signals".into())
    );
    assert_eq!(first("parks").property("leisure"), Some(&"park".into()));
    assert_eq!(
        first("industrial").property("landuse"),
        Some(&"industrial".into())
    );
    assert_eq!(first("buildings").property("building"), Some(&"yes".into()));
    assert_eq!(
        first("cycleways").property("highway"),
        Some(&"cycleway".into())
    );
}

#[test]
fn sink_writes_parseable_geojson() {
    let city = singapore::city_map();
    let (collection, _) = layers::expressways(&city).unwrap();
    let num_features = collection.features.len();

    let output_dir = std::env::temp_dir().join(format!("synth_osm_test_{}", std::process::id()));
    let output_dir = output_dir.to_str().unwrap();
    let path = sink::write_layer(output_dir, "expressways", collection).unwrap();
    assert!(path.ends_with("expressways.geojson"));

    let contents = fs_err::read_to_string(&path).unwrap();
    match contents.parse::<GeoJson>().unwrap() {
        GeoJson::FeatureCollection(collection) => {
            assert_eq!(collection.features.len(), num_features);
        }
        x => panic!("wrote something that isn't a FeatureCollection: {:?}", x),
    }

    let _ = fs_err::remove_dir_all(output_dir);
}
