use brainviewer_api::types::{
    ApiSurface, CrossSpeciesSimilarityResponse, NiMareResponse, Side, Species,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_hemispheres_full() {
    let json = load_fixture("hemispheres.json");
    let surface: ApiSurface = serde_json::from_str(&json).unwrap();
    assert_eq!(surface.name, "human_left");
    assert!(matches!(surface.species, Species::Human));
    assert!(matches!(surface.side, Side::Left));
    assert_eq!(surface.vertex_count(), 4);
    assert_eq!(surface.x_coordinate, vec![-43.7, -42.9, -41.2, -40.8]);
    assert_eq!(surface.y_coordinate[1], 11.4);
    assert_eq!(surface.z_coordinate[3], 24.2);
    assert_eq!(surface.i_faces, vec![0, 1]);
    assert_eq!(surface.j_faces, vec![1, 2]);
    assert_eq!(surface.k_faces, vec![2, 3]);
}

#[test]
fn deserialize_cross_species() {
    let json = load_fixture("cross_species.json");
    let resp: CrossSpeciesSimilarityResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.surfaces.len(), 4);
    assert_eq!(
        resp.surface_names().collect::<Vec<_>>(),
        vec!["human_left", "human_right", "macaque_left", "macaque_right"]
    );
    assert_eq!(resp.surface("human_left").unwrap()[0], 0.12);
    assert_eq!(resp.surface("macaque_left").unwrap()[3], 0.87);
    assert!(resp.surface("gibbon_left").is_none());
}

#[test]
fn deserialize_nimare() {
    let json = load_fixture("nimare.json");
    let resp: NiMareResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.features.len(), 3);
    assert_eq!(resp.features[1].name, "somatosensory");
    assert_eq!(resp.features[1].correlation, 0.61);
}

#[test]
fn deserialize_empty_nimare() {
    let resp: NiMareResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
    assert!(resp.features.is_empty());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"features": not valid json}"#;
    let result = serde_json::from_str::<NiMareResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"name": "human_left", "species": "human"}"#;
    let result = serde_json::from_str::<ApiSurface>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_unknown_species_returns_error() {
    let json = load_fixture("hemispheres.json").replace("\"human\"", "\"gibbon\"");
    let result = serde_json::from_str::<ApiSurface>(&json);
    assert!(result.is_err());
}
