//! End-to-end tests of the HTTP API over a small fixture graph.

use std::path::Path;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use research_explorer::api;
use research_explorer::config::Config;
use research_explorer::context::Context;
use research_explorer::graph::backends::oxigraph::OxigraphClient;
use serde_json::Value;
use tower::ServiceExt;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.ttl");

fn app() -> Router {
    let client = OxigraphClient::in_memory(Duration::from_secs(5)).unwrap();
    client.load_file(Path::new(FIXTURE)).unwrap();
    api::router(Context::new(client, Config::default()))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn find<'a>(items: &'a Value, key: &str, value: &str) -> &'a Value {
    items
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item[key] == value)
        .unwrap_or_else(|| panic!("no item with {key} = {value}"))
}

#[tokio::test]
async fn test_person_listing_aggregates_relationships() {
    let app = app();
    let (status, persons) = get(&app, "/api/v1/persons").await;
    assert_eq!(status, StatusCode::OK);

    let labels: Vec<&str> = persons
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "Abraham ibn Ezra",
            "Bahya ibn Paquda",
            "Hasdai Crescas",
            "Judah Halevi",
            "Maimonides"
        ]
    );

    let maimonides = find(&persons, "id", "Q1");
    assert_eq!(maimonides["workCount"], 2);
    assert_eq!(maimonides["mentionCount"], 1);
    assert_eq!(maimonides["places"], "-");
    assert_eq!(maimonides["times"], "-");

    let halevi = find(&persons, "id", "Q2");
    assert_eq!(halevi["places"], "Cordoba, Toledo");

    let ibn_ezra = find(&persons, "id", "Q5");
    assert_eq!(ibn_ezra["times"], "1120-1130, 1140");
    assert_eq!(ibn_ezra["places"], "Toledo");
}

#[tokio::test]
async fn test_trailing_slash_is_accepted() {
    let app = app();
    let (plain, a) = get(&app, "/api/v1/persons").await;
    let (slashed, b) = get(&app, "/api/v1/persons/").await;
    assert_eq!(plain, StatusCode::OK);
    assert_eq!(slashed, StatusCode::OK);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_person_detail() {
    let app = app();
    let (status, person) = get(&app, "/api/v1/persons/Q1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(person["label"], "Maimonides");
    assert_eq!(person["source"], "Wikidata");
    assert_eq!(person["authorities"][0], "https://www.wikidata.org/wiki/Q127398");
    assert_eq!(person["works"].as_array().unwrap().len(), 2);
    assert_eq!(person["scholarly"][0]["id"], "S1");
    assert_eq!(person["scholarly"][0]["year"], "1990");

    let (_, halevi) = get(&app, "/api/v1/persons/Q2").await;
    let places = halevi["places"].as_array().unwrap();
    assert_eq!(places.len(), 2, "repeated relations collapse: {places:?}");
    assert_eq!(find(&halevi["places"], "label", "Toledo")["type"], "Birth");
    assert_eq!(find(&halevi["places"], "label", "Cordoba")["type"], "Residence");
    assert_eq!(halevi["times"][0]["type"], "Life");
    assert_eq!(halevi["times"][0]["start"], "1075");
    assert_eq!(halevi["times"][0]["end"], "1141");
}

#[tokio::test]
async fn test_person_detail_falls_back_to_id_namespace() {
    let app = app();
    let (status, person) = get(&app, "/api/v1/persons/Q9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(person["label"], "Hasdai Crescas");
    assert_eq!(person["uri"], "http://jewish_philosophy.org/id/Q9");
}

#[tokio::test]
async fn test_ids_that_cannot_form_an_iri_are_not_found() {
    let app = app();
    for (uri, detail) in [
        ("/api/v1/persons/a%20b", "Person not found"),
        ("/api/v1/persons/a%3Eb", "Person not found"),
        ("/api/v1/works/a%3Eb", "Work not found"),
        ("/api/v1/places/x%7By", "Place not found"),
        ("/api/v1/subjects/a%20b", "Subject not found"),
        ("/api/v1/languages/a%20b", "Language not found"),
        ("/api/v1/scholarly/a%20b", "Scholarly work not found"),
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["detail"], detail, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_entities_are_not_found() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/persons/DoesNotExist123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Person not found");

    // W3 has a label but no title
    let (status, body) = get(&app, "/api/v1/works/W3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Work not found");

    let (status, _) = get(&app, "/api/v1/places/Nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_work_listing_and_detail() {
    let app = app();
    let (_, works) = get(&app, "/api/v1/works").await;
    let guide = find(&works, "id", "W1");
    assert_eq!(guide["authors"], "Maimonides");
    assert_eq!(guide["mentionCount"], 1);

    let (status, detail) = get(&app, "/api/v1/works/W1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Guide for the Perplexed");
    assert_eq!(detail["authors"][0]["id"], "Q1");
    assert_eq!(detail["subjects"][0], "Philosophy");
    assert_eq!(detail["languages"][0], "Judeo-Arabic");
    assert_eq!(detail["scholarly_mentions"][0]["year"], "2005");
}

#[tokio::test]
async fn test_places_subjects_and_languages() {
    let app = app();
    let (_, places) = get(&app, "/api/v1/places").await;
    let toledo = find(&places, "id", "P1");
    assert_eq!(toledo["personCount"], 3);

    let (_, place) = get(&app, "/api/v1/places/P1").await;
    assert_eq!(place["people"].as_array().unwrap().len(), 3);

    // Q2 reaches Cordoba through two identical relations
    let (_, cordoba) = get(&app, "/api/v1/places/P2").await;
    let people = cordoba["people"].as_array().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0]["id"], "Q2");
    assert_eq!(people[0]["type"], "Residence");

    let (_, subjects) = get(&app, "/api/v1/subjects").await;
    assert_eq!(find(&subjects, "id", "SUB1")["count"], 1);

    let (_, subject) = get(&app, "/api/v1/subjects/SUB1").await;
    assert_eq!(subject["description"], "Rational inquiry into first principles");
    assert_eq!(subject["works"][0]["id"], "W1");

    let (status, language) = get(&app, "/api/v1/languages/L1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(language["works"][0]["title"], "Guide for the Perplexed");
}

#[tokio::test]
async fn test_scholarly_newest_first() {
    let app = app();
    let (_, scholarly) = get(&app, "/api/v1/scholarly").await;
    let ids: Vec<&str> = scholarly
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["S2", "S1"]);
    assert_eq!(scholarly[0]["authors"][0]["name"], "Josef Stern");
    assert_eq!(scholarly[0]["mentions_work_count"], 1);
    assert_eq!(scholarly[1]["source"]["label"], "Wikidata");

    let (_, detail) = get(&app, "/api/v1/scholarly/S1").await;
    assert_eq!(detail["mentions_person"][0]["label"], "Maimonides");
}

#[tokio::test]
async fn test_responses_are_repeatable() {
    let app = app();
    for uri in ["/api/v1/scholarly", "/api/v1/network", "/api/v1/persons/Q1"] {
        let (_, first) = get(&app, uri).await;
        let (_, second) = get(&app, uri).await;
        assert_eq!(first, second, "{uri} changed between calls");
    }
}

#[tokio::test]
async fn test_source_filter_restricts_primary_entities() {
    let app = app();
    let (_, persons) = get(&app, "/api/v1/persons?source=Source_Manual").await;
    let ids: Vec<&str> = persons
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["Q4", "Q2"]);

    for id in ids {
        let (_, detail) = get(&app, &format!("/api/v1/persons/{id}")).await;
        assert_eq!(detail["source"], "Manual");
    }

    let (_, works) = get(&app, "/api/v1/works?source=Source_Manual").await;
    assert!(works.as_array().unwrap().is_empty());

    // An empty parameter means unfiltered
    let (_, all) = get(&app, "/api/v1/persons?source=").await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (status, none) = get(&app, "/api/v1/persons?source=Source_Unknown").await;
    assert_eq!(status, StatusCode::OK);
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats() {
    let app = app();
    let (_, stats) = get(&app, "/api/v1/stats").await;
    assert_eq!(stats["persons"], 5);
    assert_eq!(stats["works"], 3);
    assert_eq!(stats["scholarly"], 2);
    assert_eq!(stats["places"], 2);
    assert_eq!(stats["sources"], 2);

    let (_, filtered) = get(&app, "/api/v1/stats?source=Source_Manual").await;
    assert_eq!(filtered["persons"], 2);
    assert_eq!(filtered["works"], 0);
    assert_eq!(filtered["sources"], 2);
}

#[tokio::test]
async fn test_sources() {
    let app = app();
    let (_, sources) = get(&app, "/api/v1/sources").await;
    assert_eq!(sources.as_array().unwrap().len(), 2);
    let wikidata = find(&sources, "label", "Wikidata");
    assert_eq!(wikidata["count"], 3);
    assert_eq!(wikidata["description"], "Data source containing 3 entities");
}

#[tokio::test]
async fn test_network_edges_connect_known_nodes() {
    let app = app();
    for uri in ["/api/v1/network", "/api/v1/network?source=Source_Wikidata"] {
        let (_, network) = get(&app, uri).await;
        let ids: Vec<&str> = network["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        for edge in network["edges"].as_array().unwrap() {
            assert!(ids.contains(&edge["from"].as_str().unwrap()), "{uri}: {edge}");
            assert!(ids.contains(&edge["to"].as_str().unwrap()), "{uri}: {edge}");
        }
    }

    let (_, filtered) = get(&app, "/api/v1/network?source=Source_Wikidata").await;
    let edges = filtered["edges"].as_array().unwrap();
    assert!(edges.iter().any(|e| e["from"] == "W1" && e["to"] == "Q1"));
    assert!(!edges.iter().any(|e| e["to"] == "SUB1"));
}

#[tokio::test]
async fn test_geojson_keeps_dated_placements() {
    let app = app();
    let (status, collection) = get(&app, "/api/v1/places/geojson").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(collection["type"], "FeatureCollection");

    let features = collection["features"].as_array().unwrap();
    let people: Vec<&str> = features
        .iter()
        .map(|f| f["properties"]["person_id"].as_str().unwrap())
        .collect();
    // Q4 is at Toledo with no years at all; Q9 has no place
    assert_eq!(people, ["Q2", "Q5"]);

    let halevi = &features[0];
    assert_eq!(halevi["geometry"]["type"], "Point");
    assert_eq!(halevi["geometry"]["coordinates"][0], -4.0273);
    assert_eq!(halevi["geometry"]["coordinates"][1], 39.8628);
    assert_eq!(halevi["properties"]["type"], "Birth");
    // Life years win over the relation's 1090-1100 span
    assert_eq!(halevi["properties"]["start"], 1075);
    assert_eq!(halevi["properties"]["end"], 1141);

    let ibn_ezra = &features[1];
    assert_eq!(ibn_ezra["properties"]["type"], "Unknown");
    assert_eq!(ibn_ezra["properties"]["start"], 1150);
    assert_eq!(ibn_ezra["properties"]["end"], 1160);
}

#[tokio::test]
async fn test_geojson_alias_and_filter() {
    let app = app();
    let (_, nested) = get(&app, "/api/v1/places/geojson").await;
    for uri in ["/api/geojson", "/api/v1/geojson"] {
        let (status, alias) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(nested, alias);
    }

    let (_, filtered) = get(&app, "/api/geojson?source=Source_Wikidata").await;
    assert!(filtered["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ontology_graph_and_audit() {
    let app = app();
    let (_, graph) = get(&app, "/api/v1/ontology").await;
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    let edge = &graph["edges"][0];
    assert_eq!(edge["label"], "written by");
    assert_eq!(edge["arrows"], "to");
    assert!(edge["from"].as_str().unwrap().ends_with("#HistoricalWork"));

    let (_, audit) = get(&app, "/api/v1/ontology/audit").await;
    let unused = audit["classes"]["unused"].as_array().unwrap();
    assert!(unused.iter().any(|c| c.as_str().unwrap().ends_with("#UnusedClass")));
    let undefined = audit["properties"]["undefined"].as_array().unwrap();
    assert!(undefined.iter().any(|p| p.as_str().unwrap().ends_with("#hasSource")));
}
