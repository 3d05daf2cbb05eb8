use flora_analyzer::data::connectors::{PairKind, ValidationWarning};
use flora_analyzer::data::{DataValidator, DocumentConnector, DocumentFormat};
use flora_analyzer::{FloraError, GenomeRecord, QueryPair};

#[test]
fn test_load_xml_fixture() {
    let doc = DocumentConnector::load("tests/data/flora.xml").unwrap();

    let ids: Vec<_> = doc.genomes.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "X", "Y", "Z"]);
    assert_eq!(
        doc.genomes[1],
        GenomeRecord::new("B", 2).with_link("A", 1).with_link("C", 4)
    );
    assert!(doc.genomes[2].links.is_empty());
    assert_eq!(doc.genomes[4].evolution_factor, -7);

    assert_eq!(doc.evolution_pairs.len(), 4);
    assert_eq!(doc.adaptation_pairs.len(), 5);
    assert_eq!(doc.adaptation_pairs[4], QueryPair::new("Q", "A"));
}

#[test]
fn test_xml_and_json_fixtures_agree() {
    let xml = DocumentConnector::load("tests/data/flora.xml").unwrap();
    let json = DocumentConnector::load("tests/data/flora.json").unwrap();
    assert_eq!(xml, json);
}

#[test]
fn test_validation_reports_unknown_pair_endpoints() {
    let doc = DocumentConnector::load("tests/data/flora.xml").unwrap();
    let warnings = DataValidator::validate_document(&doc).unwrap();

    assert_eq!(
        warnings,
        vec![
            ValidationWarning::UnknownPairEndpoint {
                kind: PairKind::Evolution,
                index: 3,
                id: "Q".to_string(),
            },
            ValidationWarning::UnknownPairEndpoint {
                kind: PairKind::Adaptation,
                index: 4,
                id: "Q".to_string(),
            },
        ]
    );
    assert_eq!(
        warnings[0].to_string(),
        "evolution pair #3 references unknown genome 'Q'"
    );
}

#[test]
fn test_load_and_validate_rejects_duplicate_ids() {
    let result = DocumentConnector::load_and_validate("tests/data/duplicate_ids.xml");
    assert!(matches!(result, Err(FloraError::MalformedInput(_))));
}

#[test]
fn test_format_detection() {
    assert_eq!(DocumentFormat::from_path("a/b.xml").unwrap(), DocumentFormat::Xml);
    assert_eq!(DocumentFormat::from_path("b.Json").unwrap(), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_path("b.toml").unwrap(), DocumentFormat::Toml);
    assert!(DocumentFormat::from_path("b").is_err());
}
