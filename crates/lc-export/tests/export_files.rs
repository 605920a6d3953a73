//! End-to-end tests for the exporter against a temporary directory.

use std::fs;
use std::path::Path;

use lc_config::{LcConfig, QuestionLayout};
use lc_core::entities::{Blurbs, Domain, Graph, LifeStage, Question, QuestionBank, QuestionEntry};
use lc_core::{Catalog, Collection};
use lc_export::{ContentExporter, ExportError, FileStatus};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn config_for(dir: &Path) -> LcConfig {
    let mut config = LcConfig::default();
    config.output.dir = dir.to_path_buf();
    config
}

fn export_canonical(dir: &Path) -> lc_export::ExportSummary {
    let catalog = lc_content::canonical().expect("canonical content");
    ContentExporter::new(&config_for(dir))
        .run(&catalog)
        .expect("export succeeds")
}

fn read_all(dir: &Path) -> Vec<Vec<u8>> {
    Collection::ALL
        .iter()
        .map(|c| fs::read(dir.join(format!("{}.json", c.file_stem()))).unwrap())
        .collect()
}

#[test]
fn writes_exactly_the_five_files() {
    let tmp = TempDir::new().unwrap();
    let summary = export_canonical(tmp.path());

    assert_eq!(summary.files.len(), 5);
    let mut names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "blurbs.json",
            "domains.json",
            "graph.json",
            "lifeStages.json",
            "questions.json"
        ]
    );
}

#[test]
fn creates_missing_output_directory() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("src").join("data");
    assert!(!out.exists());

    export_canonical(&out);

    assert!(out.is_dir());
    assert!(out.join("lifeStages.json").is_file());
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    export_canonical(tmp.path());
    let first = read_all(tmp.path());
    export_canonical(tmp.path());
    let second = read_all(tmp.path());
    assert_eq!(first, second);
}

#[test]
fn files_round_trip_to_the_catalog() {
    let tmp = TempDir::new().unwrap();
    export_canonical(tmp.path());
    let catalog = lc_content::canonical().unwrap();

    let read = |stem: &str| fs::read_to_string(tmp.path().join(format!("{stem}.json"))).unwrap();

    let stages: Vec<LifeStage> = serde_json::from_str(&read("lifeStages")).unwrap();
    let blurbs: Blurbs = serde_json::from_str(&read("blurbs")).unwrap();
    let graph: Graph = serde_json::from_str(&read("graph")).unwrap();
    let questions: QuestionBank = serde_json::from_str(&read("questions")).unwrap();
    let domains: Vec<Domain> = serde_json::from_str(&read("domains")).unwrap();

    assert_eq!(stages, catalog.life_stages());
    assert_eq!(&blurbs, catalog.blurbs());
    assert_eq!(&graph, catalog.graph());
    assert_eq!(&questions, catalog.questions());
    assert_eq!(domains, catalog.domains());
    assert_eq!(
        questions.ids().collect::<Vec<_>>(),
        catalog.questions().ids().collect::<Vec<_>>()
    );
}

#[test]
fn output_is_pretty_and_keeps_unicode() {
    let tmp = TempDir::new().unwrap();
    export_canonical(tmp.path());
    let text = fs::read_to_string(tmp.path().join("lifeStages.json")).unwrap();

    assert!(text.starts_with("[\n  {\n    \"id\": \"early\",\n    \"title\": \"Early Childhood\""));
    assert!(text.contains("\"icon\": \"👶\""));
    assert!(!text.contains("\\u"));
}

fn single_question_catalog() -> Catalog {
    let questions = QuestionBank::try_from_entries(
        Collection::Questions,
        [("q1", Question::new("2+2?", &["3", "4"], "4"))],
    )
    .unwrap();
    Catalog::new(vec![], Blurbs::new(), Graph::default(), questions, vec![]).unwrap()
}

#[test]
fn question_scenario_is_keyed_by_id() {
    let tmp = TempDir::new().unwrap();
    ContentExporter::new(&config_for(tmp.path()))
        .run(&single_question_catalog())
        .unwrap();

    let text = fs::read_to_string(tmp.path().join("questions.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["q1"]["answer"], "4");
    assert_eq!(value["q1"]["choices"], serde_json::json!(["3", "4"]));
}

#[test]
fn list_layout_writes_an_array_with_ids() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_for(tmp.path());
    config.output.question_layout = QuestionLayout::List;
    ContentExporter::new(&config)
        .run(&single_question_catalog())
        .unwrap();

    let text = fs::read_to_string(tmp.path().join("questions.json")).unwrap();
    let entries: Vec<QuestionEntry> = serde_json::from_str(&text).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "q1");
    assert_eq!(entries[0].question.answer, "4");
}

#[test]
fn integrity_error_aborts_before_touching_disk() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("data");
    let questions = QuestionBank::try_from_entries(
        Collection::Questions,
        [("q1", Question::new("2+2?", &["3", "5"], "4"))],
    )
    .unwrap();
    let catalog = Catalog::new(vec![], Blurbs::new(), Graph::default(), questions, vec![]).unwrap();

    let result = ContentExporter::new(&config_for(&out)).run(&catalog);

    assert!(matches!(result, Err(ExportError::Integrity(_))));
    assert!(!out.exists());
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn strict_mode_blocks_dangling_domain_question(#[case] strict: bool, #[case] succeeds: bool) {
    let tmp = TempDir::new().unwrap();
    let mut config = config_for(tmp.path());
    config.validation.strict = strict;
    let domains = vec![Domain {
        id: "family".into(),
        label: "Family".into(),
        color: "#38a169".into(),
        icon: "👪".into(),
        question_ids: vec!["q404".into()],
    }];
    let catalog = Catalog::new(
        vec![],
        Blurbs::new(),
        Graph::default(),
        QuestionBank::new(),
        domains,
    )
    .unwrap();

    let result = ContentExporter::new(&config).run(&catalog);
    assert_eq!(result.is_ok(), succeeds);
}

#[test]
fn check_tracks_missing_fresh_and_stale_files() {
    let tmp = TempDir::new().unwrap();
    let catalog = lc_content::canonical().unwrap();
    let exporter = ContentExporter::new(&config_for(tmp.path()));

    let before = exporter.check(&catalog).unwrap();
    assert!(before.files.iter().all(|f| f.status == FileStatus::Missing));

    exporter.run(&catalog).unwrap();
    let fresh = exporter.check(&catalog).unwrap();
    assert!(fresh.is_up_to_date());

    fs::write(tmp.path().join("graph.json"), "{}").unwrap();
    let edited = exporter.check(&catalog).unwrap();
    let outdated: Vec<_> = edited.outdated().collect();
    assert_eq!(outdated.len(), 1);
    assert_eq!(outdated[0].collection, Collection::Graph);
    assert_eq!(outdated[0].status, FileStatus::Stale);
}

#[test]
fn summary_carries_revision_and_sizes() {
    let tmp = TempDir::new().unwrap();
    let catalog = lc_content::canonical().unwrap();
    let summary = ContentExporter::new(&config_for(tmp.path()))
        .with_revision(Some("1.0.0".into()))
        .run(&catalog)
        .unwrap();

    assert_eq!(summary.revision.as_deref(), Some("1.0.0"));
    for file in &summary.files {
        assert_eq!(fs::metadata(&file.path).unwrap().len(), file.bytes);
    }
}
