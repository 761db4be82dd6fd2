//! End-to-end extraction from model archives.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fx_app::{AppError, CancelToken, ExtractorConfig, extract_flowsheet, extract_many};
use fx_archive::{ArchiveError, is_temp_dir_name};
use zip::write::SimpleFileOptions;

fn write_archive(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("flowsheet.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a scoped subscriber and return the warnings it logged.
fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (out, logs)
}

fn temp_dirs_left(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| is_temp_dir_name(&e.file_name()))
        .count()
}

fn wide_object_xml(count: usize) -> String {
    let fields: String = (0..count)
        .map(|i| format!("<PROP_{i:03}>{}</PROP_{i:03}>", i as f64 * 0.5))
        .collect();
    format!(
        r#"<DWSIM_Simulation_Data>
  <SimulationObjects>
    <SimulationObject>
      <Type>DWSIM.Thermodynamics.Streams.MaterialStream</Type>
      <ComponentName>MAT-1</ComponentName>
      {fields}
    </SimulationObject>
    <SimulationObject>
      <Type>DWSIM.UnitOperations.UnitOperations.Heater</Type>
      <ComponentName>HT-1</ComponentName>
    </SimulationObject>
  </SimulationObjects>
  <GraphicObjects>
    <GraphicObject>
      <Name>MAT-1</Name>
      <Tag>Feed</Tag>
      <X>100</X>
      <Y>50</Y>
      <OutputConnectors>
        <Connector IsAttached="true" AttachedToObjID="HT-1" />
      </OutputConnectors>
    </GraphicObject>
  </GraphicObjects>
  <Compounds>
    <Compound><Name>Water</Name></Compound>
  </Compounds>
  <PropertyPackages>
    <PropertyPackage><ComponentName>Steam Tables (IAPWS-IF97)</ComponentName></PropertyPackage>
  </PropertyPackages>
</DWSIM_Simulation_Data>"#
    )
}

#[test]
fn property_cap_truncates_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(dir.path(), "wide.dwxmz", &wide_object_xml(150));

    let (model, logs) = capture_warnings(|| {
        extract_flowsheet(&archive, &ExtractorConfig::default(), &CancelToken::new())
    });
    let model = model.unwrap();

    let truncations: Vec<_> = logs
        .lines()
        .filter(|line| line.contains("Property limit reached"))
        .collect();
    assert_eq!(truncations.len(), 1, "{logs}");
    assert!(truncations[0].contains("WARN"));
    assert!(truncations[0].contains("MAT-1"));
    assert!(truncations[0].contains("limit=100"));

    let feed = &model.nodes[0];
    assert_eq!(feed.name, "Feed");
    assert_eq!(feed.properties.len(), 100);
    let keys: Vec<_> = feed
        .properties
        .iter()
        .map(|p| p.source_ref.native_key.as_str())
        .collect();
    let expected: Vec<String> = (0..100).map(|i| format!("PROP_{i:03}")).collect();
    assert_eq!(keys, expected);

    assert_eq!(model.edges.len(), 1);
    assert_eq!(model.thermodynamics.components, ["Water"]);
    assert_eq!(model.digest.len(), 64);
    assert_eq!(temp_dirs_left(dir.path()), 0);
}

#[test]
fn configured_cap_and_aliases_apply() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(dir.path(), "wide.dwxmz", &wide_object_xml(20));
    let config = ExtractorConfig::from_yaml(
        "max_properties_per_node: 5\ninclude_graphics: false\naliases:\n  - { key: PROP_001, label: Pressure }\n",
    )
    .unwrap();

    let model = extract_flowsheet(&archive, &config, &CancelToken::new()).unwrap();
    let feed = &model.nodes[0];
    assert_eq!(feed.properties.len(), 5);
    assert_eq!(feed.properties[1].name, "Pressure");
    assert_eq!(feed.properties[1].source_ref.native_key, "PROP_001");
    assert!(feed.graphics.is_none());
}

#[test]
fn cancellation_releases_temp_directory() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(dir.path(), "model.dwxmz", &wide_object_xml(3));
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = extract_flowsheet(&archive, &ExtractorConfig::default(), &cancel).unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
    assert_eq!(temp_dirs_left(dir.path()), 0);
}

#[test]
fn parse_failure_releases_temp_directory() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(dir.path(), "broken.dwxmz", "<DWSIM_Simulation_Data><Oops>");

    let err =
        extract_flowsheet(&archive, &ExtractorConfig::default(), &CancelToken::new()).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert_eq!(temp_dirs_left(dir.path()), 0);
}

#[test]
fn missing_archive_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract_flowsheet(
        &dir.path().join("nope.dwxmz"),
        &ExtractorConfig::default(),
        &CancelToken::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Archive(ArchiveError::ArchiveNotFound { .. })
    ));
}

#[test]
fn extract_many_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_archive(dir.path(), "a.dwxmz", &wide_object_xml(2));
    let missing = dir.path().join("b.dwxmz");
    let other = write_archive(dir.path(), "c.dwxmz", &wide_object_xml(4));

    let results = extract_many(
        &[good.clone(), missing, other.clone()],
        &ExtractorConfig::default(),
        &CancelToken::new(),
    );
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().source, good);
    assert!(results[1].is_err());
    let third = results[2].as_ref().unwrap();
    assert_eq!(third.source, other);
    assert_eq!(third.nodes[0].properties.len(), 4);
    // Different content, different digest.
    assert_ne!(results[0].as_ref().unwrap().digest, third.digest);
}

#[test]
fn model_serializes_to_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(dir.path(), "model.dwxmz", &wide_object_xml(1));
    let model =
        extract_flowsheet(&archive, &ExtractorConfig::default(), &CancelToken::new()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&model.to_json(false).unwrap()).unwrap();
    assert!(json.get("extractedAt").is_some());
    assert_eq!(json["edges"][0]["connectionKind"], "Material");
    assert_eq!(json["nodes"][0]["type"], "DWSIM.Thermodynamics.Streams.MaterialStream");
    assert_eq!(
        json["thermodynamics"]["propertyPackages"][0],
        "Steam Tables (IAPWS-IF97)"
    );
}
