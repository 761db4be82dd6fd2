//! Model extraction: archive to flowsheet model.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use fx_archive::ExtractedXml;
use fx_graph::{Edge, FlowsheetBuilder, ObjectNode, ThermodynamicContext};
use fx_xml::{
    Document, GraphicIndex, extract_thermodynamics, generate_edges, parse_node, simulation_objects,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::ExtractorConfig;
use crate::error::{AppError, AppResult};

/// Shared cancellation flag, checked between simulation objects.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        if self.is_cancelled() {
            Err(AppError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Flowsheet extracted from one model archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowsheetModel {
    pub source: PathBuf,
    /// SHA-256 of the archive bytes, lowercase hex.
    pub digest: String,
    pub extracted_at: DateTime<Utc>,
    pub nodes: Vec<ObjectNode>,
    pub edges: Vec<Edge>,
    pub thermodynamics: ThermodynamicContext,
}

impl FlowsheetModel {
    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Extract the flowsheet model stored in a model archive.
///
/// The archive's XML is extracted next to it and the temporary directory is
/// released on every exit path, including errors and cancellation. A failure
/// to remove it is logged and does not fail the extraction.
pub fn extract_flowsheet(
    path: &Path,
    config: &ExtractorConfig,
    cancel: &CancelToken,
) -> AppResult<FlowsheetModel> {
    config.validate()?;
    cancel.check()?;

    let guard = ExtractedXml::open(path)?;
    let digest = archive_digest(path)?;
    let xml = guard.read_to_string()?;
    let doc = Document::parse(&xml)?;

    let labels = config.resolver();
    let options = config.node_options(Some(&labels));
    let graphics = GraphicIndex::new(&doc);

    let mut builder = FlowsheetBuilder::new();
    for object in simulation_objects(&doc) {
        cancel.check()?;
        if let Some(node) = parse_node(object, &graphics, &options) {
            builder.add_node(node);
        }
    }
    cancel.check()?;

    let edges = generate_edges(&doc, builder.nodes());
    for edge in edges {
        builder.add_edge(edge);
    }
    builder.set_thermodynamics(extract_thermodynamics(&doc));
    let sheet = builder.build()?;
    release(guard);

    let (nodes, edges, thermodynamics) = sheet.into_parts();
    tracing::info!(
        source = %path.display(),
        nodes = nodes.len(),
        edges = edges.len(),
        components = thermodynamics.components.len(),
        "Extracted flowsheet"
    );

    Ok(FlowsheetModel {
        source: path.to_path_buf(),
        digest,
        extracted_at: Utc::now(),
        nodes,
        edges,
        thermodynamics,
    })
}

/// Remove the extraction directory. Failures are logged, never raised.
fn release(guard: ExtractedXml) -> bool {
    let dir = guard.xml_path().parent().map(Path::to_path_buf);
    match guard.close() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                dir = ?dir,
                error = %e,
                "Failed to remove extraction directory"
            );
            false
        }
    }
}

/// Extract several archives in parallel; results keep the input order.
pub fn extract_many(
    paths: &[PathBuf],
    config: &ExtractorConfig,
    cancel: &CancelToken,
) -> Vec<AppResult<FlowsheetModel>> {
    paths
        .par_iter()
        .map(|path| extract_flowsheet(path, config, cancel))
        .collect()
}

/// SHA-256 of a file, lowercase hex.
pub fn archive_digest(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
