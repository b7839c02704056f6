//! Fluent builder for constructing a [`Pipeline`].

use tn_core::{EdgeRecord, LocationId};

use crate::{Pipeline, PipelineConfig, PipelineResult};

/// Fluent builder for [`Pipeline`].
///
/// # Required inputs
///
/// - the raw edge list (e.g. from [`tn_graph::load_edges_csv`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                       |
/// |-------------------|-------------------------------|
/// | `.config(c)`      | `PipelineConfig::default()`   |
/// | `.reference(id)`  | no proximity stage            |
///
/// `.reference` overrides the reference of a config set earlier or later.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new(edges)
///     .config(config)
///     .reference(1001400)
///     .build()?;
/// ```
pub struct PipelineBuilder {
    edges:     Vec<EdgeRecord>,
    config:    Option<PipelineConfig>,
    reference: Option<LocationId>,
}

impl PipelineBuilder {
    pub fn new(edges: Vec<EdgeRecord>) -> Self {
        Self {
            edges,
            config:    None,
            reference: None,
        }
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Enable the proximity stage around `reference`.
    pub fn reference(mut self, reference: impl Into<LocationId>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Resolve defaults, validate the configuration and return a
    /// ready-to-run [`Pipeline`].
    ///
    /// Edge validation happens when the pipeline runs (stage ①), so a bad
    /// edge list is reported by [`Pipeline::run`], not here.
    pub fn build(self) -> PipelineResult<Pipeline> {
        let mut config = self.config.unwrap_or_default();
        if let Some(r) = self.reference {
            config.reference = Some(r);
        }
        config.validate()?;

        Ok(Pipeline::new(config, self.edges))
    }
}
