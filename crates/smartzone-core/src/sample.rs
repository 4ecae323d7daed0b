//! Samples and metric families produced by one scrape.
//!
//! A [`Collection`] keeps families in declaration order and merges
//! samples that share a metric name (the per-port system statistics
//! are declared once per port section but export as one family).

use indexmap::IndexMap;

use crate::catalog::{FieldSpec, ResourceFamily};

/// Prometheus metric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MetricType {
    Gauge,
    Counter,
}

/// One exported time-series value.
///
/// `labels` holds values only; their names live on the owning
/// [`MetricFamily`] and are in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub metric: &'static str,
    pub labels: Vec<String>,
    pub value: f64,
}

/// All samples for one metric name, plus the metadata needed to expose them.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: &'static str,
    pub help: &'static str,
    pub metric_type: MetricType,
    pub label_names: Vec<&'static str>,
    pub samples: Vec<Sample>,
}

impl MetricFamily {
    pub fn new(
        name: &'static str,
        help: &'static str,
        metric_type: MetricType,
        label_names: Vec<&'static str>,
    ) -> Self {
        Self {
            name,
            help,
            metric_type,
            label_names,
            samples: Vec::new(),
        }
    }

    fn from_spec(family: &ResourceFamily, spec: &FieldSpec) -> Self {
        Self::new(
            spec.metric,
            spec.help,
            spec.metric_type,
            family.label_names(spec),
        )
    }
}

/// The complete, ordered result of one collection pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    families: IndexMap<&'static str, MetricFamily>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every metric of `family` so it is exposed even with no records.
    ///
    /// Idempotent: already-declared names keep their first declaration.
    pub fn declare(&mut self, family: &ResourceFamily) {
        for spec in family.fields {
            self.families
                .entry(spec.metric)
                .or_insert_with(|| MetricFamily::from_spec(family, spec));
        }
    }

    /// Append samples to their declared families.
    pub fn extend(&mut self, samples: impl IntoIterator<Item = Sample>) {
        for sample in samples {
            match self.families.get_mut(sample.metric) {
                Some(family) => {
                    debug_assert_eq!(
                        family.label_names.len(),
                        sample.labels.len(),
                        "label arity mismatch for {}",
                        sample.metric
                    );
                    family.samples.push(sample);
                }
                None => {
                    tracing::warn!(metric = sample.metric, "sample for undeclared metric dropped");
                }
            }
        }
    }

    /// Add a fully-built family (e.g. exporter self-metrics).
    pub fn push_family(&mut self, family: MetricFamily) {
        self.families.insert(family.name, family);
    }

    pub fn get(&self, name: &str) -> Option<&MetricFamily> {
        self.families.get(name)
    }

    pub fn families(&self) -> impl Iterator<Item = &MetricFamily> {
        self.families.values()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn sample_count(&self) -> usize {
        self.families.values().map(|f| f.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn declare_registers_every_field_once() {
        let mut collection = Collection::new();
        collection.declare(&catalog::ZONES);
        collection.declare(&catalog::ZONES);

        assert_eq!(collection.family_count(), catalog::ZONES.fields.len());
        assert!(collection.is_empty());

        let total = collection.get("smartzone_zone_total_aps").unwrap();
        assert_eq!(total.label_names, vec!["zone_name", "zone_id"]);
        assert_eq!(total.metric_type, MetricType::Gauge);
    }

    #[test]
    fn port_sections_merge_into_one_family() {
        let mut collection = Collection::new();
        collection.declare(&catalog::SYSTEM_STATS);

        let rx = collection.get("smartzone_system_port_rxBps").unwrap();
        assert_eq!(rx.label_names, vec!["id", "port"]);
        // cpu, disk(2), memory, plus 8 per-port metrics shared by 3 sections
        assert_eq!(collection.family_count(), 4 + 8);
    }

    #[test]
    fn undeclared_samples_are_dropped() {
        let mut collection = Collection::new();
        collection.extend([Sample {
            metric: "smartzone_unknown",
            labels: vec![],
            value: 1.0,
        }]);
        assert!(collection.is_empty());
        assert_eq!(collection.family_count(), 0);
    }

    #[test]
    fn metric_type_names() {
        assert_eq!(MetricType::Gauge.to_string(), "gauge");
        let counter: &'static str = MetricType::Counter.into();
        assert_eq!(counter, "counter");
    }
}
