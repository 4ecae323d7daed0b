// ── Scrape orchestration ──
//
// One `collect()` call is one complete, strictly sequential pass over
// the controller: login, controller discovery, then every resource
// family in catalog order. Any failure aborts the pass and discards
// everything gathered so far.

use std::time::Instant;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use smartzone_api::{Session, SmartZoneClient};

use crate::catalog::{
    ACCESS_POINTS, AP_SUMMARIES, CLUSTER_SUMMARY, CONTROLLER, DOMAINS, LICENSES, ResourceFamily,
    SYSTEM_STATS, WLANS, ZONES,
};
use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::flatten::{FlattenContext, flatten};
use crate::sample::{Collection, MetricFamily, MetricType, Sample};

/// Self-metric appended to every successful collection.
pub const SCRAPE_DURATION_METRIC: &str = "smartzone_scrape_duration_seconds";

/// Progress of one collection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Idle,
    Authenticated,
    ControllerFetched,
    SystemStatsFetched,
    ClusterSummaryFetched,
    ZonesFetched,
    WlansFetched,
    ApsFetched,
    ApSummariesFetched,
    DomainsFetched,
    LicensesFetched,
    Done,
}

/// Families fetched after the controller-scoped stages, with the stage
/// each one completes.
static INVENTORY_STAGES: [(&ResourceFamily, Stage); 6] = [
    (&ZONES, Stage::ZonesFetched),
    (&WLANS, Stage::WlansFetched),
    (&ACCESS_POINTS, Stage::ApsFetched),
    (&AP_SUMMARIES, Stage::ApSummariesFetched),
    (&DOMAINS, Stage::DomainsFetched),
    (&LICENSES, Stage::LicensesFetched),
];

/// Scrapes one controller on demand.
///
/// Concurrent calls to [`collect`](Self::collect) are serialized: each
/// caller waits for the pass in flight to finish, then runs its own.
/// Every pass builds a fresh HTTP client and session.
#[derive(Debug)]
pub struct Collector {
    config: ControllerConfig,
    scrape_lock: Mutex<()>,
}

impl Collector {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            scrape_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Run one full collection pass.
    pub async fn collect(&self) -> Result<Collection, CoreError> {
        let _guard = self.scrape_lock.lock().await;
        let started = Instant::now();
        let mut stage = Stage::Idle;

        match self.run(&mut stage).await {
            Ok(mut collection) => {
                let elapsed = started.elapsed().as_secs_f64();
                let mut duration = MetricFamily::new(
                    SCRAPE_DURATION_METRIC,
                    "Time taken to collect all metrics from the controller",
                    MetricType::Gauge,
                    Vec::new(),
                );
                duration.samples.push(Sample {
                    metric: SCRAPE_DURATION_METRIC,
                    labels: Vec::new(),
                    value: elapsed,
                });
                collection.push_family(duration);

                debug!(
                    families = collection.family_count(),
                    samples = collection.sample_count(),
                    elapsed_secs = elapsed,
                    "scrape complete"
                );
                Ok(collection)
            }
            Err(e) => {
                warn!(
                    stage = %stage,
                    kind = e.kind(),
                    error = %e,
                    "scrape failed"
                );
                Err(e)
            }
        }
    }

    async fn run(&self, stage: &mut Stage) -> Result<Collection, CoreError> {
        let client = SmartZoneClient::new(
            self.config.target(),
            &self.config.api_version,
            &self.config.transport(),
        )
        .map_err(CoreError::from_session)?;
        let session = client
            .authenticate(&self.config.credentials)
            .await
            .map_err(CoreError::from_session)?;
        advance(stage, Stage::Authenticated);

        let mut pass = Pass {
            client: &client,
            session: &session,
            collection: Collection::new(),
        };

        // ── Controller-scoped stages ──
        let controllers = pass.records(&CONTROLLER, None).await?;
        let controller_ids = controllers
            .iter()
            .map(controller_id)
            .collect::<Result<Vec<_>, _>>()?;
        let Some(last_id) = controller_ids.last() else {
            return Err(CoreError::SchemaMismatch {
                family: CONTROLLER.name,
                detail: "controller list is empty".into(),
            });
        };
        pass.ingest(&CONTROLLER, &controllers, &FlattenContext::default())?;
        advance(stage, Stage::ControllerFetched);

        for id in &controller_ids {
            pass.collect(&SYSTEM_STATS, FlattenContext::with_controller(id))
                .await?;
        }
        advance(stage, Stage::SystemStatsFetched);

        pass.collect(&CLUSTER_SUMMARY, FlattenContext::with_controller(last_id))
            .await?;
        advance(stage, Stage::ClusterSummaryFetched);

        // ── Inventory stages ──
        for (family, done) in INVENTORY_STAGES {
            pass.collect(family, FlattenContext::default()).await?;
            advance(stage, done);
        }

        advance(stage, Stage::Done);
        Ok(pass.collection)
    }
}

/// State threaded through the stages of one pass.
struct Pass<'a> {
    client: &'a SmartZoneClient,
    session: &'a Session,
    collection: Collection,
}

impl Pass<'_> {
    /// Fetch `family` and pull its records out of the response.
    async fn records(
        &self,
        family: &ResourceFamily,
        controller_id: Option<&str>,
    ) -> Result<Vec<Value>, CoreError> {
        let resource = family.resource(controller_id);
        debug!(family = family.name, path = %resource.path, "fetching");

        let body = self
            .client
            .fetch(self.session, &resource)
            .await
            .map_err(|e| CoreError::fetch(resource.path.clone(), e))?;
        family.shape.records(family.name, body)
    }

    /// Declare `family` and flatten every record into the collection.
    fn ingest(
        &mut self,
        family: &ResourceFamily,
        records: &[Value],
        ctx: &FlattenContext<'_>,
    ) -> Result<(), CoreError> {
        self.collection.declare(family);
        for record in records {
            self.collection.extend(flatten(record, family, ctx)?);
        }
        Ok(())
    }

    async fn collect(
        &mut self,
        family: &ResourceFamily,
        ctx: FlattenContext<'_>,
    ) -> Result<(), CoreError> {
        let records = self.records(family, ctx.controller_id).await?;
        self.ingest(family, &records, &ctx)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!(from = %stage, to = %next, "scrape stage");
    *stage = next;
}

fn controller_id(record: &Value) -> Result<String, CoreError> {
    match record.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(CoreError::SchemaMismatch {
            family: CONTROLLER.name,
            detail: "controller record has no `id`".into(),
        }),
    }
}
