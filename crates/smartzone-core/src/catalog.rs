//! Static metric catalog.
//!
//! One [`ResourceFamily`] per upstream resource: where it lives, how to
//! query it, how records are identified, and the [`FieldSpec`] for every
//! exported field. The flattener dispatches on [`FieldKind`]; nothing
//! about a field's encoding is decided anywhere else.
//!
//! Metric names keep the controller's camelCase field names where the
//! exporter has always published them that way, so existing dashboards
//! keep working.

use serde_json::Value;
use smartzone_api::{QueryMode, Resource};

use crate::error::CoreError;
use crate::sample::MetricType;

// ── Field schema ─────────────────────────────────────────────────────

/// How a field's value becomes a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Numeric value passed through; no extra label.
    Numeric,
    /// `"true"`/`"false"` become 1/0; the raw text is also carried as `label`.
    BooleanAsNumeric { label: &'static str },
    /// Text carried as `label`; the sample value is the constant 1.
    StringAsLabel { label: &'static str },
    /// Numeric value read from `record[parent][field]`.
    NestedNumeric { parent: &'static str },
    /// Numeric value read from `record[port][field]`, with the section
    /// name carried as the `port` label.
    PortNumeric { port: &'static str },
}

impl FieldKind {
    /// Name of the label this kind appends after the identity labels.
    pub fn extra_label(&self) -> Option<&'static str> {
        match self {
            Self::BooleanAsNumeric { label } | Self::StringAsLabel { label } => Some(label),
            Self::PortNumeric { .. } => Some("port"),
            Self::Numeric | Self::NestedNumeric { .. } => None,
        }
    }
}

/// One exported field of a resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the upstream JSON record.
    pub field: &'static str,
    pub metric: &'static str,
    pub help: &'static str,
    pub metric_type: MetricType,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn gauge(
        field: &'static str,
        metric: &'static str,
        help: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            field,
            metric,
            help,
            metric_type: MetricType::Gauge,
            kind,
        }
    }

    pub const fn counter(
        field: &'static str,
        metric: &'static str,
        help: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            field,
            metric,
            help,
            metric_type: MetricType::Counter,
            kind,
        }
    }
}

const fn num(field: &'static str, metric: &'static str, help: &'static str) -> FieldSpec {
    FieldSpec::gauge(field, metric, help, FieldKind::Numeric)
}

const fn text(field: &'static str, metric: &'static str, help: &'static str) -> FieldSpec {
    FieldSpec::gauge(field, metric, help, FieldKind::StringAsLabel { label: field })
}

const fn flag(field: &'static str, metric: &'static str, help: &'static str) -> FieldSpec {
    FieldSpec::gauge(field, metric, help, FieldKind::BooleanAsNumeric { label: field })
}

const fn nested(
    parent: &'static str,
    field: &'static str,
    metric: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec::gauge(field, metric, help, FieldKind::NestedNumeric { parent })
}

const fn port(
    port: &'static str,
    field: &'static str,
    metric: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec::gauge(field, metric, help, FieldKind::PortNumeric { port })
}

// ── Identity ─────────────────────────────────────────────────────────

/// Where an identity label's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// A required field of the record itself.
    Field(&'static str),
    /// The controller id discovered by the controller stage.
    ControllerId,
}

/// A label attached to every sample of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityLabel {
    pub label: &'static str,
    pub source: IdentitySource,
}

const fn field(label: &'static str, field: &'static str) -> IdentityLabel {
    IdentityLabel {
        label,
        source: IdentitySource::Field(field),
    }
}

const fn controller(label: &'static str) -> IdentityLabel {
    IdentityLabel {
        label,
        source: IdentitySource::ControllerId,
    }
}

// ── Response shape ───────────────────────────────────────────────────

/// Where the records sit inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"list": [ … ]}`
    List,
    /// `[ {…}, … ]` -- only the first element is used.
    FirstElement,
    /// A single top-level object.
    Object,
}

impl ResponseShape {
    /// Pull the records out of a response body.
    pub fn records(self, family: &'static str, body: Value) -> Result<Vec<Value>, CoreError> {
        let mismatch = |detail: &str| CoreError::SchemaMismatch {
            family,
            detail: detail.to_owned(),
        };

        match (self, body) {
            (Self::List, Value::Object(mut map)) => match map.remove("list") {
                Some(Value::Array(list)) => Ok(list),
                Some(Value::Null) | None => Err(mismatch("response has no `list` array")),
                Some(_) => Err(mismatch("`list` is not an array")),
            },
            (Self::List, _) => Err(mismatch("expected an object with a `list` array")),
            (Self::FirstElement, Value::Array(items)) => items
                .into_iter()
                .next()
                .map(|first| vec![first])
                .ok_or_else(|| mismatch("response array is empty")),
            (Self::FirstElement, _) => Err(mismatch("expected a top-level array")),
            (Self::Object, body @ Value::Object(_)) => Ok(vec![body]),
            (Self::Object, _) => Err(mismatch("expected a top-level object")),
        }
    }
}

// ── Resource family ──────────────────────────────────────────────────

/// Placeholder substituted with the controller id in templated paths.
pub const CONTROLLER_ID_PLACEHOLDER: &str = "{id}";

/// One logical category of upstream entity and its full field schema.
#[derive(Debug)]
pub struct ResourceFamily {
    /// Short name used in logs and errors.
    pub name: &'static str,
    /// API-relative path; may contain [`CONTROLLER_ID_PLACEHOLDER`].
    pub path: &'static str,
    pub mode: QueryMode,
    pub shape: ResponseShape,
    pub identity: &'static [IdentityLabel],
    pub fields: &'static [FieldSpec],
}

impl ResourceFamily {
    /// Label names for `spec`: identity labels, then the kind's extra label.
    pub fn label_names(&self, spec: &FieldSpec) -> Vec<&'static str> {
        self.identity
            .iter()
            .map(|id| id.label)
            .chain(spec.kind.extra_label())
            .collect()
    }

    /// The request descriptor, with the controller id substituted if needed.
    pub fn resource(&self, controller_id: Option<&str>) -> Resource {
        let path = match controller_id {
            Some(id) => self.path.replace(CONTROLLER_ID_PLACEHOLDER, id),
            None => self.path.to_owned(),
        };
        Resource {
            path,
            mode: self.mode,
        }
    }
}

// ── Controller ───────────────────────────────────────────────────────

pub static CONTROLLER: ResourceFamily = ResourceFamily {
    name: "controller",
    path: "controller",
    mode: QueryMode::List,
    shape: ResponseShape::List,
    identity: &[field("id", "id")],
    fields: &[
        text("model", "smartzone_controller_model", "SmartZone controller model"),
        text(
            "description",
            "smartzone_controller_description",
            "SmartZone controller description",
        ),
        text(
            "serialNumber",
            "smartzone_controller_serial_number",
            "SmartZone controller serial number",
        ),
        text(
            "clusterRole",
            "smartzone_controller_cluster_role",
            "SmartZone controller cluster role",
        ),
        FieldSpec::counter(
            "uptimeInSec",
            "smartzone_controller_uptime_seconds",
            "Controller uptime in seconds",
            FieldKind::Numeric,
        ),
        text("version", "smartzone_controller_version", "Controller version"),
        text(
            "apVersion",
            "smartzone_controller_ap_firmware_version",
            "Firmware version on controller APs",
        ),
    ],
};

// ── System statistics (per controller) ───────────────────────────────

pub static SYSTEM_STATS: ResourceFamily = ResourceFamily {
    name: "system_stats",
    path: "controller/{id}/statistics",
    mode: QueryMode::List,
    shape: ResponseShape::FirstElement,
    identity: &[controller("id")],
    fields: &[
        nested("cpu", "percent", "smartzone_system_cpu_usage", "SmartZone system CPU usage"),
        nested("disk", "total", "smartzone_system_disk_size", "SmartZone system disk size"),
        nested(
            "disk",
            "free",
            "smartzone_system_disk_free",
            "SmartZone system disk free space",
        ),
        nested(
            "memory",
            "percent",
            "smartzone_system_memory_usage",
            "SmartZone system memory usage",
        ),
        port("control", "rxBps", "smartzone_system_port_rxBps", "SmartZone system port rxBps (Throughput)"),
        port("control", "rxBytes", "smartzone_system_port_rxBytes", "SmartZone system port total rxBytes"),
        port("control", "rxDropped", "smartzone_system_port_rxDropped", "SmartZone system port total rxDropped"),
        port("control", "rxPackets", "smartzone_system_port_rxPackets", "SmartZone system port total rxPackets"),
        port("control", "txBps", "smartzone_system_port_txBps", "SmartZone system port txBps (Throughput)"),
        port("control", "txBytes", "smartzone_system_port_txBytes", "SmartZone system port total txBytes"),
        port("control", "txDropped", "smartzone_system_port_txDropped", "SmartZone system port total txDropped"),
        port("control", "txPackets", "smartzone_system_port_txPackets", "SmartZone system port total txPackets"),
        port("port1", "rxBps", "smartzone_system_port_rxBps", "SmartZone system port rxBps (Throughput)"),
        port("port1", "rxBytes", "smartzone_system_port_rxBytes", "SmartZone system port total rxBytes"),
        port("port1", "rxDropped", "smartzone_system_port_rxDropped", "SmartZone system port total rxDropped"),
        port("port1", "rxPackets", "smartzone_system_port_rxPackets", "SmartZone system port total rxPackets"),
        port("port1", "txBps", "smartzone_system_port_txBps", "SmartZone system port txBps (Throughput)"),
        port("port1", "txBytes", "smartzone_system_port_txBytes", "SmartZone system port total txBytes"),
        port("port1", "txDropped", "smartzone_system_port_txDropped", "SmartZone system port total txDropped"),
        port("port1", "txPackets", "smartzone_system_port_txPackets", "SmartZone system port total txPackets"),
        port("port2", "rxBps", "smartzone_system_port_rxBps", "SmartZone system port rxBps (Throughput)"),
        port("port2", "rxBytes", "smartzone_system_port_rxBytes", "SmartZone system port total rxBytes"),
        port("port2", "rxDropped", "smartzone_system_port_rxDropped", "SmartZone system port total rxDropped"),
        port("port2", "rxPackets", "smartzone_system_port_rxPackets", "SmartZone system port total rxPackets"),
        port("port2", "txBps", "smartzone_system_port_txBps", "SmartZone system port txBps (Throughput)"),
        port("port2", "txBytes", "smartzone_system_port_txBytes", "SmartZone system port total txBytes"),
        port("port2", "txDropped", "smartzone_system_port_txDropped", "SmartZone system port total txDropped"),
        port("port2", "txPackets", "smartzone_system_port_txPackets", "SmartZone system port total txPackets"),
    ],
};

// ── Cluster summary ──────────────────────────────────────────────────

pub static CLUSTER_SUMMARY: ResourceFamily = ResourceFamily {
    name: "cluster_summary",
    path: "system/devicesSummary",
    mode: QueryMode::List,
    shape: ResponseShape::Object,
    identity: &[controller("id")],
    fields: &[
        num(
            "maxApOfCluster",
            "smartzone_cluster_maxAPs",
            "SmartZone Cluster number of maximum possible connected APs",
        ),
        num(
            "totalRemainingApCapacity",
            "smartzone_cluster_totalRemainingApCapacity",
            "SmartZone Cluster number of total remaining possible connected APs",
        ),
    ],
};

// ── Zones ────────────────────────────────────────────────────────────

pub static ZONES: ResourceFamily = ResourceFamily {
    name: "zone",
    path: "system/inventory",
    mode: QueryMode::List,
    shape: ResponseShape::List,
    identity: &[field("zone_name", "zoneName"), field("zone_id", "zoneId")],
    fields: &[
        num("totalAPs", "smartzone_zone_total_aps", "Total number of APs in zone"),
        num(
            "discoveryAPs",
            "smartzone_zone_discovery_aps",
            "Number of zone APs in discovery state",
        ),
        num("connectedAPs", "smartzone_zone_connected_aps", "Number of connected zone APs"),
        num(
            "disconnectedAPs",
            "smartzone_zone_disconnected_aps",
            "Number of disconnected zone APs",
        ),
        num(
            "clients",
            "smartzone_zone_total_connected_clients",
            "Total number of connected clients in zone",
        ),
    ],
};

// ── WLANs ────────────────────────────────────────────────────────────

pub static WLANS: ResourceFamily = ResourceFamily {
    name: "wlan",
    path: "query/wlan",
    mode: QueryMode::Query,
    shape: ResponseShape::List,
    identity: &[field("zoneId", "zoneId"), field("name", "name")],
    fields: &[
        text("ssid", "smartzone_wlan_ssid", "SmartZone SSID"),
        num("clients", "smartzone_wlan_clients", "SmartZone WLAN clients"),
        num("traffic", "smartzone_wlan_traffic", "SmartZone WLAN traffic"),
        num("trafficUplink", "smartzone_wlan_traffic_uplink", "SmartZone WLAN traffic Uplink"),
        num(
            "trafficDownlink",
            "smartzone_wlan_traffic_downlink",
            "SmartZone WLAN traffic Downlink",
        ),
        num("vlan", "smartzone_wlan_vlan", "SmartZone WLAN vlan"),
    ],
};

// ── Access points ────────────────────────────────────────────────────

pub static ACCESS_POINTS: ResourceFamily = ResourceFamily {
    name: "ap",
    path: "query/ap",
    mode: QueryMode::Query,
    shape: ResponseShape::List,
    identity: &[
        field("zone_id", "zoneId"),
        field("ap_name", "deviceName"),
        field("ap_mac", "apMac"),
    ],
    fields: &[
        text("deviceName", "smartzone_ap_deviceName", "SmartZone AP device name"),
        text("description", "smartzone_ap_description", "SmartZone AP description"),
        text("status", "smartzone_ap_status", "SmartZone AP status"),
        num("alerts", "smartzone_ap_alerts", "SmartZone AP alert count"),
        text("ip", "smartzone_ap_ip", "SmartZone AP IPv4 address"),
        text("ipv6Address", "smartzone_ap_ipv6Address", "SmartZone AP IPv6 address"),
        num("txRx", "smartzone_ap_txRx", "SmartZone AP total traffic"),
        num("noise24G", "smartzone_ap_noise24G", "SmartZone AP 2.4GHz noise"),
        num("noise5G", "smartzone_ap_noise5G", "SmartZone AP 5GHz noise"),
        num("noise6G", "smartzone_ap_noise6G", "SmartZone AP 6GHz noise"),
        num("airtime24G", "smartzone_ap_airtime24G", "SmartZone AP 2.4GHz airtime utilization"),
        num("airtime5G", "smartzone_ap_airtime5G", "SmartZone AP 5GHz airtime utilization"),
        num("airtime6G", "smartzone_ap_airtime6G", "SmartZone AP 6GHz airtime utilization"),
        num("latency24G", "smartzone_ap_latency24G", "SmartZone AP 2.4GHz latency"),
        num("latency50G", "smartzone_ap_latency50G", "SmartZone AP 5GHz latency"),
        num("latency6G", "smartzone_ap_latency6G", "SmartZone AP 6GHz latency"),
        num("capacity", "smartzone_ap_capacity", "SmartZone AP capacity"),
        num("capacity24G", "smartzone_ap_capacity24G", "SmartZone AP 2.4GHz capacity"),
        num("capacity50G", "smartzone_ap_capacity50G", "SmartZone AP 5GHz capacity"),
        num("capacity6G", "smartzone_ap_capacity6G", "SmartZone AP 6GHz capacity"),
        num("connectionFailure", "smartzone_ap_connectionFailure", "SmartZone AP connection failures"),
        text("model", "smartzone_ap_model", "SmartZone AP model"),
        text("apMac", "smartzone_ap_apMac", "SmartZone AP MAC address"),
        text("channel24G", "smartzone_ap_channel24G", "SmartZone AP 2.4GHz channel"),
        text("channel5G", "smartzone_ap_channel5G", "SmartZone AP 5GHz channel"),
        text("channel6G", "smartzone_ap_channel6G", "SmartZone AP 6GHz channel"),
        num("channel24gValue", "smartzone_ap_channel24gValue", "SmartZone AP 2.4GHz channel number"),
        num("channel50gValue", "smartzone_ap_channel50gValue", "SmartZone AP 5GHz channel number"),
        num("channel6gValue", "smartzone_ap_channel6gValue", "SmartZone AP 6GHz channel number"),
        text("meshRole", "smartzone_ap_meshRole", "SmartZone AP mesh role"),
        text("meshMode", "smartzone_ap_meshMode", "SmartZone AP mesh mode"),
        text("zoneName", "smartzone_ap_zoneName", "SmartZone AP zone name"),
        text(
            "zoneAffinityProfileName",
            "smartzone_ap_zoneAffinityProfileName",
            "SmartZone AP zone affinity profile",
        ),
        text("apGroupName", "smartzone_ap_apGroupName", "SmartZone AP group name"),
        text("extIp", "smartzone_ap_extIp", "SmartZone AP external IP"),
        text("extPort", "smartzone_ap_extPort", "SmartZone AP external port"),
        text("firmwareVersion", "smartzone_ap_firmwareVersion", "SmartZone AP firmware version"),
        text("serial", "smartzone_ap_serial", "SmartZone AP serial number"),
        num("retry24G", "smartzone_ap_retry24G", "SmartZone AP 2.4GHz retries"),
        num("retry5G", "smartzone_ap_retry5G", "SmartZone AP 5GHz retries"),
        num("retry6G", "smartzone_ap_retry6G", "SmartZone AP 6GHz retries"),
        text(
            "configurationStatus",
            "smartzone_ap_configurationStatus",
            "SmartZone AP configuration status",
        ),
        num("lastSeen", "smartzone_ap_lastSeen", "SmartZone AP last seen timestamp"),
        num("numClients", "smartzone_ap_numClients", "SmartZone AP client count"),
        num("numClients24G", "smartzone_ap_numClients24G", "SmartZone AP 2.4GHz client count"),
        num("numClients5G", "smartzone_ap_numClients5G", "SmartZone AP 5GHz client count"),
        num("numClients6G", "smartzone_ap_numClients6G", "SmartZone AP 6GHz client count"),
        num("tx", "smartzone_ap_tx", "SmartZone AP transmitted bytes"),
        num("tx24G", "smartzone_ap_tx24G", "SmartZone AP 2.4GHz transmitted bytes"),
        num("tx50G", "smartzone_ap_tx50G", "SmartZone AP 5GHz transmitted bytes"),
        num("tx6G", "smartzone_ap_tx6G", "SmartZone AP 6GHz transmitted bytes"),
        num("rx", "smartzone_ap_rx", "SmartZone AP received bytes"),
        num("rx24G", "smartzone_ap_rx24G", "SmartZone AP 2.4GHz received bytes"),
        num("rx50G", "smartzone_ap_rx50G", "SmartZone AP 5GHz received bytes"),
        num("rx6G", "smartzone_ap_rx6G", "SmartZone AP 6GHz received bytes"),
        num("txRx24G", "smartzone_ap_txRx24G", "SmartZone AP 2.4GHz total traffic"),
        num("txRx50G", "smartzone_ap_txRx50G", "SmartZone AP 5GHz total traffic"),
        num("txRx6G", "smartzone_ap_txRx6G", "SmartZone AP 6GHz total traffic"),
        text("location", "smartzone_ap_location", "SmartZone AP location"),
        text("wlanGroup24Id", "smartzone_ap_wlanGroup24Id", "SmartZone AP 2.4GHz WLAN group id"),
        text("wlanGroup50Id", "smartzone_ap_wlanGroup50Id", "SmartZone AP 5GHz WLAN group id"),
        text("wlanGroup6gId", "smartzone_ap_wlanGroup6gId", "SmartZone AP 6GHz WLAN group id"),
        text(
            "wlanGroup24Name",
            "smartzone_ap_wlanGroup24Name",
            "SmartZone AP 2.4GHz WLAN group name",
        ),
        text(
            "wlanGroup50Name",
            "smartzone_ap_wlanGroup50Name",
            "SmartZone AP 5GHz WLAN group name",
        ),
        text(
            "wlanGroup6gName",
            "smartzone_ap_wlanGroup6gName",
            "SmartZone AP 6GHz WLAN group name",
        ),
        flag(
            "enabledBonjourGateway",
            "smartzone_ap_enabledBonjourGateway",
            "SmartZone AP Bonjour gateway enabled",
        ),
        text("controlBladeName", "smartzone_ap_controlBladeName", "SmartZone AP control blade name"),
        text("lbsStatus", "smartzone_ap_lbsStatus", "SmartZone AP location based service status"),
        text(
            "administrativeState",
            "smartzone_ap_administrativeState",
            "SmartZone AP administrative state",
        ),
        text(
            "registrationState",
            "smartzone_ap_registrationState",
            "SmartZone AP registration state",
        ),
        text("provisionMethod", "smartzone_ap_provisionMethod", "SmartZone AP provision method"),
        text("provisionStage", "smartzone_ap_provisionStage", "SmartZone AP provision stage"),
        num(
            "registrationTime",
            "smartzone_ap_registrationTime",
            "SmartZone AP registration timestamp",
        ),
        num("managementVlan", "smartzone_ap_managementVlan", "SmartZone AP management VLAN"),
        flag("configOverride", "smartzone_ap_configOverride", "SmartZone AP configuration override"),
        text("apGroupId", "smartzone_ap_apGroupId", "SmartZone AP group id"),
        text("deviceGps", "smartzone_ap_deviceGps", "SmartZone AP GPS coordinates"),
        text("connectionStatus", "smartzone_ap_connectionStatus", "SmartZone AP connection status"),
        text("zoneId", "smartzone_ap_zoneId", "SmartZone AP zone id"),
        text(
            "zoneFirmwareVersion",
            "smartzone_ap_zoneFirmwareVersion",
            "SmartZone AP zone firmware version",
        ),
        text("domainId", "smartzone_ap_domainId", "SmartZone AP domain id"),
        text("domainName", "smartzone_ap_domainName", "SmartZone AP domain name"),
        text("partnerDomainId", "smartzone_ap_partnerDomainId", "SmartZone AP partner domain id"),
        text("controlBladeId", "smartzone_ap_controlBladeId", "SmartZone AP control blade id"),
        flag("isCriticalAp", "smartzone_ap_isCriticalAp", "SmartZone AP is critical"),
        num("crashDump", "smartzone_ap_crashDump", "SmartZone AP crash dump count"),
        flag(
            "isOverallHealthStatusFlagged",
            "smartzone_ap_isOverallHealthStatusFlagged",
            "SmartZone AP overall health flagged",
        ),
        flag(
            "isLatency24GFlagged",
            "smartzone_ap_isLatency24GFlagged",
            "SmartZone AP 2.4GHz latency flagged",
        ),
        flag(
            "isLatency50GFlagged",
            "smartzone_ap_isLatency50GFlagged",
            "SmartZone AP 5GHz latency flagged",
        ),
        flag(
            "isLatency6GFlagged",
            "smartzone_ap_isLatency6GFlagged",
            "SmartZone AP 6GHz latency flagged",
        ),
        flag(
            "isCapacity24GFlagged",
            "smartzone_ap_isCapacity24GFlagged",
            "SmartZone AP 2.4GHz capacity flagged",
        ),
        flag(
            "isCapacity50GFlagged",
            "smartzone_ap_isCapacity50GFlagged",
            "SmartZone AP 5GHz capacity flagged",
        ),
        flag(
            "isCapacity6GFlagged",
            "smartzone_ap_isCapacity6GFlagged",
            "SmartZone AP 6GHz capacity flagged",
        ),
        flag(
            "isConnectionFailure24GFlagged",
            "smartzone_ap_isConnectionFailure24GFlagged",
            "SmartZone AP 2.4GHz connection failure flagged",
        ),
        flag(
            "isConnectionFailure50GFlagged",
            "smartzone_ap_isConnectionFailure50GFlagged",
            "SmartZone AP 5GHz connection failure flagged",
        ),
        flag(
            "isConnectionFailure6GFlagged",
            "smartzone_ap_isConnectionFailure6GFlagged",
            "SmartZone AP 6GHz connection failure flagged",
        ),
        flag(
            "isConnectionTotalCountFlagged",
            "smartzone_ap_isConnectionTotalCountFlagged",
            "SmartZone AP connection total count flagged",
        ),
        flag(
            "isConnectionFailureFlagged",
            "smartzone_ap_isConnectionFailureFlagged",
            "SmartZone AP connection failure flagged",
        ),
        flag(
            "isAirtimeUtilization24GFlagged",
            "smartzone_ap_isAirtimeUtilization24GFlagged",
            "SmartZone AP 2.4GHz airtime utilization flagged",
        ),
        flag(
            "isAirtimeUtilization50GFlagged",
            "smartzone_ap_isAirtimeUtilization50GFlagged",
            "SmartZone AP 5GHz airtime utilization flagged",
        ),
        flag(
            "isAirtimeUtilization6GFlagged",
            "smartzone_ap_isAirtimeUtilization6GFlagged",
            "SmartZone AP 6GHz airtime utilization flagged",
        ),
        num("uptime", "smartzone_ap_uptime", "SmartZone AP uptime"),
        num("eirp24G", "smartzone_ap_eirp24G", "SmartZone AP 2.4GHz EIRP"),
        num("eirp50G", "smartzone_ap_eirp50G", "SmartZone AP 5GHz EIRP"),
        num("eirp6G", "smartzone_ap_eirp6G", "SmartZone AP 6GHz EIRP"),
        text("ipType", "smartzone_ap_ipType", "SmartZone AP IPv4 address type"),
        text("ipv6Type", "smartzone_ap_ipv6Type", "SmartZone AP IPv6 address type"),
        text(
            "packetCaptureState",
            "smartzone_ap_packetCaptureState",
            "SmartZone AP packet capture state",
        ),
        num(
            "medianTxRadioMCSRate24G",
            "smartzone_ap_medianTxRadioMCSRate24G",
            "SmartZone AP 2.4GHz median TX MCS rate",
        ),
        num(
            "medianTxRadioMCSRate50G",
            "smartzone_ap_medianTxRadioMCSRate50G",
            "SmartZone AP 5GHz median TX MCS rate",
        ),
        num(
            "medianTxRadioMCSRate6G",
            "smartzone_ap_medianTxRadioMCSRate6G",
            "SmartZone AP 6GHz median TX MCS rate",
        ),
        num(
            "medianRxRadioMCSRate24G",
            "smartzone_ap_medianRxRadioMCSRate24G",
            "SmartZone AP 2.4GHz median RX MCS rate",
        ),
        num(
            "medianRxRadioMCSRate50G",
            "smartzone_ap_medianRxRadioMCSRate50G",
            "SmartZone AP 5GHz median RX MCS rate",
        ),
        num(
            "medianRxRadioMCSRate6G",
            "smartzone_ap_medianRxRadioMCSRate6G",
            "SmartZone AP 6GHz median RX MCS rate",
        ),
        flag(
            "monitoringEnabled",
            "smartzone_ap_monitoringEnabled",
            "SmartZone AP monitoring enabled",
        ),
        num("txPowerOffset24G", "smartzone_ap_txPowerOffset24G", "SmartZone AP 2.4GHz TX power offset"),
        num("txPowerOffset5G", "smartzone_ap_txPowerOffset5G", "SmartZone AP 5GHz TX power offset"),
        num("txPowerOffset6G", "smartzone_ap_txPowerOffset6G", "SmartZone AP 6GHz TX power offset"),
        num("rxDesense24G", "smartzone_ap_rxDesense24G", "SmartZone AP 2.4GHz RX desense"),
        num("rxDesense5G", "smartzone_ap_rxDesense5G", "SmartZone AP 5GHz RX desense"),
        num("rxDesense6G", "smartzone_ap_rxDesense6G", "SmartZone AP 6GHz RX desense"),
        text("poePortStatus", "smartzone_ap_poePortStatus", "SmartZone AP PoE port status"),
        num("cumulativeTx24G", "smartzone_ap_cumulativeTx24G", "SmartZone AP 2.4GHz cumulative TX"),
        num("cumulativeTx5G", "smartzone_ap_cumulativeTx5G", "SmartZone AP 5GHz cumulative TX"),
        num("cumulativeTx6G", "smartzone_ap_cumulativeTx6G", "SmartZone AP 6GHz cumulative TX"),
        num("cumulativeRx24G", "smartzone_ap_cumulativeRx24G", "SmartZone AP 2.4GHz cumulative RX"),
        num("cumulativeRx5G", "smartzone_ap_cumulativeRx5G", "SmartZone AP 5GHz cumulative RX"),
        num("cumulativeRx6G", "smartzone_ap_cumulativeRx6G", "SmartZone AP 6GHz cumulative RX"),
        num(
            "cumulativeTxRx24G",
            "smartzone_ap_cumulativeTxRx24G",
            "SmartZone AP 2.4GHz cumulative traffic",
        ),
        num(
            "cumulativeTxRx5G",
            "smartzone_ap_cumulativeTxRx5G",
            "SmartZone AP 5GHz cumulative traffic",
        ),
        num(
            "cumulativeTxRx6G",
            "smartzone_ap_cumulativeTxRx6G",
            "SmartZone AP 6GHz cumulative traffic",
        ),
        flag("isDual5gMode", "smartzone_ap_isDual5gMode", "SmartZone AP dual 5GHz mode"),
    ],
};

// ── AP summaries (alarms) ────────────────────────────────────────────

pub static AP_SUMMARIES: ResourceFamily = ResourceFamily {
    name: "ap_summary",
    path: "aps/lineman",
    mode: QueryMode::List,
    shape: ResponseShape::List,
    identity: &[field("ap_name", "name"), field("ap_mac", "mac")],
    fields: &[
        text("location", "smartzone_aps_location", "SmartZone AP location"),
        text("configState", "smartzone_aps_configState", "SmartZone AP configState"),
        nested(
            "alarms",
            "criticalCount",
            "smartzone_aps_alarms_criticalCount",
            "SmartZone AP criticalCount alarm",
        ),
        nested(
            "alarms",
            "majorCount",
            "smartzone_aps_alarms_majorCount",
            "SmartZone AP majorCount alarms",
        ),
        nested(
            "alarms",
            "minorCount",
            "smartzone_aps_alarms_minorCount",
            "SmartZone AP minorCount alarms",
        ),
        nested(
            "alarms",
            "warningCount",
            "smartzone_aps_alarms_warningCount",
            "SmartZone AP warningCount alarm",
        ),
    ],
};

// ── Domains ──────────────────────────────────────────────────────────

pub static DOMAINS: ResourceFamily = ResourceFamily {
    name: "domain",
    path: "domains",
    mode: QueryMode::List,
    shape: ResponseShape::List,
    identity: &[field("domain_id", "id"), field("domain_name", "name")],
    fields: &[
        text("domainType", "smartzone_domain_type", "SmartZone Domain type"),
        text(
            "parentDomainId",
            "smartzone_domain_parentDomainId",
            "SmartZone Domain parent domain ID",
        ),
        num(
            "subDomainCount",
            "smartzone_domain_subDomainCount",
            "SmartZone Domain sub domain numbers",
        ),
        num("apCount", "smartzone_domain_apCount", "SmartZone Domain total count of APs"),
        num("zoneCount", "smartzone_domain_zoneCount", "SmartZone Domain count of zones"),
    ],
};

// ── Licenses ─────────────────────────────────────────────────────────

pub static LICENSES: ResourceFamily = ResourceFamily {
    name: "license",
    path: "licenses",
    mode: QueryMode::List,
    shape: ResponseShape::List,
    identity: &[field("license_name", "name")],
    fields: &[
        text(
            "description",
            "smartzone_license_description",
            "SmartZone License description",
        ),
        num("count", "smartzone_license_count", "SmartZone License count"),
        text(
            "createTime",
            "smartzone_license_createTime",
            "SmartZone License created date",
        ),
        text(
            "expireDate",
            "smartzone_license_expireDate",
            "SmartZone License expire date",
        ),
    ],
};

/// Every family, in collection order.
pub static ALL: [&ResourceFamily; 9] = [
    &CONTROLLER,
    &SYSTEM_STATS,
    &CLUSTER_SUMMARY,
    &ZONES,
    &WLANS,
    &ACCESS_POINTS,
    &AP_SUMMARIES,
    &DOMAINS,
    &LICENSES,
];
