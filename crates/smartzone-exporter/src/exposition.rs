//! Prometheus text exposition format (0.0.4).

use std::fmt::Write;

use smartzone_core::{Collection, MetricFamily};

/// Content type of the rendered exposition.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render every family in collection order.
///
/// Families without samples still get their `# HELP` / `# TYPE` lines.
pub fn render(collection: &Collection) -> String {
    let mut out = String::with_capacity(collection.sample_count() * 96);
    for family in collection.families() {
        render_family(&mut out, family);
    }
    out
}

fn render_family(out: &mut String, family: &MetricFamily) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# HELP {} {}", family.name, escape_help(family.help));
    let _ = writeln!(out, "# TYPE {} {}", family.name, family.metric_type);

    for sample in &family.samples {
        out.push_str(family.name);
        if !family.label_names.is_empty() {
            out.push('{');
            for (i, (name, value)) in family.label_names.iter().zip(&sample.labels).enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{name}=\"{}\"", escape_label_value(value));
            }
            out.push('}');
        }
        out.push(' ');
        out.push_str(&format_value(sample.value));
        out.push('\n');
    }
}

/// Escape special characters in label values.
fn escape_label_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape backslashes and newlines in help text.
fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a floating point value for Prometheus.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "+Inf".to_owned()
        } else {
            "-Inf".to_owned()
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smartzone_core::{MetricType, Sample};

    use super::*;

    fn family(name: &'static str, labels: Vec<&'static str>, samples: Vec<(Vec<&str>, f64)>) -> MetricFamily {
        let mut family = MetricFamily::new(name, "Test metric", MetricType::Gauge, labels);
        family.samples = samples
            .into_iter()
            .map(|(labels, value)| Sample {
                metric: name,
                labels: labels.into_iter().map(str::to_owned).collect(),
                value,
            })
            .collect();
        family
    }

    #[test]
    fn renders_help_type_and_samples() {
        let mut collection = Collection::new();
        collection.push_family(family(
            "smartzone_zone_total_aps",
            vec!["zone_name", "zone_id"],
            vec![(vec!["HQ", "z1"], 12.0), (vec!["Branch", "z2"], 3.0)],
        ));

        assert_eq!(
            render(&collection),
            "# HELP smartzone_zone_total_aps Test metric\n\
             # TYPE smartzone_zone_total_aps gauge\n\
             smartzone_zone_total_aps{zone_name=\"HQ\",zone_id=\"z1\"} 12\n\
             smartzone_zone_total_aps{zone_name=\"Branch\",zone_id=\"z2\"} 3\n"
        );
    }

    #[test]
    fn empty_family_keeps_metadata() {
        let mut collection = Collection::new();
        collection.push_family(family("smartzone_license_count", vec!["license_name"], vec![]));
        let text = render(&collection);
        assert_eq!(
            text,
            "# HELP smartzone_license_count Test metric\n# TYPE smartzone_license_count gauge\n"
        );
    }

    #[test]
    fn unlabelled_sample_has_no_braces() {
        let mut collection = Collection::new();
        collection.push_family(family(
            "smartzone_scrape_duration_seconds",
            vec![],
            vec![(vec![], 0.25)],
        ));
        assert!(render(&collection).ends_with("smartzone_scrape_duration_seconds 0.25\n"));
    }

    #[test]
    fn counter_type_is_rendered() {
        let mut collection = Collection::new();
        let mut uptime = family("smartzone_controller_uptime_seconds", vec!["id"], vec![]);
        uptime.metric_type = MetricType::Counter;
        collection.push_family(uptime);
        assert!(render(&collection).contains("# TYPE smartzone_controller_uptime_seconds counter\n"));
    }

    #[test]
    fn label_values_are_escaped() {
        assert_eq!(escape_label_value(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_label_value("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_help("one\ntwo"), "one\\ntwo");
    }

    #[test]
    fn special_float_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "+Inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-1.5), "-1.5");
    }
}
