//! Status-bar views built from collected data.
//!
//! Each view turns one collection result into a [`StatusOutput`]. Views are
//! pure: the same input always renders the same output.

use crate::core::cluster::{ClusterReport, ClusterSnapshot, ClusterSummary};
use crate::core::config::{is_system_namespace, LIST_LIMIT};
use crate::core::docker::ContainerSummary;
use crate::utils::icons::{BULLET, DOCKER, KUBERNETES};

use super::formatters::{format_pod_counts, overflow_line, shorten_context};
use super::status::{Severity, StatusOutput};

const NO_CONTEXT: &str = "Kubernetes: No context";

fn docker_line(containers: &ContainerSummary) -> String {
    format!(
        "Docker: {}/{} running",
        containers.running, containers.total
    )
}

/// Detailed container view with the running container names
pub fn docker_view(containers: &ContainerSummary) -> StatusOutput {
    let mut lines = vec![docker_line(containers)];

    if containers.names.is_empty() {
        lines.push("No containers running".to_string());
    } else {
        lines.push(String::new());
        lines.push("Running containers:".to_string());
        for name in containers.visible_names() {
            lines.push(format!("  {} {}", BULLET, name));
        }
        lines.extend(overflow_line(containers.names.len()));
    }

    StatusOutput::new(format!("{} {}", DOCKER, containers.running), &lines)
}

/// Detailed cluster view
pub fn cluster_view(report: &ClusterReport<ClusterSnapshot>) -> StatusOutput {
    let Some(snapshot) = report.connected() else {
        return StatusOutput::new(format!("{} -", KUBERNETES), &[NO_CONTEXT.to_string()]);
    };
    let totals = snapshot.totals;

    let mut lines = vec![
        format!("Context: {}", snapshot.context),
        format!("Nodes: {}", snapshot.nodes_ready),
        format!("Pods: {} running", totals.running),
    ];
    if totals.pending > 0 {
        lines.push(format!("      {} pending", totals.pending));
    }
    if totals.failed > 0 {
        lines.push(format!("      {} failed", totals.failed));
    }

    let deployments: Vec<_> = snapshot
        .deployments
        .iter()
        .filter(|d| !is_system_namespace(&d.namespace))
        .collect();
    if !deployments.is_empty() {
        lines.push(String::new());
        lines.push("Deployments:".to_string());
        for dep in deployments.iter().take(LIST_LIMIT) {
            lines.push(format!(
                "  {}/{}: {}/{}",
                dep.namespace, dep.name, dep.ready, dep.total
            ));
        }
        lines.extend(overflow_line(deployments.len()));
    }

    let namespace_lines: Vec<String> = snapshot
        .namespaces
        .iter()
        .filter_map(|ns| {
            let pods = snapshot.pods_by_namespace.get(ns)?;
            if pods.is_empty() || (is_system_namespace(ns) && !pods.has_problems()) {
                return None;
            }
            Some(format!("  {}: {}", ns, format_pod_counts(pods)))
        })
        .collect();
    if !namespace_lines.is_empty() {
        lines.push(String::new());
        lines.push("Namespaces:".to_string());
        lines.extend(namespace_lines);
    }

    StatusOutput::new(format!("{} {}", KUBERNETES, totals.running), &lines)
        .with_class(Severity::from_counts(totals.pending, totals.failed))
}

/// Compact container plus cluster view
pub fn combined_view(
    containers: &ContainerSummary,
    report: &ClusterReport<ClusterSummary>,
) -> StatusOutput {
    let mut lines = vec![docker_line(containers)];

    let Some(cluster) = report.connected() else {
        lines.push(NO_CONTEXT.to_string());
        return StatusOutput::new(format!("{} {}", DOCKER, containers.running), &lines);
    };
    let totals = cluster.totals;

    lines.push(format!("Context: {}", cluster.context));
    lines.push(format!("Pods Running: {}", totals.running));
    if totals.pending > 0 {
        lines.push(format!("Pods Pending: {}", totals.pending));
    }
    if totals.failed > 0 {
        lines.push(format!("Pods Failed: {}", totals.failed));
    }

    let text = format!(
        "{} {} {} {} ({})",
        DOCKER,
        containers.running,
        KUBERNETES,
        totals.running,
        shorten_context(&cluster.context)
    );

    StatusOutput::new(text, &lines).with_class(Severity::from_counts(totals.pending, totals.failed))
}
