//! Cluster state gathered from `kubectl`.
//!
//! Pods are bucketed by phase into running, pending and failed. Phases
//! outside those buckets (e.g. `Succeeded`, `Unknown`) are not counted.

use std::collections::BTreeMap;

use log::debug;

use super::runner::{non_empty_lines, CommandRunner};

const POD_COLUMNS: &str =
    "custom-columns=NAMESPACE:.metadata.namespace,NAME:.metadata.name,STATUS:.status.phase";
const DEPLOYMENT_COLUMNS: &str = "custom-columns=NAMESPACE:.metadata.namespace,NAME:.metadata.name,READY:.status.readyReplicas,TOTAL:.status.replicas";

/// Bucket a pod phase falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodPhase {
    Running,
    Pending,
    Failed,
}

impl PodPhase {
    pub fn classify(status: &str) -> Option<Self> {
        match status {
            "Running" => Some(PodPhase::Running),
            "Pending" => Some(PodPhase::Pending),
            "Failed" | "Error" | "CrashLoopBackOff" => Some(PodPhase::Failed),
            _ => None,
        }
    }
}

/// Pod names in one namespace, grouped by phase bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodStatusCounts {
    pub running: Vec<String>,
    pub pending: Vec<String>,
    pub failed: Vec<String>,
}

impl PodStatusCounts {
    fn push(&mut self, phase: PodPhase, pod: String) {
        match phase {
            PodPhase::Running => self.running.push(pod),
            PodPhase::Pending => self.pending.push(pod),
            PodPhase::Failed => self.failed.push(pod),
        }
    }

    /// Whether any pod here needs attention
    pub fn has_problems(&self) -> bool {
        !self.pending.is_empty() || !self.failed.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty() && !self.has_problems()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentStatus {
    pub namespace: String,
    pub name: String,
    pub ready: u32,
    pub total: u32,
}

/// Aggregate pod totals across all namespaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PodTotals {
    pub running: usize,
    pub pending: usize,
    pub failed: usize,
}

/// Everything the detailed cluster view needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSnapshot {
    pub context: String,
    pub nodes_ready: u32,
    pub namespaces: Vec<String>,
    pub pods_by_namespace: BTreeMap<String, PodStatusCounts>,
    pub deployments: Vec<DeploymentStatus>,
    pub totals: PodTotals,
}

/// Context plus pod totals, for the compact combined view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSummary {
    pub context: String,
    pub totals: PodTotals,
}

/// Result of a cluster collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterReport<T> {
    NoContext,
    Connected(T),
}

impl<T> ClusterReport<T> {
    pub fn connected(&self) -> Option<&T> {
        match self {
            ClusterReport::NoContext => None,
            ClusterReport::Connected(data) => Some(data),
        }
    }
}

/// Parse `NAMESPACE NAME STATUS` lines into per-namespace buckets and totals
pub fn parse_pods(text: &str) -> (BTreeMap<String, PodStatusCounts>, PodTotals) {
    let mut by_namespace: BTreeMap<String, PodStatusCounts> = BTreeMap::new();
    let mut totals = PodTotals::default();

    for line in non_empty_lines(text) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let (namespace, pod, status) = (parts[0], parts[1], parts[2]);

        let Some(phase) = PodPhase::classify(status) else {
            continue;
        };
        match phase {
            PodPhase::Running => totals.running += 1,
            PodPhase::Pending => totals.pending += 1,
            PodPhase::Failed => totals.failed += 1,
        }
        by_namespace
            .entry(namespace.to_string())
            .or_default()
            .push(phase, pod.to_string());
    }

    (by_namespace, totals)
}

/// Count nodes whose STATUS column starts with `Ready`
pub fn parse_ready_nodes(text: &str) -> u32 {
    non_empty_lines(text)
        .filter(|line| {
            line.split_whitespace()
                .nth(1)
                .and_then(|status| status.split(',').next())
                == Some("Ready")
        })
        .count() as u32
}

/// Parse `NAMESPACE NAME READY TOTAL` lines; `<none>` replica counts become 0
pub fn parse_deployments(text: &str) -> Vec<DeploymentStatus> {
    non_empty_lines(text)
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return None;
            }
            Some(DeploymentStatus {
                namespace: parts[0].to_string(),
                name: parts[1].to_string(),
                ready: parse_replicas(parts[2]),
                total: parse_replicas(parts[3]),
            })
        })
        .collect()
}

fn parse_replicas(value: &str) -> u32 {
    if value == "<none>" {
        0
    } else {
        value.parse().unwrap_or(0)
    }
}

pub fn parse_namespaces(text: &str) -> Vec<String> {
    non_empty_lines(text).map(str::to_string).collect()
}

fn current_context(runner: &dyn CommandRunner) -> Option<String> {
    let context = runner.run("kubectl", &["config", "current-context"]);
    if context.is_empty() {
        debug!("kubectl: no current context");
        None
    } else {
        Some(context)
    }
}

fn fetch_pods(runner: &dyn CommandRunner) -> String {
    runner.run(
        "kubectl",
        &["get", "pods", "--all-namespaces", "--no-headers", "-o", POD_COLUMNS],
    )
}

/// Collect the full snapshot used by the detailed cluster view
pub fn collect_snapshot(runner: &dyn CommandRunner) -> ClusterReport<ClusterSnapshot> {
    let Some(context) = current_context(runner) else {
        return ClusterReport::NoContext;
    };

    let namespaces = parse_namespaces(&runner.run(
        "kubectl",
        &[
            "get",
            "namespaces",
            "--no-headers",
            "-o",
            "custom-columns=:metadata.name",
        ],
    ));
    let (pods_by_namespace, totals) = parse_pods(&fetch_pods(runner));
    let nodes_ready = parse_ready_nodes(&runner.run("kubectl", &["get", "nodes", "--no-headers"]));
    let deployments = parse_deployments(&runner.run(
        "kubectl",
        &[
            "get",
            "deployments",
            "--all-namespaces",
            "--no-headers",
            "-o",
            DEPLOYMENT_COLUMNS,
        ],
    ));

    debug!(
        "kubectl: context={} nodes={} namespaces={} deployments={} pods={:?}",
        context,
        nodes_ready,
        namespaces.len(),
        deployments.len(),
        totals
    );

    ClusterReport::Connected(ClusterSnapshot {
        context,
        nodes_ready,
        namespaces,
        pods_by_namespace,
        deployments,
        totals,
    })
}

/// Collect just the context and pod totals
pub fn collect_summary(runner: &dyn CommandRunner) -> ClusterReport<ClusterSummary> {
    let Some(context) = current_context(runner) else {
        return ClusterReport::NoContext;
    };

    let (_, totals) = parse_pods(&fetch_pods(runner));
    ClusterReport::Connected(ClusterSummary { context, totals })
}
