use anyhow::{Context, Result};

use crate::core::{cluster, docker, CommandRunner, SystemRunner};
use crate::ui::{cluster_view, combined_view, docker_view, StatusOutput};

/// Status bar modules barstat can print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    /// Containers with the names of the running ones
    Docker,
    /// Cluster with per-namespace and deployment breakdowns
    Kubernetes,
    /// Containers and cluster pod totals on one line
    Combined,
}

impl StatusView {
    /// Subcommand name on the command line
    pub fn name(&self) -> &'static str {
        match self {
            StatusView::Docker => "docker",
            StatusView::Kubernetes => "k8s",
            StatusView::Combined => "docker-k8s",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            StatusView::Docker => "Print container status as status bar JSON",
            StatusView::Kubernetes => "Print cluster status as status bar JSON",
            StatusView::Combined => "Print container and cluster status on one line",
        }
    }

    pub fn all() -> [StatusView; 3] {
        [
            StatusView::Docker,
            StatusView::Kubernetes,
            StatusView::Combined,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|view| view.name() == name)
    }

    /// Collect fresh data through `runner` and render it
    pub fn render(&self, runner: &dyn CommandRunner) -> StatusOutput {
        match self {
            StatusView::Docker => docker_view(&docker::collect_detailed(runner)),
            StatusView::Kubernetes => cluster_view(&cluster::collect_snapshot(runner)),
            StatusView::Combined => {
                let containers = docker::collect(runner);
                let report = cluster::collect_summary(runner);
                combined_view(&containers, &report)
            }
        }
    }
}

pub fn execute(view: StatusView) -> Result<()> {
    let output = view.render(&SystemRunner::default());
    let line = output
        .to_json()
        .with_context(|| format!("Failed to serialize {} status", view.name()))?;
    println!("{}", line);
    Ok(())
}
