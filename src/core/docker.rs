use log::debug;

use super::config::LIST_LIMIT;
use super::runner::{non_empty_lines, parse_count, CommandRunner};

/// Container counts reported by the container runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSummary {
    pub running: u32,
    pub total: u32,
    /// Names of running containers, only filled by [`collect_detailed`]
    pub names: Vec<String>,
}

impl ContainerSummary {
    /// Names shown in the tooltip
    pub fn visible_names(&self) -> &[String] {
        &self.names[..self.names.len().min(LIST_LIMIT)]
    }

    /// How many names did not fit in the tooltip
    pub fn hidden_count(&self) -> usize {
        self.names.len().saturating_sub(LIST_LIMIT)
    }
}

/// Collect running and total container counts
pub fn collect(runner: &dyn CommandRunner) -> ContainerSummary {
    let running = parse_count(&runner.run(
        "docker",
        &["info", "--format", "{{.ContainersRunning}}"],
    ));
    let total = parse_count(&runner.run("docker", &["info", "--format", "{{.Containers}}"]));

    debug!("docker: {}/{} containers running", running, total);

    ContainerSummary {
        running,
        total,
        names: Vec::new(),
    }
}

/// Collect counts plus the names of running containers
pub fn collect_detailed(runner: &dyn CommandRunner) -> ContainerSummary {
    let mut summary = collect(runner);
    let names = runner.run("docker", &["ps", "--format", "{{.Names}}"]);
    summary.names = non_empty_lines(&names).map(str::to_string).collect();
    summary
}
