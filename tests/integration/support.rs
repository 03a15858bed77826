use barstat::CommandRunner;
use std::cell::RefCell;
use std::collections::HashMap;

/// Runner answering from canned output keyed by the full command line
#[derive(Default)]
pub struct FakeRunner {
    outputs: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.trim().to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> String {
        let mut command = program.to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        self.calls.borrow_mut().push(command.clone());
        self.outputs.get(&command).cloned().unwrap_or_default()
    }
}

pub const DOCKER_RUNNING: &str = "docker info --format {{.ContainersRunning}}";
pub const DOCKER_TOTAL: &str = "docker info --format {{.Containers}}";
pub const DOCKER_NAMES: &str = "docker ps --format {{.Names}}";

pub const KUBE_CONTEXT: &str = "kubectl config current-context";
pub const KUBE_NAMESPACES: &str =
    "kubectl get namespaces --no-headers -o custom-columns=:metadata.name";
pub const KUBE_PODS: &str = "kubectl get pods --all-namespaces --no-headers -o custom-columns=NAMESPACE:.metadata.namespace,NAME:.metadata.name,STATUS:.status.phase";
pub const KUBE_NODES: &str = "kubectl get nodes --no-headers";
pub const KUBE_DEPLOYMENTS: &str = "kubectl get deployments --all-namespaces --no-headers -o custom-columns=NAMESPACE:.metadata.namespace,NAME:.metadata.name,READY:.status.readyReplicas,TOTAL:.status.replicas";
