use super::support::*;
use barstat::commands::StatusView;
use barstat::ui::Severity;

#[test]
fn test_combined_without_context() {
    let runner = FakeRunner::new()
        .with(DOCKER_RUNNING, "3")
        .with(DOCKER_TOTAL, "8");

    let output = StatusView::Combined.render(&runner);
    assert_eq!(output.text, "🐳 3");
    assert_eq!(output.tooltip, "Docker: 3/8 running\nKubernetes: No context");
    assert_eq!(output.class, None);
    assert!(!runner.calls().iter().any(|call| call == KUBE_PODS));
}

#[test]
fn test_combined_with_context() {
    let runner = FakeRunner::new()
        .with(DOCKER_RUNNING, "1")
        .with(DOCKER_TOTAL, "2")
        .with(KUBE_CONTEXT, "minikube")
        .with(KUBE_PODS, "default  web  Running\ndefault  job  Pending");

    let output = StatusView::Combined.render(&runner);
    assert_eq!(output.text, "🐳 1 ☸ 1 (minikube)");
    assert_eq!(
        output.tooltip,
        "Docker: 1/2 running\nContext: minikube\nPods Running: 1\nPods Pending: 1"
    );
    assert_eq!(output.class, Some(Severity::Warning));
}

#[test]
fn test_combined_only_queries_pods() {
    let runner = FakeRunner::new().with(KUBE_CONTEXT, "minikube");
    StatusView::Combined.render(&runner);

    let calls = runner.calls();
    assert!(calls.iter().any(|call| call == KUBE_PODS));
    assert!(!calls.iter().any(|call| call == KUBE_NODES));
    assert!(!calls.iter().any(|call| call == KUBE_DEPLOYMENTS));
    assert!(!calls.iter().any(|call| call == KUBE_NAMESPACES));
    assert!(!calls.iter().any(|call| call == DOCKER_NAMES));
}

#[test]
fn test_context_truncation_in_text() {
    let long = "abcdefghijklmnop";
    assert_eq!(long.len(), 16);

    let runner = FakeRunner::new().with(KUBE_CONTEXT, long);
    let output = StatusView::Combined.render(&runner);
    assert_eq!(output.text, "🐳 0 ☸ 0 (abcdefghijkl...)");
    assert!(output.tooltip.contains("Context: abcdefghijklmnop"));

    let runner = FakeRunner::new().with(KUBE_CONTEXT, "abcdefghijklmno");
    let output = StatusView::Combined.render(&runner);
    assert_eq!(output.text, "🐳 0 ☸ 0 (abcdefghijklmno)");
}
