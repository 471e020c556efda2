// ABOUTME: Property tests for container name resolution and health normalization.
// ABOUTME: Checks separator stripping, first-match and not-found behavior over generated listings.

use container_health::health::{HealthDetails, HealthError, display_name, normalize, resolve};
use container_health::runtime::{
    ContainerDetail, ContainerStateInfo, ContainerSummary, HealthBlock, HealthProbe,
};
use container_health::types::ContainerId;
use proptest::prelude::*;

fn summary(index: usize, name: &str) -> ContainerSummary {
    ContainerSummary {
        id: ContainerId::new(format!("id-{index}")),
        names: vec![format!("/{name}")],
        state: "running".to_string(),
        status: "Up 1 minute".to_string(),
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,15}"
}

proptest! {
    #[test]
    fn slash_prefixed_name_resolves_without_slash(
        names in prop::collection::vec(name_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let containers: Vec<_> = names.iter().enumerate().map(|(i, n)| summary(i, n)).collect();
        let target = &names[pick.index(names.len())];

        let id = resolve(target, &containers).unwrap();

        // First container in listing order carrying the name.
        let first = names.iter().position(|n| n == target).unwrap();
        prop_assert_eq!(id.as_str(), format!("id-{first}"));
    }

    #[test]
    fn absent_name_is_always_not_found(
        names in prop::collection::vec(name_strategy(), 0..30),
        query in "[A-Z][A-Z0-9]{0,8}",
    ) {
        let containers: Vec<_> = names.iter().enumerate().map(|(i, n)| summary(i, n)).collect();

        match resolve(&query, &containers) {
            Err(HealthError::NotFound(name)) => prop_assert_eq!(name, query),
            other => prop_assert!(false, "expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn display_name_strips_at_most_one_separator(name in "/{0,3}[a-z]{1,8}") {
        let stripped = display_name(&name);
        prop_assert_eq!(stripped.len() + usize::from(name.starts_with('/')), name.len());
    }

    #[test]
    fn fallback_status_is_never_empty(status in "[a-z]{1,10}") {
        let resolved = normalize(
            ContainerDetail {
                id: ContainerId::new("x"),
                state: ContainerStateInfo { status: status.clone(), health: None },
            },
            "svc",
        );

        prop_assert_eq!(&resolved.health_status, &status);
        prop_assert_eq!(resolved.details, HealthDetails::State { status });
    }

    #[test]
    fn health_block_status_wins(
        lifecycle in "(running|restarting|paused)",
        health in "(healthy|unhealthy|starting)",
        probes in 0usize..5,
    ) {
        let block = HealthBlock {
            status: health.clone(),
            failing_streak: 0,
            log: (0..probes)
                .map(|i| HealthProbe {
                    start: format!("t{i}"),
                    end: format!("t{i}"),
                    exit_code: 0,
                    output: String::new(),
                })
                .collect(),
        };
        let resolved = normalize(
            ContainerDetail {
                id: ContainerId::new("x"),
                state: ContainerStateInfo { status: lifecycle, health: Some(block.clone()) },
            },
            "svc",
        );

        prop_assert_eq!(resolved.health_status, health);
        prop_assert_eq!(resolved.details, HealthDetails::Probe(block));
    }
}
