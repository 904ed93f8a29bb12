//! Seed data
//!
//! Fixed set of service records loaded once at startup. Records whose
//! codebases are checked into the monorepo carry a `codebase_path` for the
//! generation agent to target; the rest are tracked metrics-only.

use chrono::{DateTime, Utc};
use covhub_core::domain::service::{DeprecationRisk, Service, ServiceStatus};

fn ts(iso: &str) -> DateTime<Utc> {
    iso.parse().expect("seed timestamp is valid RFC 3339")
}

/// Seed records for the in-memory store
pub fn seed_services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Payments API".to_string(),
            team: "Payments Platform".to_string(),
            tech_stack: "Java/Spring Boot".to_string(),
            coverage: 22,
            goal: 80,
            last_updated: ts("2024-01-15T10:30:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::Medium,
            codebase_path: "banking-services/payments-service".to_string(),
        },
        Service {
            id: 2,
            name: "Mobile App Backend".to_string(),
            team: "Mobile Engineering".to_string(),
            tech_stack: "Node.js/Express".to_string(),
            coverage: 75,
            goal: 80,
            last_updated: ts("2024-01-20T14:22:00Z"),
            status: ServiceStatus::Healthy,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: "banking-services/mobile-app-service".to_string(),
        },
        Service {
            id: 3,
            name: "AML Compliance Module".to_string(),
            team: "Compliance & Risk".to_string(),
            tech_stack: "Python/Django".to_string(),
            coverage: 25,
            goal: 85,
            last_updated: ts("2024-01-10T09:15:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::High,
            codebase_path: "banking-services/compliance-service".to_string(),
        },
        Service {
            id: 4,
            name: "Legacy CRM Adapter".to_string(),
            team: "Enterprise Integration".to_string(),
            tech_stack: "COBOL to Python".to_string(),
            coverage: 10,
            goal: 70,
            last_updated: ts("2023-12-05T16:45:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::High,
            codebase_path: String::new(),
        },
        Service {
            id: 5,
            name: "Account Management Service".to_string(),
            team: "Core Banking".to_string(),
            tech_stack: "Java/Spring Boot".to_string(),
            coverage: 68,
            goal: 75,
            last_updated: ts("2024-01-18T11:20:00Z"),
            status: ServiceStatus::Ip,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: String::new(),
        },
        Service {
            id: 6,
            name: "Transaction Processing Engine".to_string(),
            team: "Payments Platform".to_string(),
            tech_stack: "Go".to_string(),
            coverage: 45,
            goal: 90,
            last_updated: ts("2024-01-12T13:30:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::Medium,
            codebase_path: String::new(),
        },
        Service {
            id: 7,
            name: "Fraud Detection API".to_string(),
            team: "Security & Fraud".to_string(),
            tech_stack: "Python/FastAPI".to_string(),
            coverage: 82,
            goal: 85,
            last_updated: ts("2024-01-22T15:10:00Z"),
            status: ServiceStatus::Healthy,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: String::new(),
        },
        Service {
            id: 8,
            name: "Loan Origination System".to_string(),
            team: "Lending".to_string(),
            tech_stack: ".NET Core".to_string(),
            coverage: 35,
            goal: 80,
            last_updated: ts("2024-01-08T08:45:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::High,
            codebase_path: String::new(),
        },
        Service {
            id: 9,
            name: "Customer Onboarding Portal".to_string(),
            team: "Digital Banking".to_string(),
            tech_stack: "React/Node.js".to_string(),
            coverage: 58,
            goal: 75,
            last_updated: ts("2024-01-19T12:00:00Z"),
            status: ServiceStatus::Ip,
            deprecation_risk: DeprecationRisk::Medium,
            codebase_path: String::new(),
        },
        Service {
            id: 10,
            name: "Credit Scoring Microservice".to_string(),
            team: "Lending".to_string(),
            tech_stack: "Python/Flask".to_string(),
            coverage: 91,
            goal: 85,
            last_updated: ts("2024-01-21T16:30:00Z"),
            status: ServiceStatus::Healthy,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: String::new(),
        },
        Service {
            id: 11,
            name: "Legacy Mainframe Gateway".to_string(),
            team: "Enterprise Integration".to_string(),
            tech_stack: "COBOL/Java Bridge".to_string(),
            coverage: 15,
            goal: 60,
            last_updated: ts("2023-11-20T10:00:00Z"),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::High,
            codebase_path: String::new(),
        },
        Service {
            id: 12,
            name: "Notification Service".to_string(),
            team: "Platform Services".to_string(),
            tech_stack: "Node.js/TypeScript".to_string(),
            coverage: 72,
            goal: 75,
            last_updated: ts("2024-01-17T14:15:00Z"),
            status: ServiceStatus::Healthy,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_count() {
        assert_eq!(seed_services().len(), 12);
    }

    #[test]
    fn test_seed_ids_are_unique_and_positive() {
        let services = seed_services();
        let ids: HashSet<u32> = services.iter().map(|s| s.id).collect();

        assert_eq!(ids.len(), services.len());
        assert!(services.iter().all(|s| s.id > 0));
    }

    #[test]
    fn test_seed_percentages_are_in_range() {
        for service in seed_services() {
            assert!(service.coverage <= 100, "coverage out of range: {}", service.name);
            assert!(service.goal <= 100, "goal out of range: {}", service.name);
        }
    }

    #[test]
    fn test_codebase_paths_point_into_monorepo() {
        let services = seed_services();
        let with_path: Vec<&Service> = services
            .iter()
            .filter(|s| !s.codebase_path.is_empty())
            .collect();

        assert_eq!(with_path.len(), 3);
        for service in with_path {
            assert!(service.codebase_path.starts_with("banking-services/"));
        }
    }
}
