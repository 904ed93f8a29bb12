//! Generation prompt construction
//!
//! Builds the natural-language task description sent to the generation agent.
//! The prompt carries everything the agent needs to work unattended: the
//! service's identity and stack, the coverage gap to close, and (when the
//! record has a codebase wired up) where to find the code and place tests.

use covhub_core::domain::service::Service;

/// Build the instruction prompt for a generation session on `service`
pub fn build_prompt(service: &Service) -> String {
    let test_path_instruction = if service.codebase_path.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nCodebase location: {path}\n\
             Test directory: {path}/src/test/java/\n\
             Place new test files following the package structure in src/main/java/. \
             Use JUnit 5 annotations (@Test, @BeforeEach, etc.). \
             Run tests with: mvn test",
            path = service.codebase_path
        )
    };

    format!(
        "You are an AI agent helping the DevEx team improve test coverage.\n\n\
         Service: {name}\n\
         Team: {team}\n\
         Tech stack: {stack}\n\
         Current coverage: {coverage}% | Target coverage: {goal}%\n\
         Status: {status}\n\
         Risk level: {risk}\n\
         {path_instruction}\n\n\
         TASK: Generate comprehensive unit and integration tests to increase coverage from \
         {coverage}% to {goal}%. Focus on:\n\
         1. Critical business logic paths\n\
         2. Edge cases and boundary conditions\n\
         3. Exception handling scenarios\n\
         4. Validation logic\n\
         5. Fixing any existing failing or incorrect tests\n\n\
         Review existing test files first to understand patterns, then add missing coverage.\n\n\
         IMPORTANT - COMMIT MESSAGE REQUIREMENTS:\n\
         When you commit the test files, your commit message MUST include:\n\
         1. A complete numbered list of all test cases you created\n\
         2. The specific classes/methods each test targets\n\
         3. What scenarios each test covers\n\
         4. The final coverage percentage achieved\n\n\
         Example commit message format:\n\
         ```\n\
         test: Increase {name} coverage from {coverage}% to {goal}%\n\n\
         Test cases added:\n\
         1. InterestCalculatorTest.testNegativeRate() - validates negative rate rejection\n\
         2. InterestCalculatorTest.testMaxPrincipal() - tests upper boundary (MAX_VALUE)\n\
         [...continue for all tests...]\n\n\
         Coverage improvements:\n\
         - InterestCalculator: 15% -> 92%\n\
         ```",
        name = service.name,
        team = service.team,
        stack = service.tech_stack,
        coverage = service.coverage,
        goal = service.goal,
        status = service.status.as_str(),
        risk = service.deprecation_risk.as_str(),
        path_instruction = test_path_instruction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use covhub_core::domain::service::{DeprecationRisk, ServiceStatus};

    fn sample_service(codebase_path: &str) -> Service {
        Service {
            id: 1,
            name: "Payments API".to_string(),
            team: "Payments Platform".to_string(),
            tech_stack: "Java/Spring Boot".to_string(),
            coverage: 22,
            goal: 80,
            last_updated: chrono::Utc::now(),
            status: ServiceStatus::AtRisk,
            deprecation_risk: DeprecationRisk::Medium,
            codebase_path: codebase_path.to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_identifying_fields() {
        let prompt = build_prompt(&sample_service(""));

        assert!(prompt.contains("Service: Payments API"));
        assert!(prompt.contains("Team: Payments Platform"));
        assert!(prompt.contains("Tech stack: Java/Spring Boot"));
        assert!(prompt.contains("Current coverage: 22% | Target coverage: 80%"));
        assert!(prompt.contains("Status: at-risk"));
        assert!(prompt.contains("Risk level: medium"));
    }

    #[test]
    fn test_prompt_without_codebase_path_omits_location() {
        let prompt = build_prompt(&sample_service(""));
        assert!(!prompt.contains("Codebase location:"));
        assert!(!prompt.contains("Test directory:"));
    }

    #[test]
    fn test_prompt_with_codebase_path_includes_test_directory() {
        let prompt = build_prompt(&sample_service("banking-services/payments-service"));

        assert!(prompt.contains("Codebase location: banking-services/payments-service"));
        assert!(prompt.contains("Test directory: banking-services/payments-service/src/test/java/"));
        assert!(prompt.contains("mvn test"));
    }

    #[test]
    fn test_prompt_states_coverage_task() {
        let prompt = build_prompt(&sample_service(""));
        assert!(prompt.contains("increase coverage from 22% to 80%"));
    }
}
