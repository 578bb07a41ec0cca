use colored::Colorize;

use crate::{DocumentTarget, Error, Outcome, Platform, Result, TestCase, TestContext, TestLogger};

pub struct Suite {
    cases: Vec<Box<dyn TestCase>>,
    platform: Option<Platform>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Suite {
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            platform: None,
        }
    }

    pub fn from_env() -> Self {
        let mut suite = Self::new();
        suite.platform = Platform::from_env();
        suite
    }

    pub fn set_platform(&mut self, platform: Option<Platform>) {
        self.platform = platform;
    }

    pub fn register(&mut self, case: Box<dyn TestCase>) -> Result<()> {
        if self.cases.iter().any(|existing| existing.name() == case.name()) {
            return Err(Error::DuplicateCase(case.name().to_string()));
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    // Runs every registered case once, in registration order, each against a
    // fresh target from the fixture. A fixture returning None exercises the
    // missing-target path of the case.
    pub fn run<F>(&self, mut fixture: F, logger: &mut dyn TestLogger) -> SuiteReport
    where
        F: FnMut(&str) -> Option<Box<dyn DocumentTarget>>,
    {
        let mut report = SuiteReport::default();
        for case in &self.cases {
            log::debug!("running {}", case.name());
            let mut target = fixture(case.name());
            let mut cx = TestContext::new(&mut *logger).with_platform(self.platform);
            let outcome = case.execute(target.as_deref_mut(), &mut cx);
            log::debug!("{}: {outcome}", case.name());
            match outcome {
                Outcome::Passed => report.passed += 1,
                Outcome::Failed => {
                    report.failed += 1;
                    report.failures.push(case.name().to_string());
                }
            }
        }
        report
    }

    pub fn print_summary(&self, report: &SuiteReport) {
        if report.failures.is_empty() {
            println!("{}", format!("{} tests passed!", report.passed).green().bold());
        } else {
            println!("{}", format!("{} tests failed:", report.failed).red().bold());
            for failure in &report.failures {
                println!("\t{}", failure.red());
            }
        }
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferLogger, ImportNodeDeepUnsupported, MockDocument};

    struct NamedCase {
        name: String,
        outcome: Outcome,
    }

    impl TestCase for NamedCase {
        fn name(&self) -> &str {
            &self.name
        }

        fn execute(
            &self,
            _target: Option<&mut (dyn DocumentTarget + '_)>,
            cx: &mut TestContext<'_>,
        ) -> Outcome {
            cx.log(&format!("{}: {}", self.name, self.outcome));
            self.outcome
        }
    }

    #[test]
    fn register_rejects_a_duplicate_case_name() {
        let mut suite = Suite::new();
        suite
            .register(Box::new(ImportNodeDeepUnsupported::new()))
            .unwrap();
        let result = suite.register(Box::new(ImportNodeDeepUnsupported::new()));
        assert_eq!(
            result,
            Err(Error::DuplicateCase(
                "Document.importNode(node, deep=true) unsupported".into()
            ))
        );
        assert_eq!(suite.len(), 1);
    }

    #[test]
    fn run_aggregates_outcomes_in_registration_order() {
        let mut suite = Suite::new();
        suite
            .register(Box::new(NamedCase {
                name: "first".into(),
                outcome: Outcome::Passed,
            }))
            .unwrap();
        suite
            .register(Box::new(NamedCase {
                name: "second".into(),
                outcome: Outcome::Failed,
            }))
            .unwrap();
        suite
            .register(Box::new(NamedCase {
                name: "third".into(),
                outcome: Outcome::Failed,
            }))
            .unwrap();

        let mut logger = BufferLogger::new();
        let report = suite.run(|_| None, &mut logger);

        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 2);
        assert_eq!(report.total(), 3);
        assert!(!report.all_passed());
        assert_eq!(report.failures, vec!["second".to_string(), "third".to_string()]);
        assert_eq!(logger.lines().len(), 3);
    }

    #[test]
    fn run_hands_each_case_a_fresh_target_from_the_fixture() {
        let mut suite = Suite::new();
        suite
            .register(Box::new(ImportNodeDeepUnsupported::new()))
            .unwrap();

        let mut logger = BufferLogger::new();
        let report = suite.run(
            |_| Some(Box::new(MockDocument::unsupported_import()) as Box<dyn DocumentTarget>),
            &mut logger,
        );
        assert_eq!(report.passed, 1);
        assert!(report.all_passed());
    }

    #[test]
    fn run_with_no_target_reports_the_case_as_failed() {
        let mut suite = Suite::new();
        suite
            .register(Box::new(ImportNodeDeepUnsupported::new()))
            .unwrap();

        let mut logger = BufferLogger::new();
        let report = suite.run(|_| None, &mut logger);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.failures,
            vec!["Document.importNode(node, deep=true) unsupported".to_string()]
        );
    }
}
