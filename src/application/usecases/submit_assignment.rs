//! 과제 제출 유스케이스.

use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::Reporter;
use crate::application::usecases::lock_registry;
use crate::domain::registry::{Registry, SubmitStatus};

/// 수강생의 과제 제출을 기록한다. 등록 여부 검증은 도메인에 맡긴다.
pub struct SubmitAssignmentUseCase<'a> {
    pub registry: &'a Mutex<Registry>,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SubmitAssignmentUseCase<'a> {
    pub fn execute(&self, student_id: &str, class_name: &str, details: &str) -> Result<()> {
        tracing::debug!(student = student_id, class = class_name, "submit_assignment");

        let status =
            lock_registry(self.registry)?.submit_assignment(student_id, class_name, details);
        let line = match status {
            SubmitStatus::Submitted => {
                format!("Assignment submitted by Student {student_id} in {class_name}.")
            }
            SubmitStatus::UnknownClassroom => format!("Classroom {class_name} does not exist."),
            SubmitStatus::NotEnrolled => {
                format!("Student {student_id} is not enrolled in this class.")
            }
        };

        self.reporter.line(&line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::RecordingReporter;

    fn seeded_registry() -> Mutex<Registry> {
        let mut registry = Registry::new();
        registry.create_classroom("Math");
        registry.enroll_student("S1", "Math");
        Mutex::new(registry)
    }

    #[test]
    fn reports_each_submit_status() {
        let registry = seeded_registry();
        let reporter = RecordingReporter::default();
        let usecase = SubmitAssignmentUseCase {
            registry: &registry,
            reporter: &reporter,
        };

        usecase.execute("S1", "Math", "Homework 1").unwrap();
        usecase.execute("S2", "Math", "Homework 1").unwrap();
        usecase.execute("S1", "Physics", "Homework 1").unwrap();

        assert_eq!(
            reporter.lines(),
            [
                "Assignment submitted by Student S1 in Math.",
                "Student S2 is not enrolled in this class.",
                "Classroom Physics does not exist.",
            ]
        );
    }

    #[test]
    fn rejected_submit_leaves_registry_untouched() {
        let registry = seeded_registry();
        let reporter = RecordingReporter::default();
        let usecase = SubmitAssignmentUseCase {
            registry: &registry,
            reporter: &reporter,
        };

        usecase.execute("S2", "Math", "Homework 1").unwrap();

        let guard = registry.lock().unwrap();
        let classroom = guard.classroom("Math").unwrap();
        assert!(classroom.submissions_of("S2").is_none());
    }
}
