//! 수강생 등록 유스케이스.

use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::Reporter;
use crate::application::usecases::lock_registry;
use crate::domain::registry::{EnrollStatus, Registry};

/// 수강생을 지정 교실에 등록한다. 재등록은 조용히 멱등 처리된다.
pub struct EnrollStudentUseCase<'a> {
    pub registry: &'a Mutex<Registry>,
    pub reporter: &'a dyn Reporter,
}

impl<'a> EnrollStudentUseCase<'a> {
    pub fn execute(&self, student_id: &str, class_name: &str) -> Result<()> {
        tracing::debug!(student = student_id, class = class_name, "add_student");

        let status = lock_registry(self.registry)?.enroll_student(student_id, class_name);
        let line = match status {
            EnrollStatus::Enrolled => {
                format!("Student {student_id} has been enrolled in {class_name}.")
            }
            EnrollStatus::UnknownClassroom => format!("Classroom {class_name} does not exist."),
        };

        self.reporter.line(&line);
        Ok(())
    }
}
