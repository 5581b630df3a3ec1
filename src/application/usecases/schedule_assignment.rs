//! 과제 배정 유스케이스.

use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::Reporter;
use crate::application::usecases::lock_registry;
use crate::domain::registry::{Registry, ScheduleStatus};

/// 교실 과제 목록 끝에 과제 내용을 추가한다. 중복 제거는 하지 않는다.
pub struct ScheduleAssignmentUseCase<'a> {
    pub registry: &'a Mutex<Registry>,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ScheduleAssignmentUseCase<'a> {
    pub fn execute(&self, class_name: &str, details: &str) -> Result<()> {
        tracing::debug!(class = class_name, "schedule_assignment");

        let status = lock_registry(self.registry)?.schedule_assignment(class_name, details);
        let line = match status {
            ScheduleStatus::Scheduled => format!("Assignment for {class_name} has been scheduled."),
            ScheduleStatus::UnknownClassroom => format!("Classroom {class_name} does not exist."),
        };

        self.reporter.line(&line);
        Ok(())
    }
}
