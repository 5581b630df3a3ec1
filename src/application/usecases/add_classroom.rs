//! 교실 생성 유스케이스.

use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::Reporter;
use crate::application::usecases::lock_registry;
use crate::domain::registry::{CreateStatus, Registry};

/// 새 교실을 레지스트리에 등록하고 결과를 상태 라인으로 보고한다.
pub struct AddClassroomUseCase<'a> {
    pub registry: &'a Mutex<Registry>,
    pub reporter: &'a dyn Reporter,
}

impl<'a> AddClassroomUseCase<'a> {
    pub fn execute(&self, class_name: &str) -> Result<()> {
        tracing::debug!(class = class_name, "add_classroom");

        let status = lock_registry(self.registry)?.create_classroom(class_name);
        let line = match status {
            CreateStatus::Created => format!("Classroom {class_name} has been created."),
            CreateStatus::AlreadyExists => format!("Classroom {class_name} already exists."),
        };

        self.reporter.line(&line);
        Ok(())
    }
}
