//! 레지스트리 연산과 설정 관리 유스케이스 모음.

mod add_classroom;
mod edit_config;
mod enroll_student;
mod inspect_config;
mod schedule_assignment;
mod submit_assignment;

use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};

use crate::domain::registry::Registry;

pub use add_classroom::AddClassroomUseCase;
pub use edit_config::EditConfigUseCase;
pub use enroll_student::EnrollStudentUseCase;
pub use inspect_config::InspectConfigUseCase;
pub use schedule_assignment::ScheduleAssignmentUseCase;
pub use submit_assignment::SubmitAssignmentUseCase;

// 레지스트리 뮤테이션은 한 번에 하나씩만 진행된다.
pub(crate) fn lock_registry(registry: &Mutex<Registry>) -> Result<MutexGuard<'_, Registry>> {
    registry
        .lock()
        .map_err(|_| anyhow!("registry state poisoned"))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use crate::application::ports::Reporter;

    /// 상태 라인을 수집하는 테스트용 리포터.
    #[derive(Default)]
    pub struct RecordingReporter {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Reporter for RecordingReporter {
        fn line(&self, text: &str) {
            self.lines.lock().unwrap().push(text.to_string());
        }

        fn notice(&self, _text: &str) {}
    }
}
