//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::{ConfigRepository, Reporter};
use crate::application::usecases::{
    AddClassroomUseCase, EditConfigUseCase, EnrollStudentUseCase, InspectConfigUseCase,
    ScheduleAssignmentUseCase, SubmitAssignmentUseCase,
};
use crate::domain::registry::Registry;
use crate::infrastructure::adapters::{ConsoleReporter, JsonConfigRepository};
use crate::infrastructure::config::Config;

/// 실행 시점 의존성과 레지스트리 상태를 한 곳에서 조립하는 컨테이너.
/// 레지스트리는 전역 싱글턴이 아니라 이 컨테이너가 소유하는 값이다.
pub struct AppComposition {
    registry: Mutex<Registry>,
    config_repo: JsonConfigRepository,
    reporter: Box<dyn Reporter>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new()
    }
}

impl AppComposition {
    pub fn new() -> Self {
        Self::with_reporter(Box::new(ConsoleReporter))
    }

    /// 리포터 어댑터를 외부에서 주입한다.
    pub fn with_reporter(reporter: Box<dyn Reporter>) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            config_repo: JsonConfigRepository,
            reporter,
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn load_config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    /// 교실 생성 유스케이스를 생성한다.
    pub fn add_classroom_usecase(&self) -> AddClassroomUseCase<'_> {
        AddClassroomUseCase {
            registry: &self.registry,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 수강생 등록 유스케이스를 생성한다.
    pub fn enroll_student_usecase(&self) -> EnrollStudentUseCase<'_> {
        EnrollStudentUseCase {
            registry: &self.registry,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 과제 배정 유스케이스를 생성한다.
    pub fn schedule_assignment_usecase(&self) -> ScheduleAssignmentUseCase<'_> {
        ScheduleAssignmentUseCase {
            registry: &self.registry,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 과제 제출 유스케이스를 생성한다.
    pub fn submit_assignment_usecase(&self) -> SubmitAssignmentUseCase<'_> {
        SubmitAssignmentUseCase {
            registry: &self.registry,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정 편집 유스케이스를 생성한다.
    pub fn edit_config_usecase(&self) -> EditConfigUseCase<'_> {
        EditConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
