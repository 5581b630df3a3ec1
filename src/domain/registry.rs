//! 교실 레지스트리. 이름 → 교실 매핑과 최상위 연산을 소유한다.

use std::collections::HashMap;

use crate::domain::classroom::{Classroom, SubmitOutcome};

/// 프로세스 수명 동안 모든 교실을 관리하는 최상위 집합체.
/// 한번 생성된 이름은 삭제/개명되지 않는다.
#[derive(Debug, Default)]
pub struct Registry {
    classrooms: HashMap<String, Classroom>,
}

/// 교실 생성 결과. 중복 생성은 오류가 아니라 상태로 보고한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollStatus {
    Enrolled,
    UnknownClassroom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Scheduled,
    UnknownClassroom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Submitted,
    UnknownClassroom,
    NotEnrolled,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 교실을 등록한다. 이미 있으면 기존 상태를 그대로 둔다.
    pub fn create_classroom(&mut self, name: &str) -> CreateStatus {
        if self.classrooms.contains_key(name) {
            return CreateStatus::AlreadyExists;
        }

        self.classrooms
            .insert(name.to_string(), Classroom::new(name));
        CreateStatus::Created
    }

    /// 수강생을 교실에 등록한다. 교실이 없으면 아무것도 바꾸지 않는다.
    pub fn enroll_student(&mut self, student_id: &str, class_name: &str) -> EnrollStatus {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            return EnrollStatus::UnknownClassroom;
        };

        classroom.enroll(student_id);
        EnrollStatus::Enrolled
    }

    /// 교실에 과제를 배정한다. 동일 내용도 매번 새 항목으로 기록한다.
    pub fn schedule_assignment(&mut self, class_name: &str, details: &str) -> ScheduleStatus {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            return ScheduleStatus::UnknownClassroom;
        };

        classroom.schedule_assignment(details);
        ScheduleStatus::Scheduled
    }

    /// 과제 제출을 기록한다. 등록 여부 검증은 교실에 위임한다.
    pub fn submit_assignment(
        &mut self,
        student_id: &str,
        class_name: &str,
        details: &str,
    ) -> SubmitStatus {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            return SubmitStatus::UnknownClassroom;
        };

        match classroom.submit(student_id, details) {
            SubmitOutcome::Recorded => SubmitStatus::Submitted,
            SubmitOutcome::NotEnrolled => SubmitStatus::NotEnrolled,
        }
    }

    pub fn classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    pub fn classroom_count(&self) -> usize {
        self.classrooms.len()
    }
}
