//! 레지스트리 명령 값 객체와 구문 오류 타입.

use thiserror::Error;

/// 파싱이 끝난 레지스트리 명령 한 건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClassroom {
        class_name: String,
    },
    AddStudent {
        student_id: String,
        class_name: String,
    },
    ScheduleAssignment {
        class_name: String,
        details: String,
    },
    SubmitAssignment {
        student_id: String,
        class_name: String,
        details: String,
    },
}

/// 필수 토큰이 빠진 명령 구문 오류.
/// 도메인 조건(교실 없음 등)은 오류가 아니라 상태 메시지로 처리되므로
/// 이 타입은 토큰 개수 위반만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Class name is required.")]
    ClassNameRequired,
    #[error("Student ID and class name are required.")]
    StudentAndClassRequired,
    #[error("Class name and assignment details are required.")]
    ClassAndDetailsRequired,
    #[error("Student ID, class name, and assignment details are required.")]
    SubmitFieldsRequired,
}
