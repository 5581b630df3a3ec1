//! Domain layer
//! 교실/수강/과제 규칙을 외부 의존성 없이 표현한다.

pub mod classroom;
pub mod command;
pub mod registry;
