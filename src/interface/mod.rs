//! Interface layer
//! CLI 인자 해석과 대화형 쉘/스크립트 진입점을 담당한다.

pub mod cli;
