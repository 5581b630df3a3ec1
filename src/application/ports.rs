//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;

use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
    fn editable_config_path(&self) -> Result<PathBuf>;
}

/// 콘솔 출력 추상화 포트.
/// `line`은 명령 프로토콜의 상태 라인(stdout 1줄), `notice`는
/// 프로토콜 외 안내 출력이다.
pub trait Reporter: Send + Sync {
    fn line(&self, text: &str);
    fn notice(&self, text: &str);
}
