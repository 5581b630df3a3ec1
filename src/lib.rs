//! classpilot library root.
//! Clean Architecture 계층을 외부에 노출한다.

use std::path::Path;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 스크립트 실행 함수.
pub fn run_script(path: &Path) -> Result<()> {
    let composition = AppComposition::default();
    interface::cli::script::run_script(&composition, path)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
