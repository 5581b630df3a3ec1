//! 명령 스크립트 실행기.
//! 파일의 각 라인을 REPL과 동일한 디스패치 경로로 적용한다.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl::{LineOutcome, apply_line};

/// 스크립트 파일을 한 줄씩 실행한다. `exit`를 만나면 중단한다.
pub fn run_script(composition: &AppComposition, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script at {}", path.display()))?;

    for line in raw.lines() {
        if apply_line(composition, line)? == LineOutcome::Exit {
            break;
        }
    }

    Ok(())
}
