//! 설정 스키마와 탐색/병합 규칙.
//! 설정은 대화형 쉘 표시 옵션만 다룬다. 데이터 모델 자체는 설정 대상이 아니다.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_PROMPT: &str = "classpilot> ";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 대화형 쉘 표시 옵션
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ShellConfig {
    /// 입력 프롬프트 라벨
    pub prompt: Option<String>,
    /// 시작 배너 표시 여부(기본 true)
    pub banner: Option<bool>,
}

impl Config {
    /// 우선순위 경로를 병합해 설정을 로딩한다. 파일이 하나도 없으면 기본값.
    pub fn load() -> Result<Self> {
        Ok(load_merged_config()?.config)
    }

    /// 탐색 경로와 유효 설정을 담은 점검용 JSON을 생성한다.
    pub fn inspect_pretty_json() -> Result<String> {
        let loaded = load_merged_config()?;
        let effective = &loaded.config;

        let report = json!({
            "searched_paths": loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
            "loaded_paths": loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
            "effective": {
                "prompt": effective.prompt(),
                "banner": effective.banner_enabled(),
            },
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// 편집 대상 설정 파일 경로를 결정한다.
    /// 로딩된 파일 중 최고 우선순위 경로를 반환하고,
    /// 로딩된 파일이 없으면 `.classpilot/config.json`을 생성한다.
    pub fn editable_path() -> Result<PathBuf> {
        if let Ok(loaded) = load_merged_config()
            && let Some(last) = loaded.loaded_paths.last()
        {
            return Ok(last.clone());
        }

        let fallback = PathBuf::from(".classpilot/config.json");
        if let Some(parent) = fallback.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&fallback, "{}\n").with_context(|| {
            format!("failed to create default config at {}", fallback.display())
        })?;
        Ok(fallback)
    }

    /// 유효 프롬프트 라벨.
    pub fn prompt(&self) -> &str {
        self.shell.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// 시작 배너 표시 여부.
    pub fn banner_enabled(&self) -> bool {
        self.shell.banner.unwrap_or(true)
    }

    /// 더 높은 우선순위 설정으로 필드 단위 덮어쓰기.
    fn merge_from(&mut self, other: Config) {
        if other.shell.prompt.is_some() {
            self.shell.prompt = other.shell.prompt;
        }
        if other.shell.banner.is_some() {
            self.shell.banner = other.shell.banner;
        }
    }
}

#[derive(Debug, Clone)]
struct LoadedConfig {
    config: Config,
    searched_paths: Vec<PathBuf>,
    loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
fn load_merged_config() -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let paths = config_paths();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 기본 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/classpilot/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("classpilot").join("config.json"));
    }

    paths.push(PathBuf::from(".classpilot/config.json"));

    if let Ok(path) = env::var("CLASSPILOT_CONFIG") {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
