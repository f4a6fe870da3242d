//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::session::InputMode;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "KORCONV_CONFIG";

/// korconv 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KorconvConfig {
    /// 모음 없이 입력된 복합 자음(ㄳ, ㅄ 등)을 한 글자로 변환할지 여부
    #[serde(default)]
    pub allow_compound_consonant: bool,
    /// 입력 세션 시작 모드
    #[serde(default = "default_initial_mode")]
    pub initial_mode: InputMode,
}

fn default_initial_mode() -> InputMode {
    InputMode::Korean
}

impl Default for KorconvConfig {
    fn default() -> Self {
        Self {
            allow_compound_consonant: false,
            initial_mode: default_initial_mode(),
        }
    }
}

/// 설정 파일 경로: $KORCONV_CONFIG, 없으면 ~/.config/korconv/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("korconv").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KorconvConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &std::path::Path) -> KorconvConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            KorconvConfig::default()
        }),
        Err(_) => KorconvConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &KorconvConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &KorconvConfig, path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
