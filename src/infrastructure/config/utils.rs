//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// 플랫폼 기본 URL 열기 명령.
pub fn default_browser_command() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".to_string()]
    } else if cfg!(windows) {
        vec![
            "cmd".to_string(),
            "/C".to_string(),
            "start".to_string(),
            String::new(),
        ]
    } else {
        vec!["xdg-open".to_string()]
    }
}

/// 설정된 브라우저 명령. 비어 있거나 실행 파일이 공백이면 플랫폼 기본값을 쓴다.
pub fn effective_browser_command(configured: Option<&[String]>) -> Vec<String> {
    configured
        .filter(|c| c.first().is_some_and(|p| !p.trim().is_empty()))
        .map(<[String]>::to_vec)
        .unwrap_or_else(default_browser_command)
}

/// 로컬 명령이 실행 가능한지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    if command.trim().is_empty() {
        return false;
    }

    // 경로가 주어지면 파일 존재만 검사한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    #[cfg(windows)]
    {
        let has_ext = command_path.extension().is_some();
        let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
        let exts: Vec<String> = pathext
            .to_string_lossy()
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();

        env::split_paths(&path_var).any(|dir| {
            dir.join(command).is_file()
                || (!has_ext
                    && exts
                        .iter()
                        .any(|ext| dir.join(format!("{command}{ext}")).is_file()))
        })
    }

    #[cfg(not(windows))]
    {
        env::split_paths(&path_var).any(|dir| dir.join(command).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_never_available() {
        assert!(!command_exists("  "));
    }

    #[test]
    fn missing_explicit_path_is_unavailable() {
        assert!(!command_exists("./definitely/not/here"));
    }

    #[test]
    fn default_browser_command_is_not_empty() {
        assert!(!default_browser_command()[0].is_empty());
    }

    #[test]
    fn blank_browser_command_falls_back_to_default() {
        assert_eq!(effective_browser_command(None), default_browser_command());
        assert_eq!(
            effective_browser_command(Some(&[String::new()][..])),
            default_browser_command()
        );
        assert_eq!(
            effective_browser_command(Some(&["  ".to_string(), "x".to_string()][..])),
            default_browser_command()
        );

        let custom = vec!["firefox".to_string(), "--new-tab".to_string()];
        assert_eq!(effective_browser_command(Some(custom.as_slice())), custom);
    }
}
