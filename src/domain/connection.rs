//! 엔터프라이즈 연결(SSO IdP) 엔티티와 active auth 대상 집합.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("connection name is empty")]
    EmptyName,
    #[error("connection '{0}' has no domains")]
    NoDomains(String),
    #[error("connection '{0}' is defined more than once")]
    Duplicate(String),
}

/// 버튼 표시용 스타일. 매칭 로직에는 관여하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionStyle {
    /// 로그인 버튼 제목 override (`title`로도 지정 가능)
    #[serde(alias = "title")]
    pub login_title: Option<String>,
    /// 가입 버튼 제목 override
    pub signup_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseConnection {
    name: String,
    domains: Vec<String>,
    style: ConnectionStyle,
}

impl EnterpriseConnection {
    /// 이름/도메인이 비어있지 않은 연결만 생성한다.
    pub fn new(
        name: impl Into<String>,
        domains: Vec<String>,
        style: ConnectionStyle,
    ) -> Result<Self, ConnectionError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ConnectionError::EmptyName);
        }

        let domains: Vec<String> = domains
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        if domains.is_empty() {
            return Err(ConnectionError::NoDomains(name));
        }

        Ok(Self {
            name,
            domains,
            style,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn style(&self) -> &ConnectionStyle {
        &self.style
    }

    /// 도메인 목록 중 하나와 대소문자 무시 완전 일치하는지 확인한다.
    pub fn matches_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d.eq_ignore_ascii_case(domain))
    }

    /// 단일 연결 버튼 제목. custom style이 있으면 연결 자체 스타일보다 우선한다.
    /// 제목이 지정되지 않으면 첫 번째 도메인을 표시 이름으로 사용한다.
    pub fn button_title(
        &self,
        custom_styles: &HashMap<String, ConnectionStyle>,
        login: bool,
    ) -> String {
        let style = custom_styles.get(&self.name).unwrap_or(&self.style);
        let display = &self.domains[0];
        let title = if login {
            style
                .login_title
                .clone()
                .unwrap_or_else(|| format!("Log in with {display}"))
        } else {
            style
                .signup_title
                .clone()
                .unwrap_or_else(|| format!("Sign up with {display}"))
        };
        title.to_uppercase()
    }
}

impl std::fmt::Display for EnterpriseConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.domains.join(", "))
    }
}

/// 브라우저 redirect 대신 자격증명 입력(active auth)을 사용하는 연결 이름 집합.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveAuthSet(BTreeSet<String>);

impl ActiveAuthSet {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveAuthSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> EnterpriseConnection {
        EnterpriseConnection::new(
            "acme",
            vec!["acme.com".to_string(), " acme.io ".to_string()],
            ConnectionStyle::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_name_and_domains() {
        assert_eq!(
            EnterpriseConnection::new(" ", vec!["a.com".into()], ConnectionStyle::default()),
            Err(ConnectionError::EmptyName)
        );
        assert_eq!(
            EnterpriseConnection::new("acme", vec!["  ".into()], ConnectionStyle::default()),
            Err(ConnectionError::NoDomains("acme".into()))
        );
    }

    #[test]
    fn domain_match_ignores_case_but_not_suffixes() {
        let conn = acme();
        assert_eq!(conn.domains(), ["acme.com", "acme.io"]);
        assert!(conn.matches_domain("ACME.com"));
        assert!(conn.matches_domain("acme.io"));
        assert!(!conn.matches_domain("mail.acme.com"));
    }

    #[test]
    fn button_title_prefers_custom_style() {
        let conn = acme();
        let mut custom = HashMap::new();
        assert_eq!(conn.button_title(&custom, true), "LOG IN WITH ACME.COM");
        assert_eq!(conn.button_title(&custom, false), "SIGN UP WITH ACME.COM");

        custom.insert(
            "acme".to_string(),
            ConnectionStyle {
                login_title: Some("Acme SSO".into()),
                signup_title: None,
            },
        );
        assert_eq!(conn.button_title(&custom, true), "ACME SSO");
    }

    #[test]
    fn active_auth_membership() {
        let conn = acme();
        assert!(!ActiveAuthSet::default().contains(conn.name()));
        let set: ActiveAuthSet = ["acme"].into_iter().collect();
        assert!(set.contains(conn.name()));
    }
}
