//! 이메일 입력 검증과 도메인 추출.

use thiserror::Error;

/// 이메일 형식 오류. 입력창을 invalid로 표시하고 다시 입력받는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is empty")]
    Empty,
    #[error("'{0}' is not a valid email")]
    Malformed(String),
}

/// 앞뒤 공백을 제거한 뒤 이메일 형식을 검사하고 정규화된 값을 반환한다.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::Malformed(email.to_string()));
    };

    if !is_valid_local_part(local) || !is_valid_domain(domain) {
        return Err(ValidationError::Malformed(email.to_string()));
    }

    Ok(email.to_string())
}

/// 마지막 `@` 이후를 소문자 도메인으로 반환한다.
pub fn email_domain(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_ascii_lowercase())
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty()
        || !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }

    // host 부분이 비어있지 않고, TLD는 2자 이상의 영문이어야 한다.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses_and_trims() {
        assert_eq!(validate_email("  bob@acme.com \n").unwrap(), "bob@acme.com");
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
        assert!(validate_email("A_B%c-d@Sub-Domain.ACME.IO").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(validate_email("   "), Err(ValidationError::Empty));
        for raw in [
            "not-an-email",
            "@acme.com",
            "bob@",
            "bob@acme",
            "bob@acme.c",
            "bob@acme.c0m",
            "bob@@acme.com",
            "bo b@acme.com",
            "bob@.com",
        ] {
            assert!(
                matches!(validate_email(raw), Err(ValidationError::Malformed(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn extracts_lowercased_domain() {
        assert_eq!(email_domain("bob@ACME.com").as_deref(), Some("acme.com"));
        assert_eq!(email_domain("bob"), None);
        assert_eq!(email_domain("bob@"), None);
    }
}
