use std::fmt;

/// Connection string for the document service.
///
/// The value is opaque: it is handed to the driver as-is. `Display` masks the
/// userinfo section so the target can be logged without leaking credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionTarget(String);

impl ConnectionTarget {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn redacted(&self) -> String {
        let Some(scheme_end) = self.0.find("://") else {
            return self.0.clone();
        };
        let rest_start = scheme_end + 3;
        let rest = &self.0[rest_start..];
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{}***{}", &self.0[..rest_start], &rest[at..]),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionTarget").field(&self.redacted()).finish()
    }
}

impl From<String> for ConnectionTarget {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl From<&str> for ConnectionTarget {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}
