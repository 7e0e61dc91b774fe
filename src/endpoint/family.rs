use crate::endpoint::error::RouteError;
use std::fmt;
use std::str::FromStr;

/// The four wire conventions the upstream API Hub exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EndpointFamily {
    /// Fixed-width text endpoints, `<root>/<name>.php`.
    LegacyQuery,
    /// CGI endpoints, `<root>/<name>` without an extension.
    CgiQuery,
    /// Paginated REST endpoints, `<root>/<Service>/<method>`.
    OpenApiQuery,
    /// Image-producing CGI endpoints under their own root.
    ImageQuery,
}

impl EndpointFamily {
    pub const ALL: [EndpointFamily; 4] = [
        EndpointFamily::LegacyQuery,
        EndpointFamily::CgiQuery,
        EndpointFamily::OpenApiQuery,
        EndpointFamily::ImageQuery,
    ];

    /// Production root for the family, always ending in `/`.
    pub fn default_root(&self) -> &'static str {
        match self {
            EndpointFamily::LegacyQuery => "https://apihub.kma.go.kr/api/typ01/url/",
            EndpointFamily::CgiQuery => "https://apihub.kma.go.kr/api/typ01/cgi-bin/url/",
            EndpointFamily::OpenApiQuery => "https://apihub.kma.go.kr/api/typ02/openApi/",
            EndpointFamily::ImageQuery => "https://apihub.kma.go.kr/api/typ03/cgi/",
        }
    }

    pub fn requires_pagination(&self) -> bool {
        matches!(self, EndpointFamily::OpenApiQuery)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointFamily::LegacyQuery => "legacy",
            EndpointFamily::CgiQuery => "cgi",
            EndpointFamily::OpenApiQuery => "openapi",
            EndpointFamily::ImageQuery => "image",
        }
    }
}

impl fmt::Display for EndpointFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointFamily {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EndpointFamily::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RouteError::UnknownFamily(s.to_string()))
    }
}
