use serde::{Deserialize, Serialize};

/// A name plus the URL where the full record lives. The list endpoint
/// returns these; detail fetches are driven off the `name` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// An unnamed reference, e.g. a species record pointing at its
/// evolution chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// One page of a paginated list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}
