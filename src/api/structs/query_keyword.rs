use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryKeyword {
    pub keyword: Option<String>,
}
