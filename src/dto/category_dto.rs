use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category labels keyed by id; serialized as a JSON object.
pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl From<CategoryMap> for CategoriesResponse {
    fn from(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}
