use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// What a programmer works on. The `Ord` derive follows declaration order,
/// which is also the sort order exposed by the list endpoints.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, DbEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Responsibility {
    #[default]
    Backend,
    Frontend,
    Fullstack,
    Devops,
    Tester,
}
