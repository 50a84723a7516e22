use sea_query::Iden;

/// Device-local key/value storage for identity data.
#[derive(Iden, Clone)]
pub enum SecureStore {
    Table,
    Key,
    Value,
    UpdatedAt,
}
