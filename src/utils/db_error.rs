/// Name of the unique index guarding `url_mappings.shortened_id`.
pub const SHORTENED_ID_CONSTRAINT: &str = "url_mappings_shortened_id_key";

pub fn is_unique_violation_on_shortened_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORTENED_ID_CONSTRAINT))
}
