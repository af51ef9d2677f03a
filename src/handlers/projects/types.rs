use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub name: String,
}
