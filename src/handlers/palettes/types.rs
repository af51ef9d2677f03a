use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema, sqlx::FromRow)]
pub struct Palette {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
}
