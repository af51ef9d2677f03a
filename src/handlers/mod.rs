pub mod health;
pub mod palettes;
pub mod projects;
