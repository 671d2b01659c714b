pub mod doctor;
pub mod render;
pub mod save;
