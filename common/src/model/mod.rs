pub mod credentials;
pub mod image;
pub mod student;
pub mod teacher;
pub mod video;
