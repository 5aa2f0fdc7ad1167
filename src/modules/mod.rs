pub mod auth;
pub mod students;
pub mod teachers;

pub use self::students::model::StudentResponse;
pub use self::teachers::model::TeacherProfile;
