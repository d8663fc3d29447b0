pub mod course;
pub mod user;

pub use course::PostgresCourseRepository;
pub use user::PostgresUserRepository;
