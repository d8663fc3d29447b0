use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use course_service::domain::auth::service::AuthService;
use course_service::domain::course::errors::CourseError;
use course_service::domain::course::models::Course;
use course_service::domain::course::models::CourseId;
use course_service::domain::course::models::UpdateCourseCommand;
use course_service::domain::course::ports::CourseRepository;
use course_service::domain::course::service::CourseService;
use course_service::domain::user::models::EmailAddress;
use course_service::domain::user::models::User;
use course_service::domain::user::models::UserId;
use course_service::domain::user::ports::UserRepository;
use course_service::domain::user::service::UserService;
use course_service::inbound::http::router::create_router;
use course_service::outbound::repositories::PostgresCourseRepository;
use course_service::outbound::repositories::PostgresUserRepository;
use course_service::user::errors::UserError;
use serde_json::json;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store; the mutex makes the email check and insert one step,
/// like a unique index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }
}

/// In-memory course store enforcing unique levels.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<HashMap<CourseId, Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, CourseError> {
        let mut courses = self.courses.lock().unwrap();

        if courses.values().any(|c| c.level == course.level) {
            return Err(CourseError::LevelAlreadyExists(course.level.to_string()));
        }

        courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseError> {
        let mut courses: Vec<Course> = self.courses.lock().unwrap().values().cloned().collect();
        courses.sort_by(|a, b| a.level.as_str().cmp(b.level.as_str()));
        Ok(courses)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError> {
        Ok(self.courses.lock().unwrap().get(id).cloned())
    }

    async fn update(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError> {
        let mut courses = self.courses.lock().unwrap();

        let mut course = courses
            .get(id)
            .cloned()
            .ok_or(CourseError::NotFound(id.to_string()))?;
        command.apply_to(&mut course);

        if courses
            .values()
            .any(|c| c.id != course.id && c.level == course.level)
        {
            return Err(CourseError::LevelAlreadyExists(course.level.to_string()));
        }

        courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), CourseError> {
        self.courses
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(CourseError::NotFound(id.to_string()))
    }
}

/// Backing store of a spawned application
pub enum Store {
    InMemory(Arc<InMemoryUserRepository>),
    Postgres(TestDb),
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub store: Store,
}

impl TestApp {
    /// Spawn the application over in-memory repositories
    pub async fn spawn() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let courses = Arc::new(InMemoryCourseRepository::default());

        let address = serve(Arc::clone(&users), courses).await;

        Self::new(address, Store::InMemory(users))
    }

    /// Spawn the application over the PostgreSQL repositories of a test database
    pub async fn spawn_with_postgres(db: TestDb) -> Self {
        let users = Arc::new(PostgresUserRepository::new(db.pool.clone()));
        let courses = Arc::new(PostgresCourseRepository::new(db.pool.clone()));

        let address = serve(users, courses).await;

        Self::new(address, Store::Postgres(db))
    }

    fn new(address: String, store: Store) -> Self {
        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            store,
        }
    }

    /// Number of stored user records
    pub async fn user_count(&self) -> usize {
        match &self.store {
            Store::InMemory(users) => users.count(),
            Store::Postgres(db) => {
                let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(&db.pool)
                    .await
                    .expect("Failed to count users");
                count as usize
            }
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register an account and return the response
    pub async fn register(
        &self,
        fname: &str,
        lname: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/auth/register")
            .json(&json!({
                "fname": fname,
                "lname": lname,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Decode a token issued by the app
    pub fn subject_of(&self, token: &str) -> String {
        self.jwt_handler
            .decode::<Claims>(token)
            .expect("Token issued by the app should verify")
            .sub
    }
}

/// Wire the services over the given repositories and serve them on a random port
async fn serve<UR, CR>(users: Arc<UR>, courses: Arc<CR>) -> String
where
    UR: UserRepository,
    CR: CourseRepository,
{
    // Use random port (0 = OS assigns)
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let user_service = Arc::new(UserService::new(users));
    let auth_service = Arc::new(AuthService::new(
        user_service,
        Arc::new(Authenticator::new(JWT_SECRET)),
        24,
    ));
    let course_service = Arc::new(CourseService::new(courses));

    let router = create_router(auth_service, course_service);

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    format!("http://127.0.0.1:{}", port)
}

/// Test database helper
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    server_url: String,
}

impl TestDb {
    /// Create a fresh migrated database on the server named by `DATABASE_URL`.
    ///
    /// Returns `None` when `DATABASE_URL` is not set, so PostgreSQL-backed
    /// tests are skipped on machines without a server.
    pub async fn from_env() -> Option<Self> {
        match std::env::var("DATABASE_URL") {
            Ok(server_url) => Some(Self::new(server_url).await),
            Err(_) => {
                eprintln!("DATABASE_URL not set, skipping PostgreSQL-backed test");
                None
            }
        }
    }

    /// Create a new test database with a unique name
    pub async fn new(server_url: String) -> Self {
        let db_name = format!(
            "test_course_service_{}",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let mut conn = PgConnection::connect(&server_url)
            .await
            .expect("Failed to connect to Postgres");

        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = server_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            db_name,
            server_url,
        }
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Database cleanup happens asynchronously
        let db_name = self.db_name.clone();
        let server_url = self.server_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&server_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;

                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}
