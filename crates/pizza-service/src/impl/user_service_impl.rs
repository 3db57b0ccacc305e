//! User service implementations.

use crate::dto::{GetUserRequest, LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use pizza_core::{NewUser, PizzaError, PizzaResult};
use pizza_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Generic user service implementation (non-DI).
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn register(&self, request: RegisterRequest) -> PizzaResult<()> {
        register(&*self.user_repository, request).await
    }

    async fn login(&self, request: LoginRequest) -> PizzaResult<()> {
        login(&*self.user_repository, request).await
    }

    async fn get_user(&self, request: GetUserRequest) -> PizzaResult<UserResponse> {
        get_user(&*self.user_repository, request).await
    }

    async fn update_user(&self, request: UpdateUserRequest) -> PizzaResult<()> {
        update_user(&*self.user_repository, request).await
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

/// Concrete user service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn register(&self, request: RegisterRequest) -> PizzaResult<()> {
        register(&*self.user_repository, request).await
    }

    async fn login(&self, request: LoginRequest) -> PizzaResult<()> {
        login(&*self.user_repository, request).await
    }

    async fn get_user(&self, request: GetUserRequest) -> PizzaResult<UserResponse> {
        get_user(&*self.user_repository, request).await
    }

    async fn update_user(&self, request: UpdateUserRequest) -> PizzaResult<()> {
        update_user(&*self.user_repository, request).await
    }
}

async fn register<R: UserRepository + ?Sized>(
    repository: &R,
    request: RegisterRequest,
) -> PizzaResult<()> {
    debug!("Registering user: {}", request.login);

    let user = NewUser::from(request);
    repository.insert(&user).await?;

    info!("User registered: {}", user.login);
    Ok(())
}

async fn login<R: UserRepository + ?Sized>(repository: &R, request: LoginRequest) -> PizzaResult<()> {
    debug!("Login attempt: {}", request.login);

    match repository
        .find_by_credentials(&request.login, &request.password)
        .await
    {
        Ok(Some(_)) => {
            info!("User logged in: {}", request.login);
            Ok(())
        }
        Ok(None) => {
            warn!("Invalid credentials for: {}", request.login);
            Err(PizzaError::InvalidCredentials)
        }
        // Storage failures are reported to the caller as bad credentials too.
        Err(e) => {
            warn!("Login lookup failed for {}: {}", request.login, e);
            Err(PizzaError::InvalidCredentials)
        }
    }
}

async fn get_user<R: UserRepository + ?Sized>(
    repository: &R,
    request: GetUserRequest,
) -> PizzaResult<UserResponse> {
    debug!("Getting user: {}", request.login);

    match repository.find_by_login(&request.login).await {
        Ok(Some(user)) => Ok(UserResponse::from(user)),
        Ok(None) => Err(PizzaError::not_found("User")),
        Err(e) => {
            warn!("User lookup failed for {}: {}", request.login, e);
            Err(PizzaError::not_found("User"))
        }
    }
}

async fn update_user<R: UserRepository + ?Sized>(
    repository: &R,
    request: UpdateUserRequest,
) -> PizzaResult<()> {
    let (login, profile) = request.into_parts();
    debug!("Updating user: {}", login);

    let affected = repository.update_profile(&login, &profile).await?;
    if affected == 0 {
        debug!("Update matched no user: {}", login);
    } else {
        info!("User updated: {}", login);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use pizza_core::{ProfileUpdate, User};

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn insert(&self, user: &NewUser) -> PizzaResult<()>;
            async fn find_by_credentials(&self, login: &str, password: &str) -> PizzaResult<Option<User>>;
            async fn find_by_login(&self, login: &str) -> PizzaResult<Option<User>>;
            async fn update_profile(&self, login: &str, profile: &ProfileUpdate) -> PizzaResult<u64>;
        }
    }

    fn alice() -> User {
        User {
            id: 1,
            login: "alice".to_string(),
            email: "a@x.com".to_string(),
            phone: 555,
            address: "1 Main".to_string(),
        }
    }

    fn service(repo: MockUserRepo) -> UserServiceImpl<MockUserRepo> {
        UserServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_register_inserts_every_field() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert()
            .withf(|user| {
                user.login == "alice"
                    && user.password == "p1"
                    && user.email == "a@x.com"
                    && user.phone == 555
                    && user.address == "1 Main"
            })
            .times(1)
            .returning(|_| Ok(()));

        let request = RegisterRequest {
            login: "alice".to_string(),
            password: "p1".to_string(),
            email: "a@x.com".to_string(),
            phone: 555,
            address: "1 Main".to_string(),
        };
        service(repo).register(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_register_propagates_storage_error() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert()
            .returning(|_| Err(PizzaError::storage("duplicate key value violates unique constraint")));

        let err = service(repo)
            .register(RegisterRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("duplicate key"));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_credentials()
            .withf(|login, password| login == "alice" && password == "p1")
            .returning(|_, _| Ok(Some(alice())));

        let request = LoginRequest {
            login: "alice".to_string(),
            password: "p1".to_string(),
        };
        assert!(service(repo).login(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_no_match_is_invalid_credentials() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_credentials().returning(|_, _| Ok(None));

        let err = service(repo).login(LoginRequest::default()).await.unwrap_err();
        assert!(matches!(err, PizzaError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_storage_error_is_invalid_credentials() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_credentials()
            .returning(|_, _| Err(PizzaError::storage("connection reset")));

        let err = service(repo).login(LoginRequest::default()).await.unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_get_user() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_login()
            .withf(|login| login == "alice")
            .returning(|_| Ok(Some(alice())));

        let response = service(repo)
            .get_user(GetUserRequest {
                login: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response, UserResponse::from(alice()));
    }

    #[tokio::test]
    async fn test_get_user_missing_is_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_login().returning(|_| Ok(None));

        let err = service(repo)
            .get_user(GetUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_get_user_storage_error_is_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_login()
            .returning(|_| Err(PizzaError::storage("timeout")));

        let err = service(repo)
            .get_user(GetUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_update_user_writes_zero_values() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_profile()
            .withf(|login, profile| login == "alice" && *profile == ProfileUpdate::default())
            .times(1)
            .returning(|_, _| Ok(1));

        let request = UpdateUserRequest {
            login: "alice".to_string(),
            ..UpdateUserRequest::default()
        };
        service(repo).update_user(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_unknown_user_still_succeeds() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_profile().returning(|_, _| Ok(0));

        assert!(service(repo)
            .update_user(UpdateUserRequest::default())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_user_propagates_storage_error() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_profile()
            .returning(|_, _| Err(PizzaError::storage("value too long")));

        let err = service(repo)
            .update_user(UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
