use crate::{
    database::JsonDatabase,
    models::{LoginRequest, RegisterRequest, User, UserInfo},
    utils::{hash_password, next_id, verify_password, AppError},
};

pub const COLLECTION: &str = "users";

fn email_taken(users: &[User], email: &str) -> bool {
    users.iter().any(|u| u.email == email)
}

// User registration
pub async fn register(
    db: &JsonDatabase,
    request: &RegisterRequest,
    bcrypt_cost: u32,
) -> Result<UserInfo, AppError> {
    let collection = db.collection::<User>(COLLECTION);

    // Cheap check first so a duplicate never pays for a bcrypt round
    if email_taken(&collection.read_all().await?, &request.email) {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password = hash_password(request.password.clone(), bcrypt_cost).await?;

    let user = collection
        .mutate(|users| {
            // Re-checked under the lock: another registration may have landed
            if email_taken(users, &request.email) {
                return Err(AppError::Conflict("Email already registered".to_string()));
            }

            let user = User {
                id: next_id(users.iter().map(|u| u.id.as_str())),
                name: request.name.clone(),
                email: request.email.clone(),
                password,
            };
            users.push(user.clone());
            Ok(user)
        })
        .await?;

    log::info!("✅ User registered successfully: {} (id {})", user.email, user.id);

    Ok(user.into())
}

// User login
pub async fn login(db: &JsonDatabase, request: &LoginRequest) -> Result<UserInfo, AppError> {
    let users = db.collection::<User>(COLLECTION).read_all().await?;

    for user in users.into_iter().filter(|u| u.email == request.email) {
        if verify_password(request.password.clone(), user.password.clone()).await? {
            return Ok(user.into());
        }
    }

    Err(AppError::Unauthorized("Invalid credentials".to_string()))
}
