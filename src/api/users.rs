use actix_web::{web, HttpResponse};

use crate::{
    database::UserStore,
    models::{MessageResponse, User, UserInput},
    services::user_service,
    utils::error::{AppError, ErrorResponse},
};

/// GET /users - Lista todos os usuários na ordem de inserção
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every user record, in insertion order", body = [User])
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(&store)?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id} - Busca o primeiro usuário com o id informado
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The first user with this id", body = User),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::get_user(&store, &id)?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /add-user - Cria um usuário com id gerado pelo servidor
#[utoipa::path(
    post,
    path = "/add-user",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "A required field is missing", body = ErrorResponse)
    )
)]
pub async fn add_user(
    store: web::Data<UserStore>,
    request: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::add_user(&store, request.into_inner())?;
    Ok(HttpResponse::Created().json(user))
}

/// PUT /update-user/{id} - Substitui firstName, lastName e hobby
#[utoipa::path(
    put,
    path = "/update-user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    id: web::Path<String>,
    request: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::update_user(&store, &id, request.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /delete-user/{id} - Remove o primeiro usuário com o id informado
#[utoipa::path(
    delete,
    path = "/delete-user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    user_service::delete_user(&store, &id)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Fallback - Rota ou método não suportado (404)
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound)
}
