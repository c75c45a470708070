//! Comic Book Catalog HTTP Handlers
//!
//! `/api/comicbooks` 아래의 CRUD 엔드포인트입니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | `/api/comicbooks` | 200 목록 | - |
//! | GET | `/api/comicbooks/{id}` | 200 레코드 | 404 |
//! | POST | `/api/comicbooks` | 201 + `Location` | 400 (본문 형식) |
//! | PUT | `/api/comicbooks/{id}` | 200 레코드 | 400 (ID 불일치) |
//! | DELETE | `/api/comicbooks/{id}` | 200 (빈 본문) | 404 |
use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::entities::comic_books::comic_book::ComicBook;
use crate::services::comic_books::ComicBookService;

#[get("")]
pub async fn get_comic_books(service: web::Data<ComicBookService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list_comic_books())
}

#[get("/{id}", name = "get_comic_book")]
pub async fn get_comic_book(
    service: web::Data<ComicBookService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let comic_book = service.get_comic_book(id.into_inner())?;
    Ok(HttpResponse::Ok().json(comic_book))
}

/// 코믹북 등록
///
/// 본문의 `id`는 무시되며, 응답의 `Location` 헤더는 새 레코드의 조회 경로입니다.
#[post("")]
pub async fn create_comic_book(
    req: HttpRequest,
    service: web::Data<ComicBookService>,
    payload: web::Json<ComicBook>,
) -> Result<HttpResponse, AppError> {
    let created = service.create_comic_book(payload.into_inner());
    let location = req
        .url_for("get_comic_book", [created.id.to_string()])
        .context("Location 헤더 생성 실패")?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(created))
}

#[put("/{id}")]
pub async fn update_comic_book(
    service: web::Data<ComicBookService>,
    id: web::Path<i32>,
    payload: web::Json<ComicBook>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update_comic_book(id.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_comic_book(
    service: web::Data<ComicBookService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete_comic_book(id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
