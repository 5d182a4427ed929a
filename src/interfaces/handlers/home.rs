use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile form API",
        "status": "Ok",
        "name": state.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "profile": "/api/v1/profile",
            "check": "/api/v1/profile/check",
            "health": "/api/v1/health"
        }
    }))
}
