use crate::models::ErrorResponse;
use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    HttpResponse,
};
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// Serves the web bundle at `/`. Paths with no matching file get
/// `index.html` so client-side routes survive a reload.
pub fn bundle(static_dir: &Path) -> Files {
    let index = static_dir.join(INDEX_FILE);

    Files::new("/", static_dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move { spa_fallback(req, index).await }
        }))
}

async fn spa_fallback(
    req: ServiceRequest,
    index: PathBuf,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();

    let response = match NamedFile::open_async(&index).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            log::warn!("Web bundle not found at {}: {}", index.display(), e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Web bundle not found".to_string(),
            })
        }
    };

    Ok(ServiceResponse::new(req, response))
}
