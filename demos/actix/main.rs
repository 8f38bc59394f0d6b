mod cors;
mod routes;

use actix_web::{App, HttpServer, web};
use cors::middleware::HttpCors;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_state = cors::build_state();

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(HttpCors::new(state.cors.clone()))
            .route("/hello", web::get().to(routes::hello))
    })
    .bind(("127.0.0.1", 3002))?
    .run()
    .await
}
