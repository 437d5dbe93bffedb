use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod auth;
mod catalog;
mod db;
mod domain;
mod errors;
mod kv;
mod responses;
mod router;
mod templates;


fn main() {
    let db = Database::new("kvartira.sqlite3");

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
