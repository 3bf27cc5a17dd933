use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::authentication::register_account;
use crate::configuration::{AdminSettings, Settings};
use crate::domain::Username;
use crate::routes::{
    get_contact, get_newsletter, health_check, json_error_handler, post_contact, post_newsletter,
};
use crate::storage::MemStorage;

/// Whether the listing endpoints require Basic credentials.
pub struct ListingProtection(pub bool);

pub struct Application {
    port: u16,
    server: Server,
    store: web::Data<MemStorage>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store = web::Data::new(MemStorage::new());

        if let Some(admin) = configuration.admin {
            seed_admin(&store, admin).await?;
        }

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {address}"))?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            store.clone(),
            ListingProtection(configuration.application.protect_listings),
        )?;

        Ok(Self {
            port,
            server,
            store,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle on the store the server was started with.
    pub fn store(&self) -> web::Data<MemStorage> {
        self.store.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

#[tracing::instrument(name = "Seed admin account", skip_all, fields(username = %admin.username))]
async fn seed_admin(store: &MemStorage, admin: AdminSettings) -> Result<(), anyhow::Error> {
    let username = Username::parse(admin.username).map_err(anyhow::Error::msg)?;
    let account = register_account(store, username, admin.password).await?;
    tracing::info!(account_id = account.id, "Admin account created");
    Ok(())
}

pub fn run(
    listener: TcpListener,
    store: web::Data<MemStorage>,
    listing_protection: ListingProtection,
) -> Result<Server, std::io::Error> {
    let listing_protection = web::Data::new(listing_protection);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(post_contact))
            .route("/api/contact", web::get().to(get_contact))
            .route("/api/newsletter", web::post().to(post_newsletter))
            .route("/api/newsletter", web::get().to(get_newsletter))
            .app_data(store.clone())
            .app_data(listing_protection.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
