use anyhow::Result;
use scribe_core::application::{
    ports::{
        session::SessionAuthenticator,
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceDependencies},
};
use scribe_core::config::AppConfig;
use scribe_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scribe_core::infrastructure::{
    database,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    security::{
        redis_session_store::RedisSessionStore, session_authenticator::SignedSessionAuthenticator,
        session_signer::SessionSigner, session_store::SessionStore,
    },
    time::SystemClock,
    util::{DefaultSlugGenerator, ObjectIdGenerator},
};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let signer = SessionSigner::new(config.session_secret())?;
    let session_store: Arc<dyn SessionStore> =
        Arc::new(RedisSessionStore::from_url(config.redis_url())?);
    let session_authenticator: Arc<dyn SessionAuthenticator> =
        Arc::new(SignedSessionAuthenticator::new(signer, session_store));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let ids: Arc<dyn IdGenerator> = Arc::new(ObjectIdGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        article_write_repo,
        article_read_repo,
        session_authenticator,
        categories: config.categories().clone(),
        clock,
        slugger,
        ids,
    }));

    let state = HttpState {
        services,
        session_cookie_name: Arc::from(config.session_cookie_name()),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
