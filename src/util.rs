use tracing_subscriber::{fmt, EnvFilter};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// Environment file resolution:
/// - An explicit path via ENV_FILE wins
/// - Otherwise standard ".env" discovery in the current working directory
/// - Absence of both is fine; variables may come from the process environment
pub fn init_tracing() {
    let mut env_source: String = "none".into();
    if let Ok(p) = std::env::var("ENV_FILE") {
        let p = p.trim();
        if !p.is_empty() && std::path::Path::new(p).is_file() && dotenvy::from_filename(p).is_ok() {
            env_source = format!("{p} (ENV_FILE)");
        }
    }
    if env_source == "none" && dotenvy::dotenv().is_ok() {
        env_source = ".env".into();
    }

    // Initialize tracing (respects RUST_LOG potentially provided by the env file)
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Build an HTTP client honoring proxy and timeout environment variables.
///
/// Environment:
/// - DIFY_NO_PROXY = 1|true|yes|on       -> disable all proxies
/// - DIFY_PROXY_URL = <url>              -> proxy for all schemes
/// - HTTP_PROXY / http_proxy             -> HTTP proxy
/// - HTTPS_PROXY / https_proxy           -> HTTPS proxy
/// - DIFY_HTTP_TIMEOUT_SECONDS           -> overall request timeout (u64)
pub fn build_http_client_from_env() -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    // Optional timeout
    if let Ok(secs) = std::env::var("DIFY_HTTP_TIMEOUT_SECONDS") {
        if let Ok(n) = secs.trim().parse::<u64>() {
            builder = builder.timeout(std::time::Duration::from_secs(n));
        }
    }

    // Proxy configuration
    let no_proxy = std::env::var("DIFY_NO_PROXY")
        .map(|v| v.trim().to_ascii_lowercase())
        .map(|v| v == "1" || v == "true" || v == "yes" || v == "on")
        .unwrap_or(false);

    if no_proxy {
        builder = builder.no_proxy();
    } else {
        // All-scheme proxy
        if let Ok(url) = std::env::var("DIFY_PROXY_URL") {
            let u = url.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::all(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        // Scheme-specific proxies
        if let Ok(http_p) = std::env::var("HTTP_PROXY").or_else(|_| std::env::var("http_proxy")) {
            let u = http_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::http(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        if let Ok(https_p) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("https_proxy"))
        {
            let u = https_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::https(u) {
                    builder = builder.proxy(p);
                }
            }
        }
    }

    // User-Agent for observability
    builder = builder.user_agent(format!("dify-probe/{}", env!("CARGO_PKG_VERSION")));

    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
