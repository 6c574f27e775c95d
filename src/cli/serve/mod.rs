//! Development server.
//!
//! Every page request re-reads the config file and re-renders, so an edit
//! written by `wmsite edit` (or by hand) shows up on the next reload.
//! Requests are handled on a small rayon pool.

mod lifecycle;
mod response;

use crate::{
    config::SiteConfig,
    embed::{self, EmbeddedAsset},
    log,
    logger::{status_error, status_success},
    render::render_page,
};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Worker threads answering requests.
const POOL_THREADS: usize = 4;

/// What a request URL points at.
#[derive(Debug, Clone, Copy)]
enum Route {
    Page,
    Asset(EmbeddedAsset),
    NotFound,
}

impl Route {
    fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        match path {
            "" | "/" | "/index.html" => Self::Page,
            _ => embed::lookup(path).map_or(Self::NotFound, Self::Asset),
        }
    }
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until shutdown).
    pub fn run(self, config: SiteConfig) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(POOL_THREADS)
            .build()
            .context("Failed to create request thread pool")?;
        let config = Arc::new(config);

        for request in self.server.incoming_requests() {
            let config = Arc::clone(&config);
            pool.spawn(move || {
                if let Err(e) = handle_request(request, &config) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
        Ok(())
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }
    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    crate::debug!("serve"; "{} {}", request.method(), request.url());

    match Route::from_url(request.url()) {
        Route::Page => match render_fresh(config) {
            Ok(html) => {
                status_success("page rendered");
                response::respond_page(request, html)
            }
            Err(e) => {
                status_error("render failed", &format!("{e:#}"));
                response::respond_render_error(request, &e)
            }
        },
        Route::Asset(asset) => response::respond_asset(request, asset),
        Route::NotFound => response::respond_not_found(request),
    }
}

/// Re-read the config file and render the page from it.
fn render_fresh(config: &SiteConfig) -> Result<String> {
    let fresh = config.reload()?;
    Ok(render_page(&fresh).html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{IpAddr, Ipv4Addr, TcpStream};
    use std::{fs, thread};
    use tempfile::TempDir;

    #[test]
    fn test_routes() {
        assert!(matches!(Route::from_url("/"), Route::Page));
        assert!(matches!(Route::from_url("/index.html?x=1"), Route::Page));
        assert!(matches!(
            Route::from_url("/assets/site.css"),
            Route::Asset(EmbeddedAsset { path: "assets/site.css", .. })
        ));
        assert!(matches!(Route::from_url("/about"), Route::NotFound));
    }

    fn fetch(config: SiteConfig, raw_request: &str) -> String {
        let (server, _) = lifecycle::bind_with_retry(IpAddr::V4(Ipv4Addr::LOCALHOST), 0).unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        let handle = thread::spawn(move || {
            let request = server.recv().unwrap();
            handle_request(request, &config).unwrap();
        });

        let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
        stream.write_all(raw_request.as_bytes()).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        handle.join().unwrap();
        response
    }

    fn site(dir: &TempDir, content: &str) -> SiteConfig {
        let path = dir.path().join("site.toml");
        fs::write(&path, content).unwrap();
        let mut config = SiteConfig::from_path(&path).unwrap();
        config.config_path = path;
        config.root = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_page_reflects_config_on_disk() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");
        // Written after startup, picked up by the next request
        fs::write(&config.config_path, "[hero]\nheadline = \"Fresh copy\"").unwrap();

        let response = fetch(
            config,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains(r#"data-editable="headline">Fresh copy<"#));
    }

    #[test]
    fn test_broken_config_is_500() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");
        fs::write(&config.config_path, "[hero\nheadline = 1").unwrap();

        let response = fetch(
            config,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 500"));
        assert!(response.contains("Config Error"));
    }

    #[test]
    fn test_missing_path_is_404() {
        let dir = TempDir::new().unwrap();
        let response = fetch(
            site(&dir, ""),
            "GET /nope HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 404"));
    }
}
